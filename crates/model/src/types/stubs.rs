// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Value type fixtures for tests.

use rstest::fixture;
use rust_decimal::Decimal;

use crate::types::{Currency, Money};

#[fixture]
pub fn usd_1234_56() -> Money {
    Money::from_decimal(Decimal::new(123_456, 2), Currency::USD())
}

#[fixture]
pub fn jpy_1000() -> Money {
    Money::from_decimal(Decimal::new(1000, 0), Currency::JPY())
}

#[fixture]
pub fn eur_negative() -> Money {
    Money::from_decimal(Decimal::new(-98_765_432, 3), Currency::EUR())
}

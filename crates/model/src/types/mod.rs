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

//! Value types of the monetary model: [`Currency`] and [`Money`].
//!
//! Both are small `Copy` values. A [`Money`] pairs an exact [`rust_decimal::Decimal`]
//! amount with an optional currency:
//!
//! | Value                   | Currency | Meaning                                 |
//! |-------------------------|----------|-----------------------------------------|
//! | `Money::default()`      | `None`   | Neutral marker, always zero.            |
//! | `Money::zero(c)`        | `Some`   | Zero in a known currency.               |
//! | `Money::from_decimal()` | `Some`   | Any amount in a known currency.         |
//!
//! Text conversion lives in [`crate::codec`]; `Display` and `FromStr` use the invariant
//! locale.

pub mod currency;
pub mod money;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

// Re-exports
pub use currency::Currency;
pub use money::Money;

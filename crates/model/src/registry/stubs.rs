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

//! Registry fixtures for tests.

use rstest::fixture;

use crate::{registry::CurrencyRegistry, types::Currency};

/// Dollar currencies with distinct prefixed symbols, so only a locale's own symbol "$"
/// resolves to its region currency.
#[fixture]
pub fn registry_dollars() -> CurrencyRegistry {
    CurrencyRegistry::new(
        "dollars",
        [
            Currency::new("USD", "US$", 2, "United States dollar"),
            Currency::CAD(),
            Currency::AUD(),
        ],
    )
}

/// Two currencies sharing the symbol "$".
#[fixture]
pub fn registry_ambiguous() -> CurrencyRegistry {
    CurrencyRegistry::new(
        "ambiguous",
        [
            Currency::USD(),
            Currency::new("MXN", "$", 2, "Mexican peso"),
            Currency::EUR(),
            Currency::JPY(),
        ],
    )
}

/// A registry carrying a symbol that can never be extracted from text.
#[fixture]
pub fn registry_invalid_symbol() -> CurrencyRegistry {
    CurrencyRegistry::new(
        "invalid",
        [Currency::USD(), Currency::new("XTS", "1X", 2, "Test currency")],
    )
}

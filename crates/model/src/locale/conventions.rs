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

//! Serializable locale data: the number and currency conventions of a locale.

use monetary_core::{
    GroupSizes,
    correctness::{check_in_range_inclusive_u8, check_nonempty_string, check_predicate_true},
};
use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::{
    codec::patterns::{CURRENCY_NEGATIVE_PATTERNS, CURRENCY_POSITIVE_PATTERNS},
    types::currency::MAX_DECIMAL_DIGITS,
};

/// The region a locale belongs to, and the currency used there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    /// The region name (e.g., "US", "CH").
    pub name: Ustr,
    /// The code of the currency used in the region.
    pub currency_code: Ustr,
}

impl Region {
    /// Creates a new [`Region`] instance.
    #[must_use]
    pub fn new(name: &str, currency_code: &str) -> Self {
        Self {
            name: Ustr::from(name),
            currency_code: Ustr::from(&currency_code.to_ascii_uppercase()),
        }
    }
}

/// Generic number formatting conventions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberConventions {
    pub decimal_separator: String,
    pub group_separator: String,
    pub group_sizes: GroupSizes,
    pub decimal_digits: u8,
    pub negative_sign: String,
    pub positive_sign: String,
}

/// Currency formatting conventions.
///
/// `positive_pattern` indexes [`CURRENCY_POSITIVE_PATTERNS`] and `negative_pattern`
/// indexes [`CURRENCY_NEGATIVE_PATTERNS`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConventions {
    pub symbol: String,
    pub decimal_separator: String,
    pub group_separator: String,
    pub group_sizes: GroupSizes,
    pub decimal_digits: u8,
    pub negative_sign: String,
    pub positive_sign: String,
    pub positive_pattern: u8,
    pub negative_pattern: u8,
}

/// The complete formatting conventions of a locale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConventions {
    /// The locale name (e.g., "en-US"), empty for the invariant locale.
    pub name: String,
    /// The region of the locale, `None` for neutral and invariant locales.
    pub region: Option<Region>,
    pub number: NumberConventions,
    pub currency: CurrencyConventions,
}

impl LocaleConventions {
    /// Validates the conventions.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A decimal separator, negative sign or the currency symbol is empty.
    /// - A decimal digit count exceeds 28.
    /// - A pattern index is outside its pattern table.
    pub fn validate(&self) -> anyhow::Result<()> {
        check_nonempty_string(&self.number.decimal_separator, "number.decimal_separator")?;
        check_nonempty_string(&self.number.negative_sign, "number.negative_sign")?;
        check_in_range_inclusive_u8(
            self.number.decimal_digits,
            0,
            MAX_DECIMAL_DIGITS,
            "number.decimal_digits",
        )?;

        let currency = &self.currency;
        check_nonempty_string(&currency.symbol, "currency.symbol")?;
        check_nonempty_string(&currency.decimal_separator, "currency.decimal_separator")?;
        check_nonempty_string(&currency.negative_sign, "currency.negative_sign")?;
        check_in_range_inclusive_u8(
            currency.decimal_digits,
            0,
            MAX_DECIMAL_DIGITS,
            "currency.decimal_digits",
        )?;
        check_predicate_true(
            usize::from(currency.positive_pattern) < CURRENCY_POSITIVE_PATTERNS.len(),
            &format!("invalid `currency.positive_pattern` {}", currency.positive_pattern),
        )?;
        check_predicate_true(
            usize::from(currency.negative_pattern) < CURRENCY_NEGATIVE_PATTERNS.len(),
            &format!("invalid `currency.negative_pattern` {}", currency.negative_pattern),
        )?;

        Ok(())
    }
}

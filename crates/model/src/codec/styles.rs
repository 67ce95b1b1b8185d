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

//! Parse styles: which layouts and currency indicator strategies the parser accepts.

use derive_builder::Builder;

/// A validated set of parse switches.
///
/// At least one currency indicator strategy (`allow_currency_code`, `allow_local_symbol`,
/// `allow_unambiguous_symbols`) is always enabled. Use one of the presets, or
/// [`ParseStyles::builder`] for other combinations:
///
/// ```
/// use monetary_model::codec::ParseStyles;
///
/// let styles = ParseStyles::builder()
///     .allow_decimal_point(true)
///     .allow_currency_code(true)
///     .build()
///     .unwrap();
/// assert!(!styles.allow_thousands());
///
/// assert!(ParseStyles::builder().allow_decimal_point(true).build().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Builder)]
#[builder(build_fn(validate = "Self::validate"), derive(Debug))]
pub struct ParseStyles {
    #[builder(default)]
    allow_leading_white: bool,
    #[builder(default)]
    allow_trailing_white: bool,
    #[builder(default)]
    allow_leading_sign: bool,
    #[builder(default)]
    allow_trailing_sign: bool,
    #[builder(default)]
    allow_parentheses: bool,
    #[builder(default)]
    allow_decimal_point: bool,
    #[builder(default)]
    allow_thousands: bool,
    #[builder(default)]
    allow_currency_code: bool,
    #[builder(default)]
    allow_local_symbol: bool,
    #[builder(default)]
    allow_unambiguous_symbols: bool,
}

impl ParseStylesBuilder {
    fn validate(&self) -> Result<(), String> {
        let enabled = |flag: Option<bool>| flag.unwrap_or(false);
        if enabled(self.allow_currency_code)
            || enabled(self.allow_local_symbol)
            || enabled(self.allow_unambiguous_symbols)
        {
            Ok(())
        } else {
            Err("at least one of `allow_currency_code`, `allow_local_symbol` or \
                 `allow_unambiguous_symbols` must be set"
                .to_string())
        }
    }
}

impl ParseStyles {
    const fn with_indicators(code: bool, local_symbol: bool, unambiguous: bool) -> Self {
        Self {
            allow_leading_white: true,
            allow_trailing_white: true,
            allow_leading_sign: true,
            allow_trailing_sign: true,
            allow_parentheses: true,
            allow_decimal_point: true,
            allow_thousands: true,
            allow_currency_code: code,
            allow_local_symbol: local_symbol,
            allow_unambiguous_symbols: unambiguous,
        }
    }

    /// Returns a builder with every switch off.
    #[must_use]
    pub fn builder() -> ParseStylesBuilder {
        ParseStylesBuilder::default()
    }

    /// All number layouts, currency codes only ("USD 1,234.56").
    #[must_use]
    pub const fn currency_code() -> Self {
        Self::with_indicators(true, false, false)
    }

    /// All number layouts, the locale's own currency symbol only ("$1,234.56" in en-US).
    #[must_use]
    pub const fn local_symbol() -> Self {
        Self::with_indicators(false, true, false)
    }

    /// All number layouts, symbols that identify exactly one registered currency.
    #[must_use]
    pub const fn unambiguous_symbols() -> Self {
        Self::with_indicators(false, false, true)
    }

    /// All number layouts, the local symbol or a currency code.
    #[must_use]
    pub const fn local_symbol_or_code() -> Self {
        Self::with_indicators(true, true, false)
    }

    /// All number layouts and every currency indicator strategy.
    #[must_use]
    pub const fn any() -> Self {
        Self::with_indicators(true, true, true)
    }

    #[must_use]
    pub const fn allow_leading_white(&self) -> bool {
        self.allow_leading_white
    }

    #[must_use]
    pub const fn allow_trailing_white(&self) -> bool {
        self.allow_trailing_white
    }

    #[must_use]
    pub const fn allow_leading_sign(&self) -> bool {
        self.allow_leading_sign
    }

    #[must_use]
    pub const fn allow_trailing_sign(&self) -> bool {
        self.allow_trailing_sign
    }

    #[must_use]
    pub const fn allow_parentheses(&self) -> bool {
        self.allow_parentheses
    }

    #[must_use]
    pub const fn allow_decimal_point(&self) -> bool {
        self.allow_decimal_point
    }

    #[must_use]
    pub const fn allow_thousands(&self) -> bool {
        self.allow_thousands
    }

    #[must_use]
    pub const fn allow_currency_code(&self) -> bool {
        self.allow_currency_code
    }

    #[must_use]
    pub const fn allow_local_symbol(&self) -> bool {
        self.allow_local_symbol
    }

    #[must_use]
    pub const fn allow_unambiguous_symbols(&self) -> bool {
        self.allow_unambiguous_symbols
    }
}

impl Default for ParseStyles {
    /// Defaults to [`ParseStyles::currency_code`].
    fn default() -> Self {
        Self::currency_code()
    }
}

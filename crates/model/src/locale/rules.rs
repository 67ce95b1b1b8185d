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

//! Numeric rule sets derived from locale conventions.
//!
//! Every locale yields two rule sets: its native number rules, and currency rules where
//! separators, group sizes, digit count and sign tokens come from the locale's currency
//! conventions instead. Parsing and formatting of monetary text use the currency rules,
//! except where a locale's currency symbol doubles as its decimal separator.

use monetary_core::GroupSizes;

use super::conventions::LocaleConventions;

/// The separators, group sizes and sign tokens used to read or write a number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberRules {
    pub decimal_separator: String,
    /// Empty when digit grouping is unavailable.
    pub group_separator: String,
    pub group_sizes: GroupSizes,
    pub decimal_digits: u8,
    pub negative_sign: String,
    pub positive_sign: String,
}

impl NumberRules {
    /// Returns `true` if `s` starts with this rule set's decimal separator followed by a digit.
    #[must_use]
    pub fn starts_with_fraction(&self, s: &str) -> bool {
        s.strip_prefix(self.decimal_separator.as_str())
            .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_digit()))
    }

    /// Returns `true` if `s` ends with a digit followed by this rule set's decimal separator.
    #[must_use]
    pub fn ends_with_bare_point(&self, s: &str) -> bool {
        s.strip_suffix(self.decimal_separator.as_str())
            .is_some_and(|rest| rest.ends_with(|c: char| c.is_ascii_digit()))
    }

    fn clear_colliding_group_separator(&mut self, locale: &str, kind: &str) {
        if !self.group_separator.is_empty() && self.group_separator == self.decimal_separator {
            log::warn!(
                "Locale '{locale}' {kind} group separator '{}' equals its decimal separator, digit grouping disabled",
                self.group_separator,
            );
            self.group_separator.clear();
        }
    }
}

/// The pair of rule sets derived from one locale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleRules {
    /// Rules from the locale's generic number conventions.
    pub native: NumberRules,
    /// Native rules overwritten with the locale's currency conventions.
    pub currency: NumberRules,
    /// `true` when the locale's currency symbol equals its currency decimal separator.
    pub symbol_is_decimal_separator: bool,
}

impl LocaleRules {
    /// Derives the native and currency rule sets of `conventions`.
    ///
    /// A group separator equal to its decimal separator is cleared.
    #[must_use]
    pub fn derive(conventions: &LocaleConventions) -> Self {
        let number = &conventions.number;
        let mut native = NumberRules {
            decimal_separator: number.decimal_separator.clone(),
            group_separator: number.group_separator.clone(),
            group_sizes: number.group_sizes.clone(),
            decimal_digits: number.decimal_digits,
            negative_sign: number.negative_sign.clone(),
            positive_sign: number.positive_sign.clone(),
        };
        native.clear_colliding_group_separator(&conventions.name, "number");

        let conv = &conventions.currency;
        let mut currency = NumberRules {
            decimal_separator: conv.decimal_separator.clone(),
            group_separator: conv.group_separator.clone(),
            group_sizes: conv.group_sizes.clone(),
            decimal_digits: conv.decimal_digits,
            negative_sign: conv.negative_sign.clone(),
            positive_sign: conv.positive_sign.clone(),
        };
        currency.clear_colliding_group_separator(&conventions.name, "currency");

        Self {
            symbol_is_decimal_separator: conv.symbol == currency.decimal_separator,
            native,
            currency,
        }
    }
}

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

//! Built-in locale data.

use std::sync::{Arc, OnceLock};

use ahash::AHashMap;
use monetary_core::{GroupSizes, correctness::FAILED};

use super::{
    LocaleContext,
    conventions::{CurrencyConventions, LocaleConventions, NumberConventions, Region},
};

const NBSP: &str = "\u{a0}";
const NNBSP: &str = "\u{202f}";

struct BuiltinLocale {
    name: &'static str,
    region: Option<(&'static str, &'static str)>,
    decimal_separator: &'static str,
    group_separator: &'static str,
    negative_sign: &'static str,
    symbol: &'static str,
    currency_decimal_separator: &'static str,
    group_sizes: &'static [u8],
    currency_digits: u8,
    positive_pattern: u8,
    negative_pattern: u8,
}

impl From<&BuiltinLocale> for LocaleConventions {
    fn from(value: &BuiltinLocale) -> Self {
        let group_sizes = GroupSizes::from_slice(value.group_sizes);
        Self {
            name: value.name.to_string(),
            region: value.region.map(|(name, code)| Region::new(name, code)),
            number: NumberConventions {
                decimal_separator: value.decimal_separator.to_string(),
                group_separator: value.group_separator.to_string(),
                group_sizes: group_sizes.clone(),
                decimal_digits: 2,
                negative_sign: value.negative_sign.to_string(),
                positive_sign: "+".to_string(),
            },
            currency: CurrencyConventions {
                symbol: value.symbol.to_string(),
                decimal_separator: value.currency_decimal_separator.to_string(),
                group_separator: value.group_separator.to_string(),
                group_sizes,
                decimal_digits: value.currency_digits,
                negative_sign: value.negative_sign.to_string(),
                positive_sign: "+".to_string(),
                positive_pattern: value.positive_pattern,
                negative_pattern: value.negative_pattern,
            },
        }
    }
}

#[rustfmt::skip]
const BUILTIN_LOCALES: &[BuiltinLocale] = &[
    BuiltinLocale { name: "", region: None, decimal_separator: ".", group_separator: ",", negative_sign: "-", symbol: "¤", currency_decimal_separator: ".", group_sizes: &[3], currency_digits: 2, positive_pattern: 0, negative_pattern: 0 },
    BuiltinLocale { name: "en-US", region: Some(("US", "USD")), decimal_separator: ".", group_separator: ",", negative_sign: "-", symbol: "$", currency_decimal_separator: ".", group_sizes: &[3], currency_digits: 2, positive_pattern: 0, negative_pattern: 0 },
    BuiltinLocale { name: "en-GB", region: Some(("GB", "GBP")), decimal_separator: ".", group_separator: ",", negative_sign: "-", symbol: "£", currency_decimal_separator: ".", group_sizes: &[3], currency_digits: 2, positive_pattern: 0, negative_pattern: 1 },
    BuiltinLocale { name: "en-CA", region: Some(("CA", "CAD")), decimal_separator: ".", group_separator: ",", negative_sign: "-", symbol: "$", currency_decimal_separator: ".", group_sizes: &[3], currency_digits: 2, positive_pattern: 0, negative_pattern: 1 },
    BuiltinLocale { name: "en-IN", region: Some(("IN", "INR")), decimal_separator: ".", group_separator: ",", negative_sign: "-", symbol: "₹", currency_decimal_separator: ".", group_sizes: &[3, 2], currency_digits: 2, positive_pattern: 0, negative_pattern: 1 },
    BuiltinLocale { name: "de-DE", region: Some(("DE", "EUR")), decimal_separator: ",", group_separator: ".", negative_sign: "-", symbol: "€", currency_decimal_separator: ",", group_sizes: &[3], currency_digits: 2, positive_pattern: 3, negative_pattern: 8 },
    BuiltinLocale { name: "fr-FR", region: Some(("FR", "EUR")), decimal_separator: ",", group_separator: NNBSP, negative_sign: "-", symbol: "€", currency_decimal_separator: ",", group_sizes: &[3], currency_digits: 2, positive_pattern: 3, negative_pattern: 8 },
    BuiltinLocale { name: "de-CH", region: Some(("CH", "CHF")), decimal_separator: ".", group_separator: "’", negative_sign: "-", symbol: "CHF", currency_decimal_separator: ".", group_sizes: &[3], currency_digits: 2, positive_pattern: 2, negative_pattern: 12 },
    BuiltinLocale { name: "ja-JP", region: Some(("JP", "JPY")), decimal_separator: ".", group_separator: ",", negative_sign: "-", symbol: "¥", currency_decimal_separator: ".", group_sizes: &[3], currency_digits: 0, positive_pattern: 0, negative_pattern: 1 },
    BuiltinLocale { name: "sv-SE", region: Some(("SE", "SEK")), decimal_separator: ",", group_separator: NBSP, negative_sign: "\u{2212}", symbol: "kr", currency_decimal_separator: ",", group_sizes: &[3], currency_digits: 2, positive_pattern: 3, negative_pattern: 8 },
    BuiltinLocale { name: "pt-CV", region: Some(("CV", "CVE")), decimal_separator: ",", group_separator: NBSP, negative_sign: "-", symbol: "$", currency_decimal_separator: "$", group_sizes: &[3], currency_digits: 2, positive_pattern: 3, negative_pattern: 8 },
];

/// Returns the conventions of every built-in locale, the invariant locale first.
pub(crate) fn builtin_conventions() -> Vec<LocaleConventions> {
    BUILTIN_LOCALES.iter().map(LocaleConventions::from).collect()
}

fn normalize_name(name: &str) -> String {
    name.trim().replace('_', "-").to_ascii_lowercase()
}

/// Returns the shared built-in locale named `name` (case-insensitive, `_` or `-` separated).
pub(crate) fn builtin_locale(name: &str) -> Option<Arc<LocaleContext>> {
    static LOCALES: OnceLock<AHashMap<String, Arc<LocaleContext>>> = OnceLock::new();

    LOCALES
        .get_or_init(|| {
            builtin_conventions()
                .into_iter()
                .map(|conventions| {
                    let key = normalize_name(&conventions.name);
                    let locale = LocaleContext::from_conventions(conventions).expect(FAILED);
                    (key, Arc::new(locale))
                })
                .collect()
        })
        .get(&normalize_name(name))
        .cloned()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("en-US", "en-US")]
    #[case("en_us", "en-US")]
    #[case("DE-ch", "de-CH")]
    #[case("", "")]
    fn test_builtin_lookup(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(builtin_locale(name).unwrap().name(), expected);
    }

    #[rstest]
    fn test_unknown_locale() {
        assert!(builtin_locale("xx-XX").is_none());
    }

    #[rstest]
    fn test_builtin_locales_are_shared() {
        let a = builtin_locale("fr-FR").unwrap();
        let b = builtin_locale("fr_FR").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[rstest]
    fn test_region_currencies_are_registered() {
        let registry = crate::registry::CurrencyRegistry::global();
        for conventions in builtin_conventions() {
            if let Some(region) = conventions.region {
                assert!(registry.contains(&region.currency_code), "{}", conventions.name);
            }
        }
    }
}

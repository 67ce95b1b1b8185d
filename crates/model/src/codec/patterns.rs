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

//! Currency pattern tables.
//!
//! Patterns are token strings walked left to right by the formatter:
//!
//! | Token | Emits                                   |
//! |-------|-----------------------------------------|
//! | `n`   | The formatted absolute amount.          |
//! | `$`   | The currency symbol or code.            |
//! | `-`   | The locale's negative sign.             |
//! | ` `   | A non-breaking space (U+00A0).          |
//! | other | The character itself, e.g. `(` or `)`.  |
//!
//! The international tables place a currency code before the number and keep the sign
//! style of the corresponding symbol pattern (parentheses, leading or trailing sign). The
//! reverse international tables place the code after the number.

use strum::{AsRefStr, Display, EnumIter};

/// Positive currency patterns, indexed by a locale's positive pattern.
pub const CURRENCY_POSITIVE_PATTERNS: [&str; 4] = ["$n", "n$", "$ n", "n $"];

/// Negative currency patterns, indexed by a locale's negative pattern.
pub const CURRENCY_NEGATIVE_PATTERNS: [&str; 17] = [
    "($n)", "-$n", "$-n", "$n-", "(n$)", "-n$", "n-$", "n$-", "-n $", "-$ n", "n $-", "$ n-",
    "$ -n", "n- $", "($ n)", "(n $)", "$- n",
];

pub const INTERNATIONAL_POSITIVE_PATTERN: &str = "$ n";

pub const REVERSE_INTERNATIONAL_POSITIVE_PATTERN: &str = "n $";

/// International negative patterns, indexed by a locale's negative pattern.
pub const INTERNATIONAL_NEGATIVE_PATTERNS: [&str; 17] = [
    "$ (n)", "$ -n", "$ -n", "$ n-", "$ (n)", "$ -n", "$ n-", "$ n-", "$ -n", "$ -n", "$ n-",
    "$ n-", "$ -n", "$ n-", "$ (n)", "$ (n)", "$ -n",
];

/// Reverse international negative patterns, indexed by a locale's negative pattern.
pub const REVERSE_INTERNATIONAL_NEGATIVE_PATTERNS: [&str; 17] = [
    "(n) $", "-n $", "-n $", "n- $", "(n) $", "-n $", "n- $", "n- $", "-n $", "-n $", "n- $",
    "n- $", "-n $", "n- $", "(n) $", "(n) $", "-n $",
];

/// The placement family of a rendered currency indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
pub enum PatternLayout {
    /// The locale's own symbol placement.
    Symbol,
    /// Code before the number.
    International,
    /// Code after the number.
    ReverseInternational,
}

/// Returns `true` if the positive pattern at `index` places the symbol before the number.
#[must_use]
pub const fn symbol_precedes(positive_index: u8) -> bool {
    matches!(positive_index, 0 | 2)
}

/// Returns the positive pattern for `layout`.
///
/// Out of range indices fall back to pattern 0, locale data is validated on construction.
#[must_use]
pub fn positive_pattern(index: u8, layout: PatternLayout) -> &'static str {
    match layout {
        PatternLayout::Symbol => CURRENCY_POSITIVE_PATTERNS
            .get(usize::from(index))
            .copied()
            .unwrap_or(CURRENCY_POSITIVE_PATTERNS[0]),
        PatternLayout::International => INTERNATIONAL_POSITIVE_PATTERN,
        PatternLayout::ReverseInternational => REVERSE_INTERNATIONAL_POSITIVE_PATTERN,
    }
}

/// Returns the negative pattern for `layout`.
#[must_use]
pub fn negative_pattern(index: u8, layout: PatternLayout) -> &'static str {
    let table = match layout {
        PatternLayout::Symbol => &CURRENCY_NEGATIVE_PATTERNS,
        PatternLayout::International => &INTERNATIONAL_NEGATIVE_PATTERNS,
        PatternLayout::ReverseInternational => &REVERSE_INTERNATIONAL_NEGATIVE_PATTERNS,
    };
    table.get(usize::from(index)).copied().unwrap_or(table[0])
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    /// The sign style of a pattern: parentheses, sign before or sign after the number.
    fn sign_style(pattern: &str) -> &'static str {
        if pattern.contains('(') {
            "paren"
        } else if pattern.find('-') < pattern.find('n') {
            "leading"
        } else {
            "trailing"
        }
    }

    #[rstest]
    fn test_international_tables_keep_sign_style() {
        for (i, symbol) in CURRENCY_NEGATIVE_PATTERNS.iter().enumerate() {
            assert_eq!(sign_style(INTERNATIONAL_NEGATIVE_PATTERNS[i]), sign_style(symbol), "{i}");
            assert_eq!(
                sign_style(REVERSE_INTERNATIONAL_NEGATIVE_PATTERNS[i]),
                sign_style(symbol),
                "{i}"
            );
        }
    }

    #[rstest]
    fn test_international_tables_place_code() {
        for pattern in INTERNATIONAL_NEGATIVE_PATTERNS {
            assert!(pattern.starts_with("$ "));
        }
        for pattern in REVERSE_INTERNATIONAL_NEGATIVE_PATTERNS {
            assert!(pattern.ends_with(" $"));
        }
    }

    #[rstest]
    fn test_every_pattern_has_one_number_and_one_symbol() {
        let all = CURRENCY_POSITIVE_PATTERNS
            .iter()
            .chain(&CURRENCY_NEGATIVE_PATTERNS)
            .chain(&INTERNATIONAL_NEGATIVE_PATTERNS)
            .chain(&REVERSE_INTERNATIONAL_NEGATIVE_PATTERNS);
        for pattern in all {
            assert_eq!(pattern.matches('n').count(), 1, "{pattern}");
            assert_eq!(pattern.matches('$').count(), 1, "{pattern}");
        }
    }

    #[rstest]
    #[case(0, true)]
    #[case(1, false)]
    #[case(2, true)]
    #[case(3, false)]
    fn test_symbol_precedes(#[case] index: u8, #[case] expected: bool) {
        assert_eq!(symbol_precedes(index), expected);
    }

    #[rstest]
    #[case(0, PatternLayout::Symbol, "($n)")]
    #[case(8, PatternLayout::Symbol, "-n $")]
    #[case(0, PatternLayout::International, "$ (n)")]
    #[case(12, PatternLayout::International, "$ -n")]
    #[case(13, PatternLayout::ReverseInternational, "n- $")]
    #[case(99, PatternLayout::Symbol, "($n)")]
    fn test_negative_pattern(
        #[case] index: u8,
        #[case] layout: PatternLayout,
        #[case] expected: &str,
    ) {
        assert_eq!(negative_pattern(index, layout), expected);
    }

    #[rstest]
    fn test_positive_pattern_layouts() {
        let patterns: Vec<&str> = PatternLayout::iter().map(|l| positive_pattern(3, l)).collect();
        assert_eq!(patterns, vec!["n $", "$ n", "n $"]);
    }
}

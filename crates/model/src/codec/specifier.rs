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

//! The compact money format specifier `[G|I|R|C|L][N|D][*|B[n]|A[n]]`.
//!
//! All three parts are optional but must appear in this order. Letters are matched
//! case-insensitively.
//!
//! | Part      | Code   | Meaning                                                       |
//! |-----------|--------|---------------------------------------------------------------|
//! | Currency  | `G`    | General: code placed where the locale places its symbol.      |
//! |           | `I`    | International: code before the number.                        |
//! |           | `R`    | Reverse international: code after the number.                 |
//! |           | `C`    | Symbol, in the locale's own pattern.                          |
//! |           | `L`    | Local: `C` for the locale's own currency, `G` otherwise.      |
//! | Number    | `N`    | Digit grouping.                                               |
//! |           | `D`    | No digit grouping.                                            |
//! | Decimals  | (none) | Natural digits, at least the currency's digits.               |
//! |           | `*`    | As above, but no decimals at all for whole amounts.           |
//! |           | `B[n]` | Round half to even to `n` (or the currency's) digits.         |
//! |           | `A[n]` | Round half away from zero to `n` (or the currency's) digits.  |

use std::{fmt::Display, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy};
use strum::{AsRefStr, EnumIter, EnumString};

use super::error::SpecifierError;
use crate::types::currency::MAX_DECIMAL_DIGITS;

/// How the currency is indicated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, AsRefStr, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum CurrencyStyle {
    #[default]
    #[strum(serialize = "G")]
    General,
    #[strum(serialize = "I")]
    International,
    #[strum(serialize = "R")]
    ReverseInternational,
    #[strum(serialize = "C")]
    Symbol,
    #[strum(serialize = "L")]
    Local,
}

/// Whether the integral digits are grouped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, AsRefStr, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum NumberStyle {
    #[default]
    #[strum(serialize = "N")]
    Grouped,
    #[strum(serialize = "D")]
    Ungrouped,
}

/// How many decimal digits are rendered, and how excess digits are rounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DecimalsStyle {
    /// The amount's significant decimals, at least the currency's digits.
    #[default]
    Natural,
    /// As [`DecimalsStyle::Natural`], but whole amounts render without decimals.
    Shortest,
    /// Round half to even to the given digits, or the currency's digits.
    ToEven(Option<u8>),
    /// Round half away from zero to the given digits, or the currency's digits.
    AwayFromZero(Option<u8>),
}

impl DecimalsStyle {
    /// Returns `amount` rounded for display and the number of decimal digits to render.
    #[must_use]
    pub fn apply(self, amount: Decimal, currency_digits: u8) -> (Decimal, u32) {
        let currency_digits = u32::from(currency_digits);
        let natural = amount.normalize().scale();

        match self {
            Self::Natural => (amount, natural.max(currency_digits)),
            Self::Shortest if natural == 0 => (amount, 0),
            Self::Shortest => (amount, natural.max(currency_digits)),
            Self::ToEven(digits) => {
                let digits = digits.map_or(currency_digits, u32::from);
                let rounded =
                    amount.round_dp_with_strategy(digits, RoundingStrategy::MidpointNearestEven);
                (rounded, digits)
            }
            Self::AwayFromZero(digits) => {
                let digits = digits.map_or(currency_digits, u32::from);
                let rounded =
                    amount.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
                (rounded, digits)
            }
        }
    }
}

impl Display for DecimalsStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Natural => Ok(()),
            Self::Shortest => f.write_str("*"),
            Self::ToEven(digits) | Self::AwayFromZero(digits) => {
                f.write_str(if matches!(self, Self::ToEven(_)) { "B" } else { "A" })?;
                match digits {
                    Some(digits) => write!(f, "{digits}"),
                    None => Ok(()),
                }
            }
        }
    }
}

/// A parsed money format specifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MoneyFormat {
    pub currency: CurrencyStyle,
    pub number: NumberStyle,
    pub decimals: DecimalsStyle,
}

impl MoneyFormat {
    /// The default format: general currency style, grouped, natural decimals.
    pub const GENERAL: Self = Self {
        currency: CurrencyStyle::General,
        number: NumberStyle::Grouped,
        decimals: DecimalsStyle::Natural,
    };

    /// Creates a new [`MoneyFormat`] instance.
    #[must_use]
    pub const fn new(
        currency: CurrencyStyle,
        number: NumberStyle,
        decimals: DecimalsStyle,
    ) -> Self {
        Self {
            currency,
            number,
            decimals,
        }
    }

    /// Parses a format specifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the parts are out of order, a character is not recognized, or
    /// an explicit digit count exceeds 28.
    pub fn parse(specifier: &str) -> Result<Self, SpecifierError> {
        let mut format = Self::default();
        let mut rest = specifier;

        if let Some(style) = leading_code::<CurrencyStyle>(rest) {
            format.currency = style;
            rest = &rest[1..];
        }
        if let Some(style) = leading_code::<NumberStyle>(rest) {
            format.number = style;
            rest = &rest[1..];
        }

        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            format.decimals = match c.to_ascii_uppercase() {
                '*' => DecimalsStyle::Shortest,
                code @ ('B' | 'A') => {
                    let after = chars.as_str();
                    let len = after.bytes().take_while(u8::is_ascii_digit).count();
                    let digits = parse_digit_count(specifier, &after[..len])?;
                    chars = after[len..].chars();
                    if code == 'B' {
                        DecimalsStyle::ToEven(digits)
                    } else {
                        DecimalsStyle::AwayFromZero(digits)
                    }
                }
                _ => return Err(unexpected(specifier, rest, c)),
            };
        }

        if let Some(c) = chars.next() {
            let remaining = chars.as_str();
            let position = specifier.len() - remaining.len() - c.len_utf8();
            return Err(SpecifierError::UnexpectedChar {
                specifier: specifier.to_string(),
                found: c,
                position,
            });
        }

        Ok(format)
    }
}

fn leading_code<T: FromStr>(s: &str) -> Option<T> {
    let first = s.get(..1)?;
    T::from_str(first).ok()
}

fn parse_digit_count(specifier: &str, digits: &str) -> Result<Option<u8>, SpecifierError> {
    if digits.is_empty() {
        return Ok(None);
    }

    match digits.parse::<u8>() {
        Ok(count) if count <= MAX_DECIMAL_DIGITS => Ok(Some(count)),
        _ => Err(SpecifierError::TooManyDigits {
            specifier: specifier.to_string(),
            digits: digits.to_string(),
        }),
    }
}

fn unexpected(specifier: &str, rest: &str, found: char) -> SpecifierError {
    SpecifierError::UnexpectedChar {
        specifier: specifier.to_string(),
        found,
        position: specifier.len() - rest.len(),
    }
}

impl FromStr for MoneyFormat {
    type Err = SpecifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for MoneyFormat {
    /// Writes the canonical specifier, e.g. "GNB2".
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.currency.as_ref(),
            self.number.as_ref(),
            self.decimals
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use strum::IntoEnumIterator;

    use super::*;

    const fn fmt(
        currency: CurrencyStyle,
        number: NumberStyle,
        decimals: DecimalsStyle,
    ) -> MoneyFormat {
        MoneyFormat::new(currency, number, decimals)
    }

    #[rstest]
    #[case("", MoneyFormat::GENERAL)]
    #[case("G", MoneyFormat::GENERAL)]
    #[case("i*", fmt(CurrencyStyle::International, NumberStyle::Grouped, DecimalsStyle::Shortest))]
    #[case("RD", fmt(CurrencyStyle::ReverseInternational, NumberStyle::Ungrouped, DecimalsStyle::Natural))]
    #[case("CNB", fmt(CurrencyStyle::Symbol, NumberStyle::Grouped, DecimalsStyle::ToEven(None)))]
    #[case("la0", fmt(CurrencyStyle::Local, NumberStyle::Grouped, DecimalsStyle::AwayFromZero(Some(0))))]
    #[case("DB28", fmt(CurrencyStyle::General, NumberStyle::Ungrouped, DecimalsStyle::ToEven(Some(28))))]
    #[case("*", fmt(CurrencyStyle::General, NumberStyle::Grouped, DecimalsStyle::Shortest))]
    #[case("A2", fmt(CurrencyStyle::General, NumberStyle::Grouped, DecimalsStyle::AwayFromZero(Some(2))))]
    fn test_parse(#[case] specifier: &str, #[case] expected: MoneyFormat) {
        assert_eq!(MoneyFormat::parse(specifier), Ok(expected));
    }

    #[rstest]
    #[case("X", 'X', 0)]
    #[case("NG", 'G', 1)]
    #[case("*N", 'N', 1)]
    #[case("GN*B", 'B', 3)]
    #[case("B2x", 'x', 2)]
    #[case("GG", 'G', 1)]
    #[case("Gé", 'é', 1)]
    fn test_parse_unexpected(
        #[case] specifier: &str,
        #[case] found: char,
        #[case] position: usize,
    ) {
        assert_eq!(
            MoneyFormat::parse(specifier),
            Err(SpecifierError::UnexpectedChar {
                specifier: specifier.to_string(),
                found,
                position
            })
        );
    }

    #[rstest]
    #[case("B29")]
    #[case("A300")]
    fn test_parse_too_many_digits(#[case] specifier: &str) {
        let err = MoneyFormat::parse(specifier).unwrap_err();
        assert!(matches!(err, SpecifierError::TooManyDigits { .. }));
        assert!(err.to_string().contains("exceeds the maximum of 28"));
    }

    #[rstest]
    fn test_display_is_canonical() {
        for currency in CurrencyStyle::iter() {
            for number in NumberStyle::iter() {
                for decimals in [
                    DecimalsStyle::Natural,
                    DecimalsStyle::Shortest,
                    DecimalsStyle::ToEven(Some(3)),
                    DecimalsStyle::AwayFromZero(None),
                ] {
                    let format = MoneyFormat::new(currency, number, decimals);
                    assert_eq!(MoneyFormat::parse(&format.to_string()), Ok(format));
                }
            }
        }
        assert_eq!(MoneyFormat::GENERAL.to_string(), "GN");
    }

    #[rstest]
    #[case(DecimalsStyle::Natural, dec!(1000), 0, dec!(1000), 0)]
    #[case(DecimalsStyle::Natural, dec!(1000), 2, dec!(1000), 2)]
    #[case(DecimalsStyle::Natural, dec!(1000.1234), 2, dec!(1000.1234), 4)]
    #[case(DecimalsStyle::Natural, dec!(1.500), 0, dec!(1.500), 1)]
    #[case(DecimalsStyle::Shortest, dec!(1000.00), 2, dec!(1000), 0)]
    #[case(DecimalsStyle::Shortest, dec!(1000.5), 2, dec!(1000.5), 2)]
    #[case(DecimalsStyle::ToEven(None), dec!(10.005), 2, dec!(10.00), 2)]
    #[case(DecimalsStyle::AwayFromZero(None), dec!(10.005), 2, dec!(10.01), 2)]
    #[case(DecimalsStyle::ToEven(Some(0)), dec!(2.5), 2, dec!(2), 0)]
    #[case(DecimalsStyle::AwayFromZero(Some(0)), dec!(-2.5), 2, dec!(-3), 0)]
    #[case(DecimalsStyle::ToEven(Some(4)), dec!(1.5), 2, dec!(1.5), 4)]
    fn test_decimals_apply(
        #[case] style: DecimalsStyle,
        #[case] amount: Decimal,
        #[case] currency_digits: u8,
        #[case] expected: Decimal,
        #[case] expected_digits: u32,
    ) {
        assert_eq!(style.apply(amount, currency_digits), (expected, expected_digits));
    }
}

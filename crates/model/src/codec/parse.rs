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

//! Parsing of monetary text such as "USD 1,234.56", "(1.234,56 €)" or "-$100".
//!
//! Parsing runs in passes over a shrinking slice of the input:
//!
//! 1. Trailing NUL sentinels are dropped and allowed outer whitespace is trimmed.
//! 2. Parentheses around the amount mark it negative. Text outside them is a currency
//!    indicator, symbol shaped if it touches the parenthesis, code shaped otherwise.
//! 3. Leading signs and a leading indicator are consumed up to the first digit.
//! 4. Trailing signs and a trailing indicator are consumed back to the last digit.
//! 5. What remains must be a number in the locale's currency notation.
//!
//! At most one sign and one indicator are accepted. The indicator is then resolved
//! against the registry, see [`super::resolve`].

use monetary_core::string::trim_end_sentinels;
use rust_decimal::Decimal;
use smallvec::SmallVec;

use super::{
    error::{IndicatorFailures, LayoutError, MoneyParseError},
    resolve::{IndicatorShape, resolve_indicator},
    styles::ParseStyles,
};
use crate::{
    locale::{LocaleContext, LocaleRules, NumberRules},
    registry::CurrencyRegistry,
    types::Money,
};

const MINUS_SIGN: &str = "\u{2212}";

/// Parses `text` into a [`Money`] value.
///
/// # Errors
///
/// Returns a [`MoneyParseError`] describing why the text is not a monetary value. An
/// unresolved indicator lists the rejection of every attempted resolution strategy.
pub fn parse(
    text: &str,
    styles: &ParseStyles,
    locale: &LocaleContext,
    registry: &CurrencyRegistry,
) -> Result<Money, MoneyParseError> {
    parse_text(text, styles, locale, registry).map_err(|failure| failure.into_error(text))
}

/// Parses `text` into a [`Money`] value, returning `None` on failure.
///
/// No diagnostic is allocated when parsing fails.
#[must_use]
pub fn try_parse(
    text: &str,
    styles: &ParseStyles,
    locale: &LocaleContext,
    registry: &CurrencyRegistry,
) -> Option<Money> {
    parse_text(text, styles, locale, registry).ok()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Sign {
    Positive,
    Negative,
}

/// A parse failure borrowing from the input, turned into a [`MoneyParseError`] on demand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Failure<'a> {
    Layout(LayoutError),
    Amount,
    MissingIndicator,
    Unresolved {
        indicator: &'a str,
        failures: IndicatorFailures,
    },
}

impl Failure<'_> {
    fn into_error(self, input: &str) -> MoneyParseError {
        let input = input.to_string();
        match self {
            Self::Layout(reason) => MoneyParseError::InvalidFormat { input, reason },
            Self::Amount => MoneyParseError::InvalidAmount { input },
            Self::MissingIndicator => MoneyParseError::MissingCurrency { input },
            Self::Unresolved {
                indicator,
                failures,
            } => MoneyParseError::UnresolvedCurrency {
                input,
                indicator: indicator.to_string(),
                failures,
            },
        }
    }
}

impl From<LayoutError> for Failure<'_> {
    fn from(value: LayoutError) -> Self {
        Self::Layout(value)
    }
}

/// The sign and indicator collected by the structural passes.
#[derive(Debug, Default)]
struct Scan<'a> {
    sign: Option<Sign>,
    indicator: Option<(&'a str, IndicatorShape)>,
}

impl<'a> Scan<'a> {
    fn set_sign(&mut self, sign: Sign, allowed: bool) -> Result<(), LayoutError> {
        if !allowed {
            return Err(LayoutError::SignNotAllowed);
        }
        if self.sign.is_some() {
            return Err(LayoutError::MultipleSigns);
        }
        self.sign = Some(sign);
        Ok(())
    }

    fn set_indicator(&mut self, token: &'a str, shape: IndicatorShape) -> Result<(), LayoutError> {
        if self.indicator.is_some() {
            return Err(LayoutError::MultipleIndicators);
        }
        self.indicator = Some((token, shape));
        Ok(())
    }

    /// Strips enclosing parentheses, recording the negative sign and any outside indicator.
    fn parentheses(&mut self, s: &'a str) -> Result<&'a str, LayoutError> {
        let (open, close) = match (s.find('('), s.rfind(')')) {
            (None, None) => return Ok(s),
            (Some(open), Some(close)) if open < close => (open, close),
            _ => return Err(LayoutError::UnbalancedParentheses),
        };

        let inner = &s[open + 1..close];
        if inner.contains(['(', ')']) {
            return Err(LayoutError::UnbalancedParentheses);
        }

        let prefix = &s[..open];
        let suffix = &s[close + 1..];
        match (prefix.is_empty(), suffix.is_empty()) {
            (true, true) => {}
            (false, false) => return Err(LayoutError::MultipleIndicators),
            (false, true) => {
                let token = prefix.trim_end();
                self.outside_indicator(token, token.len() != prefix.len())?;
            }
            (true, false) => {
                let token = suffix.trim_start();
                self.outside_indicator(token, token.len() != suffix.len())?;
            }
        }

        self.sign = Some(Sign::Negative);
        Ok(inner)
    }

    fn outside_indicator(&mut self, token: &'a str, gap: bool) -> Result<(), LayoutError> {
        if token.is_empty() || token.contains(char::is_whitespace) {
            return Err(LayoutError::UnexpectedWhitespace);
        }
        let shape = if gap {
            IndicatorShape::Code
        } else {
            IndicatorShape::Symbol
        };
        self.set_indicator(token, shape)
    }

    /// Consumes signs, whitespace and an indicator ahead of the number.
    fn leading(
        &mut self,
        mut s: &'a str,
        styles: &ParseStyles,
        rules: &LocaleRules,
    ) -> Result<&'a str, LayoutError> {
        let mut after_token = false;

        while let Some(c) = s.chars().next() {
            if starts_number(s, rules) {
                break;
            }

            if c.is_whitespace() {
                if !after_token {
                    return Err(LayoutError::UnexpectedWhitespace);
                }
                s = s.trim_start();
                after_token = false;
                continue;
            }

            if let Some((sign, rest)) = strip_sign_prefix(s, rules) {
                self.set_sign(sign, styles.allow_leading_sign())?;
                s = rest;
            } else {
                let end = leading_indicator_end(s, rules);
                self.set_indicator(&s[..end], IndicatorShape::Unknown)?;
                s = &s[end..];
            }
            after_token = true;
        }

        Ok(s)
    }

    /// Consumes signs, whitespace and an indicator behind the number.
    fn trailing(
        &mut self,
        mut s: &'a str,
        styles: &ParseStyles,
        rules: &LocaleRules,
    ) -> Result<&'a str, LayoutError> {
        let mut after_token = false;

        while let Some(c) = s.chars().next_back() {
            if ends_number(s, rules) {
                break;
            }

            if c.is_whitespace() {
                if !after_token {
                    return Err(LayoutError::UnexpectedWhitespace);
                }
                s = s.trim_end();
                after_token = false;
                continue;
            }

            if let Some((sign, rest)) = strip_sign_suffix(s, rules) {
                self.set_sign(sign, styles.allow_trailing_sign())?;
                s = rest;
            } else {
                let start = trailing_indicator_start(s, rules);
                self.set_indicator(&s[start..], IndicatorShape::Unknown)?;
                s = &s[..start];
            }
            after_token = true;
        }

        Ok(s)
    }
}

fn sign_tokens(rules: &LocaleRules) -> [(&str, Sign); 5] {
    // ASCII hyphen is accepted wherever the locale writes U+2212
    let ascii_minus = if rules.currency.negative_sign == MINUS_SIGN
        || rules.native.negative_sign == MINUS_SIGN
    {
        "-"
    } else {
        ""
    };

    [
        (rules.currency.negative_sign.as_str(), Sign::Negative),
        (rules.currency.positive_sign.as_str(), Sign::Positive),
        (rules.native.negative_sign.as_str(), Sign::Negative),
        (rules.native.positive_sign.as_str(), Sign::Positive),
        (ascii_minus, Sign::Negative),
    ]
}

fn strip_sign_prefix<'s>(s: &'s str, rules: &LocaleRules) -> Option<(Sign, &'s str)> {
    sign_tokens(rules)
        .into_iter()
        .filter(|(token, _)| !token.is_empty())
        .find_map(|(token, sign)| s.strip_prefix(token).map(|rest| (sign, rest)))
}

fn strip_sign_suffix<'s>(s: &'s str, rules: &LocaleRules) -> Option<(Sign, &'s str)> {
    sign_tokens(rules)
        .into_iter()
        .filter(|(token, _)| !token.is_empty())
        .find_map(|(token, sign)| s.strip_suffix(token).map(|rest| (sign, rest)))
}

fn starts_number(s: &str, rules: &LocaleRules) -> bool {
    s.starts_with(|c: char| c.is_ascii_digit())
        || rules.currency.starts_with_fraction(s)
        || rules.native.starts_with_fraction(s)
}

fn ends_number(s: &str, rules: &LocaleRules) -> bool {
    s.ends_with(|c: char| c.is_ascii_digit())
        || rules.currency.ends_with_bare_point(s)
        || rules.native.ends_with_bare_point(s)
}

/// Returns the end of the indicator run starting `s`.
fn leading_indicator_end(s: &str, rules: &LocaleRules) -> usize {
    s.char_indices()
        .skip(1)
        .find(|&(i, c)| {
            let rest = &s[i..];
            c.is_whitespace()
                || starts_number(rest, rules)
                || strip_sign_prefix(rest, rules).is_some()
        })
        .map_or(s.len(), |(i, _)| i)
}

/// Returns the start of the indicator run ending `s`.
fn trailing_indicator_start(s: &str, rules: &LocaleRules) -> usize {
    let mut start = s.len();
    for (i, c) in s.char_indices().rev() {
        let head = &s[..i + c.len_utf8()];
        let boundary = c.is_whitespace()
            || ends_number(head, rules)
            || strip_sign_suffix(head, rules).is_some();
        if boundary && start != s.len() {
            break;
        }
        start = i;
    }
    start
}

/// Parses a number written with `rules`, keeping its scale.
///
/// Group separators must sit between digits of the integral part.
fn parse_amount(body: &str, rules: &NumberRules, styles: &ParseStyles) -> Option<Decimal> {
    let mut digits: SmallVec<[u8; 40]> = SmallVec::new();
    let mut seen_digit = false;
    let mut seen_point = false;
    let mut rest = body;

    while let Some(c) = rest.chars().next() {
        if c.is_ascii_digit() {
            digits.push(c as u8);
            seen_digit = true;
            rest = &rest[1..];
            continue;
        }

        if !seen_point
            && styles.allow_decimal_point()
            && !rules.decimal_separator.is_empty()
            && let Some(after) = rest.strip_prefix(rules.decimal_separator.as_str())
        {
            if !seen_digit {
                digits.push(b'0');
            }
            digits.push(b'.');
            seen_point = true;
            rest = after;
            continue;
        }

        if !seen_point
            && seen_digit
            && styles.allow_thousands()
            && !rules.group_separator.is_empty()
            && let Some(after) = rest.strip_prefix(rules.group_separator.as_str())
            && after.starts_with(|c: char| c.is_ascii_digit())
        {
            rest = after;
            continue;
        }

        return None;
    }

    if !seen_digit {
        return None;
    }
    if digits.last() == Some(&b'.') {
        digits.pop();
    }

    let text = std::str::from_utf8(&digits).ok()?;
    Decimal::from_str_exact(text).ok()
}

fn parse_text<'a>(
    text: &'a str,
    styles: &ParseStyles,
    locale: &'a LocaleContext,
    registry: &CurrencyRegistry,
) -> Result<Money, Failure<'a>> {
    let rules = locale.rules();

    let mut s = trim_end_sentinels(text);
    if styles.allow_leading_white() {
        s = s.trim_start();
    }
    if styles.allow_trailing_white() {
        s = s.trim_end();
    }

    let mut scan = Scan::default();
    if styles.allow_parentheses() {
        s = scan.parentheses(s)?;
    }
    let s = scan.leading(s, styles, rules)?;
    let body = scan.trailing(s, styles, rules)?;

    let amount = if !rules.symbol_is_decimal_separator {
        parse_amount(body, &rules.currency, styles)
    } else if scan.indicator.is_some() {
        parse_amount(body, &rules.native, styles)
    } else {
        // The symbol doubles as the decimal separator, so it may sit inside the number
        let symbol = locale.local_currency_symbol();
        if body.contains(symbol) {
            scan.indicator = Some((symbol, IndicatorShape::Symbol));
        }
        parse_amount(body, &rules.currency, styles)
    };
    let mut amount = amount.ok_or(Failure::Amount)?;

    if scan.sign == Some(Sign::Negative) && !amount.is_zero() {
        amount = -amount;
    }

    let (indicator, shape) = scan.indicator.ok_or(Failure::MissingIndicator)?;
    let currency = resolve_indicator(indicator, shape, styles, locale, registry).map_err(
        |failures| Failure::Unresolved {
            indicator,
            failures,
        },
    )?;

    Ok(Money::from_decimal(amount, currency))
}

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

//! Formatting of [`Money`] values as locale-correct text.
//!
//! Rendering writes into a caller supplied byte region and never writes a truncated
//! result: if the region is too small the whole render fails with
//! [`FormatError::InsufficientSpace`] and may be retried from scratch with a larger one.
//! [`format()`] does this automatically, starting on the stack.

use monetary_core::{BoundedBuf, BufferFull, formatting::write_grouped_digits};
use rust_decimal::Decimal;

use super::{
    error::FormatError,
    patterns::{PatternLayout, negative_pattern, positive_pattern, symbol_precedes},
    specifier::{CurrencyStyle, MoneyFormat, NumberStyle},
};
use crate::{
    locale::{LocaleContext, NumberRules},
    types::Money,
};

/// A buffer size in bytes that fits any rendered value of a built-in currency in a
/// built-in locale.
///
/// Symbols and separators may be multi-byte (`€`, `’`, U+202F), so this exceeds the
/// 96 character worst case. Longer custom symbols are covered by the growth in [`format()`].
pub const MIN_FORMAT_BUFFER_SIZE: usize = 128;

/// Decimal mantissas have at most 29 digits, plus padding up to 28 decimals.
const MAX_NUMBER_DIGITS: usize = 40;

/// Formats `money` into `dest`, returning the number of bytes written.
///
/// A currency-less default value renders as the empty string.
///
/// # Errors
///
/// Returns [`FormatError::InsufficientSpace`] if `dest` is too small, any bytes written
/// before running out of space are zeroed again.
pub fn try_format(
    money: &Money,
    format: &MoneyFormat,
    locale: &LocaleContext,
    dest: &mut [u8],
) -> Result<usize, FormatError> {
    let mut buf = BoundedBuf::new(dest);
    if let Err(full) = render(money, format, locale, &mut buf) {
        buf.wipe();
        return Err(FormatError::InsufficientSpace(full));
    }
    Ok(buf.len())
}

/// Formats `money` as a `String`.
///
/// Renders on the stack first and retries with doubling heap buffers while space runs out.
#[must_use]
pub fn format(money: &Money, format: &MoneyFormat, locale: &LocaleContext) -> String {
    let mut stack = [0u8; MIN_FORMAT_BUFFER_SIZE];
    let mut buf = BoundedBuf::new(&mut stack);
    if render(money, format, locale, &mut buf).is_ok() {
        return buf.as_str().to_string();
    }

    let mut capacity = MIN_FORMAT_BUFFER_SIZE;
    loop {
        capacity *= 2;
        log::trace!("Formatting {money:?} with '{format}' exceeded buffer, retrying with {capacity} bytes");

        let mut heap = vec![0u8; capacity];
        let mut buf = BoundedBuf::new(&mut heap);
        if render(money, format, locale, &mut buf).is_ok() {
            return buf.as_str().to_string();
        }
    }
}

/// Parses `specifier` and formats `money` as a `String`.
///
/// # Errors
///
/// Returns [`FormatError::InvalidSpecifier`] if `specifier` is not a valid format specifier.
pub fn format_with(
    money: &Money,
    specifier: &str,
    locale: &LocaleContext,
) -> Result<String, FormatError> {
    let parsed = MoneyFormat::parse(specifier)?;
    Ok(format(money, &parsed, locale))
}

fn overflow(buf: &BoundedBuf<'_>) -> BufferFull {
    buf.overflow().unwrap_or(BufferFull {
        required: buf.remaining() + 1,
        available: buf.remaining(),
    })
}

fn render(
    money: &Money,
    format: &MoneyFormat,
    locale: &LocaleContext,
    buf: &mut BoundedBuf<'_>,
) -> Result<(), BufferFull> {
    let Some(currency) = money.currency() else {
        return Ok(());
    };

    let (amount, digits) = format.decimals.apply(money.amount(), currency.decimal_digits);
    let negative = amount.is_sign_negative() && !amount.is_zero();

    let is_local = locale.is_local_currency(&currency.code);
    let style = match format.currency {
        CurrencyStyle::Local if is_local => CurrencyStyle::Symbol,
        CurrencyStyle::Local => CurrencyStyle::General,
        style => style,
    };

    let rules = locale.rules();
    // The currency decimal separator is the symbol, so it is written even for whole amounts
    let symbol_as_point =
        style == CurrencyStyle::Symbol && rules.symbol_is_decimal_separator && is_local;
    let (layout, symbol, number_rules): (PatternLayout, &str, &NumberRules) = match style {
        CurrencyStyle::Symbol if symbol_as_point => (PatternLayout::Symbol, "", &rules.currency),
        CurrencyStyle::Symbol if rules.symbol_is_decimal_separator => {
            (PatternLayout::Symbol, currency.symbol.as_str(), &rules.native)
        }
        CurrencyStyle::Symbol => {
            let symbol = if is_local {
                locale.local_currency_symbol()
            } else {
                currency.symbol.as_str()
            };
            (PatternLayout::Symbol, symbol, &rules.currency)
        }
        _ => {
            let layout = match style {
                CurrencyStyle::International => PatternLayout::International,
                CurrencyStyle::ReverseInternational => PatternLayout::ReverseInternational,
                _ if symbol_precedes(locale.positive_pattern()) => PatternLayout::International,
                _ => PatternLayout::ReverseInternational,
            };
            let number_rules = if rules.symbol_is_decimal_separator {
                &rules.native
            } else {
                &rules.currency
            };
            (layout, currency.code.as_str(), number_rules)
        }
    };

    let pattern = if negative {
        negative_pattern(locale.negative_pattern(), layout)
    } else {
        positive_pattern(locale.positive_pattern(), layout)
    };

    for token in pattern.chars() {
        match token {
            'n' => write_number(
                buf,
                amount.abs(),
                digits,
                number_rules,
                format.number,
                symbol_as_point,
            )?,
            '$' => buf.push_str(symbol)?,
            '-' => buf.push_str(&number_rules.negative_sign)?,
            ' ' if symbol.is_empty() => {}
            ' ' => buf.push_str("\u{a0}")?,
            other => buf.push_str(other.encode_utf8(&mut [0; 4]))?,
        }
    }

    Ok(())
}

/// Writes the absolute `value` with exactly `digits` decimals.
///
/// Large values cannot always be rescaled to `digits`, the missing decimals are zero padded.
/// With `always_point` the decimal separator is written even when `digits` is zero.
fn write_number(
    buf: &mut BoundedBuf<'_>,
    mut value: Decimal,
    digits: u32,
    rules: &NumberRules,
    style: NumberStyle,
    always_point: bool,
) -> Result<(), BufferFull> {
    value.rescale(digits);
    let scale = value.scale() as usize;
    let digits = digits as usize;

    let mut ascii = [b'0'; MAX_NUMBER_DIGITS];
    let mut start = MAX_NUMBER_DIGITS;
    let mut mantissa = value.mantissa().unsigned_abs();
    loop {
        start -= 1;
        ascii[start] = b'0' + (mantissa % 10) as u8;
        mantissa /= 10;
        if mantissa == 0 {
            break;
        }
    }
    // Leading zeros so there is at least one integral digit
    start = start.min(MAX_NUMBER_DIGITS - scale - 1);

    let number = std::str::from_utf8(&ascii[start..]).unwrap_or_default();
    let (integral, fraction) = number.split_at(number.len() - scale);

    match style {
        NumberStyle::Grouped => write_grouped_digits(
            buf,
            integral,
            &rules.group_separator,
            &rules.group_sizes,
        )
        .map_err(|_| overflow(buf))?,
        NumberStyle::Ungrouped => buf.push_str(integral)?,
    }

    if digits > 0 || always_point {
        buf.push_str(&rules.decimal_separator)?;
        buf.push_str(fraction)?;
        for _ in scale..digits {
            buf.push_str("0")?;
        }
    }

    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{locale::stubs::*, types::Currency};

    fn fmt(locale: &str, amount: Decimal, currency: Currency, specifier: &str) -> String {
        let locale = LocaleContext::get(locale).unwrap();
        format_with(&Money::from_decimal(amount, currency), specifier, &locale).unwrap()
    }

    #[rstest]
    #[case("en-US", dec!(1000), Currency::JPY(), "I*", "JPY\u{a0}1,000")]
    #[case("en-US", dec!(-1000.1234), Currency::USD(), "", "USD\u{a0}(1,000.1234)")]
    #[case("", dec!(-1000.1234), Currency::USD(), "G", "USD\u{a0}(1,000.1234)")]
    #[case("", dec!(1.5), Currency::USD(), "", "USD\u{a0}1.50")]
    #[case("en-US", dec!(10.005), Currency::USD(), "IB", "USD\u{a0}10.00")]
    #[case("en-US", dec!(10.005), Currency::USD(), "IA", "USD\u{a0}10.01")]
    #[case("en-US", dec!(1234.56), Currency::USD(), "C", "$1,234.56")]
    #[case("en-US", dec!(-1234.56), Currency::USD(), "C", "($1,234.56)")]
    #[case("en-US", dec!(1234.5), Currency::EUR(), "C", "€1,234.50")]
    #[case("en-US", dec!(1234.5), Currency::EUR(), "L", "EUR\u{a0}1,234.50")]
    #[case("en-US", dec!(1234.5), Currency::USD(), "L", "$1,234.50")]
    #[case("en-US", dec!(1234.5), Currency::USD(), "R", "1,234.50\u{a0}USD")]
    #[case("en-US", dec!(-5), Currency::USD(), "R", "(5.00)\u{a0}USD")]
    #[case("en-US", dec!(1234567.891), Currency::USD(), "D", "USD\u{a0}1234567.891")]
    #[case("en-US", dec!(1234567.891), Currency::USD(), "CNB", "$1,234,567.89")]
    #[case("en-US", dec!(-0.001), Currency::USD(), "CB", "$0.00")]
    #[case("en-US", dec!(2.5), Currency::USD(), "CB0", "$2")]
    #[case("en-US", dec!(0.5), Currency::USD(), "CA0", "$1")]
    #[case("en-GB", dec!(-0.99), Currency::GBP(), "C", "-£0.99")]
    #[case("en-GB", dec!(-0.99), Currency::GBP(), "G", "GBP\u{a0}-0.99")]
    #[case("en-IN", dec!(12345678), Currency::INR(), "C", "₹1,23,45,678.00")]
    #[case("de-DE", dec!(1234.56), Currency::EUR(), "C", "1.234,56\u{a0}€")]
    #[case("de-DE", dec!(-1234.56), Currency::EUR(), "C", "-1.234,56\u{a0}€")]
    #[case("de-DE", dec!(1234.56), Currency::EUR(), "G", "1.234,56\u{a0}EUR")]
    #[case("de-DE", dec!(-1234.56), Currency::EUR(), "G", "-1.234,56\u{a0}EUR")]
    #[case("de-DE", dec!(-1234.56), Currency::EUR(), "I", "EUR\u{a0}-1.234,56")]
    #[case("fr-FR", dec!(1234.56), Currency::EUR(), "C", "1\u{202f}234,56\u{a0}€")]
    #[case("de-CH", dec!(-1234.56), Currency::CHF(), "C", "CHF\u{a0}-1’234.56")]
    #[case("de-CH", dec!(1234.56), Currency::CHF(), "G", "CHF\u{a0}1’234.56")]
    #[case("ja-JP", dec!(1000), Currency::JPY(), "C", "¥1,000")]
    #[case("ja-JP", dec!(-1000), Currency::JPY(), "C", "-¥1,000")]
    #[case("sv-SE", dec!(-1234.56), Currency::SEK(), "C", "\u{2212}1\u{a0}234,56\u{a0}kr")]
    #[case("pt-CV", dec!(1234.56), Currency::CVE(), "C", "1\u{a0}234$56")]
    #[case("pt-CV", dec!(-1234.56), Currency::CVE(), "C", "-1\u{a0}234$56")]
    #[case("pt-CV", dec!(12), Currency::CVE(), "C*", "12$")]
    #[case("pt-CV", dec!(-12.4), Currency::CVE(), "CB0", "-12$")]
    #[case("pt-CV", dec!(1000), Currency::CVE(), "L*", "1\u{a0}000$")]
    #[case("pt-CV", dec!(1234.56), Currency::CVE(), "G", "1\u{a0}234,56\u{a0}CVE")]
    #[case("pt-CV", dec!(1234.56), Currency::USD(), "C", "1\u{a0}234,56\u{a0}$")]
    fn test_format(
        #[case] locale: &str,
        #[case] amount: Decimal,
        #[case] currency: Currency,
        #[case] specifier: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(fmt(locale, amount, currency, specifier), expected);
    }

    #[rstest]
    fn test_format_default_value_is_empty(locale_en_us: Arc<LocaleContext>) {
        let money = Money::default();
        assert_eq!(format(&money, &MoneyFormat::GENERAL, &locale_en_us), "");

        let mut dest = [0u8; 0];
        assert_eq!(try_format(&money, &MoneyFormat::GENERAL, &locale_en_us, &mut dest), Ok(0));
    }

    #[rstest]
    fn test_try_format_exact_fit(locale_en_us: Arc<LocaleContext>) {
        let money = Money::from_decimal(dec!(1), Currency::USD());
        let expected = "USD\u{a0}1.00";

        let mut dest = [0u8; 9];
        let written = try_format(&money, &MoneyFormat::GENERAL, &locale_en_us, &mut dest).unwrap();
        assert_eq!(written, expected.len());
        assert_eq!(&dest[..written], expected.as_bytes());
    }

    #[rstest]
    #[case(0)]
    #[case(3)]
    #[case(8)]
    fn test_try_format_insufficient_space(locale_en_us: Arc<LocaleContext>, #[case] size: usize) {
        let money = Money::from_decimal(dec!(1), Currency::USD());
        let mut dest = vec![0u8; size];
        let result = try_format(&money, &MoneyFormat::GENERAL, &locale_en_us, &mut dest);
        assert!(matches!(result, Err(FormatError::InsufficientSpace(_))));
        assert!(dest.iter().all(|&b| b == 0));
    }

    #[rstest]
    fn test_format_grows_past_stack_buffer(locale_invariant: Arc<LocaleContext>) {
        let symbol = "X".repeat(3 * MIN_FORMAT_BUFFER_SIZE);
        let currency = Currency::new("XTS", symbol.as_str(), 2, "Test currency");
        let money = Money::from_decimal(dec!(1234.5), currency);

        let format = MoneyFormat::parse("C").unwrap();
        let result = super::format(&money, &format, &locale_invariant);
        assert_eq!(result, format!("{symbol}1,234.50"));
    }

    #[rstest]
    #[case(dec!(1.5), "1.5", 27)]
    #[case(dec!(1234.5), "1,234.5", 27)]
    #[case(dec!(10), "10.", 28)]
    #[case(dec!(79228162514264337593543950335), "79,228,162,514,264,337,593,543,950,335.", 28)]
    fn test_format_max_decimals(
        locale_invariant: Arc<LocaleContext>,
        #[case] amount: Decimal,
        #[case] prefix: &str,
        #[case] zeros: usize,
    ) {
        let money = Money::from_decimal(amount, Currency::USD());
        let result = format_with(&money, "IB28", &locale_invariant).unwrap();
        assert_eq!(result, format!("USD\u{a0}{prefix}{}", "0".repeat(zeros)));

        let mut dest = [0u8; MIN_FORMAT_BUFFER_SIZE];
        let specifier = MoneyFormat::parse("IB28").unwrap();
        let written = try_format(&money, &specifier, &locale_invariant, &mut dest).unwrap();
        assert_eq!(&dest[..written], result.as_bytes());
    }

    #[rstest]
    #[case("fr-FR", "CB28")]
    #[case("fr-FR", "RA28")]
    #[case("en-IN", "IB28")]
    fn test_widest_builtin_render_fits_min_buffer(#[case] locale: &str, #[case] specifier: &str) {
        let locale = LocaleContext::get(locale).unwrap();
        let money = Money::from_decimal(-Decimal::MAX, Currency::EUR());
        let specifier = MoneyFormat::parse(specifier).unwrap();

        let mut dest = [0u8; MIN_FORMAT_BUFFER_SIZE];
        let written = try_format(&money, &specifier, &locale, &mut dest).unwrap();
        let expected = super::format(&money, &specifier, &locale);
        assert_eq!(&dest[..written], expected.as_bytes());
        assert!(written > expected.chars().count());
    }

    #[rstest]
    fn test_format_small_fraction(locale_invariant: Arc<LocaleContext>) {
        let money = Money::from_decimal(dec!(0.000123), Currency::USD());
        assert_eq!(format_with(&money, "", &locale_invariant).unwrap(), "USD\u{a0}0.000123");
    }

    #[rstest]
    fn test_format_invalid_specifier(locale_invariant: Arc<LocaleContext>) {
        let money = Money::from_decimal(dec!(1), Currency::USD());
        let err = format_with(&money, "Q", &locale_invariant).unwrap_err();
        assert!(matches!(err, FormatError::InvalidSpecifier(_)));
    }
}

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

//! Represents an amount of money in a specified currency denomination.

use std::{
    fmt::{Debug, Display},
    ops::Neg,
    str::FromStr,
};

use monetary_core::correctness::{FAILED, check_predicate_true};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    codec::{
        FormatError, MoneyFormat, MoneyParseError, ParseStyles,
        format::{format, format_with},
        parse::{parse, try_parse},
    },
    locale::LocaleContext,
    registry::CurrencyRegistry,
    types::Currency,
};

/// Represents an exact decimal amount of money in a specified currency.
///
/// The default value is a currency-less zero, used as a neutral marker. Any non-zero
/// amount always carries a currency.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Money {
    amount: Decimal,
    currency: Option<Currency>,
}

impl Money {
    /// Creates a new [`Money`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `amount` is non-zero and `currency` is `None`.
    pub fn new_checked(amount: Decimal, currency: Option<Currency>) -> anyhow::Result<Self> {
        check_predicate_true(
            currency.is_some() || amount.is_zero(),
            &format!("non-zero `amount` {amount} requires a currency"),
        )?;
        Ok(Self { amount, currency })
    }

    /// Creates a new [`Money`] instance.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails. See [`Money::new_checked`] for more details.
    #[must_use]
    pub fn new(amount: Decimal, currency: Option<Currency>) -> Self {
        Self::new_checked(amount, currency).expect(FAILED)
    }

    /// Creates a new [`Money`] instance of `amount` in `currency`.
    #[must_use]
    pub const fn from_decimal(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount,
            currency: Some(currency),
        }
    }

    /// Creates a new [`Money`] instance with a value of zero in `currency`.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self::from_decimal(Decimal::ZERO, currency)
    }

    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    #[must_use]
    pub const fn currency(&self) -> Option<Currency> {
        self.currency
    }

    /// Returns `true` if this is the currency-less default value.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.currency.is_none()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Parses `text` in `locale`, resolving currencies against the global registry.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is not a monetary value under `styles`.
    pub fn parse(
        text: &str,
        styles: &ParseStyles,
        locale: &LocaleContext,
    ) -> Result<Self, MoneyParseError> {
        parse(text, styles, locale, CurrencyRegistry::global())
    }

    /// Parses `text` in `locale`, resolving currencies against the global registry.
    #[must_use]
    pub fn try_parse(text: &str, styles: &ParseStyles, locale: &LocaleContext) -> Option<Self> {
        try_parse(text, styles, locale, CurrencyRegistry::global())
    }

    /// Formats this value with the format `specifier` in `locale`.
    ///
    /// # Errors
    ///
    /// Returns an error if `specifier` is not a valid format specifier.
    pub fn to_formatted_string(
        &self,
        specifier: &str,
        locale: &LocaleContext,
    ) -> Result<String, FormatError> {
        format_with(self, specifier, locale)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            amount: -self.amount,
            currency: self.currency,
        }
    }
}

impl Debug for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.currency {
            Some(currency) => write!(f, "{}({}, {})", stringify!(Money), self.amount, currency),
            None => write!(f, "{}({}, None)", stringify!(Money), self.amount),
        }
    }
}

impl Display for Money {
    /// Writes the general format in the invariant locale, e.g. "USD 1,234.56" with a
    /// non-breaking space.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let locale = LocaleContext::invariant();
        f.write_str(&format(self, &MoneyFormat::GENERAL, &locale))
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    /// Parses a currency code form such as "USD 1,234.56" in the invariant locale.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let locale = LocaleContext::invariant();
        Self::parse(s, &ParseStyles::currency_code(), &locale)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        if text.is_empty() {
            return Ok(Self::default());
        }
        Self::from_str(&text).map_err(serde::de::Error::custom)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::types::stubs::*;

    #[rstest]
    fn test_default_is_currency_less_zero() {
        let money = Money::default();
        assert!(money.is_default());
        assert!(money.is_zero());
        assert_eq!(money.currency(), None);
        assert_eq!(money.to_string(), "");
        assert_eq!(format!("{money:?}"), "Money(0, None)");
    }

    #[rstest]
    fn test_new_checked_requires_currency_for_non_zero() {
        let err = Money::new_checked(dec!(1), None).unwrap_err();
        assert_eq!(err.to_string(), "non-zero `amount` 1 requires a currency");
        assert!(Money::new_checked(dec!(0), None).unwrap().is_default());
    }

    #[rstest]
    #[should_panic(expected = "Condition failed")]
    fn test_new_panics_without_currency() {
        let _ = Money::new(dec!(0.01), None);
    }

    #[rstest]
    fn test_zero() {
        let money = Money::zero(Currency::EUR());
        assert!(money.is_zero());
        assert!(!money.is_default());
    }

    #[rstest]
    fn test_debug(usd_1234_56: Money) {
        assert_eq!(format!("{usd_1234_56:?}"), "Money(1234.56, USD)");
    }

    #[rstest]
    fn test_display(usd_1234_56: Money) {
        assert_eq!(usd_1234_56.to_string(), "USD\u{a0}1,234.56");
        assert_eq!((-usd_1234_56).to_string(), "USD\u{a0}(1,234.56)");
    }

    #[rstest]
    fn test_neg(usd_1234_56: Money) {
        assert_eq!((-usd_1234_56).amount(), dec!(-1234.56));
        assert_eq!(-Money::default(), Money::default());
    }

    #[rstest]
    fn test_equality_ignores_scale() {
        assert_eq!(
            Money::from_decimal(dec!(1.5), Currency::USD()),
            Money::from_decimal(dec!(1.50), Currency::USD())
        );
        assert_ne!(
            Money::from_decimal(dec!(1.5), Currency::USD()),
            Money::from_decimal(dec!(1.5), Currency::EUR())
        );
    }

    #[rstest]
    #[case("USD 1,234.56", dec!(1234.56), Currency::USD())]
    #[case("(5.00 EUR)", dec!(-5.00), Currency::EUR())]
    #[case("1000 JPY", dec!(1000), Currency::JPY())]
    fn test_from_str(#[case] input: &str, #[case] amount: Decimal, #[case] currency: Currency) {
        let money = Money::from_str(input).unwrap();
        assert_eq!(money.amount(), amount);
        assert_eq!(money.currency(), Some(currency));
    }

    #[rstest]
    fn test_from_str_display_round_trip(usd_1234_56: Money) {
        assert_eq!(Money::from_str(&usd_1234_56.to_string()).unwrap(), usd_1234_56);
        assert_eq!(Money::from_str(&(-usd_1234_56).to_string()).unwrap(), -usd_1234_56);
    }

    #[rstest]
    fn test_from_str_invalid() {
        let err = Money::from_str("$").unwrap_err();
        assert_eq!(err.to_string(), "Value '$' does not contain a valid amount");
    }

    #[rstest]
    fn test_parse_with_locale() {
        let locale = LocaleContext::get("de-DE").unwrap();
        let money = Money::parse("1.234,56 €", &ParseStyles::local_symbol(), &locale).unwrap();
        assert_eq!(money, Money::from_decimal(dec!(1234.56), Currency::EUR()));
        assert!(Money::try_parse("1.234,56", &ParseStyles::local_symbol(), &locale).is_none());
    }

    #[rstest]
    fn test_to_formatted_string(usd_1234_56: Money) {
        let locale = LocaleContext::get("en-US").unwrap();
        assert_eq!(usd_1234_56.to_formatted_string("C", &locale).unwrap(), "$1,234.56");
        assert!(usd_1234_56.to_formatted_string("CC", &locale).is_err());
    }

    #[rstest]
    fn test_serde_round_trip(usd_1234_56: Money) {
        let json = serde_json::to_string(&usd_1234_56).unwrap();
        assert_eq!(json, "\"USD\u{a0}1,234.56\"");
        let parsed: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, usd_1234_56);
    }

    #[rstest]
    fn test_serde_default() {
        let json = serde_json::to_string(&Money::default()).unwrap();
        assert_eq!(json, "\"\"");
        let parsed: Money = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_default());
    }
}

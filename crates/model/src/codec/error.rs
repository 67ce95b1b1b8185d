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

//! Error types of the monetary text codec.

use std::fmt::Display;

use monetary_core::BufferFull;
use thiserror::Error;

/// Why the local symbol strategy rejected an indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum LocalSymbolError {
    #[error("indicator is not a symbol")]
    NotSymbol,
    #[error("locale has no region information")]
    NoRegionInfo,
    #[error("local currency is not registered")]
    LocalCurrencyNotFound,
    #[error("indicator does not match the local currency symbol")]
    SymbolDoesNotMatch,
}

/// Why the currency code strategy rejected an indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum CurrencyCodeError {
    #[error("indicator is not a currency code")]
    NotCode,
    #[error("currency code not found")]
    CodeNotFound,
}

/// Why the unambiguous symbol strategy rejected an indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum UnambiguousSymbolError {
    #[error("indicator is not a symbol")]
    NotSymbol,
    #[error("no currency has this symbol")]
    NotFound,
    #[error("multiple matches found")]
    MultipleMatchesFound,
}

/// The failure of every attempted resolution strategy, `None` where a strategy was disabled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IndicatorFailures {
    pub local_symbol: Option<LocalSymbolError>,
    pub currency_code: Option<CurrencyCodeError>,
    pub unambiguous_symbol: Option<UnambiguousSymbolError>,
}

impl Display for IndicatorFailures {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reasons: [(&str, Option<&dyn Display>); 3] = [
            ("local symbol", self.local_symbol.as_ref().map(|e| e as &dyn Display)),
            ("currency code", self.currency_code.as_ref().map(|e| e as &dyn Display)),
            (
                "unambiguous symbol",
                self.unambiguous_symbol.as_ref().map(|e| e as &dyn Display),
            ),
        ];

        let mut first = true;
        for (strategy, reason) in reasons {
            let Some(reason) = reason else { continue };
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{strategy}: {reason}")?;
            first = false;
        }
        Ok(())
    }
}

/// A structural problem with the text surrounding the amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum LayoutError {
    #[error("unexpected whitespace")]
    UnexpectedWhitespace,
    #[error("sign not allowed in this position")]
    SignNotAllowed,
    #[error("more than one sign")]
    MultipleSigns,
    #[error("more than one currency indicator")]
    MultipleIndicators,
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,
}

/// A categorized failure to parse monetary text.
///
/// Every variant carries the original input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("Value '{input}' has an invalid format: {reason}")]
    InvalidFormat { input: String, reason: LayoutError },
    #[error("Value '{input}' does not contain a valid amount")]
    InvalidAmount { input: String },
    #[error("Value '{input}' does not contain a currency indicator")]
    MissingCurrency { input: String },
    #[error("Value '{input}' has currency indicator '{indicator}' which could not be resolved: {failures}")]
    UnresolvedCurrency {
        input: String,
        indicator: String,
        failures: IndicatorFailures,
    },
}

/// An invalid format specifier.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SpecifierError {
    #[error("Invalid format specifier '{specifier}': unexpected '{found}' at position {position}")]
    UnexpectedChar {
        specifier: String,
        found: char,
        position: usize,
    },
    #[error("Invalid format specifier '{specifier}': {digits} decimal digits exceeds the maximum of 28")]
    TooManyDigits { specifier: String, digits: String },
}

/// A failure to format a monetary value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error(transparent)]
    InvalidSpecifier(#[from] SpecifierError),
    #[error("Insufficient space: {0}")]
    InsufficientSpace(BufferFull),
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_failures_display_joins_attempted_strategies() {
        let failures = IndicatorFailures {
            local_symbol: Some(LocalSymbolError::SymbolDoesNotMatch),
            currency_code: None,
            unambiguous_symbol: Some(UnambiguousSymbolError::MultipleMatchesFound),
        };
        assert_eq!(
            failures.to_string(),
            "local symbol: indicator does not match the local currency symbol, \
             unambiguous symbol: multiple matches found"
        );
    }

    #[rstest]
    fn test_failures_display_empty() {
        assert_eq!(IndicatorFailures::default().to_string(), "");
    }

    #[rstest]
    fn test_unresolved_message() {
        let err = MoneyParseError::UnresolvedCurrency {
            input: "XYZ 1".to_string(),
            indicator: "XYZ".to_string(),
            failures: IndicatorFailures {
                currency_code: Some(CurrencyCodeError::CodeNotFound),
                ..Default::default()
            },
        };
        assert_eq!(
            err.to_string(),
            "Value 'XYZ 1' has currency indicator 'XYZ' which could not be resolved: \
             currency code: currency code not found"
        );
    }

    #[rstest]
    fn test_insufficient_space_message() {
        let err = FormatError::InsufficientSpace(BufferFull {
            required: 4,
            available: 1,
        });
        assert_eq!(
            err.to_string(),
            "Insufficient space: Buffer full: required 4 bytes, 1 available"
        );
    }
}

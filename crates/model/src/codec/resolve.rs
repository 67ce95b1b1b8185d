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

//! Resolution of currency indicators to registered currencies.
//!
//! Strategies run in a fixed order and the first success wins:
//!
//! 1. Local symbol: the locale's own currency symbol, mapped to its region currency.
//! 2. Currency code: a registered code, case-insensitive.
//! 3. Unambiguous symbol: a symbol displayed by exactly one registered currency.
//!
//! Disabled strategies are skipped. Each attempted strategy's rejection is kept, so a
//! failed resolution can explain itself.

use super::{
    error::{CurrencyCodeError, IndicatorFailures, LocalSymbolError, UnambiguousSymbolError},
    styles::ParseStyles,
};
use crate::{locale::LocaleContext, registry::CurrencyRegistry, types::Currency};

/// What the text around an indicator reveals about its shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndicatorShape {
    /// Written flush against the amount, like a symbol (`($100)`).
    Symbol,
    /// Separated from the amount by whitespace, like a code (`(100) USD`).
    Code,
    /// Nothing is known, every strategy may apply.
    Unknown,
}

/// Resolves `indicator` to a currency using the strategies enabled in `styles`.
///
/// # Errors
///
/// Returns the rejection of every attempted strategy if none succeeds.
pub fn resolve_indicator(
    indicator: &str,
    shape: IndicatorShape,
    styles: &ParseStyles,
    locale: &LocaleContext,
    registry: &CurrencyRegistry,
) -> Result<Currency, IndicatorFailures> {
    let mut failures = IndicatorFailures::default();

    if styles.allow_local_symbol() {
        match resolve_local_symbol(indicator, shape, locale, registry) {
            Ok(currency) => return Ok(currency),
            Err(e) => failures.local_symbol = Some(e),
        }
    }

    if styles.allow_currency_code() {
        match resolve_currency_code(indicator, shape, registry) {
            Ok(currency) => return Ok(currency),
            Err(e) => failures.currency_code = Some(e),
        }
    }

    if styles.allow_unambiguous_symbols() {
        match resolve_unambiguous_symbol(indicator, shape, locale, registry) {
            Ok(currency) => return Ok(currency),
            Err(e) => failures.unambiguous_symbol = Some(e),
        }
    }

    Err(failures)
}

/// Resolves `indicator` if it is the locale's own currency symbol.
///
/// # Errors
///
/// Returns an error if the indicator is code shaped, the locale has no region, the region
/// currency is not registered, or the indicator differs from the locale symbol.
pub fn resolve_local_symbol(
    indicator: &str,
    shape: IndicatorShape,
    locale: &LocaleContext,
    registry: &CurrencyRegistry,
) -> Result<Currency, LocalSymbolError> {
    if shape == IndicatorShape::Code {
        return Err(LocalSymbolError::NotSymbol);
    }

    let region = locale.region().ok_or(LocalSymbolError::NoRegionInfo)?;
    let currency = registry
        .get(&region.currency_code)
        .ok_or(LocalSymbolError::LocalCurrencyNotFound)?;

    if indicator != locale.local_currency_symbol() {
        return Err(LocalSymbolError::SymbolDoesNotMatch);
    }

    Ok(currency)
}

/// Resolves `indicator` as a registered currency code.
///
/// # Errors
///
/// Returns an error if the indicator is symbol shaped or not a registered code.
pub fn resolve_currency_code(
    indicator: &str,
    shape: IndicatorShape,
    registry: &CurrencyRegistry,
) -> Result<Currency, CurrencyCodeError> {
    if shape == IndicatorShape::Symbol {
        return Err(CurrencyCodeError::NotCode);
    }

    registry.get(indicator).ok_or(CurrencyCodeError::CodeNotFound)
}

/// Resolves `indicator` as a symbol displayed by exactly one registered currency.
///
/// # Errors
///
/// Returns an error if the indicator is code shaped, or if zero or several currencies
/// display it.
pub fn resolve_unambiguous_symbol(
    indicator: &str,
    shape: IndicatorShape,
    locale: &LocaleContext,
    registry: &CurrencyRegistry,
) -> Result<Currency, UnambiguousSymbolError> {
    if shape == IndicatorShape::Code {
        return Err(UnambiguousSymbolError::NotSymbol);
    }

    match registry.symbol_index(locale).lookup(indicator) {
        [] => Err(UnambiguousSymbolError::NotFound),
        [currency] => Ok(*currency),
        _ => Err(UnambiguousSymbolError::MultipleMatchesFound),
    }
}

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

//! The registry-wide symbol index used to resolve unambiguous currency symbols.

use ahash::AHashMap;
use monetary_core::{correctness::check_predicate_false, string::contains_whitespace_or_digit};
use smallvec::SmallVec;
use ustr::Ustr;

use crate::types::Currency;

/// Identifies the locale-dependent inputs of a [`SymbolIndex`].
///
/// Two locales with the same region currency and local symbol share an index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SymbolIndexKey {
    /// The code of the locale's region currency, if the locale has a region.
    pub region_currency: Option<Ustr>,
    /// The locale's currency symbol.
    pub local_symbol: Ustr,
}

/// Maps each currency symbol to every currency displaying it.
///
/// The region currency of the indexing locale is indexed under the locale's own symbol
/// rather than the registry symbol, so "kr" maps to SEK in Sweden even when the registry
/// lists a different display symbol.
#[derive(Clone, Debug, Default)]
pub struct SymbolIndex {
    entries: AHashMap<Ustr, SmallVec<[Currency; 2]>>,
}

impl SymbolIndex {
    /// Builds an index over `currencies` for the locale described by `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if any effective symbol is empty or contains whitespace or a
    /// decimal digit, since the parser could never extract such a symbol from text.
    pub fn build<I>(currencies: I, key: &SymbolIndexKey) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = Currency>,
    {
        let mut entries: AHashMap<Ustr, SmallVec<[Currency; 2]>> = AHashMap::new();

        for currency in currencies {
            let symbol = if key.region_currency == Some(currency.code) {
                key.local_symbol
            } else {
                currency.symbol
            };

            check_predicate_false(
                symbol.is_empty() || contains_whitespace_or_digit(&symbol),
                &format!(
                    "currency {} has symbol '{symbol}' which cannot be used as a currency indicator",
                    currency.code
                ),
            )?;

            entries.entry(symbol).or_default().push(currency);
        }

        Ok(Self { entries })
    }

    /// Returns every currency displaying `symbol` (empty if none).
    #[must_use]
    pub fn lookup(&self, symbol: &str) -> &[Currency] {
        // Never interned means no currency carries it
        Ustr::from_existing(symbol)
            .and_then(|symbol| self.entries.get(&symbol))
            .map(SmallVec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the number of distinct symbols indexed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no symbols are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn key(region_currency: Option<&str>, local_symbol: &str) -> SymbolIndexKey {
        SymbolIndexKey {
            region_currency: region_currency.map(Ustr::from),
            local_symbol: Ustr::from(local_symbol),
        }
    }

    #[rstest]
    fn test_shared_symbols_accumulate() {
        let currencies = [Currency::NOK(), Currency::SEK(), Currency::EUR()];
        let index = SymbolIndex::build(currencies, &key(None, "¤")).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.lookup("kr"), &[Currency::NOK(), Currency::SEK()]);
        assert_eq!(index.lookup("€"), &[Currency::EUR()]);
    }

    #[rstest]
    fn test_region_currency_uses_local_symbol() {
        let currencies = [Currency::CHF(), Currency::EUR()];
        let index = SymbolIndex::build(currencies, &key(Some("CHF"), "Fr.")).unwrap();

        assert_eq!(index.lookup("Fr."), &[Currency::CHF()]);
        assert!(index.lookup("CHF").is_empty());
    }

    #[rstest]
    fn test_lookup_unknown_symbol_is_empty() {
        let index = SymbolIndex::build([Currency::USD()], &key(None, "¤")).unwrap();
        assert!(index.lookup("never-interned-symbol-§§").is_empty());
        assert!(index.lookup("").is_empty());
    }

    #[rstest]
    #[case("1$")]
    #[case("U S")]
    fn test_unextractable_symbol_is_error(#[case] symbol: &str) {
        let currency = Currency::new("XTS", symbol, 2, "Test");
        let err = SymbolIndex::build([currency], &key(None, "¤")).unwrap_err();
        assert!(err.to_string().contains("currency XTS has symbol"));
    }

    #[rstest]
    fn test_unextractable_local_symbol_is_error() {
        let err = SymbolIndex::build([Currency::USD()], &key(Some("USD"), "US $")).unwrap_err();
        assert!(err.to_string().contains("currency USD"));
    }
}

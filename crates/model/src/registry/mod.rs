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

//! The currency registry consulted when resolving currency indicators.
//!
//! A [`CurrencyRegistry`] is immutable once built. Lookups by code are case-insensitive and
//! allocation free. Per-locale [`SymbolIndex`] instances are built lazily on first use and
//! memoized for the lifetime of the registry:
//!
//! - Reads go through a concurrent map and take no global lock.
//! - Concurrent first uses may each build an index. The first one inserted wins and the
//!   others are dropped.

pub mod index;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

use std::sync::{Arc, OnceLock};

use ahash::AHashMap;
use dashmap::DashMap;
use monetary_core::correctness::{FAILED, check_nonempty_string};
use smallvec::SmallVec;
use ustr::Ustr;

pub use self::index::{SymbolIndex, SymbolIndexKey};
use crate::{
    locale::LocaleContext,
    types::{Currency, currency::builtin_currencies},
};

type CodeKey = [u8; 3];

fn code_key(code: &str) -> Option<CodeKey> {
    let bytes: [u8; 3] = code.as_bytes().try_into().ok()?;
    bytes
        .iter()
        .all(u8::is_ascii_alphabetic)
        .then(|| bytes.map(|b| b.to_ascii_uppercase()))
}

/// An immutable set of currencies with memoized symbol indexes.
#[derive(Debug)]
pub struct CurrencyRegistry {
    name: Ustr,
    currencies: Vec<Currency>,
    by_code: AHashMap<CodeKey, usize>,
    symbol_indexes: DashMap<SymbolIndexKey, Arc<SymbolIndex>>,
}

impl CurrencyRegistry {
    /// Creates a new [`CurrencyRegistry`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty or if two currencies share a code.
    pub fn new_checked<I>(name: &str, currencies: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = Currency>,
    {
        check_nonempty_string(name, "name")?;

        let mut list = Vec::new();
        let mut by_code = AHashMap::new();
        for currency in currencies {
            let key = code_key(&currency.code)
                .ok_or_else(|| anyhow::anyhow!("invalid currency code '{}'", currency.code))?;
            if by_code.insert(key, list.len()).is_some() {
                anyhow::bail!("duplicate currency code '{}' in registry '{name}'", currency.code);
            }
            list.push(currency);
        }

        Ok(Self {
            name: Ustr::from(name),
            currencies: list,
            by_code,
            symbol_indexes: DashMap::new(),
        })
    }

    /// Creates a new [`CurrencyRegistry`] instance.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails. See [`CurrencyRegistry::new_checked`] for more details.
    #[must_use]
    pub fn new<I>(name: &str, currencies: I) -> Self
    where
        I: IntoIterator<Item = Currency>,
    {
        Self::new_checked(name, currencies).expect(FAILED)
    }

    /// Returns the process-wide default registry of built-in currencies.
    #[must_use]
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<CurrencyRegistry> = OnceLock::new();
        GLOBAL.get_or_init(|| Self::new("default", builtin_currencies()))
    }

    /// Returns the name of the registry.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the currency for `code` (case-insensitive), if registered.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<Currency> {
        let key = code_key(code)?;
        self.by_code.get(&key).map(|&i| self.currencies[i])
    }

    /// Returns `true` if a currency with `code` (case-insensitive) is registered.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Returns an iterator over the currencies in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Currency> {
        self.currencies.iter()
    }

    /// Returns the number of registered currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// Returns `true` if the registry holds no currencies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// Returns the symbol index for `locale`, building and memoizing it on first use.
    ///
    /// # Panics
    ///
    /// Panics if a registered currency has a symbol that can never be extracted as a
    /// currency indicator (see [`SymbolIndex::build`]). This is a configuration error of
    /// the registry, surfaced at first use.
    #[must_use]
    pub fn symbol_index(&self, locale: &LocaleContext) -> Arc<SymbolIndex> {
        let key = SymbolIndexKey {
            region_currency: locale.region().map(|region| region.currency_code),
            local_symbol: Ustr::from(locale.local_currency_symbol()),
        };

        if let Some(index) = self.symbol_indexes.get(&key) {
            return Arc::clone(index.value());
        }

        // Built outside the map lock, a concurrent builder may win the insert below
        let index = SymbolIndex::build(self.currencies.iter().copied(), &key).expect(FAILED);
        let index = Arc::new(index);
        log::debug!(
            "Built symbol index for registry '{}' and locale '{}' ({} symbols)",
            self.name,
            locale.name(),
            index.len(),
        );

        Arc::clone(self.symbol_indexes.entry(key).or_insert(index).value())
    }

    /// Returns every currency displaying `symbol` under `locale`.
    #[must_use]
    pub fn currencies_for_symbol(
        &self,
        symbol: &str,
        locale: &LocaleContext,
    ) -> SmallVec<[Currency; 2]> {
        SmallVec::from_slice(self.symbol_index(locale).lookup(symbol))
    }
}

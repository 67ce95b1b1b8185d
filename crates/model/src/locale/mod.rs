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

//! Locale contexts: the region and number formatting conventions driving the codec.
//!
//! A [`LocaleContext`] wraps validated [`LocaleConventions`] and memoizes the
//! [`LocaleRules`] derived from them. Built-in locales are shared process-wide through
//! [`LocaleContext::get`], so their caches outlive individual parse and format calls.

pub mod builtin;
pub mod conventions;
pub mod rules;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

use std::{
    fmt::{Debug, Display},
    sync::{Arc, OnceLock},
};

use monetary_core::correctness::FAILED;

pub use self::{
    conventions::{CurrencyConventions, LocaleConventions, NumberConventions, Region},
    rules::{LocaleRules, NumberRules},
};

/// The formatting conventions of a locale, with lazily derived numeric rules.
pub struct LocaleContext {
    conventions: LocaleConventions,
    rules: OnceLock<LocaleRules>,
}

impl LocaleContext {
    /// Creates a new [`LocaleContext`] from `conventions`.
    ///
    /// # Errors
    ///
    /// Returns an error if the conventions fail validation, see [`LocaleConventions::validate`].
    pub fn from_conventions(conventions: LocaleConventions) -> anyhow::Result<Self> {
        conventions.validate()?;
        Ok(Self {
            conventions,
            rules: OnceLock::new(),
        })
    }

    /// Returns the shared built-in locale named `name`, if any.
    ///
    /// Names are matched case-insensitively and accept `_` for `-`.
    #[must_use]
    pub fn get(name: &str) -> Option<Arc<Self>> {
        builtin::builtin_locale(name)
    }

    /// Returns the shared invariant locale.
    ///
    /// # Panics
    ///
    /// Panics if the built-in locale table is missing its invariant entry.
    #[must_use]
    pub fn invariant() -> Arc<Self> {
        Self::get("")
            .ok_or_else(|| anyhow::anyhow!("invariant locale missing from built-in locales"))
            .expect(FAILED)
    }

    /// Returns the locale name, empty for the invariant locale.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.conventions.name
    }

    #[must_use]
    pub fn region(&self) -> Option<&Region> {
        self.conventions.region.as_ref()
    }

    #[must_use]
    pub const fn conventions(&self) -> &LocaleConventions {
        &self.conventions
    }

    /// Returns the native and currency rules of this locale, deriving them on first use.
    pub fn rules(&self) -> &LocaleRules {
        self.rules.get_or_init(|| {
            log::debug!("Deriving numeric rules for locale '{}'", self.name());
            LocaleRules::derive(&self.conventions)
        })
    }

    /// Returns the currency symbol of this locale (e.g., "$" for en-US).
    #[must_use]
    pub fn local_currency_symbol(&self) -> &str {
        &self.conventions.currency.symbol
    }

    /// Returns `true` if `code` (case-insensitive) is the currency of this locale's region.
    #[must_use]
    pub fn is_local_currency(&self, code: &str) -> bool {
        self.region()
            .is_some_and(|region| region.currency_code.eq_ignore_ascii_case(code))
    }

    #[must_use]
    pub const fn positive_pattern(&self) -> u8 {
        self.conventions.currency.positive_pattern
    }

    #[must_use]
    pub const fn negative_pattern(&self) -> u8 {
        self.conventions.currency.negative_pattern
    }
}

impl Debug for LocaleContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(LocaleContext))
            .field("name", &self.name())
            .field("region", &self.region())
            .finish_non_exhaustive()
    }
}

impl Display for LocaleContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.name().is_empty() {
            f.write_str("invariant")
        } else {
            f.write_str(self.name())
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{stubs::*, *};

    #[rstest]
    fn test_invariant(locale_invariant: Arc<LocaleContext>) {
        assert_eq!(locale_invariant.name(), "");
        assert_eq!(locale_invariant.to_string(), "invariant");
        assert!(locale_invariant.region().is_none());
        assert_eq!(locale_invariant.local_currency_symbol(), "¤");
        assert!(!locale_invariant.is_local_currency("USD"));
    }

    #[rstest]
    fn test_region_and_local_currency(locale_de_ch: Arc<LocaleContext>) {
        let region = locale_de_ch.region().unwrap();
        assert_eq!(region.name.as_str(), "CH");
        assert!(locale_de_ch.is_local_currency("CHF"));
        assert!(locale_de_ch.is_local_currency("chf"));
        assert!(!locale_de_ch.is_local_currency("EUR"));
        assert_eq!(locale_de_ch.positive_pattern(), 2);
        assert_eq!(locale_de_ch.negative_pattern(), 12);
    }

    #[rstest]
    fn test_rules_are_memoized(locale_de_de: Arc<LocaleContext>) {
        let first: *const LocaleRules = locale_de_de.rules();
        let second: *const LocaleRules = locale_de_de.rules();
        assert_eq!(first, second);
        assert_eq!(locale_de_de.rules().currency.group_separator, ".");
    }

    #[rstest]
    fn test_from_conventions_rejects_invalid() {
        let mut conventions = conventions_colliding_separators();
        conventions.currency.negative_pattern = 40;
        assert!(LocaleContext::from_conventions(conventions).is_err());
    }

    #[rstest]
    fn test_debug() {
        let locale = LocaleContext::from_conventions(conventions_colliding_separators()).unwrap();
        assert!(format!("{locale:?}").starts_with("LocaleContext { name: \"xx-COLLIDE\""));
    }
}

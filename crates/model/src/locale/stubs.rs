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

//! Locale fixtures for tests.

use std::sync::Arc;

use rstest::fixture;
use smallvec::smallvec;

use crate::locale::{
    CurrencyConventions, LocaleContext, LocaleConventions, NumberConventions, Region,
};

fn builtin(name: &str) -> Arc<LocaleContext> {
    LocaleContext::get(name).unwrap_or_else(|| panic!("no built-in locale '{name}'"))
}

#[fixture]
pub fn locale_invariant() -> Arc<LocaleContext> {
    LocaleContext::invariant()
}

#[fixture]
pub fn locale_en_us() -> Arc<LocaleContext> {
    builtin("en-US")
}

#[fixture]
pub fn locale_en_gb() -> Arc<LocaleContext> {
    builtin("en-GB")
}

#[fixture]
pub fn locale_en_ca() -> Arc<LocaleContext> {
    builtin("en-CA")
}

#[fixture]
pub fn locale_en_in() -> Arc<LocaleContext> {
    builtin("en-IN")
}

#[fixture]
pub fn locale_de_de() -> Arc<LocaleContext> {
    builtin("de-DE")
}

#[fixture]
pub fn locale_fr_fr() -> Arc<LocaleContext> {
    builtin("fr-FR")
}

#[fixture]
pub fn locale_de_ch() -> Arc<LocaleContext> {
    builtin("de-CH")
}

#[fixture]
pub fn locale_ja_jp() -> Arc<LocaleContext> {
    builtin("ja-JP")
}

#[fixture]
pub fn locale_sv_se() -> Arc<LocaleContext> {
    builtin("sv-SE")
}

/// Cape Verde, where the currency symbol "$" is also the currency decimal separator.
#[fixture]
pub fn locale_pt_cv() -> Arc<LocaleContext> {
    builtin("pt-CV")
}

/// A locale whose currency group separator equals its currency decimal separator.
#[must_use]
pub fn conventions_colliding_separators() -> LocaleConventions {
    LocaleConventions {
        name: "xx-COLLIDE".to_string(),
        region: Some(Region::new("XX", "EUR")),
        number: NumberConventions {
            decimal_separator: ".".to_string(),
            group_separator: ",".to_string(),
            group_sizes: smallvec![3],
            decimal_digits: 2,
            negative_sign: "-".to_string(),
            positive_sign: "+".to_string(),
        },
        currency: CurrencyConventions {
            symbol: "€".to_string(),
            decimal_separator: ",".to_string(),
            group_separator: ",".to_string(),
            group_sizes: smallvec![3],
            decimal_digits: 2,
            negative_sign: "-".to_string(),
            positive_sign: "+".to_string(),
            positive_pattern: 3,
            negative_pattern: 8,
        },
    }
}

#[fixture]
pub fn locale_colliding_separators() -> Arc<LocaleContext> {
    Arc::new(
        LocaleContext::from_conventions(conventions_colliding_separators())
            .unwrap_or_else(|e| panic!("{e}")),
    )
}

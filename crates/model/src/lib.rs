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

//! Monetary values and the locale-aware monetary text codec.
//!
//! The `monetary-model` crate provides:
//!
//! - [`types`]: [`Currency`](types::Currency) and [`Money`](types::Money) value types.
//! - [`registry`]: the [`CurrencyRegistry`](registry::CurrencyRegistry) consulted when
//!   resolving currency codes and symbols.
//! - [`locale`]: locale conventions and the numeric rules derived from them.
//! - [`codec`]: parsing of free-form monetary text and pattern driven formatting.
//!
//! # Feature flags
//!
//! - `stubs`: Enables test fixtures for locales, registries and values.
//!
//! # Example
//!
//! ```
//! use monetary_model::{codec::ParseStyles, locale::LocaleContext, types::Money};
//!
//! let locale = LocaleContext::get("de-DE").unwrap();
//! let money = Money::parse("-1.234,56 €", &ParseStyles::local_symbol(), &locale).unwrap();
//!
//! assert_eq!(money.to_formatted_string("C", &locale).unwrap(), "-1.234,56\u{a0}€");
//! assert_eq!(money.to_formatted_string("I", &locale).unwrap(), "EUR\u{a0}-1.234,56");
//! ```

#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]

pub mod codec;
pub mod locale;
pub mod registry;
pub mod types;

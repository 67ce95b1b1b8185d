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

//! The monetary text codec: parsing text into [`Money`](crate::types::Money) values and
//! formatting them back.
//!
//! - [`parse()`] and [`try_parse()`] read text under a set of [`ParseStyles`].
//! - [`format()`], [`format_with()`] and [`try_format()`] render text from a [`MoneyFormat`].
//! - [`resolve`] maps currency indicators to currencies.
//! - [`patterns`] holds the sign and symbol placement tables.

pub mod error;
pub mod format;
pub mod parse;
pub mod patterns;
pub mod resolve;
pub mod specifier;
pub mod styles;

// Re-exports
pub use self::{
    error::{
        CurrencyCodeError, FormatError, IndicatorFailures, LayoutError, LocalSymbolError,
        MoneyParseError, SpecifierError, UnambiguousSymbolError,
    },
    format::{MIN_FORMAT_BUFFER_SIZE, format, format_with, try_format},
    parse::{parse, try_parse},
    resolve::IndicatorShape,
    specifier::{CurrencyStyle, DecimalsStyle, MoneyFormat, NumberStyle},
    styles::{ParseStyles, ParseStylesBuilder},
};

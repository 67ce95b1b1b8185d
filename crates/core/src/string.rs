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

//! String manipulation functionality.

/// Trims trailing NUL sentinel characters, as left behind by fixed-size text buffers.
///
/// # Examples
///
/// ```
/// use monetary_core::string::trim_end_sentinels;
///
/// assert_eq!(trim_end_sentinels("USD 1.00\0\0"), "USD 1.00");
/// assert_eq!(trim_end_sentinels("\0"), "");
/// ```
#[must_use]
pub fn trim_end_sentinels(s: &str) -> &str {
    s.trim_end_matches('\0')
}

/// Returns `true` if `s` contains a whitespace or decimal digit character.
#[must_use]
pub fn contains_whitespace_or_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_whitespace() || c.is_ascii_digit())
}

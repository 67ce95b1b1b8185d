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

//! Number formatting utilities.

use std::fmt::Write;

use smallvec::SmallVec;

/// Digit group sizes, ordered from the group nearest the decimal separator outwards.
///
/// The last size repeats for all remaining digits; a trailing `0` stops grouping so the
/// remaining digits are emitted as one run (e.g. `[3, 0]`).
pub type GroupSizes = SmallVec<[u8; 4]>;

/// Writes the ASCII `digits` of an integer part to `w`, inserting `separator` between groups.
///
/// Grouping is skipped entirely when `separator` is empty, `sizes` is empty or its first
/// size is zero.
///
/// # Errors
///
/// Returns an error if the underlying writer fails (e.g. a bounded buffer is full).
///
/// # Panics
///
/// Debug builds assert that `digits` is ASCII.
pub fn write_grouped_digits<W: Write>(
    w: &mut W,
    digits: &str,
    separator: &str,
    sizes: &[u8],
) -> std::fmt::Result {
    debug_assert!(digits.is_ascii(), "digits must be ASCII, was '{digits}'");

    let Some(&last_size) = sizes.last() else {
        return w.write_str(digits);
    };

    if separator.is_empty() || sizes[0] == 0 {
        return w.write_str(digits);
    }

    let len = digits.len();
    let mut splits: SmallVec<[usize; 16]> = SmallVec::new();
    let mut from_right = 0;
    let mut index = 0;

    loop {
        let size = usize::from(sizes.get(index).copied().unwrap_or(last_size));
        if size == 0 {
            break;
        }

        from_right += size;
        if from_right >= len {
            break;
        }

        splits.push(len - from_right);
        index = (index + 1).min(sizes.len());
    }

    let mut start = 0;
    for split in splits.into_iter().rev() {
        w.write_str(&digits[start..split])?;
        w.write_str(separator)?;
        start = split;
    }

    w.write_str(&digits[start..])
}

/// Returns the ASCII `digits` of an integer part with `separator` inserted between groups.
///
/// # Examples
///
/// ```
/// use monetary_core::formatting::group_digits;
///
/// assert_eq!(group_digits("1234567", ",", &[3]), "1,234,567");
/// assert_eq!(group_digits("12345678", ",", &[3, 2]), "1,23,45,678");
/// ```
#[must_use]
pub fn group_digits(digits: &str, separator: &str, sizes: &[u8]) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 2 * separator.len());
    // Writing to a `String` is infallible
    let _ = write_grouped_digits(&mut result, digits, separator, sizes);
    result
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("0", "0")]
    #[case("1", "1")]
    #[case("12", "12")]
    #[case("123", "123")]
    #[case("1234", "1,234")]
    #[case("12345", "12,345")]
    #[case("123456", "123,456")]
    #[case("1234567", "1,234,567")]
    fn test_group_digits_by_three(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(group_digits(input, ",", &[3]), expected);
    }

    #[rstest]
    #[case("1234", &[3, 2], "1,234")]
    #[case("123456", &[3, 2], "1,23,456")]
    #[case("123456789", &[3, 2], "12,34,56,789")]
    #[case("123456789", &[3, 0], "123456,789")]
    #[case("123456789", &[0], "123456789")]
    #[case("123456789", &[], "123456789")]
    #[case("123456789", &[4], "1,2345,6789")]
    fn test_group_digits_with_sizes(
        #[case] input: &str,
        #[case] sizes: &[u8],
        #[case] expected: &str,
    ) {
        assert_eq!(group_digits(input, ",", sizes), expected);
    }

    #[rstest]
    #[case("1234567", "\u{a0}", "1\u{a0}234\u{a0}567")]
    #[case("1234567", "'", "1'234'567")]
    #[case("1234567", "", "1234567")]
    #[case("1234567", "--", "1--234--567")]
    fn test_group_digits_with_separators(
        #[case] input: &str,
        #[case] separator: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(group_digits(input, separator, &[3]), expected);
    }

    #[rstest]
    fn test_write_grouped_digits_propagates_writer_errors() {
        struct Failing;

        impl Write for Failing {
            fn write_str(&mut self, _s: &str) -> std::fmt::Result {
                Err(std::fmt::Error)
            }
        }

        assert!(write_grouped_digits(&mut Failing, "1234", ",", &[3]).is_err());
    }
}

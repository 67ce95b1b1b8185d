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

//! A bounded UTF-8 output buffer over caller-supplied storage.
//!
//! [`BoundedBuf`] lets a renderer write into a fixed-capacity region (typically a stack
//! array) without allocating. Writes are all-or-nothing per call: when a string does not
//! fit, nothing is copied and [`std::fmt::Error`] is returned, so the caller can retry the
//! whole render with a larger region.
//!
//! | Property              | Behavior                                   |
//! |-----------------------|--------------------------------------------|
//! | Storage               | Borrowed `&mut [u8]`, never reallocated.   |
//! | Partial writes        | Never, each `write_str` fits or fails.     |
//! | Contents              | Always valid UTF-8.                        |
//! | Restartable           | Yes, via [`BoundedBuf::clear`].            |

// Required for unchecked UTF-8 conversion of the written prefix
#![allow(unsafe_code)]

use std::fmt::{Debug, Display, Write};

/// Error returned when a [`BoundedBuf`] has insufficient remaining capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferFull {
    /// The number of bytes the failed write required.
    pub required: usize,
    /// The number of bytes that were still available.
    pub available: usize,
}

impl Display for BufferFull {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Buffer full: required {} bytes, {} available",
            self.required, self.available
        )
    }
}

impl std::error::Error for BufferFull {}

/// A bounded UTF-8 writer over a borrowed byte slice.
pub struct BoundedBuf<'a> {
    buf: &'a mut [u8],
    len: usize,
    overflow: Option<BufferFull>,
}

impl<'a> BoundedBuf<'a> {
    /// Creates a new empty [`BoundedBuf`] over `buf`.
    #[must_use]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            len: 0,
            overflow: None,
        }
    }

    /// Returns the total capacity in bytes.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of bytes written.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been written.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of bytes still available.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.len
    }

    /// Returns the first overflow recorded since the last [`clear`](Self::clear), if any.
    #[inline]
    #[must_use]
    pub const fn overflow(&self) -> Option<BufferFull> {
        self.overflow
    }

    /// Discards all written content so a render can restart from scratch.
    pub fn clear(&mut self) {
        self.len = 0;
        self.overflow = None;
    }

    /// Zeroes the written bytes, then discards them as [`clear`](Self::clear) does.
    pub fn wipe(&mut self) {
        self.buf[..self.len].fill(0);
        self.clear();
    }

    /// Appends `s`, or returns [`BufferFull`] without writing anything.
    ///
    /// # Errors
    ///
    /// Returns an error if `s` does not fit in the remaining capacity.
    pub fn push_str(&mut self, s: &str) -> Result<(), BufferFull> {
        let bytes = s.as_bytes();
        let available = self.remaining();
        if bytes.len() > available {
            let full = BufferFull {
                required: bytes.len(),
                available,
            };
            self.overflow.get_or_insert(full);
            return Err(full);
        }

        self.buf[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
        Ok(())
    }

    /// Returns the written content as a `&str`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: Only whole `&str` values are ever copied in by `push_str`,
        // so the written prefix is always valid UTF-8.
        unsafe { std::str::from_utf8_unchecked(&self.buf[..self.len]) }
    }
}

impl Write for BoundedBuf<'_> {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        self.push_str(s).map_err(|_| std::fmt::Error)
    }
}

impl Debug for BoundedBuf<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(BoundedBuf))
            .field("content", &self.as_str())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl Display for BoundedBuf<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_new_is_empty() {
        let mut storage = [0u8; 8];
        let buf = BoundedBuf::new(&mut storage);
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), 8);
        assert_eq!(buf.remaining(), 8);
        assert_eq!(buf.as_str(), "");
    }

    #[rstest]
    fn test_push_str_within_capacity() {
        let mut storage = [0u8; 8];
        let mut buf = BoundedBuf::new(&mut storage);
        buf.push_str("USD").unwrap();
        buf.push_str(" 1").unwrap();
        assert_eq!(buf.as_str(), "USD 1");
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.remaining(), 3);
    }

    #[rstest]
    fn test_push_str_exact_fit() {
        let mut storage = [0u8; 3];
        let mut buf = BoundedBuf::new(&mut storage);
        buf.push_str("EUR").unwrap();
        assert_eq!(buf.remaining(), 0);
        assert_eq!(buf.as_str(), "EUR");
    }

    #[rstest]
    fn test_push_str_overflow_writes_nothing() {
        let mut storage = [0u8; 4];
        let mut buf = BoundedBuf::new(&mut storage);
        buf.push_str("ab").unwrap();

        let err = buf.push_str("€€").unwrap_err();

        assert_eq!(
            err,
            BufferFull {
                required: 6,
                available: 2
            }
        );
        assert_eq!(buf.as_str(), "ab");
        assert_eq!(buf.overflow(), Some(err));
    }

    #[rstest]
    fn test_write_fmt_reports_error_on_overflow() {
        let mut storage = [0u8; 4];
        let mut buf = BoundedBuf::new(&mut storage);
        assert!(write!(buf, "{}", 12345).is_err());
        assert!(buf.overflow().is_some());
    }

    #[rstest]
    fn test_clear_restarts() {
        let mut storage = [0u8; 4];
        let mut buf = BoundedBuf::new(&mut storage);
        let _ = buf.push_str("abcdef");
        buf.push_str("ab").unwrap();
        buf.clear();
        assert!(buf.is_empty());
        assert!(buf.overflow().is_none());
        buf.push_str("wxyz").unwrap();
        assert_eq!(buf.to_string(), "wxyz");
    }

    #[rstest]
    fn test_wipe_zeroes_written_bytes() {
        let mut storage = [0u8; 6];
        let mut buf = BoundedBuf::new(&mut storage);
        buf.push_str("abc").unwrap();
        assert!(buf.push_str("defg").is_err());
        buf.wipe();
        assert!(buf.is_empty());
        assert!(buf.overflow().is_none());
        assert_eq!(storage, [0u8; 6]);
    }

    #[rstest]
    fn test_buffer_full_display() {
        let full = BufferFull {
            required: 10,
            available: 3,
        };
        assert_eq!(full.to_string(), "Buffer full: required 10 bytes, 3 available");
    }
}

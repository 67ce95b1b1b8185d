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

//! Core functionality shared across the monetary workspace.
//!
//! The crate is deliberately small and dependency-light. It provides:
//!
//! - `correctness`: condition checks returning `anyhow::Result` for constructors.
//! - `formatting`: digit-group insertion for arbitrary separators and group sizes.
//! - `buffer`: a bounded UTF-8 output buffer implementing [`std::fmt::Write`].
//! - `string`: small string helpers used by text codecs.

#![deny(unsafe_code)]

pub mod buffer;
pub mod correctness;
pub mod formatting;
pub mod string;

// Re-exports
pub use crate::{
    buffer::{BoundedBuf, BufferFull},
    formatting::GroupSizes,
};

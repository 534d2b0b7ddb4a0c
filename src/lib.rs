// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # byteflip
//!
//! [![Crates.io](https://img.shields.io/crates/v/byteflip.svg)](https://crates.io/crates/byteflip)
//! [![Documentation](https://docs.rs/byteflip/badge.svg)](https://docs.rs/byteflip)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/byteflip/blob/main/LICENSE-APACHE)
//!
//! Endian-aware conversions between fixed-width numeric values and raw byte buffers,
//! written in pure Rust. `byteflip` turns integers and IEEE-754 floats into byte
//! sequences of their exact native width (and back), reverses byte order in place,
//! and ships a few small display helpers: uppercase hex formatting, a magnitude
//! suffix formatter for large counters, and truncating decimal scaling.
//!
//! ## Features
//!
//! - **🔀 Both byte orders** - Little-endian by default, most-significant-byte-first on request
//! - **📏 Exact widths** - Every encode yields precisely `size_of::<T>()` bytes, no surprises
//! - **🛡️ Lenient decoding** - Short buffers zero-extend instead of failing; a strict variant is available
//! - **🧮 Closed numeric set** - `i16`/`i32`/`i64`/`u16`/`u32`/`u64`/`f32`/`f64` behind one trait
//! - **🔧 Cross-platform** - No `unsafe`, no platform byte-order assumptions, works anywhere Rust does
//! - **📊 Display helpers** - `0x`-prefixed uppercase hex and `K`/`M`/`B` magnitude suffixes
//!
//! ## Quick Start
//!
//! Add `byteflip` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! byteflip = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! For convenient access to the most commonly used functions, import the prelude:
//!
//! ```rust
//! use byteflip::prelude::*;
//!
//! let wire = get_bytes(852_456_u32, true);
//! assert_eq!(wire, [0x00, 0x0D, 0x01, 0xE8]);
//!
//! let value: u32 = to_number(&wire, 0, true)?;
//! assert_eq!(value, 852_456);
//! # Ok::<(), byteflip::Error>(())
//! ```
//!
//! ### Basic Usage
//!
//! ```rust
//! use byteflip::convert::bytes::{get_bytes, to_number};
//!
//! // Encode a double as a big-endian byte sequence
//! let bytes = get_bytes(852456.852456_f64, true);
//! assert_eq!(bytes.len(), 8);
//!
//! // Decode it again
//! let value: f64 = to_number(&bytes, 0, true)?;
//! assert_eq!(value, 852456.852456);
//!
//! # Ok::<(), byteflip::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `byteflip` is organized into a handful of small modules:
//!
//! - [`prelude`] - Convenient re-exports of commonly used functions and types
//! - [`convert::bytes`] - Encoding, decoding and in-place byte reversal
//! - [`convert::display`] - Hex and magnitude-suffix text formatting
//! - [`convert::round`] - Truncating decimal scaling
//! - [`Error`] and [`Result`] - Error handling for the decode guards
//!
//! ## Decoding Policy
//!
//! Decoding is deliberately lenient: when a buffer holds fewer bytes than the
//! target type is wide, [`convert::bytes::to_number`] keeps whatever bytes are
//! present and zero-extends the remainder before interpreting them. Consumers
//! that prefer a hard failure on short input can use
//! [`convert::bytes::to_number_exact`] instead. Only a start index at or beyond
//! the end of the buffer is rejected outright.
//!
//! ## Error Handling
//!
//! All decode operations return [`Result<T, Error>`](Result):
//!
//! ```rust
//! use byteflip::{convert::bytes::to_number, Error};
//!
//! let short = [0x10_u8, 0x11];
//! match to_number::<u32>(&short, 5, false) {
//!     Err(Error::InvalidOffset) => {} // start index past the end
//!     _ => unreachable!(),
//! }
//! ```
//!
//! ## Development and Testing
//!
//! The crate includes fuzzing support for the decode paths:
//!
//! ```bash
//! # Install fuzzing tools
//! cargo install cargo-fuzz
//!
//! # Run fuzzer
//! cargo +nightly fuzz run decode --release
//! ```
//!
//! The test suite covers the byte-level contract with literal vectors as well as
//! property-based round trips:
//!
//! ```bash
//! cargo test
//! cargo bench  # criterion benchmarks
//! ```

pub(crate) mod error;

/// Conversions between fixed-width numeric values and raw byte buffers.
///
/// This module hosts the entire conversion surface:
///
/// - [`convert::bytes`] - The [`FixedWidth`] trait, encoding via
///   [`get_bytes`], decoding via [`to_number`] (lenient) and
///   [`to_number_exact`] (strict), and in-place reversal via [`invert_bytes`]
/// - [`convert::display`] - [`to_hex`] and [`number_str_with_unit`]
/// - [`convert::round`] - [`round`], which truncates rather than rounds
///
/// # Examples
///
/// ```rust
/// use byteflip::convert::bytes::{get_bytes, invert_bytes};
///
/// let mut bytes = get_bytes(0x1234_u16, false);
/// assert_eq!(bytes, [0x34, 0x12]);
///
/// invert_bytes(&mut bytes);
/// assert_eq!(bytes, [0x12, 0x34]);
/// ```
pub mod convert;

/// Convenient re-exports of the most commonly used functions and types.
///
/// This module provides a curated selection of the most frequently used items
/// from across the byteflip library, allowing for convenient glob imports.
///
/// # Example
///
/// ```rust
/// use byteflip::prelude::*;
///
/// let bytes = get_bytes(-852_456_i32, true);
/// assert_eq!(bytes, [0xFF, 0xF2, 0xFE, 0x18]);
/// ```
pub mod prelude;

/// `byteflip` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
///
/// # Examples
///
/// ```rust
/// use byteflip::{convert::bytes::to_number, Result};
///
/// fn first_register(frame: &[u8]) -> Result<u16> {
///     to_number(frame, 0, true)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `byteflip` Error type
///
/// The main error type for all operations in this crate. Decoding only fails on
/// argument-validation problems; see the variants for the two conditions.
///
/// # Examples
///
/// ```rust
/// use byteflip::{convert::bytes::to_number_exact, Error};
///
/// match to_number_exact::<u64>(&[0x01, 0x02], 0, false) {
///     Err(Error::OutOfBounds) => {} // two bytes cannot fill a u64
///     _ => unreachable!(),
/// }
/// ```
pub use error::Error;

/// Core conversion entry points, re-exported at the crate root.
///
/// See [`convert::bytes`] for the full surface including the typed decode
/// wrappers.
///
/// # Example
///
/// ```rust
/// use byteflip::{get_bytes, to_number};
///
/// let bytes = get_bytes(4368_u32, false);
/// assert_eq!(to_number::<u32>(&bytes, 0, false)?, 4368);
/// # Ok::<(), byteflip::Error>(())
/// ```
pub use convert::bytes::{get_bytes, invert_bytes, to_number, to_number_exact, FixedWidth};

/// Text formatting helpers for hex and magnitude-suffixed numbers.
///
/// # Example
///
/// ```rust
/// use byteflip::to_hex;
///
/// assert_eq!(to_hex(852_456), "0xD01E8");
/// ```
pub use convert::display::{number_str_with_unit, to_hex};

/// Truncating decimal scaling.
///
/// # Example
///
/// ```rust
/// use byteflip::round;
///
/// // Truncates, despite the name: the dropped digit is 5.
/// assert_eq!(round(20.2523665582255, 2), 20.25);
/// ```
pub use convert::round::round;

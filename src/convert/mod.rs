//! Conversion between fixed-width numeric values, raw byte buffers and display text.
//!
//! This module is the whole of the library's functionality. Every operation is a
//! pure, stateless, single-step transformation over caller-owned data: nothing
//! is cached, shared or persisted across calls, and the only mutation anywhere
//! is [`bytes::invert_bytes`] reversing a caller-supplied buffer in place.
//!
//! # Key Components
//!
//! ## Byte-level codec
//! - [`bytes::FixedWidth`] - Capability trait for the closed set of supported numeric types
//! - [`bytes::get_bytes`] - Encode a value as its native-width byte sequence
//! - [`bytes::to_number`] - Lenient decode (zero-extends short buffers)
//! - [`bytes::to_number_exact`] - Strict decode (rejects short buffers)
//! - [`bytes::invert_bytes`] - In-place byte-order reversal
//! - Typed wrappers [`bytes::to_i16`] through [`bytes::to_f64`]
//!
//! ## Display helpers
//! - [`display::to_hex`] - Uppercase `0x`-prefixed hex formatting
//! - [`display::number_str_with_unit`] - `K`/`M`/`B` magnitude suffix formatting
//!
//! ## Numeric helpers
//! - [`round::round`] - Decimal scaling that truncates toward zero
//!
//! # Thread Safety
//!
//! All functions in this module operate exclusively on their arguments and are
//! safe to call concurrently on independent inputs. [`bytes::invert_bytes`]
//! requires the usual exclusive access to its `&mut` buffer, which the borrow
//! checker enforces.

pub mod bytes;
pub mod display;
pub mod round;

//! # byteflip Prelude
//!
//! This module provides a convenient prelude for the most commonly used
//! functions and types from the byteflip library. Import this module to get
//! quick access to the essential conversion surface.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all byteflip operations
pub use crate::Error;

/// The result type used throughout byteflip
pub use crate::Result;

// ================================================================================================
// Byte-Level Codec
// ================================================================================================

/// Capability trait for the supported fixed-width numeric types
pub use crate::convert::bytes::FixedWidth;

/// Encoding, in-place reversal and the two decode flavors
pub use crate::convert::bytes::{get_bytes, invert_bytes, to_number, to_number_exact};

/// Typed decode wrappers
pub use crate::convert::bytes::{to_f64, to_i16, to_i32, to_i64, to_u16, to_u32, to_u64};

// ================================================================================================
// Display and Numeric Helpers
// ================================================================================================

/// Hex and magnitude-suffix formatting
pub use crate::convert::display::{number_str_with_unit, to_hex};

/// Truncating decimal scaling
pub use crate::convert::round::round;

//! Endian-aware encoding and decoding of fixed-width numeric values.
//!
//! This module implements the byte-level codec: converting the supported
//! numeric types to byte sequences of their exact native width, reinterpreting
//! byte sequences back into values, and reversing byte order in place. Buffers
//! are plain `[u8]` slices owned by the caller; the default layout is
//! little-endian, with most-significant-byte-first selectable per call.
//!
//! # Architecture
//!
//! The module is built around the [`FixedWidth`] trait, which ties each
//! supported numeric type to its fixed-size byte-array representation and to
//! the standard library's endian conversion functions. On top of it sit:
//!
//! - [`get_bytes`] - value to bytes, always exactly `size_of::<T>()` long
//! - [`to_number`] - bytes to value, zero-extending short buffers
//! - [`to_number_exact`] - bytes to value, rejecting short buffers
//! - [`invert_bytes`] - in-place reversal of a caller-owned buffer
//! - Typed decode wrappers [`to_i16`], [`to_i32`], [`to_i64`], [`to_u16`],
//!   [`to_u32`], [`to_u64`] and [`to_f64`]
//!
//! ## Supported Types
//!
//! The [`FixedWidth`] trait is implemented for a deliberately closed set:
//! - **Signed integers**: `i16`, `i32`, `i64`
//! - **Unsigned integers**: `u16`, `u32`, `u64`
//! - **Floating point**: `f32`, `f64` (IEEE-754 bit patterns)
//!
//! # Decoding Policy
//!
//! [`to_number`] never fails on short input. When fewer than `size_of::<T>()`
//! bytes remain past the start index, the available bytes are kept and the
//! missing tail is filled with zeros *before* any byte-order reversal, so the
//! zero padding always lands on the high-order end of the little-endian image.
//! A start index at or beyond the end of the buffer is the one rejected
//! argument ([`Error::InvalidOffset`]); with `usize` indices a negative start
//! is unrepresentable.
//!
//! # Usage Examples
//!
//! ```rust
//! use byteflip::convert::bytes::{get_bytes, to_number, to_u32};
//!
//! // Encoding is total: every supported value has an exact-width image.
//! let le = get_bytes(852_456_u32, false);
//! let be = get_bytes(852_456_u32, true);
//! assert_eq!(le, [0xE8, 0x01, 0x0D, 0x00]);
//! assert_eq!(be, [0x00, 0x0D, 0x01, 0xE8]);
//!
//! // Decoding mirrors it for both byte orders.
//! assert_eq!(to_u32(&le, 0, false)?, 852_456);
//! assert_eq!(to_u32(&be, 0, true)?, 852_456);
//!
//! // Short buffers zero-extend: three bytes decode as if a fourth 0x00 followed.
//! let short = [0x10, 0x11, 0x00];
//! assert_eq!(to_number::<u32>(&short, 0, false)?, 0x0000_1110);
//! # Ok::<(), byteflip::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! Every function here is a pure transformation of its arguments; all of them
//! can run concurrently on independent inputs without coordination.

use crate::{Error, Result};

/// Capability trait tying each supported numeric type to its raw byte representation.
///
/// This is the closed "fixed-width numeric" set of the crate: implementations
/// exist for `i16`, `i32`, `i64`, `u16`, `u32`, `u64`, `f32` and `f64`, and the
/// conversion functions are generic over it. Each implementation defines a
/// `Bytes` associated type holding the fixed-size array for that width (e.g.
/// `[u8; 4]` for `u32`) and delegates to the inherent `from_le_bytes` /
/// `to_be_bytes` family, so integer conversions are two's-complement and float
/// conversions use the IEEE-754 bit pattern on every platform.
///
/// # Examples
///
/// ```rust
/// use byteflip::convert::bytes::FixedWidth;
///
/// fn width_of<T: FixedWidth>() -> usize {
///     std::mem::size_of::<T>()
/// }
///
/// assert_eq!(width_of::<u16>(), 2);
/// assert_eq!(width_of::<f64>(), 8);
/// ```
pub trait FixedWidth: Sized + Copy {
    /// Associated type representing the byte array type for this numeric type.
    ///
    /// Must be convertible from a byte slice of the right length and viewable
    /// as a byte slice, which lets the conversion functions stay free of
    /// `unsafe` code.
    type Bytes: Sized + AsRef<[u8]> + for<'a> TryFrom<&'a [u8]>;

    /// Interpret a little-endian byte array as `Self`
    fn from_le_bytes(bytes: Self::Bytes) -> Self;
    /// Interpret a big-endian byte array as `Self`
    fn from_be_bytes(bytes: Self::Bytes) -> Self;

    /// Produce the little-endian byte array of `self`
    fn to_le_bytes(self) -> Self::Bytes;
    /// Produce the big-endian byte array of `self`
    fn to_be_bytes(self) -> Self::Bytes;
}

// Implement FixedWidth support for i16
impl FixedWidth for i16 {
    type Bytes = [u8; 2];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        i16::from_le_bytes(bytes)
    }

    fn from_be_bytes(bytes: Self::Bytes) -> Self {
        i16::from_be_bytes(bytes)
    }

    fn to_le_bytes(self) -> Self::Bytes {
        i16::to_le_bytes(self)
    }

    fn to_be_bytes(self) -> Self::Bytes {
        i16::to_be_bytes(self)
    }
}

// Implement FixedWidth support for i32
impl FixedWidth for i32 {
    type Bytes = [u8; 4];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        i32::from_le_bytes(bytes)
    }

    fn from_be_bytes(bytes: Self::Bytes) -> Self {
        i32::from_be_bytes(bytes)
    }

    fn to_le_bytes(self) -> Self::Bytes {
        i32::to_le_bytes(self)
    }

    fn to_be_bytes(self) -> Self::Bytes {
        i32::to_be_bytes(self)
    }
}

// Implement FixedWidth support for i64
impl FixedWidth for i64 {
    type Bytes = [u8; 8];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        i64::from_le_bytes(bytes)
    }

    fn from_be_bytes(bytes: Self::Bytes) -> Self {
        i64::from_be_bytes(bytes)
    }

    fn to_le_bytes(self) -> Self::Bytes {
        i64::to_le_bytes(self)
    }

    fn to_be_bytes(self) -> Self::Bytes {
        i64::to_be_bytes(self)
    }
}

// Implement FixedWidth support for u16
impl FixedWidth for u16 {
    type Bytes = [u8; 2];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        u16::from_le_bytes(bytes)
    }

    fn from_be_bytes(bytes: Self::Bytes) -> Self {
        u16::from_be_bytes(bytes)
    }

    fn to_le_bytes(self) -> Self::Bytes {
        u16::to_le_bytes(self)
    }

    fn to_be_bytes(self) -> Self::Bytes {
        u16::to_be_bytes(self)
    }
}

// Implement FixedWidth support for u32
impl FixedWidth for u32 {
    type Bytes = [u8; 4];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        u32::from_le_bytes(bytes)
    }

    fn from_be_bytes(bytes: Self::Bytes) -> Self {
        u32::from_be_bytes(bytes)
    }

    fn to_le_bytes(self) -> Self::Bytes {
        u32::to_le_bytes(self)
    }

    fn to_be_bytes(self) -> Self::Bytes {
        u32::to_be_bytes(self)
    }
}

// Implement FixedWidth support for u64
impl FixedWidth for u64 {
    type Bytes = [u8; 8];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        u64::from_le_bytes(bytes)
    }

    fn from_be_bytes(bytes: Self::Bytes) -> Self {
        u64::from_be_bytes(bytes)
    }

    fn to_le_bytes(self) -> Self::Bytes {
        u64::to_le_bytes(self)
    }

    fn to_be_bytes(self) -> Self::Bytes {
        u64::to_be_bytes(self)
    }
}

// Implement FixedWidth support for f32
impl FixedWidth for f32 {
    type Bytes = [u8; 4];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        f32::from_le_bytes(bytes)
    }

    fn from_be_bytes(bytes: Self::Bytes) -> Self {
        f32::from_be_bytes(bytes)
    }

    fn to_le_bytes(self) -> Self::Bytes {
        f32::to_le_bytes(self)
    }

    fn to_be_bytes(self) -> Self::Bytes {
        f32::to_be_bytes(self)
    }
}

// Implement FixedWidth support for f64
impl FixedWidth for f64 {
    type Bytes = [u8; 8];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        f64::from_le_bytes(bytes)
    }

    fn from_be_bytes(bytes: Self::Bytes) -> Self {
        f64::from_be_bytes(bytes)
    }

    fn to_le_bytes(self) -> Self::Bytes {
        f64::to_le_bytes(self)
    }

    fn to_be_bytes(self) -> Self::Bytes {
        f64::to_be_bytes(self)
    }
}

/// Encodes a value as a byte sequence of exactly its native width.
///
/// The default layout is little-endian; passing `msb = true` yields the
/// byte-reversed, most-significant-byte-first image. The operation is total:
/// every value of a supported type encodes, and the only side effect is the
/// allocation of the returned buffer.
///
/// # Arguments
///
/// * `value` - The number to convert
/// * `msb` - `true` for most-significant-byte-first output, `false` for little-endian
///
/// # Returns
///
/// A `Vec<u8>` of length `size_of::<T>()` holding the value's byte image.
///
/// # Examples
///
/// ```rust
/// use byteflip::convert::bytes::get_bytes;
///
/// assert_eq!(get_bytes(-852_456_i32, true), [0xFF, 0xF2, 0xFE, 0x18]);
/// assert_eq!(get_bytes(-852_456_i32, false), [0x18, 0xFE, 0xF2, 0xFF]);
///
/// // Floats encode their IEEE-754 bit pattern
/// assert_eq!(
///     get_bytes(852456.852456_f64, true),
///     [0x41, 0x2A, 0x03, 0xD1, 0xB4, 0x75, 0x1C, 0xE3]
/// );
/// ```
pub fn get_bytes<T: FixedWidth>(value: T, msb: bool) -> Vec<u8> {
    let bytes = if msb {
        value.to_be_bytes()
    } else {
        value.to_le_bytes()
    };

    bytes.as_ref().to_vec()
}

/// Reverses a byte sequence in place.
///
/// Swaps symmetric pairs around the midpoint of the buffer. Works on any
/// length; empty and single-byte buffers are left untouched. Applying the
/// operation twice restores the original order.
///
/// # Arguments
///
/// * `data` - The caller-owned buffer to reverse
///
/// # Examples
///
/// ```rust
/// use byteflip::convert::bytes::invert_bytes;
///
/// let mut data = [0x10, 0x11, 0x12, 0x13];
/// invert_bytes(&mut data);
/// assert_eq!(data, [0x13, 0x12, 0x11, 0x10]);
/// ```
pub fn invert_bytes(data: &mut [u8]) {
    data.reverse();
}

/// Decodes a value of type `T` from a byte buffer, zero-extending short input.
///
/// Reads `size_of::<T>()` bytes beginning at `start_index` and reinterprets
/// them as `T`, little-endian by default or most-significant-byte-first when
/// `msb` is set. When fewer bytes remain, all available bytes are kept and the
/// missing tail is padded with zeros up to the full width; the padding happens
/// before any byte-order reversal, so the zeros always extend the high-order
/// end of the little-endian image. Short input therefore never fails - the
/// result is a best-effort value derived from whatever bytes were present.
///
/// # Arguments
///
/// * `bytes` - The byte buffer to read from
/// * `start_index` - Zero-based offset of the first byte to read
/// * `msb` - `true` if the bytes are most-significant-first, `false` for little-endian
///
/// # Returns
///
/// The decoded value, or [`Error::InvalidOffset`] if `start_index` lies at or
/// beyond the end of the buffer.
///
/// # Examples
///
/// ```rust
/// use byteflip::convert::bytes::to_number;
///
/// let buffer = [0xE8, 0x01, 0x0D, 0x00];
/// assert_eq!(to_number::<u32>(&buffer, 0, false)?, 852_456);
///
/// // Only three bytes available: a zero byte is appended before decoding
/// let short = [0x10, 0x11, 0x00];
/// assert_eq!(to_number::<u32>(&short, 0, false)?, 4368);
/// # Ok::<(), byteflip::Error>(())
/// ```
pub fn to_number<T: FixedWidth>(bytes: &[u8], start_index: usize, msb: bool) -> Result<T> {
    let width = std::mem::size_of::<T>();
    if start_index >= bytes.len() {
        return Err(Error::InvalidOffset);
    }

    let available = &bytes[start_index..];
    if available.len() >= width {
        let Ok(raw) = available[..width].try_into() else {
            return Err(Error::OutOfBounds);
        };

        return Ok(decode(raw, msb));
    }

    // Zero-extend before the optional inversion: the pad bytes fill the tail
    // of the little-endian image, never the end that holds real data.
    let mut padded = vec![0u8; width];
    padded[..available.len()].copy_from_slice(available);

    let Ok(raw) = padded.as_slice().try_into() else {
        return Err(Error::OutOfBounds);
    };

    Ok(decode(raw, msb))
}

/// Decodes a value of type `T` from a byte buffer, rejecting short input.
///
/// The strict counterpart of [`to_number`]: identical for buffers holding at
/// least `size_of::<T>()` bytes past `start_index`, but short input yields
/// [`Error::OutOfBounds`] instead of being zero-extended.
///
/// # Arguments
///
/// * `bytes` - The byte buffer to read from
/// * `start_index` - Zero-based offset of the first byte to read
/// * `msb` - `true` if the bytes are most-significant-first, `false` for little-endian
///
/// # Returns
///
/// The decoded value, [`Error::InvalidOffset`] if `start_index` lies at or
/// beyond the end of the buffer, or [`Error::OutOfBounds`] if fewer than
/// `size_of::<T>()` bytes remain.
///
/// # Examples
///
/// ```rust
/// use byteflip::convert::bytes::to_number_exact;
/// use byteflip::Error;
///
/// let short = [0x10, 0x11, 0x00];
/// assert!(matches!(
///     to_number_exact::<u32>(&short, 0, false),
///     Err(Error::OutOfBounds)
/// ));
/// assert_eq!(to_number_exact::<u16>(&short, 0, false)?, 0x1110);
/// # Ok::<(), byteflip::Error>(())
/// ```
pub fn to_number_exact<T: FixedWidth>(bytes: &[u8], start_index: usize, msb: bool) -> Result<T> {
    let width = std::mem::size_of::<T>();
    if start_index >= bytes.len() {
        return Err(Error::InvalidOffset);
    }

    let available = &bytes[start_index..];
    if available.len() < width {
        return Err(Error::OutOfBounds);
    }

    let Ok(raw) = available[..width].try_into() else {
        return Err(Error::OutOfBounds);
    };

    Ok(decode(raw, msb))
}

fn decode<T: FixedWidth>(raw: T::Bytes, msb: bool) -> T {
    if msb {
        T::from_be_bytes(raw)
    } else {
        T::from_le_bytes(raw)
    }
}

/// Returns a 16-bit signed integer decoded from two bytes at the given position.
///
/// # Errors
///
/// See [`to_number`]; only an out-of-range `start_index` fails.
pub fn to_i16(bytes: &[u8], start_index: usize, msb: bool) -> Result<i16> {
    to_number(bytes, start_index, msb)
}

/// Returns a 32-bit signed integer decoded from four bytes at the given position.
///
/// # Errors
///
/// See [`to_number`]; only an out-of-range `start_index` fails.
pub fn to_i32(bytes: &[u8], start_index: usize, msb: bool) -> Result<i32> {
    to_number(bytes, start_index, msb)
}

/// Returns a 64-bit signed integer decoded from eight bytes at the given position.
///
/// # Errors
///
/// See [`to_number`]; only an out-of-range `start_index` fails.
pub fn to_i64(bytes: &[u8], start_index: usize, msb: bool) -> Result<i64> {
    to_number(bytes, start_index, msb)
}

/// Returns a 16-bit unsigned integer decoded from two bytes at the given position.
///
/// # Errors
///
/// See [`to_number`]; only an out-of-range `start_index` fails.
pub fn to_u16(bytes: &[u8], start_index: usize, msb: bool) -> Result<u16> {
    to_number(bytes, start_index, msb)
}

/// Returns a 32-bit unsigned integer decoded from four bytes at the given position.
///
/// # Errors
///
/// See [`to_number`]; only an out-of-range `start_index` fails.
pub fn to_u32(bytes: &[u8], start_index: usize, msb: bool) -> Result<u32> {
    to_number(bytes, start_index, msb)
}

/// Returns a 64-bit unsigned integer decoded from eight bytes at the given position.
///
/// # Errors
///
/// See [`to_number`]; only an out-of-range `start_index` fails.
pub fn to_u64(bytes: &[u8], start_index: usize, msb: bool) -> Result<u64> {
    to_number(bytes, start_index, msb)
}

/// Returns a double-precision float decoded from eight bytes at the given position.
///
/// The bytes are reinterpreted as an IEEE-754 bit pattern; no numeric
/// conversion takes place.
///
/// # Errors
///
/// See [`to_number`]; only an out-of-range `start_index` fails.
pub fn to_f64(bytes: &[u8], start_index: usize, msb: bool) -> Result<f64> {
    to_number(bytes, start_index, msb)
}

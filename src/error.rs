use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Conversion in this crate is total for valid arguments: encoding never fails,
/// and lenient decoding zero-extends short buffers instead of rejecting them.
/// The variants below therefore only cover argument validation on the decode
/// side.
///
/// # Examples
///
/// ```rust
/// use byteflip::{convert::bytes::{to_number, to_number_exact}, Error};
///
/// let buffer = [0x10_u8, 0x11, 0x00];
///
/// // Start index past the end of the buffer is always rejected
/// assert!(matches!(to_number::<u32>(&buffer, 3, false), Err(Error::InvalidOffset)));
///
/// // The strict decoder additionally rejects short reads
/// assert!(matches!(to_number_exact::<u32>(&buffer, 0, false), Err(Error::OutOfBounds)));
///
/// // The lenient decoder zero-extends instead
/// assert_eq!(to_number::<u32>(&buffer, 0, false).unwrap(), 4368);
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The start index lies at or beyond the end of the buffer.
    ///
    /// Decoding from such an index would read no input bytes at all; it is
    /// treated as a caller error rather than silently producing a zero value.
    #[error("Start index lies at or beyond the end of the buffer!")]
    InvalidOffset,

    /// An out of bound read would have occurred.
    ///
    /// Returned only by the strict decoder when the buffer holds fewer bytes
    /// than the target type is wide. The lenient decoder zero-extends instead
    /// and never reports this condition.
    #[error("Out of Bound read would have occurred!")]
    OutOfBounds,
}

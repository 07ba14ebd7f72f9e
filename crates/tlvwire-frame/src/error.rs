/// Errors that can occur during frame encoding/decoding.
///
/// A clean end of stream between frames is not represented here; the
/// reader reports it as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The payload handed to the writer exceeds the configured maximum.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// A decoded length field exceeds the configured maximum.
    #[error("frame length {size} exceeds maximum {max}")]
    FrameTooLarge { size: u64, max: usize },

    /// The length varint did not terminate within the maximum byte count.
    #[error("length varint exceeds {} bytes", crate::varint::MAX_LEN)]
    VarintOverflow,

    /// The stream ended after a frame had started but before it completed.
    #[error("stream ended mid-frame ({consumed} bytes into the frame)")]
    UnexpectedEof { consumed: usize },

    /// An I/O error occurred while reading or writing frames.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FrameError>;

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{FrameError, Result};
use crate::varint;

/// Default maximum frame payload size: 16 MiB.
pub const DEFAULT_MAX_FRAME_SIZE: usize = 16 * 1024 * 1024;

/// A type-tagged, length-prefixed message.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The application-defined kind of this payload.
    pub tag: u8,
    /// The message payload.
    pub payload: Bytes,
}

impl Frame {
    /// Create a new frame.
    pub fn new(tag: u8, payload: impl Into<Bytes>) -> Self {
        Self {
            tag,
            payload: payload.into(),
        }
    }

    /// The total wire size of this frame (tag + length varint + payload).
    pub fn wire_size(&self) -> usize {
        1 + varint::encoded_len(self.payload.len() as u64) + self.payload.len()
    }
}

/// Encode a frame into the wire format.
///
/// Wire format:
/// ```text
/// ┌───────────┬────────────────┬──────────────────┐
/// │ Tag (1B)  │ Length         │ Payload          │
/// │           │ (varint 1-10B) │ (Length bytes)   │
/// └───────────┴────────────────┴──────────────────┘
/// ```
pub fn encode_frame(tag: u8, payload: &[u8], dst: &mut BytesMut) {
    dst.reserve(1 + varint::encoded_len(payload.len() as u64) + payload.len());
    dst.put_u8(tag);
    varint::encode(payload.len() as u64, dst);
    dst.put_slice(payload);
}

/// Decode a frame from a buffer.
///
/// Returns `Ok(None)` if the buffer doesn't contain a complete frame yet;
/// nothing is consumed in that case. On success, consumes the frame bytes
/// from the buffer.
pub fn decode_frame(src: &mut BytesMut, max_frame_size: usize) -> Result<Option<Frame>> {
    if src.is_empty() {
        return Ok(None); // Need more data
    }

    let tag = src[0];

    let (length, length_bytes) = match varint::decode(&src[1..])? {
        Some(decoded) => decoded,
        None => return Ok(None), // Need more data
    };

    // Bound check before touching the payload so a corrupt length can
    // never force an allocation.
    if length > max_frame_size as u64 {
        return Err(FrameError::FrameTooLarge {
            size: length,
            max: max_frame_size,
        });
    }
    let length = length as usize;

    let header = 1 + length_bytes;
    if src.len() < header + length {
        return Ok(None); // Need more data
    }

    src.advance(header);
    let payload = src.split_to(length).freeze();

    Ok(Some(Frame { tag, payload }))
}

/// Configuration for the frame codec.
#[derive(Debug, Clone)]
pub struct FrameConfig {
    /// Maximum frame payload size in bytes. Default: 16 MiB.
    ///
    /// Writer and reader must agree on this bound: the writer refuses to
    /// emit payloads above it, the reader refuses to decode them.
    pub max_frame_size: usize,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_frame_size: DEFAULT_MAX_FRAME_SIZE,
        }
    }
}

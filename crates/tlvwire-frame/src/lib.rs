//! Type-length-value message framing over byte streams.
//!
//! Every frame on the wire is:
//! - A 1-byte type tag (opaque to the codec)
//! - A varint payload length (little-endian 7-bit groups, MSB = continuation)
//! - The payload itself
//!
//! No partial reads, no buffer management in user code. A clean end of
//! stream between frames is `Ok(None)` from the reader; everything else
//! that cuts a frame short is an error.

pub mod codec;
pub mod error;
pub mod reader;
pub mod tag;
pub mod varint;
pub mod writer;

pub use codec::{decode_frame, encode_frame, Frame, FrameConfig, DEFAULT_MAX_FRAME_SIZE};
pub use error::{FrameError, Result};
pub use reader::FrameReader;
pub use tag::{CONTROL, DATA, HEARTBEAT, USER_TAG_START};
pub use writer::FrameWriter;

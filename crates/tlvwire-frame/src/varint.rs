//! Unsigned varint encoding: 7 payload bits per byte, least-significant
//! group first, MSB set on every byte except the last.

use bytes::{BufMut, BytesMut};

use crate::error::{FrameError, Result};

/// Maximum encoded length of a `u64` varint.
pub const MAX_LEN: usize = 10;

/// Append the varint encoding of `value` to `dst`.
pub fn encode(mut value: u64, dst: &mut BytesMut) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            dst.put_u8(byte);
            return;
        }
        dst.put_u8(byte | 0x80);
    }
}

/// Number of bytes `encode` would produce for `value`.
pub fn encoded_len(value: u64) -> usize {
    let bits = 64 - value.max(1).leading_zeros() as usize;
    bits.div_ceil(7)
}

/// Decode a varint from the front of `src`.
///
/// Returns `Ok(None)` if `src` ends before the terminating byte (need more
/// data). On success returns the value and the number of bytes it occupied;
/// nothing is consumed from `src`.
pub fn decode(src: &[u8]) -> Result<Option<(u64, usize)>> {
    let mut value = 0u64;
    for (i, &byte) in src.iter().enumerate() {
        let group = u64::from(byte & 0x7f);
        // The tenth byte carries only bit 63.
        if i == MAX_LEN - 1 && group > 1 {
            return Err(FrameError::VarintOverflow);
        }
        value |= group << (7 * i);
        if byte & 0x80 == 0 {
            return Ok(Some((value, i + 1)));
        }
        if i + 1 == MAX_LEN {
            return Err(FrameError::VarintOverflow);
        }
    }
    Ok(None)
}

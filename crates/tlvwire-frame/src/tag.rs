//! Well-known type tags.
//!
//! Tags 0-7 are reserved for built-in use.
//! Tags 8-255 are available for application-defined use.
//!
//! The codec itself never interprets tags; these constants exist so that
//! cooperating peers agree on a baseline vocabulary.

/// Connection management (handshake, shutdown).
pub const CONTROL: u8 = 0;

/// Application payloads.
pub const DATA: u8 = 1;

/// Liveness probes.
pub const HEARTBEAT: u8 = 2;

/// First application-defined tag.
pub const USER_TAG_START: u8 = 8;

/// Returns a human-readable name for a type tag.
pub fn tag_name(tag: u8) -> &'static str {
    match tag {
        CONTROL => "CONTROL",
        DATA => "DATA",
        HEARTBEAT => "HEARTBEAT",
        3..=7 => "RESERVED",
        _ => "USER",
    }
}

/// Returns true if the tag is in the reserved range.
pub fn is_reserved(tag: u8) -> bool {
    tag < USER_TAG_START
}

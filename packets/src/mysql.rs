pub mod common;
pub mod handshake;
pub mod version;

pub const HEADER_LENGTH: usize = 4;

/// Standard MySQL packet header: 3-byte little-endian payload length
/// followed by the sequence id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketHeader {
    pub payload_length: u32,
    pub seq: u8,
}

impl PacketHeader {
    pub fn new(payload: &[u8]) -> Option<PacketHeader> {
        if payload.len() < HEADER_LENGTH {
            return None;
        }
        let payload_length = u32::from_le_bytes([payload[0], payload[1], payload[2], 0]);
        let seq = payload[3];

        Some(PacketHeader {
            payload_length,
            seq,
        })
    }
}

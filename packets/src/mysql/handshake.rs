use std::borrow::Cow;
use std::fmt;

use bytes::Buf;
use log::{debug, warn};

use crate::error::{HandshakeError, Result};
use crate::mysql::version::ServerVersion;
use crate::mysql::PacketHeader;

// Absolute offsets into the packet.
pub const GREETING_LENGTH: usize = 4;
pub const PROTOCOL_OFFSET: usize = 4;
pub const VERSION_OFFSET: usize = 5;

// Relative to the version string's terminator, see
// `HandshakeDecoder::post_version_offset`.
pub const THREAD_ID_OFFSET: usize = 1;
pub const THREAD_ID_LENGTH: usize = 4;

pub const RANDOM_SEED_OFFSET: usize = 5;
pub const RANDOM_SEED_LENGTH: usize = 9;

pub const CAPABILITY_OFFSET: usize = 14;
pub const CAPABILITY_LENGTH: usize = 2;

pub const CHARACTER_SET_OFFSET: usize = 16;

pub const SERVER_STATUS_OFFSET: usize = 17;
pub const SERVER_STATUS_LENGTH: usize = 2;

pub const RANDOM_REST_OFFSET: usize = 32;
pub const RANDOM_REST_LENGTH: usize = 13;

/// Owned copy of every field of a server greeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handshake {
    pub greeting: [u8; GREETING_LENGTH],
    pub protocol_version: u8,
    pub server_version: String,
    pub connection_id: u32,
    pub scramble: Vec<u8>,
    pub capability_flags: u16,
    pub character_set: u8,
    pub status_flags: u16,
}

/// Read-only view over the raw bytes of a MySQL server greeting.
///
/// Every field after the server version sits at a fixed distance from the
/// end of that NUL-terminated string, so its length is measured once on
/// construction. Accessors slice the borrowed buffer on each call and fail
/// with `TruncatedBuffer` instead of reading past its end.
#[derive(Debug, Clone, Copy)]
pub struct HandshakeDecoder<'a> {
    packet: &'a [u8],
    version_length: usize,
    terminated: bool,
}

impl<'a> HandshakeDecoder<'a> {
    pub fn decode(packet: &'a [u8]) -> HandshakeDecoder<'a> {
        let tail = packet.get(VERSION_OFFSET..).unwrap_or_default();
        let (version_length, terminated) = match tail.iter().position(|&b| b == 0) {
            Some(idx) => (idx, true),
            None => (tail.len(), false),
        };

        if terminated {
            debug!("mysql greeting version length: {}", version_length);
        } else {
            warn!(
                "mysql greeting version is not terminated, packet len: {}",
                packet.len()
            );
        }

        HandshakeDecoder {
            packet,
            version_length,
            terminated,
        }
    }

    pub fn packet(&self) -> &'a [u8] {
        self.packet
    }

    pub fn version_length(&self) -> usize {
        self.version_length
    }

    pub fn terminator_missing(&self) -> bool {
        !self.terminated
    }

    /// Fails with `MissingTerminator` when no zero byte followed the version
    /// string. Decoding itself tolerates this; callers decide.
    pub fn check_terminator(&self) -> Result<()> {
        if self.terminated {
            Ok(())
        } else {
            Err(HandshakeError::MissingTerminator {
                available: self.packet.len(),
            })
        }
    }

    pub fn post_version_offset(&self, offset: usize) -> usize {
        VERSION_OFFSET + self.version_length + offset
    }

    fn range(&self, field: &'static str, offset: usize, length: usize) -> Result<&'a [u8]> {
        offset
            .checked_add(length)
            .and_then(|end| self.packet.get(offset..end))
            .ok_or(HandshakeError::TruncatedBuffer {
                field,
                offset,
                length,
                available: self.packet.len(),
            })
    }

    // Meaning unknown, passed through untouched. See `header` for the usual
    // interpretation.
    pub fn greeting(&self) -> Result<&'a [u8]> {
        self.range("greeting", 0, GREETING_LENGTH)
    }

    pub fn header(&self) -> Result<PacketHeader> {
        let greeting = self.greeting()?;
        PacketHeader::new(greeting).ok_or(HandshakeError::TruncatedBuffer {
            field: "header",
            offset: 0,
            length: GREETING_LENGTH,
            available: self.packet.len(),
        })
    }

    pub fn protocol(&self) -> Result<u8> {
        let mut buf = self.range("protocol", PROTOCOL_OFFSET, 1)?;
        Ok(buf.get_u8())
    }

    pub fn version_bytes(&self) -> Result<&'a [u8]> {
        self.range("version", VERSION_OFFSET, self.version_length)
    }

    pub fn version(&self) -> Result<Cow<'a, str>> {
        Ok(String::from_utf8_lossy(self.version_bytes()?))
    }

    pub fn mysql_thread_id(&self) -> Result<u32> {
        let start = self.post_version_offset(THREAD_ID_OFFSET);
        let mut buf = self.range("mysql_thread_id", start, THREAD_ID_LENGTH)?;
        Ok(buf.get_u32_le())
    }

    pub fn capabilities(&self) -> Result<u16> {
        let start = self.post_version_offset(CAPABILITY_OFFSET);
        let mut buf = self.range("capabilities", start, CAPABILITY_LENGTH)?;
        Ok(buf.get_u16_le())
    }

    pub fn character_set(&self) -> Result<u8> {
        let start = self.post_version_offset(CHARACTER_SET_OFFSET);
        let mut buf = self.range("character_set", start, 1)?;
        Ok(buf.get_u8())
    }

    pub fn server_status(&self) -> Result<u16> {
        let start = self.post_version_offset(SERVER_STATUS_OFFSET);
        let mut buf = self.range("server_status", start, SERVER_STATUS_LENGTH)?;
        Ok(buf.get_u16_le())
    }

    /// Authentication seed. Servers from 4.1 on split it in two parts which
    /// are joined and cut at the first NUL; older servers send the first part
    /// only, returned as is.
    pub fn scramble(&self) -> Result<Vec<u8>> {
        let version = ServerVersion::parse(&self.version()?)?;

        let start = self.post_version_offset(RANDOM_SEED_OFFSET);
        let seed = self.range("scramble", start, RANDOM_SEED_LENGTH)?;
        if !version.supports_protocol_41() {
            return Ok(seed.to_vec());
        }

        let rest_start = self.post_version_offset(RANDOM_REST_OFFSET);
        let rest = self.range("scramble", rest_start, RANDOM_REST_LENGTH)?;

        Ok(seed
            .iter()
            .chain(rest)
            .copied()
            .take_while(|&b| b != 0)
            .collect())
    }

    pub fn to_handshake(&self) -> Result<Handshake> {
        let mut greeting = [0u8; GREETING_LENGTH];
        greeting.copy_from_slice(self.greeting()?);

        Ok(Handshake {
            greeting,
            protocol_version: self.protocol()?,
            server_version: self.version()?.into_owned(),
            connection_id: self.mysql_thread_id()?,
            scramble: self.scramble()?,
            capability_flags: self.capabilities()?,
            character_set: self.character_set()?,
            status_flags: self.server_status()?,
        })
    }
}

struct Field<T>(Result<T>);

impl<T: fmt::Display> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Ok(v) => v.fmt(f),
            Err(_) => f.write_str("?"),
        }
    }
}

impl fmt::Display for HandshakeDecoder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scramble = self.scramble().map(|s| format!("{:?}", s));
        write!(
            f,
            "MySQLHandshake(protocol={}, version_length={}, version={}, mysql_thread_id={}, \
             server_status={}, scramble={}, character_set={}, capabilities={})",
            Field(self.protocol()),
            self.version_length,
            Field(self.version()),
            Field(self.mysql_thread_id()),
            Field(self.server_status()),
            Field(scramble),
            Field(self.character_set()),
            Field(self.capabilities()),
        )
    }
}

use std::cmp::Ordering;
use std::fmt;

use crate::error::{HandshakeError, Result};

/// Dotted numeric server version, e.g. `5.7.44`.
///
/// Components compare numerically and missing trailing components count as
/// zero, so `4.1 == 4.1.0` and `10.2 > 4.1`.
#[derive(Debug, Clone)]
pub struct ServerVersion(Vec<u32>);

impl ServerVersion {
    pub const PROTOCOL_41: [u32; 2] = [4, 1];

    /// Parses the numeric part of a server version string. Anything after the
    /// first `-` is a vendor suffix (`-log`, `-MariaDB`, ...) and is ignored.
    pub fn parse(version: &str) -> Result<ServerVersion> {
        let numeric = version.split('-').next().unwrap_or_default();
        let parts = numeric
            .split('.')
            .map(|part| {
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                part.parse::<u32>().ok()
            })
            .collect::<Option<Vec<u32>>>();

        match parts {
            Some(parts) => Ok(ServerVersion(parts)),
            None => Err(HandshakeError::VersionParse {
                version: version.to_string(),
            }),
        }
    }

    pub fn components(&self) -> &[u32] {
        &self.0
    }

    pub fn supports_protocol_41(&self) -> bool {
        *self >= ServerVersion(Self::PROTOCOL_41.to_vec())
    }
}

impl Ord for ServerVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.0.len().max(other.0.len());
        for i in 0..len {
            let a = self.0.get(i).copied().unwrap_or(0);
            let b = other.0.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for ServerVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ServerVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ServerVersion {}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|p| p.to_string()).collect();
        write!(f, "{}", parts.join("."))
    }
}

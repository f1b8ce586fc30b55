use std::fmt::{Display, Write};

use log::warn;
use packets::mysql::common::{flag_names, CAPABILITIES, SERVER_STATUS};
use packets::{HandshakeDecoder, Result};

fn field<T: Display>(name: &str, value: Result<T>) -> String {
    match value {
        Ok(v) => v.to_string(),
        Err(e) => {
            warn!("Failed to decode {}: {}", name, e);
            format!("<unavailable: {}>", e)
        }
    }
}

fn flags(out: &mut String, name: &str, value: Result<u16>, table: &[(u16, &'static str)]) {
    match value {
        Ok(bits) => {
            let _ = writeln!(out, "    MySQL {}:", name);
            for flag in flag_names(bits, table) {
                let _ = writeln!(out, "     -  {}", flag);
            }
        }
        Err(e) => {
            warn!("Failed to decode {}: {}", name, e);
            let _ = writeln!(out, "    MySQL {}:\t <unavailable: {}>", name, e);
        }
    }
}

/// Human readable dump of a server greeting.
pub fn render(decoder: &HandshakeDecoder<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "MySQL Handshake Dump");
    let _ = writeln!(out, "====================");
    let _ = writeln!(out, "    MySQL Version:\t {}", field("version", decoder.version()));
    let _ = writeln!(out, "    MySQL Protocol:\t {}", field("protocol", decoder.protocol()));
    let _ = writeln!(
        out,
        "    MySQL Char Set:\t {}",
        field("character set", decoder.character_set())
    );
    let _ = writeln!(
        out,
        "    MySQL Thread ID:\t {}",
        field("thread id", decoder.mysql_thread_id())
    );
    flags(&mut out, "Server Status", decoder.server_status(), SERVER_STATUS);
    flags(&mut out, "Capabilities", decoder.capabilities(), CAPABILITIES);
    let scramble = decoder.scramble().map(|s| format!("{:?}", s));
    let _ = writeln!(out, "    MySQL Scramble:\t {}", field("scramble", scramble));
    out
}

#[cfg(test)]
mod test {
    use super::*;

    fn greeting_57() -> Vec<u8> {
        let mut pkt = vec![0x33, 0x00, 0x00, 0x00, 0x0a];
        pkt.extend_from_slice(b"5.7.0\0");
        pkt.extend_from_slice(&7u32.to_le_bytes());
        pkt.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        pkt.extend_from_slice(&0x820Fu16.to_le_bytes());
        pkt.push(8);
        pkt.extend_from_slice(&0x0002u16.to_le_bytes());
        pkt.extend_from_slice(&[0; 13]);
        pkt.extend_from_slice(&[10, 11, 12, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        pkt
    }

    #[test]
    fn test_render() {
        let pkt = greeting_57();
        let out = render(&HandshakeDecoder::decode(&pkt));
        let expected = "MySQL Handshake Dump\n\
                        ====================\n\
                        \x20   MySQL Version:\t 5.7.0\n\
                        \x20   MySQL Protocol:\t 10\n\
                        \x20   MySQL Char Set:\t 8\n\
                        \x20   MySQL Thread ID:\t 7\n\
                        \x20   MySQL Server Status:\n\
                        \x20    -  SERVER_STATUS_AUTOCOMMIT\n\
                        \x20   MySQL Capabilities:\n\
                        \x20    -  CLIENT_LONG_PASSWORD\n\
                        \x20    -  CLIENT_FOUND_ROWS\n\
                        \x20    -  CLIENT_LONG_FLAG\n\
                        \x20    -  CLIENT_CONNECT_WITH_DB\n\
                        \x20    -  CLIENT_PROTOCOL_41\n\
                        \x20    -  CLIENT_SECURE_CONNECTION\n\
                        \x20   MySQL Scramble:\t [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_truncated() {
        let pkt = greeting_57();
        let out = render(&HandshakeDecoder::decode(&pkt[..20]));
        assert!(out.contains("MySQL Version:\t 5.7.0"));
        assert!(out.contains("MySQL Thread ID:\t 7"));
        assert!(out.contains("MySQL Capabilities:\t <unavailable: truncated buffer"));
        assert!(out.contains("MySQL Scramble:\t <unavailable:"));
    }
}

pub mod error;
pub mod mysql;

pub use error::{HandshakeError, Result};
pub use mysql::handshake::{Handshake, HandshakeDecoder};
pub use mysql::version::ServerVersion;
pub use mysql::PacketHeader;

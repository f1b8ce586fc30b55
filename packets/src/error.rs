use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandshakeError {
    #[error("truncated buffer: {field} needs {length} bytes at offset {offset}, only {available} available")]
    TruncatedBuffer {
        field: &'static str,
        offset: usize,
        length: usize,
        available: usize,
    },

    #[error("server version is not NUL terminated within {available} bytes")]
    MissingTerminator { available: usize },

    #[error("cannot parse server version: {version:?}")]
    VersionParse { version: String },
}

pub type Result<T> = std::result::Result<T, HandshakeError>;

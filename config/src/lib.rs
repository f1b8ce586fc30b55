use std::time::Duration;

pub const DEFAULT_TARGET: &str = "127.0.0.1:3306";
pub const DEFAULT_READ_BUFFER: usize = 128;
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct Config {
    pub target: String,
    // the greeting is decoded from a single read into a buffer of this size
    pub read_buffer: usize,
    pub connect_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            target: DEFAULT_TARGET.to_string(),
            read_buffer: DEFAULT_READ_BUFFER,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl Config {
    pub fn with_target(target: impl Into<String>) -> Config {
        Config {
            target: target.into(),
            ..Config::default()
        }
    }
}

use std::io;

use config::Config;
use log::{debug, info};
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tokio::time::timeout;

pub struct Probe {
    config: Config,
}

impl Probe {
    pub fn new(config: Config) -> Probe {
        Probe { config }
    }

    /// Connects to the target and returns the read buffer after a single
    /// read. The buffer keeps its full configured size; bytes the server did
    /// not send stay zero.
    pub async fn fetch_greeting(&self) -> io::Result<Vec<u8>> {
        let conf = &self.config;
        let connect = TcpStream::connect(conf.target.as_str());
        let mut stream = match timeout(conf.connect_timeout, connect).await {
            Ok(stream) => stream?,
            Err(_) => {
                return Err(io::Error::new(
                    io::ErrorKind::TimedOut,
                    format!("connect to {} timed out", conf.target),
                ));
            }
        };
        info!("Connected to {}", conf.target);

        let mut buf = vec![0u8; conf.read_buffer];
        let n = stream.read(&mut buf).await?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("{} closed the connection before sending a greeting", conf.target),
            ));
        }
        debug!("Read greeting from {}, payload len: {}", conf.target, n);

        Ok(buf)
    }
}

mod probe;
mod report;

use config::Config;
use log::{error, warn};
use packets::HandshakeDecoder;
use probe::Probe;
use std::error::Error;
use std::process;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let conf = match std::env::args().nth(1) {
        Some(target) => Config::with_target(target),
        None => Config::default(),
    };

    let buf = match Probe::new(conf.clone()).fetch_greeting().await {
        Ok(buf) => buf,
        Err(e) => {
            error!("Error reading greeting from {}: {}", conf.target, e);
            process::exit(1);
        }
    };

    let handshake = HandshakeDecoder::decode(&buf);
    if let Err(e) = handshake.check_terminator() {
        warn!("Malformed greeting: {}", e);
    }
    print!("{}", report::render(&handshake));
    Ok(())
}

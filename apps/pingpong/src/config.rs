//! CLI configuration with environment fallbacks.
//!
//! Precedence per setting: explicit flag, then environment variable, then
//! the built-in default. `NATS_URL` overrides host and port wholesale when
//! neither flag is given.

use clap::Parser;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 4222;
const DEFAULT_INBOUND: &str = "discord-inbound";
const DEFAULT_OUTBOUND: &str = "discord-outbound";

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Replies pong on the outbound topic whenever ping arrives inbound")]
pub struct Cli {
    /// Broker hostname or address (env: BROKER_HOST)
    #[arg(long)]
    host: Option<String>,
    /// Broker port (env: BROKER_PORT)
    #[arg(long)]
    port: Option<u16>,
    /// Pub/sub topic to listen on for new messages (env: INBOUND_TOPIC)
    #[arg(long)]
    inbound: Option<String>,
    /// Pub/sub topic replies are published to (env: OUTBOUND_TOPIC)
    #[arg(long)]
    outbound: Option<String>,
}

impl Cli {
    pub fn broker_url(&self) -> String {
        if self.host.is_none() && self.port.is_none() {
            if let Ok(url) = std::env::var("NATS_URL") {
                return url;
            }
        }
        format!("nats://{}:{}", self.host(), self.port())
    }

    pub fn host(&self) -> String {
        self.host
            .clone()
            .or_else(|| std::env::var("BROKER_HOST").ok())
            .unwrap_or_else(|| DEFAULT_HOST.into())
    }

    pub fn port(&self) -> u16 {
        self.port
            .or_else(|| {
                std::env::var("BROKER_PORT")
                    .ok()
                    .and_then(|v| v.parse().ok())
            })
            .unwrap_or(DEFAULT_PORT)
    }

    pub fn inbound(&self) -> String {
        self.inbound
            .clone()
            .or_else(|| std::env::var("INBOUND_TOPIC").ok())
            .unwrap_or_else(|| DEFAULT_INBOUND.into())
    }

    pub fn outbound(&self) -> String {
        self.outbound
            .clone()
            .or_else(|| std::env::var("OUTBOUND_TOPIC").ok())
            .unwrap_or_else(|| DEFAULT_OUTBOUND.into())
    }
}

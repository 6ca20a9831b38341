//! Example bot: subscribes to the inbound topic and answers "ping" with a
//! "pong" envelope on the outbound topic.

mod config;
mod handler;

use anyhow::Result;
use clap::Parser;
use futures::StreamExt;
use pingpong_bus::NatsBusClient;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = config::Cli::parse();
    let broker_url = cli.broker_url();
    let inbound = cli.inbound();
    let outbound = cli.outbound();
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        broker = %broker_url,
        inbound = %inbound,
        outbound = %outbound,
        "starting pingpong"
    );

    let nats = async_nats::connect(broker_url).await?;
    let bus = NatsBusClient::new(nats.clone());
    let mut sub = nats.subscribe(inbound.clone()).await?;
    tracing::info!(topic = %inbound, "subscribed to inbound topic");

    while let Some(msg) = sub.next().await {
        if let Err(err) = handler::handle_payload(&bus, &outbound, &msg.payload).await {
            tracing::warn!(topic = %outbound, "reply failed: {err}");
        }
    }

    Ok(())
}

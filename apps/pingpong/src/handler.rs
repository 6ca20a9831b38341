//! Trigger matching and reply publishing for inbound payloads.

use anyhow::Result;
use pingpong_bus::{BusClient, to_value};
use pingpong_core::Envelope;

pub const APP_NAME: &str = "pingpong";
pub const TRIGGER: &str = "ping";
pub const REPLY: &str = "pong";

/// Handles one inbound payload: decode, match the trigger, publish the reply.
///
/// Payloads that do not decode as an `Envelope` are logged and skipped, so
/// stray broker traffic never produces a publish. Returns the reply envelope
/// when one was published.
pub async fn handle_payload(
    bus: &dyn BusClient,
    outbound: &str,
    payload: &[u8],
) -> Result<Option<Envelope>> {
    let msg: Envelope = match serde_json::from_slice(payload) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("undecodable inbound payload: {e}");
            return Ok(None);
        }
    };

    if msg.content != TRIGGER {
        return Ok(None);
    }

    tracing::debug!(
        id = %msg.metadata.id,
        source = %msg.metadata.source,
        channel = %msg.channel_id,
        "received ping"
    );

    let reply = msg.respond_to_channel_or_thread(APP_NAME, REPLY, false, false);
    bus.publish_value(outbound, to_value(&reply)?).await?;
    Ok(Some(reply))
}

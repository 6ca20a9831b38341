use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Routing metadata carried by every envelope.
///
/// `source` names the app or gateway that produced the envelope, `dest` names
/// the one expected to consume it, and `id` is unique per envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Metadata {
    pub source: String,
    #[serde(default)]
    pub dest: String,
    pub id: Uuid,
}

/// Message record exchanged over the pub/sub broker.
///
/// ```
/// use pingpong_core::Envelope;
///
/// let inbound: Envelope = serde_json::from_str(
///     r#"{
///         "metadata": {"source": "gateway", "dest": "", "id": "00000000-0000-0000-0000-000000000000"},
///         "channel_id": "chan-1",
///         "content": "ping"
///     }"#,
/// ).unwrap();
/// let reply = inbound.respond_to_channel_or_thread("pingpong", "pong", false, false);
/// assert_eq!(reply.metadata.dest, "gateway");
/// assert_eq!(reply.channel_id, "chan-1");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope {
    pub metadata: Metadata,
    pub channel_id: String,
    pub content: String,
    /// The envelope that triggered this one. Clients use it for reply
    /// threading; inbound messages leave it unset.
    #[serde(default)]
    pub previous_message: Option<Box<Envelope>>,
    #[serde(default)]
    pub should_reply: bool,
    #[serde(default)]
    pub should_mention: bool,
}

impl Envelope {
    /// Builds a reply addressed back at the sender of `self`.
    ///
    /// The reply gets a freshly generated id, `dest` set to the inbound
    /// `metadata.source`, the same `channel_id`, and `self` embedded as
    /// `previous_message` so the consuming gateway can thread the response.
    pub fn respond_to_channel_or_thread(
        &self,
        source_app: &str,
        content: impl Into<String>,
        should_reply: bool,
        should_mention: bool,
    ) -> Envelope {
        Envelope {
            metadata: Metadata {
                source: source_app.to_string(),
                dest: self.metadata.source.clone(),
                id: Uuid::new_v4(),
            },
            channel_id: self.channel_id.clone(),
            content: content.into(),
            previous_message: Some(Box::new(self.clone())),
            should_reply,
            should_mention,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inbound() -> Envelope {
        Envelope {
            metadata: Metadata {
                source: "gateway".into(),
                dest: String::new(),
                id: Uuid::new_v4(),
            },
            channel_id: "chan-42".into(),
            content: "ping".into(),
            previous_message: None,
            should_reply: false,
            should_mention: false,
        }
    }

    #[test]
    fn reply_routes_back_to_sender() {
        let msg = inbound();
        let reply = msg.respond_to_channel_or_thread("pingpong", "pong", true, false);
        assert_eq!(reply.metadata.source, "pingpong");
        assert_eq!(reply.metadata.dest, "gateway");
        assert_eq!(reply.channel_id, "chan-42");
        assert_eq!(reply.content, "pong");
        assert!(reply.should_reply);
        assert!(!reply.should_mention);
        assert_eq!(reply.previous_message.as_deref(), Some(&msg));
    }

    #[test]
    fn reply_ids_are_fresh_and_unique() {
        let msg = inbound();
        let a = msg.respond_to_channel_or_thread("pingpong", "pong", false, false);
        let b = msg.respond_to_channel_or_thread("pingpong", "pong", false, false);
        assert!(!a.metadata.id.is_nil());
        assert!(!b.metadata.id.is_nil());
        assert_ne!(a.metadata.id, b.metadata.id);
        assert_ne!(a.metadata.id, msg.metadata.id);
    }

    #[test]
    fn inbound_wire_shape_decodes_with_defaults() {
        let raw = r#"{
            "metadata": {"source": "gateway", "id": "11111111-1111-1111-1111-111111111111"},
            "channel_id": "chan-1",
            "content": "hello world"
        }"#;
        let env: Envelope = serde_json::from_str(raw).unwrap();
        assert_eq!(env.metadata.dest, "");
        assert_eq!(env.content, "hello world");
        assert!(env.previous_message.is_none());
        assert!(!env.should_reply);
        assert!(!env.should_mention);
    }

    #[test]
    fn reply_round_trips_through_json() {
        let reply = inbound().respond_to_channel_or_thread("pingpong", "pong", false, true);
        let raw = serde_json::to_string(&reply).unwrap();
        let back: Envelope = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, reply);
    }

    #[test]
    fn payload_missing_metadata_fails_to_decode() {
        let raw = r#"{"channel_id": "chan-1", "content": "ping"}"#;
        assert!(serde_json::from_str::<Envelope>(raw).is_err());
    }
}

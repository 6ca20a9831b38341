//! Publishing seam for the pingpong bot.
//!
//! `BusClient` abstracts the outbound side of the broker so the trigger
//! handler can be exercised against an in-memory client in tests while the
//! binary publishes through NATS.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(thiserror::Error, Debug)]
pub enum BusError {
    #[error("publish to {subject} failed")]
    Publish {
        subject: String,
        #[source]
        source: anyhow::Error,
    },
    #[error(transparent)]
    Encode(#[from] anyhow::Error),
}

#[async_trait]
pub trait BusClient: Send + Sync {
    async fn publish_value(&self, subject: &str, payload: Value) -> Result<(), BusError>;
}

pub struct NatsBusClient {
    client: async_nats::Client,
}

impl NatsBusClient {
    pub fn new(client: async_nats::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BusClient for NatsBusClient {
    async fn publish_value(&self, subject: &str, payload: Value) -> Result<(), BusError> {
        let bytes = serde_json::to_vec(&payload).map_err(|e| BusError::Encode(e.into()))?;
        self.client
            .publish(subject.to_string(), bytes.into())
            .await
            .map_err(|err| BusError::Publish {
                subject: subject.to_string(),
                source: err.into(),
            })
    }
}

/// Records published values instead of talking to a broker.
#[derive(Clone, Default)]
pub struct InMemoryBusClient {
    published: Arc<Mutex<Vec<(String, Value)>>>,
}

impl InMemoryBusClient {
    /// Drains and returns everything published so far.
    pub async fn take_published(&self) -> Vec<(String, Value)> {
        let mut guard = self.published.lock().await;
        std::mem::take(&mut *guard)
    }
}

#[async_trait]
impl BusClient for InMemoryBusClient {
    async fn publish_value(&self, subject: &str, payload: Value) -> Result<(), BusError> {
        let mut guard = self.published.lock().await;
        guard.push((subject.to_string(), payload));
        Ok(())
    }
}

pub fn to_value<T: serde::Serialize>(payload: &T) -> Result<Value, BusError> {
    serde_json::to_value(payload).map_err(|e| BusError::Encode(e.into()))
}

// ── Bus client seam ──
//
// The bridge delegates all MQTT mechanics (connection, keep-alive, QoS,
// reconnection) to an injected implementation of this trait. Tests
// substitute a recording mock backed by channels.

use async_trait::async_trait;
use thiserror::Error;

/// One message received from a subscribed topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub topic: String,
    pub payload: String,
}

/// Failure taxonomy for the bus client.
///
/// Unlike [`ApiError`](cocoro_air::ApiError), these are fatal to the task
/// that hits them: a bridge that cannot publish has nothing useful left
/// to do.
#[derive(Debug, Error)]
pub enum BusError {
    /// The connection to the broker was lost and the client gave up.
    #[error("Bus connection lost: {message}")]
    ConnectionLost { message: String },

    /// A publish was rejected or could not be delivered.
    #[error("Publish to '{topic}' failed: {message}")]
    Publish { topic: String, message: String },

    /// A subscription could not be established.
    #[error("Subscribe failed: {message}")]
    Subscribe { message: String },
}

/// Injectable pub/sub client.
///
/// `recv` is the blocking receive primitive the command dispatcher parks
/// on; it yields `None` once the underlying message stream has closed,
/// which ends the dispatch loop cleanly.
#[async_trait]
pub trait BusClient: Send + Sync {
    async fn subscribe(&self, topics: &[String]) -> Result<(), BusError>;

    async fn publish(&self, topic: &str, payload: &str) -> Result<(), BusError>;

    async fn recv(&self) -> Option<InboundMessage>;
}

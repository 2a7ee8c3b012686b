use thiserror::Error;

use cocoro_air::ApiError;

use crate::bus::BusError;

/// Top-level error type for the bridge.
///
/// Only failures that are genuinely fatal surface here: startup enumeration,
/// bus faults, descriptor encoding, and task join failures. Per-device API
/// errors and command-decoding errors are contained inside the loops and
/// never reach this type.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Device enumeration failed at startup.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The bus client failed; the enclosing task cannot continue.
    #[error(transparent)]
    Bus(#[from] BusError),

    /// A discovery descriptor could not be encoded.
    #[error("Failed to encode discovery descriptor: {0}")]
    Encode(#[from] serde_json::Error),

    /// A background task panicked or was aborted.
    #[error("Background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Inbound command messages that cannot be mapped to a device operation.
///
/// Kept taxonomically separate from [`ApiError`]: both are logged and
/// dropped, but decoding failures never touched the remote API at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The topic's device id matched nothing in the registry.
    #[error("Unknown device: {device_id} ({topic})")]
    UnknownDevice { device_id: String, topic: String },

    /// The topic's target segment is not a known command surface.
    #[error("Unknown command target: {target} ({topic})")]
    UnknownTarget { target: String, topic: String },

    /// The topic has too few segments to carry a device id and target.
    #[error("Malformed command topic: {topic}")]
    MalformedTopic { topic: String },
}

// ── Device metadata and client traits ──
//
// DeviceInfo is everything the bridge needs to know about an appliance
// besides its live status: identity, display metadata, and kind. The two
// traits are the injection seam for the real HTTP client and for test mocks.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::status::Status;

/// Appliance category as reported by device enumeration.
///
/// The bridge only drives air cleaners; every other category the cloud
/// account may contain folds into [`Other`](Self::Other) and is filtered
/// out at registry load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum DeviceKind {
    AirCleaner,
    #[serde(other)]
    Other,
}

/// Immutable metadata for one remote-controlled appliance.
///
/// `echonet_node` is the stable identifier: it namespaces the appliance's
/// MQTT topics and correlates inbound commands back to a device handle.
/// Never mutated after enumeration — both bridge loops only read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub echonet_node: String,
    pub name: String,
    pub maker: String,
    pub model: String,
    pub kind: DeviceKind,
}

/// Handle to one appliance: metadata access plus the remote operations the
/// bridge issues against it.
///
/// `set_air_volume` takes the preset verbatim — the cloud service validates
/// it, and an unsupported preset surfaces as an [`ApiError`].
#[async_trait]
pub trait AirCleaner: Send + Sync {
    fn info(&self) -> &DeviceInfo;

    /// Fetch a fresh status snapshot from the cloud service.
    async fn fetch_status(&self) -> Result<Status, ApiError>;

    async fn set_power_on(&self, on: bool) -> Result<(), ApiError>;

    async fn set_humidifier_on(&self, on: bool) -> Result<(), ApiError>;

    async fn set_air_volume(&self, preset: &str) -> Result<(), ApiError>;
}

/// The Cocoro Air cloud client: device enumeration.
///
/// Called exactly once per process — the bridge caches the result for its
/// lifetime.
#[async_trait]
pub trait CocoroClient: Send + Sync {
    async fn devices(&self) -> Result<Vec<Arc<dyn AirCleaner>>, ApiError>;
}

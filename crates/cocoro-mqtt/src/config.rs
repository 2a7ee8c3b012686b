// ── Bridge configuration ──

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Seconds between state-refresh cycles when not configured.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30;

/// Bridge configuration.
///
/// The whole surface: the refresh interval. Client instances are injected
/// at construction and log-level selection belongs to whoever installs the
/// tracing subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Seconds between full state-refresh cycles. The interval applies to
    /// the whole batch, not per device.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

fn default_refresh_interval_secs() -> u64 {
    DEFAULT_REFRESH_INTERVAL_SECS
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
        }
    }
}

impl BridgeConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}

// ── Device registry ──
//
// Resolved once at startup, read-only afterwards. Both bridge tasks hold
// references into the same collection; nothing here is ever mutated, so no
// synchronization is needed beyond Arc.

use std::sync::Arc;

use tracing::debug;

use cocoro_air::{AirCleaner, ApiError, CocoroClient, DeviceKind};

/// The startup-loaded list of controllable air cleaners, in enumeration
/// order. Iteration order is fixed for the process lifetime, which keeps
/// each publish cycle deterministic.
pub struct DeviceRegistry {
    devices: Vec<Arc<dyn AirCleaner>>,
}

impl DeviceRegistry {
    /// Enumerate devices through the cloud client and keep only air
    /// cleaners. The remote call happens exactly once; a failure here is
    /// fatal to startup and propagates to the caller.
    pub async fn load(client: &dyn CocoroClient) -> Result<Self, ApiError> {
        let devices: Vec<Arc<dyn AirCleaner>> = client
            .devices()
            .await?
            .into_iter()
            .filter(|d| d.info().kind == DeviceKind::AirCleaner)
            .collect();
        debug!(count = devices.len(), "device registry loaded");
        Ok(Self { devices })
    }

    /// All registered devices, in enumeration order.
    pub fn devices(&self) -> &[Arc<dyn AirCleaner>] {
        &self.devices
    }

    /// Resolve a device by its ECHONET node id (the MQTT topic key).
    pub fn find(&self, echonet_node: &str) -> Option<&Arc<dyn AirCleaner>> {
        self.devices
            .iter()
            .find(|d| d.info().echonet_node == echonet_node)
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cocoro_air::{DeviceInfo, Status};

    struct FakeDevice {
        info: DeviceInfo,
    }

    #[async_trait]
    impl AirCleaner for FakeDevice {
        fn info(&self) -> &DeviceInfo {
            &self.info
        }

        async fn fetch_status(&self) -> Result<Status, ApiError> {
            Err(ApiError::Transport {
                message: "not wired in this test".into(),
            })
        }

        async fn set_power_on(&self, _on: bool) -> Result<(), ApiError> {
            Ok(())
        }

        async fn set_humidifier_on(&self, _on: bool) -> Result<(), ApiError> {
            Ok(())
        }

        async fn set_air_volume(&self, _preset: &str) -> Result<(), ApiError> {
            Ok(())
        }
    }

    struct FakeClient {
        devices: Vec<Arc<dyn AirCleaner>>,
    }

    #[async_trait]
    impl CocoroClient for FakeClient {
        async fn devices(&self) -> Result<Vec<Arc<dyn AirCleaner>>, ApiError> {
            Ok(self.devices.clone())
        }
    }

    fn device(id: &str, kind: DeviceKind) -> Arc<dyn AirCleaner> {
        Arc::new(FakeDevice {
            info: DeviceInfo {
                echonet_node: id.into(),
                name: format!("Device {id}"),
                maker: "SHARP".into(),
                model: "KI-JS50".into(),
                kind,
            },
        })
    }

    #[tokio::test]
    async fn load_filters_to_air_cleaners_preserving_order() {
        let client = FakeClient {
            devices: vec![
                device("a1", DeviceKind::AirCleaner),
                device("b2", DeviceKind::Other),
                device("c3", DeviceKind::AirCleaner),
            ],
        };

        let registry = DeviceRegistry::load(&client).await.unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.devices()[0].info().echonet_node, "a1");
        assert_eq!(registry.devices()[1].info().echonet_node, "c3");
    }

    #[tokio::test]
    async fn find_resolves_by_echonet_node() {
        let client = FakeClient {
            devices: vec![device("a1", DeviceKind::AirCleaner)],
        };
        let registry = DeviceRegistry::load(&client).await.unwrap();

        assert!(registry.find("a1").is_some());
        assert!(registry.find("zz").is_none());
    }
}

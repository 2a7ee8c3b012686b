// ── Bridge coordinator ──
//
// Owns the device registry, the injected clients, and the single guard
// that serializes every remote status fetch. Startup (enumeration,
// subscriptions, discovery) runs to completion before the two long-running
// tasks are spawned; the tasks share nothing but the guard.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info};

use cocoro_air::{AirCleaner, CocoroClient};

use crate::bus::{BusClient, BusError};
use crate::command::{self, CommandRequest};
use crate::config::BridgeConfig;
use crate::discovery;
use crate::error::{BridgeError, DecodeError};
use crate::registry::DeviceRegistry;
use crate::state;
use crate::topic;

/// The bridge between the Cocoro Air cloud API and the MQTT bus.
///
/// Cheaply cloneable via `Arc<BridgeInner>` so both background tasks hold
/// the same registry, bus client, and fetch guard.
#[derive(Clone)]
pub struct Bridge {
    inner: Arc<BridgeInner>,
}

struct BridgeInner {
    config: BridgeConfig,
    registry: DeviceRegistry,
    bus: Arc<dyn BusClient>,
    /// Serializes every remote fetch across both tasks. Global rather than
    /// per-device: concurrent fetches would double the cloud API load and
    /// interleave publishes inconsistently.
    fetch_guard: Mutex<()>,
}

impl Bridge {
    /// Enumerate the controllable devices and build the bridge.
    ///
    /// The cloud client is only needed here — the registry caches the
    /// device handles for the process lifetime. Does NOT start the loops;
    /// call [`run()`](Self::run).
    pub async fn connect(
        config: BridgeConfig,
        cocoro: &dyn CocoroClient,
        bus: Arc<dyn BusClient>,
    ) -> Result<Self, BridgeError> {
        let registry = DeviceRegistry::load(cocoro).await?;
        info!(devices = registry.len(), "bridge connected");
        Ok(Self {
            inner: Arc::new(BridgeInner {
                config,
                registry,
                bus,
                fetch_guard: Mutex::new(()),
            }),
        })
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.inner.config
    }

    pub fn registry(&self) -> &DeviceRegistry {
        &self.inner.registry
    }

    /// Run the bridge until the bus message stream closes or a task fails.
    ///
    /// Subscribes to every device's command topics and publishes its
    /// discovery descriptors, then spawns the state publisher and command
    /// dispatcher. Whichever task settles first decides the outcome — the
    /// survivor would otherwise block forever and swallow its sibling's
    /// error — and the survivor is aborted. There is deliberately no other
    /// cancellation or timeout path.
    pub async fn run(&self) -> Result<(), BridgeError> {
        for device in self.inner.registry.devices() {
            let id = &device.info().echonet_node;
            self.inner.bus.subscribe(&topic::command_topics(id)).await?;
            for (config_topic, payload) in discovery::descriptors(device.info())? {
                self.inner.bus.publish(&config_topic, &payload).await?;
            }
            debug!(device = %device.info().name, "discovery published");
        }

        let mut publisher = tokio::spawn(state_publisher_task(self.clone()));
        let mut dispatcher = tokio::spawn(command_dispatch_task(self.clone()));
        tokio::select! {
            result = &mut publisher => {
                dispatcher.abort();
                result??;
            }
            result = &mut dispatcher => {
                publisher.abort();
                result??;
            }
        }
        Ok(())
    }

    /// Refresh-and-publish for one device: fetch a fresh status under the
    /// guard and publish the twelve state messages.
    ///
    /// A cloud API failure is a soft failure — logged, nothing published,
    /// `Ok(())` returned. Only bus faults propagate.
    pub(crate) async fn refresh_device_state(
        &self,
        device: &dyn AirCleaner,
    ) -> Result<(), BusError> {
        let _guard = self.inner.fetch_guard.lock().await;
        let info = device.info();
        info!(device = %info.name, "fetching device status");
        let status = match device.fetch_status().await {
            Ok(status) => status,
            Err(e) => {
                error!(device = %info.name, error = %e, "couldn't fetch device status");
                return Ok(());
            }
        };
        debug!(device = %info.name, ?status, "device status fetched");

        for (state_topic, payload) in state::state_messages(&info.echonet_node, &status) {
            self.inner.bus.publish(&state_topic, &payload).await?;
        }
        Ok(())
    }

    /// One publisher cycle: refresh-and-publish every device in registry
    /// order.
    pub(crate) async fn publish_cycle(&self) -> Result<(), BusError> {
        for device in self.inner.registry.devices() {
            self.refresh_device_state(device.as_ref()).await?;
        }
        Ok(())
    }

    /// Decode and execute one inbound command, then refresh the affected
    /// device so its new state is visible without waiting for the next
    /// periodic cycle.
    ///
    /// Decoding failures and cloud API failures are logged and dropped;
    /// the dispatch loop keeps accepting messages either way.
    pub(crate) async fn handle_command(&self, msg_topic: &str, payload: &str) -> Result<(), BusError> {
        let addressed = match command::split_topic(msg_topic) {
            Ok(addressed) => addressed,
            Err(e) => {
                error!(error = %e, "dropping command");
                return Ok(());
            }
        };
        // Device resolution precedes target validation: a message for a
        // device the registry doesn't know is an unknown-device drop,
        // whatever the target segment carries.
        let Some(device) = self.inner.registry.find(&addressed.device_id) else {
            let e = DecodeError::UnknownDevice {
                device_id: addressed.device_id,
                topic: msg_topic.to_owned(),
            };
            error!(error = %e, "dropping command");
            return Ok(());
        };
        let request = match command::request(&addressed.target, payload, msg_topic) {
            Ok(request) => request,
            Err(e) => {
                error!(error = %e, "dropping command");
                return Ok(());
            }
        };

        info!(topic = %msg_topic, %payload, "executing command");
        let result = match &request {
            CommandRequest::SetPower { on } => device.set_power_on(*on).await,
            CommandRequest::SetHumidifier { on } => device.set_humidifier_on(*on).await,
            CommandRequest::SetMode { preset } => device.set_air_volume(preset).await,
        };
        if let Err(e) = result {
            error!(topic = %msg_topic, %payload, error = %e, "couldn't execute command");
            return Ok(());
        }

        self.refresh_device_state(device.as_ref()).await
    }
}

/// Periodic state refresh: every device in registry order, then sleep for
/// the configured interval. A device's API failure never skips the devices
/// after it; only a bus fault ends the task.
async fn state_publisher_task(bridge: Bridge) -> Result<(), BridgeError> {
    let interval = bridge.inner.config.refresh_interval();
    loop {
        bridge.publish_cycle().await?;
        tokio::time::sleep(interval).await;
    }
}

/// Command dispatch: park on the bus receive primitive and process each
/// message to completion before taking the next — commands are strictly
/// serialized relative to each other.
async fn command_dispatch_task(bridge: Bridge) -> Result<(), BridgeError> {
    while let Some(msg) = bridge.inner.bus.recv().await {
        bridge.handle_command(&msg.topic, &msg.payload).await?;
    }
    info!("command stream closed");
    Ok(())
}

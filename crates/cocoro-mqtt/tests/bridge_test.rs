#![allow(clippy::unwrap_used)]
// End-to-end scenarios through the public Bridge surface, with recording
// mock clients standing in for the cloud API and the MQTT broker.

use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::time::Duration;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use tokio::sync::{Mutex, mpsc};

use cocoro_air::{AirCleaner, ApiError, CocoroClient, DeviceInfo, DeviceKind, Status};
use cocoro_mqtt::{Bridge, BridgeConfig, BusClient, BusError, InboundMessage};

// ── Mock clients ────────────────────────────────────────────────────

struct MockDevice {
    info: DeviceInfo,
    commands: StdMutex<Vec<String>>,
}

impl MockDevice {
    fn new(id: &str, name: &str) -> Arc<Self> {
        Arc::new(Self {
            info: DeviceInfo {
                echonet_node: id.into(),
                name: name.into(),
                maker: "SHARP".into(),
                model: "KI-JS50".into(),
                kind: DeviceKind::AirCleaner,
            },
            commands: StdMutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl AirCleaner for MockDevice {
    fn info(&self) -> &DeviceInfo {
        &self.info
    }

    async fn fetch_status(&self) -> Result<Status, ApiError> {
        Ok(Status {
            power_on: true,
            air_volume: "quiet".into(),
            humidifier_on: true,
            light_detected: false,
            enough_water: true,
            temperature: 22.0,
            humidity: 40.0,
            total_air_cleaned: 500,
            pm25: 4,
            odor: 7,
            dust: 9,
            overall_dirtiness: 11,
        })
    }

    async fn set_power_on(&self, on: bool) -> Result<(), ApiError> {
        self.commands.lock().unwrap().push(format!("power:{on}"));
        Ok(())
    }

    async fn set_humidifier_on(&self, on: bool) -> Result<(), ApiError> {
        self.commands
            .lock()
            .unwrap()
            .push(format!("humidifier:{on}"));
        Ok(())
    }

    async fn set_air_volume(&self, preset: &str) -> Result<(), ApiError> {
        self.commands.lock().unwrap().push(format!("mode:{preset}"));
        Ok(())
    }
}

struct MockClient {
    devices: Vec<Arc<MockDevice>>,
}

#[async_trait]
impl CocoroClient for MockClient {
    async fn devices(&self) -> Result<Vec<Arc<dyn AirCleaner>>, ApiError> {
        Ok(self
            .devices
            .iter()
            .map(|d| d.clone() as Arc<dyn AirCleaner>)
            .collect())
    }
}

struct MockBus {
    published: StdMutex<Vec<(String, String)>>,
    subscribed: StdMutex<Vec<String>>,
    inbound: Mutex<mpsc::UnboundedReceiver<InboundMessage>>,
}

impl MockBus {
    fn new() -> (Arc<Self>, mpsc::UnboundedSender<InboundMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let bus = Arc::new(Self {
            published: StdMutex::new(Vec::new()),
            subscribed: StdMutex::new(Vec::new()),
            inbound: Mutex::new(rx),
        });
        (bus, tx)
    }

    fn topics_ending_with(&self, suffix: &str) -> Vec<String> {
        self.published
            .lock()
            .unwrap()
            .iter()
            .map(|(t, _)| t.clone())
            .filter(|t| t.ends_with(suffix))
            .collect()
    }
}

#[async_trait]
impl BusClient for MockBus {
    async fn subscribe(&self, topics: &[String]) -> Result<(), BusError> {
        self.subscribed.lock().unwrap().extend_from_slice(topics);
        Ok(())
    }

    async fn publish(&self, topic: &str, payload: &str) -> Result<(), BusError> {
        self.published
            .lock()
            .unwrap()
            .push((topic.to_owned(), payload.to_owned()));
        Ok(())
    }

    async fn recv(&self) -> Option<InboundMessage> {
        self.inbound.lock().await.recv().await
    }
}

/// Drive `Bridge::run` until all immediate work settles, then bail out via
/// a (virtual-time) timeout — the loops themselves never finish.
async fn run_briefly(bridge: &Bridge) {
    let result = tokio::time::timeout(Duration::from_millis(100), bridge.run()).await;
    assert!(result.is_err(), "bridge loops should outlive the timeout");
}

// ── Scenarios ───────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn startup_subscribes_commands_and_publishes_discovery() {
    let device = MockDevice::new("E1", "Bedroom");
    let client = MockClient {
        devices: vec![device],
    };
    let (bus, _tx) = MockBus::new();

    let bridge = Bridge::connect(BridgeConfig::default(), &client, bus.clone())
        .await
        .unwrap();
    run_briefly(&bridge).await;

    assert_eq!(
        *bus.subscribed.lock().unwrap(),
        vec![
            "cocoro/E1/on/set",
            "cocoro/E1/mode/set",
            "cocoro/E1/humidifier/set",
        ]
    );
    assert_eq!(bus.topics_ending_with("/config").len(), 11);
    // The first periodic cycle runs before the interval sleep.
    assert_eq!(bus.topics_ending_with("/state").len(), 12);
}

#[tokio::test(start_paused = true)]
async fn mode_command_executes_and_triggers_an_immediate_refresh() {
    let device = MockDevice::new("E1", "Bedroom");
    let client = MockClient {
        devices: vec![device.clone()],
    };
    let (bus, tx) = MockBus::new();

    tx.send(InboundMessage {
        topic: "cocoro/E1/mode/set".into(),
        payload: "quiet".into(),
    })
    .unwrap();

    let bridge = Bridge::connect(BridgeConfig::default(), &client, bus.clone())
        .await
        .unwrap();
    run_briefly(&bridge).await;

    assert_eq!(*device.commands.lock().unwrap(), vec!["mode:quiet"]);
    // One periodic cycle plus the command-triggered refresh.
    let state_topics = bus.topics_ending_with("/state");
    assert_eq!(state_topics.len(), 24);
    assert!(state_topics.iter().all(|t| t.starts_with("cocoro/E1/")));
}

#[tokio::test(start_paused = true)]
async fn one_cycle_with_two_devices_publishes_twenty_four_in_registry_order() {
    let first = MockDevice::new("a1", "Living Room");
    let second = MockDevice::new("b2", "Kitchen");
    let client = MockClient {
        devices: vec![first, second],
    };
    let (bus, _tx) = MockBus::new();

    let bridge = Bridge::connect(BridgeConfig::default(), &client, bus.clone())
        .await
        .unwrap();
    run_briefly(&bridge).await;

    let state_topics = bus.topics_ending_with("/state");
    assert_eq!(state_topics.len(), 24);
    assert!(state_topics[..12].iter().all(|t| t.starts_with("cocoro/a1/")));
    assert!(state_topics[12..].iter().all(|t| t.starts_with("cocoro/b2/")));
}

#[tokio::test]
async fn registry_filters_out_unsupported_device_kinds() {
    let cleaner = MockDevice::new("a1", "Living Room");
    let mut other = MockDevice::new("x9", "Oven");
    Arc::get_mut(&mut other).unwrap().info.kind = DeviceKind::Other;
    let client = MockClient {
        devices: vec![cleaner, other],
    };
    let (bus, _tx) = MockBus::new();

    let bridge = Bridge::connect(BridgeConfig::default(), &client, bus)
        .await
        .unwrap();

    assert_eq!(bridge.registry().len(), 1);
    assert!(bridge.registry().find("a1").is_some());
    assert!(bridge.registry().find("x9").is_none());
}

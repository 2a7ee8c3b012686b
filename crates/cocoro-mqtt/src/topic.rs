// ── Topic grammar ──
//
// All topic construction lives here so the state publisher, the command
// decoder, and the discovery publisher agree on one grammar:
//
//   cocoro/<id>/<attribute>/state   outbound state
//   cocoro/<id>/<target>/set        inbound commands
//   homeassistant/<component>/<object>/<id>/config   discovery descriptors

/// Namespace prefix for every per-device topic.
pub const NAMESPACE: &str = "cocoro";

/// Well-known Home Assistant discovery prefix.
pub const DISCOVERY_PREFIX: &str = "homeassistant";

/// Outbound state topic for one device attribute.
pub fn state(device_id: &str, attribute: &str) -> String {
    format!("{NAMESPACE}/{device_id}/{attribute}/state")
}

/// Inbound command topic for one device target.
pub fn set(device_id: &str, target: &str) -> String {
    format!("{NAMESPACE}/{device_id}/{target}/set")
}

/// The three command topics a device accepts, in subscription order.
pub fn command_topics(device_id: &str) -> [String; 3] {
    [
        set(device_id, "on"),
        set(device_id, "mode"),
        set(device_id, "humidifier"),
    ]
}

/// Discovery descriptor topic for one attribute of one device.
pub fn discovery(component: &str, object: &str, device_id: &str) -> String {
    format!("{DISCOVERY_PREFIX}/{component}/{object}/{device_id}/config")
}

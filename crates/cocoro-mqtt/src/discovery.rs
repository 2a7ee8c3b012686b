// ── Home Assistant discovery descriptors ──
//
// One-shot, static translation of device metadata into the JSON config
// payloads Home Assistant's MQTT discovery consumes. Each payload uses the
// `~` topic-prefix shorthand; per-attribute device class, unit, and icon
// come from the fixed tables below. Not concurrency-sensitive.

use serde::Serialize;

use cocoro_air::{AIR_VOLUME_PRESETS, DeviceInfo};

use crate::topic;

/// Nested device-metadata block shared by every descriptor of one device.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceDescription {
    pub manufacturer: String,
    pub model: String,
    pub name: String,
    pub identifiers: Vec<String>,
}

impl DeviceDescription {
    fn from_info(info: &DeviceInfo) -> Self {
        Self {
            manufacturer: info.maker.clone(),
            model: info.model.clone(),
            name: info.name.clone(),
            identifiers: vec![info.echonet_node.clone()],
        }
    }
}

/// One discovery config payload. Optional fields are omitted from the JSON
/// entirely rather than serialized as null.
#[derive(Debug, Serialize)]
struct DescriptorPayload {
    #[serde(rename = "~")]
    topic_prefix: String,
    name: String,
    unique_id: String,
    device: DeviceDescription,
    #[serde(skip_serializing_if = "Option::is_none")]
    device_class: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<&'static str>,
    state_topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    command_topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit_of_measurement: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preset_mode_state_topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preset_mode_command_topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preset_modes: Option<Vec<&'static str>>,
}

/// Static per-attribute metadata for the read-only entities.
struct AttributeSpec {
    attribute: &'static str,
    label: &'static str,
    device_class: Option<&'static str>,
    unit: Option<&'static str>,
    icon: Option<&'static str>,
}

const BINARY_SENSORS: [AttributeSpec; 2] = [
    AttributeSpec {
        attribute: "light",
        label: "Light",
        device_class: Some("light"),
        unit: None,
        icon: None,
    },
    AttributeSpec {
        attribute: "empty_water_tank",
        label: "Empty Water Tank",
        device_class: Some("problem"),
        unit: None,
        icon: Some("mdi:water"),
    },
];

const SENSORS: [AttributeSpec; 7] = [
    AttributeSpec {
        attribute: "temperature",
        label: "Temperature",
        device_class: Some("temperature"),
        unit: Some("°C"),
        icon: None,
    },
    AttributeSpec {
        attribute: "humidity",
        label: "Humidity",
        device_class: Some("humidity"),
        unit: Some("%"),
        icon: None,
    },
    AttributeSpec {
        attribute: "air_cleaned",
        label: "Total Air Cleaned",
        device_class: Some("gas"),
        unit: Some("m³"),
        icon: None,
    },
    AttributeSpec {
        attribute: "pm25",
        label: "PM 2.5",
        device_class: Some("pm25"),
        unit: Some("µg/m³"),
        icon: None,
    },
    AttributeSpec {
        attribute: "odor",
        label: "Odor",
        device_class: None,
        unit: Some("%"),
        icon: Some("mdi:scent"),
    },
    AttributeSpec {
        attribute: "dust",
        label: "Dust",
        device_class: None,
        unit: Some("%"),
        icon: Some("mdi:broom"),
    },
    AttributeSpec {
        attribute: "overall_dirtiness",
        label: "Overall Air Dirtiness",
        device_class: None,
        unit: Some("%"),
        icon: Some("mdi:delete"),
    },
];

fn attribute_payload(info: &DeviceInfo, spec: &AttributeSpec) -> DescriptorPayload {
    let id = &info.echonet_node;
    DescriptorPayload {
        topic_prefix: format!("{}/{id}/{}", topic::NAMESPACE, spec.attribute),
        name: format!("{} {}", info.name, spec.label),
        unique_id: format!("{id}_{}", spec.attribute),
        device: DeviceDescription::from_info(info),
        device_class: spec.device_class,
        icon: spec.icon,
        state_topic: "~/state".to_owned(),
        command_topic: None,
        unit_of_measurement: spec.unit,
        preset_mode_state_topic: None,
        preset_mode_command_topic: None,
        preset_modes: None,
    }
}

fn fan_payload(info: &DeviceInfo) -> DescriptorPayload {
    let id = &info.echonet_node;
    DescriptorPayload {
        topic_prefix: format!("{}/{id}", topic::NAMESPACE),
        name: format!("{} Air Purifier", info.name),
        unique_id: format!("{id}_airpurifier"),
        device: DeviceDescription::from_info(info),
        device_class: None,
        icon: Some("mdi:air-purifier"),
        state_topic: "~/on/state".to_owned(),
        command_topic: Some("~/on/set".to_owned()),
        unit_of_measurement: None,
        preset_mode_state_topic: Some("~/mode/state".to_owned()),
        preset_mode_command_topic: Some("~/mode/set".to_owned()),
        preset_modes: Some(AIR_VOLUME_PRESETS.to_vec()),
    }
}

fn humidifier_payload(info: &DeviceInfo) -> DescriptorPayload {
    let id = &info.echonet_node;
    DescriptorPayload {
        topic_prefix: format!("{}/{id}/humidifier", topic::NAMESPACE),
        name: format!("{} Humidifier", info.name),
        unique_id: format!("{id}_humidifier"),
        device: DeviceDescription::from_info(info),
        device_class: None,
        icon: Some("mdi:air-humidifier"),
        state_topic: "~/state".to_owned(),
        command_topic: Some("~/set".to_owned()),
        unit_of_measurement: None,
        preset_mode_state_topic: None,
        preset_mode_command_topic: None,
        preset_modes: None,
    }
}

/// Build the full descriptor set for one device: the fan entity, the
/// humidifier switch, two binary sensors, and seven numeric sensors —
/// eleven (config topic, JSON payload) pairs.
pub fn descriptors(info: &DeviceInfo) -> Result<Vec<(String, String)>, serde_json::Error> {
    let id = &info.echonet_node;
    let mut out = Vec::with_capacity(2 + BINARY_SENSORS.len() + SENSORS.len());

    out.push((
        topic::discovery("fan", "airpurifier", id),
        serde_json::to_string(&fan_payload(info))?,
    ));
    out.push((
        topic::discovery("switch", "humidifier", id),
        serde_json::to_string(&humidifier_payload(info))?,
    ));
    for spec in &BINARY_SENSORS {
        out.push((
            topic::discovery("binary_sensor", spec.attribute, id),
            serde_json::to_string(&attribute_payload(info, spec))?,
        ));
    }
    for spec in &SENSORS {
        out.push((
            topic::discovery("sensor", spec.attribute, id),
            serde_json::to_string(&attribute_payload(info, spec))?,
        ));
    }
    Ok(out)
}

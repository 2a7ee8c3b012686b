// ── Status snapshot ──

use serde::{Deserialize, Serialize};

/// Air-volume presets accepted by `set_air_volume` and advertised to the
/// automation hub during discovery.
pub const AIR_VOLUME_PRESETS: [&str; 8] = [
    "auto", "night", "pollen", "quiet", "medium", "strong", "omakase", "powerful",
];

/// A point-in-time read of one appliance's sensed and actuated values.
///
/// Created fresh on every fetch, translated into outbound messages, then
/// discarded — never cached across fetches. `enough_water` is the sensor's
/// native polarity; the bridge inverts it when publishing the
/// "empty water tank" state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub power_on: bool,
    /// Current operating preset, one of [`AIR_VOLUME_PRESETS`].
    pub air_volume: String,
    pub humidifier_on: bool,
    pub light_detected: bool,
    pub enough_water: bool,
    /// Room temperature in °C.
    pub temperature: f64,
    /// Relative humidity in %.
    pub humidity: f64,
    /// Cumulative volume of air cleaned, in m³.
    pub total_air_cleaned: u32,
    pub pm25: u8,
    pub odor: u8,
    pub dust: u8,
    pub overall_dirtiness: u8,
}

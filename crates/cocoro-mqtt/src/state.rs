// ── Status → outbound state messages ──
//
// Pure translation: one Status snapshot maps to exactly twelve messages
// with fixed topic suffixes and a fixed order. Polarity conventions:
//
//   light            "ON" when light is detected (pass-through)
//   empty_water_tank "ON" when water is NOT sufficient (inverted — the
//                    entity reports a problem, the sensor reports supply)
//
// Numeric fields are published raw, with no unit conversion.

use cocoro_air::Status;

use crate::topic;

fn on_off(value: bool) -> String {
    let label = if value { "ON" } else { "OFF" };
    label.to_owned()
}

/// Translate one status snapshot into the twelve (topic, payload) pairs
/// published on every refresh.
pub fn state_messages(device_id: &str, status: &Status) -> Vec<(String, String)> {
    vec![
        (topic::state(device_id, "on"), on_off(status.power_on)),
        (topic::state(device_id, "mode"), status.air_volume.clone()),
        (
            topic::state(device_id, "humidifier"),
            on_off(status.humidifier_on),
        ),
        (
            topic::state(device_id, "light"),
            on_off(status.light_detected),
        ),
        (
            topic::state(device_id, "empty_water_tank"),
            on_off(!status.enough_water),
        ),
        (
            topic::state(device_id, "temperature"),
            status.temperature.to_string(),
        ),
        (
            topic::state(device_id, "humidity"),
            status.humidity.to_string(),
        ),
        (
            topic::state(device_id, "air_cleaned"),
            status.total_air_cleaned.to_string(),
        ),
        (topic::state(device_id, "pm25"), status.pm25.to_string()),
        (topic::state(device_id, "odor"), status.odor.to_string()),
        (topic::state(device_id, "dust"), status.dust.to_string()),
        (
            topic::state(device_id, "overall_dirtiness"),
            status.overall_dirtiness.to_string(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_status() -> Status {
        Status {
            power_on: true,
            air_volume: "auto".into(),
            humidifier_on: false,
            light_detected: true,
            enough_water: true,
            temperature: 21.5,
            humidity: 45.0,
            total_air_cleaned: 1200,
            pm25: 8,
            odor: 12,
            dust: 3,
            overall_dirtiness: 10,
        }
    }

    #[test]
    fn produces_exactly_twelve_messages_in_fixed_order() {
        let messages = state_messages("e1", &sample_status());

        let expected: Vec<(String, String)> = [
            ("cocoro/e1/on/state", "ON"),
            ("cocoro/e1/mode/state", "auto"),
            ("cocoro/e1/humidifier/state", "OFF"),
            ("cocoro/e1/light/state", "ON"),
            ("cocoro/e1/empty_water_tank/state", "OFF"),
            ("cocoro/e1/temperature/state", "21.5"),
            ("cocoro/e1/humidity/state", "45"),
            ("cocoro/e1/air_cleaned/state", "1200"),
            ("cocoro/e1/pm25/state", "8"),
            ("cocoro/e1/odor/state", "12"),
            ("cocoro/e1/dust/state", "3"),
            ("cocoro/e1/overall_dirtiness/state", "10"),
        ]
        .into_iter()
        .map(|(t, p)| (t.to_owned(), p.to_owned()))
        .collect();

        assert_eq!(messages, expected);
    }

    #[test]
    fn empty_water_tank_polarity_is_inverted() {
        let mut status = sample_status();
        status.enough_water = false;

        let messages = state_messages("e1", &status);
        let tank = messages
            .iter()
            .find(|(t, _)| t == "cocoro/e1/empty_water_tank/state")
            .map(|(_, p)| p.as_str());

        assert_eq!(tank, Some("ON"));
    }

    #[test]
    fn light_state_passes_through() {
        let mut status = sample_status();
        status.light_detected = false;

        let messages = state_messages("e1", &status);
        let light = messages
            .iter()
            .find(|(t, _)| t == "cocoro/e1/light/state")
            .map(|(_, p)| p.as_str());

        assert_eq!(light, Some("OFF"));
    }
}

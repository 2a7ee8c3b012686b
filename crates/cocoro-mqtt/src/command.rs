// ── Inbound command decoding ──
//
// Topics arrive as `cocoro/<id>/<target>/set`. Decoding is split in two
// stages: `split_topic` pulls the addressing segments out of the topic,
// `request` maps a target and payload onto an exhaustive tagged variant.
// Device resolution sits between the stages, so an unknown device is
// reported as such whatever the target segment carries. The trailing `set`
// segment carries no information and is ignored.

use crate::error::DecodeError;

/// Payload value that switches a boolean control on; anything else
/// switches it off.
const PAYLOAD_ON: &str = "ON";

/// A decoded command against one control surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandRequest {
    SetPower { on: bool },
    SetHumidifier { on: bool },
    /// The preset is passed through verbatim; the cloud API validates it.
    SetMode { preset: String },
}

/// The addressing segments of one inbound topic: which device, which
/// control surface. The target is not validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTopic {
    pub device_id: String,
    pub target: String,
}

/// Split one inbound topic into its addressing segments.
pub fn split_topic(topic: &str) -> Result<CommandTopic, DecodeError> {
    let mut segments = topic.split('/');
    let malformed = || DecodeError::MalformedTopic {
        topic: topic.to_owned(),
    };
    let _namespace = segments.next().ok_or_else(malformed)?;
    let device_id = segments.next().ok_or_else(malformed)?;
    let target = segments.next().ok_or_else(malformed)?;
    if device_id.is_empty() || target.is_empty() {
        return Err(malformed());
    }

    Ok(CommandTopic {
        device_id: device_id.to_owned(),
        target: target.to_owned(),
    })
}

/// Map a resolved target segment and payload onto a typed request.
pub fn request(target: &str, payload: &str, topic: &str) -> Result<CommandRequest, DecodeError> {
    match target {
        "on" => Ok(CommandRequest::SetPower {
            on: payload == PAYLOAD_ON,
        }),
        "humidifier" => Ok(CommandRequest::SetHumidifier {
            on: payload == PAYLOAD_ON,
        }),
        "mode" => Ok(CommandRequest::SetMode {
            preset: payload.to_owned(),
        }),
        _ => Err(DecodeError::UnknownTarget {
            target: target.to_owned(),
            topic: topic.to_owned(),
        }),
    }
}

//! Interface boundary to the Sharp Cocoro Air cloud API.
//!
//! This crate defines the types and traits the bridge programs against:
//!
//! - **[`DeviceInfo`]** / **[`DeviceKind`]** — immutable appliance metadata
//!   as reported by device enumeration.
//! - **[`Status`]** — a point-in-time snapshot of one appliance's sensed and
//!   actuated values, fetched fresh on every poll.
//! - **[`CocoroClient`]** / **[`AirCleaner`]** — the injectable client
//!   traits. A concrete implementation talks HTTP to the cloud service;
//!   tests substitute recording mocks. Implementations are assumed safe for
//!   sequential use only — callers serialize access themselves.
//! - **[`ApiError`]** — the failure taxonomy for every remote operation.

pub mod device;
pub mod error;
pub mod status;

pub use device::{AirCleaner, CocoroClient, DeviceInfo, DeviceKind};
pub use error::ApiError;
pub use status::{AIR_VOLUME_PRESETS, Status};

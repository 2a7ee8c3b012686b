//! Bridge between the Cocoro Air cloud API and an MQTT bus.
//!
//! The bridge mirrors appliance state onto MQTT and translates inbound MQTT
//! commands back into cloud API calls:
//!
//! - **[`Bridge`]** — the coordinator. [`Bridge::connect`] enumerates and
//!   caches the controllable devices; [`Bridge::run`] publishes Home
//!   Assistant discovery descriptors, subscribes to the command topics, then
//!   spawns the two long-running tasks (periodic state publisher, command
//!   dispatcher) and supervises them until one settles.
//! - **[`DeviceRegistry`]** — the startup-loaded, read-only device list both
//!   tasks share.
//! - **[`BusClient`]** — the injectable MQTT seam (subscribe / publish /
//!   receive). The bridge never implements its own transport.
//! - **[`CommandRequest`]** — inbound topics decoded into an exhaustive
//!   tagged variant instead of string fallthrough.
//!
//! Concurrency contract: the two tasks contend only on a single
//! process-wide guard around every remote status fetch, so no two
//! refresh-and-publish operations ever overlap — regardless of which task
//! or which device initiated them. Remote API failures are contained to the
//! single device operation that hit them; bus failures are fatal to the
//! enclosing task.

pub mod bridge;
pub mod bus;
pub mod command;
pub mod config;
pub mod discovery;
pub mod error;
pub mod registry;
pub mod state;
pub mod topic;

// ── Primary re-exports ──────────────────────────────────────────────
pub use bridge::Bridge;
pub use bus::{BusClient, BusError, InboundMessage};
pub use command::{CommandRequest, CommandTopic};
pub use config::BridgeConfig;
pub use error::{BridgeError, DecodeError};
pub use registry::DeviceRegistry;

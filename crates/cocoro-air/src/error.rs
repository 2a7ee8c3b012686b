use thiserror::Error;

/// Failure taxonomy for the Cocoro Air cloud API.
///
/// Every remote operation — enumeration, status fetch, command issuance —
/// fails with one of these. The bridge catches them at the scope of a single
/// device operation; they are never fatal to a running loop.
#[derive(Debug, Error)]
pub enum ApiError {
    // ── Authentication ──────────────────────────────────────────────
    /// Login or token refresh was rejected by the cloud service.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// Network-level failure (connection refused, DNS, timeout).
    #[error("Transport error: {message}")]
    Transport { message: String },

    // ── Cloud API ───────────────────────────────────────────────────
    /// Structured error response from the cloud service.
    #[error("Cocoro API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The appliance itself rejected or failed to execute a command
    /// (powered off at the wall, ECHONET fault, unsupported preset).
    #[error("Device fault: {message}")]
    DeviceFault { message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// Response body did not match the expected shape.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String },
}

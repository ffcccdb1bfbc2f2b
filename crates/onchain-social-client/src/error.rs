//! Error types for the agent and actor.

use thiserror::Error;

/// Failure talking to the replica.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Host URL could not be parsed
    #[error("invalid host {host}: {reason}")]
    InvalidHost { host: String, reason: String },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Replica answered with a non-success status
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Replica is reachable but not serving calls
    #[error("replica at {host} is not healthy: {status}")]
    Unhealthy { host: String, status: String },

    /// Root key could not be decoded
    #[error("invalid root key: {0}")]
    InvalidRootKey(#[from] hex::FromHexError),

    /// Call was rejected by the replica or the canister
    #[error("call rejected (code {code}): {message}")]
    Rejected { code: u32, message: String },

    /// Method is not part of the actor's interface
    #[error("method {method} is not in the interface of {service}")]
    UnknownMethod { method: String, service: String },
}

/// Result type for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;

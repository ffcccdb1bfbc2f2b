//! Protocol messages.
//!
//! Request and reply envelopes exchanged with the replica. Method arguments
//! and replies are opaque JSON; callers decode them into their own types.

use serde::{Deserialize, Serialize};

/// Body of a query or update call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRequest {
    pub method_name: String,
    #[serde(default)]
    pub args: Vec<serde_json::Value>,
}

/// Outcome of a call, as reported by the replica.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CallResponse {
    /// The canister answered.
    Replied { reply: serde_json::Value },
    /// The call was rejected by the replica or the canister.
    Rejected {
        reject_code: u32,
        reject_message: String,
    },
}

/// Replica health as reported by the status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    Starting,
    Waiting,
    #[serde(other)]
    Unknown,
}

/// Response of `GET /api/v2/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplicaStatus {
    pub replica_health_status: HealthStatus,
    /// Replica implementation version, if reported.
    #[serde(default)]
    pub impl_version: Option<String>,
}

/// Response of `GET /api/v2/root_key`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootKey {
    /// Hex-encoded public key of the network's trust root.
    pub root_key: String,
}

//! Interface descriptions.
//!
//! An interface names a service and lists the methods an actor may invoke on
//! it. Calls to methods outside the interface are refused before they reach
//! the network.

use serde::{Deserialize, Serialize};

/// Name of the profile-retrieval method on the social backend.
pub const GET_USER_PROFILE: &str = "getUserProfile";

/// How a method is executed by the replica.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallMode {
    /// Read-only, answered by a single replica.
    Query,
    /// State-changing, goes through consensus.
    Update,
}

/// A single method in an interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSpec {
    pub name: String,
    pub mode: CallMode,
}

impl MethodSpec {
    pub fn query(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mode: CallMode::Query,
        }
    }

    pub fn update(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mode: CallMode::Update,
        }
    }
}

/// Description of a remote service's methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    /// Human-readable service name.
    pub service: String,
    pub methods: Vec<MethodSpec>,
}

impl Interface {
    pub fn new(service: impl Into<String>, methods: Vec<MethodSpec>) -> Self {
        Self {
            service: service.into(),
            methods,
        }
    }

    /// The interface exposed by the social backend canister.
    pub fn social_backend() -> Self {
        Self::new(
            "onchain-social-backend",
            vec![MethodSpec::query(GET_USER_PROFILE)],
        )
    }

    /// Look up a method by name.
    pub fn method(&self, name: &str) -> Option<&MethodSpec> {
        self.methods.iter().find(|m| m.name == name)
    }
}

//! Core types for the onchain-social frontend.
//!
//! This crate holds the wire envelopes, identifiers and records shared
//! between the agent and the views; it performs no I/O.

mod canister;
mod interface;
mod message;
mod profile;

pub use canister::{CanisterId, CanisterIdParseError};
pub use interface::{CallMode, GET_USER_PROFILE, Interface, MethodSpec};
pub use message::{CallRequest, CallResponse, HealthStatus, ReplicaStatus, RootKey};
pub use profile::UserProfile;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Network the frontend is deployed against, as named by `DFX_NETWORK`.
///
/// An unset network is treated as `Ic`: only an explicit `local` triggers
/// the root key bootstrap.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NetworkMode {
    /// Local development replica. Its root key is not pre-provisioned.
    Local,
    /// Main network.
    #[default]
    Ic,
    /// Any other named network.
    Named(String),
}

impl NetworkMode {
    /// Whether the trust root must be fetched from the host.
    pub fn is_local(&self) -> bool {
        matches!(self, NetworkMode::Local)
    }
}

impl FromStr for NetworkMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "local" => Self::Local,
            "ic" => Self::Ic,
            other => Self::Named(other.to_string()),
        })
    }
}

impl fmt::Display for NetworkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Ic => f.write_str("ic"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

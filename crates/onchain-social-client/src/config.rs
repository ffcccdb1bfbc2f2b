//! Client configuration.

use onchain_social_core::{CanisterId, Interface, NetworkMode};

/// Local replica endpoint started by `dfx start`.
pub const DEFAULT_HOST: &str = "http://127.0.0.1:4943";

/// Id the local replica assigns to the first deployed canister.
pub const DEFAULT_BACKEND_CANISTER: &str = "bkyz2-fmaaa-aaaaa-qaaaq-cai";

const DEFAULT_BACKEND_CANISTER_ID: CanisterId = CanisterId::from_static(DEFAULT_BACKEND_CANISTER);

/// Everything needed to build the backend actor.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub host: String,
    pub network: NetworkMode,
    pub canister_id: CanisterId,
    pub interface: Interface,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            network: NetworkMode::default(),
            canister_id: DEFAULT_BACKEND_CANISTER_ID,
            interface: Interface::social_backend(),
        }
    }
}

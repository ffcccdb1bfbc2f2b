//! Client-side access to the onchain-social backend canister.
//!
//! [`initialize`] connects an [`Agent`] to the replica host, bootstraps the
//! trust root on local networks, and returns the [`Actor`] the views call.

mod actor;
mod agent;
mod config;
mod error;

pub use actor::Actor;
pub use agent::{Agent, TrustState};
pub use config::{ClientConfig, DEFAULT_BACKEND_CANISTER, DEFAULT_HOST};
pub use error::{AgentError, Result};

use std::sync::Arc;

/// Build the backend actor described by `config`.
///
/// Connects to the host and, on the local network only, fetches the root
/// key before the actor is handed out. Errors are not retried.
pub async fn initialize(config: &ClientConfig) -> Result<Actor> {
    let mut agent = Agent::connect(&config.host).await?;

    if config.network.is_local() {
        agent.fetch_root_key().await?;
    }

    tracing::info!(
        network = %config.network,
        canister = %config.canister_id,
        service = %config.interface.service,
        "Backend actor ready"
    );

    Ok(Actor::new(
        Arc::new(agent),
        config.canister_id.clone(),
        config.interface.clone(),
    ))
}

//! HTTP agent for a replica host.

use crate::error::{AgentError, Result};
use onchain_social_core::{
    CallMode, CallRequest, CallResponse, CanisterId, HealthStatus, ReplicaStatus, RootKey,
};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

/// Where the agent's trust root comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrustState {
    /// The network's root key is pre-provisioned (production).
    Pinned,
    /// The root key was fetched from the host at startup.
    Fetched(Vec<u8>),
}

/// A connection to one replica host.
///
/// Built once at startup, then shared read-only between actors.
pub struct Agent {
    host: String,
    client: Client,
    trust: TrustState,
}

impl Agent {
    /// Connect to `host` and check that the replica is serving.
    ///
    /// Performs one round-trip to the status endpoint.
    pub async fn connect(host: &str) -> Result<Self> {
        Url::parse(host).map_err(|e| AgentError::InvalidHost {
            host: host.to_string(),
            reason: e.to_string(),
        })?;

        let agent = Self {
            host: host.trim_end_matches('/').to_string(),
            client: Client::builder().build()?,
            trust: TrustState::Pinned,
        };

        let status = agent.status().await?;
        if status.replica_health_status != HealthStatus::Healthy {
            return Err(AgentError::Unhealthy {
                host: agent.host,
                status: format!("{:?}", status.replica_health_status),
            });
        }

        tracing::info!(
            host = %agent.host,
            version = status.impl_version.as_deref().unwrap_or("unknown"),
            "Connected to replica"
        );
        Ok(agent)
    }

    /// Fetch the replica's root key and trust it from now on.
    ///
    /// Only for local and test networks; production deployments rely on a
    /// pinned root key.
    pub async fn fetch_root_key(&mut self) -> Result<()> {
        let url = format!("{}/api/v2/root_key", self.host);
        let response = self.client.get(&url).send().await?;
        let RootKey { root_key } = handle_response(response).await?;
        let key = hex::decode(root_key.trim())?;

        tracing::debug!(host = %self.host, len = key.len(), "Installed fetched root key");
        self.trust = TrustState::Fetched(key);
        Ok(())
    }

    /// Current replica status.
    pub async fn status(&self) -> Result<ReplicaStatus> {
        let url = format!("{}/api/v2/status", self.host);
        let response = self.client.get(&url).send().await?;
        handle_response(response).await
    }

    /// Send a call to a canister and return the raw reply.
    pub async fn call(
        &self,
        canister_id: &CanisterId,
        mode: CallMode,
        request: &CallRequest,
    ) -> Result<serde_json::Value> {
        let endpoint = match mode {
            CallMode::Query => "query",
            CallMode::Update => "call",
        };
        let url = format!("{}/api/v2/canister/{}/{}", self.host, canister_id, endpoint);

        tracing::debug!(canister = %canister_id, method = %request.method_name, endpoint, "Calling canister");

        let response = self.client.post(&url).json(request).send().await?;
        match handle_response(response).await? {
            CallResponse::Replied { reply } => Ok(reply),
            CallResponse::Rejected {
                reject_code,
                reject_message,
            } => Err(AgentError::Rejected {
                code: reject_code,
                message: reject_message,
            }),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn trust(&self) -> &TrustState {
        &self.trust
    }
}

async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(AgentError::Server {
            status: status.as_u16(),
            message,
        });
    }

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

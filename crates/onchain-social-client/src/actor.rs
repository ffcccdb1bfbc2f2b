//! Typed proxy for one canister.

use crate::agent::Agent;
use crate::error::{AgentError, Result};
use onchain_social_core::{CallRequest, CanisterId, GET_USER_PROFILE, Interface, UserProfile};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Handle for invoking methods on a canister through a shared [`Agent`].
#[derive(Clone)]
pub struct Actor {
    agent: Arc<Agent>,
    canister_id: CanisterId,
    interface: Arc<Interface>,
}

impl Actor {
    pub fn new(agent: Arc<Agent>, canister_id: CanisterId, interface: Interface) -> Self {
        Self {
            agent,
            canister_id,
            interface: Arc::new(interface),
        }
    }

    /// Invoke `method` and decode its reply.
    ///
    /// Methods missing from the interface are refused without a round-trip.
    pub async fn call<R: DeserializeOwned>(
        &self,
        method: &str,
        args: Vec<serde_json::Value>,
    ) -> Result<R> {
        let spec = self
            .interface
            .method(method)
            .ok_or_else(|| AgentError::UnknownMethod {
                method: method.to_string(),
                service: self.interface.service.clone(),
            })?;

        let request = CallRequest {
            method_name: spec.name.clone(),
            args,
        };
        let reply = self.agent.call(&self.canister_id, spec.mode, &request).await?;
        Ok(serde_json::from_value(reply)?)
    }

    /// Retrieve the calling user's profile.
    pub async fn get_user_profile(&self) -> Result<UserProfile> {
        self.call(GET_USER_PROFILE, Vec::new()).await
    }

    pub fn agent(&self) -> &Arc<Agent> {
        &self.agent
    }

    pub fn canister_id(&self) -> &CanisterId {
        &self.canister_id
    }

    pub fn interface(&self) -> &Interface {
        &self.interface
    }
}

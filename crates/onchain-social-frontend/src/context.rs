//! Application-wide handles.

use onchain_social_client::{Actor, ClientConfig, initialize};
use std::sync::Arc;

use crate::view::ProfileView;

/// Owns the backend actor for the lifetime of the program and hands it to
/// views.
#[derive(Clone)]
pub struct AppContext {
    backend: Arc<Actor>,
}

impl AppContext {
    /// Initialize the backend actor. Fails if the host cannot be reached or
    /// the trust root cannot be fetched.
    pub async fn initialize(config: &ClientConfig) -> onchain_social_client::Result<Self> {
        let actor = initialize(config).await?;
        Ok(Self::from_actor(actor))
    }

    pub fn from_actor(actor: Actor) -> Self {
        Self {
            backend: Arc::new(actor),
        }
    }

    pub fn backend(&self) -> &Arc<Actor> {
        &self.backend
    }

    /// A fresh profile view backed by this context's actor.
    pub fn profile_view(&self) -> ProfileView<Actor> {
        ProfileView::new(self.backend.clone())
    }
}

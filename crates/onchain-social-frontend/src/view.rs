//! The profile view.
//!
//! A view starts in [`ViewState::Loading`]. Each [`ProfileView::mount`]
//! schedules one `getUserProfile` call; its outcome is written into the
//! view's state channel, which surfaces watch to re-render.

use onchain_social_client::{Actor, AgentError};
use onchain_social_core::UserProfile;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::render;

/// Source of the profile shown by the view.
pub trait ProfileService: Send + Sync + 'static {
    fn get_user_profile(&self) -> impl Future<Output = Result<UserProfile, AgentError>> + Send;
}

impl ProfileService for Actor {
    fn get_user_profile(&self) -> impl Future<Output = Result<UserProfile, AgentError>> + Send {
        Actor::get_user_profile(self)
    }
}

/// What the view currently knows about the profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Loaded(UserProfile),
    /// The fetch failed before any profile arrived. Rendered as loading.
    Failed(String),
}

impl ViewState {
    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            ViewState::Loaded(profile) => Some(profile),
            _ => None,
        }
    }
}

/// Displays the current user's profile.
pub struct ProfileView<S> {
    service: Arc<S>,
    state: Arc<watch::Sender<ViewState>>,
    /// Mounts not yet dropped.
    live: Arc<AtomicUsize>,
}

impl<S: ProfileService> ProfileView<S> {
    pub fn new(service: Arc<S>) -> Self {
        let (state, _) = watch::channel(ViewState::Loading);
        Self {
            service,
            state: Arc::new(state),
            live: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Schedule a profile fetch for this mount.
    ///
    /// Must be called from within a tokio runtime. The fetch runs once the
    /// caller yields, and only while the returned [`Mount`] is held.
    ///
    /// A mount made while no other mount is live starts from
    /// [`ViewState::Loading`]. Concurrent mounts are independent; whichever
    /// resolves last decides the displayed profile.
    #[must_use = "dropping the mount aborts the profile fetch"]
    pub fn mount(&self) -> Mount {
        if self.live.fetch_add(1, Ordering::SeqCst) == 0 {
            self.state.send_if_modified(|current| {
                if *current == ViewState::Loading {
                    return false;
                }
                *current = ViewState::Loading;
                true
            });
        }

        let service = self.service.clone();
        let state = self.state.clone();

        let task = tokio::spawn(async move {
            match service.get_user_profile().await {
                Ok(profile) => {
                    tracing::debug!(username = %profile.username, "Loaded user profile");
                    state.send_replace(ViewState::Loaded(profile));
                }
                Err(err) => {
                    tracing::error!(error = %err, "Failed to load user profile");
                    state.send_if_modified(|current| {
                        if *current != ViewState::Loading {
                            return false;
                        }
                        *current = ViewState::Failed(err.to_string());
                        true
                    });
                }
            }
        });

        Mount {
            task,
            live: self.live.clone(),
        }
    }

    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Lines for the current state.
    pub fn render(&self) -> Vec<String> {
        render::render(&self.state.borrow())
    }
}

/// A live mount of a [`ProfileView`].
///
/// Dropping it aborts the pending fetch; a result arriving afterwards is
/// never applied.
#[must_use = "dropping the mount aborts the profile fetch"]
pub struct Mount {
    task: JoinHandle<()>,
    live: Arc<AtomicUsize>,
}

impl Mount {
    /// Whether the fetch has completed or been aborted.
    pub fn is_settled(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        self.task.abort();
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

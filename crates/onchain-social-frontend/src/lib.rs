//! Profile page for the onchain-social backend.
//!
//! [`AppContext`] owns the backend actor; [`ProfileView`] fetches the
//! current user's profile on mount and renders it once it arrives.

mod context;
pub mod render;
mod view;

pub use context::AppContext;
pub use render::LOADING_PLACEHOLDER;
pub use view::{Mount, ProfileService, ProfileView, ViewState};

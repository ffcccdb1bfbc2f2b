//! Profile records returned by the social backend.

use serde::{Deserialize, Serialize};

/// A user's profile.
///
/// Decoding fails unless all three fields are present, so a profile is
/// never partially populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub bio: String,
}

//! Canister identifiers.
//!
//! Textual form: dash-separated groups of lowercase base32 (`a-z`, `2-7`),
//! each group at most five characters, e.g. `bkyz2-fmaaa-aaaaa-qaaaq-cai`.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

const GROUP_LEN: usize = 5;

/// Identifier of a remote service (canister) in its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanisterId(Cow<'static, str>);

impl CanisterId {
    /// Build an id from a literal. Evaluated in a `const` item, a malformed
    /// literal fails compilation.
    pub const fn from_static(s: &'static str) -> Self {
        assert!(is_well_formed(s), "malformed canister id");
        Self(Cow::Borrowed(s))
    }

    /// The textual form, as used in request paths.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanisterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CanisterId {
    type Err = CanisterIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(CanisterIdParseError::Empty);
        }

        for group in s.split('-') {
            let valid = !group.is_empty()
                && group.len() <= GROUP_LEN
                && group.bytes().all(is_valid_char);
            if !valid {
                return Err(CanisterIdParseError::InvalidGroup {
                    id: s.to_string(),
                    group: group.to_string(),
                });
            }
        }

        Ok(Self(Cow::Owned(s.to_string())))
    }
}

impl TryFrom<String> for CanisterId {
    type Error = CanisterIdParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CanisterId> for String {
    fn from(id: CanisterId) -> Self {
        id.0.into_owned()
    }
}

const fn is_valid_char(b: u8) -> bool {
    b.is_ascii_lowercase() || (b >= b'2' && b <= b'7')
}

const fn is_well_formed(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut group = 0;
    while i < bytes.len() {
        if bytes[i] == b'-' {
            if group == 0 {
                return false;
            }
            group = 0;
        } else if is_valid_char(bytes[i]) && group < GROUP_LEN {
            group += 1;
        } else {
            return false;
        }
        i += 1;
    }
    group > 0
}

/// Error parsing a canister id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanisterIdParseError {
    #[error("canister id cannot be empty")]
    Empty,
    #[error("invalid group {group:?} in canister id {id:?}")]
    InvalidGroup { id: String, group: String },
}

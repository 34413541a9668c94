//! Credential handed back after a successful authentication

use serde::{Deserialize, Serialize};

const PLACEHOLDER_TOKEN: &str = "PLACEHOLDER_SESSION_TOKEN";

/// Opaque bearer credential
///
/// Currently a fixed placeholder carrying no claims; callers must not treat
/// it as proof of a specific identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialToken(String);

impl CredentialToken {
    pub fn placeholder() -> Self {
        Self(PLACEHOLDER_TOKEN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CredentialToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

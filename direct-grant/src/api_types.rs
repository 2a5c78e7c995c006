use serde::{Deserialize, Serialize};

/// Successful response of the token endpoint.
///
/// Keycloak's field names are kept on the wire, including the `expired_in`
/// spelling. Everything but `access_token` is optional and falls back to its
/// zero value.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct GrantResponse {
    pub access_token: String,

    #[serde(default, rename = "expired_in", alias = "expires_in")]
    pub expires_in: u64,

    #[serde(default, rename = "refresh_expired_in", alias = "refresh_expires_in")]
    pub refresh_expires_in: u64,

    #[serde(default)]
    pub refresh_token: String,

    #[serde(default)]
    pub token_type: String,

    #[serde(default, rename = "not-before-policy")]
    pub not_before_policy: i64,

    #[serde(default)]
    pub session_state: String,

    #[serde(default)]
    pub scope: String,
}

impl GrantResponse {
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Empty if the provider didn't issue one.
    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

/// Standard OAuth2 error body, see RFC 6749 section 5.2.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OAuthError {
    pub error: String,
    pub error_description: Option<String>,
}

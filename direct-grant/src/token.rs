use std::{collections::HashMap, time::Duration};

use reqwest::{StatusCode, blocking::Client};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::{api_types::GrantResponse, error::GrantError};

const TOKEN_PATH: &str = "/protocol/openid-connect/token";

/// Issuer URL of a realm, `{endpoint}/auth/realms/{realm}`.
pub fn realm_url(endpoint: &str, realm: &str) -> String {
    format!("{endpoint}/auth/realms/{realm}")
}

/// Token endpoint below a realm's issuer URL.
pub fn token_url(realm_url: &str) -> String {
    format!("{realm_url}{TOKEN_PATH}")
}

/// Everything needed for one password grant against a public client.
#[derive(Debug)]
pub struct GrantRequest {
    pub endpoint: String,
    pub realm: String,
    pub client_id: String,
    pub username: String,
    pub password: SecretString,
    /// Space separated, sent as is.
    pub scope: String,
    /// Deadline for the whole exchange. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl GrantRequest {
    pub fn new(
        endpoint: impl Into<String>,
        realm: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            realm: realm.into(),
            client_id: client_id.into(),
            username: String::new(),
            password: SecretString::from(String::new()),
            scope: String::new(),
            timeout: None,
        }
    }

    pub fn with_credentials(self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.with_username(username)
            .with_password(SecretString::from(password.into()))
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_password(mut self, password: SecretString) -> Self {
        self.password = password;
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn realm_url(&self) -> String {
        realm_url(&self.endpoint, &self.realm)
    }

    pub fn token_url(&self) -> String {
        token_url(&self.realm_url())
    }

    fn validate(&self) -> Result<(), GrantError> {
        if self.endpoint.is_empty() {
            return Err(GrantError::InvalidRequest("endpoint"));
        }
        if self.realm.is_empty() {
            return Err(GrantError::InvalidRequest("realm"));
        }
        if self.client_id.is_empty() {
            return Err(GrantError::InvalidRequest("client id"));
        }
        Ok(())
    }

    fn form_data(&self) -> HashMap<&'static str, &str> {
        let mut form_data = HashMap::new();
        form_data.insert("grant_type", "password");
        form_data.insert("username", self.username.as_str());
        form_data.insert("password", self.password.expose_secret());
        form_data.insert("client_id", self.client_id.as_str());
        form_data.insert("scope", self.scope.as_str());
        form_data
    }
}

/// Perform a single direct grant exchange.
///
/// Only public clients are supported, no client secret is sent. The call is
/// never retried: a transport failure, an expired deadline or any status other
/// than `200 OK` ends it.
///
/// # Errors
///
/// Returns [`GrantError::ProviderRejected`] with the untouched response body
/// for non-200 answers, [`GrantError::MalformedResponse`] if a 200 body isn't a
/// token response, and [`GrantError::Transport`] or [`GrantError::Timeout`]
/// when no response could be read.
pub fn request_token(request: &GrantRequest) -> Result<GrantResponse, GrantError> {
    request.validate()?;

    let token_url = request.token_url();
    debug!(
        %token_url,
        client_id = %request.client_id,
        username = %request.username,
        "Sending direct grant request"
    );

    // The blocking client applies a 30s timeout unless told otherwise.
    let client = Client::builder()
        .timeout(request.timeout)
        .build()
        .map_err(GrantError::Transport)?;

    let res = client
        .post(&token_url)
        .form(&request.form_data())
        .send()
        .map_err(GrantError::from_reqwest)?;

    let status = res.status();
    let body = res.bytes().map_err(GrantError::from_reqwest)?;
    debug!(%status, len = body.len(), "Token endpoint responded");

    if status != StatusCode::OK {
        return Err(GrantError::rejected(status, &body));
    }

    Ok(serde_json::from_slice::<GrantResponse>(&body)?)
}

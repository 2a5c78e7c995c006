use std::{fs, io, path::Path, time::Duration};

use direct_grant::GrantRequest;
use secrecy::SecretString;
use serde::Deserialize;

use crate::args::Args;

#[derive(Deserialize)]
#[serde(default)]
pub struct Config {
    pub keycloak_endpoint: String,
    pub keycloak_realm: String,
    pub client_id: String,
    pub username: String,
    pub password: SecretString,
    pub scope: String,
    /// Seconds
    pub timeout: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keycloak_endpoint: "http://localhost:6060".to_string(),
            keycloak_realm: "demo".to_string(),
            client_id: "api".to_string(),
            username: String::default(),
            password: SecretString::from(String::new()),
            scope: "profile email".to_string(),
            timeout: None,
        }
    }
}

impl Config {
    /// Overlay the values given on the command line.
    pub fn merge(self, args: Args) -> Self {
        Self {
            keycloak_endpoint: args.keycloak_endpoint.unwrap_or(self.keycloak_endpoint),
            keycloak_realm: args.keycloak_realm.unwrap_or(self.keycloak_realm),
            client_id: args.client_id.unwrap_or(self.client_id),
            username: args.username.unwrap_or(self.username),
            password: args.password.map(SecretString::from).unwrap_or(self.password),
            scope: args.scope.unwrap_or(self.scope),
            timeout: args.timeout.or(self.timeout),
        }
    }

    pub fn into_request(self) -> GrantRequest {
        GrantRequest::new(self.keycloak_endpoint, self.keycloak_realm, self.client_id)
            .with_username(self.username)
            .with_password(self.password)
            .with_scope(self.scope)
            .with_timeout(self.timeout.map(Duration::from_secs))
    }
}

pub fn read(path: &Path) -> Result<Config, io::Error> {
    parse(&fs::read_to_string(path)?)
}

fn parse(data: &str) -> Result<Config, io::Error> {
    toml::from_str(data).map_err(io::Error::other)
}

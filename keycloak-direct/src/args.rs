use std::path::PathBuf;

/// Fetch a token from Keycloak with the resource owner password credentials
/// grant. Only public clients are supported.
#[derive(clap::Parser)]
#[command(version, about)]
pub struct Args {
    /// The Keycloak base endpoint [default: http://localhost:6060]
    #[arg(long)]
    pub keycloak_endpoint: Option<String>,

    /// The realm to use [default: demo]
    #[arg(long)]
    pub keycloak_realm: Option<String>,

    /// The client ID for this client [default: api]
    #[arg(long)]
    pub client_id: Option<String>,

    /// The username to sign in with
    #[arg(long)]
    pub username: Option<String>,

    /// The password corresponding to the username
    #[arg(long)]
    pub password: Option<String>,

    /// The requested scopes, space separated [default: "profile email"]
    #[arg(long)]
    pub scope: Option<String>,

    /// Abort the request after this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Read settings from a TOML file, flags take precedence
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the access token only
    #[arg(long, conflicts_with = "refresh_token")]
    pub access_token: bool,

    /// Print the refresh token only
    #[arg(long)]
    pub refresh_token: bool,
}

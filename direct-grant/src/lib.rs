//! Obtain Keycloak tokens with the OAuth2 resource owner password credentials
//! ("direct grant") flow.
//!
//! ```no_run
//! use direct_grant::{GrantRequest, request_token};
//!
//! let request = GrantRequest::new("http://localhost:6060", "demo", "api")
//!     .with_credentials("alice", "secret")
//!     .with_scope("profile email");
//! let response = request_token(&request)?;
//! println!("{}", response.access_token);
//! # Ok::<(), direct_grant::GrantError>(())
//! ```

mod api_types;
mod error;
mod token;

pub use api_types::{GrantResponse, OAuthError};
pub use error::GrantError;
pub use token::{GrantRequest, realm_url, request_token, token_url};

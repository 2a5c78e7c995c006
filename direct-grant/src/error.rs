use std::borrow::Cow;

use reqwest::StatusCode;
use thiserror::Error;

use crate::api_types::OAuthError;

/// Failure of a single direct grant exchange.
///
/// Credentials are never part of the rendered message. The only exception is
/// [`GrantError::ProviderRejected`], which carries the provider's body verbatim
/// and may therefore contain whatever the provider chose to echo back.
#[derive(Debug, Error)]
pub enum GrantError {
    /// A required request field was empty.
    #[error("invalid grant request: {0} must not be empty")]
    InvalidRequest(&'static str),

    /// The request could not be sent or no complete response was received.
    #[error("failed to issue http request")]
    Transport(#[source] reqwest::Error),

    /// The configured deadline expired before the exchange completed.
    #[error("token request timed out")]
    Timeout(#[source] reqwest::Error),

    /// The provider answered with anything other than `200 OK`.
    ///
    /// `body` holds the response bytes untouched. `error` is filled in when
    /// that body is a standard OAuth2 error document.
    #[error("failed to retrieve token: {}", String::from_utf8_lossy(.body))]
    ProviderRejected {
        status: StatusCode,
        body: Vec<u8>,
        error: Option<OAuthError>,
    },

    /// A `200 OK` body could not be decoded into a token response.
    #[error("failed to parse response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl GrantError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GrantError::Timeout(err)
        } else {
            GrantError::Transport(err)
        }
    }

    pub(crate) fn rejected(status: StatusCode, body: &[u8]) -> Self {
        GrantError::ProviderRejected {
            status,
            body: body.to_vec(),
            error: serde_json::from_slice(body).ok(),
        }
    }

    /// Rejection body as text, invalid UTF-8 replaced.
    pub fn body_text(&self) -> Option<Cow<'_, str>> {
        match self {
            GrantError::ProviderRejected { body, .. } => Some(String::from_utf8_lossy(body)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_renders() {
        let e = GrantError::InvalidRequest("realm");
        assert_eq!(e.to_string(), "invalid grant request: realm must not be empty");
    }

    #[test]
    fn rejection_keeps_body_verbatim() {
        let body = br#"{"error":"invalid_grant","error_description":"Invalid user credentials"}"#;
        let e = GrantError::rejected(StatusCode::UNAUTHORIZED, body);

        assert_eq!(
            e.to_string(),
            format!("failed to retrieve token: {}", String::from_utf8_lossy(body))
        );
        let GrantError::ProviderRejected {
            status,
            body: raw,
            error,
        } = e
        else {
            panic!("expected ProviderRejected");
        };
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(raw, body.to_vec());
        let error = error.unwrap();
        assert_eq!(error.error, "invalid_grant");
        assert_eq!(
            error.error_description.as_deref(),
            Some("Invalid user credentials")
        );
    }

    #[test]
    fn rejection_with_opaque_body() {
        let e = GrantError::rejected(StatusCode::BAD_GATEWAY, b"<html>Bad Gateway</html>");
        assert_eq!(e.body_text().as_deref(), Some("<html>Bad Gateway</html>"));
        let GrantError::ProviderRejected { error, .. } = e else {
            panic!("expected ProviderRejected");
        };
        assert!(error.is_none());
    }

    #[test]
    fn non_utf8_rejection_bytes_are_untouched() {
        let e = GrantError::rejected(StatusCode::BAD_REQUEST, &[0x66, 0xe9, 0x6f]);

        assert_eq!(e.body_text().as_deref(), Some("f\u{fffd}o"));
        let GrantError::ProviderRejected { body, .. } = e else {
            panic!("expected ProviderRejected");
        };
        assert_eq!(body, vec![0x66, 0xe9, 0x6f]);
    }

    #[test]
    fn body_text_only_for_rejections() {
        assert!(GrantError::InvalidRequest("realm").body_text().is_none());
    }

    #[test]
    fn malformed_response_renders() {
        let parse = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e = GrantError::from(parse);
        assert!(e.to_string().starts_with("failed to parse response: "));
    }
}

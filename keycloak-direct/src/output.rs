use direct_grant::GrantResponse;

/// What gets printed for a successful grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    AccessToken,
    RefreshToken,
    Full,
}

impl Output {
    pub fn from_flags(access_token: bool, refresh_token: bool) -> Self {
        if access_token {
            Output::AccessToken
        } else if refresh_token {
            Output::RefreshToken
        } else {
            Output::Full
        }
    }

    pub fn render(self, res: &GrantResponse) -> Result<String, serde_json::Error> {
        match self {
            Output::AccessToken => Ok(res.access_token().to_owned()),
            Output::RefreshToken => Ok(res.refresh_token().to_owned()),
            Output::Full => serde_json::to_string_pretty(res),
        }
    }
}

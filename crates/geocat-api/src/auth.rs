//! Session boundary: the backend only answers "is this email's session
//! still valid" -- there is no credential material on this side.

use serde::{Deserialize, Serialize};

use crate::client::AdminClient;
use crate::error::Error;

/// The logged-in user's session payload, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
}

/// Response of `GET /api/auth/check-session`.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionCheck {
    pub valid: bool,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

#[derive(Serialize)]
struct LogoutBody<'a> {
    email: &'a str,
}

impl AdminClient {
    /// Ask the backend whether the session for `email` is still valid.
    pub async fn check_session(&self, email: &str) -> Result<SessionCheck, Error> {
        let mut url = self.api_url("auth/check-session")?;
        url.query_pairs_mut().append_pair("email", email);
        self.get(url).await
    }

    /// Invalidate the backend session for `email`.
    pub async fn logout(&self, email: &str) -> Result<(), Error> {
        self.post_unit(self.api_url("auth/logout")?, &LogoutBody { email })
            .await
    }
}

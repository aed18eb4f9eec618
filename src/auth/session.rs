use crate::auth::token_response::TokenResponse;
use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// An authenticated session with the Graph API. Every command receives one explicitly.
#[derive(Clone)]
pub struct Session {
    access_token: String,
    token_type: String,
    expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(access_token: String, token_type: String, expires_at: DateTime<Utc>) -> Self {
        Session {
            access_token,
            token_type,
            expires_at,
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }

    /// Value for the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

impl From<TokenResponse> for Session {
    fn from(response: TokenResponse) -> Self {
        Session::new(
            response.access_token,
            response.token_type,
            Utc::now() + Duration::seconds(response.expires_in),
        )
    }
}

// Keeps the token out of logs and panic messages
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_does_not_contain_the_token() {
        let session = Session::new("secret-token".to_string(), "Bearer".to_string(), Utc::now());

        assert!(!format!("{:?}", session).contains("secret-token"));
    }

    #[test]
    fn from_token_response_computes_the_expiry() {
        let session = Session::from(TokenResponse {
            access_token: "token".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 3600,
        });

        assert!(!session.is_expired());
        assert_eq!(session.authorization(), "Bearer token");
    }
}

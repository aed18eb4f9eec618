use crate::auth::authenticator::{AuthError, Authenticator, read_response};
use crate::auth::session::Session;
use crate::auth::token_response::TokenResponse;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, instrument};

const GRAPH_DEFAULT_SCOPE: &str = "https://graph.microsoft.com/.default";

/// OAuth2 client credentials grant for unattended use.
pub struct ClientCredentials {
    token_url: String,
    client_id: String,
    client_secret: String,
}

impl ClientCredentials {
    pub fn new(authority_url: &str, tenant_id: &str, client_id: &str, client_secret: &str) -> Self {
        ClientCredentials {
            token_url: format!("{}/{}/oauth2/v2.0/token", authority_url, tenant_id),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
        }
    }
}

#[async_trait]
impl Authenticator for ClientCredentials {
    #[instrument(skip_all, fields(client_id = self.client_id))]
    async fn authenticate(&self, http: &Client) -> Result<Session, AuthError> {
        info!("🔑 Requesting an app-only token...");

        let response = http
            .post(&self.token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("scope", GRAPH_DEFAULT_SCOPE),
            ])
            .send()
            .await?;

        let token = read_response::<TokenResponse>(response).await?;
        info!("🔑 Requesting an app-only token... OK");

        Ok(Session::from(token))
    }
}

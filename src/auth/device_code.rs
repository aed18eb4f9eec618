use crate::auth::authenticator::{AuthError, Authenticator, read_response};
use crate::auth::session::Session;
use crate::auth::token_response::TokenResponse;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tokio::time::{Instant, sleep};
use tracing::{debug, info, instrument};

const DEVICE_CODE_GRANT: &str = "urn:ietf:params:oauth:grant-type:device_code";
const SLOW_DOWN_STEP: Duration = Duration::from_secs(5);

// API: https://learn.microsoft.com/entra/identity-platform/v2-oauth2-device-code#device-authorization-response
#[derive(Debug, Deserialize)]
struct DeviceCodeResponse {
    device_code: String,
    user_code: String,
    verification_uri: String,
    expires_in: u64,
    #[serde(default = "default_interval")]
    interval: u64,
    message: Option<String>,
}

fn default_interval() -> u64 {
    5
}

/// Interactive delegated sign-in (RFC 8628) for administrators without an app secret.
pub struct DeviceCodeFlow {
    device_code_url: String,
    token_url: String,
    client_id: String,
    scopes: String,
}

impl DeviceCodeFlow {
    pub fn new(authority_url: &str, tenant_id: &str, client_id: &str, scopes: &str) -> Self {
        DeviceCodeFlow {
            device_code_url: format!("{}/{}/oauth2/v2.0/devicecode", authority_url, tenant_id),
            token_url: format!("{}/{}/oauth2/v2.0/token", authority_url, tenant_id),
            client_id: client_id.to_string(),
            scopes: scopes.to_string(),
        }
    }
}

#[async_trait]
impl Authenticator for DeviceCodeFlow {
    #[instrument(skip_all, fields(client_id = self.client_id))]
    async fn authenticate(&self, http: &Client) -> Result<Session, AuthError> {
        let response = http
            .post(&self.device_code_url)
            .form(&[("client_id", self.client_id.as_str()), ("scope", self.scopes.as_str())])
            .send()
            .await?;
        let device_code = read_response::<DeviceCodeResponse>(response).await?;

        // The user has to act on this, so it bypasses the log level
        match &device_code.message {
            Some(message) => eprintln!("{}", message),
            None => eprintln!("To sign in, open {} and enter the code {}", device_code.verification_uri, device_code.user_code),
        }

        let deadline = Instant::now() + Duration::from_secs(device_code.expires_in);
        let mut interval = Duration::from_secs(device_code.interval);

        loop {
            sleep(interval).await;
            if Instant::now() >= deadline {
                return Err(AuthError::DeviceCodeExpired);
            }

            let response = http
                .post(&self.token_url)
                .form(&[
                    ("grant_type", DEVICE_CODE_GRANT),
                    ("client_id", self.client_id.as_str()),
                    ("device_code", device_code.device_code.as_str()),
                ])
                .send()
                .await?;

            match read_response::<TokenResponse>(response).await {
                Ok(token) => {
                    info!("🔑 Signed in interactively");
                    return Ok(Session::from(token));
                }
                Err(AuthError::Rejected { error, .. }) if error == "authorization_pending" => {
                    debug!("Waiting for the user to complete sign-in...");
                }
                Err(AuthError::Rejected { error, .. }) if error == "slow_down" => {
                    interval += SLOW_DOWN_STEP;
                    debug!("Slowing down device code polling to {:?}", interval);
                }
                Err(AuthError::Rejected { error, .. }) if error == "expired_token" => return Err(AuthError::DeviceCodeExpired),
                Err(e) => return Err(e),
            }
        }
    }
}

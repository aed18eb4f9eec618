use crate::app_config::Auth;
use crate::auth::client_credentials::ClientCredentials;
use crate::auth::device_code::DeviceCodeFlow;
use crate::auth::session::Session;
use crate::auth::token_response::TokenErrorResponse;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Tenant used for interactive sign-in when none is configured.
const MULTI_TENANT: &str = "organizations";

#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, http: &Client) -> Result<Session, AuthError>;
}

/// Picks the unattended client credentials grant when a secret is available, the device code flow otherwise.
pub fn authenticator_for(config: &Auth, interactive: bool) -> Result<Box<dyn Authenticator>, AuthError> {
    let client_id = config.client_id().ok_or(AuthError::MissingSetting("app id"))?;

    match config.client_secret() {
        Some(secret) if !interactive => {
            let tenant_id = config.tenant_id().ok_or(AuthError::MissingSetting("tenant id"))?;
            Ok(Box::new(ClientCredentials::new(config.authority_url(), tenant_id, client_id, secret)))
        }
        _ => {
            let tenant_id = config.tenant_id().unwrap_or(MULTI_TENANT);
            Ok(Box::new(DeviceCodeFlow::new(config.authority_url(), tenant_id, client_id, config.scopes())))
        }
    }
}

/// Reads a successful identity platform response, or translates its OAuth error body.
pub(super) async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, AuthError> {
    if response.status().is_success() {
        return Ok(response.json::<T>().await?);
    }

    let status = response.status();
    let body = response.text().await?;
    Err(match serde_json::from_str::<TokenErrorResponse>(&body) {
        Ok(error) => AuthError::Rejected {
            error: error.error,
            description: error.error_description,
        },
        Err(_) => AuthError::Rejected {
            error: status.to_string(),
            description: Some(body),
        },
    })
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("missing {0}, set it in the configuration or on the command line")]
    MissingSetting(&'static str),
    #[error("sign-in rejected ({error}): {}", .description.as_deref().unwrap_or("no description"))]
    Rejected { error: String, description: Option<String> },
    #[error("the device code expired before sign-in completed")]
    DeviceCodeExpired,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use mockito::{Matcher, Server};
    use test_log::test;

    #[test(tokio::test)]
    async fn a_configured_secret_signs_in_with_client_credentials() -> Result<(), AuthError> {
        let mut server = Server::new_async().await;
        let token_mock = server
            .mock("POST", "/tenant/oauth2/v2.0/token")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("grant_type".into(), "client_credentials".into()),
                Matcher::UrlEncoded("client_id".into(), "client".into()),
                Matcher::UrlEncoded("client_secret".into(), "secret".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"token_type":"Bearer","expires_in":3599,"access_token":"app-only"}"#)
            .expect(1)
            .create_async()
            .await;

        let config = AppConfigBuilder::new().authority_url(server.url()).build();
        let session = authenticator_for(config.auth(), false)?.authenticate(&Client::new()).await?;

        token_mock.assert_async().await;
        assert_eq!(session.authorization(), "Bearer app-only");

        Ok(())
    }

    #[test(tokio::test)]
    async fn interactive_sign_in_ignores_the_secret() -> Result<(), AuthError> {
        let mut server = Server::new_async().await;
        let device_code_mock = server
            .mock("POST", "/tenant/oauth2/v2.0/devicecode")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"invalid_scope"}"#)
            .expect(1)
            .create_async()
            .await;
        let token_mock = server.mock("POST", "/tenant/oauth2/v2.0/token").expect(0).create_async().await;

        let config = AppConfigBuilder::new().authority_url(server.url()).build();
        let result = authenticator_for(config.auth(), true)?.authenticate(&Client::new()).await;

        device_code_mock.assert_async().await;
        token_mock.assert_async().await;
        assert!(matches!(result, Err(AuthError::Rejected { error, .. }) if error == "invalid_scope"));

        Ok(())
    }

    #[test]
    fn a_missing_app_id_is_rejected_before_any_request() {
        let mut config = AppConfigBuilder::new().build();
        config.auth_mut().apply_overrides(None, Some(String::new()), None);

        let result = authenticator_for(config.auth(), false);

        assert!(matches!(result, Err(AuthError::MissingSetting("app id"))));
    }

    #[test]
    fn rejected_errors_include_the_description() {
        let error = AuthError::Rejected {
            error: "invalid_client".to_string(),
            description: Some("bad secret".to_string()),
        };

        assert_eq!(error.to_string(), "sign-in rejected (invalid_client): bad secret");
    }
}

use crate::app_config::AppConfig;
use crate::auth::Session;
use crate::graph::collection::Collection;
use crate::graph::error_response::ErrorResponse;
use futures::{Stream, TryStreamExt, stream};
use reqwest::header::HeaderValue;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument, trace};

/// Resource client for the Graph API. Requests are issued one at a time and never retried.
#[derive(Debug, Clone)]
pub struct GraphClient {
    client: Client,
    base_url: String,
}

impl GraphClient {
    pub fn new(session: &Session, config: &AppConfig) -> Result<Self, GraphError> {
        if session.is_expired() {
            return Err(GraphError::SessionExpired);
        }

        let mut headers = header::HeaderMap::new();
        let mut authorization = HeaderValue::from_str(&session.authorization())?;
        authorization.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, authorization);

        let client = Client::builder().default_headers(headers).build()?;
        Ok(GraphClient {
            client,
            base_url: config.graph().base_url(),
        })
    }

    fn url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, GraphError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let parsed = if query.is_empty() { Url::parse(&url) } else { Url::parse_with_params(&url, query) };
        parsed.map_err(|e| GraphError::InvalidUrl { url, reason: e.to_string() })
    }

    #[instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, GraphError> {
        let url = self.url(path, query)?;
        self.send_json(self.client.get(url)).await
    }

    /// Reads a whole collection, following `@odata.nextLink` until the server stops returning one.
    #[instrument(skip(self))]
    pub async fn get_all<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<Vec<T>, GraphError> {
        let url = self.url(path, query)?;
        let items: Vec<T> = self.pages(url).try_concat().await?;
        debug!("Read {} item(s) from {}", items.len(), path);
        Ok(items)
    }

    /// Lazily fetches the pages of a collection in server order.
    pub fn pages<T: DeserializeOwned>(&self, first: Url) -> impl Stream<Item = Result<Vec<T>, GraphError>> {
        stream::try_unfold(Some(first), move |next| async move {
            let Some(url) = next else {
                return Ok(None);
            };

            trace!(%url, "Fetching page");
            let page = self.send_json::<Collection<T>>(self.client.get(url)).await?;
            let next = page
                .next_link
                .map(|link| Url::parse(&link).map_err(|e| GraphError::InvalidUrl { url: link, reason: e.to_string() }))
                .transpose()?;

            Ok(Some((page.value, next)))
        })
    }

    #[instrument(skip(self, body))]
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, GraphError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path, &[])?;
        self.send_json(self.client.post(url).json(body)).await
    }

    /// POST to an action endpoint that replies without content.
    #[instrument(skip(self, body))]
    pub async fn post_no_content<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), GraphError> {
        let url = self.url(path, &[])?;
        self.send(self.client.post(url).json(body)).await.map(|_| ())
    }

    /// POST to an action endpoint that takes no body.
    #[instrument(skip(self))]
    pub async fn trigger(&self, path: &str) -> Result<(), GraphError> {
        let url = self.url(path, &[])?;
        self.send(self.client.post(url).header(header::CONTENT_LENGTH, 0)).await.map(|_| ())
    }

    #[instrument(skip(self, body))]
    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), GraphError> {
        let url = self.url(path, &[])?;
        self.send(self.client.patch(url).json(body)).await.map(|_| ())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> Result<(), GraphError> {
        let url = self.url(path, &[])?;
        self.send(self.client.delete(url)).await.map(|_| ())
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, GraphError> {
        let response = self.send(request).await?;
        Ok(response.json::<T>().await?)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, GraphError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(error) => format!("{}: {}", error.error.code, error.error.message),
            Err(_) if body.is_empty() => status.canonical_reason().unwrap_or("no details").to_string(),
            Err(_) => body.clone(),
        };
        Err(GraphError::Status { status, message, body })
    }
}

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Graph returned {status}: {message}")]
    Status { status: StatusCode, message: String, body: String },
    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("the access token is not a valid header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
    #[error("the session has expired, sign in again")]
    SessionExpired,
    #[error("{0} not found")]
    NotFound(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use chrono::{Duration, Utc};

    /// A client pointing at a mock server, authenticated with a fixed token.
    pub fn graph_client(server_url: String) -> GraphClient {
        let session = Session::new("token".to_string(), "Bearer".to_string(), Utc::now() + Duration::hours(1));
        let config = AppConfigBuilder::new().graph_url(server_url).build();
        GraphClient::new(&session, &config).expect("valid test client")
    }
}

use crate::domain::Organization;
use crate::graph::{GraphClient, GraphError};
use tracing::instrument;

#[instrument(skip(client))]
pub async fn get_organization(client: &GraphClient) -> Result<Organization, GraphError> {
    client
        .get_all::<Organization>("organization", &[])
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| GraphError::NotFound("organization".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_support::graph_client;

    #[tokio::test]
    async fn get_organization_fails_when_the_tenant_is_not_visible() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/beta/organization")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"value":[]}"#)
            .create_async()
            .await;

        let client = graph_client(server.url());
        let result = get_organization(&client).await;

        assert!(matches!(result, Err(GraphError::NotFound(_))));
    }
}

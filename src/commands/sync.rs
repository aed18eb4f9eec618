use crate::domain::SyncInfo;
use crate::graph::{GraphClient, GraphError};
use tracing::{info, instrument};

const SETTINGS: &str = "deviceManagement/windowsAutopilotSettings";

/// Asks the service to synchronise Autopilot devices with the hardware registrations.
#[instrument(skip(client))]
pub async fn trigger_sync(client: &GraphClient) -> Result<(), GraphError> {
    client.trigger(&format!("{}/sync", SETTINGS)).await?;
    info!("🔄 Triggered an Autopilot sync");
    Ok(())
}

#[instrument(skip(client))]
pub async fn get_sync_info(client: &GraphClient) -> Result<SyncInfo, GraphError> {
    client.get(SETTINGS, &[]).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_support::graph_client;

    #[tokio::test]
    async fn trigger_sync_posts_to_the_sync_action() -> Result<(), GraphError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/beta/deviceManagement/windowsAutopilotSettings/sync")
            .with_status(204)
            .create_async()
            .await;

        let client = graph_client(server.url());
        trigger_sync(&client).await?;

        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn trigger_sync_surfaces_throttling() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("POST", "/beta/deviceManagement/windowsAutopilotSettings/sync")
            .with_status(429)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":{"code":"TooManyRequests","message":"Syncs are limited to one every 10 minutes"}}"#)
            .create_async()
            .await;

        let client = graph_client(server.url());
        let result = trigger_sync(&client).await;

        assert!(matches!(result, Err(GraphError::Status { status, .. }) if status.as_u16() == 429));
    }

    #[tokio::test]
    async fn get_sync_info_reads_the_last_sync() -> Result<(), GraphError> {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/beta/deviceManagement/windowsAutopilotSettings")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"settings","lastSyncDateTime":"2024-05-01T10:00:00Z","lastManualSyncTriggerDateTime":"2024-05-01T09:58:00Z","syncStatus":"completed"}"#)
            .create_async()
            .await;

        let client = graph_client(server.url());
        let info = get_sync_info(&client).await?;

        assert_eq!(info.sync_status.as_deref(), Some("completed"));
        assert!(info.last_sync_date_time.is_some());

        Ok(())
    }
}

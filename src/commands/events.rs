use crate::domain::AutopilotEvent;
use crate::graph::{GraphClient, GraphError};
use tracing::{info, instrument};

const EVENTS: &str = "deviceManagement/autopilotEvents";

#[instrument(skip(client))]
pub async fn list_events(client: &GraphClient) -> Result<Vec<AutopilotEvent>, GraphError> {
    info!("Retrieving Autopilot events...");
    let events = client.get_all::<AutopilotEvent>(EVENTS, &[]).await?;
    info!("Retrieving Autopilot events... OK, {} found", events.len());

    Ok(events)
}

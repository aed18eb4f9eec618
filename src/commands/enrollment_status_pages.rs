use crate::domain::{EnrollmentStatusPage, EnrollmentStatusPageBody, EnrollmentStatusPageSettings, EnrollmentStatusPageUpdate};
use crate::graph::{GraphClient, GraphError};
use tracing::{info, instrument};

const CONFIGURATIONS: &str = "deviceManagement/deviceEnrollmentConfigurations";

#[instrument(skip(client))]
pub async fn list_status_pages(client: &GraphClient) -> Result<Vec<EnrollmentStatusPage>, GraphError> {
    let configurations = client.get_all::<EnrollmentStatusPage>(CONFIGURATIONS, &[]).await?;
    Ok(configurations.into_iter().filter(EnrollmentStatusPage::is_enrollment_status_page).collect())
}

#[instrument(skip(client))]
pub async fn get_status_page(client: &GraphClient, id: &str) -> Result<EnrollmentStatusPage, GraphError> {
    client.get(&format!("{}/{}", CONFIGURATIONS, id), &[]).await
}

#[instrument(skip(client, settings))]
pub async fn create_status_page(
    client: &GraphClient,
    display_name: &str,
    description: Option<&str>,
    settings: &EnrollmentStatusPageSettings,
) -> Result<EnrollmentStatusPage, GraphError> {
    let body = EnrollmentStatusPageBody::new(display_name, description, settings);
    let page = client.post::<_, EnrollmentStatusPage>(CONFIGURATIONS, &body).await?;
    info!(id = page.id, "✅ Created enrollment status page '{}'", page.display_name);
    Ok(page)
}

/// Re-reads the page, applies the supplied fields and writes the merged page back.
#[instrument(skip(client, update))]
pub async fn update_status_page(client: &GraphClient, id: &str, update: EnrollmentStatusPageUpdate) -> Result<EnrollmentStatusPage, GraphError> {
    let merged = update.apply(get_status_page(client, id).await?);

    client.patch(&format!("{}/{}", CONFIGURATIONS, id), &EnrollmentStatusPageBody::from(&merged)).await?;
    info!(id, "✅ Updated enrollment status page '{}'", merged.display_name);

    Ok(merged)
}

#[instrument(skip(client))]
pub async fn delete_status_page(client: &GraphClient, id: &str) -> Result<(), GraphError> {
    client.delete(&format!("{}/{}", CONFIGURATIONS, id)).await?;
    info!("🗑️ Deleted enrollment status page '{}'", id);
    Ok(())
}

use crate::domain::{GroupAssignmentRequest, ProfileAssignment, assignment_id};
use crate::graph::{GraphClient, GraphError};
use tracing::{info, instrument};

const PROFILES: &str = "deviceManagement/windowsAutopilotDeploymentProfiles";

#[instrument(skip(client))]
pub async fn list_assignments(client: &GraphClient, profile_id: &str) -> Result<Vec<ProfileAssignment>, GraphError> {
    client.get_all(&format!("{}/{}/assignments", PROFILES, profile_id), &[]).await
}

#[instrument(skip(client))]
pub async fn assign_group(client: &GraphClient, profile_id: &str, group_id: &str) -> Result<ProfileAssignment, GraphError> {
    let request = GroupAssignmentRequest::new(profile_id, group_id);
    let assignment = client.post(&format!("{}/{}/assignments", PROFILES, profile_id), &request).await?;
    info!("✅ Assigned group '{}' to profile '{}'", group_id, profile_id);
    Ok(assignment)
}

#[instrument(skip(client))]
pub async fn unassign_group(client: &GraphClient, profile_id: &str, group_id: &str) -> Result<(), GraphError> {
    let path = format!("{}/{}/assignments/{}", PROFILES, profile_id, assignment_id(profile_id, group_id));
    client.delete(&path).await?;
    info!("🗑️ Removed group '{}' from profile '{}'", group_id, profile_id);
    Ok(())
}

use crate::commands::organization::get_organization;
use crate::domain::{DeploymentProfile, DeviceIdentity};
use crate::graph::{GraphClient, GraphError};
use crate::profile::{AutopilotConfigurationFile, DeploymentProfileBody, ProfileOptions, ProfileUpdate};
use tracing::{info, instrument};

const PROFILES: &str = "deviceManagement/windowsAutopilotDeploymentProfiles";

#[instrument(skip(client))]
pub async fn list_profiles(client: &GraphClient) -> Result<Vec<DeploymentProfile>, GraphError> {
    info!("Retrieving deployment profiles...");
    let profiles = client.get_all::<DeploymentProfile>(PROFILES, &[]).await?;
    info!("Retrieving deployment profiles... OK, {} found", profiles.len());

    Ok(profiles)
}

#[instrument(skip(client))]
pub async fn get_profile(client: &GraphClient, id: &str) -> Result<DeploymentProfile, GraphError> {
    client.get(&format!("{}/{}", PROFILES, id), &[]).await
}

#[instrument(skip_all, fields(display_name = options.display_name))]
pub async fn create_profile(client: &GraphClient, options: &ProfileOptions) -> Result<DeploymentProfile, GraphError> {
    let profile = client.post::<_, DeploymentProfile>(PROFILES, &DeploymentProfileBody::from(options)).await?;
    info!(id = profile.id, "✅ Created deployment profile '{}'", profile.display_name);
    Ok(profile)
}

/// Re-reads the profile, applies the supplied fields and writes the merged profile back.
#[instrument(skip(client, update))]
pub async fn update_profile(client: &GraphClient, id: &str, update: ProfileUpdate) -> Result<ProfileOptions, GraphError> {
    let current = get_profile(client, id).await?;
    let merged = update.apply(ProfileOptions::from(&current));

    client.patch(&format!("{}/{}", PROFILES, id), &DeploymentProfileBody::from(&merged)).await?;
    info!(id, "✅ Updated deployment profile '{}'", merged.display_name);

    Ok(merged)
}

#[instrument(skip(client))]
pub async fn delete_profile(client: &GraphClient, id: &str) -> Result<(), GraphError> {
    client.delete(&format!("{}/{}", PROFILES, id)).await?;
    info!("🗑️ Deleted deployment profile '{}'", id);
    Ok(())
}

#[instrument(skip(client))]
pub async fn list_assigned_devices(client: &GraphClient, id: &str) -> Result<Vec<DeviceIdentity>, GraphError> {
    client.get_all(&format!("{}/{}/assignedDevices", PROFILES, id), &[]).await
}

/// Builds the offline provisioning file for a profile, using the tenant's default domain.
#[instrument(skip(client))]
pub async fn export_configuration(client: &GraphClient, id: &str) -> Result<AutopilotConfigurationFile, GraphError> {
    let profile = get_profile(client, id).await?;
    let organization = get_organization(client).await?;
    let domain = organization
        .default_domain()
        .ok_or_else(|| GraphError::NotFound("default verified domain".to_string()))?;

    Ok(AutopilotConfigurationFile::new(&profile.id, &ProfileOptions::from(&profile), &organization.id, domain)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DeviceUsageType, UserType};
    use crate::graph::test_support::graph_client;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_log::test;

    const PATH: &str = "/beta/deviceManagement/windowsAutopilotDeploymentProfiles";

    #[test(tokio::test)]
    async fn update_profile_only_changes_the_supplied_field() -> Result<(), GraphError> {
        let mut server = mockito::Server::new_async().await;

        let get_mock = server
            .mock("GET", format!("{}/profile-1", PATH).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/deployment_profile.json"))
            .create_async()
            .await;
        let patch_mock = server
            .mock("PATCH", format!("{}/profile-1", PATH).as_str())
            .match_body(Matcher::Json(json!({
                "@odata.type": "#microsoft.graph.activeDirectoryWindowsAutopilotDeploymentProfile",
                "displayName": "Hybrid laptops",
                "description": "Domain joined laptops",
                "language": "nl-NL",
                "deviceNameTemplate": "LPT-%SERIAL%",
                "deviceType": "windowsPc",
                "enableWhiteGlove": true,
                "extractHardwareHash": false,
                "hybridAzureADJoinSkipConnectivityCheck": true,
                "outOfBoxExperienceSettings": {
                    "hidePrivacySettings": true,
                    "hideEULA": true,
                    "userType": "standard",
                    "deviceUsageType": "singleUser",
                    "skipKeyboardSelectionPage": true,
                    "hideEscapeLink": false
                }
            })))
            .with_status(204)
            .create_async()
            .await;

        let client = graph_client(server.url());
        let update = ProfileUpdate {
            description: Some("Domain joined laptops".to_string()),
            ..Default::default()
        };
        let merged = update_profile(&client, "profile-1", update).await?;

        get_mock.assert_async().await;
        patch_mock.assert_async().await;
        assert_eq!(merged.user_type, UserType::Standard);
        assert_eq!(merged.device_usage, DeviceUsageType::SingleUser);

        Ok(())
    }

    #[tokio::test]
    async fn export_configuration_combines_the_profile_and_the_tenant() -> Result<(), GraphError> {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", format!("{}/profile-1", PATH).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/deployment_profile.json"))
            .create_async()
            .await;
        server
            .mock("GET", "/beta/organization")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "value": [{
                        "id": "tenant-id",
                        "verifiedDomains": [
                            { "name": "contoso.onmicrosoft.com", "isDefault": false, "isInitial": true },
                            { "name": "contoso.com", "isDefault": true, "isInitial": false }
                        ]
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = graph_client(server.url());
        let file = serde_json::to_value(export_configuration(&client, "profile-1").await?)?;

        assert_eq!(file["CloudAssignedTenantId"], "tenant-id");
        assert_eq!(file["CloudAssignedTenantDomain"], "contoso.com");
        assert_eq!(file["ZtdCorrelationId"], "profile-1");
        assert_eq!(file["CloudAssignedDomainJoinMethod"], 1);
        assert_eq!(file["CloudAssignedOobeConfig"], 264 + 2 + 4 + 16 + 1024);

        Ok(())
    }
}

use crate::commands::odata_literal;
use crate::domain::{DeviceIdentity, DevicePropertiesUpdate};
use crate::graph::{GraphClient, GraphError};
use tracing::{debug, info, instrument};

const DEVICES: &str = "deviceManagement/windowsAutopilotDeviceIdentities";
const EXPAND_PROFILES: &str = "deploymentProfile,intendedDeploymentProfile";

#[instrument(skip(client))]
pub async fn list_devices(client: &GraphClient) -> Result<Vec<DeviceIdentity>, GraphError> {
    info!("Retrieving Autopilot devices...");
    let devices = client.get_all::<DeviceIdentity>(DEVICES, &[]).await?;
    info!("Retrieving Autopilot devices... OK, {} found", devices.len());

    Ok(devices)
}

#[instrument(skip(client))]
pub async fn get_device(client: &GraphClient, id: &str, expand: bool) -> Result<DeviceIdentity, GraphError> {
    let query: &[(&str, &str)] = if expand { &[("$expand", EXPAND_PROFILES)] } else { &[] };
    client.get(&format!("{}/{}", DEVICES, id), query).await
}

/// Finds devices by serial number. Serial numbers containing a space are matched exactly.
#[instrument(skip(client))]
pub async fn find_devices_by_serial(client: &GraphClient, serial_number: &str) -> Result<Vec<DeviceIdentity>, GraphError> {
    let Some((prefix, _)) = serial_number.split_once(' ') else {
        let filter = format!("contains(serialNumber,'{}')", odata_literal(serial_number));
        return client.get_all(DEVICES, &[("$filter", filter.as_str())]).await;
    };

    // The service filter cannot express the embedded space, narrow down on the prefix and compare here
    let filter = format!("startswith(serialNumber,'{}')", odata_literal(prefix));
    let candidates = client.get_all::<DeviceIdentity>(DEVICES, &[("$filter", filter.as_str())]).await?;
    debug!("{} candidate(s) share the prefix '{}'", candidates.len(), prefix);

    Ok(candidates.into_iter().filter(|device| device.serial_number == serial_number).collect())
}

#[instrument(skip(client))]
pub async fn update_device(client: &GraphClient, id: &str, update: &DevicePropertiesUpdate) -> Result<(), GraphError> {
    client.post_no_content(&format!("{}/{}/UpdateDeviceProperties", DEVICES, id), update).await?;
    info!("✅ Updated Autopilot device '{}'", id);
    Ok(())
}

#[instrument(skip(client))]
pub async fn delete_device(client: &GraphClient, id: &str) -> Result<(), GraphError> {
    client.delete(&format!("{}/{}", DEVICES, id)).await?;
    info!("🗑️ Deleted Autopilot device '{}'", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_support::graph_client;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const PATH: &str = "/beta/deviceManagement/windowsAutopilotDeviceIdentities";

    fn device(id: &str, serial_number: &str) -> serde_json::Value {
        json!({ "id": id, "serialNumber": serial_number, "groupTag": "" })
    }

    #[tokio::test]
    async fn serial_numbers_with_a_space_only_return_exact_matches() -> Result<(), GraphError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", PATH)
            .match_query(Matcher::UrlEncoded("$filter".into(), "startswith(serialNumber,'ABC')".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "value": [device("1", "ABC 123"), device("2", "ABC 1234"), device("3", "ABCD")] }).to_string())
            .create_async()
            .await;

        let client = graph_client(server.url());
        let devices = find_devices_by_serial(&client, "ABC 123").await?;

        mock.assert_async().await;
        assert_eq!(devices.iter().map(|d| d.id.as_str()).collect::<Vec<_>>(), vec!["1"]);

        Ok(())
    }

    #[tokio::test]
    async fn serial_numbers_without_a_space_use_the_service_filter() -> Result<(), GraphError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", PATH)
            .match_query(Matcher::UrlEncoded("$filter".into(), "contains(serialNumber,'5CD1234XYZ')".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "value": [device("1", "5CD1234XYZ")] }).to_string())
            .create_async()
            .await;

        let client = graph_client(server.url());
        let devices = find_devices_by_serial(&client, "5CD1234XYZ").await?;

        mock.assert_async().await;
        assert_eq!(devices.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn get_device_expands_the_profiles_on_request() -> Result<(), GraphError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", format!("{}/1", PATH).as_str())
            .match_query(Matcher::UrlEncoded("$expand".into(), EXPAND_PROFILES.into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/device_identity.json"))
            .create_async()
            .await;

        let client = graph_client(server.url());
        let device = get_device(&client, "1", true).await?;

        mock.assert_async().await;
        assert!(device.deployment_profile.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn update_device_posts_only_the_supplied_properties() -> Result<(), GraphError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", format!("{}/1/UpdateDeviceProperties", PATH).as_str())
            .match_body(Matcher::Json(json!({ "groupTag": "Kiosk", "displayName": "KIOSK-01" })))
            .with_status(204)
            .create_async()
            .await;

        let client = graph_client(server.url());
        let update = DevicePropertiesUpdate {
            group_tag: Some("Kiosk".to_string()),
            display_name: Some("KIOSK-01".to_string()),
            ..Default::default()
        };
        update_device(&client, "1", &update).await?;

        mock.assert_async().await;
        Ok(())
    }
}

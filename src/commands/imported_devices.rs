use crate::commands::odata_literal;
use crate::domain::{ImportedDevice, ImportedDeviceRequest};
use crate::graph::{GraphClient, GraphError};
use tracing::{debug, instrument};

pub(crate) const IMPORTED_DEVICES: &str = "deviceManagement/importedWindowsAutopilotDeviceIdentities";

#[instrument(skip(client))]
pub async fn list_imported_devices(client: &GraphClient) -> Result<Vec<ImportedDevice>, GraphError> {
    client.get_all(IMPORTED_DEVICES, &[]).await
}

#[instrument(skip(client))]
pub async fn get_imported_device(client: &GraphClient, id: &str) -> Result<ImportedDevice, GraphError> {
    client.get(&format!("{}/{}", IMPORTED_DEVICES, id), &[]).await
}

#[instrument(skip(client))]
pub async fn find_imported_devices_by_serial(client: &GraphClient, serial_number: &str) -> Result<Vec<ImportedDevice>, GraphError> {
    let filter = format!("startswith(serialNumber,'{}')", odata_literal(serial_number));
    client.get_all(IMPORTED_DEVICES, &[("$filter", filter.as_str())]).await
}

#[instrument(skip_all, fields(serial_number = request.serial_number))]
pub async fn add_imported_device(client: &GraphClient, request: &ImportedDeviceRequest) -> Result<ImportedDevice, GraphError> {
    let device = client.post::<_, ImportedDevice>(IMPORTED_DEVICES, request).await?;
    debug!(id = device.id, "Submitted device '{}' for import", device.serial_number);
    Ok(device)
}

#[instrument(skip(client))]
pub async fn delete_imported_device(client: &GraphClient, id: &str) -> Result<(), GraphError> {
    client.delete(&format!("{}/{}", IMPORTED_DEVICES, id)).await
}

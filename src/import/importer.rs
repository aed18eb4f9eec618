use crate::app_config::Import;
use crate::commands::imported_devices::{add_imported_device, delete_imported_device, list_imported_devices};
use crate::domain::{ImportStatus, ImportedDevice, ImportedDeviceRequest};
use crate::graph::{GraphClient, GraphError};
use crate::import::DeviceRecord;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use tokio::time::{sleep, timeout};
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Copy)]
pub struct ImportSettings {
    pub poll_interval: Duration,
    pub timeout: Duration,
}

impl From<&Import> for ImportSettings {
    fn from(config: &Import) -> Self {
        ImportSettings {
            poll_interval: config.poll_interval(),
            timeout: config.timeout(),
        }
    }
}

/// Final state of every submitted device, in input order.
#[derive(Debug)]
pub struct ImportReport {
    pub devices: Vec<ImportedDevice>,
    pub cleanup_failures: usize,
}

impl ImportReport {
    pub fn failed(&self) -> usize {
        self.devices.iter().filter(|device| device.state.device_import_status == ImportStatus::Error).count()
    }

    pub fn status_line(device: &ImportedDevice) -> String {
        format!(
            "Serial number {}: {} {} {}",
            device.serial_number,
            device.state.device_import_status.as_str(),
            device.state.device_error_code,
            device.state.device_error_name.as_deref().unwrap_or_default()
        )
        .trim_end()
        .to_string()
    }
}

/// Submits every record, waits until the service has resolved all of them and removes the status records.
///
/// The wait ends with an error when `settings.timeout` elapses or `cancel` completes; the status records are
/// left in place in that case so they can still be inspected.
#[instrument(skip_all, fields(devices = records.len()))]
pub async fn import_devices<F>(
    client: &GraphClient,
    records: &[DeviceRecord],
    group_tag_override: Option<&str>,
    settings: ImportSettings,
    cancel: F,
) -> Result<ImportReport, ImportError>
where
    F: Future<Output = ()>,
{
    let ids = submit(client, records, group_tag_override).await?;

    let devices = tokio::select! {
        result = timeout(settings.timeout, wait_until_resolved(client, &ids, settings.poll_interval)) => match result {
            Ok(devices) => devices?,
            Err(_) => return Err(ImportError::TimedOut { timeout: settings.timeout }),
        },
        _ = cancel => return Err(ImportError::Cancelled),
    };

    for device in &devices {
        info!(serial_number = device.serial_number, "📋 {}", ImportReport::status_line(device));
    }

    let cleanup_failures = clean_up(client, &ids).await;
    Ok(ImportReport { devices, cleanup_failures })
}

async fn submit(client: &GraphClient, records: &[DeviceRecord], group_tag_override: Option<&str>) -> Result<Vec<String>, GraphError> {
    info!("📤 Submitting {} device(s) for import...", records.len());

    let mut ids = Vec::with_capacity(records.len());
    for record in records {
        let request = ImportedDeviceRequest::new(
            &record.serial_number,
            &record.hardware_hash,
            record.effective_group_tag(group_tag_override),
            record.assigned_user(),
        );
        ids.push(add_imported_device(client, &request).await?.id);
    }

    info!("📤 Submitting {} device(s) for import... OK", ids.len());
    Ok(ids)
}

/// Polls until none of the tracked records is still `unknown`. Records not listed yet count as unresolved.
async fn wait_until_resolved(client: &GraphClient, ids: &[String], poll_interval: Duration) -> Result<Vec<ImportedDevice>, GraphError> {
    loop {
        let mut listed = list_imported_devices(client)
            .await?
            .into_iter()
            .map(|device| (device.id.clone(), device))
            .collect::<HashMap<_, _>>();
        let tracked = ids.iter().filter_map(|id| listed.remove(id)).collect::<Vec<_>>();

        let resolved = tracked.iter().filter(|device| device.state.device_import_status.is_resolved()).count();
        let pending = ids.len() - resolved;
        if pending == 0 {
            return Ok(tracked);
        }

        info!("⏳ Waiting for {} of {} device(s) to be imported", pending, ids.len());
        sleep(poll_interval).await;
    }
}

async fn clean_up(client: &GraphClient, ids: &[String]) -> usize {
    let mut failures = 0;
    for id in ids {
        if let Err(e) = delete_imported_device(client, id).await {
            warn!(id, "⚠️ Unable to remove import status record: {}", e);
            failures += 1;
        }
    }

    info!("🧹 Removed {} import status record(s)", ids.len() - failures);
    failures
}

#[derive(Error, Debug)]
pub enum ImportError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("devices were still being imported after {timeout:?}, their status records were kept")]
    TimedOut { timeout: Duration },
    #[error("import cancelled while waiting, the status records were kept")]
    Cancelled,
}

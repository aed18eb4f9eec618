use serde::{Deserialize, Serialize};

// API: https://learn.microsoft.com/graph/api/resources/intune-enrollment-importedwindowsautopilotdeviceidentity?view=graph-rest-beta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedDevice {
    pub id: String,
    #[serde(default)]
    pub serial_number: String,
    pub group_tag: Option<String>,
    pub assigned_user_principal_name: Option<String>,
    pub import_id: Option<String>,
    #[serde(default)]
    pub state: ImportState,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportState {
    pub device_import_status: ImportStatus,
    pub device_registration_id: Option<String>,
    pub device_error_code: i64,
    pub device_error_name: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImportStatus {
    /// Still being processed by the service.
    #[default]
    Unknown,
    Pending,
    Partial,
    Complete,
    Error,
    #[serde(other)]
    UnknownFutureValue,
}

impl ImportStatus {
    pub fn is_resolved(self) -> bool {
        self != ImportStatus::Unknown
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ImportStatus::Unknown => "unknown",
            ImportStatus::Pending => "pending",
            ImportStatus::Partial => "partial",
            ImportStatus::Complete => "complete",
            ImportStatus::Error => "error",
            ImportStatus::UnknownFutureValue => "unknownFutureValue",
        }
    }
}

/// Body of an import-create call.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedDeviceRequest {
    #[serde(rename = "@odata.type")]
    odata_type: &'static str,
    pub group_tag: String,
    pub serial_number: String,
    product_key: String,
    pub hardware_identifier: String,
    pub assigned_user_principal_name: String,
    state: ImportStateRequest,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImportStateRequest {
    #[serde(rename = "@odata.type")]
    odata_type: &'static str,
    device_import_status: ImportStatus,
    device_registration_id: String,
    device_error_code: i64,
    device_error_name: String,
}

impl ImportedDeviceRequest {
    pub fn new(serial_number: &str, hardware_hash: &str, group_tag: Option<&str>, assigned_user: Option<&str>) -> Self {
        ImportedDeviceRequest {
            odata_type: "#microsoft.graph.importedWindowsAutopilotDeviceIdentity",
            group_tag: group_tag.unwrap_or_default().to_string(),
            serial_number: serial_number.to_string(),
            product_key: String::new(),
            hardware_identifier: hardware_hash.to_string(),
            assigned_user_principal_name: assigned_user.unwrap_or_default().to_string(),
            state: ImportStateRequest {
                odata_type: "microsoft.graph.importedWindowsAutopilotDeviceIdentityState",
                device_import_status: ImportStatus::Pending,
                device_registration_id: String::new(),
                device_error_code: 0,
                device_error_name: String::new(),
            },
        }
    }
}

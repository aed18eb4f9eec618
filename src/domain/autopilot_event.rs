use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// API: https://learn.microsoft.com/graph/api/resources/intune-troubleshooting-deviceManagementAutopilotEvent?view=graph-rest-beta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutopilotEvent {
    pub id: String,
    pub device_serial_number: Option<String>,
    pub event_date_time: Option<DateTime<Utc>>,
    pub device_registered_date_time: Option<DateTime<Utc>>,
    pub enrollment_start_date_time: Option<DateTime<Utc>>,
    pub enrollment_state: Option<String>,
    pub deployment_state: Option<String>,
    pub os_version: Option<String>,
    pub deployment_duration: Option<String>,
    pub user_principal_name: Option<String>,
    pub managed_device_name: Option<String>,
    #[serde(rename = "windows10EnrollmentCompletionPageConfigurationDisplayName")]
    pub enrollment_status_page_name: Option<String>,
}

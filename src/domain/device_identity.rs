use crate::domain::DeploymentProfile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// API: https://learn.microsoft.com/graph/api/resources/intune-enrollment-windowsautopilotdeviceidentity?view=graph-rest-beta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceIdentity {
    pub id: String,
    #[serde(default)]
    pub serial_number: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub group_tag: Option<String>,
    pub purchase_order_identifier: Option<String>,
    pub user_principal_name: Option<String>,
    pub addressable_user_name: Option<String>,
    pub display_name: Option<String>,
    pub enrollment_state: Option<String>,
    pub deployment_profile_assignment_status: Option<String>,
    pub last_contacted_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_profile: Option<DeploymentProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intended_deployment_profile: Option<DeploymentProfile>,
}

/// Body of the `UpdateDeviceProperties` action, only the supplied properties are sent.
#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevicePropertiesUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_principal_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addressable_user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl DevicePropertiesUpdate {
    pub fn is_empty(&self) -> bool {
        self.user_principal_name.is_none() && self.addressable_user_name.is_none() && self.group_tag.is_none() && self.display_name.is_none()
    }
}

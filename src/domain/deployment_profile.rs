use clap::ValueEnum;
use serde::{Deserialize, Serialize};

const AZURE_AD_PROFILE_TYPE: &str = "#microsoft.graph.azureADWindowsAutopilotDeploymentProfile";
const HYBRID_PROFILE_TYPE: &str = "#microsoft.graph.activeDirectoryWindowsAutopilotDeploymentProfile";

// API: https://learn.microsoft.com/graph/api/resources/intune-enrollment-windowsautopilotdeploymentprofile?view=graph-rest-beta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentProfile {
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub device_name_template: Option<String>,
    pub device_type: Option<String>,
    #[serde(default)]
    pub enable_white_glove: bool,
    #[serde(default)]
    pub extract_hardware_hash: bool,
    #[serde(rename = "hybridAzureADJoinSkipConnectivityCheck")]
    pub hybrid_join_skip_connectivity_check: Option<bool>,
    #[serde(default)]
    pub out_of_box_experience_settings: OutOfBoxExperienceSettings,
}

impl DeploymentProfile {
    pub fn join_mode(&self) -> JoinMode {
        JoinMode::from_odata_type(self.odata_type.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutOfBoxExperienceSettings {
    pub hide_privacy_settings: bool,
    #[serde(rename = "hideEULA")]
    pub hide_eula: bool,
    pub user_type: UserType,
    pub device_usage_type: DeviceUsageType,
    pub skip_keyboard_selection_page: bool,
    pub hide_escape_link: bool,
}

/// How the device joins the directory during provisioning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum JoinMode {
    /// Microsoft Entra join.
    #[default]
    AzureAd,
    /// Hybrid join with an on-premises Active Directory.
    Hybrid,
}

impl JoinMode {
    pub fn odata_type(self) -> &'static str {
        match self {
            JoinMode::AzureAd => AZURE_AD_PROFILE_TYPE,
            JoinMode::Hybrid => HYBRID_PROFILE_TYPE,
        }
    }

    pub fn from_odata_type(odata_type: Option<&str>) -> Self {
        match odata_type {
            Some(HYBRID_PROFILE_TYPE) => JoinMode::Hybrid,
            _ => JoinMode::AzureAd,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum UserType {
    #[default]
    Administrator,
    Standard,
    #[serde(other)]
    #[value(skip)]
    UnknownFutureValue,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum DeviceUsageType {
    #[default]
    SingleUser,
    Shared,
    #[serde(other)]
    #[value(skip)]
    UnknownFutureValue,
}

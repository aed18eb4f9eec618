use crate::domain::{JoinMode, OutOfBoxExperienceSettings};
use crate::profile::ProfileOptions;
use serde::Serialize;

const DEVICE_TYPE: &str = "windowsPc";

/// Create/update payload of `windowsAutopilotDeploymentProfiles`.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentProfileBody<'a> {
    #[serde(rename = "@odata.type")]
    odata_type: &'static str,
    display_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    device_name_template: Option<&'a str>,
    device_type: &'static str,
    enable_white_glove: bool,
    extract_hardware_hash: bool,
    #[serde(rename = "hybridAzureADJoinSkipConnectivityCheck", skip_serializing_if = "Option::is_none")]
    hybrid_join_skip_connectivity_check: Option<bool>,
    out_of_box_experience_settings: OutOfBoxExperienceSettings,
}

impl<'a> From<&'a ProfileOptions> for DeploymentProfileBody<'a> {
    fn from(options: &'a ProfileOptions) -> Self {
        DeploymentProfileBody {
            odata_type: options.join_mode.odata_type(),
            display_name: &options.display_name,
            description: options.description.as_deref(),
            language: options.language.as_deref(),
            device_name_template: options.device_name_template.as_deref(),
            device_type: DEVICE_TYPE,
            enable_white_glove: options.white_glove,
            extract_hardware_hash: options.extract_hardware_hash,
            hybrid_join_skip_connectivity_check: (options.join_mode == JoinMode::Hybrid).then_some(options.skip_connectivity_check),
            out_of_box_experience_settings: OutOfBoxExperienceSettings {
                hide_privacy_settings: options.hide_privacy,
                hide_eula: options.hide_eula,
                user_type: options.user_type,
                device_usage_type: options.device_usage,
                skip_keyboard_selection_page: options.skip_keyboard,
                hide_escape_link: options.hide_escape_link,
            },
        }
    }
}

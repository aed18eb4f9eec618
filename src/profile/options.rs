use crate::domain::{DeploymentProfile, DeviceUsageType, JoinMode, UserType};
use serde::Serialize;

/// Human-readable provisioning options of a deployment profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileOptions {
    pub display_name: String,
    pub description: Option<String>,
    pub join_mode: JoinMode,
    pub user_type: UserType,
    pub device_usage: DeviceUsageType,
    pub hide_eula: bool,
    pub hide_privacy: bool,
    pub skip_keyboard: bool,
    pub hide_escape_link: bool,
    pub language: Option<String>,
    pub device_name_template: Option<String>,
    pub white_glove: bool,
    pub skip_connectivity_check: bool,
    pub extract_hardware_hash: bool,
}

impl From<&DeploymentProfile> for ProfileOptions {
    fn from(profile: &DeploymentProfile) -> Self {
        let oobe = &profile.out_of_box_experience_settings;
        ProfileOptions {
            display_name: profile.display_name.clone(),
            description: profile.description.clone(),
            join_mode: profile.join_mode(),
            user_type: oobe.user_type,
            device_usage: oobe.device_usage_type,
            hide_eula: oobe.hide_eula,
            hide_privacy: oobe.hide_privacy_settings,
            skip_keyboard: oobe.skip_keyboard_selection_page,
            hide_escape_link: oobe.hide_escape_link,
            language: profile.language.clone(),
            device_name_template: profile.device_name_template.clone().filter(|template| !template.is_empty()),
            white_glove: profile.enable_white_glove,
            skip_connectivity_check: profile.hybrid_join_skip_connectivity_check.unwrap_or(false),
            extract_hardware_hash: profile.extract_hardware_hash,
        }
    }
}

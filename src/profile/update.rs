use crate::domain::{DeviceUsageType, UserType};
use crate::profile::ProfileOptions;

/// Partial change to a deployment profile. `None` keeps the current value, `Some(false)` clears a toggle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub user_type: Option<UserType>,
    pub device_usage: Option<DeviceUsageType>,
    pub hide_eula: Option<bool>,
    pub hide_privacy: Option<bool>,
    pub skip_keyboard: Option<bool>,
    pub hide_escape_link: Option<bool>,
    pub language: Option<String>,
    pub device_name_template: Option<String>,
    pub white_glove: Option<bool>,
    pub skip_connectivity_check: Option<bool>,
    pub extract_hardware_hash: Option<bool>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        *self == ProfileUpdate::default()
    }

    /// Applies the supplied fields on top of `current`.
    pub fn apply(self, current: ProfileOptions) -> ProfileOptions {
        ProfileOptions {
            display_name: self.display_name.unwrap_or(current.display_name),
            description: self.description.or(current.description),
            join_mode: current.join_mode,
            user_type: self.user_type.unwrap_or(current.user_type),
            device_usage: self.device_usage.unwrap_or(current.device_usage),
            hide_eula: self.hide_eula.unwrap_or(current.hide_eula),
            hide_privacy: self.hide_privacy.unwrap_or(current.hide_privacy),
            skip_keyboard: self.skip_keyboard.unwrap_or(current.skip_keyboard),
            hide_escape_link: self.hide_escape_link.unwrap_or(current.hide_escape_link),
            language: self.language.or(current.language),
            device_name_template: self.device_name_template.or(current.device_name_template),
            white_glove: self.white_glove.unwrap_or(current.white_glove),
            skip_connectivity_check: self.skip_connectivity_check.unwrap_or(current.skip_connectivity_check),
            extract_hardware_hash: self.extract_hardware_hash.unwrap_or(current.extract_hardware_hash),
        }
    }
}

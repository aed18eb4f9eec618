use crate::domain::{
    AutopilotEvent, DeploymentProfile, DeviceIdentity, DeviceUsageType, EnrollmentStatusPage, ImportedDevice, JoinMode, ProfileAssignment,
    SyncInfo, UserType,
};
use crate::output::Tabular;
use crate::profile::{ProfileOptions, oobe_config};
use chrono::{DateTime, Utc};

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn timestamp(value: &Option<DateTime<Utc>>) -> String {
    value.map(|time| time.format("%Y-%m-%d %H:%M").to_string()).unwrap_or_default()
}

fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

fn join_mode(mode: JoinMode) -> &'static str {
    match mode {
        JoinMode::AzureAd => "Entra ID",
        JoinMode::Hybrid => "Hybrid",
    }
}

fn user_type(user_type: UserType) -> &'static str {
    match user_type {
        UserType::Administrator => "administrator",
        UserType::Standard => "standard",
        UserType::UnknownFutureValue => "unknown",
    }
}

fn device_usage(usage: DeviceUsageType) -> &'static str {
    match usage {
        DeviceUsageType::SingleUser => "single user",
        DeviceUsageType::Shared => "shared",
        DeviceUsageType::UnknownFutureValue => "unknown",
    }
}

impl Tabular for DeviceIdentity {
    const HEADERS: &'static [&'static str] = &["ID", "Serial number", "Model", "Group tag", "User", "Profile", "Last contact"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.serial_number.clone(),
            text(&self.model),
            text(&self.group_tag),
            text(&self.user_principal_name),
            text(&self.deployment_profile_assignment_status),
            timestamp(&self.last_contacted_date_time),
        ]
    }
}

impl Tabular for ImportedDevice {
    const HEADERS: &'static [&'static str] = &["ID", "Serial number", "Group tag", "Status", "Error code", "Error name"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.serial_number.clone(),
            text(&self.group_tag),
            self.state.device_import_status.as_str().to_string(),
            self.state.device_error_code.to_string(),
            text(&self.state.device_error_name),
        ]
    }
}

impl Tabular for DeploymentProfile {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Join", "Language", "Device name", "OOBE"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.display_name.clone(),
            join_mode(self.join_mode()).to_string(),
            text(&self.language),
            text(&self.device_name_template),
            oobe_config(&ProfileOptions::from(self)).to_string(),
        ]
    }
}

impl Tabular for ProfileOptions {
    const HEADERS: &'static [&'static str] = &[
        "Name",
        "Description",
        "Join",
        "User type",
        "Usage",
        "Hide EULA",
        "Hide privacy",
        "Skip keyboard",
        "Language",
        "Device name",
        "Pre-provisioning",
        "OOBE",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.display_name.clone(),
            text(&self.description),
            join_mode(self.join_mode).to_string(),
            user_type(self.user_type).to_string(),
            device_usage(self.device_usage).to_string(),
            yes_no(self.hide_eula),
            yes_no(self.hide_privacy),
            yes_no(self.skip_keyboard),
            text(&self.language),
            text(&self.device_name_template),
            yes_no(self.white_glove),
            oobe_config(self).to_string(),
        ]
    }
}

impl Tabular for ProfileAssignment {
    const HEADERS: &'static [&'static str] = &["ID", "Target", "Group"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.target.odata_type.trim_start_matches("#microsoft.graph.").to_string(),
            text(&self.target.group_id),
        ]
    }
}

impl Tabular for EnrollmentStatusPage {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Priority", "Show progress", "Timeout (min)", "Allow use on failure"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.display_name.clone(),
            self.priority.map(|priority| priority.to_string()).unwrap_or_default(),
            yes_no(self.settings.show_installation_progress),
            self.settings
                .install_progress_timeout_in_minutes
                .map(|minutes| minutes.to_string())
                .unwrap_or_default(),
            yes_no(self.settings.allow_device_use_on_install_failure),
        ]
    }
}

impl Tabular for AutopilotEvent {
    const HEADERS: &'static [&'static str] = &["Date", "Serial number", "Device", "User", "Deployment", "Duration"];

    fn row(&self) -> Vec<String> {
        vec![
            timestamp(&self.event_date_time),
            text(&self.device_serial_number),
            text(&self.managed_device_name),
            text(&self.user_principal_name),
            text(&self.deployment_state),
            text(&self.deployment_duration),
        ]
    }
}

impl Tabular for SyncInfo {
    const HEADERS: &'static [&'static str] = &["Last sync", "Last manual sync", "Status"];

    fn row(&self) -> Vec<String> {
        vec![
            timestamp(&self.last_sync_date_time),
            timestamp(&self.last_manual_sync_trigger_date_time),
            text(&self.sync_status),
        ]
    }
}

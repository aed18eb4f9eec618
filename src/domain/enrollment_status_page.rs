use serde::{Deserialize, Serialize};

pub const ENROLLMENT_STATUS_PAGE_TYPE: &str = "#microsoft.graph.windows10EnrollmentCompletionPageConfiguration";

// API: https://learn.microsoft.com/graph/api/resources/intune-onboarding-windows10enrollmentcompletionpageconfiguration?view=graph-rest-beta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentStatusPage {
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    pub description: Option<String>,
    pub priority: Option<i32>,
    #[serde(flatten)]
    pub settings: EnrollmentStatusPageSettings,
}

impl EnrollmentStatusPage {
    /// `deviceEnrollmentConfigurations` mixes several configuration kinds.
    pub fn is_enrollment_status_page(&self) -> bool {
        self.odata_type.as_deref() == Some(ENROLLMENT_STATUS_PAGE_TYPE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnrollmentStatusPageSettings {
    pub show_installation_progress: bool,
    pub block_device_setup_retry_by_user: bool,
    pub allow_device_reset_on_install_failure: bool,
    pub allow_log_collection_on_install_failure: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_progress_timeout_in_minutes: Option<i32>,
    pub allow_device_use_on_install_failure: bool,
}

impl Default for EnrollmentStatusPageSettings {
    fn default() -> Self {
        EnrollmentStatusPageSettings {
            show_installation_progress: true,
            block_device_setup_retry_by_user: false,
            allow_device_reset_on_install_failure: false,
            allow_log_collection_on_install_failure: false,
            custom_error_message: None,
            install_progress_timeout_in_minutes: Some(60),
            allow_device_use_on_install_failure: false,
        }
    }
}

/// Create/update payload of an enrollment status page.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentStatusPageBody<'a> {
    #[serde(rename = "@odata.type")]
    odata_type: &'static str,
    display_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(flatten)]
    settings: &'a EnrollmentStatusPageSettings,
}

impl<'a> EnrollmentStatusPageBody<'a> {
    pub fn new(display_name: &'a str, description: Option<&'a str>, settings: &'a EnrollmentStatusPageSettings) -> Self {
        EnrollmentStatusPageBody {
            odata_type: ENROLLMENT_STATUS_PAGE_TYPE,
            display_name,
            description,
            settings,
        }
    }
}

impl<'a> From<&'a EnrollmentStatusPage> for EnrollmentStatusPageBody<'a> {
    fn from(page: &'a EnrollmentStatusPage) -> Self {
        EnrollmentStatusPageBody::new(&page.display_name, page.description.as_deref(), &page.settings)
    }
}

/// Partial change to an enrollment status page, `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrollmentStatusPageUpdate {
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub show_installation_progress: Option<bool>,
    pub block_device_setup_retry_by_user: Option<bool>,
    pub allow_device_reset_on_install_failure: Option<bool>,
    pub allow_log_collection_on_install_failure: Option<bool>,
    pub custom_error_message: Option<String>,
    pub install_progress_timeout_in_minutes: Option<i32>,
    pub allow_device_use_on_install_failure: Option<bool>,
}

impl EnrollmentStatusPageUpdate {
    pub fn is_empty(&self) -> bool {
        *self == EnrollmentStatusPageUpdate::default()
    }

    pub fn apply(self, current: EnrollmentStatusPage) -> EnrollmentStatusPage {
        let settings = current.settings;
        EnrollmentStatusPage {
            odata_type: current.odata_type,
            id: current.id,
            display_name: self.display_name.unwrap_or(current.display_name),
            description: self.description.or(current.description),
            priority: current.priority,
            settings: EnrollmentStatusPageSettings {
                show_installation_progress: self.show_installation_progress.unwrap_or(settings.show_installation_progress),
                block_device_setup_retry_by_user: self.block_device_setup_retry_by_user.unwrap_or(settings.block_device_setup_retry_by_user),
                allow_device_reset_on_install_failure: self
                    .allow_device_reset_on_install_failure
                    .unwrap_or(settings.allow_device_reset_on_install_failure),
                allow_log_collection_on_install_failure: self
                    .allow_log_collection_on_install_failure
                    .unwrap_or(settings.allow_log_collection_on_install_failure),
                custom_error_message: self.custom_error_message.or(settings.custom_error_message),
                install_progress_timeout_in_minutes: self.install_progress_timeout_in_minutes.or(settings.install_progress_timeout_in_minutes),
                allow_device_use_on_install_failure: self
                    .allow_device_use_on_install_failure
                    .unwrap_or(settings.allow_device_use_on_install_failure),
            },
        }
    }
}

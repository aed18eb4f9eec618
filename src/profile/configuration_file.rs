use crate::domain::JoinMode;
use crate::profile::{ProfileOptions, oobe_config};
use serde::Serialize;

const CONFIGURATION_FILE_VERSION: u32 = 2049;
const UPDATE_TIMEOUT_MS: u32 = 1_800_000;
const OS_DEFAULT_LANGUAGE: &str = "os-default";

/// Offline provisioning file (`AutopilotConfigurationFile.json`) derived from a deployment profile.
#[derive(Debug, PartialEq, Serialize)]
pub struct AutopilotConfigurationFile {
    #[serde(rename = "CloudAssignedTenantId")]
    tenant_id: String,
    #[serde(rename = "CloudAssignedDeviceName", skip_serializing_if = "Option::is_none")]
    device_name: Option<String>,
    #[serde(rename = "CloudAssignedAutopilotUpdateTimeout")]
    update_timeout: u32,
    #[serde(rename = "CloudAssignedAutopilotUpdateDisabled")]
    update_disabled: u8,
    #[serde(rename = "CloudAssignedForcedEnrollment")]
    forced_enrollment: u8,
    #[serde(rename = "Version")]
    version: u32,
    #[serde(rename = "Comment_File")]
    comment: String,
    #[serde(rename = "CloudAssignedAadServerData")]
    aad_server_data: String,
    #[serde(rename = "CloudAssignedTenantDomain")]
    tenant_domain: String,
    #[serde(rename = "CloudAssignedDomainJoinMethod")]
    domain_join_method: u8,
    #[serde(rename = "CloudAssignedOobeConfig")]
    oobe_config: u32,
    #[serde(rename = "ZtdCorrelationId")]
    correlation_id: String,
    #[serde(rename = "CloudAssignedLanguage", skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(rename = "CloudAssignedRegion", skip_serializing_if = "Option::is_none")]
    region: Option<String>,
    #[serde(rename = "HybridJoinSkipDCConnectivityCheck", skip_serializing_if = "Option::is_none")]
    skip_dc_connectivity_check: Option<u8>,
}

// Embedded in the file as a compact JSON string
#[derive(Serialize)]
struct AadServerData<'a> {
    #[serde(rename = "ZeroTouchConfig")]
    zero_touch_config: ZeroTouchConfig<'a>,
}

#[derive(Serialize)]
struct ZeroTouchConfig<'a> {
    #[serde(rename = "CloudAssignedTenantUpn")]
    tenant_upn: &'a str,
    #[serde(rename = "ForcedEnrollment")]
    forced_enrollment: u8,
    #[serde(rename = "CloudAssignedTenantDomain")]
    tenant_domain: &'a str,
}

impl AutopilotConfigurationFile {
    pub fn new(profile_id: &str, options: &ProfileOptions, tenant_id: &str, tenant_domain: &str) -> Result<Self, serde_json::Error> {
        let aad_server_data = serde_json::to_string(&AadServerData {
            zero_touch_config: ZeroTouchConfig {
                tenant_upn: "",
                forced_enrollment: 1,
                tenant_domain,
            },
        })?;

        let language = options.language.as_deref().filter(|language| options.skip_keyboard && !language.is_empty());
        let hybrid = options.join_mode == JoinMode::Hybrid;

        Ok(AutopilotConfigurationFile {
            tenant_id: tenant_id.to_string(),
            device_name: options.device_name_template.clone(),
            update_timeout: UPDATE_TIMEOUT_MS,
            update_disabled: 1,
            forced_enrollment: 1,
            version: CONFIGURATION_FILE_VERSION,
            comment: format!("Profile {}", options.display_name),
            aad_server_data,
            tenant_domain: tenant_domain.to_string(),
            domain_join_method: u8::from(hybrid),
            oobe_config: oobe_config(options),
            correlation_id: profile_id.to_string(),
            language: language.map(str::to_string),
            region: language.filter(|language| *language != OS_DEFAULT_LANGUAGE).map(str::to_string),
            skip_dc_connectivity_check: (hybrid && options.skip_connectivity_check).then_some(1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DeviceUsageType, UserType};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn configuration_file_for_a_cloud_joined_profile() -> Result<(), serde_json::Error> {
        let options = ProfileOptions {
            display_name: "Kiosks".to_string(),
            user_type: UserType::Standard,
            device_usage: DeviceUsageType::Shared,
            hide_eula: true,
            hide_privacy: true,
            skip_keyboard: true,
            language: Some("en-US".to_string()),
            device_name_template: Some("KIOSK-%SERIAL%".to_string()),
            ..Default::default()
        };

        let file = AutopilotConfigurationFile::new("profile-id", &options, "tenant-id", "contoso.com")?;

        assert_eq!(
            serde_json::to_value(&file)?,
            json!({
                "CloudAssignedTenantId": "tenant-id",
                "CloudAssignedDeviceName": "KIOSK-%SERIAL%",
                "CloudAssignedAutopilotUpdateTimeout": 1800000,
                "CloudAssignedAutopilotUpdateDisabled": 1,
                "CloudAssignedForcedEnrollment": 1,
                "Version": 2049,
                "Comment_File": "Profile Kiosks",
                "CloudAssignedAadServerData": "{\"ZeroTouchConfig\":{\"CloudAssignedTenantUpn\":\"\",\"ForcedEnrollment\":1,\"CloudAssignedTenantDomain\":\"contoso.com\"}}",
                "CloudAssignedTenantDomain": "contoso.com",
                "CloudAssignedDomainJoinMethod": 0,
                "CloudAssignedOobeConfig": 1406,
                "ZtdCorrelationId": "profile-id",
                "CloudAssignedLanguage": "en-US",
                "CloudAssignedRegion": "en-US"
            })
        );

        Ok(())
    }

    #[test]
    fn language_is_only_written_when_the_keyboard_page_is_skipped() -> Result<(), serde_json::Error> {
        let options = ProfileOptions {
            language: Some("en-US".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(AutopilotConfigurationFile::new("id", &options, "tenant", "contoso.com")?)?;

        assert!(value.get("CloudAssignedLanguage").is_none());
        assert!(value.get("CloudAssignedRegion").is_none());
        assert!(value.get("CloudAssignedDeviceName").is_none());
        Ok(())
    }

    #[test]
    fn os_default_language_has_no_region() -> Result<(), serde_json::Error> {
        let options = ProfileOptions {
            skip_keyboard: true,
            language: Some("os-default".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(AutopilotConfigurationFile::new("id", &options, "tenant", "contoso.com")?)?;

        assert_eq!(value["CloudAssignedLanguage"], "os-default");
        assert!(value.get("CloudAssignedRegion").is_none());
        Ok(())
    }

    #[test]
    fn hybrid_profiles_use_the_domain_join_method() -> Result<(), serde_json::Error> {
        let options = ProfileOptions {
            join_mode: JoinMode::Hybrid,
            skip_connectivity_check: true,
            ..Default::default()
        };

        let value = serde_json::to_value(AutopilotConfigurationFile::new("id", &options, "tenant", "contoso.com")?)?;

        assert_eq!(value["CloudAssignedDomainJoinMethod"], 1);
        assert_eq!(value["HybridJoinSkipDCConnectivityCheck"], 1);
        Ok(())
    }
}

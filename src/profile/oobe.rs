use crate::domain::{DeviceUsageType, UserType};
use crate::profile::ProfileOptions;

// Bits of CloudAssignedOobeConfig, fixed by the Autopilot provisioning contract
const OOBE_BASE: u32 = 8 | 256;
const OOBE_STANDARD_USER: u32 = 2;
const OOBE_HIDE_PRIVACY: u32 = 4;
const OOBE_HIDE_EULA: u32 = 16;
const OOBE_SHARED_DEVICE: u32 = 32 | 64;
const OOBE_SKIP_KEYBOARD: u32 = 1024;

/// Encodes the out-of-box experience options as the `CloudAssignedOobeConfig` bit flags.
pub fn oobe_config(options: &ProfileOptions) -> u32 {
    let mut config = OOBE_BASE;

    match options.user_type {
        UserType::Standard => config |= OOBE_STANDARD_USER,
        UserType::Administrator | UserType::UnknownFutureValue => {}
    }
    if options.hide_privacy {
        config |= OOBE_HIDE_PRIVACY;
    }
    if options.hide_eula {
        config |= OOBE_HIDE_EULA;
    }
    if options.skip_keyboard {
        config |= OOBE_SKIP_KEYBOARD;
    }
    match options.device_usage {
        DeviceUsageType::Shared => config |= OOBE_SHARED_DEVICE,
        DeviceUsageType::SingleUser | DeviceUsageType::UnknownFutureValue => {}
    }

    config
}

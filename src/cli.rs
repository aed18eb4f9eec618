use crate::domain::{DevicePropertiesUpdate, DeviceUsageType, EnrollmentStatusPageSettings, EnrollmentStatusPageUpdate, JoinMode, UserType};
use crate::profile::{ProfileOptions, ProfileUpdate};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

/// Manage Windows Autopilot devices, deployment profiles and enrollment status pages
#[derive(Parser, Debug)]
#[command(name = "autopilot", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// More logging on stderr, repeat for trace output
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Directory (tenant) id, overrides the configuration
    #[arg(long, global = true)]
    pub tenant: Option<String>,

    /// Application (client) id, overrides the configuration
    #[arg(long, global = true)]
    pub app_id: Option<String>,

    /// Application secret, enables the client credentials sign-in
    #[arg(long, global = true, env = "AUTOPILOT_APP_SECRET", hide_env_values = true)]
    pub app_secret: Option<String>,

    /// Sign in as a user with a device code, even when a secret is configured
    #[arg(long, global = true)]
    pub interactive: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Registered Autopilot devices
    Device(DeviceArgs),

    /// Import status records
    Imported(ImportedArgs),

    /// Import devices from a hardware hash CSV file and wait for the result
    Import(ImportArgs),

    /// Deployment profiles and their group assignments
    Profile(ProfileArgs),

    /// Enrollment status pages
    Esp(EspArgs),

    /// Trigger a sync with the Autopilot service
    Sync,

    /// Show the state of the last sync
    SyncInfo,

    /// List Autopilot deployment events
    Events,
}

// ==================== Device ====================

#[derive(Args, Debug)]
pub struct DeviceArgs {
    #[command(subcommand)]
    pub command: DeviceCommands,
}

#[derive(Subcommand, Debug)]
pub enum DeviceCommands {
    /// List all devices
    List,

    /// Show one device
    Get {
        id: String,

        /// Include the assigned and intended deployment profiles
        #[arg(long)]
        expand: bool,
    },

    /// Find devices by serial number
    Find { serial_number: String },

    /// Change the user, group tag or display name of a device
    Set(DeviceSetArgs),

    /// Delete a device
    Delete { id: String },
}

#[derive(Args, Debug)]
pub struct DeviceSetArgs {
    pub id: String,

    /// User principal name to assign
    #[arg(long)]
    pub user: Option<String>,

    /// Friendly name shown for the assigned user
    #[arg(long)]
    pub addressable_name: Option<String>,

    #[arg(long)]
    pub group_tag: Option<String>,

    #[arg(long)]
    pub display_name: Option<String>,
}

impl From<DeviceSetArgs> for DevicePropertiesUpdate {
    fn from(args: DeviceSetArgs) -> Self {
        DevicePropertiesUpdate {
            user_principal_name: args.user,
            addressable_user_name: args.addressable_name,
            group_tag: args.group_tag,
            display_name: args.display_name,
        }
    }
}

// ==================== Imported ====================

#[derive(Args, Debug)]
pub struct ImportedArgs {
    #[command(subcommand)]
    pub command: ImportedCommands,
}

#[derive(Subcommand, Debug)]
pub enum ImportedCommands {
    /// List all import status records
    List,

    /// Show one import status record
    Get { id: String },

    /// Find import status records by serial number
    Find { serial_number: String },

    /// Submit a single device without waiting for the result
    Add(ImportedAddArgs),

    /// Delete an import status record
    Delete { id: String },
}

#[derive(Args, Debug)]
pub struct ImportedAddArgs {
    #[arg(long)]
    pub serial_number: String,

    /// Base64 hardware hash
    #[arg(long)]
    pub hash: String,

    #[arg(long)]
    pub group_tag: Option<String>,

    /// User principal name to assign
    #[arg(long)]
    pub user: Option<String>,
}

// ==================== Import ====================

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// CSV file with serial numbers and hardware hashes
    #[arg(long)]
    pub csv: PathBuf,

    /// Group tag for every device, replaces the tags in the file
    #[arg(long)]
    pub group_tag: Option<String>,

    /// Trigger an Autopilot sync once the import finished
    #[arg(long)]
    pub sync: bool,
}

// ==================== Profile ====================

#[derive(Args, Debug)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommands,
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// List all deployment profiles
    List,

    /// Show one deployment profile
    Get { id: String },

    /// Create a deployment profile
    Create(ProfileCreateArgs),

    /// Change the supplied settings of a deployment profile
    Update(ProfileUpdateArgs),

    /// Delete a deployment profile
    Delete { id: String },

    /// List the devices a profile is assigned to
    Devices { id: String },

    /// Write the offline provisioning file of a profile
    Export {
        id: String,

        /// Target file, printed to stdout when absent
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Assign a profile to a group
    Assign { id: String, group_id: String },

    /// Remove a profile assignment from a group
    Unassign { id: String, group_id: String },

    /// List the group assignments of a profile
    Assignments { id: String },
}

#[derive(Args, Debug)]
pub struct ProfileCreateArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long, value_enum, default_value = "azure-ad")]
    pub join: JoinMode,

    #[arg(long, value_enum, default_value = "standard")]
    pub user_type: UserType,

    #[arg(long, value_enum, default_value = "single-user")]
    pub usage: DeviceUsageType,

    #[arg(long)]
    pub hide_eula: bool,

    #[arg(long)]
    pub hide_privacy: bool,

    /// Skip the keyboard page, the language is applied automatically
    #[arg(long)]
    pub skip_keyboard: bool,

    #[arg(long)]
    pub hide_escape_link: bool,

    /// Locale such as `nl-NL`, or `os-default`
    #[arg(long)]
    pub language: Option<String>,

    /// Device name template such as `LPT-%SERIAL%`
    #[arg(long)]
    pub device_name: Option<String>,

    /// Allow technician pre-provisioning
    #[arg(long)]
    pub white_glove: bool,

    /// Skip the domain controller connectivity check, hybrid join only
    #[arg(long)]
    pub skip_connectivity_check: bool,

    /// Convert targeted devices to Autopilot
    #[arg(long)]
    pub extract_hardware_hash: bool,
}

impl From<ProfileCreateArgs> for ProfileOptions {
    fn from(args: ProfileCreateArgs) -> Self {
        ProfileOptions {
            display_name: args.name,
            description: args.description,
            join_mode: args.join,
            user_type: args.user_type,
            device_usage: args.usage,
            hide_eula: args.hide_eula,
            hide_privacy: args.hide_privacy,
            skip_keyboard: args.skip_keyboard,
            hide_escape_link: args.hide_escape_link,
            language: args.language,
            device_name_template: args.device_name,
            white_glove: args.white_glove,
            skip_connectivity_check: args.skip_connectivity_check,
            extract_hardware_hash: args.extract_hardware_hash,
        }
    }
}

/// Toggles take an explicit `true` or `false`, omitted settings keep their current value.
#[derive(Args, Debug)]
pub struct ProfileUpdateArgs {
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long, value_enum)]
    pub user_type: Option<UserType>,

    #[arg(long, value_enum)]
    pub usage: Option<DeviceUsageType>,

    #[arg(long)]
    pub hide_eula: Option<bool>,

    #[arg(long)]
    pub hide_privacy: Option<bool>,

    #[arg(long)]
    pub skip_keyboard: Option<bool>,

    #[arg(long)]
    pub hide_escape_link: Option<bool>,

    #[arg(long)]
    pub language: Option<String>,

    #[arg(long)]
    pub device_name: Option<String>,

    #[arg(long)]
    pub white_glove: Option<bool>,

    #[arg(long)]
    pub skip_connectivity_check: Option<bool>,

    #[arg(long)]
    pub extract_hardware_hash: Option<bool>,
}

impl From<ProfileUpdateArgs> for ProfileUpdate {
    fn from(args: ProfileUpdateArgs) -> Self {
        ProfileUpdate {
            display_name: args.name,
            description: args.description,
            user_type: args.user_type,
            device_usage: args.usage,
            hide_eula: args.hide_eula,
            hide_privacy: args.hide_privacy,
            skip_keyboard: args.skip_keyboard,
            hide_escape_link: args.hide_escape_link,
            language: args.language,
            device_name_template: args.device_name,
            white_glove: args.white_glove,
            skip_connectivity_check: args.skip_connectivity_check,
            extract_hardware_hash: args.extract_hardware_hash,
        }
    }
}

// ==================== Enrollment status page ====================

#[derive(Args, Debug)]
pub struct EspArgs {
    #[command(subcommand)]
    pub command: EspCommands,
}

#[derive(Subcommand, Debug)]
pub enum EspCommands {
    /// List all enrollment status pages
    List,

    /// Show one enrollment status page
    Get { id: String },

    /// Create an enrollment status page
    Create(EspCreateArgs),

    /// Change the supplied settings of an enrollment status page
    Update(EspUpdateArgs),

    /// Delete an enrollment status page
    Delete { id: String },
}

#[derive(Args, Debug)]
pub struct EspCreateArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub description: Option<String>,

    #[command(flatten)]
    pub settings: EspSettingsArgs,
}

#[derive(Args, Debug)]
pub struct EspUpdateArgs {
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[command(flatten)]
    pub settings: EspSettingsArgs,
}

#[derive(Args, Debug, Default)]
pub struct EspSettingsArgs {
    #[arg(long)]
    pub show_progress: Option<bool>,

    /// Stop the user from retrying a failed setup
    #[arg(long)]
    pub block_retry: Option<bool>,

    #[arg(long)]
    pub allow_reset: Option<bool>,

    #[arg(long)]
    pub allow_log_collection: Option<bool>,

    /// Let the user continue when an install failed
    #[arg(long)]
    pub allow_use: Option<bool>,

    #[arg(long)]
    pub error_message: Option<String>,

    #[arg(long)]
    pub timeout_minutes: Option<i32>,
}

impl From<EspSettingsArgs> for EnrollmentStatusPageSettings {
    fn from(args: EspSettingsArgs) -> Self {
        let defaults = EnrollmentStatusPageSettings::default();
        EnrollmentStatusPageSettings {
            show_installation_progress: args.show_progress.unwrap_or(defaults.show_installation_progress),
            block_device_setup_retry_by_user: args.block_retry.unwrap_or(defaults.block_device_setup_retry_by_user),
            allow_device_reset_on_install_failure: args.allow_reset.unwrap_or(defaults.allow_device_reset_on_install_failure),
            allow_log_collection_on_install_failure: args.allow_log_collection.unwrap_or(defaults.allow_log_collection_on_install_failure),
            custom_error_message: args.error_message.or(defaults.custom_error_message),
            install_progress_timeout_in_minutes: args.timeout_minutes.or(defaults.install_progress_timeout_in_minutes),
            allow_device_use_on_install_failure: args.allow_use.unwrap_or(defaults.allow_device_use_on_install_failure),
        }
    }
}

impl From<EspUpdateArgs> for EnrollmentStatusPageUpdate {
    fn from(args: EspUpdateArgs) -> Self {
        let settings = args.settings;
        EnrollmentStatusPageUpdate {
            display_name: args.name,
            description: args.description,
            show_installation_progress: settings.show_progress,
            block_device_setup_retry_by_user: settings.block_retry,
            allow_device_reset_on_install_failure: settings.allow_reset,
            allow_log_collection_on_install_failure: settings.allow_log_collection,
            custom_error_message: settings.error_message,
            install_progress_timeout_in_minutes: settings.timeout_minutes,
            allow_device_use_on_install_failure: settings.allow_use,
        }
    }
}

mod body;
mod configuration_file;
mod oobe;
mod options;
mod update;

pub use body::DeploymentProfileBody;
pub use configuration_file::AutopilotConfigurationFile;
pub use oobe::oobe_config;
pub use options::ProfileOptions;
pub use update::ProfileUpdate;

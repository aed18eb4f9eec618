mod autopilot_event;
mod deployment_profile;
mod device_identity;
mod enrollment_status_page;
mod imported_device;
mod organization;
mod profile_assignment;
mod sync_info;

pub use autopilot_event::AutopilotEvent;
pub use deployment_profile::{DeploymentProfile, DeviceUsageType, JoinMode, OutOfBoxExperienceSettings, UserType};
pub use device_identity::{DeviceIdentity, DevicePropertiesUpdate};
pub use enrollment_status_page::{EnrollmentStatusPage, EnrollmentStatusPageBody, EnrollmentStatusPageSettings, EnrollmentStatusPageUpdate};
pub use imported_device::{ImportStatus, ImportedDevice, ImportedDeviceRequest};
pub use organization::Organization;
pub use profile_assignment::{GroupAssignmentRequest, ProfileAssignment, assignment_id};
pub use sync_info::SyncInfo;

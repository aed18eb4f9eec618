use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncInfo {
    pub last_sync_date_time: Option<DateTime<Utc>>,
    pub last_manual_sync_trigger_date_time: Option<DateTime<Utc>>,
    pub sync_status: Option<String>,
}

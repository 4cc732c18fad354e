use serde::{Deserialize, Serialize};

/// A single timestamped alert attributed to a service. `alert_ts` is an
/// RFC3339 string and is compared lexically, so producers must use a
/// consistent zero-padded UTC representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertRecord {
    pub alert_id: String,
    pub service_id: String,
    pub model: String,
    pub alert_type: String,
    pub alert_ts: String,
    pub severity: String,
    pub team_slack: String,
}

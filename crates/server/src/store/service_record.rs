use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub service_id: String,
    pub service_name: String,
}

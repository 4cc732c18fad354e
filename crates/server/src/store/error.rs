use std::fmt;

use crate::snapshot::SnapshotError;

#[derive(Debug)]
pub enum StoreError {
    Persistence(SnapshotError),
    ServiceNotFound,
    NoAlertsInRange,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Persistence(e) => write!(f, "persistence: {e}"),
            Self::ServiceNotFound => write!(f, "service not found"),
            Self::NoAlertsInRange => write!(f, "no alerts in the requested range"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<SnapshotError> for StoreError {
    fn from(e: SnapshotError) -> Self {
        Self::Persistence(e)
    }
}

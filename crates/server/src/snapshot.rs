use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::store::{AlertRecord, ServiceRecord};

#[derive(Debug)]
pub enum SnapshotError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Serialize(e) => write!(f, "serialize: {e}"),
        }
    }
}

impl std::error::Error for SnapshotError {}

impl From<std::io::Error> for SnapshotError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e)
    }
}

#[derive(Serialize)]
struct SnapshotFile<'a> {
    data: &'a HashMap<String, ServiceRecord>,
    alerts: &'a HashMap<String, Vec<AlertRecord>>,
}

/// Writes the full store contents to a single JSON file, truncating any
/// previous snapshot. The file is a point-in-time copy, never a log.
pub struct SnapshotWriter {
    path: PathBuf,
}

impl SnapshotWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn write(
        &self,
        services: &HashMap<String, ServiceRecord>,
        alerts: &HashMap<String, Vec<AlertRecord>>,
    ) -> Result<(), SnapshotError> {
        let bytes = serde_json::to_vec(&SnapshotFile {
            data: services,
            alerts,
        })?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

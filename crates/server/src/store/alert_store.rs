use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::alert_record::AlertRecord;
use super::error::StoreError;
use super::service_record::ServiceRecord;
use crate::snapshot::SnapshotWriter;

#[derive(Default)]
struct StoreInner {
    services: HashMap<String, ServiceRecord>,
    alerts: HashMap<String, Vec<AlertRecord>>,
}

/// In-memory index of alerts keyed by service. Both maps are always mutated
/// together, so a single coarse lock guards them as one unit.
#[derive(Clone)]
pub struct AlertStore {
    inner: Arc<RwLock<StoreInner>>,
    snapshot: Arc<SnapshotWriter>,
}

impl AlertStore {
    pub fn new(snapshot: SnapshotWriter) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner::default())),
            snapshot: Arc::new(snapshot),
        }
    }

    /// Appends the alert and rewrites the snapshot before returning. The
    /// write lock is held across the snapshot write, so submissions are
    /// fully serialized. A failed snapshot fails the submission without
    /// rolling back the in-memory write.
    pub async fn submit(
        &self,
        record: AlertRecord,
        service_name: &str,
    ) -> Result<String, StoreError> {
        let mut inner = self.inner.write().await;

        inner.services.insert(
            record.service_id.clone(),
            ServiceRecord {
                service_id: record.service_id.clone(),
                service_name: service_name.to_string(),
            },
        );

        let alert_id = record.alert_id.clone();
        inner
            .alerts
            .entry(record.service_id.clone())
            .or_default()
            .push(record);

        self.snapshot.write(&inner.services, &inner.alerts).await?;

        Ok(alert_id)
    }

    /// Returns the service's alerts with `start_ts <= alert_ts <= end_ts`,
    /// in insertion order. Bounds are compared as strings; RFC3339 timestamps
    /// in a consistent representation order correctly this way.
    pub async fn query(
        &self,
        service_id: &str,
        start_ts: &str,
        end_ts: &str,
    ) -> Result<Vec<AlertRecord>, StoreError> {
        let inner = self.inner.read().await;

        let alerts = inner
            .alerts
            .get(service_id)
            .ok_or(StoreError::ServiceNotFound)?;

        let matched: Vec<AlertRecord> = alerts
            .iter()
            .filter(|a| a.alert_ts.as_str() >= start_ts && a.alert_ts.as_str() <= end_ts)
            .cloned()
            .collect();

        if matched.is_empty() {
            return Err(StoreError::NoAlertsInRange);
        }
        Ok(matched)
    }
}

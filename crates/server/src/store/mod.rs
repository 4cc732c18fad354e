mod alert_record;
mod alert_store;
mod error;
mod service_record;

pub use alert_record::AlertRecord;
pub use alert_store::AlertStore;
pub use error::StoreError;
pub use service_record::ServiceRecord;

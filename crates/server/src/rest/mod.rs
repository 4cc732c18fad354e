mod alerts;
mod health;
mod router;

pub use router::{router, AppState};

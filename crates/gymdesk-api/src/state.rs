use std::sync::Arc;

use jiff::tz::TimeZone;

use gymdesk_storage::store::ObjectStore;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ObjectStore>,
    /// The studio's time zone. Decides which calendar day an assessment
    /// belongs to, and so the client's age on it.
    pub timezone: TimeZone,
}

impl AppState {
    pub fn new(store: Arc<dyn ObjectStore>, timezone: TimeZone) -> Self {
        Self { store, timezone }
    }
}

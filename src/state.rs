use std::sync::Arc;

use crate::config::Settings;
use crate::db::Store;

/// Shared application state, constructed once at startup and handed to every
/// component by injection.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,

    pub store: Store,
}

impl AppState {
    #[must_use]
    pub fn new(settings: Settings, store: Store) -> Self {
        Self {
            settings: Arc::new(settings),
            store,
        }
    }
}

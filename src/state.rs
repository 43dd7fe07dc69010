use crate::db::{LogStore, MemoryStore, ScreeningStore};
use crate::time_utils;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub logs: Arc<dyn LogStore>,
    pub screenings: Arc<dyn ScreeningStore>,
    pub timezone: String,
}

impl AppState {
    pub fn in_memory(timezone: impl Into<String>) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            logs: store.clone(),
            screenings: store,
            timezone: timezone.into(),
        }
    }

    /// Current calendar date in the configured zone.
    pub fn today(&self) -> NaiveDate {
        time_utils::local_today(&self.timezone, Utc::now())
    }
}

pub type SharedState = Arc<AppState>;

//! Storage layer: entity models, the record store abstraction, and the
//! repositories handlers call into.
//!
//! All state lives behind [`Database`], a cheaply cloneable handle holding one
//! store per resource. The default backing is process-local memory; any type
//! implementing [`store::RecordStore`] / [`store::UserStore`] can be swapped in
//! without touching the repositories.

use std::sync::Arc;

pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

use models::alarm::Alarm;
use models::calendar_event::CalendarEvent;
use models::pattern::Pattern;
use store::memory::{MemoryStore, MemoryUserStore};
use store::{RecordStore, UserStore};

/// Handle to every store the application uses.
#[derive(Clone)]
pub struct Database {
    pub users: Arc<dyn UserStore>,
    pub patterns: Arc<dyn RecordStore<Pattern>>,
    pub calendar_events: Arc<dyn RecordStore<CalendarEvent>>,
    pub alarms: Arc<dyn RecordStore<Alarm>>,
}

impl Database {
    /// Create a database backed entirely by in-memory maps.
    ///
    /// State is lost when the process exits and is not shared between
    /// processes.
    pub fn in_memory() -> Self {
        tracing::debug!("Initializing in-memory stores");
        Self {
            users: Arc::new(MemoryUserStore::new()),
            patterns: Arc::new(MemoryStore::new()),
            calendar_events: Arc::new(MemoryStore::new()),
            alarms: Arc::new(MemoryStore::new()),
        }
    }
}

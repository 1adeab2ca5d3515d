//! Application state for the web layer.

use std::sync::Arc;

use crate::resolver::Resolver;
use crate::timetable::Timetable;

/// Shared application state.
///
/// The timetable is immutable after startup, so handlers share it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Resolver,
}

impl AppState {
    /// Create a new app state around a loaded timetable.
    pub fn new(timetable: Arc<Timetable>) -> Self {
        Self {
            resolver: Resolver::new(timetable),
        }
    }
}

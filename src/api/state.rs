//! API server state

use std::sync::Arc;

use crate::types::Quran;

/// API server state
///
/// Cloned into every handler; the dataset itself is shared, never copied.
#[derive(Clone)]
pub struct AppState {
    pub quran: Arc<Quran>,
}

impl AppState {
    pub fn new(quran: Arc<Quran>) -> Self {
        Self { quran }
    }
}

//! Application state for the web layer.

use std::sync::Arc;

use crate::airports::AirportDirectory;
use crate::plans::{PlanStore, PlanStoreConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Issued flight plans
    pub plans: Arc<PlanStore>,
    /// Airport positions for distance summaries
    pub airports: AirportDirectory,
}

impl AppState {
    /// Create a new app state.
    pub fn new(plans: PlanStore, airports: AirportDirectory) -> Self {
        Self {
            plans: Arc::new(plans),
            airports,
        }
    }

    /// State with an empty plan store built from `config` and the bundled
    /// airport table.
    pub fn with_config(config: &PlanStoreConfig) -> Self {
        Self::new(PlanStore::new(config), AirportDirectory::bundled())
    }
}

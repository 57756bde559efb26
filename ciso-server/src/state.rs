//! Application state

use ciso_core::MetricsGenerator;
use std::sync::Arc;
use std::time::Instant;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The metrics generator, owner of the seeded random stream
    pub generator: Arc<MetricsGenerator>,

    /// Server start time
    pub start_time: Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(generator: Arc<MetricsGenerator>) -> Self {
        Self {
            generator,
            start_time: Instant::now(),
        }
    }

    /// Get uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(MetricsGenerator::new()))
    }
}

//! CISO Core - Synthetic security-posture metrics
//!
//! This crate produces the data behind the CISO dashboard: an executive KPI
//! snapshot, a daily incident trend and a static controls coverage map. The
//! only shared state is the seeded pseudo-random stream owned by
//! [`MetricsGenerator`].

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod clock;
pub mod controls;
pub mod error;
pub mod generator;
pub mod incidents;
pub mod kpi;

pub use clock::{Clock, FixedClock, SystemClock};
pub use controls::{CisCoverage, ControlsCoverage, NistCoverage};
pub use error::{MetricsError, Result};
pub use generator::{DashboardMetrics, MetricsGenerator, DEFAULT_SEED};
pub use incidents::{IncidentPoint, DEFAULT_TREND_DAYS, MAX_DAILY_INCIDENTS};
pub use kpi::ExecutiveKpis;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

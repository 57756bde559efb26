//! CISO Dashboard HTTP Server - read-only JSON API over synthetic posture metrics
//!
//! This crate exposes the `ciso-core` generator to the dashboard front end.

pub mod api;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod metrics;
pub mod router;
pub mod state;

pub use api::HealthResponse;
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use router::app;
pub use state::AppState;

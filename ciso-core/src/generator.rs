//! Metrics generator
//!
//! [`MetricsGenerator`] owns the process-lifetime random stream and the clock.
//! It is constructed once at startup and shared (behind an `Arc`) by every
//! caller, so the sequence of incident draws depends only on the seed and the
//! order of calls.

use crate::clock::{Clock, SystemClock};
use crate::controls::ControlsCoverage;
use crate::error::Result;
use crate::incidents::{self, IncidentPoint, DEFAULT_TREND_DAYS};
use crate::kpi::ExecutiveKpis;
use parking_lot::Mutex;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Seed used when none is supplied
pub const DEFAULT_SEED: u64 = 42;

/// Everything the dashboard renders, in one payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    /// Executive KPI snapshot
    pub kpis: ExecutiveKpis,
    /// Incident trend over the default window
    pub incidents: Vec<IncidentPoint>,
    /// Controls coverage map
    pub controls: ControlsCoverage,
}

/// Produces dashboard metrics from a seeded random stream and a clock
pub struct MetricsGenerator {
    rng: Mutex<Box<dyn RngCore + Send>>,
    clock: Arc<dyn Clock>,
    draws: AtomicU64,
}

impl MetricsGenerator {
    /// Generator seeded with [`DEFAULT_SEED`], reading the system clock
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Generator over a ChaCha8 stream seeded with `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Generator drawing from a caller-supplied random source
    pub fn with_rng<R>(rng: R) -> Self
    where
        R: RngCore + Send + 'static,
    {
        Self {
            rng: Mutex::new(Box::new(rng)),
            clock: Arc::new(SystemClock),
            draws: AtomicU64::new(0),
        }
    }

    /// Replace the clock
    pub fn with_clock<C>(mut self, clock: C) -> Self
    where
        C: Clock + 'static,
    {
        self.clock = Arc::new(clock);
        self
    }

    /// KPI snapshot stamped with the current time
    pub fn executive_kpis(&self) -> ExecutiveKpis {
        ExecutiveKpis::at(self.clock.now())
    }

    /// Incident counts for the `days` days ending today (UTC), oldest first.
    ///
    /// `days == 0` yields an empty trend. The lock on the random stream is
    /// held for the whole call, so concurrent callers never interleave draws.
    pub fn incident_trend(&self, days: u32) -> Result<Vec<IncidentPoint>> {
        let today = self.clock.now().date_naive();
        let points = {
            let mut rng = self.rng.lock();
            incidents::draw_trend(&mut *rng, today, days)?
        };

        let total = self
            .draws
            .fetch_add(points.len() as u64, Ordering::Relaxed)
            + points.len() as u64;
        debug!(days, draws_total = total, "Generated incident trend");

        Ok(points)
    }

    /// Incident trend over [`DEFAULT_TREND_DAYS`]
    pub fn default_incident_trend(&self) -> Result<Vec<IncidentPoint>> {
        self.incident_trend(DEFAULT_TREND_DAYS)
    }

    /// Static controls coverage map
    pub fn controls_coverage(&self) -> ControlsCoverage {
        ControlsCoverage::current()
    }

    /// KPIs, default incident trend and controls, generated in that order
    pub fn dashboard(&self) -> Result<DashboardMetrics> {
        Ok(DashboardMetrics {
            kpis: self.executive_kpis(),
            incidents: self.default_incident_trend()?,
            controls: self.controls_coverage(),
        })
    }

    /// Incident counts drawn since construction
    pub fn draws(&self) -> u64 {
        self.draws.load(Ordering::Relaxed)
    }
}

impl Default for MetricsGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MetricsGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricsGenerator")
            .field("draws", &self.draws())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::MetricsError;
    use chrono::{NaiveDate, TimeZone, Utc};
    use std::thread;

    fn fixed_generator(seed: u64) -> MetricsGenerator {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 8, 15, 0).unwrap();
        MetricsGenerator::with_seed(seed).with_clock(FixedClock(now))
    }

    #[test]
    fn test_kpis_use_clock() {
        let generator = fixed_generator(DEFAULT_SEED);
        let kpis = generator.executive_kpis();
        assert_eq!(
            kpis.last_updated,
            Utc.with_ymd_and_hms(2024, 3, 1, 8, 15, 0).unwrap()
        );
        assert!(kpis.is_consistent());
    }

    #[test]
    fn test_trend_ends_today() {
        let generator = fixed_generator(DEFAULT_SEED);
        let trend = generator.default_incident_trend().unwrap();
        assert_eq!(trend.len(), 30);
        assert_eq!(
            trend.last().unwrap().date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(generator.draws(), 30);
    }

    #[test]
    fn test_fresh_generators_replay_the_same_stream() {
        let first = fixed_generator(DEFAULT_SEED);
        let second = fixed_generator(DEFAULT_SEED);

        for days in [30, 7, 1, 30] {
            assert_eq!(
                first.incident_trend(days).unwrap(),
                second.incident_trend(days).unwrap()
            );
        }
    }

    #[test]
    fn test_stream_advances_between_calls() {
        let generator = fixed_generator(DEFAULT_SEED);
        let replay = fixed_generator(DEFAULT_SEED);

        let _ = generator.incident_trend(5).unwrap();
        let second = generator.incident_trend(5).unwrap();
        let combined = replay.incident_trend(10).unwrap();

        let tail: Vec<u8> = combined[5..].iter().map(|p| p.incidents).collect();
        let drawn: Vec<u8> = second.iter().map(|p| p.incidents).collect();
        assert_eq!(tail, drawn);
    }

    #[test]
    fn test_injected_rng() {
        let generator = MetricsGenerator::with_rng(rand::rngs::mock::StepRng::new(0, 0));
        let trend = generator.incident_trend(10).unwrap();
        assert_eq!(trend.len(), 10);
        let first = trend[0].incidents;
        assert!(trend.iter().all(|p| p.incidents == first));
    }

    #[test]
    fn test_out_of_range_trend_errors() {
        let generator = fixed_generator(DEFAULT_SEED);
        let err = generator.incident_trend(u32::MAX).unwrap_err();
        assert!(matches!(err, MetricsError::DateOutOfRange { .. }));
        assert_eq!(generator.draws(), 0);
    }

    #[test]
    fn test_dashboard_bundle() {
        let generator = fixed_generator(DEFAULT_SEED);
        let dashboard = generator.dashboard().unwrap();
        assert_eq!(dashboard.incidents.len(), 30);
        assert_eq!(dashboard.controls, ControlsCoverage::current());
        assert_eq!(dashboard.kpis, generator.executive_kpis());

        let json = serde_json::to_value(&dashboard).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3);
        assert!(json.get("kpis").is_some());
        assert!(json.get("incidents").is_some());
        assert!(json.get("controls").is_some());
    }

    #[test]
    fn test_concurrent_calls_do_not_interleave() {
        let generator = Arc::new(fixed_generator(DEFAULT_SEED));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let generator = Arc::clone(&generator);
                thread::spawn(move || generator.incident_trend(30).unwrap())
            })
            .collect();
        let mut results: Vec<Vec<u8>> = handles
            .into_iter()
            .map(|h| h.join().unwrap().iter().map(|p| p.incidents).collect())
            .collect();

        // Each call's draws are a contiguous 30-draw block of the stream
        let replay = fixed_generator(DEFAULT_SEED);
        let mut expected: Vec<Vec<u8>> = (0..8)
            .map(|_| {
                replay
                    .incident_trend(30)
                    .unwrap()
                    .iter()
                    .map(|p| p.incidents)
                    .collect()
            })
            .collect();

        results.sort();
        expected.sort();
        assert_eq!(results, expected);
        assert_eq!(generator.draws(), 240);
    }
}

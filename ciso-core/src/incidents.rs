//! Daily incident trend

use crate::error::{MetricsError, Result};
use chrono::{Days, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of the trend served by the dashboard
pub const DEFAULT_TREND_DAYS: u32 = 30;

/// Upper bound (inclusive) of a single day's incident count
pub const MAX_DAILY_INCIDENTS: u8 = 9;

/// Incident count for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentPoint {
    /// Calendar date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,

    /// Incidents recorded that day
    pub incidents: u8,
}

/// Build `days` points ending at `today`, oldest first.
///
/// One count is drawn from `rng` per day, in date order. A zero-day trend is
/// empty and draws nothing. The date range is checked before any draw, so a
/// failed call leaves `rng` untouched.
pub fn draw_trend<R: Rng>(
    rng: &mut R,
    today: NaiveDate,
    days: u32,
) -> Result<Vec<IncidentPoint>> {
    if days == 0 {
        return Ok(Vec::new());
    }

    let span = u64::from(days - 1);
    let start = today
        .checked_sub_days(Days::new(span))
        .ok_or(MetricsError::DateOutOfRange {
            days: u64::from(days),
        })?;

    let points = start
        .iter_days()
        .take(days as usize)
        .map(|date| IncidentPoint {
            date,
            incidents: rng.gen_range(0..=MAX_DAILY_INCIDENTS),
        })
        .collect();

    Ok(points)
}

/// Sum of incidents over a trend
pub fn total(points: &[IncidentPoint]) -> u64 {
    points.iter().map(|p| u64::from(p.incidents)).sum()
}

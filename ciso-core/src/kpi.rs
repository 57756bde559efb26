//! Executive KPI snapshot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Headline posture indicators shown at the top of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutiveKpis {
    /// Aggregate risk score in [0, 1]
    pub overall_risk: f64,

    /// Findings not yet remediated
    pub open_findings: u32,

    /// Subset of `open_findings` rated critical
    pub critical_open: u32,

    /// Share of patches applied within SLA, in [0, 1]
    pub patch_sla_compliance: f64,

    /// Mean time to detect, in hours
    pub mean_time_to_detect_hours: f64,

    /// Mean time to respond, in hours
    pub mean_time_to_respond_hours: f64,

    /// When the snapshot was computed
    #[serde(with = "timestamp")]
    pub last_updated: DateTime<Utc>,
}

impl ExecutiveKpis {
    const OVERALL_RISK: f64 = 0.32;
    const OPEN_FINDINGS: u32 = 124;
    const CRITICAL_OPEN: u32 = 7;
    const PATCH_SLA_COMPLIANCE: f64 = 0.91;
    const MTTD_HOURS: f64 = 4.8;
    const MTTR_HOURS: f64 = 7.2;

    /// Snapshot of the synthetic KPI values stamped with `now`
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            overall_risk: Self::OVERALL_RISK,
            open_findings: Self::OPEN_FINDINGS,
            critical_open: Self::CRITICAL_OPEN,
            patch_sla_compliance: Self::PATCH_SLA_COMPLIANCE,
            mean_time_to_detect_hours: Self::MTTD_HOURS,
            mean_time_to_respond_hours: Self::MTTR_HOURS,
            last_updated: now,
        }
    }

    /// Checks the range and ordering constraints on the fields
    pub fn is_consistent(&self) -> bool {
        let unit = 0.0..=1.0;
        self.critical_open <= self.open_findings
            && unit.contains(&self.overall_risk)
            && unit.contains(&self.patch_sla_compliance)
            && self.mean_time_to_detect_hours >= 0.0
            && self.mean_time_to_respond_hours >= 0.0
    }
}

/// ISO-8601 UTC with microseconds and a literal `Z`, e.g. `2024-03-01T12:00:00.000000Z`
pub mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Render a timestamp
    pub fn format(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    /// Serialize with [`format`]
    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(value))
    }

    /// Parse any RFC 3339 timestamp and normalize it to UTC
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

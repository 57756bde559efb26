//! Controls coverage per security framework
//!
//! The content is static. Field order matches the order the dashboard lists
//! the categories in.

use serde::{Deserialize, Serialize};

/// Coverage for every tracked framework, keyed by framework name on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlsCoverage {
    /// CIS Critical Security Controls, counted by implementation state
    #[serde(rename = "CIS Controls v8.1")]
    pub cis: CisCoverage,

    /// NIST Cybersecurity Framework, coverage ratio per function
    #[serde(rename = "NIST CSF 2.0")]
    pub nist: NistCoverage,
}

/// Number of CIS safeguards in each implementation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CisCoverage {
    /// Safeguards fully implemented
    #[serde(rename = "Implemented")]
    pub implemented: u32,

    /// Safeguards being rolled out
    #[serde(rename = "In Progress")]
    pub in_progress: u32,

    /// Safeguards not yet started
    #[serde(rename = "Not Started")]
    pub not_started: u32,
}

/// Coverage ratio in [0, 1] for each NIST CSF function
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NistCoverage {
    /// Identify
    pub identify: f64,
    /// Protect
    pub protect: f64,
    /// Detect
    pub detect: f64,
    /// Respond
    pub respond: f64,
    /// Recover
    pub recover: f64,
}

impl ControlsCoverage {
    /// The synthetic coverage map
    pub fn current() -> Self {
        Self {
            cis: CisCoverage {
                implemented: 12,
                in_progress: 4,
                not_started: 2,
            },
            nist: NistCoverage {
                identify: 0.7,
                protect: 0.62,
                detect: 0.55,
                respond: 0.6,
                recover: 0.58,
            },
        }
    }
}

impl CisCoverage {
    /// Safeguards across all states
    pub fn total(&self) -> u32 {
        self.implemented + self.in_progress + self.not_started
    }

    /// Implemented share of all safeguards, 0 when nothing is tracked
    pub fn implemented_ratio(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => f64::from(self.implemented) / f64::from(total),
        }
    }
}

impl NistCoverage {
    /// Functions with their labels, in framework order
    pub fn functions(&self) -> [(&'static str, f64); 5] {
        [
            ("Identify", self.identify),
            ("Protect", self.protect),
            ("Detect", self.detect),
            ("Respond", self.respond),
            ("Recover", self.recover),
        ]
    }

    /// Unweighted mean across functions
    pub fn average(&self) -> f64 {
        let functions = self.functions();
        functions.iter().map(|(_, v)| v).sum::<f64>() / functions.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_string(&ControlsCoverage::current()).unwrap();
        assert_eq!(
            json,
            r#"{"CIS Controls v8.1":{"Implemented":12,"In Progress":4,"Not Started":2},"NIST CSF 2.0":{"Identify":0.7,"Protect":0.62,"Detect":0.55,"Respond":0.6,"Recover":0.58}}"#
        );
    }

    #[test]
    fn test_constant_across_calls() {
        assert_eq!(ControlsCoverage::current(), ControlsCoverage::current());
    }

    #[test]
    fn test_cis_totals() {
        let cis = ControlsCoverage::current().cis;
        assert_eq!(cis.total(), 18);
        assert!((cis.implemented_ratio() - 12.0 / 18.0).abs() < f64::EPSILON);

        let empty = CisCoverage {
            implemented: 0,
            in_progress: 0,
            not_started: 0,
        };
        assert_eq!(empty.implemented_ratio(), 0.0);
    }

    #[test]
    fn test_nist_ratios_in_unit_interval() {
        let nist = ControlsCoverage::current().nist;
        assert!(nist
            .functions()
            .iter()
            .all(|(_, v)| (0.0..=1.0).contains(v)));
        assert!((nist.average() - 0.61).abs() < 1e-9);
    }
}

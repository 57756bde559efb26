//! Error types for metrics generation

use thiserror::Error;

/// Main error type for metrics generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// The requested trend reaches past the representable calendar
    #[error("Date out of range: cannot build a {days}-day incident trend")]
    DateOutOfRange {
        /// Requested number of days
        days: u64,
    },
}

/// Result type alias for metrics operations
pub type Result<T> = std::result::Result<T, MetricsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_out_of_range_display() {
        let err = MetricsError::DateOutOfRange { days: 1_000_000_000 };
        assert_eq!(
            err.to_string(),
            "Date out of range: cannot build a 1000000000-day incident trend"
        );
    }
}

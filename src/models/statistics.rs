use serde::{Deserialize, Serialize};

/// Aggregate counts parsed from the test runner's summary lines.
///
/// Every field is optional: `None` means the summary line was not found,
/// which is not the same as a reported zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStatistics {
    pub tests_total: Option<u64>,
    pub tests_failed: Option<u64>,
    pub tests_passed: Option<u64>,
    pub suites_total: Option<u64>,
    pub suites_failed: Option<u64>,
    pub suites_passed: Option<u64>,
    pub elapsed_secs: Option<f64>,
}

impl RunStatistics {
    /// True when no summary line was recognized at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Rounded percentage of `part` over `total`, or `None` when `total` is zero.
pub fn percentage(part: u64, total: u64) -> Option<u64> {
    if total == 0 {
        return None;
    }
    Some((part as f64 / total as f64 * 100.0).round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(RunStatistics::default().is_empty());
    }

    #[test]
    fn test_reported_zero_is_not_empty() {
        let stats = RunStatistics { tests_failed: Some(0), ..Default::default() };
        assert!(!stats.is_empty());
    }

    #[test]
    fn test_percentage_rounds_to_nearest() {
        assert_eq!(percentage(2, 5), Some(40));
        assert_eq!(percentage(1, 3), Some(33));
        assert_eq!(percentage(2, 3), Some(67));
        assert_eq!(percentage(5, 5), Some(100));
    }

    #[test]
    fn test_percentage_zero_total_is_unavailable() {
        assert_eq!(percentage(0, 0), None);
        assert_eq!(percentage(3, 0), None);
    }

    #[test]
    fn test_percentage_of_saturated_counts() {
        assert_eq!(percentage(u64::MAX, u64::MAX), Some(100));
        assert_eq!(percentage(0, u64::MAX), Some(0));
    }
}

use std::sync::LazyLock;
use regex::{Captures, Regex};
use crate::models::statistics::RunStatistics;

static TESTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Tests:\s+(?:(\d+) failed, )?(?:\d+ skipped, )?(?:\d+ todo, )?(?:(\d+) passed, )?(\d+) total")
        .expect("tests summary pattern is valid")
});

static SUITES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Test Suites:\s+(?:(\d+) failed, )?(?:\d+ skipped, )?(?:(\d+) passed, )?(\d+) total")
        .expect("suites summary pattern is valid")
});

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Time:\s+([\d.]+)\s*s").expect("time summary pattern is valid")
});

/// Parsed `(failed, passed, total)` from a summary line. A missing failed or
/// passed clause counts as zero; counts too large for `u64` saturate.
fn counts(caps: &Captures<'_>) -> (Option<u64>, Option<u64>, Option<u64>) {
    let group = |i: usize| {
        caps.get(i)
            .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
    };
    let failed = group(1).or(Some(0));
    let passed = group(2).or(Some(0));
    (failed, passed, group(3))
}

/// Extract test, suite and timing summaries. Each is independent and optional.
pub fn extract_statistics(text: &str) -> RunStatistics {
    let mut stats = RunStatistics::default();

    if let Some(caps) = TESTS_RE.captures(text) {
        let (failed, passed, total) = counts(&caps);
        stats.tests_failed = failed;
        stats.tests_passed = passed;
        stats.tests_total = total;
    }

    if let Some(caps) = SUITES_RE.captures(text) {
        let (failed, passed, total) = counts(&caps);
        stats.suites_failed = failed;
        stats.suites_passed = passed;
        stats.suites_total = total;
    }

    stats.elapsed_secs = TIME_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok());

    stats
}

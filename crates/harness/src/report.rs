//! Suite reporting
//!
//! Per-case status, aggregate counters, the logged summary, and the JSON
//! artifact written at the end of a run.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::error::HarnessResult;

/// Terminal state of one test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Passed,
    Failed,
    Errored,
    Skipped,
}

/// What a case body reports when it completes without failing.
#[derive(Debug, Clone)]
pub enum CaseOutcome {
    Pass,
    /// The case's precondition was absent, so there was nothing to judge
    /// (e.g. a page with no external links). Not a failure.
    Skip(String),
}

/// Result of running a single case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseReport {
    pub name: String,
    pub description: String,
    pub category: String,
    pub status: CaseStatus,
    pub duration_ms: u64,
    /// Failure/error diagnostic, or the skip reason
    pub detail: Option<String>,
}

/// Result of running the whole suite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
    pub skipped: usize,
    pub duration_ms: u64,
    pub cases: Vec<CaseReport>,
}

impl SuiteReport {
    pub fn from_cases(cases: Vec<CaseReport>, duration_ms: u64) -> Self {
        let count =
            |status: CaseStatus| cases.iter().filter(|c| c.status == status).count();

        let passed = count(CaseStatus::Passed);
        let failed = count(CaseStatus::Failed);
        let errored = count(CaseStatus::Errored);
        let skipped = count(CaseStatus::Skipped);

        Self {
            total: cases.len(),
            passed,
            failed,
            errored,
            skipped,
            duration_ms,
            cases,
        }
    }

    /// True when no case failed or errored.
    pub fn all_green(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }

    /// Process exit code for the runner entry point.
    pub fn exit_code(&self) -> i32 {
        if self.all_green() {
            0
        } else {
            1
        }
    }

    /// Log the per-case lines and the totals line.
    pub fn log_summary(&self) {
        info!("");
        for case in &self.cases {
            let detail = case.detail.as_deref().unwrap_or("unknown");
            match case.status {
                CaseStatus::Passed => info!("✓ {} ({} ms)", case.name, case.duration_ms),
                CaseStatus::Skipped => warn!("- {} skipped: {}", case.name, detail),
                CaseStatus::Failed => error!("✗ {} - {}", case.name, detail),
                CaseStatus::Errored => error!("! {} - {}", case.name, detail),
            }
        }
        info!("");
        info!(
            "Suite results: {} passed, {} failed, {} errored, {} skipped ({} ms)",
            self.passed, self.failed, self.errored, self.skipped, self.duration_ms
        );
    }

    /// Write the report to a JSON file in `output_dir`.
    pub fn write_json(&self, output_dir: &Path) -> HarnessResult<PathBuf> {
        std::fs::create_dir_all(output_dir)?;

        let path = output_dir.join("site-report.json");
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)?;

        info!("Report written to: {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(name: &str, status: CaseStatus) -> CaseReport {
        CaseReport {
            name: name.into(),
            description: String::new(),
            category: "page-load".into(),
            status,
            duration_ms: 1,
            detail: None,
        }
    }

    #[test]
    fn aggregation_counts_every_status() {
        let report = SuiteReport::from_cases(
            vec![
                case("a", CaseStatus::Passed),
                case("b", CaseStatus::Passed),
                case("c", CaseStatus::Failed),
                case("d", CaseStatus::Errored),
                case("e", CaseStatus::Skipped),
            ],
            1234,
        );

        assert_eq!(report.total, 5);
        assert_eq!(report.passed, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(report.errored, 1);
        assert_eq!(report.skipped, 1);
        assert!(!report.all_green());
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn skips_do_not_fail_the_suite() {
        let report = SuiteReport::from_cases(
            vec![case("a", CaseStatus::Passed), case("b", CaseStatus::Skipped)],
            10,
        );

        assert!(report.all_green());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn empty_selection_is_green() {
        let report = SuiteReport::from_cases(Vec::new(), 0);
        assert_eq!(report.exit_code(), 0);
    }
}

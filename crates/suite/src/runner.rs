//! Sequential case execution with a per-case session lifecycle
//!
//! One chromedriver process serves the whole run; every case gets a fresh
//! browser session that is released on every exit path before the outcome
//! is classified. No case aborts the suite.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, info, warn};

use beingfit_harness::{
    BrowserSession, CaseOutcome, CaseReport, CaseStatus, DriverConfig, DriverHandle,
    HarnessError, HarnessResult, SessionConfig, Site, SuiteReport,
};

use crate::cases::{self, Category, TestCase};

/// Configuration for a suite run
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Deployment under test
    pub site: Site,

    /// Driver process configuration
    pub driver: DriverConfig,

    /// Per-case session configuration
    pub session: SessionConfig,

    /// Use an externally managed WebDriver server instead of spawning one
    pub webdriver_url: Option<String>,

    /// Output directory for the JSON report
    pub output_dir: PathBuf,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            site: Site::default(),
            driver: DriverConfig::default(),
            session: SessionConfig::default(),
            webdriver_url: None,
            output_dir: PathBuf::from("test-results"),
        }
    }
}

/// Runs registered cases against one deployment.
pub struct SuiteRunner {
    config: SuiteConfig,
    driver: Option<DriverHandle>,
}

impl SuiteRunner {
    pub fn new(config: SuiteConfig) -> Self {
        Self {
            config,
            driver: None,
        }
    }

    /// Run the full inventory.
    pub async fn run_all(&mut self) -> HarnessResult<SuiteReport> {
        let selected = cases::inventory();
        self.run_cases(&selected).await
    }

    /// Run the cases in one category.
    pub async fn run_category(&mut self, category: Category) -> HarnessResult<SuiteReport> {
        let selected: Vec<TestCase> = cases::inventory()
            .into_iter()
            .filter(|case| case.category == category)
            .collect();
        self.run_cases(&selected).await
    }

    /// Run a single case by name.
    pub async fn run_named(&mut self, name: &str) -> HarnessResult<SuiteReport> {
        let selected: Vec<TestCase> = cases::inventory()
            .into_iter()
            .filter(|case| case.name == name)
            .collect();

        if selected.is_empty() {
            return Err(HarnessError::UnknownCase(name.to_string()));
        }
        self.run_cases(&selected).await
    }

    /// Run a list of cases sequentially and aggregate the report.
    pub async fn run_cases(&mut self, selected: &[TestCase]) -> HarnessResult<SuiteReport> {
        let start = Instant::now();
        let webdriver_url = self.ensure_driver().await?;

        info!(
            "Running {} case(s) against {}",
            selected.len(),
            self.config.site.base_url()
        );

        let mut reports = Vec::with_capacity(selected.len());
        for case in selected {
            reports.push(self.run_case(&webdriver_url, case).await);
        }

        let report = SuiteReport::from_cases(reports, start.elapsed().as_millis() as u64);
        report.log_summary();
        Ok(report)
    }

    /// Write the report artifact for this run.
    pub fn write_report(&self, report: &SuiteReport) -> HarnessResult<PathBuf> {
        report.write_json(&self.config.output_dir)
    }

    /// Stop the spawned driver, if any.
    pub fn stop_driver(&mut self) {
        if let Some(mut driver) = self.driver.take() {
            let _ = driver.stop();
        }
    }

    /// Make sure a WebDriver server is reachable, spawning chromedriver
    /// unless an external URL was injected.
    async fn ensure_driver(&mut self) -> HarnessResult<String> {
        if let Some(url) = &self.config.webdriver_url {
            return Ok(url.clone());
        }

        if self.driver.is_none() {
            self.driver = Some(DriverHandle::spawn(self.config.driver.clone()).await?);
        }

        match &self.driver {
            Some(driver) => Ok(driver.url().to_string()),
            None => Err(HarnessError::DriverStartup(
                "driver handle missing after spawn".into(),
            )),
        }
    }

    /// Run one case on a fresh session.
    async fn run_case(&self, webdriver_url: &str, case: &TestCase) -> CaseReport {
        debug!("starting case {}", case.name);
        let start = Instant::now();

        let session = match BrowserSession::start(
            webdriver_url,
            self.config.site.clone(),
            &self.config.session,
        )
        .await
        {
            Ok(session) => session,
            Err(e) => {
                return CaseReport {
                    name: case.name.to_string(),
                    description: case.description.to_string(),
                    category: case.category.to_string(),
                    status: CaseStatus::Errored,
                    duration_ms: start.elapsed().as_millis() as u64,
                    detail: Some(format!("session acquisition failed: {e}")),
                };
            }
        };

        let outcome = (case.run)(&session).await;

        // Release before judging; a leaked browser would outlive the case
        if let Err(e) = session.quit().await {
            warn!("session teardown failed for {}: {}", case.name, e);
        }

        let (status, detail) = match outcome {
            Ok(CaseOutcome::Pass) => (CaseStatus::Passed, None),
            Ok(CaseOutcome::Skip(reason)) => (CaseStatus::Skipped, Some(reason)),
            Err(e) if e.is_test_failure() => (CaseStatus::Failed, Some(e.to_string())),
            Err(e) => (CaseStatus::Errored, Some(e.to_string())),
        };

        CaseReport {
            name: case.name.to_string(),
            description: case.description.to_string(),
            category: case.category.to_string(),
            status,
            duration_ms: start.elapsed().as_millis() as u64,
            detail,
        }
    }
}

impl Drop for SuiteRunner {
    fn drop(&mut self) {
        self.stop_driver();
    }
}

//! Error types for the browser harness

use thiserror::Error;

/// Result type alias using the harness error
pub type HarnessResult<T> = std::result::Result<T, HarnessError>;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("No chromedriver found on PATH. Install one matching the local Chrome, or pass --driver-binary")]
    DriverNotFound,

    #[error("Driver failed to start: {0}")]
    DriverStartup(String),

    #[error("Driver did not report ready after {0} status checks")]
    DriverUnresponsive(usize),

    #[error("Browser session could not be acquired: {0}")]
    Session(String),

    #[error("Navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    #[error("No element matching {locator}")]
    ElementNotFound { locator: String },

    #[error("{check}: expected {expected}, got {actual}")]
    Assertion {
        check: String,
        expected: String,
        actual: String,
    },

    #[error("Timed out after {budget_ms} ms waiting for {waiting_for}")]
    WaitTimeout { waiting_for: String, budget_ms: u64 },

    #[error("No such case: {0}")]
    UnknownCase(String),

    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HarnessError {
    /// True for errors that mean "the checked predicate was false", as
    /// opposed to the harness or the network breaking underneath the test.
    /// The runner reports the former as failures and the rest as errors.
    pub fn is_test_failure(&self) -> bool {
        matches!(
            self,
            HarnessError::Assertion { .. }
                | HarnessError::ElementNotFound { .. }
                | HarnessError::WaitTimeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assertion_and_lookup_errors_are_test_failures() {
        let assertion = HarnessError::Assertion {
            check: "page title".into(),
            expected: "contains \"BeingFIT\"".into(),
            actual: "\"\"".into(),
        };
        let missing = HarnessError::ElementNotFound {
            locator: "css \"a[href='explore.html']\"".into(),
        };
        let timeout = HarnessError::WaitTimeout {
            waiting_for: "document ready".into(),
            budget_ms: 10_000,
        };

        assert!(assertion.is_test_failure());
        assert!(missing.is_test_failure());
        assert!(timeout.is_test_failure());
    }

    #[test]
    fn harness_level_errors_are_not_test_failures() {
        let startup = HarnessError::DriverStartup("spawn failed".into());
        let navigation = HarnessError::Navigation {
            url: "https://example.invalid/index.html".into(),
            reason: "dns failure".into(),
        };

        assert!(!startup.is_test_failure());
        assert!(!navigation.is_test_failure());
        assert!(!HarnessError::DriverNotFound.is_test_failure());
    }
}

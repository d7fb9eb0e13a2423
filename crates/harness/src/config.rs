//! Harness configuration
//!
//! Everything here is injected by the caller; the harness reads no globals.

use std::path::PathBuf;
use std::time::Duration;

use crate::wait::Wait;

/// Configuration for spawning a chromedriver process
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Explicit path to the chromedriver binary (None = search PATH)
    pub binary: Option<PathBuf>,

    /// Port to listen on (None = find free port)
    pub port: Option<u16>,

    /// Timeout for the driver to report ready
    pub startup_timeout: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            binary: None,
            port: None,
            startup_timeout: Duration::from_secs(30),
        }
    }
}

/// Configuration for one browser session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Start with a maximized window
    pub maximized: bool,

    /// Suppress the browser's automation-detection markers
    pub suppress_automation_flags: bool,

    /// Run the browser headless
    pub headless: bool,

    /// Implicit wait budget applied to element lookups
    pub implicit_wait: Duration,

    /// Polling policy for readiness waits and eventually-checks
    pub wait: Wait,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            maximized: true,
            suppress_automation_flags: true,
            headless: false,
            implicit_wait: Duration::from_secs(5),
            wait: Wait::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_defaults_match_the_suite_contract() {
        let config = SessionConfig::default();

        assert!(config.maximized);
        assert!(config.suppress_automation_flags);
        assert!(!config.headless);
        assert_eq!(config.implicit_wait, Duration::from_secs(5));
    }
}

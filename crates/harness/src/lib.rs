//! BeingFIT browser harness
//!
//! This crate provides the session harness the end-to-end suite runs on:
//! - Spawns and supervises a chromedriver process
//! - Acquires one browser session per test case and guarantees its release
//! - Replaces fixed sleeps with bounded condition polling
//! - Provides expected/actual assertion helpers and suite reporting
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Suite Runner (beingfit-suite)            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  DriverHandle                 one per run                   │
//! │    ├── spawn() -> chromedriver on a free port               │
//! │    └── stop()  -> SIGTERM, then kill (also on Drop)         │
//! │                                                             │
//! │  BrowserSession               one per test case             │
//! │    ├── open(page) / navigate(url) + document-ready wait     │
//! │    ├── title / current_url / page_source                    │
//! │    ├── find / find_all / click (Locator)                    │
//! │    ├── set_viewport(w, h)                                   │
//! │    └── quit()  -> released on every exit path               │
//! │                                                             │
//! │  checks::*                    expected/actual assertions    │
//! │  SuiteReport                  summary + JSON artifact       │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod checks;
pub mod config;
pub mod driver;
pub mod error;
pub mod locator;
pub mod report;
pub mod session;
pub mod site;
pub mod wait;

pub use config::{DriverConfig, SessionConfig};
pub use driver::DriverHandle;
pub use error::{HarnessError, HarnessResult};
pub use locator::Locator;
pub use report::{CaseOutcome, CaseReport, CaseStatus, SuiteReport};
pub use session::BrowserSession;
pub use site::{Page, Site, DEFAULT_BASE_URL};
pub use wait::Wait;

// Re-exported so cases can hold elements without a direct client dependency
pub use thirtyfour::WebElement;

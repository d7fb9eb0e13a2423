//! The BeingFIT end-to-end suite
//!
//! Twenty independent, stateless cases, each `navigate -> readiness wait ->
//! assert`, executed sequentially on a fresh browser session per case.
//!
//! Run against the production deployment:
//! `cargo test --package beingfit-suite --test site`

pub mod cases;
pub mod runner;

pub use runner::{SuiteConfig, SuiteRunner};

//! Load-time budget case
//!
//! A statistical property, not a deterministic one: a single violation is
//! usually network weather, repeated violations are an environment signal.

use std::time::Duration;

use tracing::info;

use beingfit_harness::{checks, BrowserSession, CaseOutcome, HarnessResult, Page};

const LOAD_BUDGET: Duration = Duration::from_secs(5);

pub async fn homepage_load_budget(session: &BrowserSession) -> HarnessResult<CaseOutcome> {
    let elapsed = session.open_timed(Page::Home).await?;
    info!("homepage loaded in {} ms", elapsed.as_millis());

    checks::within_budget("homepage load time", elapsed, LOAD_BUDGET)?;
    Ok(CaseOutcome::Pass)
}

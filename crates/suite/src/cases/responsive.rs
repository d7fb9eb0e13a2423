//! Viewport cases: the page survives a resize to small screens

use beingfit_harness::{checks, BrowserSession, CaseOutcome, HarnessResult, Page};

// iPhone-sized
const PHONE: (u32, u32) = (375, 667);
// iPad-sized
const TABLET: (u32, u32) = (768, 1024);

pub async fn mobile_viewport(session: &BrowserSession) -> HarnessResult<CaseOutcome> {
    at_viewport(session, PHONE).await
}

pub async fn tablet_viewport(session: &BrowserSession) -> HarnessResult<CaseOutcome> {
    at_viewport(session, TABLET).await
}

async fn at_viewport(
    session: &BrowserSession,
    (width, height): (u32, u32),
) -> HarnessResult<CaseOutcome> {
    session.open(Page::Home).await?;
    session.set_viewport(width, height).await?;
    checks::eventually_title_nonempty(session).await?;
    Ok(CaseOutcome::Pass)
}

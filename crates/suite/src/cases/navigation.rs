//! Navigation cases: clicking a located link lands on the expected page

use beingfit_harness::{checks, BrowserSession, CaseOutcome, HarnessResult, Locator, Page};

pub async fn home_to_explore(session: &BrowserSession) -> HarnessResult<CaseOutcome> {
    session.open(Page::Home).await?;
    session.click(&Locator::css(Page::Explore.link_selector())).await?;
    checks::eventually_url_contains(session, Page::Explore.path()).await?;
    Ok(CaseOutcome::Pass)
}

pub async fn explore_to_chest(session: &BrowserSession) -> HarnessResult<CaseOutcome> {
    session.open(Page::Explore).await?;
    session.click(&Locator::css(Page::Chest.link_selector())).await?;
    checks::eventually_url_contains(session, Page::Chest.path()).await?;
    Ok(CaseOutcome::Pass)
}

/// The navbar's Home entry is located by its visible text, not its href.
pub async fn navbar_home_link(session: &BrowserSession) -> HarnessResult<CaseOutcome> {
    session.open(Page::Explore).await?;
    session.click(&Locator::link_text("Home")).await?;
    checks::eventually_url_contains(session, Page::Home.path()).await?;
    Ok(CaseOutcome::Pass)
}

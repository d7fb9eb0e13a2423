//! Page-load cases: each page resolves and carries its expected identity

use tracing::info;

use beingfit_harness::{checks, BrowserSession, CaseOutcome, HarnessResult, Page};

pub async fn homepage_loads(session: &BrowserSession) -> HarnessResult<CaseOutcome> {
    session.open(Page::Home).await?;
    checks::eventually_title_contains(session, "BeingFIT").await?;
    info!("homepage titled with the site name");
    Ok(CaseOutcome::Pass)
}

pub async fn explore_page_loads(session: &BrowserSession) -> HarnessResult<CaseOutcome> {
    session.open(Page::Explore).await?;
    checks::eventually_title_contains(session, "Explore").await?;
    Ok(CaseOutcome::Pass)
}

/// Every exercise category page must resolve; a blank title means the page
/// did not load.
pub async fn exercise_pages_load(session: &BrowserSession) -> HarnessResult<CaseOutcome> {
    for page in Page::EXERCISES {
        session.open(page).await?;
        checks::eventually_title_nonempty(session).await?;
        info!("{} loaded", page.path());
    }
    Ok(CaseOutcome::Pass)
}

pub async fn bmi_page_loads(session: &BrowserSession) -> HarnessResult<CaseOutcome> {
    session.open(Page::Bmi).await?;
    checks::eventually_identified_by(session, "BMI", Page::Bmi.path()).await?;
    Ok(CaseOutcome::Pass)
}

pub async fn journal_page_loads(session: &BrowserSession) -> HarnessResult<CaseOutcome> {
    session.open(Page::Journal).await?;
    checks::eventually_identified_by(session, "Journal", Page::Journal.path()).await?;
    Ok(CaseOutcome::Pass)
}

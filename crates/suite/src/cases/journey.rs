//! A multi-step user journey through the site
//!
//! Sequential composition of the navigation assertions on one session; the
//! only state carried between steps is the browser itself.

use tracing::info;

use beingfit_harness::{checks, BrowserSession, CaseOutcome, HarnessResult, Locator, Page};

pub async fn full_user_journey(session: &BrowserSession) -> HarnessResult<CaseOutcome> {
    session.open(Page::Home).await?;
    checks::eventually_title_contains(session, "BeingFIT").await?;
    info!("step 1: reached homepage");

    session.click(&Locator::css(Page::Explore.link_selector())).await?;
    checks::eventually_url_contains(session, Page::Explore.path()).await?;
    info!("step 2: navigated to explore");

    session.click(&Locator::css(Page::Chest.link_selector())).await?;
    checks::eventually_url_contains(session, Page::Chest.path()).await?;
    info!("step 3: viewed chest exercises");

    session.open(Page::Explore).await?;
    session.click(&Locator::css(Page::Bmi.link_selector())).await?;
    checks::eventually_url_contains(session, Page::Bmi.path()).await?;
    info!("step 4: reached the BMI calculator");

    Ok(CaseOutcome::Pass)
}

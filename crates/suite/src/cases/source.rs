//! Page-source inspection cases

use beingfit_harness::{checks, BrowserSession, CaseOutcome, HarnessResult, Page};

/// The analytics loader, or the site's measurement id if the loader is
/// inlined differently.
const ANALYTICS_MARKERS: [&str; 2] = ["gtag", "G-QK7ZYSK2ZG"];

/// GitHub Pages serves its default error page for unknown paths. This is
/// hosting-platform behavior, not application behavior; a different host
/// would need different markers.
const NOT_FOUND_MARKERS: [&str; 2] = ["404", "Not Found"];

const SEO_MARKERS: [&str; 3] = [
    r#"name="description""#,
    r#"name="keywords""#,
    r#"name="robots""#,
];

pub async fn analytics_tag_present(session: &BrowserSession) -> HarnessResult<CaseOutcome> {
    session.open(Page::Home).await?;
    checks::source_contains_any(session, &ANALYTICS_MARKERS).await?;
    Ok(CaseOutcome::Pass)
}

pub async fn invalid_path_shows_not_found(session: &BrowserSession) -> HarnessResult<CaseOutcome> {
    session.open_path("nonexistent.html").await?;
    checks::source_contains_any(session, &NOT_FOUND_MARKERS).await?;
    Ok(CaseOutcome::Pass)
}

pub async fn seo_meta_tags_present(session: &BrowserSession) -> HarnessResult<CaseOutcome> {
    session.open(Page::Home).await?;
    checks::source_contains_all(session, &SEO_MARKERS).await?;
    Ok(CaseOutcome::Pass)
}

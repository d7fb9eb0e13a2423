//! Content-presence cases over rendered DOM

use tracing::{info, warn};

use beingfit_harness::{checks, BrowserSession, CaseOutcome, HarnessResult, Locator, Page};

pub async fn explore_has_images(session: &BrowserSession) -> HarnessResult<CaseOutcome> {
    session.open(Page::Explore).await?;
    let count = checks::eventually_elements_present(session, &Locator::tag("img")).await?;
    info!("{} images on the explore page", count);
    Ok(CaseOutcome::Pass)
}

/// Each key page must title itself distinctly; duplicates usually mean a
/// copy-pasted head section.
pub async fn page_titles_distinct(session: &BrowserSession) -> HarnessResult<CaseOutcome> {
    let pages = [Page::Home, Page::Explore, Page::Chest, Page::Shoulder, Page::Bmi];

    let mut titles = Vec::with_capacity(pages.len());
    for page in pages {
        session.open(page).await?;
        checks::eventually_title_nonempty(session).await?;
        titles.push((page.path().to_string(), session.title().await?));
    }

    checks::all_distinct("page titles", &titles)?;
    Ok(CaseOutcome::Pass)
}

pub async fn explore_internal_links(session: &BrowserSession) -> HarnessResult<CaseOutcome> {
    session.open(Page::Explore).await?;

    let marker = session.site().internal_link_marker();
    let links = session.find_all(&Locator::tag("a")).await?;

    let mut internal = 0usize;
    for link in &links {
        if let Some(href) = link.attr("href").await? {
            if href.contains(&marker) {
                internal += 1;
            }
        }
    }

    if internal == 0 {
        return Err(checks::failed(
            "internal links on explore page",
            format!("at least one href containing {marker:?}"),
            format!("none among {} anchors", links.len()),
        ));
    }

    info!("{} internal links resolve to this deployment", internal);
    Ok(CaseOutcome::Pass)
}

pub async fn exercise_pages_have_heading(session: &BrowserSession) -> HarnessResult<CaseOutcome> {
    for page in [Page::Chest, Page::Shoulder, Page::Tricep] {
        session.open(page).await?;
        checks::eventually_elements_present(session, &Locator::tag("h1")).await?;
        info!("{} has a top-level heading", page.path());
    }
    Ok(CaseOutcome::Pass)
}

/// Outbound links must not hijack the visitor's tab. The site is not
/// required to have any; absence skips the case rather than failing it.
pub async fn external_links_open_new_tab(session: &BrowserSession) -> HarnessResult<CaseOutcome> {
    session.open(Page::Chest).await?;

    let links = session.find_all(&Locator::css("a[target='_blank']")).await?;

    match links.first() {
        Some(link) => {
            checks::attribute_equals(link, "target", "_blank").await?;
            info!("{} external links configured for a new tab", links.len());
            Ok(CaseOutcome::Pass)
        }
        None => {
            warn!("no external links on the chest page; nothing to check");
            Ok(CaseOutcome::Skip("chest page has no external links".into()))
        }
    }
}

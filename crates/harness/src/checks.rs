//! Assertion helpers
//!
//! Checks fail with the literal expected/actual values so a red case reads
//! without rerunning it. The `eventually_*` family polls the observed value
//! under the session's wait budget before judging, which replaces the fixed
//! sleeps a naive suite would use; the asserted outcome is unchanged.

use std::collections::HashMap;
use std::time::Duration;

use thirtyfour::WebElement;

use crate::error::{HarnessError, HarnessResult};
use crate::locator::Locator;
use crate::session::BrowserSession;

/// Build an assertion failure with literal expected/actual values.
pub fn failed(
    check: impl Into<String>,
    expected: impl Into<String>,
    actual: impl Into<String>,
) -> HarnessError {
    HarnessError::Assertion {
        check: check.into(),
        expected: expected.into(),
        actual: actual.into(),
    }
}

/// The page title eventually contains `needle`.
pub async fn eventually_title_contains(
    session: &BrowserSession,
    needle: &str,
) -> HarnessResult<()> {
    let hit = session
        .wait()
        .poll(move || async move {
            let title = session.title().await?;
            Ok(title.contains(needle).then_some(()))
        })
        .await?;

    match hit {
        Some(()) => Ok(()),
        None => Err(failed(
            "page title",
            format!("contains {needle:?}"),
            format!("{:?}", session.title().await?),
        )),
    }
}

/// The page eventually has any title at all.
pub async fn eventually_title_nonempty(session: &BrowserSession) -> HarnessResult<()> {
    let hit = session
        .wait()
        .poll(move || async move {
            let title = session.title().await?;
            Ok((!title.is_empty()).then_some(()))
        })
        .await?;

    match hit {
        Some(()) => Ok(()),
        None => Err(failed("page title", "non-empty", "\"\"")),
    }
}

/// The current URL eventually contains `fragment`.
pub async fn eventually_url_contains(
    session: &BrowserSession,
    fragment: &str,
) -> HarnessResult<()> {
    let hit = session
        .wait()
        .poll(move || async move {
            let url = session.current_url().await?;
            Ok(url.contains(fragment).then_some(()))
        })
        .await?;

    match hit {
        Some(()) => Ok(()),
        None => Err(failed(
            "current URL",
            format!("contains {fragment:?}"),
            session.current_url().await?,
        )),
    }
}

/// The page eventually identifies itself by title or by URL.
///
/// Some pages title themselves inconsistently across deployments; the URL
/// is the stable fallback signal.
pub async fn eventually_identified_by(
    session: &BrowserSession,
    title_needle: &str,
    url_fragment: &str,
) -> HarnessResult<()> {
    let hit = session
        .wait()
        .poll(move || async move {
            let title = session.title().await?;
            if title.contains(title_needle) {
                return Ok(Some(()));
            }
            let url = session.current_url().await?;
            Ok(url.contains(url_fragment).then_some(()))
        })
        .await?;

    match hit {
        Some(()) => Ok(()),
        None => {
            let title = session.title().await?;
            let url = session.current_url().await?;
            Err(failed(
                "page identity",
                format!("title contains {title_needle:?} or URL contains {url_fragment:?}"),
                format!("title {title:?}, URL {url}"),
            ))
        }
    }
}

/// At least one element matching `locator` eventually exists.
/// Returns how many were present when the check passed.
pub async fn eventually_elements_present(
    session: &BrowserSession,
    locator: &Locator,
) -> HarnessResult<usize> {
    let count = session
        .wait()
        .poll(move || async move {
            let found = session.find_all(locator).await?;
            Ok((!found.is_empty()).then_some(found.len()))
        })
        .await?;

    count.ok_or_else(|| {
        failed(
            format!("elements matching {locator}"),
            "at least one",
            "none within the wait budget",
        )
    })
}

/// The rendered page source contains every marker.
pub async fn source_contains_all(
    session: &BrowserSession,
    markers: &[&str],
) -> HarnessResult<()> {
    let source = session.page_source().await?;
    let missing: Vec<&str> = markers
        .iter()
        .copied()
        .filter(|marker| !source.contains(marker))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(failed(
            "page source markers",
            format!("contains all of {markers:?}"),
            format!("missing {:?} ({} byte source)", missing, source.len()),
        ))
    }
}

/// The rendered page source contains at least one of the markers.
pub async fn source_contains_any(
    session: &BrowserSession,
    markers: &[&str],
) -> HarnessResult<()> {
    let source = session.page_source().await?;

    if markers.iter().any(|marker| source.contains(marker)) {
        Ok(())
    } else {
        Err(failed(
            "page source marker",
            format!("contains one of {markers:?}"),
            format!("none present ({} byte source)", source.len()),
        ))
    }
}

/// Every labeled value is distinct from every other.
pub fn all_distinct(check: &str, values: &[(String, String)]) -> HarnessResult<()> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    let mut duplicates = Vec::new();

    for (label, value) in values {
        if let Some(first) = seen.insert(value.as_str(), label.as_str()) {
            duplicates.push(format!("{first} and {label} share {value:?}"));
        }
    }

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(failed(
            check,
            format!("{} pairwise distinct values", values.len()),
            duplicates.join("; "),
        ))
    }
}

/// Elapsed wall-clock time stayed under the budget.
pub fn within_budget(check: &str, elapsed: Duration, budget: Duration) -> HarnessResult<()> {
    if elapsed < budget {
        Ok(())
    } else {
        Err(failed(
            check,
            format!("under {} ms", budget.as_millis()),
            format!("{} ms", elapsed.as_millis()),
        ))
    }
}

/// An element's attribute has exactly the expected value.
pub async fn attribute_equals(
    element: &WebElement,
    name: &str,
    expected: &str,
) -> HarnessResult<()> {
    let actual = element.attr(name).await?;

    if actual.as_deref() == Some(expected) {
        Ok(())
    } else {
        Err(failed(
            format!("attribute {name:?}"),
            format!("{expected:?}"),
            format!("{actual:?}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(label, value)| (label.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn all_distinct_accepts_unique_values() {
        let values = titles(&[
            ("index.html", "BeingFIT"),
            ("explore.html", "Explore"),
            ("bmi.html", "BMI Calculator"),
        ]);
        assert!(all_distinct("page titles", &values).is_ok());
    }

    #[test]
    fn all_distinct_names_both_holders_of_a_duplicate() {
        let values = titles(&[
            ("chest.html", "Exercises"),
            ("shoulder.html", "Exercises"),
        ]);

        let err = all_distinct("page titles", &values).unwrap_err();
        match err {
            HarnessError::Assertion { actual, .. } => {
                assert!(actual.contains("chest.html"));
                assert!(actual.contains("shoulder.html"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn within_budget_compares_strictly() {
        assert!(within_budget(
            "homepage load time",
            Duration::from_millis(4_999),
            Duration::from_secs(5)
        )
        .is_ok());

        let err = within_budget(
            "homepage load time",
            Duration::from_secs(5),
            Duration::from_secs(5),
        )
        .unwrap_err();
        assert!(err.is_test_failure());
    }

    #[test]
    fn failed_carries_literal_values() {
        let err = failed("page title", "contains \"BeingFIT\"", "\"Explore\"");
        assert_eq!(
            err.to_string(),
            "page title: expected contains \"BeingFIT\", got \"Explore\""
        );
    }
}

//! The site under test
//!
//! A typed map of the fixed page set plus base-URL handling. The base URL is
//! injected at construction so the same suite can target any deployment.

use url::Url;

/// Production deployment on GitHub Pages.
pub const DEFAULT_BASE_URL: &str = "https://danish0902.github.io/DiM-project";

/// The pages the site serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Explore,
    Chest,
    Shoulder,
    Tricep,
    Back,
    Bicep,
    Legs,
    Bmi,
    Journal,
}

impl Page {
    /// The six exercise-category pages.
    pub const EXERCISES: [Page; 6] = [
        Page::Chest,
        Page::Shoulder,
        Page::Tricep,
        Page::Back,
        Page::Bicep,
        Page::Legs,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::Explore => "explore.html",
            Page::Chest => "chest.html",
            Page::Shoulder => "shoulder.html",
            Page::Tricep => "tricep.html",
            Page::Back => "back.html",
            Page::Bicep => "bicep.html",
            Page::Legs => "legs.html",
            Page::Bmi => "bmi.html",
            Page::Journal => "journal.html",
        }
    }

    /// CSS selector for an anchor pointing at this page.
    pub fn link_selector(&self) -> String {
        format!("a[href='{}']", self.path())
    }
}

/// A deployment of the site, addressed by its base URL.
#[derive(Debug, Clone)]
pub struct Site {
    base_url: String,
}

impl Site {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of a page.
    pub fn page_url(&self, page: Page) -> String {
        self.url_for(page.path())
    }

    /// Absolute URL of an arbitrary path, valid or not.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Substring that marks an href as internal to this deployment.
    ///
    /// Project-pages hosting puts the repository name in the path, which is
    /// the distinctive part; for a root deployment the host is used instead.
    pub fn internal_link_marker(&self) -> String {
        match Url::parse(&self.base_url) {
            Ok(url) => {
                let path = url.path().trim_matches('/');
                if path.is_empty() {
                    url.host_str().unwrap_or(&self.base_url).to_string()
                } else {
                    path.to_string()
                }
            }
            Err(_) => self.base_url.clone(),
        }
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Page::Home, "index.html")]
    #[test_case(Page::Explore, "explore.html")]
    #[test_case(Page::Chest, "chest.html")]
    #[test_case(Page::Shoulder, "shoulder.html")]
    #[test_case(Page::Tricep, "tricep.html")]
    #[test_case(Page::Back, "back.html")]
    #[test_case(Page::Bicep, "bicep.html")]
    #[test_case(Page::Legs, "legs.html")]
    #[test_case(Page::Bmi, "bmi.html")]
    #[test_case(Page::Journal, "journal.html")]
    fn page_paths(page: Page, expected: &str) {
        assert_eq!(page.path(), expected);
    }

    #[test]
    fn exercise_pages_are_the_six_categories() {
        assert_eq!(Page::EXERCISES.len(), 6);
        assert!(Page::EXERCISES.contains(&Page::Legs));
        assert!(!Page::EXERCISES.contains(&Page::Bmi));
    }

    #[test]
    fn link_selector_targets_the_href() {
        assert_eq!(Page::Explore.link_selector(), "a[href='explore.html']");
    }

    #[test]
    fn page_url_joins_cleanly() {
        let site = Site::new("https://staging.example.org/fit/");
        assert_eq!(
            site.page_url(Page::Bmi),
            "https://staging.example.org/fit/bmi.html"
        );
        assert_eq!(
            site.url_for("/nonexistent.html"),
            "https://staging.example.org/fit/nonexistent.html"
        );
    }

    #[test]
    fn internal_link_marker_prefers_the_path_segment() {
        assert_eq!(Site::default().internal_link_marker(), "DiM-project");

        let root = Site::new("https://beingfit.example.org");
        assert_eq!(root.internal_link_marker(), "beingfit.example.org");
    }
}

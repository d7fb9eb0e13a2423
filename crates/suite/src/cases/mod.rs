//! Case inventory
//!
//! Every case is a pure procedure over one borrowed session: navigate, wait
//! for readiness, assert. No state is shared across cases; the runner gives
//! each one a fresh browser.

pub mod content;
pub mod journey;
pub mod navigation;
pub mod page_load;
pub mod performance;
pub mod responsive;
pub mod source;

use std::fmt;

use clap::ValueEnum;
use futures::future::BoxFuture;

use beingfit_harness::{BrowserSession, CaseOutcome, HarnessResult};

/// Case grouping, used for filtering and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    PageLoad,
    Navigation,
    Journey,
    Content,
    Performance,
    Responsive,
    Source,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::PageLoad => "page-load",
            Category::Navigation => "navigation",
            Category::Journey => "journey",
            Category::Content => "content",
            Category::Performance => "performance",
            Category::Responsive => "responsive",
            Category::Source => "source",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case bodies borrow the session for their whole run.
pub type CaseFn = for<'a> fn(&'a BrowserSession) -> BoxFuture<'a, HarnessResult<CaseOutcome>>;

/// A single registered test case.
pub struct TestCase {
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub run: CaseFn,
}

/// Every case in the suite, in execution order.
pub fn inventory() -> Vec<TestCase> {
    vec![
        TestCase {
            name: "homepage_loads",
            description: "Homepage loads and titles itself with the site name",
            category: Category::PageLoad,
            run: |s| Box::pin(page_load::homepage_loads(s)),
        },
        TestCase {
            name: "explore_page_loads",
            description: "Explore page loads with its own title",
            category: Category::PageLoad,
            run: |s| Box::pin(page_load::explore_page_loads(s)),
        },
        TestCase {
            name: "exercise_pages_load",
            description: "All six exercise category pages load",
            category: Category::PageLoad,
            run: |s| Box::pin(page_load::exercise_pages_load(s)),
        },
        TestCase {
            name: "bmi_page_loads",
            description: "BMI calculator page identifies itself",
            category: Category::PageLoad,
            run: |s| Box::pin(page_load::bmi_page_loads(s)),
        },
        TestCase {
            name: "journal_page_loads",
            description: "Workout journal page identifies itself",
            category: Category::PageLoad,
            run: |s| Box::pin(page_load::journal_page_loads(s)),
        },
        TestCase {
            name: "home_to_explore",
            description: "Explore link on the homepage reaches the explore page",
            category: Category::Navigation,
            run: |s| Box::pin(navigation::home_to_explore(s)),
        },
        TestCase {
            name: "explore_to_chest",
            description: "Chest link on the explore page reaches the chest page",
            category: Category::Navigation,
            run: |s| Box::pin(navigation::explore_to_chest(s)),
        },
        TestCase {
            name: "navbar_home_link",
            description: "The Home navigation link returns to the homepage",
            category: Category::Navigation,
            run: |s| Box::pin(navigation::navbar_home_link(s)),
        },
        TestCase {
            name: "full_user_journey",
            description: "Home to explore to chest to BMI, asserting each hop",
            category: Category::Journey,
            run: |s| Box::pin(journey::full_user_journey(s)),
        },
        TestCase {
            name: "explore_has_images",
            description: "Explore page renders at least one image",
            category: Category::Content,
            run: |s| Box::pin(content::explore_has_images(s)),
        },
        TestCase {
            name: "page_titles_distinct",
            description: "Key pages carry pairwise distinct titles",
            category: Category::Content,
            run: |s| Box::pin(content::page_titles_distinct(s)),
        },
        TestCase {
            name: "homepage_load_budget",
            description: "Homepage loads inside the wall-clock budget",
            category: Category::Performance,
            run: |s| Box::pin(performance::homepage_load_budget(s)),
        },
        TestCase {
            name: "mobile_viewport",
            description: "Homepage still renders at phone size",
            category: Category::Responsive,
            run: |s| Box::pin(responsive::mobile_viewport(s)),
        },
        TestCase {
            name: "tablet_viewport",
            description: "Homepage still renders at tablet size",
            category: Category::Responsive,
            run: |s| Box::pin(responsive::tablet_viewport(s)),
        },
        TestCase {
            name: "analytics_tag_present",
            description: "Homepage source carries the analytics tag",
            category: Category::Source,
            run: |s| Box::pin(source::analytics_tag_present(s)),
        },
        TestCase {
            name: "invalid_path_shows_not_found",
            description: "An invalid path renders the host's not-found page",
            category: Category::Source,
            run: |s| Box::pin(source::invalid_path_shows_not_found(s)),
        },
        TestCase {
            name: "explore_internal_links",
            description: "Explore page links back into this deployment",
            category: Category::Content,
            run: |s| Box::pin(content::explore_internal_links(s)),
        },
        TestCase {
            name: "seo_meta_tags_present",
            description: "Homepage source carries the SEO meta tags",
            category: Category::Source,
            run: |s| Box::pin(source::seo_meta_tags_present(s)),
        },
        TestCase {
            name: "exercise_pages_have_heading",
            description: "Exercise pages carry a top-level heading",
            category: Category::Content,
            run: |s| Box::pin(content::exercise_pages_have_heading(s)),
        },
        TestCase {
            name: "external_links_open_new_tab",
            description: "External links on the chest page open a new tab",
            category: Category::Content,
            run: |s| Box::pin(content::external_links_open_new_tab(s)),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn inventory_holds_the_full_suite() {
        assert_eq!(inventory().len(), 20);
    }

    #[test]
    fn case_names_are_unique() {
        let cases = inventory();
        let names: HashSet<&str> = cases.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), cases.len());
    }

    #[test]
    fn every_category_is_populated() {
        let cases = inventory();
        for category in [
            Category::PageLoad,
            Category::Navigation,
            Category::Journey,
            Category::Content,
            Category::Performance,
            Category::Responsive,
            Category::Source,
        ] {
            assert!(
                cases.iter().any(|c| c.category == category),
                "no case in category {category}"
            );
        }
    }
}

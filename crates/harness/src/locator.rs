//! Element locator strategies
//!
//! The suite only ever locates elements three ways; keeping the strategy
//! harness-owned gives lookup failures a readable diagnostic instead of a
//! raw protocol selector.

use std::fmt;

use thirtyfour::By;

/// How to locate a DOM element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// CSS selector, e.g. `a[href='explore.html']`
    Css(String),
    /// Tag name, e.g. `img`
    Tag(String),
    /// Exact link text, e.g. `Home`
    LinkText(String),
}

impl Locator {
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    pub fn tag(name: impl Into<String>) -> Self {
        Self::Tag(name.into())
    }

    pub fn link_text(text: impl Into<String>) -> Self {
        Self::LinkText(text.into())
    }

    pub(crate) fn to_by(&self) -> By {
        match self {
            Locator::Css(selector) => By::Css(selector.clone()),
            Locator::Tag(name) => By::Tag(name.clone()),
            Locator::LinkText(text) => By::LinkText(text.clone()),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Css(selector) => write!(f, "css {selector:?}"),
            Locator::Tag(name) => write!(f, "tag {name:?}"),
            Locator::LinkText(text) => write!(f, "link text {text:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_strategy() {
        assert_eq!(
            Locator::css("a[href='explore.html']").to_string(),
            "css \"a[href='explore.html']\""
        );
        assert_eq!(Locator::tag("img").to_string(), "tag \"img\"");
        assert_eq!(Locator::link_text("Home").to_string(), "link text \"Home\"");
    }
}

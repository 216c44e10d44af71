//! Next-page navigation
//!
//! The pagination driver asks a `Navigate` implementation for the next-page
//! control after every extracted page. `MarkupNavigator` finds that control
//! in the fetched markup and follows its href; tests substitute scripted
//! navigators.

use crate::crawler::compile_selector;
use crate::url::resolve_href;
use crate::{ConfigError, UrlError};
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

/// Errors raised while activating a next-page control
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavigationError {
    /// The control was found but no longer leads anywhere
    #[error("Next control on {page} has no target")]
    ControlVanished { page: String },

    #[error("Next control on {page} points to an unusable target: {reason}")]
    InvalidTarget { page: String, reason: String },
}

/// A discovered next-page affordance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextControl {
    target: Option<String>,
    enabled: bool,
}

impl NextControl {
    /// An enabled control leading to `target`
    pub fn enabled(target: impl Into<String>) -> Self {
        Self {
            target: Some(target.into()),
            enabled: true,
        }
    }

    /// A control that is present but cannot be used
    pub fn disabled() -> Self {
        Self {
            target: None,
            enabled: false,
        }
    }

    /// A control that looks usable but has lost its target
    pub fn dangling() -> Self {
        Self {
            target: None,
            enabled: true,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The raw target the control points at, if any
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

/// Capability to move from one listing page to the next
pub trait Navigate: Send {
    /// Id of the listing page currently shown
    fn current_page_url(&self) -> &str;

    /// Tells the navigator which page was just fetched
    fn arrive(&mut self, page_url: &str);

    /// Looks for the next control on the current page
    fn find_next_control(&self, markup: &str) -> Option<NextControl>;

    /// Follows `control` and returns the id of the page it leads to
    fn activate(&mut self, control: &NextControl) -> Result<String, NavigationError>;
}

/// Finds the next control in page markup and follows its href
#[derive(Debug, Clone)]
pub struct MarkupNavigator {
    next_selector: Selector,
    link_selector: Selector,
    current: String,
}

impl MarkupNavigator {
    /// Creates a navigator starting at `start_url`
    ///
    /// # Arguments
    ///
    /// * `next_selector` - CSS selector of the next-page control
    /// * `start_url` - The first listing page
    pub fn new(next_selector: &str, start_url: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            next_selector: compile_selector("next", next_selector)?,
            link_selector: compile_selector("next link", "a")?,
            current: start_url.into(),
        })
    }
}

impl Navigate for MarkupNavigator {
    fn current_page_url(&self) -> &str {
        &self.current
    }

    fn arrive(&mut self, page_url: &str) {
        self.current = page_url.to_string();
    }

    fn find_next_control(&self, markup: &str) -> Option<NextControl> {
        let document = Html::parse_document(markup);
        let control = document.select(&self.next_selector).next()?;

        if is_disabled(control) {
            return Some(NextControl::disabled());
        }

        let link = if control.value().name() == "a" {
            Some(control)
        } else {
            control.select(&self.link_selector).next()
        };

        match link {
            Some(link) if is_disabled(link) => Some(NextControl::disabled()),
            Some(link) => Some(match link.value().attr("href") {
                Some(href) => NextControl::enabled(href),
                None => NextControl::dangling(),
            }),
            // Pagination markup renders the last page's control without a link
            None => Some(NextControl::disabled()),
        }
    }

    fn activate(&mut self, control: &NextControl) -> Result<String, NavigationError> {
        let target = control
            .target()
            .ok_or_else(|| NavigationError::ControlVanished {
                page: self.current.clone(),
            })?;

        let next = resolve_href(&self.current, target).map_err(|e| match e {
            UrlError::Unresolvable { .. } => NavigationError::ControlVanished {
                page: self.current.clone(),
            },
            other => NavigationError::InvalidTarget {
                page: self.current.clone(),
                reason: other.to_string(),
            },
        })?;

        self.current = next.to_string();
        Ok(self.current.clone())
    }
}

/// True if the element is marked as disabled in any of the usual ways
fn is_disabled(element: ElementRef<'_>) -> bool {
    let value = element.value();
    value.attr("disabled").is_some()
        || value
            .attr("aria-disabled")
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
        || value.classes().any(|c| c == "disabled")
}

//! Generic ordered-fallback field extraction.
//!
//! Titles and descriptions live in different elements depending on how far
//! the page got rendering and whether the field is in edit mode. A
//! [`FieldExtractor`] walks an ordered strategy list and returns the first
//! acceptable value, or an empty string when every strategy soft-misses.

use std::time::Duration;

use crate::driver::{DriverResult, NodeRef, PageDriver};

use super::fallback::first_acceptable;

/// Visibility wait applied to each paragraph during a dialog-wide scan.
const PARAGRAPH_WAIT: Duration = Duration::from_millis(500);

/// Bounds on acceptable paragraph length during a dialog-wide scan,
/// exclusive on both ends.
const SCAN_MIN_LEN: usize = 5;
const SCAN_MAX_LEN: usize = 500;

/// Placeholder prompts start with this token ("Add a description", ...).
const PLACEHOLDER_PREFIX: &str = "add";

/// How a strategy reads its target element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    /// Current value of an editable control.
    Value,
    /// Rendered text of a static node.
    Text,
    /// A named attribute.
    Attribute(&'static str),
}

/// One candidate location for a field.
#[derive(Debug, Clone, Copy)]
pub struct Strategy {
    /// Selector identifying zero or one target element.
    pub selector: &'static str,
    /// How to read the element once visible.
    pub mode: ReadMode,
    /// Bounded visibility wait for this strategy.
    pub timeout: Duration,
}

impl Strategy {
    /// Creates a strategy with a one second visibility wait.
    pub fn new(selector: &'static str, mode: ReadMode) -> Self {
        Self {
            selector,
            mode,
            timeout: Duration::from_millis(1000),
        }
    }
}

/// Ordered-fallback text resolver over a page driver.
pub struct FieldExtractor<'a, D: PageDriver> {
    driver: &'a D,
    /// Sentinel strings that are never acceptable field values.
    disallowed: &'a [&'a str],
}

impl<'a, D: PageDriver> FieldExtractor<'a, D> {
    pub fn new(driver: &'a D, disallowed: &'a [&'a str]) -> Self {
        Self { driver, disallowed }
    }

    /// Resolves a field through `strategies` in order.
    ///
    /// Each strategy soft-misses when its element is absent, stays
    /// invisible past its timeout, or reads to an empty or disallowed
    /// value. Exhaustion yields an empty string. Driver failures propagate.
    pub fn resolve(&self, strategies: &[Strategy]) -> DriverResult<String> {
        let found = first_acceptable(
            strategies.iter().map(|strategy| move || self.attempt(strategy)),
            |value: &String| self.acceptable(value),
        )?;
        Ok(found.unwrap_or_default())
    }

    /// Scans `paragraphs` in document order, returning the first one that
    /// reads like real description content rather than a placeholder
    /// prompt. Accepted text is whitespace-normalized.
    pub fn scan_paragraphs(&self, paragraphs: &[NodeRef]) -> DriverResult<Option<String>> {
        for &node in paragraphs {
            if !self.driver.wait_visible(node, PARAGRAPH_WAIT)? {
                continue;
            }
            let text = self.driver.inner_text(node)?;
            let trimmed = text.trim();
            let len = trimmed.chars().count();
            if len <= SCAN_MIN_LEN || len >= SCAN_MAX_LEN {
                continue;
            }
            if !self.acceptable(trimmed) {
                continue;
            }
            if trimmed
                .to_lowercase()
                .starts_with(PLACEHOLDER_PREFIX)
            {
                continue;
            }
            return Ok(Some(collapse_whitespace(trimmed)));
        }
        Ok(None)
    }

    fn attempt(&self, strategy: &Strategy) -> DriverResult<Option<String>> {
        let Some(node) = self.driver.query(strategy.selector)? else {
            return Ok(None);
        };
        if !self.driver.wait_visible(node, strategy.timeout)? {
            return Ok(None);
        }
        let raw = match strategy.mode {
            ReadMode::Value => self.driver.input_value(node)?,
            ReadMode::Text => self.driver.inner_text(node)?,
            ReadMode::Attribute(name) => {
                self.driver.attribute(node, name)?.unwrap_or_default()
            }
        };
        Ok(Some(raw.trim().to_string()))
    }

    fn acceptable(&self, value: &str) -> bool {
        !value.is_empty() && !self.disallowed.contains(&value)
    }
}

/// Collapses every run of whitespace (spaces, tabs, newlines) to a single
/// space and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

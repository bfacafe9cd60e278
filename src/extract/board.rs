//! Board surface page object.
//!
//! The board lists cards as links grouped under column headers. This page
//! object only covers what the extraction core needs: enumerating visible
//! card links and finding a card by title. Navigation, login, and filter
//! URLs belong to the embedding application.

use std::time::Duration;

use crate::driver::{DriverResult, NodeRef, PageDriver};

use super::selectors;

/// Visibility check applied per card link while enumerating.
const CARD_WAIT: Duration = Duration::from_millis(500);

/// Page object for the board surface outside any dialog.
pub struct BoardPage<'a, D: PageDriver> {
    driver: &'a D,
}

impl<'a, D: PageDriver> BoardPage<'a, D> {
    pub fn new(driver: &'a D) -> Self {
        Self { driver }
    }

    /// All currently visible card links, in DOM order.
    pub fn visible_cards(&self) -> DriverResult<Vec<NodeRef>> {
        let mut visible = Vec::new();
        for link in self.driver.query_all(selectors::CARD_LINK)? {
            if self.driver.wait_visible(link, CARD_WAIT)? {
                visible.push(link);
            }
        }
        Ok(visible)
    }

    /// The trimmed title text of a card link.
    pub fn card_title(&self, link: NodeRef) -> DriverResult<String> {
        Ok(self.driver.inner_text(link)?.trim().to_string())
    }

    /// Finds a visible card whose title equals `title`, ignoring ASCII
    /// case. Returns the first match in DOM order.
    pub fn find_card_by_title(&self, title: &str) -> DriverResult<Option<NodeRef>> {
        for link in self.visible_cards()? {
            if self.card_title(link)?.eq_ignore_ascii_case(title) {
                return Ok(Some(link));
            }
        }
        Ok(None)
    }
}

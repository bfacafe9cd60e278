//! Workflow status inference.
//!
//! The board exposes a card's status through visual column placement, not a
//! stable attribute, so resolution is a layered best-effort chain: each tier
//! trades a little precision for robustness against markup variants, and the
//! chain bottoms out at [`Status::Unknown`].

use std::time::Duration;

use crate::domain::Status;
use crate::driver::{DriverResult, NodeRef, PageDriver};

use super::fallback::first_acceptable;
use super::selectors;

/// Element carrying the name of the list the open card currently sits in.
const CURRENT_LIST: &str = "[data-testid=\"card-back-move-card-button\"]";

/// Buttons and links inside the dialog, in document order.
const DIALOG_INTERACTIVE: &str = "div[role=\"dialog\"] button, div[role=\"dialog\"] a";

/// Visibility wait for the current-list element.
const LIST_NAME_WAIT: Duration = Duration::from_millis(1000);

/// Visibility wait applied per element during the interactive scan.
const ELEMENT_WAIT: Duration = Duration::from_millis(500);

/// Only this many leading lines of the dialog text are inspected.
const LINE_SCAN_LIMIT: usize = 10;

/// Horizontal gate for the geometric tier: a header only matches a card in
/// (roughly) the same column.
const COLUMN_X_TOLERANCE: f64 = 200.0;

/// Vertical window for the geometric tier, relative to the header's top.
const COLUMN_Y_ABOVE: f64 = 50.0;
const COLUMN_Y_BELOW: f64 = 500.0;

/// Resolves the status of the currently open card dialog.
pub struct StatusResolver<'a, D: PageDriver> {
    driver: &'a D,
}

impl<'a, D: PageDriver> StatusResolver<'a, D> {
    pub fn new(driver: &'a D) -> Self {
        Self { driver }
    }

    /// Infers the card's status, trying each tier only when the previous
    /// one produced nothing.
    ///
    /// `card` is the card's link element on the board surface, used by the
    /// geometric tier; the other tiers read the open dialog.
    pub fn resolve(&self, card: NodeRef) -> DriverResult<Status> {
        let tiers: Vec<Box<dyn FnOnce() -> DriverResult<Option<Status>> + '_>> = vec![
            Box::new(|| self.from_list_name()),
            Box::new(|| self.from_interactive_elements()),
            Box::new(|| self.from_dialog_lines()),
            Box::new(move || self.from_geometry(card)),
        ];
        Ok(first_acceptable(tiers, |_| true)?.unwrap_or(Status::Unknown))
    }

    /// Tier 1: the designated current-list element, exact label match only.
    fn from_list_name(&self) -> DriverResult<Option<Status>> {
        let Some(node) = self.driver.query(CURRENT_LIST)? else {
            return Ok(None);
        };
        if !self.driver.wait_visible(node, LIST_NAME_WAIT)? {
            return Ok(None);
        }
        let text = self.driver.inner_text(node)?;
        Ok(Status::from_exact(text.trim()))
    }

    /// Tier 2: visible dialog buttons and links, first match wins.
    fn from_interactive_elements(&self) -> DriverResult<Option<Status>> {
        for node in self.driver.query_all(DIALOG_INTERACTIVE)? {
            if !self.driver.wait_visible(node, ELEMENT_WAIT)? {
                continue;
            }
            let text = self.driver.inner_text(node)?;
            if let Some(status) = Status::from_candidate(text.trim()) {
                return Ok(Some(status));
            }
        }
        Ok(None)
    }

    /// Tier 3: the first few lines of the dialog's full text.
    fn from_dialog_lines(&self) -> DriverResult<Option<Status>> {
        let Some(dialog) = self.driver.query(selectors::DIALOG)? else {
            return Ok(None);
        };
        let text = self.driver.inner_text(dialog)?;
        for line in text.lines().take(LINE_SCAN_LIMIT) {
            if let Some(status) = Status::from_candidate(line.trim()) {
                return Ok(Some(status));
            }
        }
        Ok(None)
    }

    /// Tier 4: column placement. The card belongs to the first column
    /// header (in DOM order) whose box sits close enough: within the
    /// horizontal tolerance and inside the vertical window below the
    /// header. No distance minimization.
    fn from_geometry(&self, card: NodeRef) -> DriverResult<Option<Status>> {
        let Some(card_box) = self.driver.bounding_box(card)? else {
            return Ok(None);
        };
        for header in self.driver.query_all(selectors::LIST_HEADER)? {
            if !self.driver.wait_visible(header, ELEMENT_WAIT)? {
                continue;
            }
            let text = self.driver.inner_text(header)?;
            let Some(status) = Status::from_exact(text.trim()) else {
                continue;
            };
            let Some(header_box) = self.driver.bounding_box(header)? else {
                continue;
            };
            let same_column = (card_box.x - header_box.x).abs() < COLUMN_X_TOLERANCE;
            let in_window = card_box.y >= header_box.y - COLUMN_Y_ABOVE
                && card_box.y <= header_box.y + COLUMN_Y_BELOW;
            if same_column && in_window {
                return Ok(Some(status));
            }
        }
        Ok(None)
    }
}

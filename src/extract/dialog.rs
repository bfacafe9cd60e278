//! Card dialog page object and snapshot orchestration.
//!
//! Opening a card dialog is treated as resource acquisition: the dialog is
//! the single shared page resource, and [`CardDialog::close`] is the
//! guaranteed release on every exit path. One card's failure never leaves a
//! dialog open for the next iteration, and never aborts the run.

use std::time::Duration;

use crate::domain::CardSnapshot;
use crate::driver::{DriverError, DriverResult, NodeRef, PageDriver};

use super::board::BoardPage;
use super::field::{FieldExtractor, ReadMode, Strategy};
use super::label::normalize_label;
use super::selectors;
use super::status::StatusResolver;

/// Settle delay after clicking a card link.
const OPEN_SETTLE: Duration = Duration::from_millis(1500);

/// Wait for the dialog element to appear.
const DIALOG_WAIT: Duration = Duration::from_millis(5000);

/// Settle delay once the dialog exists, letting async fields render.
const RENDER_SETTLE: Duration = Duration::from_millis(800);

/// Settle delay after dismissing the dialog.
const CLOSE_SETTLE: Duration = Duration::from_millis(500);

/// Visibility wait for the label container.
const LABELS_WAIT: Duration = Duration::from_millis(1000);

/// Container holding the card's label badges.
const LABELS_CONTAINER: &str = "[data-testid=\"card-back-labels-container\"]";

/// Label badges carry their name in the aria-label.
const LABEL_BADGE: &str = "[aria-label*=\"Color:\"]";

/// Values the title field can read to that are placeholder noise.
const TITLE_SENTINELS: &[&str] = &["Edit"];

/// Values the description field can read to that are placeholder noise.
const DESCRIPTION_SENTINELS: &[&str] = &["Edit", "Add a more detailed description\u{2026}"];

/// Candidate locations for the card title, most specific first.
const TITLE_STRATEGIES: [Strategy; 3] = [
    Strategy {
        selector: "textarea[data-testid=\"card-back-title-input\"]",
        mode: ReadMode::Value,
        timeout: Duration::from_millis(1000),
    },
    Strategy {
        selector: "div[role=\"dialog\"] [title]",
        mode: ReadMode::Attribute("title"),
        timeout: Duration::from_millis(500),
    },
    Strategy {
        selector: "div[role=\"dialog\"] h1",
        mode: ReadMode::Text,
        timeout: Duration::from_millis(500),
    },
];

/// Candidate locations for the description before falling back to a
/// dialog-wide paragraph scan.
const DESCRIPTION_STRATEGIES: [Strategy; 2] = [
    Strategy {
        selector: "[data-testid=\"description-content\"] p",
        mode: ReadMode::Text,
        timeout: Duration::from_millis(1000),
    },
    Strategy {
        selector: "[data-testid=\"description-content\"] textarea",
        mode: ReadMode::Value,
        timeout: Duration::from_millis(500),
    },
];

/// Errors from one card's open/extract/close sequence.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExtractError {
    /// The dialog never rendered after clicking the card.
    #[error("card dialog did not appear within {}ms", DIALOG_WAIT.as_millis())]
    DialogNotFound,

    /// The driver itself failed.
    #[error(transparent)]
    Driver(#[from] DriverError),
}

/// Page object for the open card dialog.
pub struct CardDialog<'a, D: PageDriver> {
    driver: &'a D,
}

impl<'a, D: PageDriver> CardDialog<'a, D> {
    pub fn new(driver: &'a D) -> Self {
        Self { driver }
    }

    /// Opens the dialog for `card_link` and waits for it to render.
    ///
    /// Returns `None` when the dialog never appears.
    pub fn open(&self, card_link: NodeRef) -> DriverResult<Option<NodeRef>> {
        self.driver.click(card_link)?;
        self.driver.settle(OPEN_SETTLE);
        let dialog = self.driver.wait_for_selector(selectors::DIALOG, DIALOG_WAIT)?;
        self.driver.settle(RENDER_SETTLE);
        Ok(dialog)
    }

    /// Resolves the card title, falling back to the board-side link text
    /// when no dialog strategy yields one.
    pub fn title(&self, card_link: NodeRef) -> DriverResult<String> {
        let extractor = FieldExtractor::new(self.driver, TITLE_SENTINELS);
        let title = extractor.resolve(&TITLE_STRATEGIES)?;
        if !title.is_empty() {
            return Ok(title);
        }
        let link_text = self.driver.inner_text(card_link)?;
        Ok(link_text.trim().to_string())
    }

    /// Collects label names from the dialog's label container.
    ///
    /// Badges that normalize to an empty name are skipped; duplicates are
    /// dropped case-sensitively, preserving first-seen order.
    pub fn labels(&self) -> DriverResult<Vec<String>> {
        let mut labels: Vec<String> = Vec::new();
        let Some(container) = self.driver.query(LABELS_CONTAINER)? else {
            return Ok(labels);
        };
        if !self.driver.wait_visible(container, LABELS_WAIT)? {
            return Ok(labels);
        }
        for badge in self.driver.query_within(container, LABEL_BADGE)? {
            let Some(aria) = self.driver.attribute(badge, "aria-label")? else {
                continue;
            };
            let name = normalize_label(&aria);
            if !name.is_empty() && !labels.contains(&name) {
                labels.push(name);
            }
        }
        Ok(labels)
    }

    /// Resolves the description, scanning all dialog paragraphs when the
    /// scoped strategies miss. Empty string means no description.
    pub fn description(&self) -> DriverResult<String> {
        let extractor = FieldExtractor::new(self.driver, DESCRIPTION_SENTINELS);
        let scoped = extractor.resolve(&DESCRIPTION_STRATEGIES)?;
        if !scoped.is_empty() {
            return Ok(scoped);
        }
        let paragraphs = self
            .driver
            .query_all(&format!("{} p", selectors::DIALOG))?;
        Ok(extractor.scan_paragraphs(&paragraphs)?.unwrap_or_default())
    }

    /// Dismisses the dialog.
    pub fn close(&self) -> DriverResult<()> {
        self.driver.press_escape()?;
        self.driver.settle(CLOSE_SETTLE);
        Ok(())
    }

    /// Runs the full open → extract → close lifecycle for one card.
    ///
    /// Close is attempted on every path, including after failures, so the
    /// dialog never stays open for the next card.
    pub fn snapshot(&self, card_link: NodeRef) -> Result<CardSnapshot, ExtractError> {
        let extracted = match self.open(card_link) {
            Ok(Some(_dialog)) => self.extract(card_link),
            Ok(None) => Err(ExtractError::DialogNotFound),
            Err(e) => Err(e.into()),
        };
        if let Err(close_err) = self.close() {
            tracing::warn!(error = %close_err, "failed to close card dialog");
        }
        extracted
    }

    fn extract(&self, card_link: NodeRef) -> Result<CardSnapshot, ExtractError> {
        let title = self.title(card_link)?;
        let labels = self.labels()?;
        let description = self.description()?;
        let status = StatusResolver::new(self.driver).resolve(card_link)?;
        Ok(CardSnapshot::new(title, labels, description, status))
    }
}

/// Snapshots every card in `card_links`, strictly sequentially and in the
/// given (DOM) order.
///
/// A per-card fault is logged and the card omitted; a lost driver
/// connection is fatal and aborts the run.
pub fn collect_snapshots<D: PageDriver>(
    driver: &D,
    card_links: &[NodeRef],
) -> Result<Vec<CardSnapshot>, DriverError> {
    let dialog = CardDialog::new(driver);
    let mut snapshots = Vec::with_capacity(card_links.len());
    for &card_link in card_links {
        match dialog.snapshot(card_link) {
            Ok(snapshot) => {
                tracing::debug!(title = %snapshot.title, "extracted card snapshot");
                snapshots.push(snapshot);
            }
            Err(ExtractError::Driver(e @ DriverError::Connection(_))) => return Err(e),
            Err(e) => {
                tracing::warn!(error = %e, "skipping card after extraction failure");
            }
        }
    }
    Ok(snapshots)
}

/// Convenience entry point: snapshots every card currently visible on the
/// board.
pub fn snapshot_visible_cards<D: PageDriver>(driver: &D) -> Result<Vec<CardSnapshot>, DriverError> {
    let board = BoardPage::new(driver);
    let cards = board.visible_cards()?;
    collect_snapshots(driver, &cards)
}

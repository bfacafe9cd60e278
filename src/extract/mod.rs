//! Field extraction against a live, script-rendered board page.
//!
//! The page exposes no stable contract: elements move, render late, or are
//! conditionally present. Every extractor here is therefore an ordered
//! fallback chain over a small set of strategies tuned to the page's
//! observed variants, degrading to an explicit empty/unknown sentinel when
//! none match rather than erroring.

mod board;
mod dialog;
mod fallback;
mod field;
mod label;
mod status;

pub use board::BoardPage;
pub use dialog::{collect_snapshots, snapshot_visible_cards, CardDialog, ExtractError};
pub use fallback::first_acceptable;
pub use field::{collapse_whitespace, FieldExtractor, ReadMode, Strategy};
pub use label::normalize_label;
pub use status::StatusResolver;

/// Selectors shared across the extraction modules.
pub(crate) mod selectors {
    /// The open card dialog.
    pub const DIALOG: &str = "div[role=\"dialog\"]";
    /// Card title links on the board surface.
    pub const CARD_LINK: &str = "a[data-testid=\"card-name\"]";
    /// Column header elements.
    pub const LIST_HEADER: &str = "h2";
}

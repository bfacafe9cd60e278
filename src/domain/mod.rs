//! Domain layer types for boardsync.
//!
//! This module contains the core entities the rest of the crate operates on:
//! inbox emails, board cards, extracted card snapshots, and the closed set of
//! workflow statuses a card can occupy.

mod card;
mod email;
mod snapshot;
mod status;

pub use card::Card;
pub use email::Email;
pub use snapshot::CardSnapshot;
pub use status::Status;

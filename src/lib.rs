//! boardsync - keeps a kanban task board consistent with an urgent-email inbox
//!
//! This crate provides two core subsystems: a multi-strategy field
//! extraction engine for reading card data off a live, script-rendered
//! board page, and a pure reconciliation engine that diffs the inbox
//! against the board to detect drift.

pub mod config;
pub mod domain;
pub mod driver;
pub mod extract;
pub mod providers;
pub mod reconcile;

pub use reconcile::{reconcile, DiscrepancyReport};

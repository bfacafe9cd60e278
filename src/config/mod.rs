//! Configuration loading.
//!
//! Every run is configured from the process environment; there is no
//! persisted settings file. Missing credentials fail fast before any
//! network or page work starts.

mod settings;

pub use settings::{ConfigError, Settings};

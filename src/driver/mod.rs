//! Page driver abstraction.
//!
//! The extraction layer never talks to a browser directly; it receives a
//! [`PageDriver`] handle exposing the small set of primitives it needs.
//! Session lifecycle (launch, navigate, login) belongs to the embedding
//! application, which hands an already-positioned driver to this crate.
//!
//! Absence is not an error here: a selector that matches nothing comes back
//! as `Ok(None)` and a visibility wait that times out as `Ok(false)`.
//! [`DriverError`] is reserved for the driver itself failing (connection
//! dropped, protocol violation, stale handle) and propagates to the caller.

#[cfg(test)]
pub(crate) mod fake;

use std::time::Duration;

/// Result type alias for driver operations.
pub type DriverResult<T> = std::result::Result<T, DriverError>;

/// Errors raised by the driver itself, as opposed to soft misses.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DriverError {
    /// The browser connection was lost.
    #[error("driver connection lost: {0}")]
    Connection(String),

    /// The driver returned something the protocol does not allow.
    #[error("driver protocol error: {0}")]
    Protocol(String),

    /// A previously obtained node handle no longer refers to a live element.
    #[error("stale node handle {0:?}")]
    StaleNode(NodeRef),
}

/// Opaque handle to a DOM node owned by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef(pub u64);

/// On-page bounding box of a rendered element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Rendered width.
    pub width: f64,
    /// Rendered height.
    pub height: f64,
}

/// Synchronous browser-page primitives the extraction layer depends on.
///
/// Every call blocks the current thread for at most its explicit timeout;
/// there is no parallelism and no retry. Implementations wrap a real
/// browser session; tests use an in-memory fake.
pub trait PageDriver {
    /// Finds the first node matching `selector`, if any.
    fn query(&self, selector: &str) -> DriverResult<Option<NodeRef>>;

    /// Finds all nodes matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> DriverResult<Vec<NodeRef>>;

    /// Finds all nodes matching `selector` within the subtree of `scope`,
    /// in document order.
    fn query_within(&self, scope: NodeRef, selector: &str) -> DriverResult<Vec<NodeRef>>;

    /// Waits up to `timeout` for `node` to become visible.
    ///
    /// Returns `false` when the wait expires, never an error.
    fn wait_visible(&self, node: NodeRef, timeout: Duration) -> DriverResult<bool>;

    /// Waits up to `timeout` for a node matching `selector` to appear.
    ///
    /// Returns `None` when the wait expires.
    fn wait_for_selector(&self, selector: &str, timeout: Duration)
        -> DriverResult<Option<NodeRef>>;

    /// Clicks `node`.
    fn click(&self, node: NodeRef) -> DriverResult<()>;

    /// Sets the value of an editable control.
    fn fill(&self, node: NodeRef, value: &str) -> DriverResult<()>;

    /// Reads the rendered text content of `node`.
    fn inner_text(&self, node: NodeRef) -> DriverResult<String>;

    /// Reads the current value of an editable control.
    fn input_value(&self, node: NodeRef) -> DriverResult<String>;

    /// Reads an attribute of `node`, if present.
    fn attribute(&self, node: NodeRef, name: &str) -> DriverResult<Option<String>>;

    /// Reads the bounding box of `node`; `None` when it is not rendered.
    fn bounding_box(&self, node: NodeRef) -> DriverResult<Option<BoundingBox>>;

    /// Sends the Escape key to the page.
    fn press_escape(&self) -> DriverResult<()>;

    /// Sleeps for a fixed settle delay, letting scripted rendering catch up.
    fn settle(&self, wait: Duration);
}

//! In-memory page driver for extraction tests.
//!
//! Holds a flat list of fake nodes in document order. A node answers to any
//! selector in its `selectors` list, which sidesteps implementing a CSS
//! engine while keeping query semantics (first match, document order,
//! subtree scoping) faithful.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use super::{BoundingBox, DriverError, DriverResult, NodeRef, PageDriver};

/// One fake DOM node.
#[derive(Debug, Clone, Default)]
pub struct FakeNode {
    selectors: Vec<String>,
    parent: Option<u64>,
    visible: bool,
    text: String,
    value: String,
    attrs: HashMap<String, String>,
    bbox: Option<BoundingBox>,
    /// When set, any read against this node fails as a stale handle.
    poisoned: bool,
}

impl FakeNode {
    /// Creates a visible node answering to the given selectors.
    pub fn new(selectors: &[&str]) -> Self {
        Self {
            selectors: selectors.iter().map(|s| s.to_string()).collect(),
            visible: true,
            ..Default::default()
        }
    }

    /// Sets the rendered text.
    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// Sets the editable-control value.
    pub fn value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    /// Sets an attribute.
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    /// Marks the node as never becoming visible.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Gives the node a bounding box.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.bbox = Some(BoundingBox {
            x,
            y,
            width: 200.0,
            height: 40.0,
        });
        self
    }

    /// Makes every read against this node fail as a stale handle.
    pub fn poisoned(mut self) -> Self {
        self.poisoned = true;
        self
    }
}

/// An in-memory [`PageDriver`].
#[derive(Debug, Default)]
pub struct FakePage {
    nodes: RefCell<Vec<FakeNode>>,
    clicks: RefCell<Vec<NodeRef>>,
    escapes: RefCell<u32>,
    /// When true, every call fails with a connection error.
    disconnected: bool,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A driver whose connection has dropped; every call errors.
    pub fn disconnected() -> Self {
        Self {
            disconnected: true,
            ..Default::default()
        }
    }

    /// Appends a top-level node, returning its handle.
    pub fn push(&self, node: FakeNode) -> NodeRef {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(node);
        NodeRef(nodes.len() as u64 - 1)
    }

    /// Appends a node inside `parent`'s subtree, returning its handle.
    pub fn push_child(&self, parent: NodeRef, node: FakeNode) -> NodeRef {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(FakeNode {
            parent: Some(parent.0),
            ..node
        });
        NodeRef(nodes.len() as u64 - 1)
    }

    /// Nodes clicked so far, in order.
    pub fn clicks(&self) -> Vec<NodeRef> {
        self.clicks.borrow().clone()
    }

    /// Number of Escape presses so far.
    pub fn escapes(&self) -> u32 {
        *self.escapes.borrow()
    }

    fn check_connection(&self) -> DriverResult<()> {
        if self.disconnected {
            Err(DriverError::Connection("fake driver disconnected".into()))
        } else {
            Ok(())
        }
    }

    fn get(&self, node: NodeRef) -> DriverResult<FakeNode> {
        let nodes = self.nodes.borrow();
        let found = nodes
            .get(node.0 as usize)
            .cloned()
            .ok_or(DriverError::StaleNode(node))?;
        if found.poisoned {
            return Err(DriverError::StaleNode(node));
        }
        Ok(found)
    }

    fn is_descendant(&self, node: u64, ancestor: u64) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = nodes.get(node as usize).and_then(|n| n.parent);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = nodes.get(parent as usize).and_then(|n| n.parent);
        }
        false
    }

    fn matching(&self, selector: &str) -> Vec<NodeRef> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, node)| node.selectors.iter().any(|s| s == selector))
            .map(|(i, _)| NodeRef(i as u64))
            .collect()
    }
}

impl PageDriver for FakePage {
    fn query(&self, selector: &str) -> DriverResult<Option<NodeRef>> {
        self.check_connection()?;
        Ok(self.matching(selector).into_iter().next())
    }

    fn query_all(&self, selector: &str) -> DriverResult<Vec<NodeRef>> {
        self.check_connection()?;
        Ok(self.matching(selector))
    }

    fn query_within(&self, scope: NodeRef, selector: &str) -> DriverResult<Vec<NodeRef>> {
        self.check_connection()?;
        Ok(self
            .matching(selector)
            .into_iter()
            .filter(|node| self.is_descendant(node.0, scope.0))
            .collect())
    }

    fn wait_visible(&self, node: NodeRef, _timeout: Duration) -> DriverResult<bool> {
        self.check_connection()?;
        Ok(self.get(node)?.visible)
    }

    fn wait_for_selector(
        &self,
        selector: &str,
        _timeout: Duration,
    ) -> DriverResult<Option<NodeRef>> {
        self.check_connection()?;
        Ok(self.matching(selector).into_iter().next())
    }

    fn click(&self, node: NodeRef) -> DriverResult<()> {
        self.check_connection()?;
        self.get(node)?;
        self.clicks.borrow_mut().push(node);
        Ok(())
    }

    fn fill(&self, node: NodeRef, value: &str) -> DriverResult<()> {
        self.check_connection()?;
        self.get(node)?;
        self.nodes.borrow_mut()[node.0 as usize].value = value.to_string();
        Ok(())
    }

    fn inner_text(&self, node: NodeRef) -> DriverResult<String> {
        self.check_connection()?;
        Ok(self.get(node)?.text)
    }

    fn input_value(&self, node: NodeRef) -> DriverResult<String> {
        self.check_connection()?;
        Ok(self.get(node)?.value)
    }

    fn attribute(&self, node: NodeRef, name: &str) -> DriverResult<Option<String>> {
        self.check_connection()?;
        Ok(self.get(node)?.attrs.get(name).cloned())
    }

    fn bounding_box(&self, node: NodeRef) -> DriverResult<Option<BoundingBox>> {
        self.check_connection()?;
        Ok(self.get(node)?.bbox)
    }

    fn press_escape(&self) -> DriverResult<()> {
        self.check_connection()?;
        *self.escapes.borrow_mut() += 1;
        Ok(())
    }

    fn settle(&self, _wait: Duration) {}
}

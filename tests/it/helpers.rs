//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `RecordingCallbacks` - a `DropCallbacks` impl that records every call
//! - `TestNodeBuilder` - builder for dragged items and hover targets

use dropzone::types::{
    DraggedItem, DropCallbacks, HoverTarget, InlineSide, NestingLevels, NodeDescriptor,
};

// ============================================================================
// RecordingCallbacks - capture drop decisions for assertions
// ============================================================================

/// A single recorded drop decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropCall {
    LeftOf { item: u64, target: u64, depth: usize },
    RightOf { item: u64, target: u64, depth: usize },
    Above { item: u64, target: u64, depth: usize },
    Below { item: u64, target: u64, depth: usize },
    InlineLeft { item: u64, target: u64 },
    InlineRight { item: u64, target: u64 },
    Clear { item: u64 },
}

/// Records every callback invocation in order.
#[derive(Default)]
pub struct RecordingCallbacks {
    pub calls: Vec<DropCall>,
}

impl RecordingCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&DropCall> {
        self.calls.last()
    }
}

impl DropCallbacks for RecordingCallbacks {
    fn left_of(&mut self, item: &NodeDescriptor, target: &NodeDescriptor, depth: usize) {
        self.calls.push(DropCall::LeftOf {
            item: item.id,
            target: target.id,
            depth,
        });
    }

    fn right_of(&mut self, item: &NodeDescriptor, target: &NodeDescriptor, depth: usize) {
        self.calls.push(DropCall::RightOf {
            item: item.id,
            target: target.id,
            depth,
        });
    }

    fn above(&mut self, item: &NodeDescriptor, target: &NodeDescriptor, depth: usize) {
        self.calls.push(DropCall::Above {
            item: item.id,
            target: target.id,
            depth,
        });
    }

    fn below(&mut self, item: &NodeDescriptor, target: &NodeDescriptor, depth: usize) {
        self.calls.push(DropCall::Below {
            item: item.id,
            target: target.id,
            depth,
        });
    }

    fn inline_left(&mut self, item: &NodeDescriptor, target: &NodeDescriptor) {
        self.calls.push(DropCall::InlineLeft {
            item: item.id,
            target: target.id,
        });
    }

    fn inline_right(&mut self, item: &NodeDescriptor, target: &NodeDescriptor) {
        self.calls.push(DropCall::InlineRight {
            item: item.id,
            target: target.id,
        });
    }

    fn clear(&mut self, item_id: u64) {
        self.calls.push(DropCall::Clear { item: item_id });
    }
}

// ============================================================================
// TestNodeBuilder - builder pattern for drag participants
// ============================================================================

/// Builder for dragged items and hover targets.
///
/// # Example
/// ```ignore
/// let target = TestNodeBuilder::new(2)
///     .inline(InlineSide::Left)
///     .target();
/// ```
pub struct TestNodeBuilder {
    node: NodeDescriptor,
}

impl TestNodeBuilder {
    /// Leaf node with a uniform depth ceiling of 10 in every direction
    pub fn new(id: u64) -> Self {
        Self {
            node: NodeDescriptor::leaf(id, NestingLevels::uniform(10)),
        }
    }

    pub fn with_levels(mut self, levels: NestingLevels) -> Self {
        self.node.levels = levels;
        self
    }

    pub fn inline(mut self, side: InlineSide) -> Self {
        self.node.inline = Some(side);
        self
    }

    pub fn inlineable(mut self) -> Self {
        self.node.inlineable = true;
        self
    }

    pub fn with_inline_neighbour(mut self, id: u64) -> Self {
        self.node.has_inline_neighbour = Some(id);
        self
    }

    pub fn with_cells(mut self, cells: Vec<u64>) -> Self {
        self.node.cells = cells;
        self
    }

    pub fn dragged(self) -> DraggedItem {
        DraggedItem::new(self.node)
    }

    pub fn target(self) -> HoverTarget {
        HoverTarget::new(self.node)
    }
}

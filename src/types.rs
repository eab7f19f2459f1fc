//! Core types for the drop-zone classification engine.
//!
//! This module defines the narrow slice of the editor's data model the
//! engine reads (dragged items, hover targets and their node descriptors)
//! along with the geometric primitives and the drop-callback capability
//! set through which a classified hover produces an effect.

use serde::{Deserialize, Serialize};

// ============================================================================
// Geometry Primitives
// ============================================================================

/// A position in pixels.
///
/// Doubles as a per-grid-cell scale where `x`/`y` are the pixel width and
/// height of one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Pixel size of a hover target's drop region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetBounds {
    pub width: f32,
    pub height: f32,
}

impl TargetBounds {
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Discrete coordinates into a zone grid, clamped to `[0, dimension - 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridIndex {
    pub row: usize,
    pub column: usize,
}

/// Dimensions of a zone grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: usize,
    pub columns: usize,
}

// ============================================================================
// Node Descriptors
// ============================================================================

/// Side of a sibling an inline element is spliced against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InlineSide {
    Left,
    Right,
}

impl InlineSide {
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Maximum nesting depth permitted in each direction from a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestingLevels {
    pub above: usize,
    pub below: usize,
    pub left: usize,
    pub right: usize,
}

impl NestingLevels {
    /// Same depth ceiling in all four directions
    pub fn uniform(levels: usize) -> Self {
        Self {
            above: levels,
            below: levels,
            left: levels,
            right: levels,
        }
    }
}

/// The slice of an editor node this engine reads.
///
/// The editor's real node type is much richer; only the fields that drive
/// zone interpretation are mirrored here. This is also the payload handed
/// back through [`DropCallbacks`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    /// Unique node identifier
    pub id: u64,
    /// Set when the node is itself an inline element, tagged with the side
    /// it is spliced on
    #[serde(default)]
    pub inline: Option<InlineSide>,
    /// Identifier of the node currently spliced inline beside this one
    #[serde(default)]
    pub has_inline_neighbour: Option<u64>,
    /// Depth ceilings for ancestor insertion in each direction
    #[serde(default)]
    pub levels: NestingLevels,
    /// Child cell identifiers; non-empty marks a row container rather
    /// than a leaf cell
    #[serde(default)]
    pub cells: Vec<u64>,
    /// Whether the node's content plugin may be spliced inline
    #[serde(default)]
    pub inlineable: bool,
}

impl NodeDescriptor {
    /// Create a leaf-cell descriptor with the given depth ceilings
    pub fn leaf(id: u64, levels: NestingLevels) -> Self {
        Self {
            id,
            inline: None,
            has_inline_neighbour: None,
            levels,
            cells: Vec::new(),
            inlineable: false,
        }
    }

    /// True when the node is a row container rather than a leaf cell
    #[inline]
    pub fn is_row(&self) -> bool {
        !self.cells.is_empty()
    }

    /// True when the node is itself an inline element
    #[inline]
    pub fn is_inline(&self) -> bool {
        self.inline.is_some()
    }
}

// ============================================================================
// Drag Participants
// ============================================================================

/// The item being dragged. Read-only to this engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DraggedItem {
    /// Identity of the dragged item
    pub id: u64,
    node: NodeDescriptor,
}

impl DraggedItem {
    pub fn new(node: NodeDescriptor) -> Self {
        Self { id: node.id, node }
    }

    /// The raw node payload passed through to drop callbacks
    #[inline]
    pub fn raw_node(&self) -> &NodeDescriptor {
        &self.node
    }
}

/// The cell or row the pointer is currently over.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoverTarget {
    /// Identity of the hovered element
    pub id: u64,
    /// Descriptor of the hovered node
    pub node: NodeDescriptor,
}

impl HoverTarget {
    pub fn new(node: NodeDescriptor) -> Self {
        Self { id: node.id, node }
    }

    /// The raw node payload passed through to drop callbacks
    #[inline]
    pub fn raw_node(&self) -> &NodeDescriptor {
        &self.node
    }
}

// ============================================================================
// Drop Callbacks
// ============================================================================

/// Capability set through which a classified hover produces an effect.
///
/// The engine decides *which* of these to call and with what nesting
/// depth; executing the actual tree mutation is the caller's concern.
/// `depth` counts ancestor levels up from the hovered target (0 = directly
/// adjacent to the target itself).
pub trait DropCallbacks {
    fn left_of(&mut self, item: &NodeDescriptor, target: &NodeDescriptor, depth: usize);
    fn right_of(&mut self, item: &NodeDescriptor, target: &NodeDescriptor, depth: usize);
    fn above(&mut self, item: &NodeDescriptor, target: &NodeDescriptor, depth: usize);
    fn below(&mut self, item: &NodeDescriptor, target: &NodeDescriptor, depth: usize);
    fn inline_left(&mut self, item: &NodeDescriptor, target: &NodeDescriptor);
    fn inline_right(&mut self, item: &NodeDescriptor, target: &NodeDescriptor);
    /// Explicit "no drop here" signal for the dragged item
    fn clear(&mut self, item_id: u64);
}

//! Per-zone interpretation of a hover into a drop decision.
//!
//! Each [`ZoneCode`] maps to exactly one handler. Handlers receive the
//! dragged item, the hover target, the caller's [`DropCallbacks`] and the
//! geometric [`HoverContext`] assembled by the dispatcher, and invoke
//! exactly one callback (or none for suppressed duplicates upstream).
//!
//! The association is a fixed-size table indexed by the closed code set,
//! overridable at engine construction. A shipped grid referencing a code
//! with no handler is a configuration error surfaced by the dispatcher.

use crate::constants::INLINE_FALLBACK_DEPTH;
use crate::grid::ZoneCode;
use crate::hover::geometry;
use crate::hover::level::compute_level;
use crate::types::{
    DraggedItem, DropCallbacks, GridIndex, GridSize, HoverTarget, InlineSide, NodeDescriptor,
    Point, TargetBounds,
};

// ============================================================================
// Hover Context
// ============================================================================

/// Geometric context for one hover classification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverContext {
    /// Pixel bounds of the hovered drop region
    pub room: TargetBounds,
    /// Absolute mouse position within the drop region
    pub mouse: Point,
    /// Clamped grid cell occupied by the mouse
    pub position: GridIndex,
    /// Dimensions of the grid in use
    pub size: GridSize,
    /// Pixel size of one grid cell
    pub scale: Point,
}

impl HoverContext {
    /// Mouse position inside the occupied cell, rounded to integer pixels
    #[inline]
    pub fn relative_mouse(&self) -> Point {
        geometry::relative_mouse(self.mouse, self.position, self.scale)
    }
}

// ============================================================================
// Interpreter Table
// ============================================================================

/// A zone handler. Decides the final drop operation and nesting depth.
pub type Interpreter = fn(&DraggedItem, &HoverTarget, &mut dyn DropCallbacks, &HoverContext);

/// Fixed-size dispatch table from zone code to handler.
///
/// The code set is closed, so this is a plain array indexed by
/// [`ZoneCode::index`] rather than a dynamic map. Entries may be replaced
/// (or removed) when constructing an engine; the default table covers
/// every code.
#[derive(Clone)]
pub struct InterpreterTable {
    handlers: [Option<Interpreter>; ZoneCode::COUNT],
}

impl InterpreterTable {
    /// Table with no handlers registered
    pub fn empty() -> Self {
        Self {
            handlers: [None; ZoneCode::COUNT],
        }
    }

    /// Register or replace the handler for a code
    pub fn set(&mut self, code: ZoneCode, handler: Interpreter) -> &mut Self {
        self.handlers[code.index()] = Some(handler);
        self
    }

    /// Handler registered for a code, if any
    #[inline]
    pub fn get(&self, code: ZoneCode) -> Option<Interpreter> {
        self.handlers[code.index()]
    }
}

impl Default for InterpreterTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table
            .set(ZoneCode::None, clear_zone)
            .set(ZoneCode::TopLeftCorner, corner_top_left)
            .set(ZoneCode::TopRightCorner, corner_top_right)
            .set(ZoneCode::BottomRightCorner, corner_bottom_right)
            .set(ZoneCode::BottomLeftCorner, corner_bottom_left)
            .set(ZoneCode::AboveHere, above_here)
            .set(ZoneCode::AboveAncestor, above_ancestor)
            .set(ZoneCode::BelowHere, below_here)
            .set(ZoneCode::BelowAncestor, below_ancestor)
            .set(ZoneCode::LeftHere, left_here)
            .set(ZoneCode::LeftAncestor, left_ancestor)
            .set(ZoneCode::RightHere, right_here)
            .set(ZoneCode::RightAncestor, right_ancestor)
            .set(ZoneCode::InlineLeft, inline_left)
            .set(ZoneCode::InlineRight, inline_right);
        table
    }
}

// ============================================================================
// Depth Computation
// ============================================================================

/// Depth for a horizontal ancestor zone.
///
/// Row containers always resolve to the maximum level: a row inserts at
/// row level, never partially nested. Left zones measure from the far
/// edge inward, so they invert the computed depth. A depth of 0 beside an
/// inline target is not a valid insertion point and bumps to 1.
pub fn compute_horizontal(
    ctx: &HoverContext,
    target: &HoverTarget,
    levels: usize,
    invert: bool,
) -> usize {
    ancestor_depth(ctx, target, levels, invert)
}

/// Depth for a vertical ancestor zone.
///
/// Shares its body with [`compute_horizontal`] and therefore reads the
/// *horizontal* component of the relative mouse position. Shipped editors
/// depend on that behavior; see the axis test in `tests/it` before
/// changing it.
pub fn compute_vertical(
    ctx: &HoverContext,
    target: &HoverTarget,
    levels: usize,
    invert: bool,
) -> usize {
    ancestor_depth(ctx, target, levels, invert)
}

fn ancestor_depth(ctx: &HoverContext, target: &HoverTarget, levels: usize, invert: bool) -> usize {
    if target.node.is_row() {
        return levels;
    }
    let mut depth = compute_level(ctx.scale.x, levels, ctx.relative_mouse().x);
    if invert {
        depth = levels - depth;
    }
    if target.node.is_inline() && depth == 0 {
        depth = 1;
    }
    depth
}

// ============================================================================
// Handlers
// ============================================================================

fn clear_zone(
    item: &DraggedItem,
    _target: &HoverTarget,
    callbacks: &mut dyn DropCallbacks,
    _ctx: &HoverContext,
) {
    callbacks.clear(item.id);
}

/// Depth for corner drops: an inline target pushes the insertion one
/// ancestor up, since depth 0 beside an inline element is invalid.
fn corner_depth(target: &HoverTarget) -> usize {
    if target.node.is_inline() { 1 } else { 0 }
}

// A corner is geometrically ambiguous between its two adjacent edges; the
// diagonal through the corner arbitrates. Ties fall to the vertical edge
// because the comparisons are strict.

fn corner_top_left(
    item: &DraggedItem,
    target: &HoverTarget,
    callbacks: &mut dyn DropCallbacks,
    ctx: &HoverContext,
) {
    let rel = ctx.relative_mouse();
    let depth = corner_depth(target);
    if rel.x < rel.y {
        callbacks.left_of(item.raw_node(), target.raw_node(), depth);
    } else {
        callbacks.above(item.raw_node(), target.raw_node(), depth);
    }
}

fn corner_top_right(
    item: &DraggedItem,
    target: &HoverTarget,
    callbacks: &mut dyn DropCallbacks,
    ctx: &HoverContext,
) {
    let rel = ctx.relative_mouse();
    let depth = corner_depth(target);
    if rel.x > rel.y {
        callbacks.right_of(item.raw_node(), target.raw_node(), depth);
    } else {
        callbacks.above(item.raw_node(), target.raw_node(), depth);
    }
}

fn corner_bottom_right(
    item: &DraggedItem,
    target: &HoverTarget,
    callbacks: &mut dyn DropCallbacks,
    ctx: &HoverContext,
) {
    let rel = ctx.relative_mouse();
    let depth = corner_depth(target);
    if rel.x > rel.y {
        callbacks.right_of(item.raw_node(), target.raw_node(), depth);
    } else {
        callbacks.below(item.raw_node(), target.raw_node(), depth);
    }
}

fn corner_bottom_left(
    item: &DraggedItem,
    target: &HoverTarget,
    callbacks: &mut dyn DropCallbacks,
    ctx: &HoverContext,
) {
    let rel = ctx.relative_mouse();
    let depth = corner_depth(target);
    if rel.x < rel.y {
        callbacks.left_of(item.raw_node(), target.raw_node(), depth);
    } else {
        callbacks.below(item.raw_node(), target.raw_node(), depth);
    }
}

// "Here" zones insert directly adjacent to the hovered element.

fn above_here(
    item: &DraggedItem,
    target: &HoverTarget,
    callbacks: &mut dyn DropCallbacks,
    _ctx: &HoverContext,
) {
    callbacks.above(item.raw_node(), target.raw_node(), 0);
}

fn below_here(
    item: &DraggedItem,
    target: &HoverTarget,
    callbacks: &mut dyn DropCallbacks,
    _ctx: &HoverContext,
) {
    callbacks.below(item.raw_node(), target.raw_node(), 0);
}

fn left_here(
    item: &DraggedItem,
    target: &HoverTarget,
    callbacks: &mut dyn DropCallbacks,
    _ctx: &HoverContext,
) {
    callbacks.left_of(item.raw_node(), target.raw_node(), 0);
}

fn right_here(
    item: &DraggedItem,
    target: &HoverTarget,
    callbacks: &mut dyn DropCallbacks,
    _ctx: &HoverContext,
) {
    callbacks.right_of(item.raw_node(), target.raw_node(), 0);
}

// "Ancestor" zones insert beside an ancestor chosen by the computed depth.

fn above_ancestor(
    item: &DraggedItem,
    target: &HoverTarget,
    callbacks: &mut dyn DropCallbacks,
    ctx: &HoverContext,
) {
    let depth = compute_vertical(ctx, target, target.node.levels.above, true);
    callbacks.above(item.raw_node(), target.raw_node(), depth);
}

fn below_ancestor(
    item: &DraggedItem,
    target: &HoverTarget,
    callbacks: &mut dyn DropCallbacks,
    ctx: &HoverContext,
) {
    let depth = compute_vertical(ctx, target, target.node.levels.below, false);
    callbacks.below(item.raw_node(), target.raw_node(), depth);
}

fn left_ancestor(
    item: &DraggedItem,
    target: &HoverTarget,
    callbacks: &mut dyn DropCallbacks,
    ctx: &HoverContext,
) {
    let depth = compute_horizontal(ctx, target, target.node.levels.left, true);
    callbacks.left_of(item.raw_node(), target.raw_node(), depth);
}

fn right_ancestor(
    item: &DraggedItem,
    target: &HoverTarget,
    callbacks: &mut dyn DropCallbacks,
    ctx: &HoverContext,
) {
    let depth = compute_horizontal(ctx, target, target.node.levels.right, false);
    callbacks.right_of(item.raw_node(), target.raw_node(), depth);
}

// Inline zones splice the item directly beside the target, unless that
// would produce an invalid state.

/// True when splicing inline on `side` must fall back to a plain
/// left/right insertion:
///
/// - the target is itself inline (no inline-in-inline),
/// - the dragged item's content plugin cannot render inline,
/// - the target already has a different inline neighbour, or
/// - the target's inline neighbour is this item, sitting on the opposite
///   side (prevents flapping across the target mid-drag).
fn inline_blocked(item: &DraggedItem, target: &NodeDescriptor, side: InlineSide) -> bool {
    if target.is_inline() || !item.raw_node().inlineable {
        return true;
    }
    match target.has_inline_neighbour {
        Some(neighbour) if neighbour != item.id => true,
        Some(_) => item.raw_node().inline == Some(side.opposite()),
        None => false,
    }
}

fn inline_left(
    item: &DraggedItem,
    target: &HoverTarget,
    callbacks: &mut dyn DropCallbacks,
    _ctx: &HoverContext,
) {
    if inline_blocked(item, target.raw_node(), InlineSide::Left) {
        callbacks.left_of(item.raw_node(), target.raw_node(), INLINE_FALLBACK_DEPTH);
    } else {
        callbacks.inline_left(item.raw_node(), target.raw_node());
    }
}

fn inline_right(
    item: &DraggedItem,
    target: &HoverTarget,
    callbacks: &mut dyn DropCallbacks,
    _ctx: &HoverContext,
) {
    if inline_blocked(item, target.raw_node(), InlineSide::Right) {
        callbacks.right_of(item.raw_node(), target.raw_node(), INLINE_FALLBACK_DEPTH);
    } else {
        callbacks.inline_right(item.raw_node(), target.raw_node());
    }
}

//! Engine-wide constants.
//!
//! Centralizes magic numbers shared between the zone grids, the level
//! computer and the zone interpreters.

// ============================================================================
// Grid Names
// ============================================================================

/// Grid used when a hover request does not name one
pub const DEFAULT_GRID_NAME: &str = "10x10";

/// Variant of the default grid without the inline splice band
pub const NO_INLINE_GRID_NAME: &str = "10x10-no-inline";

// ============================================================================
// Level Computation
// ============================================================================

/// Fixed guard band per nesting step, in pixels.
///
/// Keeps adjacent depth bands at least this wide so neighbouring drop
/// indicators stay visually distinguishable.
pub const STEP_GUARD_PX: f32 = 2.0;

// ============================================================================
// Inline Splicing
// ============================================================================

/// Depth used when an inline splice is rejected and the drop falls back
/// to a plain left/right insertion just outside the target.
pub const INLINE_FALLBACK_DEPTH: usize = 2;

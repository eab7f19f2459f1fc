//! Nesting-depth computation from a 1-D pixel offset.
//!
//! Translates an offset across a cell of pixel size `width` into one of
//! `levels + 1` discrete nesting depths. Two regimes:
//!
//! - Small cells (no room for at least 2 px per step) use a straight
//!   linear proportion.
//! - Larger cells subdivide the spare width by repeated halving, so the
//!   band nearest the cell's own edge is the widest and bands deeper into
//!   the cell progressively narrow. Fine depth discrimination happens
//!   where it matters, near the boundary, and the ambiguous middle
//!   collapses quickly.
//!
//! Every band keeps a fixed 2 px guard so adjacent depths stay visually
//! distinguishable.

use crate::constants::STEP_GUARD_PX;

/// Map a pixel offset `position` across a cell of size `width` to a
/// nesting depth in `[0, levels]`.
///
/// Monotonically non-decreasing in `position` for fixed `width` and
/// `levels`.
pub fn compute_level(width: f32, levels: usize, position: f32) -> usize {
    if levels == 0 {
        return 0;
    }

    // Not enough pixels for geometric subdivision: each step needs at
    // least the guard band's width.
    if width <= (levels as f32 + 1.0) * STEP_GUARD_PX {
        let step = width / levels as f32;
        let linear = (position / step).round() as i64;
        return linear.clamp(0, levels as i64) as usize;
    }

    if position <= 0.0 {
        return 0;
    }

    // Cumulative steps by repeated halving of the spare width.
    let spare = width - (levels as f32 + 1.0) * STEP_GUARD_PX;
    let mut steps = Vec::with_capacity(levels + 2);
    steps.push(0.0_f32);
    let mut current = spare;
    for i in 0..=levels {
        steps.push(steps[i] + current / 2.0);
        current /= 2.0;
    }

    // First band containing the position wins; the guard terms reinsert
    // the fixed per-step padding stripped out of `spare`.
    for i in 0..=levels {
        let lower = steps[i] + i as f32 * STEP_GUARD_PX;
        let upper = steps[i + 1] + (i as f32 + 1.0) * STEP_GUARD_PX;
        if position >= lower && position < upper {
            return i;
        }
    }

    levels
}

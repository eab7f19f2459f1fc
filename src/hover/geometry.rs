//! Pixel-space to grid-space conversion for hover classification.
//!
//! Centralizes the coordinate formulas so the dispatcher and the zone
//! interpreters agree on how a mouse position maps into a grid cell.

use crate::error::HoverError;
use crate::grid::ZoneGrid;
use crate::types::{GridIndex, Point, TargetBounds};

/// Pixel size of one grid cell for the given target bounds.
///
/// A grid with zero rows or columns is a configuration error, never a
/// panic; [`ZoneGrid`] construction already rejects it, so this only
/// defends the seam.
pub fn scale_for(bounds: TargetBounds, grid: &ZoneGrid) -> Result<Point, HoverError> {
    let rows = grid.rows();
    let columns = grid.columns();
    if rows == 0 || columns == 0 {
        return Err(HoverError::EmptyGrid);
    }
    Ok(Point {
        x: bounds.width / columns as f32,
        y: bounds.height / rows as f32,
    })
}

/// Grid cell occupied by the mouse, clamped to the grid.
///
/// Clamping covers the mouse sitting exactly on or past the target's far
/// edge, which is common at drag release.
pub fn cell_index_for(mouse: Point, scale: Point, grid: &ZoneGrid) -> GridIndex {
    let row = (mouse.y / scale.y).floor() as i64;
    let column = (mouse.x / scale.x).floor() as i64;
    GridIndex {
        row: row.clamp(0, grid.rows() as i64 - 1) as usize,
        column: column.clamp(0, grid.columns() as i64 - 1) as usize,
    }
}

/// Mouse position inside the occupied cell, origin top-left, rounded to
/// integer pixels.
pub fn relative_mouse(mouse: Point, index: GridIndex, scale: Point) -> Point {
    Point {
        x: (mouse.x - index.column as f32 * scale.x).round(),
        y: (mouse.y - index.row as f32 * scale.y).round(),
    }
}

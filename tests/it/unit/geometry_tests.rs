//! Unit tests for pixel-space to grid-space conversion.

use dropzone::hover::geometry::{cell_index_for, relative_mouse, scale_for};
use dropzone::types::{GridIndex, Point, TargetBounds};
use dropzone::{ZoneGrid, default_grids};
use proptest::prelude::*;

fn default_grid() -> &'static ZoneGrid {
    &default_grids()["10x10"]
}

#[test]
fn test_scale_for_default_grid() {
    let scale = scale_for(TargetBounds::new(200.0, 120.0), default_grid()).unwrap();
    assert_eq!(scale, Point::new(20.0, 12.0));
}

#[test]
fn test_cell_index_origin_and_far_corner() {
    let scale = Point::new(10.0, 10.0);
    assert_eq!(
        cell_index_for(Point::new(0.0, 0.0), scale, default_grid()),
        GridIndex { row: 0, column: 0 }
    );
    assert_eq!(
        cell_index_for(Point::new(99.9, 99.9), scale, default_grid()),
        GridIndex { row: 9, column: 9 }
    );
}

#[test]
fn test_relative_mouse_origin_is_cell_top_left() {
    let scale = Point::new(10.0, 10.0);
    let index = GridIndex { row: 5, column: 0 };
    assert_eq!(
        relative_mouse(Point::new(0.0, 50.0), index, scale),
        Point::new(0.0, 0.0)
    );
    assert_eq!(
        relative_mouse(Point::new(9.0, 59.0), index, scale),
        Point::new(9.0, 9.0)
    );
}

proptest! {
    // Drag release routinely lands the pointer outside the target; the
    // index must clamp instead of indexing out of bounds.
    #[test]
    fn prop_cell_index_always_in_grid(
        x in -1000.0f32..1000.0,
        y in -1000.0f32..1000.0,
    ) {
        let grid = default_grid();
        let scale = scale_for(TargetBounds::new(100.0, 100.0), grid).unwrap();
        let index = cell_index_for(Point::new(x, y), scale, grid);
        prop_assert!(index.row < grid.rows());
        prop_assert!(index.column < grid.columns());
    }

    #[test]
    fn prop_relative_mouse_within_cell_for_inside_points(
        x in 0.0f32..100.0,
        y in 0.0f32..100.0,
    ) {
        let grid = default_grid();
        let scale = scale_for(TargetBounds::new(100.0, 100.0), grid).unwrap();
        let index = cell_index_for(Point::new(x, y), scale, grid);
        let rel = relative_mouse(Point::new(x, y), index, scale);
        prop_assert!(rel.x >= 0.0 && rel.x <= scale.x);
        prop_assert!(rel.y >= 0.0 && rel.y <= scale.y);
    }
}

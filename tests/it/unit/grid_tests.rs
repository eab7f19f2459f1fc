//! Unit tests for zone codes and grid configuration.

use std::collections::HashSet;

use dropzone::{InterpreterTable, ZoneCode, ZoneGrid, default_grids};

#[test]
fn test_every_code_appears_in_a_shipped_grid() {
    let shipped: HashSet<ZoneCode> = default_grids()
        .values()
        .flat_map(|grid| grid.codes())
        .collect();
    for code in ZoneCode::ALL {
        assert!(shipped.contains(&code), "{code:?} unused by every grid");
    }
}

#[test]
fn test_every_shipped_code_has_an_interpreter() {
    let table = InterpreterTable::default();
    for (name, grid) in default_grids() {
        for code in grid.codes() {
            assert!(
                table.get(code).is_some(),
                "grid {name:?} references {code:?} with no handler"
            );
        }
    }
}

#[test]
fn test_grid_serializes_as_numeric_codes() {
    let grid = &default_grids()["10x10"];
    let json = serde_json::to_value(grid).unwrap();
    // Row 0: corner, eight above-ancestor cells, corner.
    assert_eq!(
        json[0],
        serde_json::json!([10, 201, 201, 201, 201, 201, 201, 201, 201, 11])
    );
}

#[test]
fn test_grid_round_trips_through_json() {
    for grid in default_grids().values() {
        let json = serde_json::to_string(grid).unwrap();
        let restored: ZoneGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(&restored, grid);
    }
}

#[test]
fn test_editor_authored_grid_parses() {
    // A minimal editor-supplied override: corners only, dead center.
    let json = "[[10, 201, 11], [221, 0, 231], [13, 211, 12]]";
    let grid: ZoneGrid = serde_json::from_str(json).unwrap();
    assert_eq!(grid.rows(), 3);
    assert_eq!(grid.codes().filter(|c| *c == ZoneCode::None).count(), 1);
}

#[test]
fn test_non_square_grid_rejected_at_parse() {
    let json = "[[10, 11], [13]]";
    assert!(serde_json::from_str::<ZoneGrid>(json).is_err());
}

#[test]
fn test_unknown_code_rejected_at_parse() {
    let json = "[[10, 99], [13, 12]]";
    assert!(serde_json::from_str::<ZoneGrid>(json).is_err());
}

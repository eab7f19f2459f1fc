//! Zone codes and the named square grids that map cell positions to them.
//!
//! A [`ZoneGrid`] partitions a hover target's bounding box into discrete
//! regions: corners, edge bands split between "here" and "ancestor"
//! insertion, an optional inline splice band, and a dead center. Grids are
//! keyed by name so an editor can register several resolutions and select
//! one per hover request.
//!
//! Codes carry stable numeric values partitioned by family (corners in the
//! tens, edge families in the two-hundreds, inline in the three-hundreds)
//! so editor-authored grid overrides serialize compactly.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_GRID_NAME, NO_INLINE_GRID_NAME};
use crate::error::HoverError;
use crate::types::{GridIndex, GridSize};

// ============================================================================
// Zone Codes
// ============================================================================

/// Classified drop intent for one grid cell.
///
/// Corners are numbered clockwise from the top-left. "Here" zones insert
/// directly adjacent to the hovered element; "Ancestor" zones insert
/// adjacent to an ancestor chosen by the computed nesting depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum ZoneCode {
    /// Dead region - hovering here clears any pending drop
    None,
    TopLeftCorner,
    TopRightCorner,
    BottomRightCorner,
    BottomLeftCorner,
    AboveHere,
    AboveAncestor,
    BelowHere,
    BelowAncestor,
    LeftHere,
    LeftAncestor,
    RightHere,
    RightAncestor,
    InlineLeft,
    InlineRight,
}

impl ZoneCode {
    /// Number of codes in the enumeration
    pub const COUNT: usize = 15;

    /// Every code, in dense-index order
    pub const ALL: [ZoneCode; Self::COUNT] = [
        Self::None,
        Self::TopLeftCorner,
        Self::TopRightCorner,
        Self::BottomRightCorner,
        Self::BottomLeftCorner,
        Self::AboveHere,
        Self::AboveAncestor,
        Self::BelowHere,
        Self::BelowAncestor,
        Self::LeftHere,
        Self::LeftAncestor,
        Self::RightHere,
        Self::RightAncestor,
        Self::InlineLeft,
        Self::InlineRight,
    ];

    /// Dense index for fixed-size dispatch tables
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable numeric wire code, partitioned by family
    pub fn code(self) -> u16 {
        match self {
            Self::None => 0,
            Self::TopLeftCorner => 10,
            Self::TopRightCorner => 11,
            Self::BottomRightCorner => 12,
            Self::BottomLeftCorner => 13,
            Self::AboveHere => 200,
            Self::AboveAncestor => 201,
            Self::BelowHere => 210,
            Self::BelowAncestor => 211,
            Self::LeftHere => 220,
            Self::LeftAncestor => 221,
            Self::RightHere => 230,
            Self::RightAncestor => 231,
            Self::InlineLeft => 300,
            Self::InlineRight => 301,
        }
    }

    /// Resolve a numeric wire code back to its zone
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|zone| zone.code() == code)
    }
}

impl From<ZoneCode> for u16 {
    fn from(zone: ZoneCode) -> Self {
        zone.code()
    }
}

impl TryFrom<u16> for ZoneCode {
    type Error = HoverError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(HoverError::UnknownZoneCode(code))
    }
}

// ============================================================================
// Zone Grids
// ============================================================================

/// A square matrix of [`ZoneCode`], indexed row-major.
///
/// Squareness and non-zero dimension are validated at construction and at
/// deserialization, so a malformed editor-supplied grid surfaces once
/// instead of on every pointer move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<ZoneCode>>", into = "Vec<Vec<ZoneCode>>")]
pub struct ZoneGrid {
    cells: Vec<Vec<ZoneCode>>,
}

impl ZoneGrid {
    /// Build a grid from row-major cells, validating shape
    pub fn new(cells: Vec<Vec<ZoneCode>>) -> Result<Self, HoverError> {
        if cells.is_empty() || cells[0].is_empty() {
            return Err(HoverError::EmptyGrid);
        }
        let expected = cells.len();
        for (row, columns) in cells.iter().enumerate() {
            if columns.len() != expected {
                return Err(HoverError::NotSquare {
                    row,
                    got: columns.len(),
                    expected,
                });
            }
        }
        Ok(Self { cells })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.cells[0].len()
    }

    #[inline]
    pub fn size(&self) -> GridSize {
        GridSize {
            rows: self.rows(),
            columns: self.columns(),
        }
    }

    /// Zone code at a clamped grid index
    #[inline]
    pub fn get(&self, index: GridIndex) -> ZoneCode {
        self.cells[index.row][index.column]
    }

    /// Iterate over every cell's code, row-major
    pub fn codes(&self) -> impl Iterator<Item = ZoneCode> + '_ {
        self.cells.iter().flatten().copied()
    }
}

impl TryFrom<Vec<Vec<ZoneCode>>> for ZoneGrid {
    type Error = HoverError;

    fn try_from(cells: Vec<Vec<ZoneCode>>) -> Result<Self, Self::Error> {
        Self::new(cells)
    }
}

impl From<ZoneGrid> for Vec<Vec<ZoneCode>> {
    fn from(grid: ZoneGrid) -> Self {
        grid.cells
    }
}

// ============================================================================
// Default Grids
// ============================================================================

/// The built-in grid set: `"10x10"` and `"10x10-no-inline"`.
///
/// Both share the same layout: corner codes in the four corners and again
/// one ring in (a corner is ambiguous between its two adjacent edges, so
/// the diagonal arbitration applies across a two-cell band), ancestor
/// bands on the outer ring, here bands one ring in, and a dead center.
/// The `"10x10"` grid additionally carries an inline splice band across
/// the upper inner region.
pub fn default_grids() -> &'static HashMap<String, ZoneGrid> {
    static DEFAULTS: Lazy<HashMap<String, ZoneGrid>> = Lazy::new(|| {
        let mut grids = HashMap::new();
        grids.insert(DEFAULT_GRID_NAME.to_string(), ten_by_ten(true));
        grids.insert(NO_INLINE_GRID_NAME.to_string(), ten_by_ten(false));
        grids
    });
    &DEFAULTS
}

fn ten_by_ten(with_inline: bool) -> ZoneGrid {
    let no = ZoneCode::None;
    let c1 = ZoneCode::TopLeftCorner;
    let c2 = ZoneCode::TopRightCorner;
    let c3 = ZoneCode::BottomRightCorner;
    let c4 = ZoneCode::BottomLeftCorner;
    let ah = ZoneCode::AboveHere;
    let aa = ZoneCode::AboveAncestor;
    let bh = ZoneCode::BelowHere;
    let ba = ZoneCode::BelowAncestor;
    let lh = ZoneCode::LeftHere;
    let la = ZoneCode::LeftAncestor;
    let rh = ZoneCode::RightHere;
    let ra = ZoneCode::RightAncestor;
    let (il, ir) = if with_inline {
        (ZoneCode::InlineLeft, ZoneCode::InlineRight)
    } else {
        (no, no)
    };

    ZoneGrid::new(vec![
        vec![c1, aa, aa, aa, aa, aa, aa, aa, aa, c2],
        vec![la, c1, ah, ah, ah, ah, ah, ah, c2, ra],
        vec![la, lh, il, il, il, ir, ir, ir, rh, ra],
        vec![la, lh, no, no, no, no, no, no, rh, ra],
        vec![la, lh, no, no, no, no, no, no, rh, ra],
        vec![la, lh, no, no, no, no, no, no, rh, ra],
        vec![la, lh, no, no, no, no, no, no, rh, ra],
        vec![la, lh, no, no, no, no, no, no, rh, ra],
        vec![la, c4, bh, bh, bh, bh, bh, bh, c3, ra],
        vec![c4, ba, ba, ba, ba, ba, ba, ba, ba, c3],
    ])
    .expect("built-in grid is square")
}

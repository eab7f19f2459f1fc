//! Hover dispatch - orchestrates classification and suppresses redundant
//! per-pointer-move work.
//!
//! ## Performance Notes
//!
//! `hover` runs once per pointer-move event during a drag, often many
//! times per frame with an unchanged effective zone. The dispatcher
//! memoizes the full dispatch signature per grid name and skips the
//! interpreter entirely when nothing changed.

use std::collections::HashMap;

use tracing::{error, trace};

use crate::constants::DEFAULT_GRID_NAME;
use crate::error::HoverError;
use crate::grid::{ZoneGrid, default_grids};
use crate::hover::geometry;
use crate::hover::interpret::{HoverContext, InterpreterTable};
use crate::types::{DraggedItem, DropCallbacks, GridIndex, GridSize, HoverTarget, Point, TargetBounds};

/// One hover request from the editor's pointer-move handler.
#[derive(Clone, Copy, Debug)]
pub struct HoverRequest<'a> {
    /// Pixel bounds of the hovered cell's drop region
    pub room: TargetBounds,
    /// Mouse position relative to the drop region's origin
    pub mouse: Point,
    /// Named grid to classify against; `None` selects the default
    pub grid_name: Option<&'a str>,
}

/// Full signature of a dispatched hover, compared field-by-field against
/// the previous call for the same grid name. The callback set is a
/// capability handed in per call and deliberately not part of the
/// signature.
#[derive(Clone, Debug, PartialEq)]
struct DispatchSignature {
    item: u64,
    target: u64,
    room: TargetBounds,
    mouse: Point,
    position: GridIndex,
    size: GridSize,
    scale: Point,
}

/// The drop-zone classification engine.
///
/// Grids and the zone-to-interpreter table are fixed at construction;
/// the per-grid-name dispatch memo is the only mutable state. One
/// instance serves one drag surface on one event thread.
pub struct HoverEngine {
    grids: HashMap<String, ZoneGrid>,
    interpreters: InterpreterTable,
    last: HashMap<String, DispatchSignature>,
}

impl HoverEngine {
    /// Engine with the built-in grids and interpreter table
    pub fn new() -> Self {
        Self::with_config(None, None)
    }

    /// Engine with optional grid-set and interpreter-table overrides;
    /// omitted values fall back to the built-in defaults.
    pub fn with_config(
        grids: Option<HashMap<String, ZoneGrid>>,
        interpreters: Option<InterpreterTable>,
    ) -> Self {
        Self {
            grids: grids.unwrap_or_else(|| default_grids().clone()),
            interpreters: interpreters.unwrap_or_default(),
            last: HashMap::new(),
        }
    }

    /// Classify a hover and invoke the matching drop callback.
    ///
    /// Configuration errors (unknown grid, zero-dimension grid, missing
    /// interpreter) are logged and absorbed: a drag session never aborts
    /// because of a malformed grid set.
    pub fn hover(
        &mut self,
        item: &DraggedItem,
        target: &HoverTarget,
        callbacks: &mut dyn DropCallbacks,
        request: HoverRequest<'_>,
    ) {
        if let Err(err) = self.try_hover(item, target, callbacks, request) {
            error!(
                error = %err,
                grid = request.grid_name.unwrap_or(DEFAULT_GRID_NAME),
                item = item.id,
                target = target.id,
                "hover dispatch dropped"
            );
        }
    }

    fn try_hover(
        &mut self,
        item: &DraggedItem,
        target: &HoverTarget,
        callbacks: &mut dyn DropCallbacks,
        request: HoverRequest<'_>,
    ) -> Result<(), HoverError> {
        let name = request.grid_name.unwrap_or(DEFAULT_GRID_NAME);
        let grid = self
            .grids
            .get(name)
            .ok_or_else(|| HoverError::UnknownGrid(name.to_string()))?;

        let scale = geometry::scale_for(request.room, grid)?;
        let position = geometry::cell_index_for(request.mouse, scale, grid);
        let code = grid.get(position);
        let Some(interpreter) = self.interpreters.get(code) else {
            return Err(HoverError::MissingInterpreter { code });
        };

        let signature = DispatchSignature {
            item: item.id,
            target: target.id,
            room: request.room,
            mouse: request.mouse,
            position,
            size: grid.size(),
            scale,
        };
        if self.last.get(name) == Some(&signature) {
            trace!(grid = name, zone = ?code, "duplicate hover suppressed");
            return Ok(());
        }

        let context = HoverContext {
            room: request.room,
            mouse: request.mouse,
            position,
            size: grid.size(),
            scale,
        };
        self.last.insert(name.to_string(), signature);
        interpreter(item, target, callbacks, &context);
        Ok(())
    }
}

impl Default for HoverEngine {
    fn default() -> Self {
        Self::new()
    }
}

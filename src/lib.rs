//! Spatial hit-testing and drop-zone classification for drag-and-drop
//! editors.
//!
//! As the user drags an item over a target cell, this engine decides what
//! kind of insertion is being requested - above, below, left or right of
//! the target, nested at some ancestor depth, spliced inline, or nothing -
//! and how deep into the target's hierarchy it should land. Executing the
//! drop is delegated to the caller through the [`DropCallbacks`]
//! capability set; the engine itself never mutates the document tree.
//!
//! ```no_run
//! use dropzone::{HoverEngine, HoverRequest};
//! use dropzone::types::{Point, TargetBounds};
//!
//! # fn example(item: &dropzone::types::DraggedItem,
//! #            target: &dropzone::types::HoverTarget,
//! #            callbacks: &mut dyn dropzone::types::DropCallbacks) {
//! let mut engine = HoverEngine::new();
//! engine.hover(item, target, callbacks, HoverRequest {
//!     room: TargetBounds::new(100.0, 100.0),
//!     mouse: Point::new(12.0, 48.0),
//!     grid_name: None,
//! });
//! # }
//! ```

pub mod constants;
pub mod error;
pub mod grid;
pub mod hover;
pub mod types;

pub use error::{HoverError, HoverResult};
pub use grid::{ZoneCode, ZoneGrid, default_grids};
pub use hover::{HoverContext, HoverEngine, HoverRequest, InterpreterTable, compute_level};
pub use types::{DraggedItem, DropCallbacks, HoverTarget, NodeDescriptor};

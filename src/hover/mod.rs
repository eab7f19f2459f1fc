//! Hover classification pipeline.
//!
//! Turns a mouse position over a drop target into exactly one drop
//! decision, delivered through the caller's [`DropCallbacks`].
//!
//! ## Modules
//!
//! - `geometry` - pixel-space to grid-space conversion
//! - `level` - nesting depth from a 1-D pixel offset
//! - `interpret` - per-zone handlers and the dispatch table
//! - `engine` - orchestration and duplicate suppression
//!
//! [`DropCallbacks`]: crate::types::DropCallbacks

pub mod engine;
pub mod geometry;
pub mod interpret;
pub mod level;

pub use engine::{HoverEngine, HoverRequest};
pub use interpret::{HoverContext, Interpreter, InterpreterTable};
pub use level::compute_level;

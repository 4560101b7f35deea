//! # Pagecraft Editor
//!
//! Command-driven editing core for the page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ UI input (canvas, toolbars, drag layer)     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession facade                  │
//! │  - Build commands (ids, default elements)   │
//! │  - reduce(state, command) → next state      │
//! │  - UndoStack snapshots (document only)      │
//! │  - Rich text reconciliation on content edits│
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ model: Document snapshot → rendering layer  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core principles
//!
//! 1. **State is immutable between transitions**: the reducer builds a new
//!    state; readers always observe a fully formed, invariant-satisfying
//!    snapshot
//! 2. **Failure is absorbed**: commands naming missing entities no-op with
//!    the state unchanged, never a thrown fault
//! 3. **History is synchronous**: the snapshot is taken in the same call
//!    that applies the command, with no deferred scheduling to race
//! 4. **View state never enters history**: undo/redo restore the document
//!    while preserving selection, preview mode, and viewport

mod commands;
mod errors;
mod project;
mod reducer;
mod session;
mod state;
mod undo_stack;

pub use commands::Command;
pub use errors::EditorError;
pub use project::{Project, ProjectStorage};
pub use reducer::reduce;
pub use session::EditSession;
pub use state::{SessionState, ViewState, Viewport, RECENT_KINDS_CAP};
pub use undo_stack::UndoStack;

// Re-export model types for convenience
pub use pagecraft_model::{
    Document, DropZone, Element, ElementKind, ElementPatch, IntegrityError, StylePatch, Template,
};

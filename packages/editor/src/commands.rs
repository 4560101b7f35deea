//! Commands accepted by the reducer.
//!
//! Commands come in two classes. Structural commands change the document
//! and are recorded in history; view commands touch only transient fields
//! and bypass history entirely. Commands carry everything the reducer
//! needs, including freshly generated ids, so the reducer itself stays
//! pure and deterministic.

use pagecraft_model::{Element, ElementKind, ElementPatch};
use serde::{Deserialize, Serialize};

use crate::state::Viewport;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Insert a fully built element into a zone and select it.
    AddElement { element: Element, zone_id: String },

    /// Shallow-merge a partial update into an element.
    UpdateElement { id: String, patch: ElementPatch },

    /// Remove an element from the document and its owning zone.
    DeleteElement { id: String },

    /// Clone an element under a caller-supplied fresh id, appended to the
    /// same zone, and select the clone.
    DuplicateElement { id: String, new_id: String },

    /// Atomically relocate an element between zones. `index` defaults to
    /// appending at the end of the destination.
    MoveElement {
        id: String,
        from_zone: String,
        to_zone: String,
        index: Option<usize>,
    },

    /// Switch the current template, clearing the selection.
    SetTemplate { id: String },

    SelectElement { id: Option<String> },
    SelectZone { id: Option<String> },
    TogglePreview,
    SetViewport { viewport: Viewport },
    SetDragging { dragging: bool },

    /// Record an element kind as recently used.
    AddRecentKind { kind: ElementKind },
}

impl Command {
    /// Structural commands are history-worthy; view commands are not.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Command::AddElement { .. }
                | Command::UpdateElement { .. }
                | Command::DeleteElement { .. }
                | Command::DuplicateElement { .. }
                | Command::MoveElement { .. }
                | Command::SetTemplate { .. }
        )
    }
}

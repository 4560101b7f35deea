//! Session state.
//!
//! The state splits into the persistent [`Document`] and transient
//! [`ViewState`]. The split is load-bearing: history snapshots and saved
//! projects carry only the document, so undo/redo and reload never clobber
//! selection, preview mode, or the viewport.

use pagecraft_model::{Document, DropZone, Element, ElementKind};
use serde::{Deserialize, Serialize};

/// Number of element kinds remembered for the quick-insert list.
pub const RECENT_KINDS_CAP: usize = 5;

/// Viewport previews supported by the designer chrome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Viewport {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

/// Transient view state: never recorded in history, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub selected_element: Option<String>,
    pub selected_zone: Option<String>,
    pub preview: bool,
    pub viewport: Viewport,
    pub is_dragging: bool,
    /// Most-recent-first, deduplicated, capped at [`RECENT_KINDS_CAP`].
    pub recent_kinds: Vec<ElementKind>,
}

/// The full session state: document plus view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub document: Document,
    pub view: ViewState,
}

impl SessionState {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            view: ViewState::default(),
        }
    }

    /// The selected element, if the selection still resolves. A dangling
    /// selection (element deleted, or gone after undo) simply yields `None`.
    pub fn selected_element(&self) -> Option<&Element> {
        self.view
            .selected_element
            .as_deref()
            .and_then(|id| self.document.elements.get(id))
    }

    /// The selected drop zone, if the selection still resolves.
    pub fn selected_zone(&self) -> Option<&DropZone> {
        self.view
            .selected_zone
            .as_deref()
            .and_then(|id| self.document.zones.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_model::{starter_document, IdGenerator};

    #[test]
    fn test_dangling_selection_resolves_to_none() {
        let document = starter_document(&mut IdGenerator::new("state-test"));
        let mut state = SessionState::new(document);

        state.view.selected_element = Some("gone".to_string());
        assert!(state.selected_element().is_none());

        state.view.selected_zone = Some("basic-header".to_string());
        assert!(state.selected_zone().is_some());
    }
}

//! # Edit Session
//!
//! The public editing surface. Collaborators (canvas, toolbars, the
//! persistence layer) call these methods; nothing else mutates the state.
//!
//! Dispatch is synchronous: the history snapshot is taken in the same call
//! that applies the command, so rapid successive edits can never race a
//! deferred "read current state" step. Commands that name missing entities
//! are absorbed as no-ops. Each method returns whether the command took
//! effect, and the calling layer decides how to surface a no-op.

use pagecraft_model::{
    default_element, starter_document, Document, ElementContent, ElementKind, ElementPatch,
    IdGenerator,
};
use pagecraft_richtext::{
    add_or_update_range, infer_list_type, reconcile_after_edit, render_block, FormattedRange,
    ListType, TextFormatting,
};

use crate::commands::Command;
use crate::errors::EditorError;
use crate::reducer::reduce;
use crate::state::{SessionState, Viewport};
use crate::undo_stack::UndoStack;

/// A single-user editing session over one document.
pub struct EditSession {
    state: SessionState,
    history: UndoStack,
    ids: IdGenerator,
}

impl EditSession {
    /// Start a session from the built-in starter document. The name seeds
    /// id generation, so equal names replay to equal ids.
    pub fn new(name: &str) -> Self {
        let mut ids = IdGenerator::new(name);
        let document = starter_document(&mut ids);
        Self {
            state: SessionState::new(document),
            history: UndoStack::new(),
            ids,
        }
    }

    /// Start a session over an existing document (e.g. a loaded project).
    /// The generator resumes past every id already in the document, so a
    /// document reopened under its original name keeps getting fresh ids.
    pub fn from_document(name: &str, document: Document) -> Result<Self, EditorError> {
        document.validate()?;
        let mut ids = IdGenerator::new(name);
        resume_ids(&mut ids, &document);
        Ok(Self {
            state: SessionState::new(document),
            history: UndoStack::new(),
            ids,
        })
    }

    /// Current state snapshot. Read-only; all mutation goes through
    /// commands.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Apply a command, recording history for structural commands that take
    /// effect. Returns false when the command was absorbed as a no-op.
    pub fn dispatch(&mut self, command: Command) -> bool {
        match reduce(&self.state, &command) {
            Some(next) => {
                if command.is_structural() {
                    self.history.record(self.state.document.clone());
                }
                self.state = next;
                true
            }
            None => {
                tracing::debug!("command had no effect: {:?}", command);
                false
            }
        }
    }

    /// Create a default element of `kind` in `zone_id`. Returns the new
    /// element's id, or `None` if the zone does not exist.
    pub fn add_element(&mut self, kind: ElementKind, zone_id: &str) -> Option<String> {
        let element = default_element(kind, zone_id, &mut self.ids);
        let id = element.id.clone();
        if !self.dispatch(Command::AddElement {
            element,
            zone_id: zone_id.to_string(),
        }) {
            return None;
        }
        self.dispatch(Command::AddRecentKind { kind });
        Some(id)
    }

    /// Shallow-merge `patch` into an element. Content edits to text
    /// elements automatically reconcile stored formatting ranges and
    /// re-derive the list mode, unless the patch sets them explicitly.
    pub fn update_element(&mut self, id: &str, patch: ElementPatch) -> bool {
        let patch = self.reconcile_rich_text(id, patch);
        self.dispatch(Command::UpdateElement {
            id: id.to_string(),
            patch,
        })
    }

    pub fn delete_element(&mut self, id: &str) -> bool {
        self.dispatch(Command::DeleteElement { id: id.to_string() })
    }

    /// Clone an element in place. Returns the clone's id.
    pub fn duplicate_element(&mut self, id: &str) -> Option<String> {
        let new_id = self.ids.new_id();
        if self.dispatch(Command::DuplicateElement {
            id: id.to_string(),
            new_id: new_id.clone(),
        }) {
            Some(new_id)
        } else {
            None
        }
    }

    pub fn move_element(
        &mut self,
        id: &str,
        from_zone: &str,
        to_zone: &str,
        index: Option<usize>,
    ) -> bool {
        self.dispatch(Command::MoveElement {
            id: id.to_string(),
            from_zone: from_zone.to_string(),
            to_zone: to_zone.to_string(),
            index,
        })
    }

    pub fn set_template(&mut self, id: &str) -> bool {
        self.dispatch(Command::SetTemplate { id: id.to_string() })
    }

    pub fn select_element(&mut self, id: Option<&str>) -> bool {
        self.dispatch(Command::SelectElement {
            id: id.map(str::to_string),
        })
    }

    pub fn select_zone(&mut self, id: Option<&str>) -> bool {
        self.dispatch(Command::SelectZone {
            id: id.map(str::to_string),
        })
    }

    pub fn toggle_preview(&mut self) {
        self.dispatch(Command::TogglePreview);
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.dispatch(Command::SetViewport { viewport });
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dispatch(Command::SetDragging { dragging });
    }

    /// Apply formatting to a character span of a text element's content.
    /// Existing ranges overlapping the span are replaced.
    pub fn format_text_range(
        &mut self,
        id: &str,
        start: usize,
        end: usize,
        formatting: TextFormatting,
    ) -> bool {
        let Some(element) = self.state.document.elements.get(id) else {
            tracing::debug!("format_text_range: unknown element {}", id);
            return false;
        };
        let Some((text, ranges)) = element.rich_text() else {
            tracing::debug!("format_text_range: element {} has no text", id);
            return false;
        };
        let range = FormattedRange::new(start, end, formatting);
        if !range.is_valid(text.chars().count()) {
            tracing::debug!("format_text_range: invalid span {}..{} for {}", start, end, id);
            return false;
        }

        let next = add_or_update_range(ranges, range);
        self.dispatch(Command::UpdateElement {
            id: id.to_string(),
            patch: ElementPatch::with_ranges(next),
        })
    }

    /// Set a text element's list mode explicitly.
    pub fn set_list_type(&mut self, id: &str, list_type: ListType) -> bool {
        self.dispatch(Command::UpdateElement {
            id: id.to_string(),
            patch: ElementPatch::with_list_type(list_type),
        })
    }

    /// Render a text element's content as markup, including list wrapping.
    /// Collaborators display this rather than hand-rolling markup.
    pub fn render_text(&self, id: &str) -> Option<String> {
        let element = self.state.document.elements.get(id)?;
        let (text, ranges) = element.rich_text()?;
        Some(render_block(
            text,
            ranges,
            element.list_type().unwrap_or_default(),
        ))
    }

    /// Step back one structural edit. View state is preserved; a selection
    /// pointing at an element the restored document no longer contains
    /// simply resolves to nothing.
    pub fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            return false;
        }
        match self.history.undo(self.state.document.clone()) {
            Some(document) => {
                self.state.document = document;
                true
            }
            None => false,
        }
    }

    /// Step forward one undone edit.
    pub fn redo(&mut self) -> bool {
        if !self.history.can_redo() {
            return false;
        }
        match self.history.redo(self.state.document.clone()) {
            Some(document) => {
                self.state.document = document;
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Recently used element kinds, most recent first.
    pub fn recent_kinds(&self) -> &[ElementKind] {
        &self.state.view.recent_kinds
    }

    /// Serializable document snapshot for persistence. Transient view
    /// fields are not part of it.
    pub fn snapshot(&self) -> Document {
        self.state.document.clone()
    }

    /// Bulk-load a document, replacing the current one. Resets history: a
    /// load is a new editing baseline, not an edit.
    pub fn restore_snapshot(&mut self, document: Document) -> Result<(), EditorError> {
        document.validate()?;
        resume_ids(&mut self.ids, &document);
        self.state.document = document;
        self.history.clear();
        Ok(())
    }

    fn reconcile_rich_text(&self, id: &str, mut patch: ElementPatch) -> ElementPatch {
        let Some(new_content) = patch.content.clone() else {
            return patch;
        };
        let Some(element) = self.state.document.elements.get(id) else {
            return patch;
        };
        let Some((old_text, ranges)) = element.rich_text() else {
            return patch;
        };

        if patch.formatted_ranges.is_none() {
            patch.formatted_ranges = Some(reconcile_after_edit(old_text, &new_content, ranges));
        }
        if patch.list_type.is_none() && element.list_type().is_some() {
            patch.list_type = Some(infer_list_type(&new_content));
        }
        patch
    }
}

/// Replay every generated id in `document` through the generator. Element
/// ids as well as nested form-field and gallery-image ids all come from the
/// same counter.
fn resume_ids(ids: &mut IdGenerator, document: &Document) {
    for element in document.elements.values() {
        ids.advance_past(&element.id);
        match &element.content {
            ElementContent::Form(form) => {
                for field in &form.fields {
                    ids.advance_past(&field.id);
                }
            }
            ElementContent::Gallery(gallery) => {
                for image in &gallery.images {
                    ids.advance_past(&image.id);
                }
            }
            _ => {}
        }
    }
}

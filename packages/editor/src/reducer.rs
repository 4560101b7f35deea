//! The pure state-transition function.
//!
//! `reduce` maps (state, command) to the next state with no I/O and no
//! hidden mutation. Failure is absorbed: a command naming a missing entity
//! returns `None` and the caller keeps the previous state untouched. A
//! structural command whose result would equal its input (an empty patch,
//! switching to the current template) is also `None`, so it never pollutes
//! history.
//!
//! Every structural branch updates an element's `parent_id` and its zone's
//! child list in the same state construction, so the parent/child bijection
//! holds in every state the reducer ever returns; there is no transient
//! state in which an element belongs to neither zone or both.

use crate::commands::Command;
use crate::state::{SessionState, Viewport, RECENT_KINDS_CAP};
use pagecraft_model::{Element, ElementKind, ElementPatch};

/// Apply `command` to `state`. `None` means the command had no effect.
pub fn reduce(state: &SessionState, command: &Command) -> Option<SessionState> {
    match command {
        Command::AddElement { element, zone_id } => add_element(state, element, zone_id),
        Command::UpdateElement { id, patch } => update_element(state, id, patch),
        Command::DeleteElement { id } => delete_element(state, id),
        Command::DuplicateElement { id, new_id } => duplicate_element(state, id, new_id),
        Command::MoveElement {
            id,
            from_zone,
            to_zone,
            index,
        } => move_element(state, id, from_zone, to_zone, *index),
        Command::SetTemplate { id } => set_template(state, id),
        Command::SelectElement { id } => select_element(state, id.as_deref()),
        Command::SelectZone { id } => select_zone(state, id.as_deref()),
        Command::TogglePreview => toggle_preview(state),
        Command::SetViewport { viewport } => set_viewport(state, *viewport),
        Command::SetDragging { dragging } => set_dragging(state, *dragging),
        Command::AddRecentKind { kind } => add_recent_kind(state, *kind),
    }
}

fn add_element(state: &SessionState, element: &Element, zone_id: &str) -> Option<SessionState> {
    if !state.document.zones.contains_key(zone_id) {
        return None;
    }
    if state.document.elements.contains_key(&element.id) {
        return None;
    }

    let mut element = element.clone();
    element.parent_id = Some(zone_id.to_string());

    let mut next = state.clone();
    next.document.zones.get_mut(zone_id)?.children.push(element.id.clone());
    next.view.selected_element = Some(element.id.clone());
    next.view.selected_zone = None;
    next.document.elements.insert(element.id.clone(), element);
    Some(next)
}

fn update_element(state: &SessionState, id: &str, patch: &ElementPatch) -> Option<SessionState> {
    let current = state.document.elements.get(id)?;
    let updated = current.patched(patch);
    if updated == *current {
        return None;
    }

    let mut next = state.clone();
    next.document.elements.insert(id.to_string(), updated);
    Some(next)
}

fn delete_element(state: &SessionState, id: &str) -> Option<SessionState> {
    let element = state.document.elements.get(id)?;
    let parent_id = element.parent_id.clone()?;
    state.document.zones.get(&parent_id)?;

    let mut next = state.clone();
    next.document.elements.remove(id);
    next.document
        .zones
        .get_mut(&parent_id)?
        .children
        .retain(|child| child != id);
    if next.view.selected_element.as_deref() == Some(id) {
        next.view.selected_element = None;
    }
    Some(next)
}

fn duplicate_element(state: &SessionState, id: &str, new_id: &str) -> Option<SessionState> {
    let source = state.document.elements.get(id)?;
    let parent_id = source.parent_id.clone()?;
    state.document.zones.get(&parent_id)?;
    if state.document.elements.contains_key(new_id) {
        return None;
    }

    let mut clone = source.clone();
    clone.id = new_id.to_string();

    let mut next = state.clone();
    next.document
        .zones
        .get_mut(&parent_id)?
        .children
        .push(new_id.to_string());
    next.document.elements.insert(new_id.to_string(), clone);
    next.view.selected_element = Some(new_id.to_string());
    next.view.selected_zone = None;
    Some(next)
}

fn move_element(
    state: &SessionState,
    id: &str,
    from_zone: &str,
    to_zone: &str,
    index: Option<usize>,
) -> Option<SessionState> {
    let element = state.document.elements.get(id)?;
    // A source zone that is not the element's declared parent would break
    // the bijection; treat the mismatch as an invalid reference.
    if element.parent_id.as_deref() != Some(from_zone) {
        return None;
    }
    state.document.zones.get(from_zone)?;
    state.document.zones.get(to_zone)?;

    let mut next = state.clone();
    next.document
        .zones
        .get_mut(from_zone)?
        .children
        .retain(|child| child != id);
    {
        let destination = next.document.zones.get_mut(to_zone)?;
        let at = index
            .unwrap_or(destination.children.len())
            .min(destination.children.len());
        destination.children.insert(at, id.to_string());
    }
    next.document.elements.get_mut(id)?.parent_id = Some(to_zone.to_string());
    Some(next)
}

fn set_template(state: &SessionState, id: &str) -> Option<SessionState> {
    if state.document.current_template_id == id {
        return None;
    }
    state.document.template(id)?;

    let mut next = state.clone();
    next.document.current_template_id = id.to_string();
    next.view.selected_element = None;
    next.view.selected_zone = None;
    Some(next)
}

fn select_element(state: &SessionState, id: Option<&str>) -> Option<SessionState> {
    let selected = id.map(str::to_string);
    if state.view.selected_element == selected && state.view.selected_zone.is_none() {
        return None;
    }

    let mut next = state.clone();
    next.view.selected_element = selected;
    next.view.selected_zone = None;
    Some(next)
}

fn select_zone(state: &SessionState, id: Option<&str>) -> Option<SessionState> {
    let selected = id.map(str::to_string);
    if state.view.selected_zone == selected && state.view.selected_element.is_none() {
        return None;
    }

    let mut next = state.clone();
    next.view.selected_zone = selected;
    next.view.selected_element = None;
    Some(next)
}

fn toggle_preview(state: &SessionState) -> Option<SessionState> {
    let mut next = state.clone();
    next.view.preview = !next.view.preview;
    // Entering or leaving preview deselects
    next.view.selected_element = None;
    next.view.selected_zone = None;
    Some(next)
}

fn set_viewport(state: &SessionState, viewport: Viewport) -> Option<SessionState> {
    if state.view.viewport == viewport {
        return None;
    }
    let mut next = state.clone();
    next.view.viewport = viewport;
    Some(next)
}

fn set_dragging(state: &SessionState, dragging: bool) -> Option<SessionState> {
    if state.view.is_dragging == dragging {
        return None;
    }
    let mut next = state.clone();
    next.view.is_dragging = dragging;
    Some(next)
}

fn add_recent_kind(state: &SessionState, kind: ElementKind) -> Option<SessionState> {
    let mut recents = state.view.recent_kinds.clone();
    recents.retain(|recent| *recent != kind);
    recents.insert(0, kind);
    recents.truncate(RECENT_KINDS_CAP);
    if recents == state.view.recent_kinds {
        return None;
    }

    let mut next = state.clone();
    next.view.recent_kinds = recents;
    Some(next)
}

//! Multi-command sequences: undo/redo round trips, template switching,
//! and document integrity after mixed operations.

use pagecraft_editor::{EditSession, ElementKind, ElementPatch, Viewport};

#[test]
fn test_add_duplicate_delete_then_three_undos() {
    let mut session = EditSession::new("sequences");
    let baseline = session.snapshot();

    let heading = session
        .add_element(ElementKind::Heading, "basic-header")
        .expect("zone exists");
    let copy = session
        .duplicate_element(&heading)
        .expect("element exists");
    assert!(session.delete_element(&copy));

    assert!(session.undo()); // restore the duplicate
    assert!(session.undo()); // remove the duplicate
    assert!(session.undo()); // remove the add

    assert_eq!(session.snapshot(), baseline);
    assert!(!session.can_undo());
    assert!(session.can_redo());
}

#[test]
fn test_undo_redo_round_trip_over_mixed_edits() {
    let mut session = EditSession::new("sequences");
    let baseline = session.snapshot();

    let heading = session
        .add_element(ElementKind::Heading, "basic-header")
        .expect("zone exists");
    session.update_element(&heading, ElementPatch::with_content("Edited"));
    session.move_element(&heading, "basic-header", "basic-footer", None);
    let edited = session.snapshot();

    for _ in 0..3 {
        assert!(session.undo());
    }
    assert_eq!(session.snapshot(), baseline);

    for _ in 0..3 {
        assert!(session.redo());
    }
    assert_eq!(session.snapshot(), edited);
    assert!(!session.can_redo());
}

#[test]
fn test_new_edit_after_undo_clears_redo_path() {
    let mut session = EditSession::new("sequences");

    session
        .add_element(ElementKind::Heading, "basic-header")
        .expect("zone exists");
    session
        .add_element(ElementKind::Button, "basic-buttons")
        .expect("zone exists");

    assert!(session.undo());
    assert!(session.can_redo());

    session
        .add_element(ElementKind::Image, "basic-main-right")
        .expect("zone exists");
    assert!(!session.can_redo());
}

#[test]
fn test_template_switch_preserves_other_templates_content() {
    let mut session = EditSession::new("sequences");

    let heading = session
        .add_element(ElementKind::Heading, "basic-header")
        .expect("zone exists");
    let basic_header = session.state().document.zones["basic-header"].clone();

    assert!(session.set_template("template-portfolio"));
    // Switching changes visibility only; template 1's content is untouched
    assert_eq!(
        session.state().document.zones["basic-header"],
        basic_header
    );
    assert!(session.state().document.elements.contains_key(&heading));

    assert!(session.set_template("template-basic"));
    assert_eq!(
        session.state().document.zones["basic-header"],
        basic_header
    );
}

#[test]
fn test_template_switch_is_undoable() {
    let mut session = EditSession::new("sequences");

    assert!(session.set_template("template-business"));
    assert_eq!(
        session.state().document.current_template_id,
        "template-business"
    );

    assert!(session.undo());
    assert_eq!(
        session.state().document.current_template_id,
        "template-basic"
    );
}

#[test]
fn test_view_commands_never_enter_history() {
    let mut session = EditSession::new("sequences");

    session
        .add_element(ElementKind::Heading, "basic-header")
        .expect("zone exists");
    session.select_zone(Some("basic-footer"));
    session.toggle_preview();
    session.set_viewport(Viewport::Tablet);
    session.set_dragging(true);

    // Exactly one structural edit happened; one undo exhausts history
    assert!(session.undo());
    assert!(!session.can_undo());
    assert!(session.state().view.preview);
    assert_eq!(session.state().view.viewport, Viewport::Tablet);
    assert!(session.state().view.is_dragging);
}

#[test]
fn test_integrity_holds_across_a_long_mixed_sequence() {
    let mut session = EditSession::new("sequences");

    let mut created = Vec::new();
    for (kind, zone) in [
        (ElementKind::Heading, "basic-header"),
        (ElementKind::Paragraph, "basic-main-left"),
        (ElementKind::Gallery, "basic-third"),
        (ElementKind::Form, "basic-footer"),
        (ElementKind::Table, "basic-main-right"),
    ] {
        created.push(session.add_element(kind, zone).expect("zone exists"));
    }

    session.move_element(&created[0], "basic-header", "basic-footer", Some(0));
    session.duplicate_element(&created[2]).expect("element exists");
    session.delete_element(&created[1]);
    session.update_element(
        &created[4],
        ElementPatch {
            headers: Some(vec!["A".to_string(), "B".to_string()]),
            ..Default::default()
        },
    );

    session.state().document.validate().expect("bijection holds");

    while session.can_undo() {
        session.undo();
        session.state().document.validate().expect("bijection holds");
    }
    while session.can_redo() {
        session.redo();
        session.state().document.validate().expect("bijection holds");
    }
}

#[test]
fn test_idempotent_update_adds_no_history() {
    let mut session = EditSession::new("sequences");
    let heading = session
        .add_element(ElementKind::Heading, "basic-header")
        .expect("zone exists");
    let before = session.snapshot();

    assert!(!session.update_element(&heading, ElementPatch::default()));
    assert_eq!(session.snapshot(), before);

    // One undo still maps to the add, not the empty update
    assert!(session.undo());
    assert!(!session.can_undo());
}

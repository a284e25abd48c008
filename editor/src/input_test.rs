use super::*;

// =============================================================
// Modifiers
// =============================================================

#[test]
fn modifiers_default_is_empty() {
    let m = Modifiers::default();
    assert!(!m.shift && !m.ctrl && !m.alt && !m.meta);
    assert!(!m.command());
}

#[test]
fn command_is_ctrl_or_meta() {
    assert!(Modifiers { ctrl: true, ..Default::default() }.command());
    assert!(Modifiers { meta: true, ..Default::default() }.command());
    assert!(!Modifiers { alt: true, ..Default::default() }.command());
}

#[test]
fn modifiers_deserialize_with_missing_fields() {
    let m: Modifiers = serde_json::from_str(r#"{"ctrl": true}"#).unwrap();
    assert!(m.ctrl);
    assert!(!m.shift);
}

// =============================================================
// Key
// =============================================================

#[test]
fn delete_key() {
    assert!(Key("Delete".into()).is_delete());
    assert!(!Key("Backspace".into()).is_delete());
}

#[test]
fn escape_key() {
    assert!(Key("Escape".into()).is_escape());
}

#[test]
fn undo_shortcut_needs_command_modifier() {
    let ctrl = Modifiers { ctrl: true, ..Default::default() };
    let meta = Modifiers { meta: true, ..Default::default() };
    assert!(Key("z".into()).is_undo(ctrl));
    assert!(Key("Z".into()).is_undo(meta));
    assert!(!Key("z".into()).is_undo(Modifiers::default()));
}

#[test]
fn shift_z_is_not_undo() {
    let m = Modifiers { ctrl: true, shift: true, ..Default::default() };
    assert!(!Key("z".into()).is_undo(m));
}

// =============================================================
// Buttons / zoom direction
// =============================================================

#[test]
fn buttons_held_primary_helper() {
    let b = ButtonsHeld::primary();
    assert!(b.primary);
    assert!(!b.middle && !b.secondary);
}

#[test]
fn button_serde_names() {
    assert_eq!(serde_json::to_string(&Button::Primary).unwrap(), "\"primary\"");
    let dir: ZoomDirection = serde_json::from_str("\"out\"").unwrap();
    assert_eq!(dir, ZoomDirection::Out);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
    assert!(!InputState::default().is_dragging());
}

#[test]
fn dragging_state_reports_dragging() {
    let start = SpriteBox::from_edges(0, 0, 9, 9);
    let state = InputState::Dragging {
        index: 0,
        part: HitPart::Body,
        anchor: DragAnchor { pointer: Point::new(5.0, 5.0), rect: Rect::new(0.0, 0.0, 10.0, 10.0), start },
    };
    assert!(state.is_dragging());
}

#[test]
fn ui_state_default_has_no_selection() {
    assert_eq!(UiState::default().selected, None);
}

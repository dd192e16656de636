use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use selsync::{collect_focusable, Element, Event, FocusState};

fn press(code: KeyCode) -> CrosstermEvent {
    CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn form() -> Element {
    Element::col()
        .child(Element::text("Add translation"))
        .child(Element::select(["English", "French"]).id("lang1").name("language"))
        .child(Element::select(["English", "French"]).id("lang2").name("language"))
        .child(Element::select(["English", "French"]).id("lang3").name("language"))
}

// ============================================================================
// Focus state
// ============================================================================

#[test]
fn test_focus_state_focus_blur() {
    let mut focus = FocusState::new();

    assert_eq!(focus.focused(), None);

    assert!(focus.focus("lang1"));
    assert_eq!(focus.focused(), Some("lang1"));

    // Focus same element - no change
    assert!(!focus.focus("lang1"));

    assert!(focus.focus("lang2"));
    assert_eq!(focus.focused(), Some("lang2"));

    assert!(focus.blur());
    assert_eq!(focus.focused(), None);

    assert!(!focus.blur());
}

#[test]
fn test_focus_next_walks_selects_in_document_order() {
    let root = form();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_next(&root), Some("lang1".to_string()));
    assert_eq!(focus.focus_next(&root), Some("lang2".to_string()));
    assert_eq!(focus.focus_next(&root), Some("lang3".to_string()));
    // Wrap around
    assert_eq!(focus.focus_next(&root), Some("lang1".to_string()));
}

#[test]
fn test_focus_prev_wraps_backwards() {
    let root = form();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_prev(&root), Some("lang3".to_string()));
    assert_eq!(focus.focus_prev(&root), Some("lang2".to_string()));
    assert_eq!(focus.focus_prev(&root), Some("lang1".to_string()));
    assert_eq!(focus.focus_prev(&root), Some("lang3".to_string()));
}

#[test]
fn test_disabled_selects_are_skipped() {
    let root = Element::col()
        .child(Element::select(["English"]).id("lang1"))
        .child(Element::select(["English"]).id("lang2").disabled(true))
        .child(Element::select(["English"]).id("lang3"));

    assert_eq!(collect_focusable(&root), vec!["lang1", "lang3"]);
}

#[test]
fn test_collect_focusable_nested() {
    let root = Element::col()
        .child(
            Element::row()
                .child(Element::text("Save and add translation"))
                .child(Element::select(["English"]).id("inner")),
        )
        .child(Element::select(["English"]).id("outer"));

    assert_eq!(collect_focusable(&root), vec!["inner", "outer"]);
}

// ============================================================================
// Raw event processing
// ============================================================================

#[test]
fn test_tab_moves_focus_and_reports_transitions() {
    let root = form();
    let mut focus = FocusState::new();

    let events = focus.process_events(&[press(KeyCode::Tab)], &root);
    assert_eq!(
        events,
        vec![Event::Focus {
            target: "lang1".to_string(),
        }]
    );

    let events = focus.process_events(&[press(KeyCode::Tab)], &root);
    assert_eq!(
        events,
        vec![
            Event::Blur {
                target: "lang1".to_string(),
            },
            Event::Focus {
                target: "lang2".to_string(),
            },
        ]
    );
}

#[test]
fn test_escape_blurs_focused_element() {
    let root = form();
    let mut focus = FocusState::new();
    focus.focus("lang2");

    let events = focus.process_events(&[press(KeyCode::Esc)], &root);
    assert_eq!(
        events,
        vec![Event::Blur {
            target: "lang2".to_string(),
        }]
    );
    assert_eq!(focus.focused(), None);
}

#[test]
fn test_keys_are_targeted_at_the_focused_element() {
    let root = form();
    let mut focus = FocusState::new();
    focus.focus("lang3");

    let events = focus.process_events(&[press(KeyCode::Down)], &root);
    assert_eq!(
        events,
        vec![Event::Key {
            target: Some("lang3".to_string()),
            key: selsync::Key::Down,
            modifiers: selsync::Modifiers::new(),
        }]
    );
}

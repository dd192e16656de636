use selsync::{
    collect_selects, default_languages, find_element, find_named, language_select, Content, Element,
};

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_find_element_by_id() {
    let root = Element::col()
        .id("root")
        .child(Element::text("Title").id("title"))
        .child(Element::row().id("row").child(Element::select(["English"]).id("lang")));

    assert!(find_element(&root, "lang").is_some());
    assert!(find_element(&root, "title").is_some());
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_find_named_returns_document_order() {
    let root = Element::col()
        .child(Element::select(["English"]).id("a").name("language"))
        .child(
            Element::row()
                .child(Element::select(["English"]).id("b").name("language"))
                .child(Element::select(["English"]).id("c").name("country")),
        )
        .child(Element::select(["English"]).id("d").name("language"));

    let ids: Vec<&str> = find_named(&root, "language")
        .iter()
        .map(|el| el.id.as_str())
        .collect();
    assert_eq!(ids, vec!["a", "b", "d"]);
}

#[test]
fn test_find_named_is_empty_for_unknown_name() {
    let root = Element::col().child(Element::select(["English"]).name("language"));
    assert!(find_named(&root, "country").is_empty());
}

#[test]
fn test_collect_selects_skips_other_content() {
    let root = Element::col()
        .child(Element::text("Label"))
        .child(Element::select(["English"]).id("lang1"))
        .child(Element::box_())
        .child(Element::select(["English"]).id("lang2"));

    let ids: Vec<&str> = collect_selects(&root).iter().map(|el| el.id.as_str()).collect();
    assert_eq!(ids, vec!["lang1", "lang2"]);
}

// ============================================================================
// Builders
// ============================================================================

#[test]
fn test_selects_are_focusable_by_default() {
    let el = Element::select(["English", "French"]);
    assert!(el.focusable);
    assert_eq!(el.content.option_count(), 2);
}

#[test]
fn test_generated_ids_are_unique() {
    let a = Element::select(["English"]);
    let b = Element::select(["English"]);
    assert_ne!(a.id, b.id);
}

#[test]
fn test_selected_builder_sets_display_index() {
    let el = Element::select(["English", "French"]).selected(1);
    match &el.content {
        Content::Select { selected, .. } => assert_eq!(*selected, 1),
        other => panic!("expected select content, got {other:?}"),
    }
}

// ============================================================================
// Language helpers
// ============================================================================

#[test]
fn test_language_select_carries_group_and_labels() {
    let languages = default_languages();
    let el = language_select("language", &languages, 1);

    assert_eq!(el.name.as_deref(), Some("language"));
    match &el.content {
        Content::Select { options, selected } => {
            assert_eq!(options[0], "English");
            assert_eq!(options[1], "French");
            assert_eq!(*selected, 1);
        }
        other => panic!("expected select content, got {other:?}"),
    }
}

#[test]
fn test_default_languages_start_with_the_default_selection() {
    let languages = default_languages();
    assert!(!languages.is_empty());
    assert_eq!(languages[0].code, "en");
}

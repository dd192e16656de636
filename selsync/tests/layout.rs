use selsync::{layout, Edges, Element, Rect, Size};

// ============================================================================
// Flow layout
// ============================================================================

#[test]
fn test_column_stacks_children_with_padding_and_gap() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(10))
        .padding(Edges::all(1))
        .gap(1)
        .child(Element::text("First").id("a").width(Size::Fill))
        .child(Element::text("Second").id("b").width(Size::Fill));

    let result = layout(&root, Rect::from_size(40, 20));

    assert_eq!(result["root"], Rect::new(0, 0, 20, 10));
    assert_eq!(result["a"], Rect::new(1, 1, 18, 1));
    assert_eq!(result["b"], Rect::new(1, 3, 18, 1));
}

#[test]
fn test_row_places_children_side_by_side() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(3))
        .gap(2)
        .child(Element::text("ab").id("a"))
        .child(Element::text("cd").id("b"));

    let result = layout(&root, Rect::from_size(40, 20));

    assert_eq!(result["a"], Rect::new(0, 0, 2, 1));
    assert_eq!(result["b"], Rect::new(4, 0, 2, 1));
}

#[test]
fn test_fill_children_split_the_remaining_height() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(10))
        .child(Element::text("Header").id("header").height(Size::Fixed(2)))
        .child(Element::box_().id("top").width(Size::Fill).height(Size::Fill))
        .child(Element::box_().id("bottom").width(Size::Fill).height(Size::Fill));

    let result = layout(&root, Rect::from_size(40, 20));

    assert_eq!(result["header"].height, 2);
    assert_eq!(result["top"], Rect::new(0, 2, 10, 4));
    assert_eq!(result["bottom"], Rect::new(0, 6, 10, 4));
}

// ============================================================================
// Intrinsic sizes
// ============================================================================

#[test]
fn test_text_measures_its_own_width() {
    let root = Element::col()
        .width(Size::Fixed(40))
        .height(Size::Fixed(5))
        .child(Element::text("Hello").id("text"));

    let result = layout(&root, Rect::from_size(40, 20));

    assert_eq!(result["text"], Rect::new(0, 0, 5, 1));
}

#[test]
fn test_select_width_covers_its_widest_option() {
    let root = Element::col()
        .width(Size::Fixed(40))
        .height(Size::Fixed(5))
        .child(Element::select(["English", "French"]).id("lang"));

    let result = layout(&root, Rect::from_size(40, 20));

    // Indicator plus "English"
    assert_eq!(result["lang"], Rect::new(0, 0, 9, 1));
}

#[test]
fn test_auto_container_height_sums_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(20))
        .gap(1)
        .padding(Edges::symmetric(1, 0))
        .child(Element::text("One"))
        .child(Element::text("Two"))
        .child(Element::text("Three"));

    let result = layout(&root, Rect::from_size(40, 20));

    // 3 lines + 2 gaps + 2 padding
    assert_eq!(result["root"].height, 7);
}

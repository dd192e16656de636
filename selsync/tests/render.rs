use selsync::render::render_to_buffer;
use selsync::{layout, Buffer, Cell, Color, Element, Rect, Rgb, Size, Style};

fn render(root: &Element, width: u16, height: u16) -> Buffer {
    let result = layout(root, Rect::from_size(width, height));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(root, &result, &mut buf);
    buf
}

fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.width())
        .map(|x| buf.get(x, y).unwrap().ch)
        .collect()
}

// ============================================================================
// Content
// ============================================================================

#[test]
fn test_text_renders_into_the_buffer() {
    let root = Element::col()
        .width(Size::Fixed(10))
        .height(Size::Fixed(2))
        .child(Element::text("Hello").width(Size::Fill));

    let buf = render(&root, 10, 2);
    assert_eq!(row_text(&buf, 0), "Hello     ");
}

#[test]
fn test_select_shows_the_selected_label() {
    let root = Element::col()
        .width(Size::Fixed(12))
        .height(Size::Fixed(1))
        .child(
            Element::select(["English", "French"])
                .selected(1)
                .width(Size::Fill),
        );

    let buf = render(&root, 12, 1);
    assert_eq!(row_text(&buf, 0), "▾ French    ");
}

#[test]
fn test_select_display_clamps_an_out_of_range_index() {
    let root = Element::col()
        .width(Size::Fixed(12))
        .height(Size::Fixed(1))
        .child(
            Element::select(["English", "French"])
                .selected(9)
                .width(Size::Fill),
        );

    let buf = render(&root, 12, 1);
    assert_eq!(row_text(&buf, 0), "▾ French    ");
}

#[test]
fn test_select_without_options_shows_a_placeholder() {
    let root = Element::col()
        .width(Size::Fixed(6))
        .height(Size::Fixed(1))
        .child(Element::select(Vec::<String>::new()).width(Size::Fill));

    let buf = render(&root, 6, 1);
    assert_eq!(row_text(&buf, 0), "▾ —   ");
}

#[test]
fn test_long_text_is_truncated_with_an_ellipsis() {
    let root = Element::col()
        .width(Size::Fixed(5))
        .height(Size::Fixed(1))
        .child(Element::text("Hello World").width(Size::Fill));

    let buf = render(&root, 5, 1);
    assert_eq!(row_text(&buf, 0), "Hell…");
}

// ============================================================================
// Styling
// ============================================================================

#[test]
fn test_focused_style_overrides_the_base_style() {
    let root = Element::col()
        .width(Size::Fixed(12))
        .height(Size::Fixed(1))
        .child(
            Element::select(["English"])
                .width(Size::Fill)
                .style(Style::new().foreground(Color::rgb(200, 200, 200)))
                .style_focused(Style::new().foreground(Color::rgb(255, 0, 0)))
                .focused(true),
        );

    let buf = render(&root, 12, 1);
    assert_eq!(buf.get(0, 0).unwrap().fg, Rgb::new(255, 0, 0));
}

#[test]
fn test_disabled_elements_render_dim() {
    let root = Element::col()
        .width(Size::Fixed(6))
        .height(Size::Fixed(1))
        .child(Element::text("Saved").width(Size::Fill).disabled(true));

    let buf = render(&root, 6, 1);
    assert!(buf.get(0, 0).unwrap().style.dim);
}

#[test]
fn test_background_fills_the_whole_rect() {
    let bg = Color::rgb(10, 20, 30);
    let root = Element::box_()
        .width(Size::Fixed(3))
        .height(Size::Fixed(2))
        .style(Style::new().background(bg));

    let buf = render(&root, 3, 2);
    for y in 0..2 {
        for x in 0..3 {
            assert_eq!(buf.get(x, y).unwrap().bg, Rgb::new(10, 20, 30));
        }
    }
}

// ============================================================================
// Buffer diffing
// ============================================================================

#[test]
fn test_diff_reports_only_changed_cells() {
    let previous = Buffer::new(4, 2);
    let mut current = Buffer::new(4, 2);
    current.set(2, 1, Cell::new('x'));

    let changes: Vec<_> = current.diff(&previous).collect();
    assert_eq!(changes.len(), 1);
    let (x, y, cell) = changes[0];
    assert_eq!((x, y, cell.ch), (2, 1, 'x'));
}

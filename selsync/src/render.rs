use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{char_width, truncate_to_width};
use crate::types::{Rgb, Style, TextStyle};

/// Paint the tree into the buffer using the given layout.
pub fn render_to_buffer(root: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    render_element(root, layout, buf, Rgb::new(255, 255, 255), Rgb::new(0, 0, 0));
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    inherited_fg: Rgb,
    inherited_bg: Rgb,
) {
    let Some(rect) = layout.get(&element.id).copied() else {
        return;
    };

    let style = effective_style(element);
    let fg = style.foreground.as_ref().map(|c| c.to_rgb()).unwrap_or(inherited_fg);
    let bg = style.background.as_ref().map(|c| c.to_rgb()).unwrap_or(inherited_bg);
    let mut text_style = style.text_style;
    if element.disabled {
        text_style.dim = true;
    }

    if style.background.is_some() {
        fill(buf, rect, bg);
    }

    match &element.content {
        Content::None => {}

        Content::Text(text) => {
            put_str(buf, rect, text, fg, bg, text_style);
        }

        Content::Select { options, selected } => {
            let line = select_line(options, *selected);
            put_str(buf, rect, &line, fg, bg, text_style);
        }

        Content::Children(children) => {
            for child in children {
                render_element(child, layout, buf, fg, bg);
            }
        }
    }
}

fn effective_style(element: &Element) -> Style {
    if element.focused {
        if let Some(focused) = &element.style_focused {
            return focused.clone();
        }
    }
    element.style.clone()
}

/// The one-line face of a closed dropdown: an indicator and the label of
/// the option currently shown. An empty option list shows a placeholder.
fn select_line(options: &[String], selected: usize) -> String {
    match options.last() {
        None => "▾ —".to_string(),
        Some(_) => {
            let index = selected.min(options.len() - 1);
            format!("▾ {}", options[index])
        }
    }
}

fn fill(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.y.saturating_add(rect.height) {
        for x in rect.x..rect.x.saturating_add(rect.width) {
            buf.set(x, y, Cell::new(' ').with_bg(bg));
        }
    }
}

fn put_str(buf: &mut Buffer, rect: Rect, s: &str, fg: Rgb, bg: Rgb, style: TextStyle) {
    if rect.is_empty() {
        return;
    }

    let line = truncate_to_width(s, rect.width as usize);
    let mut x = rect.x;
    let right = rect.x.saturating_add(rect.width);

    for ch in line.chars() {
        let w = char_width(ch) as u16;
        if w == 0 {
            continue;
        }
        if x + w > right {
            break;
        }
        buf.set(x, rect.y, Cell::new(ch).with_fg(fg).with_bg(bg).with_style(style));
        x += w;
    }
}

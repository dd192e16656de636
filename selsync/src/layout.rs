use std::collections::HashMap;

use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Direction, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn shrink(self, top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            x: self.x.saturating_add(left),
            y: self.y.saturating_add(top),
            width: self.width.saturating_sub(left + right),
            height: self.height.saturating_sub(top + bottom),
        }
    }
}

pub type LayoutResult = HashMap<String, Rect>;

/// Flow layout: children stack along their parent's direction, separated by
/// the parent's gap, inside its padding. `Fill` children split whatever
/// space the fixed and auto children leave over.
pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(element, available, &mut result);
    result
}

fn layout_element(element: &Element, available: Rect, result: &mut LayoutResult) {
    let width = resolve_size(element.width, available.width, || intrinsic_width(element));
    let height = resolve_size(element.height, available.height, || intrinsic_height(element));
    let rect = Rect::new(available.x, available.y, width, height);
    result.insert(element.id.clone(), rect);

    layout_children(element, rect, result);
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    if children.is_empty() {
        return;
    }

    let padding = &element.padding;
    let inner = rect.shrink(padding.top, padding.right, padding.bottom, padding.left);
    let gap_total = element.gap * (children.len() as u16 - 1);

    match element.direction {
        Direction::Column => {
            let mut taken = 0u16;
            let mut fill_count = 0u16;
            for child in children {
                match child.height {
                    Size::Fixed(h) => taken += h,
                    Size::Auto => taken += intrinsic_height(child),
                    Size::Fill => fill_count += 1,
                }
            }
            let remaining = inner.height.saturating_sub(taken + gap_total);
            let fill_each = if fill_count > 0 {
                remaining / fill_count
            } else {
                0
            };

            let mut y = inner.y;
            for child in children {
                let h = match child.height {
                    Size::Fixed(h) => h,
                    Size::Auto => intrinsic_height(child),
                    Size::Fill => fill_each,
                };
                layout_element(child, Rect::new(inner.x, y, inner.width, h), result);
                y = y.saturating_add(h + element.gap);
            }
        }

        Direction::Row => {
            let mut taken = 0u16;
            let mut fill_count = 0u16;
            for child in children {
                match child.width {
                    Size::Fixed(w) => taken += w,
                    Size::Auto => taken += intrinsic_width(child),
                    Size::Fill => fill_count += 1,
                }
            }
            let remaining = inner.width.saturating_sub(taken + gap_total);
            let fill_each = if fill_count > 0 {
                remaining / fill_count
            } else {
                0
            };

            let mut x = inner.x;
            for child in children {
                let w = match child.width {
                    Size::Fixed(w) => w,
                    Size::Auto => intrinsic_width(child),
                    Size::Fill => fill_each,
                };
                layout_element(child, Rect::new(x, inner.y, w, inner.height), result);
                x = x.saturating_add(w + element.gap);
            }
        }
    }
}

fn resolve_size(size: Size, available: u16, intrinsic: impl FnOnce() -> u16) -> u16 {
    match size {
        Size::Fixed(v) => v,
        Size::Fill => available,
        Size::Auto => intrinsic().min(available),
    }
}

fn intrinsic_width(element: &Element) -> u16 {
    let content = match &element.content {
        Content::None => 0,
        Content::Text(text) => display_width(text) as u16,
        Content::Select { options, .. } => {
            // "▾ " indicator plus the widest option label
            let widest = options
                .iter()
                .map(|o| display_width(o))
                .max()
                .unwrap_or(1);
            2 + widest as u16
        }
        Content::Children(children) => match element.direction {
            Direction::Column => children.iter().map(preferred_width).max().unwrap_or(0),
            Direction::Row => {
                let gap_total = element.gap * children.len().saturating_sub(1) as u16;
                children.iter().map(preferred_width).sum::<u16>() + gap_total
            }
        },
    };
    content + element.padding.horizontal_total()
}

fn intrinsic_height(element: &Element) -> u16 {
    let content = match &element.content {
        Content::None => 0,
        Content::Text(_) | Content::Select { .. } => 1,
        Content::Children(children) => match element.direction {
            Direction::Column => {
                let gap_total = element.gap * children.len().saturating_sub(1) as u16;
                children.iter().map(preferred_height).sum::<u16>() + gap_total
            }
            Direction::Row => children.iter().map(preferred_height).max().unwrap_or(0),
        },
    };
    content + element.padding.vertical_total()
}

fn preferred_width(element: &Element) -> u16 {
    match element.width {
        Size::Fixed(w) => w,
        Size::Auto => intrinsic_width(element),
        Size::Fill => 0,
    }
}

fn preferred_height(element: &Element) -> u16 {
    match element.height {
        Size::Fixed(h) => h,
        Size::Auto => intrinsic_height(element),
        Size::Fill => 0,
    }
}

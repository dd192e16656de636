//! The admin change form: a header, several submit rows each carrying an
//! "add translation" language dropdown, and a status line. All dropdowns
//! share one group so the synchronizer keeps them agreed.

use selsync::{
    language_select, Color, Edges, Element, Language, SelectState, Size, Style,
};

/// Group name shared by every language dropdown on the form.
pub const LANG_GROUP: &str = "language";

const ROWS: usize = 3;

fn background() -> Color {
    Color::oklch(0.15, 0.01, 250.0)
}

fn select_base() -> Style {
    Style::new().background(Color::oklch(0.22, 0.02, 250.0))
}

fn select_focused() -> Style {
    Style::new()
        .background(Color::oklch(0.45, 0.12, 250.0))
        .bold()
}

pub fn row_ids() -> Vec<String> {
    (1..=ROWS).map(|i| format!("addtrans-{i}")).collect()
}

pub fn change_form(
    languages: &[Language],
    selects: &SelectState,
    focused: Option<&str>,
) -> Element {
    let agreed = selects.selected_in(&row_ids()[0], languages.len());
    let status = languages
        .get(agreed)
        .map(|l| format!("Translation language: {} ({})", l.name, l.code))
        .unwrap_or_else(|| "No languages configured".to_string());

    Element::col()
        .id("form")
        .width(Size::Fill)
        .height(Size::Fill)
        .style(Style::new().background(background()))
        .padding(Edges::all(2))
        .gap(1)
        .child(Element::text("Change article").style(Style::new().bold()))
        .child(
            Element::text("Tab moves between dropdowns, arrows pick a language, Ctrl+Q quits")
                .style(Style::new().dim()),
        )
        .child(Element::text(""))
        .children(
            row_ids()
                .into_iter()
                .map(|id| submit_row(id, languages, selects, focused)),
        )
        .child(Element::text(""))
        .child(Element::text(status).id("status"))
}

fn submit_row(
    id: String,
    languages: &[Language],
    selects: &SelectState,
    focused: Option<&str>,
) -> Element {
    let selected = selects.selected_in(&id, languages.len());
    let is_focused = focused == Some(id.as_str());

    Element::row()
        .gap(2)
        .child(Element::text("Save and add translation in"))
        .child(
            language_select(LANG_GROUP, languages, selected)
                .id(id)
                .focused(is_focused)
                .style(select_base())
                .style_focused(select_focused()),
        )
}

use std::fs::File;

use selsync::{
    Color, Edges, Element, Event, FocusState, Key, SelectState, Size, Style, Synchronizer,
    Terminal,
};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("sync.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut focus = FocusState::new();
    let mut selects = SelectState::new();
    let sync = Synchronizer::new("language");

    let mut term = Terminal::new()?;

    loop {
        let root = ui(&selects, focus.focused());
        term.render(&root)?;

        let raw_events = term.poll(None)?;
        let events = focus.process_events(&raw_events, &root);
        let events = selects.process_events(&events, &root);
        if let Err(e) = sync.process_events(&events, &root, &mut selects) {
            log::warn!("sync failed: {e}");
        }

        for event in &events {
            if let Event::Key { key, .. } = event {
                if matches!(key, Key::Char('q') | Key::Escape) {
                    return Ok(());
                }
            }
        }
    }
}

fn ui(selects: &SelectState, focused: Option<&str>) -> Element {
    let options = ["English", "French", "German"];

    Element::col()
        .width(Size::Fill)
        .height(Size::Fill)
        .style(Style::new().background(Color::oklch(0.15, 0.01, 250.0)))
        .padding(Edges::all(2))
        .gap(1)
        .child(Element::text("Sync Demo - Tab to move, arrows to pick, q to quit"))
        .child(Element::text(""))
        .children(["lang-1", "lang-2", "lang-3"].map(|id| {
            Element::select(options)
                .id(id)
                .name("language")
                .selected(selects.selected_in(id, options.len()))
                .focused(focused == Some(id))
                .style(Style::new().background(Color::oklch(0.22, 0.02, 250.0)))
                .style_focused(
                    Style::new()
                        .background(Color::oklch(0.45, 0.12, 250.0))
                        .bold(),
                )
        }))
}

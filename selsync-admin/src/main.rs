mod form;

use std::fs::File;

use selsync::{default_languages, Event, FocusState, Key, SelectState, Synchronizer, Terminal};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() {
    let log_file = File::create("selsync-admin.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let languages = default_languages();
    let mut focus = FocusState::new();
    let mut selects = SelectState::new();

    // Register the synchronizer against the form before entering raw mode,
    // so a misconfigured group name fails with a readable error.
    let root = form::change_form(&languages, &selects, focus.focused());
    let sync = Synchronizer::attach(&root, form::LANG_GROUP)?;

    let mut term = Terminal::new()?;

    loop {
        let root = form::change_form(&languages, &selects, focus.focused());
        term.render(&root)?;

        let raw = term.poll(None)?;
        let events = focus.process_events(&raw, &root);
        let events = selects.process_events(&events, &root);
        sync.process_events(&events, &root, &mut selects)?;

        for event in &events {
            if let Event::Key { key, modifiers, .. } = event {
                if *key == Key::Escape || (*key == Key::Char('q') && modifiers.ctrl) {
                    return Ok(());
                }
            }
        }
    }
}

use std::collections::HashMap;

use crate::element::{find_element, Content, Element};
use crate::event::{Event, Key, Modifiers};

/// Data for a single select: the chosen option index.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectData {
    pub selected: usize,
}

/// Tracks the chosen option index for every select element.
///
/// The option labels live in the document; the index lives here. The
/// application reads the index back with [`SelectState::selected_in`] when
/// building each frame.
#[derive(Debug, Default)]
pub struct SelectState {
    selects: HashMap<String, SelectData>,
}

impl SelectState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the stored index for a select. Defaults to 0.
    pub fn get(&self, id: &str) -> usize {
        self.selects.get(id).map(|d| d.selected).unwrap_or(0)
    }

    /// Get the stored index clamped to the given option count. A stored
    /// index pointing past a shrunken option list reads as the last option.
    pub fn selected_in(&self, id: &str, option_count: usize) -> usize {
        let index = self.get(id);
        if option_count == 0 {
            0
        } else {
            index.min(option_count - 1)
        }
    }

    /// Set the index for a select. This is the programmatic assignment the
    /// synchronizer uses; it emits no event.
    pub fn set(&mut self, id: impl Into<String>, index: usize) {
        self.selects.insert(id.into(), SelectData { selected: index });
    }

    /// Process events and handle select interaction. Key events on a
    /// focused, enabled select move its selection; each movement that lands
    /// on a new index is reported as a `Change` event. Other events pass
    /// through unchanged.
    pub fn process_events(&mut self, events: &[Event], root: &Element) -> Vec<Event> {
        let mut output = Vec::new();

        for event in events {
            match event {
                Event::Key {
                    target: Some(target),
                    key,
                    modifiers,
                } => {
                    if let Some(element) = find_element(root, target) {
                        if let Content::Select { options, .. } = &element.content {
                            if !element.disabled {
                                match self.handle_key(target, options, *key, *modifiers) {
                                    SelectMove::Moved(index) => {
                                        log::debug!("[select] {target} moved to index {index}");
                                        self.set(target.clone(), index);
                                        output.push(Event::Change {
                                            target: target.clone(),
                                            index,
                                        });
                                        continue;
                                    }
                                    SelectMove::Handled => {
                                        continue;
                                    }
                                    SelectMove::Ignored => {
                                        // Pass through
                                    }
                                }
                            }
                        }
                    }
                    output.push(event.clone());
                }

                _ => output.push(event.clone()),
            }
        }

        output
    }

    /// Handle a key press for a select with the given options.
    fn handle_key(&self, id: &str, options: &[String], key: Key, modifiers: Modifiers) -> SelectMove {
        let shift_only = modifiers.shift && !modifiers.ctrl && !modifiers.alt;
        if options.is_empty() || !(modifiers.none() || shift_only) {
            return SelectMove::Ignored;
        }

        let current = self.selected_in(id, options.len());
        let last = options.len() - 1;

        match key {
            Key::Up | Key::Left => {
                if current > 0 {
                    SelectMove::Moved(current - 1)
                } else {
                    SelectMove::Handled
                }
            }

            Key::Down | Key::Right => {
                if current < last {
                    SelectMove::Moved(current + 1)
                } else {
                    SelectMove::Handled
                }
            }

            Key::Home => {
                if current != 0 {
                    SelectMove::Moved(0)
                } else {
                    SelectMove::Handled
                }
            }

            Key::End => {
                if current != last {
                    SelectMove::Moved(last)
                } else {
                    SelectMove::Handled
                }
            }

            Key::Char(c) if c.is_alphanumeric() => {
                // Jump to the next option starting with the typed character,
                // cycling past the current selection.
                let wanted = c.to_lowercase().next().unwrap_or(c);
                for offset in 1..=options.len() {
                    let candidate = (current + offset) % options.len();
                    let starts_with = options[candidate]
                        .chars()
                        .next()
                        .map(|first| first.to_lowercase().next() == Some(wanted))
                        .unwrap_or(false);
                    if starts_with {
                        return if candidate == current {
                            SelectMove::Handled
                        } else {
                            SelectMove::Moved(candidate)
                        };
                    }
                }
                SelectMove::Handled
            }

            _ => SelectMove::Ignored,
        }
    }
}

/// Result of handling a key on a select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectMove {
    /// Selection landed on a new index.
    Moved(usize),
    /// Key was consumed but the selection did not change.
    Handled,
    /// Key was not for this select, should be passed through.
    Ignored,
}

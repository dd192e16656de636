#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    /// A dropdown: a list of option labels and the index currently shown.
    /// The index is display state; the authoritative value lives in
    /// `SelectState` and is copied in when the frame is built.
    Select {
        options: Vec<String>,
        selected: usize,
    },
}

impl Content {
    /// Number of options for a select, 0 for anything else.
    pub fn option_count(&self) -> usize {
        match self {
            Self::Select { options, .. } => options.len(),
            _ => 0,
        }
    }
}

use crate::element::Element;

/// A selectable interface language: ISO code and display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub code: String,
    pub name: String,
}

impl Language {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// The language list an admin site would configure. The first entry is the
/// default selection.
pub fn default_languages() -> Vec<Language> {
    vec![
        Language::new("en", "English"),
        Language::new("fr", "French"),
        Language::new("de", "German"),
        Language::new("es", "Spanish"),
    ]
}

/// Build a language dropdown carrying the group name, showing the given
/// index. Every dropdown built with the same group name stays in sync
/// through a [`crate::Synchronizer`] watching that group.
pub fn language_select(group: &str, languages: &[Language], selected: usize) -> Element {
    Element::select(languages.iter().map(|l| l.name.clone()))
        .name(group)
        .selected(selected)
}

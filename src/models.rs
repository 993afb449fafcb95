use ratatui::style::Color;

/// A note card. Never mutated once handed out by a fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Border colour of the card, if any.
    pub accent: Option<Color>,
}

impl Note {
    pub fn new(id: i64, title: impl Into<String>, content: impl Into<String>) -> Note {
        Note {
            id,
            title: title.into(),
            content: content.into(),
            accent: None,
        }
    }

    pub fn with_accent(mut self, accent: Color) -> Note {
        self.accent = Some(accent);
        self
    }
}

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Paragraph, Widget, Wrap},
};

/// A reusable card view. The list keeps a pool of these and rebinds them as
/// the viewport scrolls.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NoteRow {
    pub title: String,
    pub body: String,
    pub accent: Option<ratatui::style::Color>,
    /// Position of the note currently bound, `None` for a fresh view.
    pub position: Option<usize>,
}

impl Widget for &NoteRow {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = match self.accent {
            Some(color) => Style::new().fg(color),
            None => Style::new(),
        };

        let block = Block::bordered()
            .title(Line::from(self.title.as_str()).bold())
            .border_style(border_style);

        Paragraph::new(self.body.as_str())
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn renders_title_on_border_and_body_inside() {
        let row = NoteRow {
            title: "Groceries".into(),
            body: "Milk".into(),
            accent: Some(Color::Green),
            position: Some(0),
        };
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);

        (&row).render(area, &mut buf);

        let top: String = (0..20).map(|x| buf[(x, 0)].symbol()).collect();
        let second: String = (0..20).map(|x| buf[(x, 1)].symbol()).collect();
        assert!(top.contains("Groceries"));
        assert!(second.contains("Milk"));
        assert_eq!(buf[(0, 0)].fg, Color::Green);
    }
}

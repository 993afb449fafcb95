use std::rc::Rc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use log::info;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
    style::Stylize,
    symbols::border,
    text::{Line, ToSpan},
    widgets::{Block, Paragraph},
};

use crate::{
    adapter::NoteAdapter, fixture::NoteSource, layout::LinearLayoutManager, list_view::RecyclerList,
    models::Note,
};

/// The only screen: a read-only stack of note cards.
pub struct MainScreen {
    notes: Rc<[Note]>,
    list: RecyclerList,
}

impl MainScreen {
    pub fn on_create(source: &dyn NoteSource) -> MainScreen {
        let notes: Rc<[Note]> = source.notes().into();
        info!("event=notes_loaded count={}", notes.len());

        let mut list = RecyclerList::new();
        list.set_layout_manager(LinearLayoutManager::default());

        let adapter = NoteAdapter::new(Rc::clone(&notes));
        list.set_adapter(Box::new(adapter));
        info!("event=screen_created items={}", list.item_count());

        MainScreen { notes, list }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn list(&self) -> &RecyclerList {
        &self.list
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> std::io::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if let Event::Key(key) = crossterm::event::read()? {
                if key.kind == KeyEventKind::Press && self.handle_key(key) {
                    info!("event=screen_closed");
                    return Ok(());
                }
            }
        }
    }

    /// Returns `true` when the key asks to leave the screen.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('j') | KeyCode::Down => self.list.scroll_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.list.scroll_by(-1),
            KeyCode::PageDown => self.list.page_down(),
            KeyCode::PageUp => self.list.page_up(),
            KeyCode::Char('g') | KeyCode::Home => self.list.scroll_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.list.scroll_to_bottom(),
            _ => {}
        }
        false
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Min(1), Constraint::Length(1)])
            .split(frame.area());

        let block = Block::bordered()
            .title(format!("My Notes ({})", self.notes().len()))
            .border_set(border::THICK);
        let inner = block.inner(layout[0]);

        let help_message = Line::from_iter([
            "Esc/q".bold().yellow(),
            " exit, ".to_span(),
            "j/k".bold().yellow(),
            " scroll, ".to_span(),
            "PgUp/PgDn".bold().yellow(),
            " page, ".to_span(),
            "g/G".bold().yellow(),
            " top/bottom".to_span(),
        ])
        .centered();

        frame.render_widget(block, layout[0]);
        if self.notes.is_empty() {
            frame.render_widget(Paragraph::new("No notes").dim().centered(), inner);
        } else {
            frame.render_widget(&mut self.list, inner);
        }
        frame.render_widget(help_message, layout[1]);
    }
}

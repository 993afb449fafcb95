use std::rc::Rc;

use crate::{models::Note, row::NoteRow};

/// Feeds rows to a [`RecyclerList`](crate::list_view::RecyclerList).
pub trait RowAdapter {
    fn count(&self) -> usize;

    /// Writes the record at `position` into `row`, replacing whatever an
    /// earlier bind left there.
    ///
    /// # Panics
    ///
    /// When `position` is not below [`count`](RowAdapter::count).
    fn bind(&self, row: &mut NoteRow, position: usize);
}

/// Binds notes to card rows, one row per note, in order.
pub struct NoteAdapter {
    notes: Rc<[Note]>,
}

impl NoteAdapter {
    pub fn new(notes: Rc<[Note]>) -> NoteAdapter {
        NoteAdapter { notes }
    }
}

impl RowAdapter for NoteAdapter {
    fn count(&self) -> usize {
        self.notes.len()
    }

    fn bind(&self, row: &mut NoteRow, position: usize) {
        let note = &self.notes[position];

        row.title.clear();
        row.title.push_str(&note.title);
        row.body.clear();
        row.body.push_str(&note.content);
        row.accent = note.accent;
        row.position = Some(position);
    }
}

use log::debug;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::{adapter::RowAdapter, layout::LinearLayoutManager, row::NoteRow};

/// A scrolling list that only binds the rows on screen and recycles their
/// views between frames.
#[derive(Default)]
pub struct RecyclerList {
    adapter: Option<Box<dyn RowAdapter>>,
    layout: Option<LinearLayoutManager>,
    offset: usize,
    viewport_height: u16,
    pool: Vec<NoteRow>,
    active: usize,
}

impl RecyclerList {
    pub fn new() -> RecyclerList {
        RecyclerList::default()
    }

    pub fn set_adapter(&mut self, adapter: Box<dyn RowAdapter>) {
        debug!("attaching adapter with {} items", adapter.count());
        self.adapter = Some(adapter);
        self.offset = 0;
        self.active = 0;
    }

    pub fn set_layout_manager(&mut self, layout: LinearLayoutManager) {
        self.layout = Some(layout);
    }

    pub fn item_count(&self) -> usize {
        self.adapter.as_ref().map_or(0, |a| a.count())
    }

    /// Position of the first visible row.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Rows bound during the last render, top to bottom.
    pub fn visible_rows(&self) -> &[NoteRow] {
        &self.pool[..self.active]
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.offset = self.offset.saturating_add_signed(delta).min(self.max_offset());
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.page_size() as isize);
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-(self.page_size() as isize));
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    fn page_size(&self) -> usize {
        self.layout
            .map_or(1, |layout| layout.rows_per_page(self.viewport_height))
    }

    // Before the first render the viewport is unknown, so only the item
    // count bounds the offset.
    fn max_offset(&self) -> usize {
        let count = self.item_count();
        match self.layout {
            Some(layout) if self.viewport_height > 0 => {
                layout.max_offset(count, self.viewport_height)
            }
            _ => count.saturating_sub(1),
        }
    }
}

impl Widget for &mut RecyclerList {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.active = 0;
        self.viewport_height = area.height;

        let (Some(adapter), Some(layout)) = (self.adapter.as_deref(), self.layout) else {
            return;
        };

        let count = adapter.count();
        self.offset = self.offset.min(layout.max_offset(count, area.height));

        let placed = layout.layout(area, self.offset, count);
        if self.pool.len() < placed.len() {
            self.pool.resize_with(placed.len(), NoteRow::default);
        }

        for ((position, rect), row) in placed.iter().zip(self.pool.iter_mut()) {
            adapter.bind(row, *position);
            (&*row).render(*rect, buf);
        }
        self.active = placed.len();
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::{adapter::NoteAdapter, models::Note};

    fn numbered(count: usize) -> Rc<[Note]> {
        (0..count)
            .map(|i| Note::new(i as i64, format!("Note {i}"), format!("body {i}")))
            .collect()
    }

    fn attached(count: usize) -> RecyclerList {
        let mut list = RecyclerList::new();
        list.set_layout_manager(LinearLayoutManager::default());
        list.set_adapter(Box::new(NoteAdapter::new(numbered(count))));
        list
    }

    fn render(list: &mut RecyclerList, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        Widget::render(&mut *list, area, &mut buf);
        buf
    }

    fn titles(list: &RecyclerList) -> Vec<&str> {
        list.visible_rows().iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn draws_nothing_without_an_adapter() {
        let mut list = RecyclerList::new();
        list.set_layout_manager(LinearLayoutManager::default());

        let buf = render(&mut list, 20, 8);

        assert!(list.visible_rows().is_empty());
        assert_eq!(buf, Buffer::empty(Rect::new(0, 0, 20, 8)));
    }

    #[test]
    fn draws_nothing_without_a_layout_manager() {
        let mut list = RecyclerList::new();
        list.set_adapter(Box::new(NoteAdapter::new(numbered(3))));

        render(&mut list, 20, 8);

        assert!(list.visible_rows().is_empty());
    }

    #[test]
    fn binds_only_rows_that_fit() {
        let mut list = attached(10);

        render(&mut list, 20, 8);

        assert_eq!(titles(&list), vec!["Note 0", "Note 1"]);
        assert_eq!(list.item_count(), 10);
    }

    #[test]
    fn scrolling_rebinds_recycled_rows() {
        let mut list = attached(10);
        render(&mut list, 20, 8);

        list.scroll_by(3);
        render(&mut list, 20, 8);

        assert_eq!(list.offset(), 3);
        assert_eq!(titles(&list), vec!["Note 3", "Note 4"]);
        assert_eq!(list.pool.len(), 2);
    }

    #[test]
    fn offset_is_clamped_to_the_last_full_page() {
        let mut list = attached(10);
        render(&mut list, 20, 8);

        list.scroll_by(100);
        assert_eq!(list.offset(), 8);

        list.scroll_by(-100);
        assert_eq!(list.offset(), 0);

        list.scroll_to_bottom();
        render(&mut list, 20, 8);
        assert_eq!(titles(&list), vec!["Note 8", "Note 9"]);
    }

    #[test]
    fn pages_move_by_whole_screens() {
        let mut list = attached(10);
        render(&mut list, 20, 12);

        list.page_down();
        assert_eq!(list.offset(), 3);
        list.page_down();
        list.page_down();
        assert_eq!(list.offset(), 7);
        list.page_up();
        assert_eq!(list.offset(), 4);
        list.scroll_to_top();
        assert_eq!(list.offset(), 0);
    }

    #[test]
    fn growing_the_viewport_pulls_the_offset_back() {
        let mut list = attached(4);
        render(&mut list, 20, 4);
        list.scroll_to_bottom();
        assert_eq!(list.offset(), 3);

        render(&mut list, 20, 16);

        assert_eq!(list.offset(), 0);
        assert_eq!(titles(&list), vec!["Note 0", "Note 1", "Note 2", "Note 3"]);
    }

    #[test]
    fn empty_adapter_renders_zero_rows() {
        let mut list = attached(0);

        render(&mut list, 20, 8);
        list.scroll_by(5);

        assert!(list.visible_rows().is_empty());
        assert_eq!(list.offset(), 0);
    }
}

use ratatui::layout::Rect;

const DEFAULT_ROW_HEIGHT: u16 = 4;

/// Stacks fixed-height rows top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearLayoutManager {
    row_height: u16,
    spacing: u16,
}

impl Default for LinearLayoutManager {
    fn default() -> Self {
        LinearLayoutManager::new(DEFAULT_ROW_HEIGHT, 0)
    }
}

impl LinearLayoutManager {
    pub fn new(row_height: u16, spacing: u16) -> LinearLayoutManager {
        LinearLayoutManager {
            row_height: row_height.max(1),
            spacing,
        }
    }

    fn stride(&self) -> u16 {
        self.row_height.saturating_add(self.spacing)
    }

    /// Places positions `first..count` into `area` until it runs out of
    /// height. The last placed row may be clipped.
    pub fn layout(&self, area: Rect, first: usize, count: usize) -> Vec<(usize, Rect)> {
        let mut placed = Vec::new();
        let mut y = area.y;

        for position in first..count {
            if y >= area.bottom() {
                break;
            }
            let height = self.row_height.min(area.bottom() - y);
            placed.push((position, Rect::new(area.x, y, area.width, height)));
            y = y.saturating_add(self.stride());
        }

        placed
    }

    /// Rows that fit entirely in `height`, never less than one.
    pub fn rows_per_page(&self, height: u16) -> usize {
        let fitting = (u32::from(height) + u32::from(self.spacing)) / u32::from(self.stride());
        (fitting as usize).max(1)
    }

    /// Largest first-visible position that still keeps the last page full.
    pub fn max_offset(&self, count: usize, height: u16) -> usize {
        count.saturating_sub(self.rows_per_page(height))
    }
}

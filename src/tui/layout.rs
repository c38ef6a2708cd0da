//! # Layout Module
//!
//! Layout arithmetic for the game view: the board/sidebar split and the 3x3
//! cell grid. Keeping the math here means the render path and the tests
//! carve up a frame the same way.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::games::tictactoe::{BOARD_SIDE, CELL_COUNT};

/// Configuration for the main layout areas
#[derive(Debug, Clone, Copy)]
pub struct LayoutConfig {
    /// Percentage of width given to the board (0-100)
    pub board_percent: u16,
    /// Rows reserved for the status panel at the top of the sidebar
    pub status_height: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            board_percent: 60,
            status_height: 7,
        }
    }
}

impl LayoutConfig {
    /// Split the frame into (board, sidebar).
    pub fn game_layout(&self, area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(self.board_percent),
                Constraint::Min(0),
            ])
            .split(area);
        (chunks[0], chunks[1])
    }

    /// Split the sidebar into (status, history).
    pub fn sidebar_layout(&self, area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(self.status_height), Constraint::Min(0)])
            .split(area);
        (chunks[0], chunks[1])
    }
}

/// Split a board area into nine cell rectangles in row-major order.
pub fn cell_rects(area: Rect) -> Vec<Rect> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 3); BOARD_SIDE])
        .split(area);

    let mut rects = Vec::with_capacity(CELL_COUNT);
    for row in rows.iter() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); BOARD_SIDE])
            .split(*row);
        rects.extend(cols.iter().copied());
    }
    rects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_nine_cells_in_row_major_order() {
        let rects = cell_rects(Rect::new(0, 0, 45, 21));
        assert_eq!(rects.len(), CELL_COUNT);

        for row in 0..BOARD_SIDE {
            for col in 0..BOARD_SIDE {
                let rect = rects[row * BOARD_SIDE + col];
                if col > 0 {
                    assert!(rect.x > rects[row * BOARD_SIDE + col - 1].x);
                }
                if row > 0 {
                    assert!(rect.y > rects[(row - 1) * BOARD_SIDE + col].y);
                }
            }
        }
    }

    #[test]
    fn cells_do_not_overlap() {
        let rects = cell_rects(Rect::new(2, 3, 30, 15));
        for (i, a) in rects.iter().enumerate() {
            for b in rects.iter().skip(i + 1) {
                let disjoint = a.x + a.width <= b.x
                    || b.x + b.width <= a.x
                    || a.y + a.height <= b.y
                    || b.y + b.height <= a.y;
                assert!(disjoint, "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn board_and_sidebar_cover_the_frame() {
        let config = LayoutConfig::default();
        let area = Rect::new(0, 0, 80, 24);
        let (board, sidebar) = config.game_layout(area);
        assert_eq!(board.width + sidebar.width, area.width);
        assert_eq!(board.height, area.height);

        let (status, history) = config.sidebar_layout(sidebar);
        assert_eq!(status.height, config.status_height);
        assert_eq!(status.height + history.height, sidebar.height);
    }
}

//! Screen layout: outer frame, aspect-correct play field, status line, info panel.

use crate::core::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear},
    Frame,
};

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: u16 = 2;

/// Columns per field row that keep the board's proportions on screen.
const COLS_PER_ROW: u16 = (BOARD_WIDTH / BOARD_HEIGHT) as u16 * CELL_ASPECT;

const INFO_PANEL_WIDTH: u16 = 24;

/// Areas returned by [`create_runner_layout`].
pub struct RunnerLayout {
    /// Play field plus its ground row, centered in the space left of the panel.
    pub board: Rect,
    /// One line under the play field.
    pub status_line: Rect,
    /// Right-hand panel, with its own border.
    pub info_panel: Rect,
}

/// Frame the game and carve out its areas.
///
/// ```text
/// ┌─ Dino Runner ───────────────────┬─ Info ──────┐
/// │                                 │             │
/// │   [board, fitted to 3:1]        │  [info]     │
/// │ ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓ │             │
/// │ [status line]                   │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_runner_layout(frame: &mut Frame, area: Rect) -> RunnerLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Dino Runner ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightYellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(INFO_PANEL_WIDTH)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(h_chunks[0]);

    RunnerLayout {
        board: fit_board(v_chunks[0]),
        status_line: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Largest centered rectangle inside `area` whose field rows keep the
/// board's 3:1 shape. The extra bottom row is the ground.
pub fn fit_board(area: Rect) -> Rect {
    let field_rows = area
        .height
        .saturating_sub(1)
        .min(area.width / COLS_PER_ROW);
    let width = field_rows * COLS_PER_ROW;
    let height = if field_rows == 0 { 0 } else { field_rows + 1 };

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_board_height_limited_by_width() {
        let board = fit_board(Rect::new(0, 0, 120, 30));
        assert_eq!(board, Rect::new(0, 4, 120, 21));
    }

    #[test]
    fn test_fit_board_wide_area_is_centered() {
        let board = fit_board(Rect::new(0, 0, 200, 16));
        assert_eq!(board, Rect::new(55, 0, 90, 16));
    }

    #[test]
    fn test_fit_board_keeps_offset() {
        let board = fit_board(Rect::new(1, 1, 60, 11));
        assert_eq!(board, Rect::new(1, 1, 60, 11));
    }

    #[test]
    fn test_fit_board_field_is_three_to_one() {
        for (w, h) in [(80, 24), (37, 50), (300, 9)] {
            let board = fit_board(Rect::new(0, 0, w, h));
            let field_rows = board.height - 1;
            assert_eq!(board.width, field_rows * 6);
            assert!(board.width <= w && board.height <= h);
        }
    }

    #[test]
    fn test_fit_board_too_small() {
        let board = fit_board(Rect::new(3, 3, 5, 1));
        assert_eq!(board.width, 0);
        assert_eq!(board.height, 0);
    }
}

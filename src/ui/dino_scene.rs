//! Dino Run scene rendering.
//!
//! Uses a cell buffer for per-character color control. The 750x250 board is
//! scaled onto the area picked by [`fit_board`](super::layout::fit_board),
//! the runner and cacti are stamped into a 2D grid, and the grid is emitted
//! row-by-row as Paragraphs.

use super::layout::create_runner_layout;
use crate::build_info::build_label;
use crate::core::constants::{BOARD_HEIGHT, BOARD_WIDTH, MAX_OBSTACLES};
use crate::dino::types::{Bounds, ObstacleKind, SimulationState, VisualState};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

// ── Ground rendering characters ─────────────────────────────────────
const GROUND_CHAR: char = '▓';

/// Ticks per leg swap in the run animation.
const RUN_ANIM_TICKS: u64 = 6;

/// Render the Dino Run scene from a read-only view of the simulation.
pub fn render_dino_scene(frame: &mut Frame, area: Rect, state: &SimulationState) {
    let layout = create_runner_layout(frame, area);

    render_play_field(frame, layout.board, state);
    render_status_line(frame, layout.status_line, state);
    render_info_panel(frame, layout.info_panel, state);
}

/// Cell in the render buffer with foreground and background colors.
#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

/// Cell-space rectangle with exclusive right/bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellRect {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

/// Project board bounds onto a `cols` x `rows` grid. Anything visible gets
/// at least one cell in each direction.
fn project(bounds: &Bounds, cols: u16, rows: u16) -> CellRect {
    let x_scale = cols as f64 / BOARD_WIDTH as f64;
    let y_scale = rows as f64 / BOARD_HEIGHT as f64;

    let left = (bounds.x as f64 * x_scale).floor() as i32;
    let top = (bounds.y as f64 * y_scale).floor() as i32;
    let right = ((bounds.x + bounds.width) as f64 * x_scale).ceil() as i32;
    let bottom = ((bounds.y + bounds.height) as f64 * y_scale).ceil() as i32;

    CellRect {
        left,
        top,
        right: right.max(left + 1),
        bottom: bottom.max(top + 1),
    }
}

fn obstacle_glyph(kind: ObstacleKind) -> (char, Color) {
    match kind {
        ObstacleKind::Small => ('|', Color::Rgb(60, 140, 60)),
        ObstacleKind::Medium => ('‖', Color::Rgb(50, 130, 50)),
        ObstacleKind::Large => ('█', Color::Rgb(40, 110, 40)),
    }
}

/// Pick the runner glyph for one cell of its sprite.
fn runner_glyph(
    visual: VisualState,
    dx: i32,
    dy: i32,
    width: i32,
    height: i32,
    score: u64,
) -> char {
    let is_head = dy == 0;
    let is_feet = dy == height - 1 && height > 1;
    let is_eye = is_head && dx == width - 2;

    if is_eye {
        return if visual == VisualState::Dead { 'x' } else { '•' };
    }
    if is_feet {
        return match visual {
            VisualState::Running => {
                let stride = (score / RUN_ANIM_TICKS) % 2 == 0;
                match (dx % 2 == 0, stride) {
                    (true, true) | (false, false) => '/',
                    _ => '\\',
                }
            }
            VisualState::Jumping => '▀',
            VisualState::Dead => '_',
        };
    }
    '█'
}

/// Write `glyph(dx, dy)` into every in-bounds cell of `rect`, skipping blanks.
fn stamp(rows: &mut [Vec<Cell>], rect: CellRect, glyph: impl Fn(i32, i32) -> Cell) {
    for row in rect.top.max(0)..rect.bottom.min(rows.len() as i32) {
        let cols = &mut rows[row as usize];
        for col in rect.left.max(0)..rect.right.min(cols.len() as i32) {
            let cell = glyph(col - rect.left, row - rect.top);
            if cell.ch != ' ' {
                cols[col as usize] = cell;
            }
        }
    }
}

/// Render the play field: runner, obstacles, ground, score overlay.
fn render_play_field(frame: &mut Frame, area: Rect, state: &SimulationState) {
    if area.height < 3 || area.width < 10 {
        return;
    }

    let render_width = area.width;
    let field_rows = area.height - 1;
    let ground_row = field_rows as usize;

    let mut buffer: Vec<Vec<Cell>> =
        vec![vec![Cell::default(); render_width as usize]; area.height as usize];

    // ── Obstacles ─────────────────────────────────────────────────────
    for obstacle in &state.obstacles {
        let (ch, fg) = obstacle_glyph(obstacle.kind);
        let rect = project(&obstacle.bounds(), render_width, field_rows);
        stamp(&mut buffer[..ground_row], rect, |_, _| Cell {
            ch,
            fg,
            bg: Color::Reset,
        });
    }

    // ── Runner ────────────────────────────────────────────────────────
    let runner = &state.runner;
    let runner_rect = project(&runner.bounds(), render_width, field_rows);
    let sprite_w = runner_rect.right - runner_rect.left;
    let sprite_h = runner_rect.bottom - runner_rect.top;
    let runner_color = match runner.visual {
        VisualState::Dead => Color::Red,
        _ => Color::LightYellow,
    };
    stamp(&mut buffer[..ground_row], runner_rect, |dx, dy| Cell {
        ch: runner_glyph(runner.visual, dx, dy, sprite_w, sprite_h, state.score),
        fg: runner_color,
        bg: Color::Reset,
    });

    // ── Ground ────────────────────────────────────────────────────────
    for cell in buffer[ground_row].iter_mut() {
        *cell = Cell {
            ch: GROUND_CHAR,
            fg: Color::Rgb(90, 70, 50),
            bg: Color::Rgb(50, 40, 30),
        };
    }

    // ── Score overlay (top-left) ──────────────────────────────────────
    let score_fg = if state.game_over {
        Color::Red
    } else {
        Color::White
    };
    for (i, ch) in state.overlay_text().chars().enumerate() {
        let col = 1 + i;
        if col < render_width as usize {
            buffer[0][col] = Cell {
                ch,
                fg: score_fg,
                bg: Color::Reset,
            };
        }
    }

    // ── Render buffer to terminal ─────────────────────────────────────
    for (row_idx, row_data) in buffer.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_bg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter() {
            if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }
            current_fg = cell.fg;
            current_bg = cell.bg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(
                current_text,
                Style::default().fg(current_fg).bg(current_bg),
            ));
        }

        let line = Paragraph::new(Line::from(spans));
        let row_area = Rect::new(area.x, area.y + row_idx as u16, render_width, 1);
        frame.render_widget(line, row_area);
    }
}

/// Status message followed by key hints, on one line under the play field.
fn render_status_line(frame: &mut Frame, area: Rect, state: &SimulationState) {
    let (status, status_color, action) = if state.game_over {
        (state.overlay_text(), Color::Red, "Restart")
    } else {
        ("Run!".to_string(), Color::LightYellow, "Jump")
    };

    let key = Style::default().fg(Color::White);
    let hint = Style::default().fg(Color::DarkGray);
    let line = Line::from(vec![
        Span::styled(status, Style::default().fg(status_color)),
        Span::raw("   "),
        Span::styled("[Space/Up]", key),
        Span::styled(format!(" {}", action), hint),
        Span::raw("  "),
        Span::styled("[Esc]", key),
        Span::styled(" Quit", hint),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Render the info panel on the right side.
fn render_info_panel(frame: &mut Frame, area: Rect, state: &SimulationState) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (state_label, state_color) = match state.runner.visual {
        VisualState::Running => ("Running", Color::Green),
        VisualState::Jumping => ("Jumping", Color::Cyan),
        VisualState::Dead => ("Crashed", Color::Red),
    };

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Cacti: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}/{}", state.obstacles.len(), MAX_OBSTACLES),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("State: ", Style::default().fg(Color::DarkGray)),
            Span::styled(state_label, Style::default().fg(state_color)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" █ ", Style::default().fg(Color::LightYellow)),
            Span::styled("Runner", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" | ", Style::default().fg(Color::Rgb(60, 140, 60))),
            Span::styled("Small cactus", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" ‖ ", Style::default().fg(Color::Rgb(50, 130, 50))),
            Span::styled("Medium cactus", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" █ ", Style::default().fg(Color::Rgb(40, 110, 40))),
            Span::styled("Large cactus", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            build_label(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

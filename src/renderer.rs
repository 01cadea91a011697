use std::collections::HashMap;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::config::{BACKGROUND_COLOR, Playfield, Rgb};
use crate::effect::Effect;
use crate::snake::{Cell, SegmentId};
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_title_menu};

/// Terminal columns used to draw one grid cell; keeps cells roughly square.
const CELL_WIDTH: u16 = 2;

const GLYPH_SEGMENT: &str = "██";
const GLYPH_FOOD: &str = "◖◗";

/// Screen-level text drawn over the board.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum Overlay {
    #[default]
    None,
    Title,
    GameOver {
        score: u32,
        high_score: u32,
    },
}

/// Retained picture of the board, built by folding engine effects.
#[derive(Debug, Clone, Default)]
pub struct BoardView {
    segments: HashMap<SegmentId, (Cell, Rgb)>,
    food: Option<(Cell, Rgb)>,
    score_text: String,
    overlay: Overlay,
}

impl BoardView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::CreateSegment { id, cell, color } => {
                self.segments.insert(*id, (*cell, *color));
            }
            Effect::RemoveSegment { id } => {
                self.segments.remove(id);
            }
            Effect::CreateFood { cell, color } => self.food = Some((*cell, *color)),
            Effect::RemoveFood => self.food = None,
            Effect::ClearBoard => {
                self.segments.clear();
                self.food = None;
                self.overlay = Overlay::None;
            }
            Effect::DisplayScore { text } => self.score_text.clone_from(text),
            Effect::DisplayGameOver { score, high_score } => {
                self.overlay = Overlay::GameOver {
                    score: *score,
                    high_score: *high_score,
                };
            }
            Effect::DisplayTitle => self.overlay = Overlay::Title,
        }
    }

    pub fn apply_all<'a>(&mut self, effects: impl IntoIterator<Item = &'a Effect>) {
        for effect in effects {
            self.apply(effect);
        }
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn food(&self) -> Option<Cell> {
        self.food.map(|(cell, _)| cell)
    }

    #[must_use]
    pub fn score_text(&self) -> &str {
        &self.score_text
    }

    #[must_use]
    pub fn overlay(&self) -> Overlay {
        self.overlay
    }
}

/// Renders the full frame from the retained view.
pub fn render(frame: &mut Frame<'_>, view: &BoardView, field: Playfield) {
    let board_width = grid_span(field.columns()).saturating_mul(CELL_WIDTH) + 2;
    let board_height = grid_span(field.rows()) + 2;

    let area = frame.area();
    if area.width < board_width || area.height < board_height + 1 {
        render_too_small(frame, area, board_width, board_height + 1);
        return;
    }

    let board_area = render_hud(frame, area, view.score_text(), board_width, board_height);

    let block = Block::bordered().border_style(Style::new().fg(Color::DarkGray));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);
    frame.render_widget(
        Block::new().style(Style::new().bg(BACKGROUND_COLOR.into())),
        inner,
    );

    if let Some((cell, color)) = view.food {
        draw_cell(frame, inner, field, cell, GLYPH_FOOD, color);
    }
    for (cell, color) in view.segments.values() {
        draw_cell(frame, inner, field, *cell, GLYPH_SEGMENT, *color);
    }

    match view.overlay {
        Overlay::None => {}
        Overlay::Title => render_title_menu(frame, inner),
        Overlay::GameOver { score, high_score } => {
            render_game_over_menu(frame, inner, score, high_score);
        }
    }
}

fn draw_cell(
    frame: &mut Frame<'_>,
    inner: Rect,
    field: Playfield,
    cell: Cell,
    glyph: &str,
    color: Rgb,
) {
    let Some((x, y)) = grid_to_terminal(inner, field, cell) else {
        return;
    };

    frame.buffer_mut().set_string(
        x,
        y,
        glyph,
        Style::new().fg(color.into()).bg(BACKGROUND_COLOR.into()),
    );
}

fn grid_to_terminal(inner: Rect, field: Playfield, cell: Cell) -> Option<(u16, u16)> {
    if !cell.is_within(field) {
        return None;
    }

    let column = u16::try_from(cell.x / field.cell_size).ok()?;
    let row = u16::try_from(cell.y / field.cell_size).ok()?;

    let x = inner.x.saturating_add(column.saturating_mul(CELL_WIDTH));
    let y = inner.y.saturating_add(row);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

fn grid_span(cells: i32) -> u16 {
    u16::try_from(cells).unwrap_or(u16::MAX)
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, width: u16, height: u16) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from("Terminal too small"),
            Line::from(format!("need {width}x{height}")),
        ])
        .alignment(Alignment::Center),
        middle,
    );
}

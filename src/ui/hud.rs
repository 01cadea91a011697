use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

/// Renders the score label and returns the board rectangle below it, both
/// centred in `area`.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    score_text: &str,
    board_width: u16,
    board_height: u16,
) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(board_width)])
        .flex(Flex::Center)
        .areas(area);
    let [score_area, board_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(board_height)])
            .flex(Flex::Center)
            .areas(column);

    frame.render_widget(
        Paragraph::new(Line::from(score_text.to_owned()))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        score_area,
    );

    board_area
}

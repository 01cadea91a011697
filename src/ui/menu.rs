use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph};

use crate::config::BACKGROUND_COLOR;

/// Draws the title screen over the board.
pub fn render_title_menu(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_popup(area, 70, 50);
    frame.render_widget(Clear, popup);

    let [title_row, prompt_row] =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(popup);

    frame.render_widget(
        Paragraph::new(vec![Line::from(""), Line::from("Snake Game")])
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(BACKGROUND_COLOR.into())
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );

    let prompt = vec![
        Line::from("Press Enter to Start"),
        Line::from(""),
        Line::from("[Arrows]/[WASD] Move  [Q]/[Esc] Quit")
            .style(Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(
        Paragraph::new(prompt)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).bg(BACKGROUND_COLOR.into())),
        prompt_row,
    );
}

/// Draws the game-over screen over the board.
pub fn render_game_over_menu(frame: &mut Frame<'_>, area: Rect, score: u32, high_score: u32) {
    let popup = centered_popup(area, 70, 60);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("GAME OVER").style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(format!("High Score: {high_score}")),
        Line::from(""),
        Line::from("Press Enter to Restart"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).bg(BACKGROUND_COLOR.into())),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}

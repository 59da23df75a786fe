//! Splash screen
//!
//! Logo banner with a single full-width Start button underneath.

use super::{render_help, MenuView};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const LOGO: [&str; 5] = [
    r"  ____ _                    ",
    r" / ___| |__   ___  ___ ___  ",
    r"| |   | '_ \ / _ \/ __/ __| ",
    r"| |___| | | |  __/\__ \__ \ ",
    r" \____|_| |_|\___||___/___/ ",
];

/// Render the splash screen
pub fn render(f: &mut Frame, view: &MenuView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(7),    // Logo
            Constraint::Length(3), // Start button
            Constraint::Length(3), // Help text
        ])
        .split(f.size());

    let logo: Vec<Line> = LOGO.iter().map(|l| Line::from(*l)).collect();
    let logo = Paragraph::new(logo)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(logo, chunks[0]);

    if let Some(start) = view.surface.focused() {
        let button = Paragraph::new(start.label)
            .style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(button, chunks[1]);
    }

    render_help(f, chunks[2], false);
}

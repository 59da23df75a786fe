//! TUI screen rendering
//!
//! Draws whatever the surface currently holds. The splash and in-progress
//! screens get their own layouts; every other screen is a button panel.

pub mod panel;
pub mod progress;
pub mod splash;

use super::surface::Surface;
use crate::menu::{GameSelection, Screen};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Everything a screen needs to draw itself
pub struct MenuView<'a> {
    pub screen: Screen,
    pub surface: &'a Surface,
    pub message: Option<&'a str>,
    pub selection: Option<&'a GameSelection>,
}

/// Render the current screen
pub fn render(f: &mut Frame, view: &MenuView) {
    match view.screen {
        Screen::Splash => splash::render(f, view),
        Screen::InProgress => progress::render(f, view),
        _ => panel::render(f, view),
    }
}

fn key_span(key: &'static str) -> Span<'static> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

/// Render the help bar
fn render_help(f: &mut Frame, area: Rect, text_entry: bool) {
    let mut spans = vec![
        key_span("←↑↓→"),
        Span::raw(" Move  "),
        key_span("Enter"),
        Span::raw(" Select  "),
        key_span("Esc"),
        Span::raw(" Back  "),
    ];
    if text_entry {
        spans.push(key_span("Ctrl+C"));
    } else {
        spans.push(key_span("Q"));
    }
    spans.push(Span::raw(" Quit"));

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(help, area);
}

#[cfg(test)]
pub(crate) fn render_to_string(view: &MenuView, width: u16, height: u16) -> String {
    use ratatui::{backend::TestBackend, Terminal};

    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| render(f, view)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer.get(x, y).symbol());
        }
        text.push('\n');
    }
    text
}

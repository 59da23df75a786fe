//! In-progress screen
//!
//! Shown once Begin is pressed, while the selection is passed on.

use super::MenuView;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the in-progress screen
pub fn render(f: &mut Frame, view: &MenuView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(f.size());

    let mut lines = vec![Line::styled(
        view.screen.title(),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(selection) = view.selection {
        lines.push(Line::from(""));
        lines.push(Line::from(selection.to_string()));
    }

    let banner = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(banner, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::render_to_string;
    use crate::app::surface::Surface;
    use crate::menu::{EngineChoice, GameMode, Screen, SelectionDraft, Side};

    #[test]
    fn test_shows_selection_summary() {
        let mut draft = SelectionDraft::default();
        draft.game_mode = Some(GameMode::VsEngine);
        draft.engine = Some(EngineChoice::Maia);
        draft.side = Some(Side::Black);
        let selection = draft.commit().unwrap();

        let surface = Surface::new();
        let view = MenuView {
            screen: Screen::InProgress,
            surface: &surface,
            message: None,
            selection: Some(&selection),
        };
        let text = render_to_string(&view, 80, 24);
        assert!(text.contains("Game in Progress"));
        assert!(text.contains("Maia engine as black"));
    }
}

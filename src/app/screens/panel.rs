//! Button panel screen
//!
//! Title, optional text entry, the buttons laid out per the screen's
//! arrangement hint, the validation message and the help bar.

use super::{render_help, MenuView};
use crate::app::surface::Surface;
use crate::menu::PanelLayout;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render a button panel screen
pub fn render(f: &mut Frame, view: &MenuView) {
    let entry_height = if view.surface.has_text_entry() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Length(entry_height), // Text entry
            Constraint::Min(3),               // Buttons
            Constraint::Length(1),            // Message
            Constraint::Length(3),            // Help text
        ])
        .split(f.size());

    render_title(f, chunks[0], view.screen.title());
    render_entry(f, chunks[1], view.surface);
    render_buttons(f, chunks[2], view.surface, view.screen.layout());

    if let Some(message) = view.message {
        let message = Paragraph::new(message)
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(message, chunks[3]);
    }

    render_help(f, chunks[4], view.surface.has_text_entry());
}

fn render_title(f: &mut Frame, area: Rect, title: &str) {
    let title = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(title, area);
}

fn render_entry(f: &mut Frame, area: Rect, surface: &Surface) {
    let Some(entry) = surface.text_entry() else {
        return;
    };

    let text = surface.entry_text();
    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(entry.label)
            .border_style(Style::default().fg(Color::White)),
    );
    f.render_widget(paragraph, area);

    f.set_cursor(entry_cursor_x(area, text), area.y + 1);
}

/// Cursor column after the typed text, clamped inside the box
fn entry_cursor_x(area: Rect, text: &str) -> u16 {
    let typed = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    let max_x = area.x.saturating_add(area.width.saturating_sub(2));
    area.x.saturating_add(1).saturating_add(typed).min(max_x)
}

fn render_buttons(f: &mut Frame, area: Rect, surface: &Surface, layout: PanelLayout) {
    let count = surface.buttons().count();
    let areas = button_areas(area, count, layout);

    for (i, (control, rect)) in surface.buttons().zip(areas).enumerate() {
        let style = if i == surface.focus_index() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let button = Paragraph::new(control.label)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(style));
        f.render_widget(button, rect);
    }
}

fn equal_split(area: Rect, count: usize, direction: Direction) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints = vec![Constraint::Ratio(1, count as u32); count];
    Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Areas for `count` buttons arranged per `layout`
fn button_areas(area: Rect, count: usize, layout: PanelLayout) -> Vec<Rect> {
    match layout {
        PanelLayout::Stacked => equal_split(area, count, Direction::Vertical),
        PanelLayout::Columns => equal_split(area, count, Direction::Horizontal),
        PanelLayout::ColumnsWithFooter if count > 1 => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(3)])
                .split(area);
            let mut areas = equal_split(rows[0], count - 1, Direction::Horizontal);
            areas.push(rows[1]);
            areas
        }
        PanelLayout::ColumnsWithFooter => equal_split(area, count, Direction::Vertical),
        PanelLayout::Grid { columns } => {
            let columns = usize::from(columns.max(1));
            let row_count = count.div_ceil(columns);
            equal_split(area, row_count, Direction::Vertical)
                .into_iter()
                .flat_map(|row| equal_split(row, columns, Direction::Horizontal))
                .take(count)
                .collect()
        }
    }
}

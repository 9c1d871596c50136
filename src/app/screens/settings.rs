//! Settings screen implementation
//!
//! A single dark mode switch bound to the active theme.

use super::start::render_help;
use crate::{app::palette::Palette, config::Theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Default)]
pub struct SettingsScreen;

impl SettingsScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, f: &mut Frame, area: Rect, palette: &Palette, theme: Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Settings")
            .style(palette.title())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(palette.border()),
            );
        f.render_widget(title, chunks[0]);

        let (switch, switch_style) = if theme.is_dark() {
            ("[ ON  ]", palette.highlight())
        } else {
            ("[ OFF ]", palette.muted())
        };
        let lines = vec![
            Line::from(vec![
                Span::styled("Dark Mode  ", palette.title()),
                Span::styled(switch, switch_style),
            ]),
            Line::from(Span::styled(
                format!("Current theme: {}", theme),
                palette.muted(),
            )),
        ];
        let body = Paragraph::new(lines)
            .style(palette.base())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(palette.border())
                    .title("Appearance"),
            );
        f.render_widget(body, chunks[1]);

        render_help(
            f,
            chunks[3],
            palette,
            &[("Enter/T", "Toggle dark mode"), ("Esc", "Back"), ("Q", "Quit")],
        );
    }
}

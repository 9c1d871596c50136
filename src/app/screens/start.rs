//! Start screen implementation
//!
//! Landing menu with Create Goal, Settings and Exit options.

use crate::app::palette::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Entries of the landing menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartAction {
    CreateGoal,
    Settings,
    Exit,
}

impl StartAction {
    const ALL: [StartAction; 3] = [
        StartAction::CreateGoal,
        StartAction::Settings,
        StartAction::Exit,
    ];

    fn label(self) -> &'static str {
        match self {
            StartAction::CreateGoal => "Start Your Savings Journey",
            StartAction::Settings => "Settings",
            StartAction::Exit => "Exit",
        }
    }
}

/// Start screen component
#[derive(Debug)]
pub struct StartScreen {
    selected_index: usize,
    list_state: ListState,
}

impl StartScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected_index: 0,
            list_state,
        }
    }

    pub fn selected_action(&self) -> StartAction {
        StartAction::ALL[self.selected_index]
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = StartAction::ALL.len() - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % StartAction::ALL.len();
        self.list_state.select(Some(self.selected_index));
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, palette: &Palette) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Title and subtitle
                Constraint::Min(5),    // Menu
                Constraint::Length(3), // Help text
            ])
            .split(area);

        self.render_title(f, chunks[0], palette);
        self.render_menu(f, chunks[1], palette);
        render_help(
            f,
            chunks[2],
            palette,
            &[("↑↓", "Navigate"), ("Enter", "Select"), ("T", "Theme"), ("Q", "Quit")],
        );
    }

    fn render_title(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let title_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(2)])
            .split(area);

        let title = Paragraph::new("SaveMate")
            .style(palette.title())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(palette.border()),
            );
        f.render_widget(title, title_chunks[0]);

        let subtitle = Paragraph::new("Plan a goal, set a target, watch it grow")
            .style(palette.muted())
            .alignment(Alignment::Center);
        f.render_widget(subtitle, title_chunks[1]);
    }

    fn render_menu(&mut self, f: &mut Frame, area: Rect, palette: &Palette) {
        let items: Vec<ListItem> = StartAction::ALL
            .iter()
            .map(|action| ListItem::new(action.label()))
            .collect();

        let list = List::new(items)
            .style(palette.base())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(palette.border())
                    .title("Menu"),
            )
            .highlight_style(palette.highlight())
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl Default for StartScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Key hint bar shared by all screens
pub fn render_help(f: &mut Frame, area: Rect, palette: &Palette, hints: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        spans.push(Span::styled(key.to_string(), palette.key_hint()));
        spans.push(Span::styled(format!(" {}  ", label), palette.base()));
    }

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.muted()),
        );
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_screen_creation() {
        let screen = StartScreen::new();
        assert_eq!(screen.selected_index, 0);
        assert_eq!(screen.selected_action(), StartAction::CreateGoal);
    }

    #[test]
    fn test_menu_navigation() {
        let mut screen = StartScreen::new();

        screen.select_next();
        assert_eq!(screen.selected_action(), StartAction::Settings);
        screen.select_next();
        assert_eq!(screen.selected_action(), StartAction::Exit);

        // Wraps to the beginning
        screen.select_next();
        assert_eq!(screen.selected_action(), StartAction::CreateGoal);
    }

    #[test]
    fn test_menu_navigation_up() {
        let mut screen = StartScreen::new();

        // Moving up from the first item wraps to the last
        screen.select_previous();
        assert_eq!(screen.selected_action(), StartAction::Exit);

        screen.select_previous();
        assert_eq!(screen.selected_action(), StartAction::Settings);
    }
}

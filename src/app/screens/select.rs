//! Goal selection screen
//!
//! Template grid plus the dialog for defining a custom goal.

use super::{centered_rect, start::render_help};
use crate::{
    app::{
        input::{InputKind, TextField},
        palette::{goal_color, Palette},
        state::{NavigationAction, StateManager},
    },
    goal::{
        catalog::{icon_glyph, DEFAULT_CUSTOM_COLOR, DEFAULT_CUSTOM_ICON},
        GoalIdentity, GoalTemplate, COLOR_PALETTE, CUSTOM_ICONS, GOAL_TEMPLATES,
    },
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const COLUMNS: usize = 3;

/// What the selection screen asks the controller to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectAction {
    /// Enter on a template
    Choose(&'static GoalTemplate),
    /// Move on with the current choice
    Continue,
    /// Submit the custom goal dialog
    Custom {
        name: String,
        icon: String,
        color: String,
    },
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogFocus {
    Name,
    Icon,
    Color,
}

/// Modal for a user-defined goal
#[derive(Debug, Clone)]
pub struct CustomGoalDialog {
    name: TextField,
    icon_index: usize,
    /// `None` keeps the default color
    color_index: Option<usize>,
    focus: DialogFocus,
}

impl CustomGoalDialog {
    pub fn new() -> Self {
        Self {
            name: TextField::new("Goal Name", InputKind::Text)
                .with_placeholder("e.g. New Guitar")
                .with_max_len(30),
            icon_index: CUSTOM_ICONS
                .iter()
                .position(|icon| *icon == DEFAULT_CUSTOM_ICON)
                .unwrap_or(0),
            color_index: None,
            focus: DialogFocus::Name,
        }
    }

    pub fn icon(&self) -> &'static str {
        CUSTOM_ICONS[self.icon_index]
    }

    pub fn color(&self) -> &'static str {
        self.color_index
            .map(|i| COLOR_PALETTE[i])
            .unwrap_or(DEFAULT_CUSTOM_COLOR)
    }

    fn cycle_focus(&mut self, forward: bool) {
        self.focus = match (self.focus, forward) {
            (DialogFocus::Name, true) | (DialogFocus::Color, false) => DialogFocus::Icon,
            (DialogFocus::Icon, true) | (DialogFocus::Name, false) => DialogFocus::Color,
            (DialogFocus::Color, true) | (DialogFocus::Icon, false) => DialogFocus::Name,
        };
    }

    fn step_choice(&mut self, forward: bool) {
        match self.focus {
            DialogFocus::Icon => {
                let len = CUSTOM_ICONS.len();
                self.icon_index = if forward {
                    (self.icon_index + 1) % len
                } else {
                    (self.icon_index + len - 1) % len
                };
            }
            DialogFocus::Color => {
                let len = COLOR_PALETTE.len();
                self.color_index = Some(match (self.color_index, forward) {
                    (None, true) => 0,
                    (None, false) => len - 1,
                    (Some(i), true) => (i + 1) % len,
                    (Some(i), false) => (i + len - 1) % len,
                });
            }
            DialogFocus::Name => {}
        }
    }

    /// Returns `Some(true)` to submit, `Some(false)` to cancel
    fn handle_key(&mut self, key: KeyEvent) -> Option<bool> {
        match key.code {
            KeyCode::Esc => return Some(false),
            KeyCode::Enter => return Some(true),
            KeyCode::Tab | KeyCode::Down => self.cycle_focus(true),
            KeyCode::BackTab | KeyCode::Up => self.cycle_focus(false),
            KeyCode::Left if self.focus != DialogFocus::Name => self.step_choice(false),
            KeyCode::Right if self.focus != DialogFocus::Name => self.step_choice(true),
            _ if self.focus == DialogFocus::Name => {
                self.name.handle_key(key);
            }
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let popup = centered_rect(60, 13, area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border())
            .style(palette.base())
            .title(Span::styled("Create Custom Goal", palette.title()));
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(1),
            ])
            .split(inner);

        self.name
            .render(f, chunks[0], palette, self.focus == DialogFocus::Name);

        let label_style = |focus: DialogFocus| {
            if self.focus == focus {
                palette.key_hint()
            } else {
                palette.muted()
            }
        };

        let mut icons = vec![Span::styled("Icon   ", label_style(DialogFocus::Icon))];
        for (i, icon) in CUSTOM_ICONS.iter().enumerate() {
            let glyph = icon_glyph(icon);
            if i == self.icon_index {
                icons.push(Span::styled(format!("[{}]", glyph), palette.highlight()));
            } else {
                icons.push(Span::styled(format!(" {} ", glyph), palette.base()));
            }
        }
        f.render_widget(Paragraph::new(Line::from(icons)), chunks[1]);

        let mut colors = vec![Span::styled("Color  ", label_style(DialogFocus::Color))];
        for (i, hex) in COLOR_PALETTE.iter().enumerate() {
            let swatch = Style::default()
                .fg(goal_color(hex, palette))
                .bg(palette.background);
            if Some(i) == self.color_index {
                colors.push(Span::styled("[■]", swatch.add_modifier(Modifier::BOLD)));
            } else {
                colors.push(Span::styled(" ■ ", swatch));
            }
        }
        f.render_widget(Paragraph::new(Line::from(colors)), chunks[2]);

        let hint = Paragraph::new("Tab switch field  ←→ choose  Enter create  Esc cancel")
            .style(palette.muted())
            .alignment(Alignment::Center);
        f.render_widget(hint, chunks[3]);
    }
}

impl Default for CustomGoalDialog {
    fn default() -> Self {
        Self::new()
    }
}

/// Template grid component
#[derive(Debug, Default)]
pub struct SelectScreen {
    selected_index: usize,
    dialog: Option<CustomGoalDialog>,
}

impl SelectScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_template(&self) -> &'static GoalTemplate {
        &GOAL_TEMPLATES[self.selected_index]
    }

    /// Whether keys go to a text field instead of navigation
    pub fn captures_text(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn open_dialog(&mut self) {
        self.dialog = Some(CustomGoalDialog::new());
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// Point the grid at a template, e.g. when stepping back to this screen
    pub fn focus_template(&mut self, name: &str) {
        if let Some(index) = GOAL_TEMPLATES.iter().position(|t| t.name == name) {
            self.selected_index = index;
        }
    }

    fn move_by(&mut self, delta: isize) {
        let last = GOAL_TEMPLATES.len() as isize - 1;
        let next = self.selected_index as isize + delta;
        if (0..=last).contains(&next) {
            self.selected_index = next as usize;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<SelectAction> {
        if let Some(dialog) = self.dialog.as_mut() {
            let submit = dialog.handle_key(key)?;
            if !submit {
                self.dialog = None;
                return None;
            }
            return Some(SelectAction::Custom {
                name: dialog.name.value().to_string(),
                icon: dialog.icon().to_string(),
                color: dialog.color().to_string(),
            });
        }

        if let KeyCode::Char('c') | KeyCode::Char('C') = key.code {
            self.open_dialog();
            return None;
        }

        match StateManager::key_to_navigation(key) {
            NavigationAction::Up => self.move_by(-(COLUMNS as isize)),
            NavigationAction::Down => self.move_by(COLUMNS as isize),
            NavigationAction::Left => self.move_by(-1),
            NavigationAction::Right => self.move_by(1),
            NavigationAction::Select => {
                return Some(SelectAction::Choose(self.selected_template()))
            }
            NavigationAction::Next => return Some(SelectAction::Continue),
            NavigationAction::Back => return Some(SelectAction::Back),
            _ => {}
        }
        None
    }

    pub fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        palette: &Palette,
        choice: Option<&GoalIdentity>,
    ) {
        let rows = GOAL_TEMPLATES.len().div_ceil(COLUMNS) as u16;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(rows * 2 + 1),
                Constraint::Min(1),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("What are you saving for?")
            .style(palette.title())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(palette.border()),
            );
        f.render_widget(title, chunks[0]);

        self.render_grid(f, chunks[1], palette, choice);

        let status = match choice {
            Some(identity) => Line::from(vec![
                Span::styled("Selected: ", palette.muted()),
                Span::styled(
                    format!("{} {}", icon_glyph(identity.icon()), identity.name()),
                    Style::default()
                        .fg(goal_color(identity.color(), palette))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  (Enter again or Tab to continue)", palette.muted()),
            ]),
            None => Line::from(Span::styled(
                "Pick a template or press C for a custom goal",
                palette.muted(),
            )),
        };
        f.render_widget(
            Paragraph::new(status)
                .style(palette.base())
                .alignment(Alignment::Center),
            chunks[2],
        );

        render_help(
            f,
            chunks[3],
            palette,
            &[
                ("←↑↓→", "Move"),
                ("Enter", "Choose"),
                ("Tab", "Continue"),
                ("C", "Custom"),
                ("Esc", "Back"),
            ],
        );

        if let Some(dialog) = &self.dialog {
            dialog.render(f, area, palette);
        }
    }

    fn render_grid(
        &self,
        f: &mut Frame,
        area: Rect,
        palette: &Palette,
        choice: Option<&GoalIdentity>,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border())
            .style(palette.base())
            .title("Goal Templates");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                GOAL_TEMPLATES
                    .chunks(COLUMNS)
                    .map(|_| Constraint::Length(2))
                    .collect::<Vec<_>>(),
            )
            .split(inner);

        for (row, templates) in GOAL_TEMPLATES.chunks(COLUMNS).enumerate() {
            let Some(row_area) = row_areas.get(row) else {
                break;
            };
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
                .split(*row_area);

            for (col, template) in templates.iter().enumerate() {
                let index = row * COLUMNS + col;
                let chosen = choice.map(|c| c.name() == template.name).unwrap_or(false);
                let marker = if chosen { "✓ " } else { "  " };
                let style = if index == self.selected_index {
                    palette.highlight()
                } else {
                    Style::default()
                        .fg(goal_color(template.color, palette))
                        .bg(palette.background)
                };
                let label = format!("{}{} {}", marker, icon_glyph(template.icon), template.name);
                f.render_widget(Paragraph::new(label).style(style), cells[col]);
            }
        }
    }
}

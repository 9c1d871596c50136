//! Target form screen
//!
//! Amount, duration and target date for the chosen goal, with a live
//! monthly saving preview.

use super::start::render_help;
use crate::{
    app::{
        input::{InputKind, TextField},
        palette::{goal_color, Palette},
    },
    goal::{catalog::icon_glyph, preview_monthly_saving, GoalIdentity, TargetInput},
    util::{format_monthly_plan, DATE_FORMAT},
};
use chrono::{Days, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetAction {
    Submit(TargetInput),
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Amount,
    Months,
    Date,
}

impl Field {
    const ALL: [Field; 3] = [Field::Amount, Field::Months, Field::Date];
}

#[derive(Debug)]
pub struct TargetScreen {
    amount: TextField,
    months: TextField,
    date: TextField,
    focus: Field,
}

impl TargetScreen {
    pub fn new() -> Self {
        Self {
            amount: TextField::new("Target Amount (₹)", InputKind::Amount)
                .with_placeholder("e.g. 50000")
                .with_max_len(20),
            months: TextField::new("Duration (months)", InputKind::Count)
                .with_placeholder("e.g. 10")
                .with_max_len(4),
            date: TextField::new("Target Date (YYYY-MM-DD)", InputKind::Date)
                .with_placeholder("YYYY-MM-DD")
                .with_max_len(10),
            focus: Field::Amount,
        }
    }

    /// Reset the form, keeping any previous target. An empty date starts at today.
    pub fn load(&mut self, prefill: TargetInput, today: NaiveDate) {
        self.amount.set_value(prefill.amount);
        self.months.set_value(prefill.months);
        if prefill.target_date.is_empty() {
            self.date.set_value(today.format(DATE_FORMAT).to_string());
        } else {
            self.date.set_value(prefill.target_date);
        }
        self.focus = Field::Amount;
    }

    pub fn input(&self) -> TargetInput {
        TargetInput::new(self.amount.value(), self.months.value(), self.date.value())
    }

    fn field_mut(&mut self, field: Field) -> &mut TextField {
        match field {
            Field::Amount => &mut self.amount,
            Field::Months => &mut self.months,
            Field::Date => &mut self.date,
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let index = Field::ALL.iter().position(|f| *f == self.focus).unwrap_or(0);
        let len = Field::ALL.len();
        self.focus = if forward {
            Field::ALL[(index + 1) % len]
        } else {
            Field::ALL[(index + len - 1) % len]
        };
    }

    /// Shift the typed date by whole days; unparsable text is left alone
    fn shift_date(&mut self, forward: bool) {
        let Ok(date) = NaiveDate::parse_from_str(self.date.value().trim(), DATE_FORMAT) else {
            return;
        };
        let shifted = if forward {
            date.checked_add_days(Days::new(1))
        } else {
            date.checked_sub_days(Days::new(1))
        };
        if let Some(shifted) = shifted {
            self.date.set_value(shifted.format(DATE_FORMAT).to_string());
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<TargetAction> {
        match key.code {
            KeyCode::Esc => return Some(TargetAction::Back),
            KeyCode::Enter => return Some(TargetAction::Submit(self.input())),
            KeyCode::Tab | KeyCode::Down => self.move_focus(true),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(false),
            KeyCode::Char('+') if self.focus == Field::Date => self.shift_date(true),
            KeyCode::Char('_') if self.focus == Field::Date => self.shift_date(false),
            _ => {
                let focus = self.focus;
                self.field_mut(focus).handle_key(key);
            }
        }
        None
    }

    pub fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        palette: &Palette,
        identity: Option<&GoalIdentity>,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Goal header
                Constraint::Length(3), // Amount
                Constraint::Length(3), // Months
                Constraint::Length(3), // Date
                Constraint::Length(4), // Preview
                Constraint::Min(0),
                Constraint::Length(3), // Help
            ])
            .split(area);

        let header = match identity {
            Some(identity) => Line::from(vec![
                Span::styled("Set Target for ", palette.title()),
                Span::styled(
                    format!("{} {}", icon_glyph(identity.icon()), identity.name()),
                    Style::default()
                        .fg(goal_color(identity.color(), palette))
                        .bg(palette.background)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            None => Line::from(Span::styled("Set Target", palette.title())),
        };
        f.render_widget(
            Paragraph::new(header)
                .style(palette.base())
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(palette.border()),
                ),
            chunks[0],
        );

        self.amount
            .render(f, chunks[1], palette, self.focus == Field::Amount);
        self.months
            .render(f, chunks[2], palette, self.focus == Field::Months);
        self.date
            .render(f, chunks[3], palette, self.focus == Field::Date);

        let plan = preview_monthly_saving(self.amount.value(), self.months.value());
        let preview = Paragraph::new(vec![
            Line::from(Span::styled("Monthly Saving Plan", palette.muted())),
            Line::from(Span::styled(
                format_monthly_plan(plan),
                Style::default()
                    .fg(palette.success)
                    .bg(palette.surface)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .style(Style::default().fg(palette.text).bg(palette.surface))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border()),
        );
        f.render_widget(preview, chunks[4]);

        render_help(
            f,
            chunks[6],
            palette,
            &[
                ("Tab", "Next field"),
                ("+/_", "Date ±1 day"),
                ("Enter", "Create Goal"),
                ("Esc", "Back"),
            ],
        );
    }
}

impl Default for TargetScreen {
    fn default() -> Self {
        Self::new()
    }
}

//! Progress screen implementation
//!
//! Shows the tracked goal with an animated gauge, summary cards and the
//! deposit field.

use super::{centered_rect, start::render_help};
use crate::{
    app::{
        input::{InputKind, TextField},
        palette::{goal_color, Palette},
    },
    goal::{catalog::icon_glyph, Goal, Notice},
    util::{format_currency, format_monthly_plan, format_percent, format_time_left, DATE_FORMAT},
};
use chrono::NaiveDateTime;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressAction {
    Deposit(String),
    Back,
}

/// Everything the progress view draws, sampled by the controller
pub struct ProgressView<'a> {
    pub goal: &'a Goal,
    /// Animated gauge fill
    pub displayed_ratio: f64,
    pub now: NaiveDateTime,
    pub banner: Option<&'a Notice>,
}

#[derive(Debug)]
pub struct ProgressScreen {
    deposit: TextField,
}

impl ProgressScreen {
    pub fn new() -> Self {
        Self {
            deposit: TextField::new("Add Money (₹)", InputKind::Amount)
                .with_placeholder("Enter amount")
                .with_max_len(20),
        }
    }

    pub fn clear_input(&mut self) {
        self.deposit.clear();
    }

    pub fn deposit_input(&self) -> &str {
        self.deposit.value()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ProgressAction> {
        match key.code {
            KeyCode::Esc => Some(ProgressAction::Back),
            KeyCode::Enter => Some(ProgressAction::Deposit(self.deposit.value().to_string())),
            _ => {
                self.deposit.handle_key(key);
                None
            }
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, palette: &Palette, view: &ProgressView) {
        let goal = view.goal;
        let accent = goal_color(goal.identity().color(), palette);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Length(3), // Gauge
                Constraint::Length(4), // Cards
                Constraint::Length(3), // Deposit field
                Constraint::Min(0),
                Constraint::Length(3), // Help
            ])
            .split(area);

        let target = goal.target();
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("{} {}", icon_glyph(goal.identity().icon()), goal.identity().name()),
                Style::default()
                    .fg(accent)
                    .bg(palette.background)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(
                    "Target: {}  |  Started {}  |  {}",
                    format_currency(target.amount()),
                    goal.created_on().format(DATE_FORMAT),
                    format_time_left(goal.time_left(view.now))
                ),
                palette.muted(),
            )),
        ])
        .style(palette.base())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border()),
        );
        f.render_widget(header, chunks[0]);

        let ratio = view.displayed_ratio.clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title("Progress")
                    .borders(Borders::ALL)
                    .border_style(palette.border()),
            )
            .style(palette.base())
            .gauge_style(Style::default().fg(accent).bg(palette.surface))
            .ratio(ratio)
            .label(format_percent(ratio));
        f.render_widget(gauge, chunks[1]);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(chunks[2]);
        render_card(
            f,
            cards[0],
            palette,
            "Saved",
            format!(
                "{} of {}",
                format_currency(goal.current_saving()),
                format_currency(target.amount())
            ),
        );
        render_card(
            f,
            cards[1],
            palette,
            "Monthly Saving",
            format_monthly_plan(goal.monthly_saving_plan()),
        );
        render_card(
            f,
            cards[2],
            palette,
            "Amount Left",
            format_currency(goal.remaining_amount()),
        );

        self.deposit.render(f, chunks[3], palette, true);

        render_help(
            f,
            chunks[5],
            palette,
            &[("Enter", "Add Money"), ("Esc", "Edit target"), ("Ctrl+C", "Quit")],
        );

        if let Some(notice) = view.banner {
            render_banner(f, area, palette, notice);
        }
    }
}

impl Default for ProgressScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn render_card(f: &mut Frame, area: Rect, palette: &Palette, title: &str, value: String) {
    let card = Paragraph::new(vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(palette.subtext).bg(palette.surface),
        )),
        Line::from(Span::styled(
            value,
            Style::default()
                .fg(palette.text)
                .bg(palette.surface)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .style(Style::default().bg(palette.surface))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.muted()),
    );
    f.render_widget(card, area);
}

fn render_banner(f: &mut Frame, area: Rect, palette: &Palette, notice: &Notice) {
    let popup = centered_rect(50, 5, area);
    f.render_widget(Clear, popup);
    let banner = Paragraph::new(Line::from(Span::styled(
        notice.message.as_str(),
        palette.base(),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.success).bg(palette.background))
            .style(palette.base())
            .title(Span::styled(
                format!("✓ {}", notice.title),
                Style::default()
                    .fg(palette.success)
                    .bg(palette.background)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(banner, popup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_deposit_entry() {
        let mut screen = ProgressScreen::new();
        for c in "150".chars() {
            assert_eq!(screen.handle_key(key(KeyCode::Char(c))), None);
        }
        // Letters are filtered out of amounts
        screen.handle_key(key(KeyCode::Char('x')));
        assert_eq!(screen.deposit_input(), "150");
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            Some(ProgressAction::Deposit("150".to_string()))
        );

        screen.clear_input();
        assert_eq!(screen.deposit_input(), "");
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), Some(ProgressAction::Back));
    }
}

//! Main application controller
//!
//! Owns the goal wizard and the theme context, routes keys to the active
//! screen and runs the draw/event/tick loop.

use crate::{
    app::{
        animation::{Banner, ProgressAnimation},
        palette::Palette,
        screens::{
            ProgressAction, ProgressScreen, ProgressView, SelectAction, SelectScreen,
            SettingsScreen, StartAction, StartScreen, TargetAction, TargetScreen,
        },
        state::{AppState, NavigationAction, StateManager},
        tui::{self, Tui, TuiEvent},
    },
    config::{AppConfig, Theme, ThemeContext, ThemeStore},
    error,
    goal::{GoalWizard, StageKind},
    util::format_currency,
    Result, SaveMateError, ValidationError,
};
use chrono::{Local, NaiveDate, NaiveDateTime};
use crossterm::event::KeyEvent;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame, Terminal,
};
use std::time::{Duration, Instant};
use tokio::{sync::mpsc, time::MissedTickBehavior};
use tracing::debug;

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// One-line message under the active screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl Alert {
    fn info(message: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            message: message.into(),
            is_error: false,
        }
    }
}

impl From<&ValidationError> for Alert {
    fn from(err: &ValidationError) -> Self {
        Self {
            title: err.title().to_string(),
            message: err.to_string(),
            is_error: true,
        }
    }
}

impl From<&SaveMateError> for Alert {
    fn from(err: &SaveMateError) -> Self {
        match err {
            SaveMateError::Validation(err) => Self::from(err),
            other => Self {
                title: "Error".to_string(),
                message: error::user_friendly_message(other),
                is_error: true,
            },
        }
    }
}

/// TUI application controller
pub struct App<S: ThemeStore> {
    state_manager: StateManager,
    wizard: GoalWizard,
    theme: ThemeContext<S>,
    tick_rate: Duration,
    clock: fn() -> NaiveDateTime,
    start_screen: StartScreen,
    select_screen: SelectScreen,
    target_screen: TargetScreen,
    progress_screen: ProgressScreen,
    settings_screen: SettingsScreen,
    progress: ProgressAnimation,
    banner: Option<Banner>,
    alert: Option<Alert>,
}

impl<S: ThemeStore> App<S> {
    /// Create an application drawing with the theme held by `theme`
    pub fn new(config: &AppConfig, theme: ThemeContext<S>) -> Self {
        Self {
            state_manager: StateManager::new(),
            wizard: GoalWizard::new(),
            theme,
            tick_rate: config.tick_rate(),
            clock: local_now,
            start_screen: StartScreen::new(),
            select_screen: SelectScreen::new(),
            target_screen: TargetScreen::new(),
            progress_screen: ProgressScreen::new(),
            settings_screen: SettingsScreen::new(),
            progress: ProgressAnimation::new(),
            banner: None,
            alert: None,
        }
    }

    /// Replace the wall clock used for dates and time left
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn state(&self) -> AppState {
        self.state_manager.current_state()
    }

    pub fn should_quit(&self) -> bool {
        self.state_manager.should_quit()
    }

    pub fn wizard(&self) -> &GoalWizard {
        &self.wizard
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn theme_context(&self) -> &ThemeContext<S> {
        &self.theme
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn is_banner_visible(&self, now: Instant) -> bool {
        self.banner.as_ref().is_some_and(|b| b.is_visible(now))
    }

    fn today(&self) -> NaiveDate {
        (self.clock)().date()
    }

    /// Run the main application loop on a real terminal
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let reader = tui::spawn_event_reader(tx);

        let result = self.run_loop(tui.terminal_mut(), &mut rx).await;

        drop(rx);
        if let Err(e) = reader.await {
            debug!(error = %e, "event reader task ended abnormally");
        }
        result
    }

    /// Draw, then wait for the next key or tick, until quit
    pub async fn run_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut mpsc::UnboundedReceiver<TuiEvent>,
    ) -> Result<()> {
        let mut ticker = tokio::time::interval(self.tick_rate);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        while !self.state_manager.should_quit() {
            terminal.draw(|f| self.draw(f))?;

            tokio::select! {
                event = events.recv() => match event {
                    Some(TuiEvent::Key(key)) => self.handle_key(key),
                    // The next draw picks up the new size
                    Some(TuiEvent::Resize) => {}
                    None => {
                        debug!("event channel closed");
                        break;
                    }
                },
                _ = ticker.tick() => self.on_tick(Instant::now()),
            }
        }
        Ok(())
    }

    /// Expire timed UI elements
    pub fn on_tick(&mut self, now: Instant) {
        if self.banner.as_ref().is_some_and(|b| !b.is_visible(now)) {
            debug!("banner dismissed");
            self.banner = None;
        }
    }

    /// Route a key press to the active screen
    pub fn handle_key(&mut self, key: KeyEvent) {
        if StateManager::is_force_quit(&key) {
            self.state_manager.quit();
            return;
        }

        match self.state_manager.current_state() {
            AppState::Start => self.handle_start_key(key),
            AppState::Goal => self.handle_goal_key(key),
            AppState::Settings => self.handle_settings_key(key),
        }
    }

    fn handle_start_key(&mut self, key: KeyEvent) {
        match StateManager::key_to_navigation(key) {
            NavigationAction::Up => self.start_screen.select_previous(),
            NavigationAction::Down => self.start_screen.select_next(),
            NavigationAction::ToggleTheme => self.toggle_theme(),
            NavigationAction::Select => match self.start_screen.selected_action() {
                StartAction::CreateGoal => {
                    self.alert = None;
                    self.state_manager.transition_to(AppState::Goal);
                }
                StartAction::Settings => {
                    self.alert = None;
                    self.state_manager.transition_to(AppState::Settings);
                }
                StartAction::Exit => self.state_manager.quit(),
            },
            action => self.state_manager.handle_navigation(action),
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        match StateManager::key_to_navigation(key) {
            NavigationAction::Select | NavigationAction::ToggleTheme => self.toggle_theme(),
            action => self.state_manager.handle_navigation(action),
        }
    }

    fn toggle_theme(&mut self) {
        match self.theme.toggle() {
            Ok(theme) => self.alert = Some(Alert::info(format!("Switched to {} theme", theme))),
            Err(e) => self.alert = Some(Alert::from(&e)),
        }
    }

    fn handle_goal_key(&mut self, key: KeyEvent) {
        match self.wizard.kind() {
            StageKind::Selecting => self.handle_select_key(key),
            StageKind::Configuring => {
                if let Some(action) = self.target_screen.handle_key(key) {
                    self.handle_target_action(action);
                }
            }
            StageKind::Tracking => {
                if let Some(action) = self.progress_screen.handle_key(key) {
                    self.handle_progress_action(action);
                }
            }
        }
    }

    fn handle_select_key(&mut self, key: KeyEvent) {
        if !self.select_screen.captures_text() {
            match StateManager::key_to_navigation(key) {
                NavigationAction::Quit => return self.state_manager.quit(),
                NavigationAction::ToggleTheme => return self.toggle_theme(),
                _ => {}
            }
        }

        let Some(action) = self.select_screen.handle_key(key) else {
            return;
        };
        let outcome = match action {
            SelectAction::Choose(template) => {
                let already_chosen = self
                    .wizard
                    .identity()
                    .is_some_and(|identity| identity.name() == template.name);
                if already_chosen {
                    self.advance()
                } else {
                    self.wizard.select_template(template)
                }
            }
            SelectAction::Continue => self.advance(),
            SelectAction::Custom { name, icon, color } => self
                .wizard
                .define_custom_goal(&name, &icon, &color)
                .map(|()| {
                    self.select_screen.close_dialog();
                    self.enter_configuring();
                }),
            SelectAction::Back => {
                self.alert = None;
                self.state_manager.go_back();
                Ok(())
            }
        };
        self.show_outcome(outcome);
    }

    fn advance(&mut self) -> std::result::Result<(), ValidationError> {
        self.wizard.advance()?;
        self.enter_configuring();
        Ok(())
    }

    fn enter_configuring(&mut self) {
        let prefill = self.wizard.target_prefill();
        let today = self.today();
        self.target_screen.load(prefill, today);
    }

    fn handle_target_action(&mut self, action: TargetAction) {
        match action {
            TargetAction::Submit(input) => {
                let today = self.today();
                match self.wizard.finalize(&input, today) {
                    Ok(notice) => {
                        let now = Instant::now();
                        self.alert = None;
                        self.banner = Some(Banner::new(notice, now));
                        self.progress.reset();
                        self.progress.retarget(self.wizard.progress_ratio(), now);
                        self.progress_screen.clear_input();
                    }
                    Err(err) => self.alert = Some(Alert::from(&err)),
                }
            }
            TargetAction::Back => {
                self.alert = None;
                self.wizard.back();
                if let Some(identity) = self.wizard.identity() {
                    self.select_screen.focus_template(identity.name());
                }
            }
        }
    }

    fn handle_progress_action(&mut self, action: ProgressAction) {
        match action {
            ProgressAction::Deposit(input) => match self.wizard.deposit(&input) {
                Ok(total) => {
                    self.progress_screen.clear_input();
                    self.progress
                        .retarget(self.wizard.progress_ratio(), Instant::now());
                    self.alert = Some(Alert::info(format!(
                        "Saved {} so far",
                        format_currency(total)
                    )));
                }
                Err(err) => self.alert = Some(Alert::from(&err)),
            },
            ProgressAction::Back => {
                self.alert = None;
                self.banner = None;
                self.wizard.back();
                self.enter_configuring();
            }
        }
    }

    fn show_outcome(&mut self, outcome: std::result::Result<(), ValidationError>) {
        match outcome {
            Ok(()) => self.alert = None,
            Err(err) => self.alert = Some(Alert::from(&err)),
        }
    }

    /// Draw the current screen
    pub fn draw(&mut self, f: &mut Frame) {
        let palette = Palette::for_theme(self.theme.theme());
        let area = f.size();
        f.render_widget(Block::default().style(palette.base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);
        let main = chunks[0];

        match self.state_manager.current_state() {
            AppState::Start => self.start_screen.render(f, main, &palette),
            AppState::Settings => {
                self.settings_screen
                    .render(f, main, &palette, self.theme.theme())
            }
            AppState::Goal => match self.wizard.goal() {
                Some(goal) => {
                    let now = Instant::now();
                    let banner = self
                        .banner
                        .as_ref()
                        .filter(|b| b.is_visible(now))
                        .map(Banner::notice);
                    let view = ProgressView {
                        goal,
                        displayed_ratio: self.progress.value_at(now),
                        now: (self.clock)(),
                        banner,
                    };
                    self.progress_screen.render(f, main, &palette, &view);
                }
                None if self.wizard.kind() == StageKind::Configuring => {
                    self.target_screen
                        .render(f, main, &palette, self.wizard.identity())
                }
                None => self
                    .select_screen
                    .render(f, main, &palette, self.wizard.identity()),
            },
        }

        if let Some(alert) = &self.alert {
            let style = if alert.is_error {
                Style::default()
                    .fg(palette.error)
                    .bg(palette.background)
                    .add_modifier(Modifier::BOLD)
            } else {
                palette.muted()
            };
            let line = if alert.title.is_empty() {
                Line::from(Span::styled(alert.message.as_str(), style))
            } else {
                Line::from(vec![
                    Span::styled(format!("{}: ", alert.title), style),
                    Span::styled(alert.message.as_str(), style),
                ])
            };
            f.render_widget(Paragraph::new(line).style(palette.base()), chunks[1]);
        }
    }
}

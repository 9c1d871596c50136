//! Drives the TUI loop with scripted keys on a test backend

use chrono::{NaiveDate, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use rust_decimal::Decimal;
use savemate::app::{App, AppState, TuiEvent};
use savemate::config::{AppConfig, MemoryThemeStore, Theme, ThemeContext};
use savemate::goal::StageKind;
use tokio::sync::mpsc;

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

fn new_app() -> App<MemoryThemeStore> {
    App::new(
        &AppConfig::default(),
        ThemeContext::init(MemoryThemeStore::new()),
    )
    .with_clock(fixed_now)
}

fn key(code: KeyCode) -> TuiEvent {
    TuiEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn text(s: &str) -> Vec<TuiEvent> {
    s.chars().map(|c| key(KeyCode::Char(c))).collect()
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer.get(x, y).symbol());
        }
        out.push('\n');
    }
    out
}

#[tokio::test]
async fn test_create_goal_and_deposit() {
    let mut app = new_app();
    let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut script = vec![
        key(KeyCode::Enter), // Start your savings journey
        key(KeyCode::Enter), // Choose New Vehicle
        key(KeyCode::Enter), // Continue
    ];
    script.extend(text("50000"));
    script.push(key(KeyCode::Tab));
    script.extend(text("10"));
    script.push(key(KeyCode::Enter));
    script.extend(text("12500"));
    script.push(key(KeyCode::Enter));
    for event in script {
        tx.send(event).unwrap();
    }
    // Closing the channel ends the loop once the script is consumed
    drop(tx);

    app.run_loop(&mut terminal, &mut rx).await.unwrap();

    assert_eq!(app.state(), AppState::Goal);
    let wizard = app.wizard();
    assert_eq!(wizard.kind(), StageKind::Tracking);
    assert_eq!(wizard.monthly_saving_plan(), Decimal::new(5000, 0));
    assert_eq!(
        wizard.goal().unwrap().current_saving(),
        Decimal::new(12500, 0)
    );
    assert!((wizard.progress_ratio() - 0.25).abs() < 1e-9);

    terminal.draw(|f| app.draw(f)).unwrap();
    let screen = buffer_text(&terminal);
    assert!(screen.contains("New Vehicle"));
    assert!(screen.contains("Monthly Saving"));
    assert!(screen.contains("Amount Left"));
    assert!(screen.contains("Target date reached"));
    assert!(screen.contains("Started 2025-01-01"));
}

#[tokio::test]
async fn test_quit_key_stops_loop() {
    let mut app = new_app();
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (tx, mut rx) = mpsc::unbounded_channel();

    tx.send(key(KeyCode::Char('q'))).unwrap();
    app.run_loop(&mut terminal, &mut rx).await.unwrap();

    assert!(app.should_quit());
    // The sender is still alive, so only the quit key ended the loop
    drop(tx);
}

#[tokio::test]
async fn test_theme_toggle_from_start() {
    let mut app = new_app();
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (tx, mut rx) = mpsc::unbounded_channel();

    tx.send(key(KeyCode::Char('t'))).unwrap();
    tx.send(TuiEvent::Resize).unwrap();
    tx.send(TuiEvent::Key(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
    )))
    .unwrap();
    app.run_loop(&mut terminal, &mut rx).await.unwrap();

    assert_eq!(app.theme(), Theme::Dark);
    assert!(app.should_quit());
}

#[test]
fn test_settings_screen_renders_switch() {
    let mut app = new_app();
    app.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    assert_eq!(app.state(), AppState::Settings);

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();
    let screen = buffer_text(&terminal);
    assert!(screen.contains("Dark Mode"));
    assert!(screen.contains("OFF"));
}

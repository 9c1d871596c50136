//! Application state management
//!
//! Handles screen transitions, navigation logic, and keyboard event processing
//! for the TUI application.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Landing screen with Create Goal, Settings, Exit
    #[default]
    Start,
    /// Goal wizard, drawn according to the wizard stage
    Goal,
    /// Settings screen with the dark mode toggle
    Settings,
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Move selection left (arrow left, h)
    Left,
    /// Move selection right (arrow right, l)
    Right,
    /// Confirm selection (Enter, Space)
    Select,
    /// Go back/cancel (Esc, Backspace)
    Back,
    /// Next item (Tab)
    Next,
    /// Previous item (Shift+Tab)
    Previous,
    /// Switch between light and dark (t, T)
    ToggleTheme,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Application state manager
#[derive(Debug)]
pub struct StateManager {
    current_state: AppState,
    previous_state: Option<AppState>,
    should_quit: bool,
}

impl StateManager {
    /// Create a new state manager starting at the landing screen
    pub fn new() -> Self {
        Self {
            current_state: AppState::Start,
            previous_state: None,
            should_quit: false,
        }
    }

    pub fn current_state(&self) -> AppState {
        self.current_state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Transition to a new state
    pub fn transition_to(&mut self, new_state: AppState) {
        if new_state != self.current_state {
            self.previous_state = Some(self.current_state);
            self.current_state = new_state;
        }
    }

    /// Go back to the previous state if available, otherwise go to Start
    pub fn go_back(&mut self) {
        self.current_state = self.previous_state.take().unwrap_or(AppState::Start);
    }

    /// Apply the screen-independent part of a navigation action
    pub fn handle_navigation(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Quit => self.should_quit = true,
            NavigationAction::Back => match self.current_state {
                AppState::Start => self.should_quit = true,
                _ => self.go_back(),
            },
            // Everything else is handled by the individual screens
            _ => {}
        }
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,

            KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
            KeyCode::Left | KeyCode::Char('h') => NavigationAction::Left,
            KeyCode::Right | KeyCode::Char('l') => NavigationAction::Right,

            KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Select,
            KeyCode::Esc | KeyCode::Backspace => NavigationAction::Back,

            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    NavigationAction::Previous
                } else {
                    NavigationAction::Next
                }
            }
            KeyCode::BackTab => NavigationAction::Previous,

            KeyCode::Char('t') | KeyCode::Char('T') => NavigationAction::ToggleTheme,

            _ => NavigationAction::None,
        }
    }

    /// Ctrl+C quits from every screen, including text entry
    pub fn is_force_quit(key: &KeyEvent) -> bool {
        key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_state_manager_creation() {
        let state_manager = StateManager::new();
        assert_eq!(state_manager.current_state(), AppState::Start);
        assert!(!state_manager.should_quit());
    }

    #[test]
    fn test_state_transitions() {
        let mut state_manager = StateManager::new();

        state_manager.transition_to(AppState::Goal);
        assert_eq!(state_manager.current_state(), AppState::Goal);
        state_manager.transition_to(AppState::Settings);
        assert_eq!(state_manager.current_state(), AppState::Settings);

        // Same state is a no-op, so back still returns to Goal
        state_manager.transition_to(AppState::Settings);
        state_manager.go_back();
        assert_eq!(state_manager.current_state(), AppState::Goal);
    }

    #[test]
    fn test_go_back() {
        let mut state_manager = StateManager::new();

        state_manager.transition_to(AppState::Settings);
        state_manager.go_back();
        assert_eq!(state_manager.current_state(), AppState::Start);

        // History is one level deep; going back again lands on Start
        state_manager.go_back();
        assert_eq!(state_manager.current_state(), AppState::Start);
    }

    #[test]
    fn test_quit_handling() {
        let mut state_manager = StateManager::new();
        state_manager.quit();
        assert!(state_manager.should_quit());

        let mut state_manager2 = StateManager::new();
        state_manager2.handle_navigation(NavigationAction::Quit);
        assert!(state_manager2.should_quit());
    }

    #[test]
    fn test_back_navigation() {
        let mut state_manager = StateManager::new();
        state_manager.transition_to(AppState::Settings);
        state_manager.handle_navigation(NavigationAction::Back);
        assert_eq!(state_manager.current_state(), AppState::Start);
        assert!(!state_manager.should_quit());

        // Back from Start quits
        state_manager.handle_navigation(NavigationAction::Back);
        assert!(state_manager.should_quit());
    }

    #[test]
    fn test_key_to_navigation() {
        assert_eq!(
            StateManager::key_to_navigation(key(KeyCode::Char('q'))),
            NavigationAction::Quit
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            NavigationAction::Quit
        );
        assert_eq!(
            StateManager::key_to_navigation(key(KeyCode::Char('k'))),
            NavigationAction::Up
        );
        assert_eq!(
            StateManager::key_to_navigation(key(KeyCode::Down)),
            NavigationAction::Down
        );
        assert_eq!(
            StateManager::key_to_navigation(key(KeyCode::Char('l'))),
            NavigationAction::Right
        );
        assert_eq!(
            StateManager::key_to_navigation(key(KeyCode::Enter)),
            NavigationAction::Select
        );
        assert_eq!(
            StateManager::key_to_navigation(key(KeyCode::Esc)),
            NavigationAction::Back
        );
        assert_eq!(
            StateManager::key_to_navigation(key(KeyCode::Tab)),
            NavigationAction::Next
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT)),
            NavigationAction::Previous
        );
        assert_eq!(
            StateManager::key_to_navigation(key(KeyCode::Char('t'))),
            NavigationAction::ToggleTheme
        );
        assert_eq!(
            StateManager::key_to_navigation(key(KeyCode::Char('x'))),
            NavigationAction::None
        );
    }

    #[test]
    fn test_force_quit() {
        assert!(StateManager::is_force_quit(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!StateManager::is_force_quit(&key(KeyCode::Char('c'))));
    }
}

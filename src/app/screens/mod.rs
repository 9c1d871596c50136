//! TUI screen components
//!
//! Contains individual screen implementations for different application states.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub mod progress;
pub mod select;
pub mod settings;
pub mod start;
pub mod target;

pub use progress::{ProgressAction, ProgressScreen, ProgressView};
pub use select::{CustomGoalDialog, SelectAction, SelectScreen};
pub use settings::SettingsScreen;
pub use start::{StartAction, StartScreen};
pub use target::{TargetAction, TargetScreen};

/// Rect of fixed height centered in `r`, `percent_x` wide
pub(crate) fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

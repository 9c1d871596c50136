//! TUI application module
//!
//! Contains the terminal user interface components, screen management,
//! and application state handling.

pub mod animation;
pub mod app;
pub mod input;
pub mod palette;
pub mod screens;
pub mod state;
pub mod tui;

pub use animation::{Banner, ProgressAnimation};
pub use app::{Alert, App};
pub use palette::Palette;
pub use state::{AppState, NavigationAction, StateManager};
pub use tui::{spawn_event_reader, Tui, TuiEvent};

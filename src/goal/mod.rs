//! Savings goal module
//!
//! Contains the goal template catalog, the goal data model with its
//! progress derivations, and the three-stage goal wizard.

use chrono::NaiveDate;

pub mod catalog;
pub mod model;
pub mod wizard;

// Re-export commonly used types
pub use catalog::{find_template, GoalTemplate, COLOR_PALETTE, CUSTOM_ICONS, GOAL_TEMPLATES};
pub use model::{
    days_remaining, monthly_saving_plan, preview_monthly_saving, Goal, GoalIdentity, GoalTarget,
    TargetInput, TimeLeft,
};
pub use wizard::{GoalWizard, Notice, StageKind, WizardStage};

/// Rejected user input. Never fatal: the action is blocked and the
/// message is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in the {0}")]
    MissingField(&'static str),
    #[error("Please enter a name for your custom goal")]
    EmptyName,
    #[error("The {field} must be a number, got '{input}'")]
    NotNumeric { field: &'static str, input: String },
    #[error("The {0} must be greater than zero")]
    NotPositive(&'static str),
    #[error("The {0} is too large")]
    TooLarge(&'static str),
    #[error("Enter the target date as YYYY-MM-DD, got '{0}'")]
    InvalidDate(String),
    #[error("The target date {target} is before {today}")]
    DateInPast { target: NaiveDate, today: NaiveDate },
    #[error("Cannot {action} while {stage}")]
    NotAvailable {
        action: &'static str,
        stage: &'static str,
    },
}

impl ValidationError {
    /// Alert title shown above the message
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::MissingField(_) | ValidationError::EmptyName => "Missing Info",
            _ => "Invalid",
        }
    }
}

//! Goal wizard state machine
//!
//! Drives the selection → configuration → tracking flow for a single
//! savings goal. Each stage carries only the data valid for it, and every
//! operation either succeeds completely or leaves the wizard untouched.

use super::catalog::GoalTemplate;
use super::model::{Goal, GoalIdentity, GoalTarget, TargetInput, TimeLeft};
use super::ValidationError;
use crate::util::currency::parse_amount;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::{debug, info};

/// Wizard stages and the data each one owns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardStage {
    /// Choosing a template or defining a custom goal
    Selecting { choice: Option<GoalIdentity> },
    /// Entering amount, duration and target date
    Configuring {
        identity: GoalIdentity,
        /// Previous target when coming back from tracking
        prefill: Option<GoalTarget>,
    },
    /// Watching progress and adding deposits
    Tracking { goal: Goal },
}

/// Fieldless view of the stage, for dispatch and display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    Selecting,
    Configuring,
    Tracking,
}

impl StageKind {
    pub fn description(&self) -> &'static str {
        match self {
            StageKind::Selecting => "choosing a goal",
            StageKind::Configuring => "setting the target",
            StageKind::Tracking => "tracking progress",
        }
    }
}

impl WizardStage {
    pub fn kind(&self) -> StageKind {
        match self {
            WizardStage::Selecting { .. } => StageKind::Selecting,
            WizardStage::Configuring { .. } => StageKind::Configuring,
            WizardStage::Tracking { .. } => StageKind::Tracking,
        }
    }
}

/// One-shot notification raised when a goal is created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    fn goal_created(goal: &Goal) -> Self {
        Self {
            title: "Goal Created".to_string(),
            message: format!("Your \"{}\" goal is set. Start saving!", goal.identity().name()),
        }
    }
}

/// Goal wizard owning the single in-memory goal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalWizard {
    stage: WizardStage,
}

impl GoalWizard {
    /// Create a wizard with nothing selected
    pub fn new() -> Self {
        Self {
            stage: WizardStage::Selecting { choice: None },
        }
    }

    pub fn stage(&self) -> &WizardStage {
        &self.stage
    }

    pub fn kind(&self) -> StageKind {
        self.stage.kind()
    }

    fn not_available(&self, action: &'static str) -> ValidationError {
        let err = ValidationError::NotAvailable {
            action,
            stage: self.kind().description(),
        };
        debug!(%err, "wizard action rejected");
        err
    }

    /// Pick a catalog template; stays in `Selecting`
    pub fn select_template(&mut self, template: &GoalTemplate) -> Result<(), ValidationError> {
        if let WizardStage::Selecting { choice } = &mut self.stage {
            debug!(template = template.name, "template selected");
            *choice = Some(GoalIdentity::from(template));
            return Ok(());
        }
        Err(self.not_available("select a template"))
    }

    /// Define a custom goal and move on to `Configuring`
    pub fn define_custom_goal(
        &mut self,
        name: &str,
        icon: &str,
        color: &str,
    ) -> Result<(), ValidationError> {
        if self.kind() != StageKind::Selecting {
            return Err(self.not_available("define a custom goal"));
        }

        let identity = GoalIdentity::new(name, icon, color).map_err(|err| {
            debug!(%err, "custom goal rejected");
            err
        })?;
        debug!(name = identity.name(), "custom goal defined");
        self.stage = WizardStage::Configuring {
            identity,
            prefill: None,
        };
        Ok(())
    }

    /// Move from `Selecting` to `Configuring` with the chosen goal
    pub fn advance(&mut self) -> Result<(), ValidationError> {
        match &self.stage {
            WizardStage::Selecting { choice: Some(identity) } => {
                self.stage = WizardStage::Configuring {
                    identity: identity.clone(),
                    prefill: None,
                };
                Ok(())
            }
            WizardStage::Selecting { choice: None } => Err(ValidationError::MissingField("goal")),
            _ => Err(self.not_available("continue")),
        }
    }

    /// Step back one stage. Returns false when already at the first stage.
    pub fn back(&mut self) -> bool {
        let previous = match &self.stage {
            WizardStage::Selecting { .. } => return false,
            WizardStage::Configuring { identity, .. } => WizardStage::Selecting {
                choice: Some(identity.clone()),
            },
            WizardStage::Tracking { goal } => WizardStage::Configuring {
                identity: goal.identity().clone(),
                prefill: Some(goal.target().clone()),
            },
        };
        debug!(from = ?self.kind(), to = ?previous.kind(), "wizard stepped back");
        self.stage = previous;
        true
    }

    /// Validate the target form and start tracking with nothing saved
    pub fn finalize(
        &mut self,
        input: &TargetInput,
        today: NaiveDate,
    ) -> Result<Notice, ValidationError> {
        let identity = match &self.stage {
            WizardStage::Configuring { identity, .. } => identity.clone(),
            WizardStage::Selecting { choice: None } => {
                return Err(ValidationError::MissingField("goal name"))
            }
            _ => return Err(self.not_available("create the goal")),
        };

        let target = GoalTarget::parse(input, today).map_err(|err| {
            debug!(%err, "goal target rejected");
            err
        })?;

        let goal = Goal::new(identity, target, today);
        let notice = Notice::goal_created(&goal);
        info!(
            name = goal.identity().name(),
            amount = %goal.target().amount(),
            months = goal.target().months(),
            target_date = %goal.target().target_date(),
            "goal created"
        );
        self.stage = WizardStage::Tracking { goal };
        Ok(notice)
    }

    /// Add a typed amount to the tracked goal; returns the new total
    pub fn deposit(&mut self, input: &str) -> Result<Decimal, ValidationError> {
        let WizardStage::Tracking { goal } = &mut self.stage else {
            return Err(self.not_available("add money"));
        };

        let amount = parse_amount("deposit amount", input).map_err(|err| {
            debug!(%err, "deposit rejected");
            err
        })?;
        let total = goal.deposit(amount)?;
        info!(%amount, %total, "deposit added");
        Ok(total)
    }

    /// The identity chosen so far, in any stage
    pub fn identity(&self) -> Option<&GoalIdentity> {
        match &self.stage {
            WizardStage::Selecting { choice } => choice.as_ref(),
            WizardStage::Configuring { identity, .. } => Some(identity),
            WizardStage::Tracking { goal } => Some(goal.identity()),
        }
    }

    /// The tracked goal, once finalized
    pub fn goal(&self) -> Option<&Goal> {
        match &self.stage {
            WizardStage::Tracking { goal } => Some(goal),
            _ => None,
        }
    }

    /// Form text to show when entering `Configuring`
    pub fn target_prefill(&self) -> TargetInput {
        match &self.stage {
            WizardStage::Configuring {
                prefill: Some(target),
                ..
            } => TargetInput::from_target(target),
            _ => TargetInput::default(),
        }
    }

    /// Monthly plan of the tracked goal, zero before finalize
    pub fn monthly_saving_plan(&self) -> Decimal {
        self.goal()
            .map(Goal::monthly_saving_plan)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn days_remaining(&self, now: NaiveDateTime) -> Option<TimeLeft> {
        self.goal().map(|goal| goal.time_left(now))
    }

    /// Clamped progress of the tracked goal, zero before finalize
    pub fn progress_ratio(&self) -> f64 {
        self.goal().map(Goal::progress_ratio).unwrap_or(0.0)
    }

    pub fn remaining_amount(&self) -> Decimal {
        self.goal()
            .map(Goal::remaining_amount)
            .unwrap_or(Decimal::ZERO)
    }
}

impl Default for GoalWizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goal::catalog::{find_template, DEFAULT_CUSTOM_COLOR, DEFAULT_CUSTOM_ICON};
    use std::str::FromStr;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tracking_wizard() -> GoalWizard {
        let mut wizard = GoalWizard::new();
        wizard
            .select_template(find_template("Holiday Trip").unwrap())
            .unwrap();
        wizard.advance().unwrap();
        wizard
            .finalize(&TargetInput::new("1200", "12", "2027-05-01"), today())
            .unwrap();
        wizard
    }

    #[test]
    fn test_wizard_creation() {
        let wizard = GoalWizard::new();
        assert_eq!(wizard.kind(), StageKind::Selecting);
        assert!(wizard.identity().is_none());
        assert!(wizard.goal().is_none());
        assert_eq!(wizard.progress_ratio(), 0.0);
        assert_eq!(wizard.monthly_saving_plan(), Decimal::ZERO);
    }

    #[test]
    fn test_select_template_stays_selecting() {
        let mut wizard = GoalWizard::new();
        wizard
            .select_template(find_template("New Home").unwrap())
            .unwrap();
        assert_eq!(wizard.kind(), StageKind::Selecting);
        assert_eq!(wizard.identity().unwrap().icon(), "home-outline");

        // A second pick replaces the first
        wizard
            .select_template(find_template("Charity").unwrap())
            .unwrap();
        assert_eq!(wizard.identity().unwrap().name(), "Charity");
    }

    #[test]
    fn test_advance_requires_choice() {
        let mut wizard = GoalWizard::new();
        assert_eq!(wizard.advance(), Err(ValidationError::MissingField("goal")));
        assert_eq!(wizard.kind(), StageKind::Selecting);
    }

    #[test]
    fn test_custom_goal_auto_advances() {
        let mut wizard = GoalWizard::new();
        wizard
            .define_custom_goal("Buy a guitar", DEFAULT_CUSTOM_ICON, DEFAULT_CUSTOM_COLOR)
            .unwrap();
        assert_eq!(wizard.kind(), StageKind::Configuring);
        assert_eq!(wizard.identity().unwrap().name(), "Buy a guitar");
    }

    #[test]
    fn test_custom_goal_empty_name_rejected() {
        let mut wizard = GoalWizard::new();
        wizard
            .select_template(find_template("Party").unwrap())
            .unwrap();
        let before = wizard.clone();
        assert_eq!(
            wizard.define_custom_goal("", DEFAULT_CUSTOM_ICON, DEFAULT_CUSTOM_COLOR),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(wizard, before);
    }

    #[test]
    fn test_finalize_failure_leaves_state() {
        let mut wizard = GoalWizard::new();
        wizard
            .select_template(find_template("Education").unwrap())
            .unwrap();
        wizard.advance().unwrap();
        let before = wizard.clone();

        for input in [
            TargetInput::new("", "12", "2026-06-01"),
            TargetInput::new("5000", "", "2026-06-01"),
            TargetInput::new("abc", "12", "2026-06-01"),
            TargetInput::new("-1", "12", "2026-06-01"),
            TargetInput::new("5000", "0", "2026-06-01"),
            TargetInput::new("5000", "12", "2026-04-30"),
        ] {
            assert!(wizard.finalize(&input, today()).is_err(), "{:?}", input);
            assert_eq!(wizard, before);
        }
    }

    #[test]
    fn test_finalize_without_goal_name() {
        let mut wizard = GoalWizard::new();
        assert_eq!(
            wizard.finalize(&TargetInput::new("5000", "12", "2026-06-01"), today()),
            Err(ValidationError::MissingField("goal name"))
        );
    }

    #[test]
    fn test_finalize_raises_notice() {
        let mut wizard = GoalWizard::new();
        wizard
            .select_template(find_template("Holiday Trip").unwrap())
            .unwrap();
        wizard.advance().unwrap();
        let notice = wizard
            .finalize(&TargetInput::new("1200", "12", "2027-05-01"), today())
            .unwrap();
        assert_eq!(notice.title, "Goal Created");
        assert!(notice.message.contains("Holiday Trip"));
        assert_eq!(wizard.kind(), StageKind::Tracking);
        assert_eq!(wizard.goal().unwrap().current_saving(), Decimal::ZERO);
        assert_eq!(wizard.monthly_saving_plan(), dec("100"));
    }

    #[test]
    fn test_deposit_only_while_tracking() {
        let mut wizard = GoalWizard::new();
        assert!(matches!(
            wizard.deposit("100"),
            Err(ValidationError::NotAvailable { .. })
        ));

        let mut wizard = tracking_wizard();
        assert_eq!(wizard.deposit("100").unwrap(), dec("100"));
        assert_eq!(wizard.deposit("50").unwrap(), dec("150"));
        assert!(wizard.deposit("0").is_err());
        assert!(wizard.deposit("lots").is_err());
        assert!(wizard.deposit("").is_err());
        assert_eq!(wizard.goal().unwrap().current_saving(), dec("150"));
    }

    #[test]
    fn test_back_from_tracking_keeps_target_and_refinalize_resets() {
        let mut wizard = tracking_wizard();
        wizard.deposit("600").unwrap();

        assert!(wizard.back());
        assert_eq!(wizard.kind(), StageKind::Configuring);
        let prefill = wizard.target_prefill();
        assert_eq!(prefill, TargetInput::new("1200", "12", "2027-05-01"));

        wizard.finalize(&prefill, today()).unwrap();
        assert_eq!(wizard.goal().unwrap().current_saving(), Decimal::ZERO);
    }

    #[test]
    fn test_back_chain() {
        let mut wizard = tracking_wizard();
        assert!(wizard.back());
        assert!(wizard.back());
        assert_eq!(wizard.kind(), StageKind::Selecting);
        assert_eq!(wizard.identity().unwrap().name(), "Holiday Trip");
        assert!(!wizard.back());
        assert_eq!(wizard.kind(), StageKind::Selecting);
    }

    #[test]
    fn test_select_template_rejected_outside_selecting() {
        let mut wizard = tracking_wizard();
        let before = wizard.clone();
        assert!(matches!(
            wizard.select_template(find_template("Party").unwrap()),
            Err(ValidationError::NotAvailable { .. })
        ));
        assert_eq!(wizard, before);
    }
}

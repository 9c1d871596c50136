//! Goal data model
//!
//! Validated goal identity and target, the live goal record, and the
//! derivations shown on the progress screen.

use super::catalog::GoalTemplate;
use super::ValidationError;
use crate::util::currency::{parse_amount, parse_date, parse_months, DATE_FORMAT};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Name, icon and color of a goal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalIdentity {
    name: String,
    icon: String,
    color: String,
}

impl GoalIdentity {
    /// Build an identity, rejecting blank fields
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        let icon = icon.into().trim().to_string();
        let color = color.into().trim().to_string();

        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if icon.is_empty() {
            return Err(ValidationError::MissingField("icon"));
        }
        if color.is_empty() {
            return Err(ValidationError::MissingField("color"));
        }

        Ok(Self { name, icon, color })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

impl From<&GoalTemplate> for GoalIdentity {
    fn from(template: &GoalTemplate) -> Self {
        Self {
            name: template.name.to_string(),
            icon: template.icon.to_string(),
            color: template.color.to_string(),
        }
    }
}

/// Raw text of the target form, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetInput {
    pub amount: String,
    pub months: String,
    pub target_date: String,
}

impl TargetInput {
    pub fn new(
        amount: impl Into<String>,
        months: impl Into<String>,
        target_date: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            months: months.into(),
            target_date: target_date.into(),
        }
    }

    /// Form text for an existing target, used when going back to edit it
    pub fn from_target(target: &GoalTarget) -> Self {
        Self {
            amount: target.amount.normalize().to_string(),
            months: target.months.to_string(),
            target_date: target.target_date.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Validated savings target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalTarget {
    amount: Decimal,
    months: u32,
    target_date: NaiveDate,
}

impl GoalTarget {
    /// Build a target; `today` is the creation date the deadline is checked against
    pub fn new(
        amount: Decimal,
        months: u32,
        target_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::NotPositive("target amount"));
        }
        if months == 0 {
            return Err(ValidationError::NotPositive("duration in months"));
        }
        if target_date < today {
            return Err(ValidationError::DateInPast {
                target: target_date,
                today,
            });
        }

        Ok(Self {
            amount,
            months,
            target_date,
        })
    }

    /// Parse and validate the target form
    pub fn parse(input: &TargetInput, today: NaiveDate) -> Result<Self, ValidationError> {
        let amount = parse_amount("target amount", &input.amount)?;
        let months = parse_months(&input.months)?;
        let target_date = parse_date(&input.target_date)?;
        Self::new(amount, months, target_date, today)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    pub fn target_date(&self) -> NaiveDate {
        self.target_date
    }

    pub fn monthly_saving_plan(&self) -> Decimal {
        monthly_saving_plan(Some(self.amount), Some(self.months))
    }
}

/// Time left until the target date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLeft {
    /// Whole days remaining, always at least one
    Days(u32),
    /// The target date is today or already past
    Reached,
}

/// The goal being tracked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    identity: GoalIdentity,
    target: GoalTarget,
    current_saving: Decimal,
    created_on: NaiveDate,
}

impl Goal {
    /// Create a goal with nothing saved yet
    pub fn new(identity: GoalIdentity, target: GoalTarget, created_on: NaiveDate) -> Self {
        Self {
            identity,
            target,
            current_saving: Decimal::ZERO,
            created_on,
        }
    }

    pub fn identity(&self) -> &GoalIdentity {
        &self.identity
    }

    pub fn target(&self) -> &GoalTarget {
        &self.target
    }

    pub fn current_saving(&self) -> Decimal {
        self.current_saving
    }

    pub fn created_on(&self) -> NaiveDate {
        self.created_on
    }

    /// Add a positive amount to the savings; there is no upper bound
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, ValidationError> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::NotPositive("deposit amount"));
        }

        let total = self
            .current_saving
            .checked_add(amount)
            .ok_or(ValidationError::TooLarge("deposit amount"))?;
        self.current_saving = total;
        Ok(total)
    }

    /// Saved over target, clamped to [0, 1]
    pub fn progress_ratio(&self) -> f64 {
        let ratio = self
            .current_saving
            .checked_div(self.target.amount)
            .unwrap_or(Decimal::ONE)
            .min(Decimal::ONE);
        ratio.to_f64().unwrap_or(0.0).clamp(0.0, 1.0)
    }

    /// Amount still to save, never below zero
    pub fn remaining_amount(&self) -> Decimal {
        (self.target.amount - self.current_saving).max(Decimal::ZERO)
    }

    pub fn monthly_saving_plan(&self) -> Decimal {
        self.target.monthly_saving_plan()
    }

    pub fn time_left(&self, now: NaiveDateTime) -> TimeLeft {
        days_remaining(self.target.target_date, now)
    }
}

/// Amount divided by months, rounded half away from zero to two decimals
///
/// Returns zero when either value is absent or not positive.
pub fn monthly_saving_plan(amount: Option<Decimal>, months: Option<u32>) -> Decimal {
    match (amount, months) {
        (Some(amount), Some(months)) if amount > Decimal::ZERO && months > 0 => amount
            .checked_div(Decimal::from(months))
            .map(|plan| plan.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
            .unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

/// Live preview of the monthly plan from raw form text
pub fn preview_monthly_saving(amount_input: &str, months_input: &str) -> Decimal {
    monthly_saving_plan(
        parse_amount("target amount", amount_input).ok(),
        parse_months(months_input).ok(),
    )
}

/// Whole days from `now` until the start of `target_date`, rounded up
pub fn days_remaining(target_date: NaiveDate, now: NaiveDateTime) -> TimeLeft {
    let deadline = target_date.and_time(NaiveTime::default());
    let millis = (deadline - now).num_milliseconds();

    if millis <= 0 {
        return TimeLeft::Reached;
    }

    let days = (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;
    TimeLeft::Days(u32::try_from(days).unwrap_or(u32::MAX))
}

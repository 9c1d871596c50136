//! Line-based mode for terminals without full-screen support
//!
//! Walks through the same wizard as the TUI with plain prompts and redraws
//! an indicatif progress bar after every deposit.

use crate::goal::catalog::{icon_glyph, DEFAULT_CUSTOM_COLOR, DEFAULT_CUSTOM_ICON};
use crate::goal::{
    preview_monthly_saving, GoalWizard, StageKind, TargetInput, ValidationError, COLOR_PALETTE,
    CUSTOM_ICONS, GOAL_TEMPLATES,
};
use crate::util::{
    format_currency, format_monthly_plan, format_percent, format_time_left, DATE_FORMAT,
};
use crate::{Result, SaveMateError};
use chrono::{Local, NaiveDateTime};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{BufRead, Write};
use tracing::debug;

/// Where the progress bar draws and which moment counts as now
pub struct SimpleOptions {
    pub draw_target: ProgressDrawTarget,
    pub now: NaiveDateTime,
}

impl Default for SimpleOptions {
    fn default() -> Self {
        Self {
            draw_target: ProgressDrawTarget::stderr(),
            now: Local::now().naive_local(),
        }
    }
}

/// Print `message` and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn is_quit(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("q")
}

fn report<W: Write>(output: &mut W, err: &ValidationError) -> Result<()> {
    writeln!(output, "{}: {}", err.title(), err)?;
    Ok(())
}

/// Pick an entry of `choices` by 1-based number; empty picks `default`
fn pick<'a>(answer: &str, choices: &[&'a str], default: &'a str) -> Option<&'a str> {
    if answer.is_empty() {
        return Some(default);
    }
    let index = answer.parse::<usize>().ok()?;
    choices.get(index.checked_sub(1)?).copied()
}

/// Prompt until `pick` accepts the answer; `None` at end of input
fn prompt_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
    choices: &[&'static str],
    default: &'static str,
) -> Result<Option<&'static str>> {
    loop {
        let Some(answer) = prompt(input, output, message)? else {
            return Ok(None);
        };
        if let Some(choice) = pick(&answer, choices, default) {
            return Ok(Some(choice));
        }
        writeln!(
            output,
            "Invalid: enter a number between 1 and {} or leave empty",
            choices.len()
        )?;
    }
}

fn print_templates<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "What are you saving for?")?;
    for (i, template) in GOAL_TEMPLATES.iter().enumerate() {
        writeln!(output, "{:>3}) {} {}", i + 1, icon_glyph(template.icon), template.name)?;
    }
    writeln!(output, "  c) Create a custom goal")?;
    Ok(())
}

/// Prompt for a custom goal; returns false at end of input
fn define_custom<R: BufRead, W: Write>(
    wizard: &mut GoalWizard,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    let Some(name) = prompt(input, output, "Goal name: ")? else {
        return Ok(false);
    };

    let icons = CUSTOM_ICONS
        .iter()
        .enumerate()
        .map(|(i, icon)| format!("{}) {}", i + 1, icon_glyph(icon)))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(output, "Icons: {}", icons)?;
    let Some(icon) = prompt_choice(
        input,
        output,
        "Icon number [trophy]: ",
        CUSTOM_ICONS,
        DEFAULT_CUSTOM_ICON,
    )?
    else {
        return Ok(false);
    };

    writeln!(output, "Colors: {}", COLOR_PALETTE.join(" "))?;
    let Some(color) = prompt_choice(
        input,
        output,
        "Color number [default]: ",
        COLOR_PALETTE,
        DEFAULT_CUSTOM_COLOR,
    )?
    else {
        return Ok(false);
    };

    if let Err(err) = wizard.define_custom_goal(&name, icon, color) {
        report(output, &err)?;
    }
    Ok(true)
}

/// Loop until a goal is chosen; returns false when the user gives up
fn choose_goal<R: BufRead, W: Write>(
    wizard: &mut GoalWizard,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    print_templates(output)?;
    while wizard.kind() == StageKind::Selecting {
        let Some(answer) = prompt(input, output, "Goal number, 'c' for custom, 'q' to quit: ")?
        else {
            return Ok(false);
        };
        if is_quit(&answer) {
            return Ok(false);
        }

        if answer.eq_ignore_ascii_case("c") {
            if !define_custom(wizard, input, output)? {
                return Ok(false);
            }
            continue;
        }

        let template = answer
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| GOAL_TEMPLATES.get(i));
        let Some(template) = template else {
            writeln!(
                output,
                "Invalid: enter a number between 1 and {} or 'c'",
                GOAL_TEMPLATES.len()
            )?;
            continue;
        };

        let chosen = wizard
            .select_template(template)
            .and_then(|()| wizard.advance());
        if let Err(err) = chosen {
            report(output, &err)?;
        }
    }
    Ok(true)
}

/// Loop until the target form is accepted; returns false at end of input
fn configure_target<R: BufRead, W: Write>(
    wizard: &mut GoalWizard,
    input: &mut R,
    output: &mut W,
    now: NaiveDateTime,
) -> Result<bool> {
    let today = now.date();
    if let Some(identity) = wizard.identity() {
        writeln!(output, "\nSet a target for {}", identity.name())?;
    }

    while wizard.kind() == StageKind::Configuring {
        let Some(amount) = prompt(input, output, "Target amount (₹): ")? else {
            return Ok(false);
        };
        let Some(months) = prompt(input, output, "Duration in months: ")? else {
            return Ok(false);
        };
        writeln!(
            output,
            "Monthly Saving Plan: {}",
            format_monthly_plan(preview_monthly_saving(&amount, &months))
        )?;

        let today_text = today.format(DATE_FORMAT).to_string();
        let question = format!("Target date (YYYY-MM-DD) [{}]: ", today_text);
        let Some(date) = prompt(input, output, &question)? else {
            return Ok(false);
        };
        let date = if date.is_empty() { today_text } else { date };

        match wizard.finalize(&TargetInput::new(amount, months, date), today) {
            Ok(notice) => writeln!(output, "\n✓ {}: {}", notice.title, notice.message)?,
            Err(err) => report(output, &err)?,
        }
    }
    Ok(true)
}

fn print_summary<W: Write>(wizard: &GoalWizard, output: &mut W, now: NaiveDateTime) -> Result<()> {
    let Some(goal) = wizard.goal() else {
        return Ok(());
    };
    writeln!(
        output,
        "{} | Saved {} of {} | Monthly Saving Plan: {} | Amount Left: {} | {}",
        format_percent(goal.progress_ratio()),
        format_currency(goal.current_saving()),
        format_currency(goal.target().amount()),
        format_monthly_plan(goal.monthly_saving_plan()),
        format_currency(goal.remaining_amount()),
        format_time_left(goal.time_left(now)),
    )?;
    Ok(())
}

fn progress_bar(wizard: &GoalWizard, draw_target: ProgressDrawTarget) -> Result<ProgressBar> {
    let bar = ProgressBar::with_draw_target(Some(100), draw_target);
    let style = ProgressStyle::with_template("{bar:40.cyan/blue} {pos:>3}% {msg}")
        .map_err(|e| SaveMateError::Tui(format!("Invalid progress template: {}", e)))?;
    bar.set_style(style);
    update_bar(&bar, wizard);
    Ok(bar)
}

fn update_bar(bar: &ProgressBar, wizard: &GoalWizard) {
    let percent = (wizard.progress_ratio() * 100.0).round() as u64;
    bar.set_position(percent.min(100));
    if let Some(goal) = wizard.goal() {
        bar.set_message(format!("{} saved", format_currency(goal.current_saving())));
    }
}

/// Read deposits until an empty line, `q` or end of input
fn track_deposits<R: BufRead, W: Write>(
    wizard: &mut GoalWizard,
    input: &mut R,
    output: &mut W,
    options: SimpleOptions,
) -> Result<()> {
    let now = options.now;
    print_summary(wizard, output, now)?;
    let bar = progress_bar(wizard, options.draw_target)?;

    loop {
        let Some(answer) = prompt(input, output, "Add money (empty to finish): ")? else {
            break;
        };
        if answer.is_empty() || is_quit(&answer) {
            break;
        }

        match wizard.deposit(&answer) {
            Ok(_) => {
                update_bar(&bar, wizard);
                print_summary(wizard, output, now)?;
            }
            Err(err) => report(output, &err)?,
        }
    }

    bar.finish();
    Ok(())
}

/// Run the whole wizard over `input`/`output` and return its final state
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    options: SimpleOptions,
) -> Result<GoalWizard> {
    let mut wizard = GoalWizard::new();

    if !choose_goal(&mut wizard, input, output)? {
        debug!("simple mode ended while choosing a goal");
        return Ok(wizard);
    }
    if !configure_target(&mut wizard, input, output, options.now)? {
        debug!("simple mode ended while setting the target");
        return Ok(wizard);
    }
    track_deposits(&mut wizard, input, output, options)?;
    Ok(wizard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::io::Cursor;

    fn options() -> SimpleOptions {
        SimpleOptions {
            draw_target: ProgressDrawTarget::hidden(),
            now: NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }

    fn run_script(script: &str) -> (GoalWizard, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let wizard = run(&mut input, &mut output, options()).unwrap();
        (wizard, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_template_goal_with_deposits() {
        let (wizard, output) = run_script("1\n50000\n10\n2025-10-28\n100\n50\n\n");
        let goal = wizard.goal().unwrap();
        assert_eq!(goal.identity().name(), "New Vehicle");
        assert_eq!(goal.current_saving(), Decimal::new(150, 0));
        assert_eq!(wizard.monthly_saving_plan(), Decimal::new(5000, 0));
        assert!(output.contains("Goal Created"));
        assert!(output.contains("₹5,000.00/month"));
        assert!(output.contains("300 days left"));
    }

    #[test]
    fn test_invalid_inputs_reprompt() {
        let script = "99\nx\n2\n-5\n10\n\n1000\n10\n\nabc\n0\n";
        let (wizard, output) = run_script(script);
        assert!(output.contains("Invalid: enter a number between 1 and 18"));
        assert!(output.contains("Invalid:"));
        assert_eq!(wizard.kind(), StageKind::Tracking);
        assert!(wizard.goal().unwrap().current_saving().is_zero());
    }

    #[test]
    fn test_custom_goal_defaults() {
        let (wizard, _) = run_script("c\nGuitar\n\n\n2000\n4\n\n");
        let identity = wizard.identity().unwrap();
        assert_eq!(identity.name(), "Guitar");
        assert_eq!(identity.icon(), DEFAULT_CUSTOM_ICON);
        assert_eq!(identity.color(), DEFAULT_CUSTOM_COLOR);
        assert_eq!(wizard.monthly_saving_plan(), Decimal::new(500, 0));
    }

    #[test]
    fn test_out_of_range_icon_and_color_reprompt() {
        let (wizard, output) = run_script("c\nGuitar\n9\n2\n0\n3\n2000\n4\n\n");
        assert!(output.contains(&format!(
            "Invalid: enter a number between 1 and {} or leave empty",
            CUSTOM_ICONS.len()
        )));
        assert!(output.contains(&format!(
            "Invalid: enter a number between 1 and {} or leave empty",
            COLOR_PALETTE.len()
        )));
        let identity = wizard.identity().unwrap();
        assert_eq!(identity.icon(), CUSTOM_ICONS[1]);
        assert_eq!(identity.color(), COLOR_PALETTE[2]);
        assert_eq!(wizard.kind(), StageKind::Tracking);
    }

    #[test]
    fn test_empty_custom_name_is_rejected() {
        let (wizard, output) = run_script("c\n   \n\n\nq\n");
        assert!(output.contains("Missing Info"));
        assert_eq!(wizard.kind(), StageKind::Selecting);
    }

    #[test]
    fn test_quit_and_end_of_input() {
        let (wizard, _) = run_script("q\n");
        assert_eq!(wizard.kind(), StageKind::Selecting);

        let (wizard, _) = run_script("3\n1200\n");
        assert_eq!(wizard.kind(), StageKind::Configuring);
    }

    #[test]
    fn test_pick() {
        assert_eq!(pick("", CUSTOM_ICONS, "x"), Some("x"));
        assert_eq!(pick("1", CUSTOM_ICONS, "x"), Some("car-outline"));
        assert_eq!(pick("0", CUSTOM_ICONS, "x"), None);
        assert_eq!(pick("9", CUSTOM_ICONS, "x"), None);
    }
}

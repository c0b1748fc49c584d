//! Terminal output for CLI handlers.
//!
//! Every helper honours the global flags: `--json` turns each line into a
//! `{"type", "payload"}` JSON object on stdout, `--quiet` drops everything
//! except warnings and errors, and `-v` adds detail to the run summary.

use std::fmt::Display;

use owo_colors::OwoColorize;
use parking_lot::RwLock;
use serde_json::{json, Value};

use crate::application::report::{Invocation, Trigger};

/// Output settings taken from the global CLI flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// One JSON object per line instead of styled text.
    pub json: bool,
    /// Only warnings and errors.
    pub quiet: bool,
    /// Number of `-v` flags.
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }

    const fn mode(self) -> Mode {
        if self.json {
            Mode::Json
        } else if self.quiet {
            Mode::Quiet
        } else {
            Mode::Text
        }
    }
}

/// How a regular (non-diagnostic) line is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Json,
    Quiet,
    Text,
}

static OUTPUT: RwLock<OutputConfig> =
    parking_lot::const_rwlock(OutputConfig::new(false, false, 0));

fn current() -> OutputConfig {
    *OUTPUT.read()
}

fn emit(kind: &str, payload: Value) {
    println!("{}", json!({ "type": kind, "payload": payload }));
}

/// Install the settings from the global CLI flags. Called once from `main`.
pub fn configure(config: OutputConfig) {
    *OUTPUT.write() = config;
}

/// Whether `--json` is active.
///
/// Handlers that print a single structured result check this and call
/// [`json_output`] instead of the line helpers.
#[must_use]
pub fn is_json() -> bool {
    current().json
}

/// Print a bold section title preceded by a blank line.
pub fn section(title: &str) {
    match current().mode() {
        Mode::Json => emit("section", json!({ "title": title })),
        Mode::Quiet => {}
        Mode::Text => println!("\n{}", title.bold()),
    }
}

/// Print an aligned `label value` pair.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    match current().mode() {
        Mode::Json => emit("field", json!({ "label": label, "value": value })),
        Mode::Quiet => {}
        Mode::Text => println!("  {:<12} {}", label.dimmed(), value),
    }
}

/// Print a line with a green check mark.
pub fn success(message: &str) {
    match current().mode() {
        Mode::Json => emit("success", json!({ "message": message })),
        Mode::Quiet => {}
        Mode::Text => println!("  {} {}", "✓".green(), message),
    }
}

/// Print a completed action, e.g. "✓ Sent Telegram test message".
pub fn action_done(verb: &str, target: &str) {
    match current().mode() {
        Mode::Json => emit(
            "action",
            json!({ "verb": verb, "target": target, "status": "done" }),
        ),
        Mode::Quiet => {}
        Mode::Text => println!("  {} {} {}", "✓".green(), verb.bold().green(), target),
    }
}

/// Print a dimmed informational line.
pub fn note(message: &str) {
    match current().mode() {
        Mode::Json => emit("note", json!({ "message": message })),
        Mode::Quiet => {}
        Mode::Text => println!("  {}", message.dimmed()),
    }
}

/// Print a `hint:` line suggesting a follow-up command.
pub fn hint(message: &str) {
    match current().mode() {
        Mode::Json => emit("hint", json!({ "message": message })),
        Mode::Quiet => {}
        Mode::Text => println!("  {}: {}", "hint".cyan().dimmed(), message.dimmed()),
    }
}

/// Print a warning. Shown even with `--quiet`.
pub fn warning(message: &str) {
    match current().mode() {
        Mode::Json => emit("warning", json!({ "message": message })),
        Mode::Quiet | Mode::Text => println!("  {} {}", "⚠".yellow(), message),
    }
}

/// Print an error to stderr. Shown even with `--quiet`.
pub fn error(message: &str) {
    match current().mode() {
        Mode::Json => eprintln!(
            "{}",
            json!({ "type": "error", "payload": { "message": message } })
        ),
        Mode::Quiet | Mode::Text => eprintln!("  {} {}", "×".red(), message),
    }
}

/// Print a complete JSON document as one line.
pub fn json_output(value: Value) {
    println!("{value}");
}

/// Print the result of one `run` invocation.
///
/// JSON mode emits a single `run` document. Text mode shows the window and
/// totals; `-v` adds the older and out-of-window counts. A dry run prints the
/// chart URL instead of the outcome line.
pub fn run_outcome(invocation: &Invocation, trigger: &Trigger, dry_run: bool) {
    let config = current();
    if config.json {
        json_output(run_document(invocation, trigger, dry_run));
        return;
    }

    let Some(report) = &invocation.report else {
        warning(&invocation.log_line(trigger));
        return;
    };
    if config.quiet {
        return;
    }

    println!(
        "{} {}",
        "taskpulse".bold(),
        env!("CARGO_PKG_VERSION").dimmed()
    );
    field(
        "Window",
        format!("{} .. {}", report.window.start(), report.window.end()),
    );
    field("Created", report.created_total);
    field("Completed", report.completed_total);
    if config.verbose > 0 {
        field("Older", report.older);
        field("Outside", report.outside_window);
    }
    if dry_run {
        warning("Dry-run mode enabled - report was not sent");
        field("Chart", &report.chart_url);
    } else {
        success(&invocation.log_line(trigger));
    }
}

fn run_document(invocation: &Invocation, trigger: &Trigger, dry_run: bool) -> Value {
    let report = invocation.report.as_ref();
    json!({
        "command": "run",
        "cron": trigger.cron,
        "scheduled_at": trigger.scheduled_at.map(|at| at.to_rfc3339()),
        "status": invocation.status.to_string(),
        "dry_run": dry_run,
        "created": report.map(|r| r.created_total),
        "completed": report.map(|r| r.completed_total),
        "chart_url": report.map(|r| r.chart_url.as_str()),
    })
}

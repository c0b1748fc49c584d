//! Handler for the `run` command.

use chrono::Utc;
use tracing::info;

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::{load_config, output};
use crate::application::report::{Invocation, Trigger};
use crate::error::Result;
use crate::infrastructure::bootstrap::build_report_job;
use crate::infrastructure::config::settings::Config;

/// Execute one scheduled invocation.
///
/// A failed upstream read is reported through the outcome line and still
/// returns `Ok`. Only fatal errors are returned.
pub async fn execute(args: &RunArgs) -> Result<Invocation> {
    let mut config = load_config(args.config.as_deref())?;
    apply_overrides(&mut config, args);
    config.init_logging();

    let trigger = trigger_for(&config, args);
    info!(cron = %trigger.cron, dry_run = args.dry_run, "taskpulse starting");

    let job = build_report_job(&config, args.dry_run)?;
    let now = Utc::now();
    let invocation = if args.dry_run {
        job.invoke_dry_run(&trigger, now).await?
    } else {
        job.invoke(&trigger, now).await?
    };

    output::run_outcome(&invocation, &trigger, args.dry_run);
    Ok(invocation)
}

fn apply_overrides(config: &mut Config, args: &RunArgs) {
    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    if args.json_logs || output::is_json() {
        config.logging.format = "json".to_string();
    }
}

fn trigger_for(config: &Config, args: &RunArgs) -> Trigger {
    let mut trigger = Trigger::new(
        args.cron
            .clone()
            .unwrap_or_else(|| config.schedule.cron.clone()),
    );
    trigger.scheduled_at = args.scheduled_at;
    trigger
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn args(cron: Option<&str>) -> RunArgs {
        RunArgs {
            config: None,
            cron: cron.map(str::to_string),
            scheduled_at: None,
            dry_run: false,
            log_level: Some("debug".to_string()),
            json_logs: false,
        }
    }

    #[test]
    fn trigger_defaults_to_configured_schedule() {
        let config = Config::default();
        assert_eq!(trigger_for(&config, &args(None)).cron, "0 9 * * 1");
    }

    #[test]
    fn trigger_prefers_cli_cron() {
        let config = Config::default();
        let mut run_args = args(Some("*/5 * * * *"));
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
        run_args.scheduled_at = Some(at);

        let trigger = trigger_for(&config, &run_args);
        assert_eq!(trigger.cron, "*/5 * * * *");
        assert_eq!(trigger.scheduled_at, Some(at));
    }

    #[test]
    fn log_level_override_is_applied() {
        let mut config = Config::default();
        apply_overrides(&mut config, &args(None));
        assert_eq!(config.logging.level, "debug");
    }
}

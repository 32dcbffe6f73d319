use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::Context;
use pawpal::config::Config;
use pawpal::core::cli::CliArgs;
use pawpal::logging::{LogTarget, Logger};
use pawpal::plan::PlanFile;
use pawpal::scheduler::Scheduler;
use pawpal::ui::display_manager::DisplayManager;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let args = CliArgs::from_env()?;
    let config = match &args.config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::default(),
    };

    let logger = Logger::new();
    logger.set_log_dir(&args.logs_dir);
    logger.set_file_logging_enabled(config.file_logging_enabled());

    let outcome = schedule(&args, &config, &logger);
    if let Err(err) = &outcome {
        logger.error(format!("{err:#}"), LogTarget::FileOnly);
    }
    outcome
}

fn schedule(args: &CliArgs, config: &Config, logger: &Logger) -> anyhow::Result<()> {
    logger.info(
        format!("Loading plan {}", args.plan_path.display()),
        LogTarget::FileOnly,
    );
    let plan = PlanFile::load_from(&args.plan_path)?
        .build()
        .context("Invalid plan")?;

    let scheduler = Scheduler::new(plan.owner, plan.pet, plan.tasks)
        .with_logger(logger.clone())
        .with_detailed_skip_reasons(config.detailed_skip_reasons());
    let result = scheduler.generate_schedule();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let display = DisplayManager::new().with_color(io::stdout().is_terminal());
    if args.show_config {
        display.display_config_centered(config);
        println!();
    }
    display.display_schedule_centered(scheduler.owner(), &result);
    Ok(())
}

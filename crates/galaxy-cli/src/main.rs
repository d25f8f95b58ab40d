//! Math Galaxy CLI.

use clap::{ColorChoice, Parser};
use galaxy_cli::logging::{LogConfig, LogFormat, init_logging};
use galaxy_cli::settings::Settings;
use galaxy_tutor::Tutor;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod play;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{open_store, run_ask, run_progress, run_quiz, run_show};
use crate::play::run_play;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let settings = Settings::load(cli.config.as_deref());
    let data_dir = cli.data_dir.as_deref();
    match cli.command.unwrap_or(Command::Play) {
        Command::Show(args) => run_show(&settings, &args).map(|()| 0),
        Command::Progress => {
            let store = open_store(&settings, data_dir);
            run_progress(&store).map(|()| 0)
        }
        Command::Ask(args) => runtime()?.block_on(run_ask(&settings, &args)).map(|()| 0),
        Command::Quiz(args) => {
            let mut store = open_store(&settings, data_dir);
            let outcome = runtime()?.block_on(run_quiz(&settings, &mut store, &args))?;
            Ok(if outcome.is_some() { 0 } else { 2 })
        }
        Command::Play => {
            let mut store = open_store(&settings, data_dir);
            let table = settings.general.default_table;
            runtime()?.block_on(async {
                let tutor = Tutor::from_settings(&settings.tutor);
                run_play(&mut store, tutor, table).await
            })?;
            Ok(0)
        }
    }
}

fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|error| anyhow::anyhow!("failed to start async runtime: {error}"))
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

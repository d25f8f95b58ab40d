//! CLI argument definitions for Math Galaxy.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use galaxy_model::{Mode, Multiplier, Table};

#[derive(Parser)]
#[command(
    name = "math-galaxy",
    version,
    about = "Math Galaxy - learn the multiplication tables",
    long_about = "Learn the multiplication tables 1 to 10 in the terminal.\n\n\
                  Nine ways to look at each table, a timed quiz that remembers\n\
                  your best score, and an AI tutor when an API key is set."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file (default: the platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding saved progress (overrides the settings file).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Interactive session (the default).
    Play,

    /// Print one mode's view and exit.
    Show(ShowArgs),

    /// Play one timed quiz round.
    Quiz(QuizArgs),

    /// Ask the tutor to explain one fact.
    Ask(AskArgs),

    /// Show the best score for every table.
    Progress,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Mode key, e.g. explore, number_line, patterns.
    #[arg(value_name = "MODE", value_parser = parse_mode)]
    pub mode: Mode,

    /// Table to show (default from settings).
    #[arg(long = "table", short = 't', value_parser = parse_table)]
    pub table: Option<Table>,

    /// Multiplier for modes that have one.
    #[arg(long = "multiplier", short = 'm', value_parser = parse_multiplier)]
    pub multiplier: Option<Multiplier>,
}

#[derive(Args)]
pub struct QuizArgs {
    /// Table to practise (default from settings).
    #[arg(long = "table", short = 't', value_parser = parse_table)]
    pub table: Option<Table>,
}

#[derive(Args)]
pub struct AskArgs {
    #[arg(long = "table", short = 't', value_parser = parse_table)]
    pub table: Table,

    #[arg(long = "multiplier", short = 'm', value_parser = parse_multiplier)]
    pub multiplier: Multiplier,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_mode(value: &str) -> Result<Mode, String> {
    value.parse::<Mode>().map_err(|e| {
        let keys: Vec<&str> = Mode::ALL.iter().map(|m| m.key()).collect();
        format!("{e} (expected one of: {})", keys.join(", "))
    })
}

fn parse_table(value: &str) -> Result<Table, String> {
    value.parse().map_err(|e: galaxy_model::ModelError| e.to_string())
}

fn parse_multiplier(value: &str) -> Result<Multiplier, String> {
    value.parse().map_err(|e: galaxy_model::ModelError| e.to_string())
}

//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rosterkit",
    version,
    about = "Convert an event-registration CSV export into CRM-ready import lists",
    long_about = "Convert an event-registration CSV export into CRM-ready import lists.\n\n\
                  Produces a tag-annotated primary list and a separate plus-one contact\n\
                  list for two-person group tickets, filtered against an existing\n\
                  subscriber base."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a registration export into the two import CSVs.
    Convert(ConvertArgs),

    /// Print the static survey-answer lookup tables.
    Mappings,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Path to the registration export CSV.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Primary output CSV (default: <INPUT stem>_kit.csv next to the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Activity label appended to every tag and companion row.
    ///
    /// When omitted, the label is asked for interactively if stdin is a
    /// terminal, and left empty otherwise.
    #[arg(long = "activity", short = 'a', value_name = "LABEL")]
    pub activity: Option<String>,

    /// Existing-subscriber CSV used to exclude known companion emails.
    #[arg(long = "subscribers", short = 's', value_name = "PATH")]
    pub subscribers: Option<PathBuf>,

    /// Companion output CSV (default: <INPUT stem>_group_new_list.csv).
    #[arg(long = "group-output", short = 'g', value_name = "PATH")]
    pub group_output: Option<PathBuf>,
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn convert_parses_all_flags() {
        let cli = Cli::parse_from([
            "rosterkit",
            "convert",
            "roster.csv",
            "-o",
            "out.csv",
            "-a",
            "講座型(202508數創小聚)",
            "-s",
            "subscribers.csv",
            "-g",
            "group.csv",
        ]);
        let Command::Convert(args) = cli.command else {
            panic!("expected convert subcommand");
        };
        assert_eq!(args.input, PathBuf::from("roster.csv"));
        assert_eq!(args.output.as_deref(), Some(std::path::Path::new("out.csv")));
        assert_eq!(args.activity.as_deref(), Some("講座型(202508數創小聚)"));
        assert_eq!(
            args.group_output.as_deref(),
            Some(std::path::Path::new("group.csv"))
        );
    }
}

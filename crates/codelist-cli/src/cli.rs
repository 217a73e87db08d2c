//! CLI argument definitions for the code list tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "codelist",
    version,
    about = "Inspect, normalize and validate code lists",
    long_about = "Inspect, normalize and validate code lists.\n\n\
                  A code list is a JSON array of items with a value, a label and\n\
                  optional description and help texts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the value type inferred for a code list.
    Infer(FileArgs),

    /// Rewrite a code list with values of a single type.
    Normalize(NormalizeArgs),

    /// Check a code list for duplicate values.
    Validate(ValidateArgs),

    /// List the items of a code list with their texts.
    Show(ShowArgs),
}

#[derive(Args)]
pub struct FileArgs {
    /// Path to the code list JSON file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Flags mapped onto `EditorOptions`.
#[derive(Args)]
pub struct EditorArgs {
    /// Fail on values that do not fit the declared type and never fall back
    /// to another language.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Coerce values to this type instead of inferring it.
    #[arg(long = "type", value_enum, value_name = "TYPE")]
    pub value_type: Option<ValueTypeArg>,

    /// Language shown when a text has no entry for the requested language.
    #[arg(long = "fallback-language", value_name = "LANG")]
    pub fallback_language: Option<String>,

    /// Compare values as written instead of normalizing them first.
    #[arg(long = "no-normalize")]
    pub no_normalize: bool,
}

#[derive(Args)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub input: FileArgs,

    #[command(flatten)]
    pub editor: EditorArgs,

    /// Write the result here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: FileArgs,

    #[command(flatten)]
    pub editor: EditorArgs,

    /// Treat the file as an upload: its name must be a valid code list title.
    #[arg(long = "upload")]
    pub upload: bool,

    /// Print the validation report as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub input: FileArgs,

    #[command(flatten)]
    pub editor: EditorArgs,

    /// Language used to resolve localized texts.
    #[arg(long = "language", short = 'l', default_value = "nb", value_name = "LANG")]
    pub language: String,
}

/// CLI value type choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ValueTypeArg {
    String,
    Number,
    Boolean,
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

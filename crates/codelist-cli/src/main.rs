//! Code list CLI.

use anyhow::Context;
use clap::{ColorChoice, Parser};
use codelist_cli::logging::{LogConfig, LogFormat, init_logging};
use codelist_cli::summary::print_report;
use codelist_model::value_type_label;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{ValidateResult, run_infer, run_normalize, run_show, run_validate};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Infer(args) => match run_infer(&args) {
            Ok(value_type) => {
                println!("{}", value_type_label(value_type));
                0
            }
            Err(error) => report_error(&error),
        },
        Command::Normalize(args) => match run_normalize(&args) {
            Ok(()) => 0,
            Err(error) => report_error(&error),
        },
        Command::Validate(args) => match run_validate(&args) {
            Ok(result) => match print_validation(&result, args.json) {
                Ok(()) if result.report.is_valid() => 0,
                Ok(()) => 1,
                Err(error) => report_error(&error),
            },
            Err(error) => report_error(&error),
        },
        Command::Show(args) => match run_show(&args) {
            Ok(()) => 0,
            Err(error) => report_error(&error),
        },
    };
    std::process::exit(exit_code);
}

fn print_validation(result: &ValidateResult, json: bool) -> anyhow::Result<()> {
    if json {
        let json = serde_json::to_string_pretty(&result.report)
            .context("serialize validation report")?;
        println!("{json}");
    } else {
        print_report(&result.report, &result.list);
    }
    Ok(())
}

fn report_error(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    1
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

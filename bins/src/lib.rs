// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Nenpyo project*
//!
//! Command line plumbing shared by the Nenpyo binaries
//!

use clap::{ValueEnum, builder::PossibleValue};
use nenpyo_core::TimelineInput;
use nenpyo_renderer::RendererConfig;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::path::Path;

/// How much to log
#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl ValueEnum for LogLevel {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Off,
            Self::Error,
            Self::Warn,
            Self::Info,
            Self::Debug,
            Self::Trace,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            LogLevel::Off => Some(PossibleValue::new("off").help("Log nothing")),
            LogLevel::Error => Some(PossibleValue::new("error")),
            LogLevel::Warn => Some(
                PossibleValue::new("warn").help("Also log skipped events and segments"),
            ),
            LogLevel::Info => Some(PossibleValue::new("info")),
            LogLevel::Debug => Some(PossibleValue::new("debug").help("Also log layout summaries")),
            LogLevel::Trace => Some(PossibleValue::new("trace")),
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Setup terminal logging for the Nenpyo crates and the calling binary
pub fn init_logging(level: LogLevel, binary_module: &str, terminal_mode: TerminalMode) {
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("nenpyo")
        .add_filter_allow(binary_module.to_string())
        .build();

    // Only fails if a logger is already set
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level.into(),
        config_log,
        terminal_mode,
        ColorChoice::Auto,
    )]);
}

/// Load the renderer config and the timeline input, or exit with an error
/// message.  Without an input path the sample timeline is used.
pub fn load_or_exit(config: Option<&Path>, input: Option<&Path>) -> (RendererConfig, TimelineInput) {
    let config = match RendererConfig::load_or_default(config) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error loading config: {error}");
            std::process::exit(1);
        }
    };
    let input = match input {
        Some(path) => match TimelineInput::load(path) {
            Ok(input) => input,
            Err(error) => {
                eprintln!("Error: {error}");
                std::process::exit(1);
            }
        },
        None => TimelineInput::sample(),
    };
    (config, input)
}

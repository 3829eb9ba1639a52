// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Nenpyo project*
//!
//! Print a timeline's draw commands as JSON
//!

use clap::{Parser, ValueEnum, builder::PossibleValue};
use nenpyo_bins::{LogLevel, init_logging, load_or_exit};
use nenpyo_renderer::{Engine, LayoutError, LayoutStyle};
use simplelog::TerminalMode;
use std::path::PathBuf;

#[macro_use]
extern crate log;

/// Nenpyo entry point
///
/// Lays out the input (or the sample timeline) and prints the layout to
/// stdout.  Logs go to stderr.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    init_logging(args.log_level, module_path!(), TerminalMode::Stderr);

    let (mut config, input) = load_or_exit(args.config.as_deref(), args.input.as_deref());
    if let Some(style) = args.style {
        config.layout_style = style.into();
    }

    let layout = match Engine::new(config).layout(&input) {
        Ok(layout) => layout,
        Err(error @ LayoutError::InvalidRange { .. }) => {
            eprintln!("Error: {error}");
            eprintln!("{}", error.placeholder_message());
            std::process::exit(1);
        }
    };
    info!(
        "{} commands, {} events skipped, {} segments skipped",
        layout.commands.len(),
        layout.skipped_events,
        layout.skipped_segments
    );

    if let Some(bounds) = layout.content_bounds() {
        let canvas = layout.canvas_size;
        if bounds.position.x < 0.0
            || bounds.position.y < 0.0
            || bounds.max_x() > canvas.x
            || bounds.max_y() > canvas.y
        {
            warn!("Some marks fall outside the {}x{} canvas", canvas.x, canvas.y);
        }
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&layout)?
    } else {
        serde_json::to_string(&layout)?
    };
    println!("{json}");
    Ok(())
}

/// Nenpyo layout CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Print the draw commands for a timeline as JSON",
    after_help = "Without --input the sample timeline is laid out"
)]
pub struct Cli {
    /// Path to a JSON timeline input document
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Path to a JSON renderer config
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the config's layout style
    #[arg(long, value_enum)]
    pub style: Option<Style>,

    /// Pretty print the JSON
    #[arg(long)]
    pub pretty: bool,

    /// How much to log
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone)]
pub enum Style {
    List,
    Banded,
}

impl ValueEnum for Style {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::List, Self::Banded]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Style::List => {
                Some(PossibleValue::new("list").help("Each event on its own row below the axis"))
            }
            Style::Banded => Some(
                PossibleValue::new("banded")
                    .help("Events share the axis, point labels alternate above and below"),
            ),
        }
    }
}

impl From<Style> for LayoutStyle {
    fn from(value: Style) -> Self {
        match value {
            Style::List => LayoutStyle::List,
            Style::Banded => LayoutStyle::Banded,
        }
    }
}

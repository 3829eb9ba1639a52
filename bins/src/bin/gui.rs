// SPDX-License-Identifier: MIT

//!
//! The Nenpyo desktop viewer
//!

use clap::Parser;
use eframe::App;
use eframe::egui::{CentralPanel, Context, ScrollArea, TopBottomPanel, ViewportBuilder};
use nenpyo_bins::{LogLevel, init_logging, load_or_exit};
use nenpyo_core::TimelineInput;
use nenpyo_renderer::NenpyoRendererEgui;
use simplelog::TerminalMode;
use std::path::PathBuf;

#[macro_use]
extern crate log;

/// Nenpyo viewer CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "View a timeline",
    after_help = "Without --input the sample timeline is shown"
)]
pub struct Cli {
    /// Path to a JSON timeline input document
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Path to a JSON renderer config (defaults to the one in the platform
    /// config directory, if any)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// How much to log
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

/// The viewer window: the timeline plus a status line
struct NenpyoViewerApp {
    renderer: NenpyoRendererEgui,

    /// Where the input was loaded from (`None` for the sample timeline)
    input_path: Option<PathBuf>,
}

impl NenpyoViewerApp {
    /// Re-read the input document, keeping the current timeline on failure
    fn reload_input(&mut self) {
        let Some(path) = &self.input_path else {
            return;
        };
        match TimelineInput::load(path) {
            Ok(input) => self.renderer.set_input(input),
            Err(error) => warn!("Couldn't reload input: {error}"),
        }
    }
}

impl App for NenpyoViewerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.input_path.is_some() && ui.button("Reload").clicked() {
                    self.reload_input();
                }
                ui.label(status_line(&self.renderer));
            });
        });

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::both().show(ui, |ui| {
                self.renderer.draw(ui);
            });
        });
    }
}

/// e.g. `2024/1 – 2024/12: 2 events, 1 skipped`
fn status_line(renderer: &NenpyoRendererEgui) -> String {
    let range = renderer.input().range.label();
    match renderer.layout() {
        Ok(layout) => {
            let mut status = format!("{range}: {} events", layout.events.len());
            if layout.skipped_events > 0 {
                status.push_str(&format!(", {} skipped", layout.skipped_events));
            }
            if layout.skipped_segments > 0 {
                status.push_str(&format!(
                    ", {} incomplete segments",
                    layout.skipped_segments
                ));
            }
            status
        }
        Err(error) => error.to_string(),
    }
}

/// Entry point for the native GUI desktop application
fn main() -> Result<(), eframe::Error> {
    let args = Cli::parse();

    init_logging(args.log_level, module_path!(), TerminalMode::Mixed);
    let (config, input) = load_or_exit(args.config.as_deref(), args.input.as_deref());

    let canvas_size = config.layout_params.canvas_size();
    let renderer = NenpyoRendererEgui::new(config, input);

    // Leave room around the canvas for the panel margins and the status line
    let main_viewport_options = ViewportBuilder::default().with_inner_size([
        canvas_size.x as f32 + 32.0,
        canvas_size.y as f32 + 64.0,
    ]);

    let options = eframe::NativeOptions {
        viewport: main_viewport_options,
        ..Default::default()
    };

    info!("Launching application");

    eframe::run_native(
        "Nenpyo",
        options,
        Box::new(|_cc| {
            Ok(Box::new(NenpyoViewerApp {
                renderer,
                input_path: args.input,
            }))
        }),
    )
}

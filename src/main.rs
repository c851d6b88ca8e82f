mod app;
mod color;
mod config;
mod data;
mod error;
mod export;
mod figure;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::DumpViewerApp;
use clap::Parser;
use config::ViewConfig;
use data::loader::dump_path;
use eframe::egui;
use state::AppState;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding `<timestep>.txt` dumps
    #[arg(short, long)]
    dumps: Option<PathBuf>,

    /// Timestep plotted as initial conditions
    #[arg(short, long)]
    initial: Option<u32>,

    /// Timestep plotted in the snapshot panels
    #[arg(short, long)]
    snapshot: Option<u32>,

    #[arg(long, help = "Explicit initial dump file, overrides --dumps/--initial")]
    initial_file: Option<PathBuf>,

    #[arg(long, help = "Explicit snapshot dump file, overrides --dumps/--snapshot")]
    snapshot_file: Option<PathBuf>,

    /// JSON view configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write the figure to this image file
    #[arg(long)]
    save: Option<PathBuf>,

    /// Do not open the viewer window (useful with --save)
    #[arg(long)]
    no_window: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ViewConfig::load(path)?,
        None => ViewConfig::default(),
    };
    if let Some(dir) = args.dumps {
        config.dump_dir = dir;
    }
    if let Some(step) = args.initial {
        config.initial_timestep = step;
    }
    if let Some(step) = args.snapshot {
        config.snapshot_timestep = step;
    }

    let initial_path = args
        .initial_file
        .unwrap_or_else(|| dump_path(&config.dump_dir, config.initial_timestep));
    let snapshot_path = args
        .snapshot_file
        .unwrap_or_else(|| dump_path(&config.dump_dir, config.snapshot_timestep));

    let state = AppState::load(config, initial_path, snapshot_path)?;

    if let Some(path) = &args.save {
        state.export(path)?;
    }
    if args.no_window {
        return Ok(());
    }

    let (w, h) = state.config.figure_size;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([w as f32, h as f32 + 60.0])
            .with_min_inner_size([600.0, 300.0]),
        ..Default::default()
    };

    // Blocks until the window is closed.
    eframe::run_native(
        "SPH Dump Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(DumpViewerApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("running viewer window")
}

//! Sketchpad App Library
//!
//! Headless shell around the sketch session: replays recorded UI events,
//! keeps a canvas in sync through the change notification and writes the
//! export PNG.

pub mod config;
pub mod error;
pub mod script;
pub mod view;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use script::{ScriptCommand, load_script, parse_script};
pub use view::CanvasView;

use clap::Parser;
use sketchpad_core::SketchSession;
use sketchpad_render::{encode_png, export_png};
use std::fmt;
use std::path::{Path, PathBuf};

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "sketchpad", version, about = "Replay a sketch script and export it as PNG")]
pub struct Cli {
    /// JSON array of input commands.
    pub script: PathBuf,

    /// JSON config file.
    #[arg(short, long, env = "SKETCHPAD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Where to write the exported PNG.
    #[arg(short, long, default_value = "sketch.png")]
    pub output: PathBuf,

    /// Side length of the exported image, overriding the config.
    #[arg(long)]
    pub target_size: Option<u32>,

    /// Also save the canvas as last drawn, at canvas size.
    #[arg(long)]
    pub canvas_png: Option<PathBuf>,
}

/// Outcome of a replay.
#[derive(Debug)]
pub struct Replay {
    pub session: SketchSession,
    pub view: CanvasView,
    pub commands: usize,
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub commands: usize,
    pub redraws: usize,
    pub items: usize,
    pub export_bytes: usize,
    pub output: PathBuf,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Replayed {} commands ({} redraws), exported {} items to {} ({} bytes)",
            self.commands,
            self.redraws,
            self.items,
            self.output.display(),
            self.export_bytes
        )
    }
}

/// Feed `script` to a fresh session, refreshing the view after every command.
pub fn replay(config: &AppConfig, script: &[ScriptCommand]) -> AppResult<Replay> {
    let mut session = config.build_session()?;
    let mut view = CanvasView::new(config.canvas_size)?;
    view.attach(&mut session);

    for (index, command) in script.iter().enumerate() {
        command
            .apply(&mut session, config)
            .map_err(|source| AppError::Command { index, source })?;
        view.refresh(&session);
    }

    Ok(Replay {
        session,
        view,
        commands: script.len(),
    })
}

/// Run the CLI: load inputs, replay, export.
pub fn run(cli: &Cli) -> AppResult<RunReport> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(size) = cli.target_size {
        config.export_size = size;
    }

    let export = config.export_config()?;
    let script = load_script(&cli.script)?;
    let replay = replay(&config, &script)?;

    if let Some(path) = &cli.canvas_png {
        let canvas = replay.view.canvas();
        let png_data = encode_png(&canvas.to_rgba8(), canvas.width(), canvas.height())?;
        write_file(path, &png_data)?;
    }

    let list = replay.session.display_list();
    let png_data = export_png(list, &export)?;
    write_file(&cli.output, &png_data)?;

    Ok(RunReport {
        commands: replay.commands,
        redraws: replay.view.redraws(),
        items: list.len(),
        export_bytes: png_data.len(),
        output: cli.output.clone(),
    })
}

fn write_file(path: &Path, data: &[u8]) -> AppResult<()> {
    std::fs::write(path, data).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })
}

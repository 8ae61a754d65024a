//! Command-line argument parsing for the Mars globe viewer.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Mars globe command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "mars-globe", about = "Procedural Mars globe viewer")]
pub struct CliArgs {
    /// Viewport width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Viewport height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Surface texture seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Surface texture width in pixels.
    #[arg(long)]
    pub texture_width: Option<u32>,

    /// Surface texture height in pixels.
    #[arg(long)]
    pub texture_height: Option<u32>,

    /// Number of craters to stamp.
    #[arg(long)]
    pub craters: Option<u32>,

    /// Satellite time compression (0 freezes the orbits).
    #[arg(long)]
    pub time_scale: Option<f64>,

    /// Write the generated textures as PNG files into this directory.
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Number of frames the headless session runs.
    #[arg(long, default_value_t = 600)]
    pub frames: u32,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(seed) = args.seed {
            self.surface.seed = seed;
        }
        if let Some(w) = args.texture_width {
            self.surface.width = w;
        }
        if let Some(h) = args.texture_height {
            self.surface.height = h;
        }
        if let Some(count) = args.craters {
            self.surface.crater_count = count;
        }
        if let Some(scale) = args.time_scale {
            self.orbit.time_scale = scale;
        }
        if let Some(ref dir) = args.export_dir {
            self.debug.export_dir = Some(dir.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

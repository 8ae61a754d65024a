//! `mars-globe`: generates the Mars surface and runs a scripted headless
//! session against the scene.

use std::process::ExitCode;

use clap::Parser;
use glam::Vec2;
use mars_app::{AppError, PlatformDirs, Session, SessionReport, default_script};
use mars_config::{CliArgs, Config};
use mars_scene::SceneContext;
use mars_surface::{SurfaceParams, SurfaceWorker, generate_with_params};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let (dirs, config) = match load(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to initialize mars-globe: {e}");
            return ExitCode::FAILURE;
        }
    };
    mars_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));
    tracing::info!(config_dir = %dirs.config_dir.display(), "Mars globe starting");

    match run(&config, args.frames) {
        Ok(report) => {
            log_report(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                source = ?std::error::Error::source(&e),
                "Mars globe failed"
            );
            ExitCode::FAILURE
        }
    }
}

fn load(args: &CliArgs) -> Result<(PlatformDirs, Config), AppError> {
    let dirs = PlatformDirs::resolve(args.config.as_deref())?;
    dirs.create_dirs()?;
    let mut config = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(args);
    Ok((dirs, config))
}

fn run(config: &Config, frames: u32) -> Result<SessionReport, AppError> {
    let mut scene = SceneContext::new(config);
    let surface = &config.surface;
    let params = SurfaceParams::from(surface);

    let worker = if surface.background {
        Some(SurfaceWorker::spawn(surface.seed, surface.width, surface.height, params)?)
    } else {
        let maps = generate_with_params(surface.seed, surface.width, surface.height, &params)?;
        scene.attach_surface(maps)?;
        None
    };

    let viewport = Vec2::new(config.window.width as f32, config.window.height as f32);
    let mut session = Session::new(scene, worker, default_script(frames, viewport))
        .with_export_dir(config.debug.export_dir.clone());
    session.run(frames)
}

fn log_report(report: &SessionReport) {
    tracing::info!(
        frames = report.frames_run,
        waiting = report.waiting_frames,
        radius = report.camera.radius,
        polar = report.camera.polar,
        azimuth = report.camera.azimuth,
        selection = report.selection.unwrap_or("none"),
        clicks = report.clicks.len(),
        "Final camera"
    );
    for sat in &report.satellites {
        tracing::info!(
            id = sat.id,
            x = sat.position.x,
            y = sat.position.y,
            z = sat.position.z,
            "Satellite"
        );
    }
}

//! beam - render the built-in scene to a BMP file.

mod bmp;
mod config;
mod scenes;

use std::time::Instant;

use anyhow::Result;
use beam_math::Vec3;
use beam_renderer::{render, Camera, Framebuffer};
use clap::Parser;

use crate::config::Cli;

/// Eye position for the demo scene, looking at the origin.
const CAMERA_POSITION: Vec3 = Vec3::new(0.0, -10.0, 1.0);

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let settings = cli.settings()?;

    log::info!(
        "rendering the demo scene at {}x{} (seed {}) -> {}",
        cli.width,
        cli.height,
        settings.seed,
        cli.output.display()
    );

    let start = Instant::now();
    let scene = scenes::demo();
    let camera = Camera::new(CAMERA_POSITION, Vec3::ZERO, cli.width, cli.height);
    let fb = Framebuffer::new(cli.width, cli.height);
    let setup_time = start.elapsed();

    let render_start = Instant::now();
    let stats = render(&scene, &camera, &fb, &settings);
    let render_time = render_start.elapsed();

    // The render result is already in memory; a write failure is worth
    // reporting but not worth dying over.
    let write_start = Instant::now();
    match bmp::write(&fb, &cli.output) {
        Ok(()) => log::info!("wrote {}", cli.output.display()),
        Err(error) => log::error!("unable to write {}: {}", cli.output.display(), error),
    }
    let write_time = write_start.elapsed();

    log::info!(
        "setup {:.1} ms, render {:.1} ms, write {:.1} ms",
        setup_time.as_secs_f64() * 1000.0,
        render_time.as_secs_f64() * 1000.0,
        write_time.as_secs_f64() * 1000.0
    );
    log::info!(
        "{} tiles, {} bounces, {:.3} ms per megabounce",
        stats.tiles,
        stats.bounces,
        render_time.as_secs_f64() * 1000.0 / (stats.bounces as f64 / 1.0e6)
    );

    Ok(())
}

//! Command-line configuration.

use std::path::PathBuf;

use beam_renderer::RenderSettings;
use clap::Parser;
use thiserror::Error;

/// Configurations the renderer cannot do anything useful with.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("image needs at least one pixel, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },
    #[error("rays per pixel must be nonzero")]
    NoRays,
    #[error("bounce depth must be nonzero")]
    NoBounces,
}

/// Render a built-in scene to a BMP file.
#[derive(Debug, Parser)]
#[command(name = "beam", version, about = "Multithreaded CPU path tracer")]
pub struct Cli {
    /// Output image width in pixels
    #[arg(long, default_value_t = 1270)]
    pub width: u32,

    /// Output image height in pixels
    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Jittered samples averaged per pixel
    #[arg(long, default_value_t = 32)]
    pub rays_per_pixel: u32,

    /// Maximum path length per sample
    #[arg(long, default_value_t = 32)]
    pub max_bounces: u32,

    /// Worker threads (0 = one per detected core)
    #[arg(long, default_value_t = 0)]
    pub threads: usize,

    /// Tile edge in pixels (0 = derived from width and thread count)
    #[arg(long, default_value_t = 64)]
    pub tile_size: u32,

    /// Base seed for the per-tile generators
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Output BMP path
    #[arg(short, long, default_value = "beauty.bmp")]
    pub output: PathBuf,
}

impl Cli {
    /// Validate and convert to engine settings.
    pub fn settings(&self) -> Result<RenderSettings, ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        if self.rays_per_pixel == 0 {
            return Err(ConfigError::NoRays);
        }
        if self.max_bounces == 0 {
            return Err(ConfigError::NoBounces);
        }

        Ok(RenderSettings {
            rays_per_pixel: self.rays_per_pixel,
            max_bounces: self.max_bounces,
            threads: self.threads,
            tile_size: self.tile_size,
            seed: self.seed,
        })
    }
}

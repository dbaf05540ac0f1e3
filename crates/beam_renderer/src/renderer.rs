//! Parallel tile renderer.
//!
//! Cuts the image into tiles, queues one work order per tile, and runs
//! symmetric claim loops: every worker, the calling thread included,
//! claims orders until the queue is exhausted. The output is identical
//! for any worker count because each pixel belongs to exactly one order
//! and each order carries its own generator.

use std::thread;

use beam_math::Vec3;
use log::{debug, info};

use crate::camera::Camera;
use crate::color::{pack_bgra, tonemap};
use crate::framebuffer::Framebuffer;
use crate::queue::{WorkOrder, WorkQueue};
use crate::scene::Scene;
use crate::tile::tile_grid;
use crate::tracer::trace;

/// Knobs for one render call.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    /// Jittered samples averaged per pixel.
    pub rays_per_pixel: u32,
    /// Bounce depth cap per sample.
    pub max_bounces: u32,
    /// Worker threads; 0 means one per detected core.
    pub threads: usize,
    /// Square tile edge in pixels; 0 derives a size from the image
    /// width and the worker count.
    pub tile_size: u32,
    /// Base seed for the per-tile generators.
    pub seed: u64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            rays_per_pixel: 32,
            max_bounces: 32,
            threads: 0,
            tile_size: 64,
            seed: 42,
        }
    }
}

impl RenderSettings {
    /// Number of claim loops to run.
    pub fn worker_count(&self) -> usize {
        if self.threads > 0 {
            self.threads
        } else {
            thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
        }
    }

    /// Tile edge used to cut the image.
    pub fn effective_tile_size(&self, image_width: u32) -> u32 {
        if self.tile_size > 0 {
            self.tile_size
        } else {
            (image_width / self.worker_count() as u32).max(1)
        }
    }
}

/// Totals reported by a finished render.
#[derive(Debug, Clone, Copy)]
pub struct RenderStats {
    /// Tiles rendered and retired.
    pub tiles: u64,
    /// Bounce iterations summed over every sample.
    pub bounces: u64,
}

/// Render the scene through the camera into the framebuffer.
///
/// Blocks until every tile is retired. The camera and framebuffer must
/// agree on the image size; that mismatch is a wiring bug, so it
/// panics rather than erroring.
pub fn render(
    scene: &Scene,
    camera: &Camera,
    fb: &Framebuffer,
    settings: &RenderSettings,
) -> RenderStats {
    assert_eq!(
        (camera.image_width(), camera.image_height()),
        (fb.width(), fb.height()),
        "camera and framebuffer disagree on the image size"
    );
    assert!(settings.rays_per_pixel > 0, "rays_per_pixel must be nonzero");

    let tile_size = settings.effective_tile_size(fb.width());
    let tiles = tile_grid(fb.width(), fb.height(), tile_size);
    let queue = WorkQueue::new(tiles, settings.seed);
    let workers = settings.worker_count();

    info!(
        "rendering {}x{}: {} workers, {} tiles at {}px, {} rays/pixel, depth {}",
        fb.width(),
        fb.height(),
        workers,
        queue.len(),
        tile_size,
        settings.rays_per_pixel,
        settings.max_bounces
    );

    thread::scope(|scope| {
        for _ in 1..workers {
            scope.spawn(|| work(scene, camera, fb, settings, &queue));
        }
        work(scene, camera, fb, settings, &queue);
    });

    RenderStats {
        tiles: queue.tiles_retired(),
        bounces: queue.bounces_computed(),
    }
}

/// Claim loop run by every worker, the calling thread included.
fn work(
    scene: &Scene,
    camera: &Camera,
    fb: &Framebuffer,
    settings: &RenderSettings,
    queue: &WorkQueue,
) {
    while let Some(order) = queue.claim() {
        render_tile(scene, camera, fb, settings, order, queue);
    }
}

/// Render every pixel of one order's tile, then retire it.
fn render_tile(
    scene: &Scene,
    camera: &Camera,
    fb: &Framebuffer,
    settings: &RenderSettings,
    order: &WorkOrder,
    queue: &WorkQueue,
) {
    let mut rng = order.rng.clone();
    let tile = order.tile;
    let contribution = 1.0 / settings.rays_per_pixel as f32;

    for y in tile.min_y..tile.max_y {
        for x in tile.min_x..tile.max_x {
            let mut color = Vec3::ZERO;
            for _ in 0..settings.rays_per_pixel {
                let ray = camera.ray_through(x, y, &mut rng);
                let (sample, bounces) = trace(scene, &ray, &mut rng, settings.max_bounces);
                color += sample * contribution;
                queue.add_bounces(bounces);
            }
            fb.store(x, y, pack_bgra(tonemap(color), 1.0));
        }
    }

    let retired = queue.retire_tile();
    debug!("tile {}/{} retired", retired, queue.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Material, Plane, Sphere};

    /// Emissive sphere over a matte floor under a black sky. At depth 1
    /// every pixel color is exact: sphere pixels show the emission,
    /// everything else is black.
    fn emitter_scene() -> Scene {
        Scene::new(
            vec![
                Material::emitter(Vec3::ZERO),
                Material::emitter(Vec3::new(0.0, 1.0, 0.0)),
                Material::diffuse(Vec3::new(0.5, 0.5, 0.5)),
            ],
            vec![Plane {
                normal: Vec3::Z,
                offset: 4.0,
                material: 2,
            }],
            vec![Sphere {
                center: Vec3::ZERO,
                radius: 2.0,
                material: 1,
            }],
        )
    }

    fn test_camera(width: u32, height: u32) -> Camera {
        Camera::new(Vec3::new(0.0, -10.0, 0.0), Vec3::ZERO, width, height)
    }

    #[test]
    fn test_worker_count() {
        let pinned = RenderSettings {
            threads: 3,
            ..Default::default()
        };
        assert_eq!(pinned.worker_count(), 3);

        let detected = RenderSettings {
            threads: 0,
            ..Default::default()
        };
        assert!(detected.worker_count() >= 1);
    }

    #[test]
    fn test_effective_tile_size() {
        assert_eq!(RenderSettings::default().effective_tile_size(1270), 64);

        let derived = RenderSettings {
            tile_size: 0,
            threads: 4,
            ..Default::default()
        };
        assert_eq!(derived.effective_tile_size(1270), 317);

        let overloaded = RenderSettings {
            tile_size: 0,
            threads: 4000,
            ..Default::default()
        };
        assert_eq!(overloaded.effective_tile_size(1270), 1);
    }

    #[test]
    fn test_empty_scene_renders_background() {
        let sky = Vec3::new(0.2, 0.3, 0.4);
        let scene = Scene::new(vec![Material::emitter(sky)], Vec::new(), Vec::new());
        let camera = test_camera(4, 4);
        let fb = Framebuffer::new(4, 4);
        let settings = RenderSettings {
            rays_per_pixel: 2,
            max_bounces: 3,
            threads: 1,
            tile_size: 2,
            seed: 42,
        };

        let stats = render(&scene, &camera, &fb, &settings);

        // Two identical samples average back to the sample value exactly.
        let expected = pack_bgra(tonemap(sky), 1.0);
        assert!(fb.words().iter().all(|&word| word == expected));
        assert_eq!(stats.tiles, 4);
        // 16 pixels, 2 rays each, 1 bounce (straight to the background).
        assert_eq!(stats.bounces, 32);
    }

    #[test]
    fn test_all_black_scene_renders_black() {
        // Zero emit and zero reflect everywhere: rays that hit objects
        // accumulate nothing, rays that escape pick up a black sky, and
        // every pixel comes out exactly the background color.
        let black = Material::emitter(Vec3::ZERO);
        let scene = Scene::new(
            vec![black, black],
            vec![Plane {
                normal: Vec3::Z,
                offset: 4.0,
                material: 1,
            }],
            vec![Sphere {
                center: Vec3::ZERO,
                radius: 1.0,
                material: 1,
            }],
        );
        let camera = test_camera(8, 8);
        let fb = Framebuffer::new(8, 8);
        let settings = RenderSettings {
            rays_per_pixel: 2,
            max_bounces: 4,
            threads: 2,
            tile_size: 4,
            seed: 42,
        };

        render(&scene, &camera, &fb, &settings);

        let expected = pack_bgra(tonemap(Vec3::ZERO), 1.0);
        assert!(fb.words().iter().all(|&word| word == expected));
    }

    #[test]
    fn test_render_is_deterministic_across_thread_counts() {
        let scene = emitter_scene();
        let camera = test_camera(32, 24);
        let settings = RenderSettings {
            rays_per_pixel: 4,
            max_bounces: 4,
            threads: 1,
            tile_size: 8,
            seed: 7,
        };

        let single = Framebuffer::new(32, 24);
        render(&scene, &camera, &single, &settings);

        let mut parallel_settings = settings.clone();
        parallel_settings.threads = 4;
        let parallel = Framebuffer::new(32, 24);
        render(&scene, &camera, &parallel, &parallel_settings);

        assert_eq!(single.words(), parallel.words());
    }

    #[test]
    fn test_seed_changes_the_image() {
        let scene = emitter_scene();
        let camera = test_camera(32, 24);
        let settings = RenderSettings {
            rays_per_pixel: 4,
            max_bounces: 4,
            threads: 2,
            tile_size: 8,
            seed: 7,
        };

        let first = Framebuffer::new(32, 24);
        render(&scene, &camera, &first, &settings);

        let mut reseeded_settings = settings.clone();
        reseeded_settings.seed = 8;
        let reseeded = Framebuffer::new(32, 24);
        render(&scene, &camera, &reseeded, &reseeded_settings);

        // The matte floor bounces diffusely, so some pixel somewhere
        // lands differently under a different jitter stream.
        assert_ne!(first.words(), reseeded.words());
    }

    #[test]
    fn test_silhouette_against_unlit_floor() {
        // 16x16, one ray per pixel, depth 1: the emitter's silhouette is
        // exactly its emission, floor and sky pixels are exactly black,
        // and every alpha is 255.
        let scene = emitter_scene();
        let camera = test_camera(16, 16);
        let fb = Framebuffer::new(16, 16);
        let settings = RenderSettings {
            rays_per_pixel: 1,
            max_bounces: 1,
            threads: 1,
            tile_size: 16,
            seed: 42,
        };

        render(&scene, &camera, &fb, &settings);

        let green = pack_bgra(tonemap(Vec3::new(0.0, 1.0, 0.0)), 1.0);
        let black = pack_bgra(tonemap(Vec3::ZERO), 1.0);
        assert_eq!(fb.load(8, 8), green); // center: straight into the sphere
        assert_eq!(fb.load(0, 8), black); // left edge: past the silhouette
        assert_ne!(green, black);

        assert!(fb.words().iter().all(|&word| word >> 24 == 0xFF));
    }

    #[test]
    #[should_panic(expected = "disagree on the image size")]
    fn test_render_rejects_mismatched_framebuffer() {
        let scene = Scene::new(vec![Material::emitter(Vec3::ZERO)], Vec::new(), Vec::new());
        let camera = test_camera(8, 8);
        let fb = Framebuffer::new(16, 16);

        render(&scene, &camera, &fb, &RenderSettings::default());
    }
}

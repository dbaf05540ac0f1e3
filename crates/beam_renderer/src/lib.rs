//! beam renderer - multithreaded CPU path tracing
//!
//! Stochastic path tracer over spheres and planes. The image is cut
//! into tiles, one work order per tile, and symmetric worker loops
//! claim orders from a lock-free queue until it runs dry. Each order
//! carries its own deterministic generator, so renders reproduce
//! bit for bit at any thread count.

mod scene;
mod intersect;
mod tracer;
mod camera;
mod tile;
mod queue;
mod framebuffer;
mod color;
mod renderer;

pub use scene::{Material, Plane, Scene, Sphere};
pub use intersect::{plane_distance, sphere_distance, NO_HIT};
pub use tracer::{trace, MIN_HIT_DISTANCE};
pub use camera::Camera;
pub use tile::{tile_grid, Tile};
pub use queue::{WorkOrder, WorkQueue};
pub use framebuffer::Framebuffer;
pub use color::{linear_to_srgb, pack_bgra, tonemap};
pub use renderer::{render, RenderSettings, RenderStats};

/// Re-export the math types the renderer's API takes and returns.
pub use beam_math::{Ray, Vec3, Xorshift32};

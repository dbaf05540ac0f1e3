// Re-export glam so Vec2/Vec3 and their operators are available everywhere
pub use glam::*;

// beam math types
mod ray;
mod rng;
mod vec;

pub use ray::Ray;
pub use rng::Xorshift32;
pub use vec::{safe_normalize, safe_normalize2, NORMALIZE_EPSILON};

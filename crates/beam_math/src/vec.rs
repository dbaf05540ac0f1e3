//! Epsilon-guarded vector operations.
//!
//! The tracer normalizes vectors that can legitimately degenerate to near
//! zero length (a diffuse bounce whose jitter cancels the normal, a camera
//! aimed at its own position). These helpers return a documented fallback
//! for that case instead of dividing by a near-zero length.

use glam::{Vec2, Vec3};

/// Lengths below this are treated as degenerate.
pub const NORMALIZE_EPSILON: f32 = 1e-4;

/// Normalize `v`, returning `Vec3::ZERO` for a degenerate input.
#[inline]
pub fn safe_normalize(v: Vec3) -> Vec3 {
    let len = v.length();
    if len < NORMALIZE_EPSILON {
        Vec3::ZERO
    } else {
        v / len
    }
}

/// Normalize `v`, returning the input unchanged for a degenerate input.
#[inline]
pub fn safe_normalize2(v: Vec2) -> Vec2 {
    let len = v.length();
    if len < NORMALIZE_EPSILON {
        v
    } else {
        v / len
    }
}

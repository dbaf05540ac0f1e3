//! Closed-form ray/primitive distance tests.
//!
//! Both tests return a distance along the ray, or [`NO_HIT`] for a miss.
//! Distances can be non-positive; the caller decides what counts as "in
//! front". Each guard has its own epsilon because they protect unrelated
//! quantities.

use beam_math::Vec3;

/// Sentinel distance meaning "no intersection".
pub const NO_HIT: f32 = f32::MAX;

/// Plane denominators this close to zero mean the ray runs parallel to
/// the plane.
pub const PARALLEL_EPSILON: f32 = 1e-5;

/// Sphere discriminants at or below this are treated as a grazing miss.
pub const DISCRIMINANT_EPSILON: f32 = 1e-5;

/// Sphere roots below this are self-intersections at the ray origin.
pub const ROOT_EPSILON: f32 = 1e-5;

/// Distance at which a ray crosses the plane `dot(normal, p) + offset = 0`.
pub fn plane_distance(origin: Vec3, direction: Vec3, normal: Vec3, offset: f32) -> f32 {
    let denom = normal.dot(direction);
    if denom.abs() <= PARALLEL_EPSILON {
        return NO_HIT;
    }

    (-offset - normal.dot(origin)) / denom
}

/// Distance at which a ray enters (or, from inside, exits) a sphere at
/// the coordinate origin.
///
/// `rel_origin` is the ray origin already translated into sphere-local
/// coordinates (`ray_origin - center`).
pub fn sphere_distance(rel_origin: Vec3, direction: Vec3, radius: f32) -> f32 {
    let a = direction.dot(direction);
    let b = 2.0 * direction.dot(rel_origin);
    let c = rel_origin.dot(rel_origin) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant <= DISCRIMINANT_EPSILON {
        return NO_HIT;
    }

    let root = discriminant.sqrt();
    let denom = 2.0 * a;

    let mut t0 = (-b + root) / denom;
    let mut t1 = (-b - root) / denom;
    if t0 < ROOT_EPSILON {
        t0 = NO_HIT;
    }
    if t1 < ROOT_EPSILON {
        t1 = NO_HIT;
    }

    // t0 >= t1 whenever both are real, so this picks the near root, the
    // exit root when the origin is inside, or the sentinel when neither
    // root survived.
    if t0 - t1 < ROOT_EPSILON {
        t0
    } else {
        t1
    }
}

//! Monte Carlo light transport.
//!
//! One call follows a single camera ray through the scene, accumulating
//! emitted light scaled by the attenuation the path has picked up so
//! far. Paths are cut off at a fixed bounce depth rather than by
//! Russian roulette, trading a little darkening for a bounded, uniform
//! cost per sample.

use beam_math::{safe_normalize, Ray, Vec3, Xorshift32};

use crate::intersect::{plane_distance, sphere_distance, NO_HIT};
use crate::scene::Scene;

/// Hits closer than this are self-intersections with the surface the
/// ray just left, and are skipped.
pub const MIN_HIT_DISTANCE: f32 = 1e-4;

/// Trace one ray for up to `max_bounces` segments.
///
/// Returns the gathered radiance and the number of bounce iterations
/// spent, terminal iteration included; the caller folds the count into
/// the shared bounce total.
pub fn trace(scene: &Scene, ray: &Ray, rng: &mut Xorshift32, max_bounces: u32) -> (Vec3, u64) {
    let mut color = Vec3::ZERO;
    let mut attenuation = Vec3::ONE;
    let mut origin = ray.origin();
    let mut direction = ray.direction();
    let mut bounces = 0u64;

    for _ in 0..max_bounces {
        bounces += 1;

        let mut hit_distance = NO_HIT;
        let mut hit_material = 0u32;
        let mut hit_point = Vec3::ZERO;
        let mut hit_normal = Vec3::ZERO;

        for plane in scene.planes() {
            let t = plane_distance(origin, direction, plane.normal, plane.offset);
            if t > MIN_HIT_DISTANCE && t < hit_distance {
                hit_distance = t;
                hit_material = plane.material;
                hit_point = origin + direction * t;
                hit_normal = plane.normal;
            }
        }

        for sphere in scene.spheres() {
            let t = sphere_distance(origin - sphere.center, direction, sphere.radius);
            if t > MIN_HIT_DISTANCE && t < hit_distance {
                hit_distance = t;
                hit_material = sphere.material;
                hit_point = origin + direction * t;
                hit_normal = safe_normalize(hit_point - sphere.center);
            }
        }

        // Index 0 doubles as the miss marker: the ray left the scene and
        // picks up the background emission.
        if hit_material == 0 {
            color += attenuation * scene.background().emit;
            break;
        }

        let material = scene.material(hit_material);
        color += attenuation * material.emit;

        let cos_atten = (-direction).dot(hit_normal).max(0.0);
        attenuation *= material.reflect * cos_atten;

        let specular = direction - hit_normal * 2.0 * direction.dot(hit_normal);
        let perturbed = hit_normal + Vec3::new(rng.bilateral(), rng.bilateral(), rng.bilateral());
        let diffuse = safe_normalize(perturbed);

        origin = hit_point;
        direction = safe_normalize(diffuse.lerp(specular, material.shininess));
    }

    (color, bounces)
}

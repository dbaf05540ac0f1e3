//! Built-in scenes.

use beam_math::Vec3;
use beam_renderer::{Material, Plane, Scene, Sphere};

/// The demo scene: matte orange ground plane and center sphere under a
/// deep blue sky, a strong red emitter off to the side, a glossy green
/// sphere, and two mirrors.
pub fn demo() -> Scene {
    let materials = vec![
        Material::emitter(Vec3::new(0.1, 0.1, 0.9)), // 0: sky
        Material::diffuse(Vec3::new(0.7, 0.5, 0.3)), // 1: matte orange
        Material::emitter(Vec3::new(8.0, 0.0, 0.0)), // 2: red light
        Material::glossy(Vec3::new(0.2, 0.8, 0.2), 0.7), // 3: green gloss
        Material::glossy(Vec3::ONE, 1.0),            // 4: mirror
    ];

    let planes = vec![Plane {
        normal: Vec3::Z,
        offset: 0.0,
        material: 1,
    }];

    let spheres = vec![
        Sphere {
            center: Vec3::ZERO,
            radius: 1.0,
            material: 1,
        },
        Sphere {
            center: Vec3::new(3.0, -2.0, 0.0),
            radius: 1.0,
            material: 2,
        },
        Sphere {
            center: Vec3::new(-2.0, -1.0, 2.0),
            radius: 1.0,
            material: 3,
        },
        Sphere {
            center: Vec3::new(1.0, -1.0, 3.0),
            radius: 1.0,
            material: 4,
        },
        Sphere {
            center: Vec3::new(-2.0, 3.0, 0.0),
            radius: 2.0,
            material: 4,
        },
    ];

    Scene::new(materials, planes, spheres)
}

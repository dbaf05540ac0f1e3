//! Scene description.
//!
//! Built once before rendering and then read by every worker thread
//! without synchronization, so nothing here is mutable after
//! construction.

use beam_math::Vec3;

/// Surface response of a scene object.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    /// Blend between diffuse and mirror bounces: 0 = fully diffuse,
    /// 1 = perfect mirror.
    pub shininess: f32,
    /// Radiance the surface emits on its own.
    pub emit: Vec3,
    /// Fraction of incoming light reflected, per channel.
    pub reflect: Vec3,
}

impl Material {
    /// Matte surface with no emission.
    pub fn diffuse(reflect: Vec3) -> Self {
        Self {
            shininess: 0.0,
            emit: Vec3::ZERO,
            reflect,
        }
    }

    /// Pure light source; absorbs everything it does not emit.
    pub fn emitter(emit: Vec3) -> Self {
        Self {
            shininess: 0.0,
            emit,
            reflect: Vec3::ZERO,
        }
    }

    /// Reflective surface with a diffuse/mirror blend.
    pub fn glossy(reflect: Vec3, shininess: f32) -> Self {
        Self {
            shininess,
            emit: Vec3::ZERO,
            reflect,
        }
    }
}

/// Infinite plane satisfying `dot(normal, p) + offset = 0`.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Unit surface normal.
    pub normal: Vec3,
    /// Signed distance term of the plane equation.
    pub offset: f32,
    /// Index into the scene's material table.
    pub material: u32,
}

/// Sphere described by center and radius.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    /// Index into the scene's material table.
    pub material: u32,
}

/// Everything a ray can hit, plus the material table.
///
/// Material index 0 is reserved: it is the "no hit" material, and its
/// `emit` is the background color a ray picks up when it leaves the
/// scene. Objects must not reference index 0.
#[derive(Debug, Clone)]
pub struct Scene {
    materials: Vec<Material>,
    planes: Vec<Plane>,
    spheres: Vec<Sphere>,
}

impl Scene {
    /// Build a scene, checking every object's material reference.
    ///
    /// Panics on an out-of-range or background material index; that is a
    /// construction bug, not a runtime condition.
    pub fn new(materials: Vec<Material>, planes: Vec<Plane>, spheres: Vec<Sphere>) -> Self {
        assert!(
            !materials.is_empty(),
            "scene needs material 0 (the background)"
        );
        for plane in &planes {
            assert!(
                plane.material > 0 && (plane.material as usize) < materials.len(),
                "plane references material {} of {}",
                plane.material,
                materials.len()
            );
        }
        for sphere in &spheres {
            assert!(
                sphere.material > 0 && (sphere.material as usize) < materials.len(),
                "sphere references material {} of {}",
                sphere.material,
                materials.len()
            );
        }

        Self {
            materials,
            planes,
            spheres,
        }
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Look up a material by index. Indices stored in scene objects are
    /// validated at construction, so this cannot fail for them.
    #[inline]
    pub fn material(&self, index: u32) -> &Material {
        &self.materials[index as usize]
    }

    /// The reserved "no hit" material; its emission is the sky color.
    #[inline]
    pub fn background(&self) -> &Material {
        &self.materials[0]
    }
}

//! Pinhole camera.
//!
//! Fixed for the whole render: position and look-at point define an
//! orthonormal basis, and rays leave the position through a film plane
//! one unit in front of it. Per-sample jitter inside each pixel's film
//! footprint is the renderer's anti-aliasing.

use beam_math::{safe_normalize, Ray, Vec3, Xorshift32};

/// Up reference for building the camera basis.
const WORLD_UP: Vec3 = Vec3::Z;

/// Distance from the eye to the film plane.
const FILM_DISTANCE: f32 = 1.0;

/// Camera with a precomputed basis and film geometry.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    axis_x: Vec3,
    axis_y: Vec3,
    film_center: Vec3,
    half_film_width: f32,
    half_film_height: f32,
    half_pixel_width: f32,
    half_pixel_height: f32,
    image_width: u32,
    image_height: u32,
}

impl Camera {
    /// Place a camera at `position` looking at `look_at`.
    ///
    /// The film starts as a unit square and the axis matching the
    /// smaller image dimension is scaled down by the aspect ratio, so
    /// pixels stay square.
    pub fn new(position: Vec3, look_at: Vec3, image_width: u32, image_height: u32) -> Self {
        let axis_z = safe_normalize(position - look_at);
        let axis_x = safe_normalize(WORLD_UP.cross(axis_z));
        let axis_y = safe_normalize(axis_z.cross(axis_x));

        let mut film_width = 1.0f32;
        let mut film_height = 1.0f32;
        if image_width > image_height {
            film_height = image_height as f32 / image_width as f32;
        } else if image_height > image_width {
            film_width = image_width as f32 / image_height as f32;
        }

        Self {
            position,
            axis_x,
            axis_y,
            film_center: position - axis_z * FILM_DISTANCE,
            half_film_width: 0.5 * film_width,
            half_film_height: 0.5 * film_height,
            half_pixel_width: 0.5 / image_width as f32,
            half_pixel_height: 0.5 / image_height as f32,
            image_width,
            image_height,
        }
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Build the jittered ray for pixel (x, y).
    ///
    /// Draws two samples from the generator, x axis first, so a tile's
    /// ray sequence depends only on its generator state.
    pub fn ray_through(&self, x: u32, y: u32, rng: &mut Xorshift32) -> Ray {
        let film_x = -1.0 + 2.0 * (x as f32 / self.image_width as f32);
        let film_y = -1.0 + 2.0 * (y as f32 / self.image_height as f32);

        let jittered_x = film_x + rng.bilateral() * self.half_pixel_width;
        let jittered_y = film_y + rng.bilateral() * self.half_pixel_height;

        let film_point = self.film_center
            + self.axis_x * jittered_x * self.half_film_width
            + self.axis_y * jittered_y * self.half_film_height;

        Ray::new(self.position, safe_normalize(film_point - self.position))
    }
}

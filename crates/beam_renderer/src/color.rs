//! Linear-to-display conversion and pixel packing.

use beam_math::Vec3;

/// Piecewise sRGB transfer function. Input is clamped to [0, 1], so
/// out-of-range accumulator values saturate instead of wrapping.
#[inline]
pub fn linear_to_srgb(l: f32) -> f32 {
    let l = l.clamp(0.0, 1.0);
    if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Map an accumulated linear color to 0-255 sRGB channel values.
pub fn tonemap(color: Vec3) -> Vec3 {
    Vec3::new(
        linear_to_srgb(color.x),
        linear_to_srgb(color.y),
        linear_to_srgb(color.z),
    ) * 255.0
}

/// Pack 0-255 channels and a [0, 1] alpha into a BGRA word (blue in the
/// low byte), the layout 32bpp BMP rows use. Casts truncate.
#[inline]
pub fn pack_bgra(srgb: Vec3, alpha: f32) -> u32 {
    ((alpha * 255.0) as u32) << 24
        | (srgb.x as u32) << 16
        | (srgb.y as u32) << 8
        | srgb.z as u32
}

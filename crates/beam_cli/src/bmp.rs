//! Uncompressed 32-bit BMP writer.
//!
//! A fixed 54-byte header followed by the framebuffer's packed rows,
//! nothing else. BMP stores rows bottom-up when the height is positive,
//! which matches the framebuffer's storage order.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use beam_renderer::Framebuffer;
use bytemuck::{Pod, Zeroable};

/// File header and info header of an uncompressed 32bpp bitmap, in file
/// layout. No Debug derive: that would take references into the packed
/// struct.
#[repr(C, packed)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct BitmapHeader {
    file_type: u16,
    file_size: u32,
    reserved1: u16,
    reserved2: u16,
    bitmap_offset: u32,
    info_size: u32,
    width: i32,
    height: i32,
    planes: u16,
    bits_per_pixel: u16,
    compression: u32,
    size_of_bitmap: u32,
    horz_resolution: i32,
    vert_resolution: i32,
    colors_used: u32,
    colors_important: u32,
}

const HEADER_SIZE: usize = std::mem::size_of::<BitmapHeader>();
const _: () = assert!(HEADER_SIZE == 54);

/// Write the framebuffer to `path` as a 32bpp BMP.
pub fn write(fb: &Framebuffer, path: &Path) -> io::Result<()> {
    let pixel_bytes = fb.to_bytes();

    let header = BitmapHeader {
        file_type: 0x4D42, // "BM"
        file_size: (HEADER_SIZE + pixel_bytes.len()) as u32,
        reserved1: 0,
        reserved2: 0,
        bitmap_offset: HEADER_SIZE as u32,
        info_size: 40,
        width: fb.width() as i32,
        height: fb.height() as i32,
        planes: 1,
        bits_per_pixel: 32,
        compression: 0,
        size_of_bitmap: pixel_bytes.len() as u32,
        horz_resolution: 0,
        vert_resolution: 0,
        colors_used: 0,
        colors_important: 0,
    };

    let mut file = File::create(path)?;
    file.write_all(bytemuck::bytes_of(&header))?;
    file.write_all(&pixel_bytes)?;
    Ok(())
}

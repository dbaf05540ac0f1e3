//! Shared pixel storage for the parallel render phase.

use std::sync::atomic::{AtomicU32, Ordering};

/// Packed-pixel image buffer writable from many threads at once.
///
/// Tiles partition the image, so each cell is stored exactly once, by
/// the thread that owns the covering tile. Relaxed atomics suffice:
/// the render scope's join orders every store before the encoder reads.
/// Row 0 is the first stored row; a bottom-up encoder writes rows in
/// storage order.
#[derive(Debug)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Box<[AtomicU32]>,
}

impl Framebuffer {
    /// Allocate a zeroed buffer.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        let pixels = (0..len).map(|_| AtomicU32::new(0)).collect();

        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} buffer",
            x,
            y,
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    /// Store a packed pixel.
    #[inline]
    pub fn store(&self, x: u32, y: u32, value: u32) {
        self.pixels[self.index(x, y)].store(value, Ordering::Relaxed);
    }

    /// Read a packed pixel back.
    #[inline]
    pub fn load(&self, x: u32, y: u32) -> u32 {
        self.pixels[self.index(x, y)].load(Ordering::Relaxed)
    }

    /// Snapshot the packed words in storage order.
    pub fn words(&self) -> Vec<u32> {
        self.pixels
            .iter()
            .map(|pixel| pixel.load(Ordering::Relaxed))
            .collect()
    }

    /// Serialize the buffer as little-endian bytes, the row layout a
    /// 32bpp image encoder appends directly after its header.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in self.pixels.iter() {
            bytes.extend_from_slice(&pixel.load(Ordering::Relaxed).to_le_bytes());
        }
        bytes
    }
}

//! Rectangular tile decomposition of the image.
//!
//! Tiles are the unit of work distribution: every pixel belongs to
//! exactly one tile, so workers never write the same framebuffer cell.

/// A half-open pixel rectangle: x in [min_x, max_x), y in [min_y, max_y).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl Tile {
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y
    }

    /// Number of pixels this tile covers.
    pub fn pixel_count(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }
}

/// Cut the image into row-major tiles of at most `tile_size` pixels per
/// side.
///
/// Edge tiles are clamped to the image, so the grid covers every pixel
/// exactly once for any width/height/tile-size combination.
pub fn tile_grid(image_width: u32, image_height: u32, tile_size: u32) -> Vec<Tile> {
    assert!(tile_size > 0, "tile_size must be nonzero");

    let mut tiles = Vec::new();
    let mut y = 0;
    while y < image_height {
        let max_y = (y + tile_size).min(image_height);
        let mut x = 0;
        while x < image_width {
            let max_x = (x + tile_size).min(image_width);
            tiles.push(Tile {
                min_x: x,
                min_y: y,
                max_x,
                max_y,
            });
            x += tile_size;
        }
        y += tile_size;
    }

    tiles
}

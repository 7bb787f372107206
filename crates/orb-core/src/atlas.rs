//! Grid placement for the label texture atlas.
//!
//! Every label is rasterized into one fixed-size tile; tiles pack into a
//! near-square grid. Only the geometry lives here, the actual text drawing
//! is a front-end concern.

/// Tile grid for `n` labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AtlasPlan {
    pub cols: u32,
    pub rows: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    pub width: u32,
    pub height: u32,
}

impl AtlasPlan {
    /// Plan a grid of at least one tile, so the texture never degenerates
    /// to a zero extent.
    pub fn for_tiles(n: usize, tile_width: u32, tile_height: u32) -> Self {
        let n = n.max(1) as u32;
        let cols = (n as f32).sqrt().ceil() as u32;
        let rows = (n + cols - 1) / cols;
        Self {
            cols,
            rows,
            tile_width,
            tile_height,
            width: cols * tile_width,
            height: rows * tile_height,
        }
    }

    /// Pixel origin (top-left) of a tile.
    #[inline]
    pub fn tile_origin(&self, index: usize) -> (u32, u32) {
        let i = index as u32;
        ((i % self.cols) * self.tile_width, (i / self.cols) * self.tile_height)
    }

    /// Texture-space rectangle of a tile as `[u0, v0, u1, v1]`, with
    /// `(u0, v0)` the top-left corner.
    pub fn uv_rect(&self, index: usize) -> [f32; 4] {
        let (ox, oy) = self.tile_origin(index);
        let w = self.width as f32;
        let h = self.height as f32;
        [
            ox as f32 / w,
            oy as f32 / h,
            (ox + self.tile_width) as f32 / w,
            (oy + self.tile_height) as f32 / h,
        ]
    }
}

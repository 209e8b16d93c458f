//! Canvas to tile-space transform

use glam::DVec2;

pub const DEFAULT_TILE_SIZE: f64 = 40.0;
pub const MIN_TILE_SIZE: f64 = 10.0;
pub const MAX_TILE_SIZE: f64 = 80.0;

/// Where the grid sits on the canvas and how large a tile is drawn
///
/// `offset` is the canvas position of the top-left corner of tile `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub offset: DVec2,
    tile_size: f64,
    min_tile_size: f64,
    max_tile_size: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_TILE_SIZE, MIN_TILE_SIZE, MAX_TILE_SIZE)
    }
}

/// Whether a value can be used as a tile size in pixels
pub fn is_usable_size(pixels: f64) -> bool {
    pixels.is_finite() && pixels > 0.0
}

fn usable_or(pixels: f64, fallback: f64) -> f64 {
    if is_usable_size(pixels) {
        pixels
    } else {
        log::warn!("Ignoring tile size {pixels}, using {fallback}");
        fallback
    }
}

impl Viewport {
    /// Create a viewport at the origin. A reversed size range is swapped,
    /// and sizes that are not positive and finite fall back to the defaults.
    pub fn new(tile_size: f64, min_tile_size: f64, max_tile_size: f64) -> Self {
        let tile_size = usable_or(tile_size, DEFAULT_TILE_SIZE);
        let min_tile_size = usable_or(min_tile_size, MIN_TILE_SIZE);
        let max_tile_size = usable_or(max_tile_size, MAX_TILE_SIZE);
        let (min_tile_size, max_tile_size) = if min_tile_size <= max_tile_size {
            (min_tile_size, max_tile_size)
        } else {
            (max_tile_size, min_tile_size)
        };
        Self {
            offset: DVec2::ZERO,
            tile_size: tile_size.clamp(min_tile_size, max_tile_size),
            min_tile_size,
            max_tile_size,
        }
    }

    /// Width and height of one tile in canvas pixels
    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    /// Set the tile size, clamped to the allowed range. NaN is ignored.
    pub fn set_tile_size(&mut self, pixels: f64) {
        if pixels.is_nan() {
            return;
        }
        self.tile_size = pixels.clamp(self.min_tile_size, self.max_tile_size);
    }

    pub fn to_tile_space(&self, canvas: DVec2) -> DVec2 {
        (canvas - self.offset) / self.tile_size
    }

    pub fn to_canvas_space(&self, tile: DVec2) -> DVec2 {
        tile * self.tile_size + self.offset
    }

    /// Grow or shrink tiles by `amount` pixels, keeping the point `at` (in
    /// canvas space) over the same spot of the map. Returns `false` when the
    /// size was already at its limit.
    pub fn zoom(&mut self, amount: f64, at: DVec2) -> bool {
        let old_size = self.tile_size;
        self.set_tile_size(old_size + amount);
        let applied = self.tile_size - old_size;
        if applied == 0.0 {
            return false;
        }
        self.offset -= (at - self.offset) * (applied / old_size);
        log::debug!("Zoomed to {} px tiles", self.tile_size);
        true
    }

    /// Move the map by `delta` canvas pixels
    pub fn pan(&mut self, delta: DVec2) {
        self.offset += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_tile_space() {
        let mut viewport = Viewport::default();
        viewport.offset = DVec2::new(20.0, -40.0);
        assert_eq!(
            viewport.to_tile_space(DVec2::new(100.0, 0.0)),
            DVec2::new(2.0, 1.0)
        );
        assert_eq!(
            viewport.to_canvas_space(DVec2::new(2.0, 1.0)),
            DVec2::new(100.0, 0.0)
        );
    }

    #[test]
    fn test_zoom_keeps_cursor_fixed() {
        let mut viewport = Viewport::default();
        viewport.offset = DVec2::new(10.0, 30.0);
        let cursor = DVec2::new(250.0, 130.0);
        let before = viewport.to_tile_space(cursor);

        assert!(viewport.zoom(8.0, cursor));
        assert_eq!(viewport.tile_size(), 48.0);
        let after = viewport.to_tile_space(cursor);
        assert!((before - after).length() < 1e-9);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut viewport = Viewport::default();
        assert!(viewport.zoom(100.0, DVec2::ZERO));
        assert_eq!(viewport.tile_size(), MAX_TILE_SIZE);
        let offset = viewport.offset;
        assert!(!viewport.zoom(5.0, DVec2::new(300.0, 300.0)));
        assert_eq!(viewport.offset, offset);

        let cursor = DVec2::new(123.0, 77.0);
        let before = viewport.to_tile_space(cursor);
        assert!(viewport.zoom(-500.0, cursor));
        assert_eq!(viewport.tile_size(), MIN_TILE_SIZE);
        assert!((viewport.to_tile_space(cursor) - before).length() < 1e-9);
    }

    #[test]
    fn test_pan() {
        let mut viewport = Viewport::default();
        viewport.pan(DVec2::new(40.0, -80.0));
        assert_eq!(
            viewport.to_tile_space(DVec2::ZERO),
            DVec2::new(-1.0, 2.0)
        );
    }

    #[test]
    fn test_reversed_range() {
        let viewport = Viewport::new(200.0, 64.0, 16.0);
        assert_eq!(viewport.tile_size(), 64.0);
    }

    #[test]
    fn test_unusable_sizes_fall_back_to_defaults() {
        let viewport = Viewport::new(f64::NAN, f64::NAN, f64::INFINITY);
        assert_eq!(viewport.tile_size(), DEFAULT_TILE_SIZE);
        assert_eq!(viewport, Viewport::default());

        let mut viewport = Viewport::new(30.0, -5.0, 0.0);
        assert_eq!(viewport.tile_size(), 30.0);
        viewport.set_tile_size(f64::NAN);
        assert_eq!(viewport.tile_size(), 30.0);
        viewport.set_tile_size(1.0);
        assert_eq!(viewport.tile_size(), MIN_TILE_SIZE);
    }
}

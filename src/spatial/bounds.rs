//! Pixel bounding boxes and aspect measurements for hex sets
//!
//! Boxes built from hex centers are padded by half a tile width horizontally
//! and a full circumradius vertically, so they enclose whole tiles.

use crate::io::configuration::{MIN_EXTENT, MIN_RATIO_QUOTIENT};
use crate::spatial::hex::{Hex, SQRT_3, axial_to_pixel};

/// Axis-aligned box in pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelBounds {
    /// Minimum x (inclusive)
    pub min_x: f64,
    /// Minimum y (inclusive)
    pub min_y: f64,
    /// Maximum x (inclusive)
    pub max_x: f64,
    /// Maximum y (inclusive)
    pub max_y: f64,
}

impl PixelBounds {
    /// Degenerate box containing a single point
    pub const fn from_point(point: [f64; 2]) -> Self {
        Self {
            min_x: point[0],
            min_y: point[1],
            max_x: point[0],
            max_y: point[1],
        }
    }

    /// Box around the centers of `hexes`, or `None` for an empty set
    pub fn of_centers<I>(hexes: I, radius: f64) -> Option<Self>
    where
        I: IntoIterator<Item = Hex>,
    {
        hexes.into_iter().fold(None, |bounds, hex| {
            let point = axial_to_pixel(hex, radius);
            Some(bounds.map_or_else(|| Self::from_point(point), |b: Self| b.including(point)))
        })
    }

    /// Smallest box containing both this box and `point`
    pub fn including(self, point: [f64; 2]) -> Self {
        Self {
            min_x: self.min_x.min(point[0]),
            min_y: self.min_y.min(point[1]),
            max_x: self.max_x.max(point[0]),
            max_y: self.max_y.max(point[1]),
        }
    }

    /// Grow a center box so it encloses whole tiles of circumradius `radius`
    pub fn padded(self, radius: f64) -> Self {
        let dx = half_tile_width(radius);
        let dy = radius;
        Self {
            min_x: self.min_x - dx,
            min_y: self.min_y - dy,
            max_x: self.max_x + dx,
            max_y: self.max_y + dy,
        }
    }

    /// Horizontal extent
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Enclosed area
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Width over height, with both extents clamped away from zero
    pub fn aspect_ratio(&self) -> f64 {
        self.width().max(MIN_EXTENT) / self.height().max(MIN_EXTENT)
    }
}

/// Half the flat-to-flat width of a tile, `√3/2·R`
pub fn half_tile_width(radius: f64) -> f64 {
    SQRT_3 / 2.0 * radius
}

/// Padded box enclosing every tile of `hexes`, or `None` for an empty set
pub fn tile_bounds(hexes: &[Hex], radius: f64) -> Option<PixelBounds> {
    PixelBounds::of_centers(hexes.iter().copied(), radius).map(|b| b.padded(radius))
}

/// Aspect ratio of the padded box of `hexes` (1.0 for an empty set)
pub fn aspect_ratio(hexes: &[Hex], radius: f64) -> f64 {
    tile_bounds(hexes, radius).map_or(1.0, |b| b.aspect_ratio())
}

/// Log-scale distance between an achieved and a target ratio
///
/// Symmetric under inversion of the quotient and zero at an exact match.
pub fn aspect_error(ratio: f64, target: f64) -> f64 {
    (ratio / target).max(MIN_RATIO_QUOTIENT).ln().abs()
}

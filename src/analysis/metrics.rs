//! Shape metrics for finished layouts
//!
//! Stateless: callers measure a result after generation; nothing here feeds
//! back into growth.

use std::collections::{HashSet, VecDeque};

use crate::io::configuration::TILE_CIRCUMRADIUS_INCHES;
use crate::math::principal::eccentricity;
use crate::spatial::bounds::{PixelBounds, aspect_error, tile_bounds};
use crate::spatial::hex::Hex;

/// Geometric summary of one layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    /// Padded pixel bounding box
    pub bounds: PixelBounds,
    /// Achieved width:height ratio
    pub aspect_ratio: f64,
    /// Requested width:height ratio
    pub target_ratio: f64,
    /// `|actual − target| / target · 100`
    pub deviation_percent: f64,
    /// Log-scale aspect error
    pub aspect_error: f64,
    /// Covariance eccentricity in `[0, 1]`
    pub eccentricity: f64,
    /// Tile sides not shared with another tile
    pub exposed_edges: usize,
    /// Number of edge-connected components
    pub components: usize,
}

impl LayoutMetrics {
    /// Measure `hexes` against `target_ratio`; `None` for an empty layout
    pub fn measure(hexes: &[Hex], radius: f64, target_ratio: f64) -> Option<Self> {
        let bounds = tile_bounds(hexes, radius)?;
        let aspect_ratio = bounds.aspect_ratio();
        Some(Self {
            bounds,
            aspect_ratio,
            target_ratio,
            deviation_percent: deviation_percent(aspect_ratio, target_ratio),
            aspect_error: aspect_error(aspect_ratio, target_ratio),
            eccentricity: eccentricity(hexes, radius),
            exposed_edges: exposed_edges(hexes),
            components: component_count(hexes),
        })
    }
}

/// Percentage deviation of `actual` from `target`
pub fn deviation_percent(actual: f64, target: f64) -> f64 {
    (actual - target).abs() / target * 100.0
}

/// Count tile sides that do not touch another tile of the set
pub fn exposed_edges(hexes: &[Hex]) -> usize {
    let occupied: HashSet<Hex> = hexes.iter().copied().collect();
    occupied
        .iter()
        .map(|hex| {
            hex.neighbors()
                .iter()
                .filter(|neighbor| !occupied.contains(neighbor))
                .count()
        })
        .sum()
}

/// Number of edge-connected components (duplicates are ignored)
pub fn component_count(hexes: &[Hex]) -> usize {
    let occupied: HashSet<Hex> = hexes.iter().copied().collect();
    let mut visited: HashSet<Hex> = HashSet::with_capacity(occupied.len());
    let mut components = 0;

    for &start in hexes {
        if !visited.insert(start) {
            continue;
        }
        components += 1;
        let mut queue = VecDeque::from([start]);
        while let Some(hex) = queue.pop_front() {
            for neighbor in hex.neighbors() {
                if occupied.contains(&neighbor) && visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
    }
    components
}

/// Conversion from plot units to physical inches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalScale {
    inches_per_unit: f64,
}

impl PhysicalScale {
    /// Scale at which a hex of plot circumradius `radius` measures
    /// `circumradius_inches` in reality
    pub fn from_tile_circumradius(circumradius_inches: f64, radius: f64) -> Self {
        Self {
            inches_per_unit: circumradius_inches / radius,
        }
    }

    /// Scale for the standard 12 in (tip to tip) tile
    pub fn standard(radius: f64) -> Self {
        Self::from_tile_circumradius(TILE_CIRCUMRADIUS_INCHES, radius)
    }

    /// Inches per plot unit
    pub const fn inches_per_unit(&self) -> f64 {
        self.inches_per_unit
    }

    /// Physical `(width, height)` of a pixel-space box, in inches
    pub fn dimensions(&self, bounds: &PixelBounds) -> (f64, f64) {
        (
            bounds.width() * self.inches_per_unit,
            bounds.height() * self.inches_per_unit,
        )
    }
}

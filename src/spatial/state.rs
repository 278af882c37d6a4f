//! Growth state: the occupied cluster, its frontier and running bounds
//!
//! The frontier is kept as an ordered set so candidate iteration is
//! deterministic for a given sequence of insertions. Center bounds are
//! maintained incrementally, which makes the bounding box of `S ∪ {c}`
//! available in constant time for every candidate.

use std::collections::{BTreeSet, HashSet};

use crate::spatial::bounds::PixelBounds;
use crate::spatial::hex::{Direction, Hex, axial_to_pixel};

/// Mutable state of one growth run
///
/// Invariants: the frontier is exactly the set of unoccupied neighbors of the
/// occupied set, and the two sets are disjoint. Connectivity holds as long as
/// callers only insert hexes adjacent to the cluster.
#[derive(Debug, Clone)]
pub struct GrowthState {
    occupied: HashSet<Hex>,
    order: Vec<Hex>,
    frontier: BTreeSet<Hex>,
    center_bounds: PixelBounds,
    radius: f64,
}

impl GrowthState {
    /// Start a cluster containing only `seed`
    pub fn seeded(seed: Hex, radius: f64) -> Self {
        let mut occupied = HashSet::new();
        occupied.insert(seed);
        Self {
            occupied,
            order: vec![seed],
            frontier: seed.neighbors().into_iter().collect(),
            center_bounds: PixelBounds::from_point(axial_to_pixel(seed, radius)),
            radius,
        }
    }

    /// Number of occupied hexes
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// A seeded state is never empty; provided for API symmetry
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Hex circumradius used for pixel projections
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Whether `hex` is occupied
    pub fn contains(&self, hex: &Hex) -> bool {
        self.occupied.contains(hex)
    }

    /// Occupied hexes in insertion order
    pub fn hexes(&self) -> &[Hex] {
        &self.order
    }

    /// Consume the state, returning hexes in insertion order
    pub fn into_hexes(self) -> Vec<Hex> {
        self.order
    }

    /// Frontier cells in ascending `(q, r)` order
    pub fn frontier(&self) -> impl Iterator<Item = Hex> + '_ {
        self.frontier.iter().copied()
    }

    /// Number of frontier cells
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Bounding box of the occupied hex centers (unpadded)
    pub const fn center_bounds(&self) -> PixelBounds {
        self.center_bounds
    }

    /// Padded tile bounds the cluster would have after adding `candidate`
    pub fn tile_bounds_with(&self, candidate: Hex) -> PixelBounds {
        self.center_bounds
            .including(axial_to_pixel(candidate, self.radius))
            .padded(self.radius)
    }

    /// Add `hex` to the cluster
    ///
    /// Moves it out of the frontier and exposes its unoccupied neighbors.
    /// Returns `false` (and changes nothing) if it was already occupied.
    pub fn insert(&mut self, hex: Hex) -> bool {
        if !self.occupied.insert(hex) {
            return false;
        }
        self.order.push(hex);
        self.frontier.remove(&hex);
        for neighbor in hex.neighbors() {
            if !self.occupied.contains(&neighbor) {
                self.frontier.insert(neighbor);
            }
        }
        self.center_bounds = self
            .center_bounds
            .including(axial_to_pixel(hex, self.radius));
        true
    }

    /// Recompute the perimeter from scratch
    ///
    /// Every unoccupied neighbor of the cluster, visiting occupied hexes in
    /// insertion order and their neighbors in direction order, deduplicated
    /// on first sight.
    pub fn perimeter(&self) -> Vec<Hex> {
        let mut seen = HashSet::new();
        let mut ring = Vec::new();
        for hex in &self.order {
            for neighbor in hex.neighbors() {
                if !self.occupied.contains(&neighbor) && seen.insert(neighbor) {
                    ring.push(neighbor);
                }
            }
        }
        ring
    }

    /// Occupied hexes with at least one open side, with those open directions
    pub fn open_cells(&self) -> Vec<(Hex, Vec<Direction>)> {
        self.order
            .iter()
            .filter_map(|&hex| {
                let open: Vec<Direction> = Direction::ALL
                    .into_iter()
                    .filter(|&direction| !self.occupied.contains(&hex.neighbor(direction)))
                    .collect();
                (!open.is_empty()).then_some((hex, open))
            })
            .collect()
    }

    /// Keep only the first `len` hexes in insertion order
    ///
    /// Every insertion-order prefix of a grown cluster is connected. The
    /// frontier and bounds are rebuilt for the kept hexes.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.order.len() || len == 0 {
            return;
        }
        let kept: Vec<Hex> = self.order.iter().take(len).copied().collect();
        let Some((&seed, rest)) = kept.split_first() else {
            return;
        };
        let mut rebuilt = Self::seeded(seed, self.radius);
        for &hex in rest {
            rebuilt.insert(hex);
        }
        *self = rebuilt;
    }
}

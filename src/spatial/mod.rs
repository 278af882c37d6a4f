//! Hex grid geometry and growth state
//!
//! This module contains:
//! - Axial coordinates, directions and pixel projection
//! - Pixel bounding boxes and aspect measurements
//! - The mutable occupied/frontier state of a growth run

/// Padded pixel bounding boxes and aspect error
pub mod bounds;
/// Axial hex coordinates and adjacency
pub mod hex;
/// Occupied set, frontier and incremental bounds
pub mod state;

pub use hex::{Direction, Hex};
pub use state::GrowthState;

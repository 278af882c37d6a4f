//! Color assignment strategies for finished layouts
//!
//! Every strategy receives the final ordered hex list, the run's random
//! source and per-color quotas, and returns one palette index per hex.

/// Axis-projected banding
pub mod gradient;
/// Shuffled quota multiset
pub mod random;
/// Radial 60/30/10 zoning
pub mod scheme60;
/// Strategy identifiers, roles and dispatch
pub mod strategy;

pub use strategy::{ColorMode, ColorRoles, ColorStrategy, GradientAxis, assign_colors};

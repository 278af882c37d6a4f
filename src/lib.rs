//! Procedural generation of connected hexagonal tile layouts
//!
//! A layout grows stochastically from a single hex toward a target aspect
//! ratio, gains a few meandering tendrils, and is colored under exact
//! per-color quotas. Every run is reproducible from its configuration and
//! seed.

#![forbid(unsafe_code)]

/// Growth engines, configuration and the layout driver
pub mod algorithm;
/// Shape metrics for finished layouts
pub mod analysis;
/// Color assignment strategies
pub mod coloring;
/// Command line, exports, errors and constants
pub mod io;
/// Softmax sampling helpers and covariance analysis
pub mod math;
/// Hex coordinates, bounds and growth state
pub mod spatial;

pub use algorithm::config::{LayoutConfig, LayoutConfigBuilder, TendrilParams};
pub use algorithm::executor::{LayoutResult, generate_batch, generate_layout};
pub use coloring::{ColorRoles, ColorStrategy, GradientAxis};
pub use io::error::{LayoutError, Result};
pub use spatial::hex::Hex;

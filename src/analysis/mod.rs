//! Evaluation of finished layouts

/// Bounding box, aspect deviation and shape metrics
pub mod metrics;

pub use metrics::{LayoutMetrics, PhysicalScale};

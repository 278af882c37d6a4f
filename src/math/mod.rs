//! Mathematical utilities for the algorithm

/// Covariance, principal axis and eccentricity of hex positions
pub mod principal;
/// Softmax normalization and argmax helpers
pub mod probability;

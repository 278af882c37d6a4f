/// Validated layout configuration and its builder
pub mod config;
/// Layout driver and batch generation
pub mod executor;
/// Stochastic blob growth
pub mod growth;
/// Candidate scoring and greedy fill
pub mod scoring;
/// Seeded random sources
pub mod selection;
/// Tendril extension
pub mod tendrils;

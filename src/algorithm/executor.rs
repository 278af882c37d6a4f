//! Layout driver: base blob, tendrils, truncation and coloring
//!
//! One run is a pure function of its configuration and seed. Every random
//! draw of a run, from growth through coloring, comes from a single stream
//! seeded once at the start.

use tracing::{debug, info, warn};

use crate::algorithm::config::LayoutConfig;
use crate::algorithm::growth::grow_blob;
use crate::algorithm::scoring::ScoreParams;
use crate::algorithm::selection::{RandomSelector, RandomSource};
use crate::algorithm::tendrils::extend_with_tendrils;
use crate::analysis::metrics::LayoutMetrics;
use crate::coloring::assign_colors;
use crate::io::configuration::{BASE_FRACTION_LOOSE, BASE_FRACTION_RANGE};
use crate::io::error::Result;
use crate::spatial::hex::Hex;

/// A generated layout: ordered hexes with one color per hex
///
/// Hexes are in insertion order, so the seed hex comes first and every
/// prefix of the list is connected.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    seed: u64,
    requested: usize,
    hexes: Vec<Hex>,
    color_indices: Vec<usize>,
    colors: Vec<String>,
}

impl LayoutResult {
    /// Seed the layout was generated from
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Hexes in growth order
    pub fn hexes(&self) -> &[Hex] {
        &self.hexes
    }

    /// Palette index of each hex, parallel to [`Self::hexes`]
    pub fn color_indices(&self) -> &[usize] {
        &self.color_indices
    }

    /// Color identifier of each hex, parallel to [`Self::hexes`]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Hexes paired with their color identifiers
    pub fn tiles(&self) -> impl Iterator<Item = (Hex, &str)> + '_ {
        self.hexes
            .iter()
            .copied()
            .zip(self.colors.iter().map(String::as_str))
    }

    /// Number of tiles requested by the configuration
    pub const fn requested(&self) -> usize {
        self.requested
    }

    /// Number of tiles actually placed
    pub fn achieved(&self) -> usize {
        self.hexes.len()
    }

    /// Whether growth ran out of room before reaching the requested count
    pub fn is_partial(&self) -> bool {
        self.achieved() < self.requested
    }

    /// Number of hexes assigned each palette color
    pub fn color_counts(&self, palette_len: usize) -> Vec<usize> {
        let mut counts = vec![0; palette_len];
        for &index in &self.color_indices {
            if let Some(count) = counts.get_mut(index) {
                *count += 1;
            }
        }
        counts
    }

    /// Geometric metrics of the layout against the configured target
    pub fn metrics(&self, config: &LayoutConfig) -> Option<LayoutMetrics> {
        LayoutMetrics::measure(&self.hexes, config.radius(), config.target_ratio())
    }
}

/// Number of tiles grown as the base blob before tendrils
///
/// Higher adherence grows more of the shape as a blob, leaving fewer tiles
/// for aspect-distorting tendrils. Always at least one.
pub fn base_blob_size(total_tiles: usize, adherence: f64) -> usize {
    let fraction = BASE_FRACTION_RANGE.mul_add(adherence, BASE_FRACTION_LOOSE);
    let size = (total_tiles as f64 * fraction).round_ties_even() as usize;
    size.clamp(1, total_tiles.max(1))
}

/// Generate one layout from a seeded [`RandomSelector`]
///
/// # Errors
///
/// Returns [`crate::LayoutError::QuotaExhausted`] if coloring breaks its
/// quota invariant. Configuration problems are caught earlier, when the
/// [`LayoutConfig`] is built.
pub fn generate_layout(config: &LayoutConfig, seed: u64) -> Result<LayoutResult> {
    let mut rng = RandomSelector::new(seed);
    generate_layout_with(config, seed, &mut rng)
}

/// Generate one layout drawing from a caller-supplied random source
///
/// # Errors
///
/// See [`generate_layout`].
pub fn generate_layout_with<R: RandomSource>(
    config: &LayoutConfig,
    seed: u64,
    rng: &mut R,
) -> Result<LayoutResult> {
    let params = ScoreParams::from_config(config);
    let total = config.total_tiles();
    let base = base_blob_size(total, config.adherence());

    let mut state = grow_blob(base, &params, rng);
    debug!(seed, base, grown = state.len(), "base blob grown");

    let outcome = extend_with_tendrils(&mut state, total, config.tendrils(), &params, rng);
    if state.len() > total {
        state.truncate(total);
    }

    let hexes = state.into_hexes();
    let palette = config.palette();
    let color_indices = assign_colors(
        &hexes,
        palette.quotas(),
        config.strategy(),
        config.radius(),
        rng,
    )?;
    let colors = color_indices
        .iter()
        .map(|&index| palette.color(index).unwrap_or_default().to_owned())
        .collect();

    let result = LayoutResult {
        seed,
        requested: total,
        hexes,
        color_indices,
        colors,
    };

    if result.is_partial() {
        warn!(
            seed,
            achieved = result.achieved(),
            requested = total,
            "layout is partial: growth ran out of open cells"
        );
    } else {
        debug!(
            seed,
            tiles = result.achieved(),
            tendrils = outcome.tendrils_grown,
            strategy = config.strategy().name(),
            "layout generated"
        );
    }

    Ok(result)
}

/// Generate `count` independent layouts with seeds `base_seed + i`
///
/// Seeds wrap around at `u64::MAX`.
///
/// # Errors
///
/// Returns the first error produced by any run.
pub fn generate_batch(
    config: &LayoutConfig,
    base_seed: u64,
    count: usize,
) -> Result<Vec<LayoutResult>> {
    info!(base_seed, count, tiles = config.total_tiles(), "generating layouts");
    (0..count as u64)
        .map(|offset| generate_layout(config, base_seed.wrapping_add(offset)))
        .collect()
}

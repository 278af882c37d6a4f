//! Candidate scoring shared by the growth and tendril engines
//!
//! A candidate's score blends how close `S ∪ {c}` stays to the target aspect
//! ratio with how tight its padded bounding box is. The adherence dial
//! sharpens the aspect penalty, shifts weight toward it, and tightens the
//! tolerances used by both engines.

use crate::algorithm::config::LayoutConfig;
use crate::io::configuration::{
    ASPECT_STEEPNESS_BASE, ASPECT_STEEPNESS_RANGE, ASPECT_WEIGHT_BASE, ASPECT_WEIGHT_RANGE,
    GROWTH_TOLERANCE_LOOSE, GROWTH_TOLERANCE_SPAN, SCORE_FLOOR, TENDRIL_TOLERANCE_LOOSE,
    TENDRIL_TOLERANCE_SPAN,
};
use crate::math::probability::argmax_first;
use crate::spatial::bounds::aspect_error;
use crate::spatial::hex::Hex;
use crate::spatial::state::GrowthState;

/// Parameters of the scoring function, derived once per run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreParams {
    /// Hex circumradius
    pub radius: f64,
    /// Target width:height ratio
    pub target_ratio: f64,
    /// Aspect adherence dial in `[0, 1]`
    pub adherence: f64,
    /// Relative weight of the compactness term in `[0, 1]`
    pub compactness_bias: f64,
    /// Requested tile count, used to normalize the compactness term
    pub total_tiles: usize,
}

impl ScoreParams {
    /// Scoring parameters for a validated configuration
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            radius: config.radius(),
            target_ratio: config.target_ratio(),
            adherence: config.adherence(),
            compactness_bias: config.compactness_bias(),
            total_tiles: config.total_tiles(),
        }
    }

    /// Steepness `k` of the aspect penalty `exp(-k·e²)`
    pub fn aspect_steepness(&self) -> f64 {
        ASPECT_STEEPNESS_RANGE.mul_add(self.adherence, ASPECT_STEEPNESS_BASE)
    }

    /// Weight of the aspect term
    pub fn aspect_weight(&self) -> f64 {
        ASPECT_WEIGHT_RANGE.mul_add(self.adherence, ASPECT_WEIGHT_BASE)
    }

    /// Weight of the compactness term
    pub fn compactness_weight(&self) -> f64 {
        self.compactness_bias * (1.0 - self.aspect_weight())
    }

    /// Log-space aspect tolerance for blob growth
    pub fn growth_tolerance(&self) -> f64 {
        GROWTH_TOLERANCE_SPAN.mul_add(-self.adherence, GROWTH_TOLERANCE_LOOSE)
    }

    /// Log-space aspect tolerance for tendril steps
    pub fn tendril_tolerance(&self) -> f64 {
        TENDRIL_TOLERANCE_SPAN.mul_add(-self.adherence, TENDRIL_TOLERANCE_LOOSE)
    }
}

/// Aspect error of the cluster after adding `candidate`
pub fn candidate_aspect_error(state: &GrowthState, candidate: Hex, params: &ScoreParams) -> f64 {
    let ratio = state.tile_bounds_with(candidate).aspect_ratio();
    aspect_error(ratio, params.target_ratio)
}

/// Score of adding `candidate` to the cluster; always positive
pub fn candidate_score(state: &GrowthState, candidate: Hex, params: &ScoreParams) -> f64 {
    let bounds = state.tile_bounds_with(candidate);

    let error = aspect_error(bounds.aspect_ratio(), params.target_ratio);
    let aspect_term = (-params.aspect_steepness() * error * error).exp();

    let normalizer = params.radius * params.radius * params.total_tiles.max(1) as f64;
    let compact_term = 1.0 / (1.0 + bounds.area() / normalizer);

    SCORE_FLOOR
        + params
            .aspect_weight()
            .mul_add(aspect_term, params.compactness_weight() * compact_term)
}

/// Deterministically add best-scoring perimeter cells until `target` is met
///
/// Each round recomputes the perimeter and adds the single highest-scoring
/// cell (the first one wins ties). Stops early if the perimeter is empty.
/// Returns the number of cells added.
pub fn fill_greedily(state: &mut GrowthState, target: usize, params: &ScoreParams) -> usize {
    let mut added = 0;
    while state.len() < target {
        let ring = state.perimeter();
        let scores: Vec<f64> = ring
            .iter()
            .map(|&candidate| candidate_score(state, candidate, params))
            .collect();
        let Some(best) = argmax_first(&scores).and_then(|index| ring.get(index).copied()) else {
            break;
        };
        state.insert(best);
        added += 1;
    }
    added
}

//! Stochastic blob growth from a single seed hex
//!
//! Each step scores every frontier cell, softly penalizes cells that push the
//! aspect ratio outside tolerance, turns the scores into a tempered softmax
//! distribution, and draws one cell from the run's random source.

use tracing::{debug, trace};

use crate::algorithm::scoring::{
    ScoreParams, candidate_aspect_error, candidate_score, fill_greedily,
};
use crate::algorithm::selection::RandomSource;
use crate::io::configuration::{
    GROWTH_SOFTMAX_TEMPERATURE, OUT_OF_TOLERANCE_PENALTY, TOLERANCE_MIN_CLUSTER,
};
use crate::math::probability::stable_softmax;
use crate::spatial::hex::Hex;
use crate::spatial::state::GrowthState;

/// Scores for every frontier cell, with the tolerance penalty applied
///
/// Candidates are returned in frontier order alongside their scores.
pub fn score_frontier(state: &GrowthState, params: &ScoreParams) -> (Vec<Hex>, Vec<f64>) {
    let candidates: Vec<Hex> = state.frontier().collect();
    let apply_tolerance = state.len() > TOLERANCE_MIN_CLUSTER;
    let tolerance = params.growth_tolerance();

    let scores = candidates
        .iter()
        .map(|&candidate| {
            let score = candidate_score(state, candidate, params);
            if apply_tolerance && candidate_aspect_error(state, candidate, params) > tolerance {
                score * OUT_OF_TOLERANCE_PENALTY
            } else {
                score
            }
        })
        .collect();

    (candidates, scores)
}

/// Draw probabilities for frontier scores, sharpened by the growth temperature
pub fn growth_probabilities(scores: &[f64]) -> Vec<f64> {
    let tempered: Vec<f64> = scores
        .iter()
        .map(|&score| score / GROWTH_SOFTMAX_TEMPERATURE)
        .collect();
    stable_softmax(&tempered)
}

/// Grow a connected cluster of `target` hexes around the origin
///
/// If the frontier ever empties before the target is reached, growth
/// continues deterministically from the recomputed perimeter; the returned
/// state is smaller than `target` only if that perimeter is empty too.
pub fn grow_blob<R: RandomSource>(target: usize, params: &ScoreParams, rng: &mut R) -> GrowthState {
    let mut state = GrowthState::seeded(Hex::ORIGIN, params.radius);

    while state.len() < target && state.frontier_len() > 0 {
        let (candidates, scores) = score_frontier(&state, params);
        let probabilities = growth_probabilities(&scores);
        let choice = rng.categorical(&probabilities);

        let Some(&chosen) = candidates.get(choice) else {
            break;
        };
        trace!(
            q = chosen.q,
            r = chosen.r,
            size = state.len(),
            candidates = candidates.len(),
            "grew cell"
        );
        state.insert(chosen);
    }

    if state.len() < target {
        let added = fill_greedily(&mut state, target, params);
        debug!(added, size = state.len(), target, "frontier exhausted; filled greedily");
    }

    state
}

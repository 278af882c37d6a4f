//! Tendril extension: short meandering branches grown from the perimeter
//!
//! Tendrils add organic irregularity after the base blob is grown. Each walk
//! is checked against a log-space aspect tolerance before every step and
//! steered, or abandoned, when a step would distort the shape too far. Any
//! shortfall left after the tendrils is filled greedily.

use tracing::{debug, trace};

use crate::algorithm::config::TendrilParams;
use crate::algorithm::scoring::{ScoreParams, candidate_aspect_error, fill_greedily};
use crate::algorithm::selection::RandomSource;
use crate::spatial::hex::{Direction, Hex};
use crate::spatial::state::GrowthState;

/// Summary of one tendril extension pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TendrilOutcome {
    /// Tendrils that placed at least one cell
    pub tendrils_grown: usize,
    /// Cells placed by tendril walks
    pub cells_from_tendrils: usize,
    /// Cells placed by the greedy fill afterwards
    pub cells_from_fill: usize,
}

/// Why a single walk stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkEnd {
    Completed,
    TargetReached,
    OutOfTolerance,
    Blocked,
}

/// Best open direction from `anchor` by resulting aspect error
///
/// Ties keep the earliest direction in cycle order.
fn best_correction(
    state: &GrowthState,
    anchor: Hex,
    params: &ScoreParams,
) -> Option<(Direction, f64)> {
    Direction::ALL
        .into_iter()
        .filter(|&direction| !state.contains(&anchor.neighbor(direction)))
        .map(|direction| {
            let error = candidate_aspect_error(state, anchor.neighbor(direction), params);
            (direction, error)
        })
        .fold(None, |best, (direction, error)| match best {
            Some((_, best_error)) if best_error <= error => best,
            _ => Some((direction, error)),
        })
}

/// Walk one tendril of up to `length` cells starting beside `start`
fn walk<R: RandomSource>(
    state: &mut GrowthState,
    start: Hex,
    mut direction: Direction,
    length: usize,
    target: usize,
    tendrils: &TendrilParams,
    params: &ScoreParams,
    rng: &mut R,
) -> (usize, WalkEnd) {
    let tolerance = params.tendril_tolerance();
    let mut anchor = start;
    let mut placed = 0;

    while placed < length {
        if state.len() >= target {
            return (placed, WalkEnd::TargetReached);
        }

        let mut next = anchor.neighbor(direction);
        if candidate_aspect_error(state, next, params) > tolerance {
            match best_correction(state, anchor, params) {
                Some((corrected, error)) if error <= tolerance => {
                    direction = corrected;
                    next = anchor.neighbor(direction);
                }
                _ => return (placed, WalkEnd::OutOfTolerance),
            }
        }

        if !state.insert(next) {
            return (placed, WalkEnd::Blocked);
        }
        placed += 1;
        anchor = next;

        if rng.chance(tendrils.direction_variability) {
            let turn = if rng.below(2) == 0 { -1 } else { 1 };
            direction = direction.rotated(turn);
        }
    }

    (placed, WalkEnd::Completed)
}

/// Extend `state` toward `target` with tendrils, then fill any shortfall
///
/// All tendril lengths are drawn up front. Each tendril starts at a random
/// occupied cell with an open side, heading through a random open side.
/// Cells already placed are never removed, even when a walk is abandoned.
pub fn extend_with_tendrils<R: RandomSource>(
    state: &mut GrowthState,
    target: usize,
    tendrils: &TendrilParams,
    params: &ScoreParams,
    rng: &mut R,
) -> TendrilOutcome {
    let mut outcome = TendrilOutcome::default();
    if state.len() >= target {
        return outcome;
    }

    if tendrils.count > 0 {
        let lengths: Vec<usize> = (0..tendrils.count)
            .map(|_| rng.range_inclusive(tendrils.min_length, tendrils.max_length))
            .collect();

        for length in lengths {
            if state.len() >= target {
                break;
            }
            let open = state.open_cells();
            if open.is_empty() {
                break;
            }
            let Some((start, directions)) = open.get(rng.below(open.len())) else {
                break;
            };
            let Some(&direction) = directions.get(rng.below(directions.len())) else {
                break;
            };

            let (placed, end) = walk(
                state, *start, direction, length, target, tendrils, params, rng,
            );
            trace!(length, placed, ?end, "tendril walk finished");
            if placed > 0 {
                outcome.tendrils_grown += 1;
                outcome.cells_from_tendrils += placed;
            }
        }
    }

    if state.len() < target {
        outcome.cells_from_fill = fill_greedily(state, target, params);
    }

    debug!(
        tendrils = outcome.tendrils_grown,
        tendril_cells = outcome.cells_from_tendrils,
        fill_cells = outcome.cells_from_fill,
        size = state.len(),
        "tendril extension finished"
    );
    outcome
}

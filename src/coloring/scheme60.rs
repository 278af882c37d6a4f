//! Scheme60 coloring: concentric zones around the centroid
//!
//! Hexes are ranked by distance from the centroid of all hex centers and cut
//! into a 60% inner zone, a 30% middle zone and the remaining outer zone.
//! Each zone prefers one role color and falls back through the others once
//! that color's quota runs out.

use crate::algorithm::selection::RandomSource;
use crate::coloring::ColorRoles;
use crate::coloring::gradient::ascending_order;
use crate::io::configuration::{DOMINANT_ZONE_SHARE, SECONDARY_ZONE_SHARE};
use crate::io::error::{LayoutError, Result};
use crate::math::principal::centroid;
use crate::spatial::hex::{Hex, axial_to_pixel};

/// Sizes of the inner, middle and outer zones for `count` hexes
///
/// Inner and middle sizes are rounded half to even; the outer zone takes the
/// remainder.
pub fn zone_sizes(count: usize) -> [usize; 3] {
    let share = |fraction: f64| (fraction * count as f64).round_ties_even() as usize;
    let inner = share(DOMINANT_ZONE_SHARE).min(count);
    let middle = share(SECONDARY_ZONE_SHARE).min(count - inner);
    [inner, middle, count - inner - middle]
}

/// Distance of each hex center from the centroid of all centers
pub fn centroid_distances(hexes: &[Hex], radius: f64) -> Vec<f64> {
    let Some([cx, cy]) = centroid(hexes, radius) else {
        return Vec::new();
    };
    hexes
        .iter()
        .map(|&hex| {
            let [x, y] = axial_to_pixel(hex, radius);
            (x - cx).hypot(y - cy)
        })
        .collect()
}

/// Remaining quota per color, consumed as hexes are colored
struct QuotaLedger {
    remaining: Vec<usize>,
}

impl QuotaLedger {
    fn new(quotas: &[usize]) -> Self {
        Self {
            remaining: quotas.to_vec(),
        }
    }

    fn available(&self, color: usize) -> bool {
        self.remaining.get(color).is_some_and(|&left| left > 0)
    }

    /// Preferred color, then fallbacks in order, then any color with quota
    fn pick(&self, preferred: usize, fallbacks: &[usize]) -> Option<usize> {
        std::iter::once(preferred)
            .chain(fallbacks.iter().copied())
            .find(|&color| self.available(color))
            .or_else(|| (0..self.remaining.len()).find(|&color| self.available(color)))
    }

    fn consume(&mut self, color: usize) {
        if let Some(left) = self.remaining.get_mut(color) {
            *left = left.saturating_sub(1);
        }
    }
}

/// Color hexes by radial zone with role preferences
///
/// # Errors
///
/// Returns [`LayoutError::QuotaExhausted`] if a hex finds no color with
/// remaining quota. Quotas summing to at least the hex count rule this out,
/// so the error signals a broken invariant.
pub fn assign_scheme60<R: RandomSource>(
    hexes: &[Hex],
    quotas: &[usize],
    roles: ColorRoles,
    radius: f64,
    rng: &mut R,
) -> Result<Vec<usize>> {
    let distances = centroid_distances(hexes, radius);
    let ranked = ascending_order(&distances);
    let [inner, middle, _] = zone_sizes(hexes.len());

    let (inner_zone, rest) = ranked.split_at(inner);
    let (middle_zone, outer_zone) = rest.split_at(middle);

    let others = |preferred: usize| -> Vec<usize> {
        (0..quotas.len()).filter(|&color| color != preferred).collect()
    };

    let mut ledger = QuotaLedger::new(quotas);
    let mut colors: Vec<Option<usize>> = vec![None; hexes.len()];

    for (zone_name, zone, preferred) in [
        ("dominant", inner_zone, roles.dominant),
        ("secondary", middle_zone, roles.secondary),
        ("accent", outer_zone, roles.accent),
    ] {
        let mut members = zone.to_vec();
        rng.shuffle(&mut members);
        let fallbacks = others(preferred);

        for hex_index in members {
            let color = ledger
                .pick(preferred, &fallbacks)
                .ok_or(LayoutError::QuotaExhausted {
                    zone: zone_name,
                    position: hex_index,
                })?;
            ledger.consume(color);
            if let Some(slot) = colors.get_mut(hex_index) {
                *slot = Some(color);
            }
        }
    }

    colors
        .into_iter()
        .enumerate()
        .map(|(position, color)| {
            color.ok_or(LayoutError::QuotaExhausted {
                zone: "unassigned",
                position,
            })
        })
        .collect()
}

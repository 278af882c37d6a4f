//! Gradient coloring: consecutive bands along a projection axis
//!
//! Bands are sized exactly by quota while walking the sorted projection, so
//! no relabeling pass is needed afterwards.

use crate::algorithm::selection::RandomSource;
use crate::coloring::GradientAxis;
use crate::io::configuration::GRADIENT_JITTER_SCALE;
use crate::math::principal::principal_axis;
use crate::spatial::hex::{Hex, axial_to_pixel};

/// Unit vector for `axis`, resolving auto/principal from the shape
pub fn projection_axis(hexes: &[Hex], radius: f64, axis: GradientAxis) -> [f64; 2] {
    match axis {
        GradientAxis::Auto | GradientAxis::Principal => principal_axis(hexes, radius),
        GradientAxis::X => [1.0, 0.0],
        GradientAxis::Y => [0.0, 1.0],
    }
}

/// Projection of each hex onto `axis`, plus jitter that breaks ties
///
/// Jitter is Gaussian with standard deviation scaled by the radius, drawn in
/// hex order.
pub fn jittered_projections<R: RandomSource>(
    hexes: &[Hex],
    radius: f64,
    axis: [f64; 2],
    rng: &mut R,
) -> Vec<f64> {
    let projections: Vec<f64> = hexes
        .iter()
        .map(|&hex| {
            let [x, y] = axial_to_pixel(hex, radius);
            x.mul_add(axis[0], y * axis[1])
        })
        .collect();

    projections
        .into_iter()
        .map(|projection| projection + rng.gaussian(GRADIENT_JITTER_SCALE * radius))
        .collect()
}

/// Hex indices sorted by ascending value (stable)
pub fn ascending_order(values: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    indices.sort_by(|&a, &b| {
        let va = values.get(a).copied().unwrap_or(0.0);
        let vb = values.get(b).copied().unwrap_or(0.0);
        va.total_cmp(&vb)
    });
    indices
}

/// Color hexes in bands along an axis, following `order`
///
/// Walking the jittered projection from low to high, each color of `order`
/// takes exactly its quota of consecutive positions. Positions left over
/// (only possible when quotas fall short of the hex count) take the final
/// color of the order.
pub fn assign_gradient<R: RandomSource>(
    hexes: &[Hex],
    quotas: &[usize],
    axis: GradientAxis,
    order: &[usize],
    radius: f64,
    rng: &mut R,
) -> Vec<usize> {
    let direction = projection_axis(hexes, radius, axis);
    let projections = jittered_projections(hexes, radius, direction, rng);
    let sorted = ascending_order(&projections);

    let mut colors: Vec<Option<usize>> = vec![None; hexes.len()];
    let mut bands = order.iter().flat_map(|&color| {
        let quota = quotas.get(color).copied().unwrap_or(0);
        std::iter::repeat_n(color, quota)
    });
    for &hex_index in &sorted {
        let Some(color) = bands.next() else {
            break;
        };
        if let Some(slot) = colors.get_mut(hex_index) {
            *slot = Some(color);
        }
    }

    let last = order.last().copied().unwrap_or(0);
    colors
        .into_iter()
        .map(|color| color.unwrap_or(last))
        .collect()
}

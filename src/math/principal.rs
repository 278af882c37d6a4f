//! Covariance analysis of hex pixel positions
//!
//! Positions are gathered into an `n × 2` matrix; the sample covariance is
//! its centered Gram matrix divided by `n − 1`. The 2×2 symmetric eigenproblem
//! is solved in closed form.

use ndarray::{Array2, Axis};

use crate::spatial::hex::{Hex, axial_to_pixel};

/// Eigenvalues below this are treated as zero
const EIGEN_EPSILON: f64 = 1e-9;

/// Pixel positions of `hexes` as an `n × 2` matrix
pub fn position_matrix(hexes: &[Hex], radius: f64) -> Array2<f64> {
    let mut positions = Array2::<f64>::zeros((hexes.len(), 2));
    for (mut row, &hex) in positions.axis_iter_mut(Axis(0)).zip(hexes) {
        let [x, y] = axial_to_pixel(hex, radius);
        row[0] = x;
        row[1] = y;
    }
    positions
}

/// Mean position of `hexes`, or `None` for an empty set
pub fn centroid(hexes: &[Hex], radius: f64) -> Option<[f64; 2]> {
    let positions = position_matrix(hexes, radius);
    let mean = positions.mean_axis(Axis(0))?;
    Some([mean[0], mean[1]])
}

/// Sample covariance `[[xx, xy], [xy, yy]]` of hex positions
///
/// The divisor is `max(1, n − 1)`; an empty set has zero covariance.
pub fn covariance(hexes: &[Hex], radius: f64) -> [[f64; 2]; 2] {
    let positions = position_matrix(hexes, radius);
    let Some(mean) = positions.mean_axis(Axis(0)) else {
        return [[0.0; 2]; 2];
    };
    let centered = &positions - &mean;
    let divisor = hexes.len().saturating_sub(1).max(1) as f64;
    let gram = centered.t().dot(&centered) / divisor;
    [[gram[[0, 0]], gram[[0, 1]]], [gram[[1, 0]], gram[[1, 1]]]]
}

/// Eigenvalues `(λmax, λmin)` of a symmetric 2×2 matrix
pub fn symmetric_eigenvalues(matrix: [[f64; 2]; 2]) -> (f64, f64) {
    let [[a, b], [_, c]] = matrix;
    let mean = (a + c) / 2.0;
    let spread = ((a - c) / 2.0).hypot(b);
    (mean + spread, mean - spread)
}

/// Unit vector along the dominant eigenvector of the position covariance
///
/// This is the long axis of the shape. Isotropic or degenerate sets fall
/// back to the horizontal axis. The sign is normalized so the vector points
/// into the half-plane `x > 0` (or `y > 0` when vertical).
pub fn principal_axis(hexes: &[Hex], radius: f64) -> [f64; 2] {
    let matrix = covariance(hexes, radius);
    let [[a, b], [_, c]] = matrix;
    let (lambda_max, lambda_min) = symmetric_eigenvalues(matrix);

    if lambda_max - lambda_min <= EIGEN_EPSILON {
        return [1.0, 0.0];
    }

    let (vx, vy) = if b.abs() > EIGEN_EPSILON {
        (lambda_max - c, b)
    } else if a >= c {
        (1.0, 0.0)
    } else {
        (0.0, 1.0)
    };

    let norm = vx.hypot(vy);
    let (vx, vy) = (vx / norm, vy / norm);
    if vx < 0.0 || (vx == 0.0 && vy < 0.0) {
        [-vx, -vy]
    } else {
        [vx, vy]
    }
}

/// Covariance eccentricity `(λmax − λmin) / (λmax + λmin)` in `[0, 1]`
///
/// Higher is skinnier. Sets with fewer than three hexes score zero.
pub fn eccentricity(hexes: &[Hex], radius: f64) -> f64 {
    if hexes.len() < 3 {
        return 0.0;
    }
    let (lambda_max, lambda_min) = symmetric_eigenvalues(covariance(hexes, radius));
    let total = lambda_max + lambda_min;
    if total <= EIGEN_EPSILON {
        return 0.0;
    }
    ((lambda_max - lambda_min) / total).clamp(0.0, 1.0)
}

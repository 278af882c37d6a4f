//! Numerically stable softmax and first-maximum selection

/// Convert raw scores into a probability distribution
///
/// Numerically stable softmax: the maximum score is subtracted before
/// exponentiating. If any score is NaN or infinite the result is uniform.
/// An empty slice yields an empty distribution.
pub fn stable_softmax(scores: &[f64]) -> Vec<f64> {
    if scores.is_empty() {
        return Vec::new();
    }

    if scores.iter().any(|score| !score.is_finite()) {
        let uniform = 1.0 / scores.len() as f64;
        return vec![uniform; scores.len()];
    }

    let max_score = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let shifted: Vec<f64> = scores.iter().map(|&s| (s - max_score).exp()).collect();
    let total: f64 = shifted.iter().sum();

    shifted.iter().map(|&weight| weight / total).collect()
}

/// Index of the first maximum in `values`, ignoring NaN entries
pub fn argmax_first(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, &value) in values.iter().enumerate() {
        if value.is_nan() {
            continue;
        }
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((index, value)),
        }
    }
    best.map(|(index, _)| index)
}

//! Random coloring: a shuffled quota multiset

use crate::algorithm::selection::RandomSource;

/// Shuffle the quota multiset into a color list of length `len`
///
/// Each palette index appears exactly as often as its quota. The shuffled
/// list is truncated, or padded with index 0, to exactly `len` entries.
pub fn assign_random<R: RandomSource>(len: usize, quotas: &[usize], rng: &mut R) -> Vec<usize> {
    let mut palette: Vec<usize> = quotas
        .iter()
        .enumerate()
        .flat_map(|(index, &quota)| std::iter::repeat_n(index, quota))
        .collect();

    rng.shuffle(&mut palette);
    palette.resize(len, 0);
    palette
}

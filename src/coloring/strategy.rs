//! Strategy identifiers, scheme60 roles and dispatch

use std::str::FromStr;

use crate::algorithm::selection::RandomSource;
use crate::coloring::{gradient, random, scheme60};
use crate::io::error::{Result, unsupported_strategy};
use crate::spatial::hex::Hex;

/// Projection axis for the gradient strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientAxis {
    /// Principal axis of the shape
    #[default]
    Auto,
    /// Principal axis of the shape (explicit spelling)
    Principal,
    /// Horizontal pixel axis
    X,
    /// Vertical pixel axis
    Y,
}

impl FromStr for GradientAxis {
    type Err = crate::LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "principal" => Ok(Self::Principal),
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            _ => Err(unsupported_strategy(s)),
        }
    }
}

/// Palette indices playing each scheme60 role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRoles {
    /// Color preferred in the innermost zone
    pub dominant: usize,
    /// Color preferred in the middle zone
    pub secondary: usize,
    /// Color preferred in the outer zone
    pub accent: usize,
}

impl ColorRoles {
    /// Default roles: the colors with the largest, second and third largest
    /// quotas (ties go to the lower index; missing ranks fall back to 0)
    pub fn from_quotas(quotas: &[usize]) -> Self {
        let mut ranked: Vec<usize> = (0..quotas.len()).collect();
        ranked.sort_by_key(|&index| std::cmp::Reverse(quotas.get(index).copied().unwrap_or(0)));
        let rank = |position: usize| ranked.get(position).copied().unwrap_or(0);
        Self {
            dominant: rank(0),
            secondary: rank(1),
            accent: rank(2),
        }
    }
}

/// Strategy identifier without parameters
///
/// Parsing rejects unknown identifiers instead of substituting a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// See [`ColorStrategy::Random`]
    Random,
    /// See [`ColorStrategy::Gradient`]
    Gradient,
    /// See [`ColorStrategy::Scheme60`]
    Scheme60,
}

impl FromStr for ColorMode {
    type Err = crate::LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "gradient" => Ok(Self::Gradient),
            "scheme60" => Ok(Self::Scheme60),
            _ => Err(unsupported_strategy(s)),
        }
    }
}

/// Color strategy with its parameters
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ColorStrategy {
    /// Shuffle the quota multiset; no spatial structure
    #[default]
    Random,
    /// Bands of color along a projection axis
    Gradient {
        /// Axis to project onto
        axis: GradientAxis,
        /// Band order as a permutation of palette indices (identity if `None`)
        order: Option<Vec<usize>>,
    },
    /// Concentric zones preferring dominant, secondary and accent colors
    Scheme60 {
        /// Explicit roles, or `None` to derive them from the quotas
        roles: Option<ColorRoles>,
    },
}

impl ColorStrategy {
    /// Identifier of this strategy
    pub const fn mode(&self) -> ColorMode {
        match self {
            Self::Random => ColorMode::Random,
            Self::Gradient { .. } => ColorMode::Gradient,
            Self::Scheme60 { .. } => ColorMode::Scheme60,
        }
    }

    /// Canonical lowercase name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Gradient { .. } => "gradient",
            Self::Scheme60 { .. } => "scheme60",
        }
    }
}

/// Assign a palette index to every hex according to `strategy`
///
/// # Errors
///
/// Returns [`crate::LayoutError::QuotaExhausted`] if scheme60 runs out of
/// quota, which cannot happen when quotas sum to at least the hex count.
pub fn assign_colors<R: RandomSource>(
    hexes: &[Hex],
    quotas: &[usize],
    strategy: &ColorStrategy,
    radius: f64,
    rng: &mut R,
) -> Result<Vec<usize>> {
    match strategy {
        ColorStrategy::Random => Ok(random::assign_random(hexes.len(), quotas, rng)),
        ColorStrategy::Gradient { axis, order } => {
            let identity: Vec<usize> = (0..quotas.len()).collect();
            let order = order.as_deref().unwrap_or(&identity);
            Ok(gradient::assign_gradient(
                hexes, quotas, *axis, order, radius, rng,
            ))
        }
        ColorStrategy::Scheme60 { roles } => {
            let roles = roles.unwrap_or_else(|| ColorRoles::from_quotas(quotas));
            scheme60::assign_scheme60(hexes, quotas, roles, radius, rng)
        }
    }
}

//! Validated, immutable layout configuration
//!
//! A [`LayoutConfig`] can only be obtained from [`LayoutConfigBuilder::build`],
//! which rejects every invalid combination before any growth begins.

use crate::coloring::{ColorRoles, ColorStrategy};
use crate::io::configuration::{
    DEFAULT_ADHERENCE, DEFAULT_ASPECT, DEFAULT_COMPACTNESS_BIAS, DEFAULT_DIRECTION_VARIABILITY,
    DEFAULT_RADIUS, DEFAULT_TENDRIL_LENGTH, DEFAULT_TENDRILS, MAX_COLORS,
};
use crate::io::error::{Result, invalid_parameter};

/// Target width:height proportions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectTarget {
    /// Width component
    pub width: f64,
    /// Height component
    pub height: f64,
}

impl AspectTarget {
    /// Create a target from width and height components
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height
    pub fn ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// Tendril count, length range and meander
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TendrilParams {
    /// Number of tendrils to attempt
    pub count: usize,
    /// Minimum tendril length (inclusive)
    pub min_length: usize,
    /// Maximum tendril length (inclusive)
    pub max_length: usize,
    /// Probability of turning 60° after each placed cell
    pub direction_variability: f64,
}

impl Default for TendrilParams {
    fn default() -> Self {
        Self {
            count: DEFAULT_TENDRILS,
            min_length: DEFAULT_TENDRIL_LENGTH.0,
            max_length: DEFAULT_TENDRIL_LENGTH.1,
            direction_variability: DEFAULT_DIRECTION_VARIABILITY,
        }
    }
}

/// Ordered color identifiers with per-color tile quotas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
    quotas: Vec<usize>,
}

impl Palette {
    /// Color identifiers, in palette order
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Tile quota of each color, parallel to [`Self::colors`]
    pub fn quotas(&self) -> &[usize] {
        &self.quotas
    }

    /// Number of colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no colors (never true once validated)
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Identifier of the color at `index`
    pub fn color(&self, index: usize) -> Option<&str> {
        self.colors.get(index).map(String::as_str)
    }
}

/// Complete configuration for generating one layout
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    total_tiles: usize,
    radius: f64,
    aspect: AspectTarget,
    adherence: f64,
    compactness_bias: f64,
    tendrils: TendrilParams,
    strategy: ColorStrategy,
    palette: Palette,
}

impl LayoutConfig {
    /// Start building a configuration for `total_tiles` tiles and a palette
    pub fn builder<S: Into<String>>(
        total_tiles: usize,
        colors: impl IntoIterator<Item = S>,
        quotas: impl IntoIterator<Item = usize>,
    ) -> LayoutConfigBuilder {
        LayoutConfigBuilder {
            total_tiles,
            radius: DEFAULT_RADIUS,
            aspect: AspectTarget::new(DEFAULT_ASPECT.0, DEFAULT_ASPECT.1),
            adherence: DEFAULT_ADHERENCE,
            compactness_bias: DEFAULT_COMPACTNESS_BIAS,
            tendrils: TendrilParams::default(),
            strategy: ColorStrategy::Random,
            colors: colors.into_iter().map(Into::into).collect(),
            quotas: quotas.into_iter().collect(),
        }
    }

    /// Requested number of tiles
    pub const fn total_tiles(&self) -> usize {
        self.total_tiles
    }

    /// Hex circumradius in plot units
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Target proportions
    pub const fn aspect(&self) -> AspectTarget {
        self.aspect
    }

    /// Target width:height ratio
    pub fn target_ratio(&self) -> f64 {
        self.aspect.ratio()
    }

    /// Aspect adherence dial in `[0, 1]`
    pub const fn adherence(&self) -> f64 {
        self.adherence
    }

    /// Relative weight of the compactness term in `[0, 1]`
    pub const fn compactness_bias(&self) -> f64 {
        self.compactness_bias
    }

    /// Tendril parameters
    pub const fn tendrils(&self) -> &TendrilParams {
        &self.tendrils
    }

    /// Color assignment strategy
    pub const fn strategy(&self) -> &ColorStrategy {
        &self.strategy
    }

    /// Palette and quotas
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }
}

/// Builder for [`LayoutConfig`]
#[derive(Debug, Clone)]
pub struct LayoutConfigBuilder {
    total_tiles: usize,
    radius: f64,
    aspect: AspectTarget,
    adherence: f64,
    compactness_bias: f64,
    tendrils: TendrilParams,
    strategy: ColorStrategy,
    colors: Vec<String>,
    quotas: Vec<usize>,
}

impl LayoutConfigBuilder {
    /// Set the hex circumradius
    #[must_use]
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Set the target proportions
    #[must_use]
    pub fn aspect(mut self, width: f64, height: f64) -> Self {
        self.aspect = AspectTarget::new(width, height);
        self
    }

    /// Set the aspect adherence dial
    #[must_use]
    pub fn adherence(mut self, adherence: f64) -> Self {
        self.adherence = adherence;
        self
    }

    /// Set the compactness bias
    #[must_use]
    pub fn compactness_bias(mut self, bias: f64) -> Self {
        self.compactness_bias = bias;
        self
    }

    /// Set all tendril parameters
    #[must_use]
    pub fn tendrils(mut self, tendrils: TendrilParams) -> Self {
        self.tendrils = tendrils;
        self
    }

    /// Set the color strategy
    #[must_use]
    pub fn strategy(mut self, strategy: ColorStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Validate every parameter and produce the configuration
    ///
    /// # Errors
    ///
    /// Returns [`crate::LayoutError::InvalidParameter`] if:
    /// - The tile count is zero
    /// - The radius or an aspect component is not positive and finite
    /// - Adherence, compactness bias or direction variability is outside `[0, 1]`
    /// - The tendril length range is empty or starts at zero
    /// - The palette is empty, has more than five colors, or its quotas do not
    ///   match the colors in length or sum to the tile count
    /// - The gradient order is not a permutation of the color indices
    /// - A scheme60 role refers to a color that does not exist
    pub fn build(self) -> Result<LayoutConfig> {
        if self.total_tiles == 0 {
            return Err(invalid_parameter(
                "total_tiles",
                &self.total_tiles,
                &"must be positive",
            ));
        }
        check_positive("radius", self.radius)?;
        check_positive("aspect_w", self.aspect.width)?;
        check_positive("aspect_h", self.aspect.height)?;
        check_unit("aspect_adherence", self.adherence)?;
        check_unit("compactness_bias", self.compactness_bias)?;
        check_unit(
            "tendril_direction_variability",
            self.tendrils.direction_variability,
        )?;

        if self.tendrils.min_length == 0 {
            return Err(invalid_parameter(
                "tendril_len_min",
                &self.tendrils.min_length,
                &"must be at least 1",
            ));
        }
        if self.tendrils.max_length < self.tendrils.min_length {
            return Err(invalid_parameter(
                "tendril_len_max",
                &self.tendrils.max_length,
                &format!("must be >= tendril_len_min ({})", self.tendrils.min_length),
            ));
        }

        let palette = validate_palette(self.colors, self.quotas, self.total_tiles)?;
        validate_strategy(&self.strategy, palette.len())?;

        Ok(LayoutConfig {
            total_tiles: self.total_tiles,
            radius: self.radius,
            aspect: self.aspect,
            adherence: self.adherence,
            compactness_bias: self.compactness_bias,
            tendrils: self.tendrils,
            strategy: self.strategy,
            palette,
        })
    }
}

fn check_positive(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &"must be positive and finite",
        ))
    }
}

fn check_unit(parameter: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid_parameter(parameter, &value, &"must be within [0, 1]"))
    }
}

fn validate_palette(colors: Vec<String>, quotas: Vec<usize>, total_tiles: usize) -> Result<Palette> {
    if colors.is_empty() || colors.len() > MAX_COLORS {
        return Err(invalid_parameter(
            "colors",
            &colors.len(),
            &format!("must contain between 1 and {MAX_COLORS} colors"),
        ));
    }
    if quotas.len() != colors.len() {
        return Err(invalid_parameter(
            "counts",
            &quotas.len(),
            &format!("must have one quota per color ({})", colors.len()),
        ));
    }
    let quota_sum: usize = quotas.iter().sum();
    if quota_sum != total_tiles {
        return Err(invalid_parameter(
            "counts",
            &quota_sum,
            &format!("quotas must sum to total_tiles ({total_tiles})"),
        ));
    }
    Ok(Palette { colors, quotas })
}

fn validate_strategy(strategy: &ColorStrategy, color_count: usize) -> Result<()> {
    match strategy {
        ColorStrategy::Random => Ok(()),
        ColorStrategy::Gradient { order, .. } => {
            let Some(order) = order else {
                return Ok(());
            };
            let mut seen = vec![false; color_count];
            let is_permutation = order.len() == color_count
                && order.iter().all(|&index| {
                    seen.get_mut(index)
                        .is_some_and(|slot| !std::mem::replace(slot, true))
                });
            if is_permutation {
                Ok(())
            } else {
                Err(invalid_parameter(
                    "gradient_order",
                    &format!("{order:?}"),
                    &format!("must be a permutation of 0..{color_count}"),
                ))
            }
        }
        ColorStrategy::Scheme60 { roles } => roles
            .as_ref()
            .map_or(Ok(()), |roles| validate_roles(roles, color_count)),
    }
}

fn validate_roles(roles: &ColorRoles, color_count: usize) -> Result<()> {
    for (role, index) in [
        ("roles.dominant", roles.dominant),
        ("roles.secondary", roles.secondary),
        ("roles.accent", roles.accent),
    ] {
        if index >= color_count {
            return Err(invalid_parameter(
                role,
                &index,
                &format!("must index one of the {color_count} colors"),
            ));
        }
    }
    Ok(())
}

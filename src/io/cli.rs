//! Command-line interface for batch layout generation and export

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use tracing::{info, warn};

use crate::algorithm::config::{LayoutConfig, TendrilParams};
use crate::algorithm::executor::{LayoutResult, generate_layout};
use crate::analysis::metrics::PhysicalScale;
use crate::coloring::{ColorMode, ColorRoles, ColorStrategy, GradientAxis};
use crate::io::configuration::{
    DEFAULT_ADHERENCE, DEFAULT_COLORS, DEFAULT_COMPACTNESS_BIAS, DEFAULT_DIRECTION_VARIABILITY,
    DEFAULT_LAYOUTS, DEFAULT_LOG_FILTER, DEFAULT_OUTPUT_DIR, DEFAULT_RADIUS, DEFAULT_SEED,
    DEFAULT_TENDRILS, DEFAULT_TOTAL_TILES, OUTPUT_PREFIX, VERBOSE_LOG_FILTER,
};
use crate::io::error::Result;
use crate::io::export::export_layout_as_csv;
use crate::io::image::export_layout_as_png;
use crate::io::progress::ProgressManager;

#[derive(Parser, Debug)]
#[command(name = "hexcluster")]
#[command(
    author,
    version,
    about = "Generate connected hex tile layouts that approximate a target aspect ratio"
)]
/// Command-line arguments for the layout generator
// Output toggles and verbosity are independent switches
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Number of tiles per layout
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOTAL_TILES)]
    pub tiles: usize,

    /// Target aspect ratio as W:H or WxH
    #[arg(short, long, default_value = "4:3", value_parser = parse_aspect)]
    pub aspect: (f64, f64),

    /// How strictly growth follows the target aspect, in [0, 1]
    #[arg(long, default_value_t = DEFAULT_ADHERENCE)]
    pub adherence: f64,

    /// Relative weight of compactness against aspect, in [0, 1]
    #[arg(long, default_value_t = DEFAULT_COMPACTNESS_BIAS)]
    pub compactness: f64,

    /// Hex circumradius in plot units
    #[arg(long, default_value_t = DEFAULT_RADIUS)]
    pub radius: f64,

    /// Number of tendrils to grow
    #[arg(short, long, default_value_t = DEFAULT_TENDRILS)]
    pub tendrils: usize,

    /// Tendril length as MIN,MAX or MIN:MAX or a single N
    #[arg(long, default_value = "2,4", value_parser = parse_length_range)]
    pub tendril_len: (usize, usize),

    /// Probability that a tendril turns after each cell, in [0, 1]
    #[arg(long, default_value_t = DEFAULT_DIRECTION_VARIABILITY)]
    pub variability: f64,

    /// Color strategy: random, gradient or scheme60
    #[arg(short = 'm', long, default_value = "random")]
    pub color_mode: String,

    /// Comma-separated color identifiers (1 to 5)
    #[arg(short, long, value_delimiter = ',')]
    pub colors: Option<Vec<String>>,

    /// Comma-separated tile count per color (defaults to an even split)
    #[arg(long, value_delimiter = ',')]
    pub counts: Option<Vec<usize>>,

    /// Gradient axis: auto, principal, x or y
    #[arg(long, default_value = "auto")]
    pub gradient_axis: String,

    /// Gradient band order as comma-separated color indices
    #[arg(long, value_delimiter = ',')]
    pub gradient_order: Option<Vec<usize>>,

    /// Scheme60 dominant color index
    #[arg(long)]
    pub dominant: Option<usize>,

    /// Scheme60 secondary color index
    #[arg(long)]
    pub secondary: Option<usize>,

    /// Scheme60 accent color index
    #[arg(long)]
    pub accent: Option<usize>,

    /// Seed of the first layout; later layouts use the following seeds
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of layouts to generate
    #[arg(short, long, default_value_t = DEFAULT_LAYOUTS)]
    pub layouts: usize,

    /// Directory for exported files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Export each layout as a transparent PNG
    #[arg(long)]
    pub png: bool,

    /// Export each layout as CSV
    #[arg(long)]
    pub csv: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log engine phases at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log filter used when `RUST_LOG` is not set
    pub const fn log_filter(&self) -> &'static str {
        if self.verbose {
            VERBOSE_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        }
    }

    /// Palette colors, falling back to the default palette
    pub fn palette_colors(&self) -> Vec<String> {
        self.colors.clone().unwrap_or_else(|| {
            DEFAULT_COLORS
                .iter()
                .map(|&color| color.to_owned())
                .collect()
        })
    }

    /// Parse the strategy flags into a [`ColorStrategy`]
    ///
    /// Unset scheme60 roles fall back to the quota ranking.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LayoutError::UnsupportedStrategy`] for an unknown
    /// mode or axis.
    pub fn color_strategy(&self, quotas: &[usize]) -> Result<ColorStrategy> {
        let strategy = match self.color_mode.parse::<ColorMode>()? {
            ColorMode::Random => ColorStrategy::Random,
            ColorMode::Gradient => ColorStrategy::Gradient {
                axis: self.gradient_axis.parse::<GradientAxis>()?,
                order: self.gradient_order.clone(),
            },
            ColorMode::Scheme60 => {
                let roles = (self.dominant.is_some()
                    || self.secondary.is_some()
                    || self.accent.is_some())
                .then(|| {
                    let ranked = ColorRoles::from_quotas(quotas);
                    ColorRoles {
                        dominant: self.dominant.unwrap_or(ranked.dominant),
                        secondary: self.secondary.unwrap_or(ranked.secondary),
                        accent: self.accent.unwrap_or(ranked.accent),
                    }
                });
                ColorStrategy::Scheme60 { roles }
            }
        };
        Ok(strategy)
    }

    /// Build and validate the layout configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any flag is out of range or the
    /// palette and counts do not line up.
    pub fn build_config(&self) -> Result<LayoutConfig> {
        let colors = self.palette_colors();
        let quotas = self
            .counts
            .clone()
            .unwrap_or_else(|| even_quotas(self.tiles, colors.len()));
        let strategy = self.color_strategy(&quotas)?;
        let (min_length, max_length) = self.tendril_len;

        LayoutConfig::builder(self.tiles, colors, quotas)
            .radius(self.radius)
            .aspect(self.aspect.0, self.aspect.1)
            .adherence(self.adherence)
            .compactness_bias(self.compactness)
            .tendrils(TendrilParams {
                count: self.tendrils,
                min_length,
                max_length,
                direction_variability: self.variability,
            })
            .strategy(strategy)
            .build()
    }
}

/// Split `total` tiles evenly across `colors`, remainder to the first colors
pub fn even_quotas(total: usize, colors: usize) -> Vec<usize> {
    if colors == 0 {
        return Vec::new();
    }
    let base = total / colors;
    let remainder = total % colors;
    (0..colors)
        .map(|index| base + usize::from(index < remainder))
        .collect()
}

/// Parse `W:H` or `WxH` into positive finite components
///
/// # Errors
///
/// Returns a message if the text has no separator or a component is not a
/// positive number.
pub fn parse_aspect(text: &str) -> std::result::Result<(f64, f64), String> {
    let (width, height) = text
        .split_once(':')
        .or_else(|| text.split_once(['x', 'X']))
        .ok_or_else(|| format!("expected W:H or WxH, got '{text}'"))?;
    let component = |part: &str| -> std::result::Result<f64, String> {
        let value: f64 = part
            .trim()
            .parse()
            .map_err(|_| format!("'{part}' is not a number"))?;
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(format!("aspect components must be positive, got '{part}'"))
        }
    };
    Ok((component(width)?, component(height)?))
}

/// Parse `MIN,MAX`, `MIN:MAX` or a single `N` into an inclusive range
///
/// Range validity is checked when the configuration is built.
///
/// # Errors
///
/// Returns a message if a bound is not a non-negative integer.
pub fn parse_length_range(text: &str) -> std::result::Result<(usize, usize), String> {
    let bound = |part: &str| -> std::result::Result<usize, String> {
        part.trim()
            .parse()
            .map_err(|_| format!("'{part}' is not a tendril length"))
    };
    match text.split_once([',', ':']) {
        Some((low, high)) => Ok((bound(low)?, bound(high)?)),
        None => {
            let length = bound(text)?;
            Ok((length, length))
        }
    }
}

/// Generates a batch of layouts and writes the requested exports
pub struct BatchRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli
            .should_show_progress()
            .then(|| ProgressManager::new(cli.layouts));

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate every layout of the batch
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - A layout fails to generate
    /// - An export cannot be written
    pub fn run(&mut self) -> Result<Vec<LayoutResult>> {
        let config = self.cli.build_config()?;
        info!(
            tiles = config.total_tiles(),
            layouts = self.cli.layouts,
            strategy = config.strategy().name(),
            seed = self.cli.seed,
            "starting batch"
        );

        let mut results = Vec::with_capacity(self.cli.layouts);
        for offset in 0..self.cli.layouts as u64 {
            let seed = self.cli.seed.wrapping_add(offset);
            if let Some(ref pm) = self.progress_manager {
                pm.start_layout(seed);
            }

            let start_time = Instant::now();
            let result = generate_layout(&config, seed)?;
            self.report(&result, &config, start_time.elapsed().as_secs_f64());
            self.export(&result, &config)?;

            if let Some(ref pm) = self.progress_manager {
                pm.complete_layout();
            }
            results.push(result);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(results)
    }

    fn report(&self, result: &LayoutResult, config: &LayoutConfig, seconds: f64) {
        if result.is_partial() {
            warn!(
                seed = result.seed(),
                achieved = result.achieved(),
                requested = result.requested(),
                "partial layout"
            );
        }

        let Some(metrics) = result.metrics(config) else {
            return;
        };
        let (width_in, height_in) =
            PhysicalScale::standard(config.radius()).dimensions(&metrics.bounds);
        info!(
            seed = result.seed(),
            tiles = result.achieved(),
            ratio = %format!("{:.3}", metrics.aspect_ratio),
            deviation_pct = %format!("{:.1}", metrics.deviation_percent),
            size_in = %format!("{width_in:.1} x {height_in:.1}"),
            components = metrics.components,
            seconds = %format!("{seconds:.3}"),
            output = %self.cli.output.display(),
            "layout ready"
        );
    }

    fn export(&self, result: &LayoutResult, config: &LayoutConfig) -> Result<()> {
        if self.cli.png {
            let path = output_path(&self.cli.output, result.seed(), "png");
            export_layout_as_png(result.hexes(), result.colors(), config.radius(), &path)?;
        }
        if self.cli.csv {
            let path = output_path(&self.cli.output, result.seed(), "csv");
            export_layout_as_csv(result.hexes(), result.colors(), config.radius(), &path)?;
        }
        Ok(())
    }
}

/// Path of the `extension` export for `seed` inside `directory`
pub fn output_path(directory: &Path, seed: u64, extension: &str) -> PathBuf {
    directory.join(format!("{OUTPUT_PREFIX}{seed}.{extension}"))
}

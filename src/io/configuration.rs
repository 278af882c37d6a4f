//! Algorithm constants and runtime configuration defaults

// Candidate scoring
/// Base steepness of the Gaussian aspect penalty
pub const ASPECT_STEEPNESS_BASE: f64 = 4.0;
/// Additional steepness applied at full adherence
pub const ASPECT_STEEPNESS_RANGE: f64 = 18.0;
/// Weight of the aspect term at zero adherence
pub const ASPECT_WEIGHT_BASE: f64 = 0.65;
/// Additional aspect weight applied at full adherence
pub const ASPECT_WEIGHT_RANGE: f64 = 0.30;
/// Floor added to every score so no candidate is ever impossible
pub const SCORE_FLOOR: f64 = 1e-6;
/// Softmax temperature for growth draws; scores lie in `(0, 1]`, so
/// without tempering the best candidate is at most `e` times likelier than
/// the worst
pub const GROWTH_SOFTMAX_TEMPERATURE: f64 = 0.08;

// Clamps keep ratios and logarithms finite for degenerate boxes
/// Smallest box extent used when forming an aspect ratio
pub const MIN_EXTENT: f64 = 1e-6;
/// Smallest ratio quotient passed to the logarithm
pub const MIN_RATIO_QUOTIENT: f64 = 1e-9;

// Aspect tolerances (log-space), loosest at zero adherence
/// Growth tolerance at zero adherence
pub const GROWTH_TOLERANCE_LOOSE: f64 = 0.40;
/// Growth tolerance tightening applied at full adherence
pub const GROWTH_TOLERANCE_SPAN: f64 = 0.33;
/// Tendril tolerance at zero adherence
pub const TENDRIL_TOLERANCE_LOOSE: f64 = 0.45;
/// Tendril tolerance tightening applied at full adherence
pub const TENDRIL_TOLERANCE_SPAN: f64 = 0.35;
/// Score multiplier for growth candidates outside tolerance
pub const OUT_OF_TOLERANCE_PENALTY: f64 = 0.10;
/// Cluster size above which the tolerance penalty applies
pub const TOLERANCE_MIN_CLUSTER: usize = 3;

// Driver
/// Share of tiles grown as the base blob at zero adherence
pub const BASE_FRACTION_LOOSE: f64 = 0.75;
/// Additional base share applied at full adherence
pub const BASE_FRACTION_RANGE: f64 = 0.20;

// Coloring
/// Standard deviation of gradient jitter, in units of the hex radius
pub const GRADIENT_JITTER_SCALE: f64 = 0.02;
/// Share of tiles in the innermost scheme60 zone
pub const DOMINANT_ZONE_SHARE: f64 = 0.60;
/// Share of tiles in the middle scheme60 zone
pub const SECONDARY_ZONE_SHARE: f64 = 0.30;
/// Maximum number of palette colors
pub const MAX_COLORS: usize = 5;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default number of tiles
pub const DEFAULT_TOTAL_TILES: usize = 36;
/// Default hex circumradius in plot units
pub const DEFAULT_RADIUS: f64 = 1.0;
/// Default target aspect ratio as (width, height)
pub const DEFAULT_ASPECT: (f64, f64) = (4.0, 3.0);
/// Default aspect adherence dial
pub const DEFAULT_ADHERENCE: f64 = 0.75;
/// Default relative weight of the compactness term
pub const DEFAULT_COMPACTNESS_BIAS: f64 = 0.35;
/// Default number of tendrils
pub const DEFAULT_TENDRILS: usize = 3;
/// Default tendril length range (inclusive)
pub const DEFAULT_TENDRIL_LENGTH: (usize, usize) = (2, 4);
/// Default probability of turning at each tendril step
pub const DEFAULT_DIRECTION_VARIABILITY: f64 = 0.25;
/// Default number of layouts per batch
pub const DEFAULT_LAYOUTS: usize = 3;
/// Default palette used by the command line
pub const DEFAULT_COLORS: [&str; 3] = ["#273c6b", "#92323d", "#d8c03f"];

// Physical scale: a real tile is 12 in tip to tip
/// Real tile circumradius in inches
pub const TILE_CIRCUMRADIUS_INCHES: f64 = 6.0;

// Output settings
/// Pixels per hex circumradius in exported images
pub const PNG_PIXELS_PER_RADIUS: f64 = 40.0;
/// Transparent margin around exported images, in units of the hex radius
pub const PNG_MARGIN_RADII: f64 = 0.5;
/// Prefix for generated output filenames
pub const OUTPUT_PREFIX: &str = "layout_";
/// Default directory for generated files
pub const DEFAULT_OUTPUT_DIR: &str = "layouts";
/// Decimal places for pixel coordinates in CSV exports
pub const CSV_COORDINATE_PRECISION: usize = 6;
/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "hexcluster=info";
/// Log filter used with `--verbose`
pub const VERBOSE_LOG_FILTER: &str = "hexcluster=debug";

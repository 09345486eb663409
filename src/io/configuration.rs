//! Layout constants and runtime configuration defaults

// Canvas and footprint defaults
/// Default canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 1800;
/// Default canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: u32 = 1400;
/// Default side length of one footprint in pixels
pub const DEFAULT_FOOTPRINT_SIZE: u32 = 160;
/// Default maximum overlap between two footprints, as a percentage
pub const DEFAULT_MAX_OVERLAP_PERCENT: f64 = 20.0;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension
pub const MAX_CANVAS_DIMENSION: u32 = 20_000;

// Heart outline
/// Number of parameter steps used to sample the outline curve
pub const HEART_CURVE_STEPS: usize = 300;
/// Curve scale relative to the smaller canvas dimension
pub const HEART_SCALE_FACTOR: f64 = 0.42;
/// Unit multiplier applied to the raw heart curve coefficients
pub const HEART_CURVE_UNIT: f64 = 0.08;

// Density relaxation heuristic
/// Prune the candidate set each time this many points have been accepted
pub const DEFAULT_PRUNE_INTERVAL: usize = 5;
/// Pruning radius as a fraction of the minimum spacing
pub const DEFAULT_PRUNE_RADIUS_FACTOR: f64 = 0.3;
/// Minimum spacing as a fraction of the non-overlapping footprint extent
pub const DEFAULT_MIN_DISTANCE_FACTOR: f64 = 0.8;

// File discovery
/// Image extensions recognised during discovery (compared case-insensitively)
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "bmp", "tiff", "webp"];

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_heart";
/// Suffix added to preview filenames after the output suffix
pub const PREVIEW_SUFFIX: &str = "_preview";
/// Margin kept around drawn content when cropping the preview
pub const PREVIEW_CROP_MARGIN: u32 = 50;

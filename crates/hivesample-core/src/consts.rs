/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Number of channels in a color image (B, G, R).
pub const COLOR_CHANNEL_COUNT: usize = 3;

/// Blob key holding the pre-converted color image.
pub const COLOR_IMAGE_KEY: &str = "colorimg";

/// Blob key holding the raw Bayer mosaic.
pub const RAW_IMAGE_KEY: &str = "img";

/// Blob key holding the capture filename.
pub const FILENAME_KEY: &str = "filename";

/// Blob key holding a sample's top-left anchor `(row, col)`.
pub const ANCHOR_KEY: &str = "start";

/// Extension of photo and sample blob files (without the dot).
pub const PHOTO_EXTENSION: &str = "np";

/// Default directory sample blobs are written to.
pub const DEFAULT_SAMPLE_DIR: &str = "samples";

/// Replacement for characters the host filesystem rejects in file names.
pub const DEFAULT_FILENAME_SUBSTITUTE: char = '%';

/// Characters replaced when turning a capture filename into a file name.
pub const ILLEGAL_FILENAME_CHARS: [char; 9] = [':', '\\', '/', '*', '?', '"', '<', '>', '|'];

/// Separator between entries of a free-text label list.
pub const DEFAULT_LABEL_DELIMITER: char = ';';

/// Multiplier applied to pixel values when rendering for display.
pub const DEFAULT_DISPLAY_GAIN: f32 = 4.0;

/// Upper bound of an 8-bit display channel.
pub const DISPLAY_MAX: f32 = 255.0;

/// Zoom multiplier for a single zoom-in action.
pub const DEFAULT_ZOOM_STEP: f64 = 2.0;

/// Number of trailing characters of the first name segment holding the capture time.
pub const TIMESTAMP_LEN: usize = 17;

/// Number of trailing characters of the second name segment holding the sequence id.
pub const SEQUENCE_ID_LEN: usize = 4;

/// Suffix appended to a pairing source directory to name its default target.
pub const SUBTRACTED_DIR_SUFFIX: &str = "_subtracted";

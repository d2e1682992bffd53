/// Extensions recognized when no `--extensions` list is given.
pub const DEFAULT_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "tiff"];

/// Largest width or height a resized image may have.
pub const MAX_IMAGE_DIMENSION: u32 = 16_384;

pub const PROGRESS_BAR_WIDTH: usize = 50;
pub const PROGRESS_FILLED: char = '#';
pub const PROGRESS_EMPTY: char = '-';
pub const PROGRESS_DONE_LABEL: &str = "done";

/// Prefix of the hidden sibling file an image is encoded into before the rename.
pub const PARTIAL_FILE_PREFIX: &str = ".";
pub const PARTIAL_FILE_SUFFIX: &str = ".partial";

// Common output message prefixes
pub const SUCCESS_PREFIX: &str = "✅";
pub const WARNING_PREFIX: &str = "⚠️";
pub const ERROR_PREFIX: &str = "❌";
pub const INFO_PREFIX: &str = "📋";
pub const VERBOSE_PREFIX: &str = "🔍";

pub mod cli;
pub mod constants;
pub mod error;
pub mod formats;
pub mod logger;
pub mod processing;
pub mod progress;
pub mod validation;
pub mod walker;

pub use error::{ErrorKind, ResizeError, Result};
pub use formats::{format_for_extension, format_for_path, ExtensionSet};
pub use processing::{
    load_image, resize_image, save_image, scaled_dimensions, DimensionRounding, ResizeOptions,
    ResizeOutcome, ScaleFactor, RESAMPLE_FILTER,
};
pub use progress::{render_progress, ConsoleProgress, ProgressObserver, SilentProgress};
pub use walker::{
    collect_image_files, collect_subdirectories, mirror_path, process_directory, FailedEntry,
    ProcessedImage, RunSummary,
};

use crate::constants::PROGRESS_DONE_LABEL;
use crate::error::{ResizeError, Result};
use crate::formats::ExtensionSet;
use crate::processing::{resize_image, ResizeOptions, ResizeOutcome};
use crate::progress::ProgressObserver;
use crate::validation::{ensure_dir, validate_source_dir};
use crate::{verbose, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct ProcessedImage {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub outcome: ResizeOutcome,
}

/// A file or directory that could not be processed, with its classified error.
#[derive(Debug)]
pub struct FailedEntry {
    pub path: PathBuf,
    pub error: ResizeError,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub resized: Vec<ProcessedImage>,
    pub failures: Vec<FailedEntry>,
    pub directories: usize,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn resized_count(&self) -> usize {
        self.resized.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }

    fn record_failure(&mut self, path: &Path, error: ResizeError) {
        warn!("Failed to process {}: {}", path.display(), error);
        self.failures.push(FailedEntry {
            path: path.to_path_buf(),
            error,
        });
    }
}

/// Lists the recognized image files directly under `dir`, sorted by file name.
pub fn collect_image_files(dir: &Path, extensions: &ExtensionSet) -> Result<Vec<PathBuf>> {
    let mut image_files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && extensions.matches(path) {
            image_files.push(path.to_path_buf());
        }
    }

    Ok(image_files)
}

/// Lists the immediate subdirectories of `dir`, sorted by name. Symlinks are not followed.
pub fn collect_subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut subdirectories = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            subdirectories.push(entry.into_path());
        }
    }

    Ok(subdirectories)
}

/// Re-roots `entry` from `source_root` onto `dest_root`, keeping its relative path.
pub fn mirror_path(source_root: &Path, entry: &Path, dest_root: &Path) -> Result<PathBuf> {
    let relative = entry.strip_prefix(source_root).map_err(|_| {
        ResizeError::Argument(format!(
            "{} is not inside {}",
            entry.display(),
            source_root.display()
        ))
    })?;
    Ok(dest_root.join(relative))
}

/// Resizes every recognized image under `source_dir` into the mirrored tree at `dest_dir`.
///
/// Files in a directory are processed in name order before its subdirectories
/// are visited. A failing file or subtree is recorded in the summary and the
/// walk continues. Only an unusable `source_dir` or `dest_dir` aborts the run.
/// Destination subdirectories are created only for directories that receive
/// an image.
pub fn process_directory(
    source_dir: &Path,
    dest_dir: &Path,
    options: &ResizeOptions,
    progress: &mut dyn ProgressObserver,
) -> Result<RunSummary> {
    validate_source_dir(source_dir)?;
    ensure_dir(dest_dir)?;

    let mut walker = DirectoryWalker {
        options,
        progress,
        // Outputs nested inside the source tree must not be walked again.
        dest_root: dest_dir.canonicalize().ok(),
        summary: RunSummary::default(),
    };
    walker.process_level(source_dir, dest_dir);

    Ok(walker.summary)
}

struct DirectoryWalker<'a, 'p> {
    options: &'a ResizeOptions,
    progress: &'p mut dyn ProgressObserver,
    dest_root: Option<PathBuf>,
    summary: RunSummary,
}

impl DirectoryWalker<'_, '_> {
    fn process_level(&mut self, source_dir: &Path, dest_dir: &Path) {
        self.summary.directories += 1;
        verbose!("Entering {}", source_dir.display());

        let image_files = match collect_image_files(source_dir, &self.options.extensions) {
            Ok(files) => files,
            Err(e) => {
                self.summary.record_failure(source_dir, e);
                return;
            }
        };

        let total = image_files.len();
        for (index, source) in image_files.iter().enumerate() {
            let label = source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            self.progress.on_progress(index, total, &label);
            self.process_file(source_dir, source, dest_dir);
        }
        if total > 0 {
            self.progress.on_progress(total, total, PROGRESS_DONE_LABEL);
        }

        let subdirectories = match collect_subdirectories(source_dir) {
            Ok(dirs) => dirs,
            Err(e) => {
                self.summary.record_failure(source_dir, e);
                return;
            }
        };

        for subdirectory in subdirectories {
            if self.is_dest_root(&subdirectory) {
                verbose!("Skipping output directory {}", subdirectory.display());
                continue;
            }

            // Created lazily by the first image written into it.
            let dest_subdirectory = match mirror_path(source_dir, &subdirectory, dest_dir) {
                Ok(dest) => dest,
                Err(e) => {
                    self.summary.record_failure(&subdirectory, e);
                    continue;
                }
            };

            self.process_level(&subdirectory, &dest_subdirectory);
        }
    }

    fn process_file(&mut self, source_dir: &Path, source: &Path, dest_dir: &Path) {
        let result = mirror_path(source_dir, source, dest_dir).and_then(|dest| {
            if let Some(parent) = dest.parent() {
                ensure_dir(parent)?;
            }
            let outcome = resize_image(source, &dest, self.options)?;
            Ok((dest, outcome))
        });

        match result {
            Ok((dest, outcome)) => {
                verbose!(
                    "Resized {} -> {} ({}x{} -> {}x{})",
                    source.display(),
                    dest.display(),
                    outcome.original.0,
                    outcome.original.1,
                    outcome.resized.0,
                    outcome.resized.1
                );
                self.summary.resized.push(ProcessedImage {
                    source: source.to_path_buf(),
                    dest,
                    outcome,
                });
            }
            Err(e) => self.summary.record_failure(source, e),
        }
    }

    fn is_dest_root(&self, dir: &Path) -> bool {
        match (&self.dest_root, dir.canonicalize()) {
            (Some(root), Ok(dir)) => *root == dir,
            _ => false,
        }
    }
}

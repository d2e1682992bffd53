//! Progress reporting for one directory batch at a time.

use crate::constants::{PROGRESS_BAR_WIDTH, PROGRESS_EMPTY, PROGRESS_FILLED};
use indicatif::{ProgressBar, ProgressStyle};

/// Renders `[####------] 40% label` for `current` of `total` items.
///
/// The bar fills `floor(current / total * width)` columns. `total == 0` counts
/// as complete and `current` above `total` is capped at 100%.
pub fn render_progress(current: usize, total: usize, label: &str) -> String {
    let (filled, percent) = if total == 0 || current >= total {
        (PROGRESS_BAR_WIDTH, 100)
    } else {
        let ratio = current as f64 / total as f64;
        // 100% is reserved for a finished batch.
        let percent = ((ratio * 100.0).round() as u32).min(99);
        (current * PROGRESS_BAR_WIDTH / total, percent)
    };

    let mut bar = String::with_capacity(PROGRESS_BAR_WIDTH + 2);
    bar.push('[');
    bar.extend(std::iter::repeat(PROGRESS_FILLED).take(filled));
    bar.extend(std::iter::repeat(PROGRESS_EMPTY).take(PROGRESS_BAR_WIDTH - filled));
    bar.push(']');

    format!("{} {:>3}% {}", bar, percent, label)
}

/// Receives `(current, total)` updates from the walker.
///
/// Called with the 0-based index of each upcoming file, then once with
/// `current == total` when the batch is finished.
pub trait ProgressObserver {
    fn on_progress(&mut self, current: usize, total: usize, label: &str);
}

/// Ignores every update.
#[derive(Debug, Default)]
pub struct SilentProgress;

impl ProgressObserver for SilentProgress {
    fn on_progress(&mut self, _current: usize, _total: usize, _label: &str) {}
}

/// Draws one overwritable line per directory batch on the terminal.
pub struct ConsoleProgress {
    bar: Option<ProgressBar>,
    hidden: bool,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self {
            bar: None,
            hidden: false,
        }
    }

    pub fn hidden() -> Self {
        Self {
            bar: None,
            hidden: true,
        }
    }

    fn start_batch(&self, total: usize) -> ProgressBar {
        if self.hidden {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::with_template("{msg}") {
            bar.set_style(style);
        }
        bar
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for ConsoleProgress {
    fn on_progress(&mut self, current: usize, total: usize, label: &str) {
        if current == 0 || self.bar.is_none() {
            if let Some(previous) = self.bar.take() {
                previous.finish();
            }
            self.bar = Some(self.start_batch(total));
        }

        let finished = current >= total;
        if let Some(bar) = &self.bar {
            bar.set_position(current as u64);
            bar.set_message(render_progress(current, total, label));
            if finished {
                bar.finish();
            }
        }
        if finished {
            self.bar = None;
        }
    }
}

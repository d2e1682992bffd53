use crate::constants::{ERROR_PREFIX, VERBOSE_PREFIX, WARNING_PREFIX};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET_MODE: AtomicBool = AtomicBool::new(false);
static VERBOSE_MODE: AtomicBool = AtomicBool::new(false);

pub fn set_quiet_mode(quiet: bool) {
    QUIET_MODE.store(quiet, Ordering::Relaxed);
}

pub fn set_verbose_mode(verbose: bool) {
    VERBOSE_MODE.store(verbose, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::Relaxed)
}

pub fn is_verbose() -> bool {
    VERBOSE_MODE.load(Ordering::Relaxed)
}

/// Applies the console switches for a run. Quiet wins over verbose.
pub fn init(quiet: bool, verbose: bool) {
    set_quiet_mode(quiet);
    set_verbose_mode(verbose && !quiet);
}

/// Whether per-directory progress bars should be drawn.
pub fn progress_enabled() -> bool {
    !is_quiet()
}

/// Console channel a message is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warn,
    Info,
    Verbose,
}

impl Level {
    /// Whether a message at this level is shown under the current switches.
    /// Errors are never silenced.
    pub fn enabled(self) -> bool {
        match self {
            Level::Error => true,
            Level::Warn | Level::Info => !is_quiet(),
            Level::Verbose => is_verbose() && !is_quiet(),
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Level::Error | Level::Warn)
    }
}

/// Renders one console line, or `None` when `level` is suppressed.
pub fn format_line(level: Level, args: fmt::Arguments<'_>) -> Option<String> {
    if !level.enabled() {
        return None;
    }
    let line = match level {
        Level::Error => format!("{} {}", ERROR_PREFIX, args),
        // The warning emoji renders one column narrow
        Level::Warn => format!("{}  {}", WARNING_PREFIX, args),
        Level::Info => args.to_string(),
        Level::Verbose => format!("{} {}", VERBOSE_PREFIX, args),
    };
    Some(line)
}

#[doc(hidden)]
pub fn emit(level: Level, args: fmt::Arguments<'_>) {
    if let Some(line) = format_line(level, args) {
        if level.to_stderr() {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

/// `info!` goes to stdout unless quiet, `verbose!` only with `--verbose`,
/// `warn!` and `error!` go to stderr. `error!` ignores quiet mode.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Level::Info, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Level::Verbose, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Level::Error, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Level::Warn, format_args!($($arg)*))
    };
}

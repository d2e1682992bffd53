use anyhow::Context;
use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;
use img_rescale::cli::Args;
use img_rescale::constants::{INFO_PREFIX, SUCCESS_PREFIX};
use img_rescale::{error, info, logger, warn};
use img_rescale::{process_directory, ConsoleProgress, ResizeOptions, RunSummary};
use std::process::ExitCode;
use std::time::{Duration, Instant};

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    logger::init(args.quiet, args.verbose);

    match run(args) {
        Ok(summary) if summary.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<RunSummary> {
    info!("{} Source: {}", INFO_PREFIX, args.source.display());
    info!("{} Destination: {}", INFO_PREFIX, args.destination.display());
    info!("{} Scale factor: {}", INFO_PREFIX, args.scale);

    if !args.scale.is_positive() {
        warn!(
            "Scale factor {} is not positive; every image will fail",
            args.scale
        );
    }

    let options = ResizeOptions::new(
        args.scale.value(),
        Some(args.rounding()),
        args.extensions.clone(),
    )?;
    info!("{} Extensions: {}", INFO_PREFIX, options.extensions);

    let mut progress = if logger::progress_enabled() {
        ConsoleProgress::new()
    } else {
        ConsoleProgress::hidden()
    };

    let start_time = Instant::now();
    let summary = process_directory(&args.source, &args.destination, &options, &mut progress)
        .with_context(|| format!("Cannot process {}", args.source.display()))?;

    print_summary(&summary, start_time.elapsed());
    Ok(summary)
}

fn print_summary(summary: &RunSummary, elapsed: Duration) {
    info!("\n📊 Resize Summary:");
    info!("  📁 Directories visited: {}", summary.directories);
    info!("  🖼️  Images resized: {}", summary.resized_count());
    info!("  ⏱️  Total time: {:?}", elapsed);
    if elapsed.as_secs_f64() > 0.0 {
        info!(
            "  ⚡ Average speed: {:.2} files/second",
            summary.resized_count() as f64 / elapsed.as_secs_f64()
        );
    }

    if summary.is_success() {
        info!("{} All images resized and saved!", SUCCESS_PREFIX);
        return;
    }

    error!("{} entries failed:", summary.failed_count());
    for failure in &summary.failures {
        eprintln!(
            "  - [{:?}] {}: {}",
            failure.error.kind(),
            failure.path.display(),
            failure.error
        );
    }
}

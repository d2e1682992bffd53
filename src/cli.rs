use crate::formats::ExtensionSet;
use crate::processing::{DimensionRounding, ScaleFactor};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "img-rescale",
    about = "Rescale every image in a directory tree into a mirrored output tree",
    long_about = "img-rescale walks SOURCE recursively, resizes every recognized image by SCALE \
                  and writes it to the same relative path under DESTINATION, keeping the \
                  original file format. Directories are created as needed and existing \
                  files are overwritten.",
    version,
    after_help = "EXAMPLES:\n  \
    img-rescale ./photos ./photos-2x 2\n  \
    img-rescale ./scans ./thumbs 0.25 -e jpg,png\n  \
    img-rescale ./icons ./icons-1.5x 1.5 --round -v"
)]
pub struct Args {
    #[arg(help = "Source directory to scan")]
    pub source: PathBuf,

    #[arg(help = "Destination directory (created if missing)")]
    pub destination: PathBuf,

    #[arg(
        help = "Scale factor applied to width and height (e.g. 1.5)",
        long_help = "Decimal multiplier applied to both dimensions of every image. \
                     A factor that yields a dimension below one pixel fails that image.",
        allow_negative_numbers = true
    )]
    pub scale: ScaleFactor,

    #[arg(
        short = 'e',
        long,
        value_name = "LIST",
        help = "Comma-separated extensions to process (default: jpg,jpeg,png,bmp,gif,tiff)",
        long_help = "Comma-separated list of file extensions treated as images. \
                     Matching ignores case. Supported: jpg, jpeg, png, bmp, gif, tiff, tif."
    )]
    pub extensions: Option<ExtensionSet>,

    #[arg(
        long,
        help = "Round scaled dimensions to nearest instead of truncating",
        long_help = "By default scaled dimensions are truncated toward zero (100 x 1.57 = 157). \
                     With --round they are rounded to the nearest pixel."
    )]
    pub round: bool,

    #[arg(short = 'q', long, conflicts_with = "verbose", help = "Only print errors")]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Print every resized file")]
    pub verbose: bool,
}

impl Args {
    pub fn rounding(&self) -> DimensionRounding {
        if self.round {
            DimensionRounding::Round
        } else {
            DimensionRounding::Truncate
        }
    }
}

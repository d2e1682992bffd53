use crate::constants::{MAX_IMAGE_DIMENSION, PARTIAL_FILE_PREFIX, PARTIAL_FILE_SUFFIX};
use crate::error::{ResizeError, Result};
use crate::formats::{format_for_path, ExtensionSet};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// General-purpose bilinear filter; resampling quality is intentionally not configurable.
pub const RESAMPLE_FILTER: FilterType = FilterType::Triangle;

/// Uniform multiplier applied to both image dimensions.
///
/// Any finite value is accepted. A non-positive factor is not rejected here;
/// it surfaces per file as [`ResizeError::Dimension`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(ResizeError::InvalidScale(value.to_string()));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ScaleFactor {
    type Err = ResizeError;

    fn from_str(s: &str) -> Result<Self> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| ResizeError::InvalidScale(s.to_string()))?;
        ScaleFactor::new(value)
    }
}

/// How a scaled dimension is turned back into a pixel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DimensionRounding {
    /// Integer cast of the product, toward zero.
    #[default]
    Truncate,
    /// Nearest integer, halves away from zero.
    Round,
}

impl DimensionRounding {
    fn apply(self, value: f64) -> f64 {
        match self {
            DimensionRounding::Truncate => value.trunc(),
            DimensionRounding::Round => value.round(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResizeOptions {
    pub scale: ScaleFactor,
    pub rounding: DimensionRounding,
    pub extensions: ExtensionSet,
}

impl ResizeOptions {
    pub fn new(
        scale: f64,
        rounding: Option<DimensionRounding>,
        extensions: Option<ExtensionSet>,
    ) -> Result<Self> {
        Ok(Self {
            scale: ScaleFactor::new(scale)?,
            rounding: rounding.unwrap_or_default(),
            extensions: extensions.unwrap_or_default(),
        })
    }
}

/// Dimensions before and after a successful resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeOutcome {
    pub original: (u32, u32),
    pub resized: (u32, u32),
}

/// Computes `(f(width * scale), f(height * scale))`.
///
/// A side below one pixel or above `MAX_IMAGE_DIMENSION` is an error and is
/// never clamped.
pub fn scaled_dimensions(
    path: &Path,
    width: u32,
    height: u32,
    scale: ScaleFactor,
    rounding: DimensionRounding,
) -> Result<(u32, u32)> {
    let scale_one = |dim: u32| -> Option<u32> {
        let scaled = rounding.apply(dim as f64 * scale.value());
        if scaled >= 1.0 && scaled <= MAX_IMAGE_DIMENSION as f64 {
            Some(scaled as u32)
        } else {
            None
        }
    };

    match (scale_one(width), scale_one(height)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(ResizeError::Dimension {
            path: path.to_path_buf(),
            width,
            height,
            scale: scale.value(),
        }),
    }
}

/// Decodes an image, sniffing the content rather than trusting the extension.
pub fn load_image(source: &Path) -> Result<DynamicImage> {
    let decode_err = |source_err: image::ImageError| ResizeError::Decode {
        path: source.to_path_buf(),
        source: source_err,
    };

    ImageReader::open(source)
        .map_err(|e| decode_err(e.into()))?
        .with_guessed_format()
        .map_err(|e| decode_err(e.into()))?
        .decode()
        .map_err(decode_err)
}

/// Resizes one file: decode, compute target size, resample, encode in the source format.
///
/// `dest`'s parent directory must already exist. Exactly one file is written on
/// success and nothing is left at `dest` on failure. Pixel buffers are dropped
/// before this returns on every path.
pub fn resize_image(source: &Path, dest: &Path, options: &ResizeOptions) -> Result<ResizeOutcome> {
    let format = format_for_path(source)?;
    let img = load_image(source)?;

    let (width, height) = img.dimensions();
    let (new_width, new_height) =
        scaled_dimensions(source, width, height, options.scale, options.rounding)?;

    let resized = img.resize_exact(new_width, new_height, RESAMPLE_FILTER);
    drop(img);

    save_image(&resized, dest, format)?;

    Ok(ResizeOutcome {
        original: (width, height),
        resized: resized.dimensions(),
    })
}

/// Hidden sibling the encoder writes into before it is renamed over `dest`.
pub fn partial_path(dest: &Path) -> PathBuf {
    let name = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    dest.with_file_name(format!("{}{}{}", PARTIAL_FILE_PREFIX, name, PARTIAL_FILE_SUFFIX))
}

pub fn save_image(img: &DynamicImage, dest: &Path, format: ImageFormat) -> Result<()> {
    let encode_err = |source: image::ImageError| ResizeError::Encode {
        path: dest.to_path_buf(),
        source,
    };

    // Removes the partial file on any early return.
    struct PartialFileGuard(PathBuf);
    impl Drop for PartialFileGuard {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    let temp_path = partial_path(dest);
    let _guard = PartialFileGuard(temp_path.clone());

    img.save_with_format(&temp_path, format).map_err(encode_err)?;
    fs::rename(&temp_path, dest).map_err(|e| encode_err(e.into()))?;

    Ok(())
}

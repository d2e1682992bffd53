//! Recognized extensions and the source-extension to codec mapping.
//!
//! Matching is case-insensitive: `photo.JPG` is treated exactly like
//! `photo.jpg`. Output always keeps the codec named by the source extension.

use crate::constants::DEFAULT_EXTENSIONS;
use crate::error::{ResizeError, Result};
use image::ImageFormat;
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// The set of file suffixes treated as images by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    extensions: BTreeSet<String>,
}

impl ExtensionSet {
    /// Builds a set from user input, normalizing case and a leading dot.
    ///
    /// Every entry must map to a codec (see [`format_for_extension`]).
    pub fn new<I, S>(extensions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized = BTreeSet::new();
        for ext in extensions {
            let ext = ext.as_ref().trim().trim_start_matches('.').to_lowercase();
            if ext.is_empty() {
                continue;
            }
            format_for_extension(&ext)?;
            normalized.insert(ext);
        }

        if normalized.is_empty() {
            return Err(ResizeError::Argument(
                "extension list must name at least one format".to_string(),
            ));
        }

        Ok(Self {
            extensions: normalized,
        })
    }

    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .map(|ext| self.extensions.contains(&ext.to_lowercase()))
            .unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        write!(f, "{}", joined.join(", "))
    }
}

impl FromStr for ExtensionSet {
    type Err = ResizeError;

    fn from_str(s: &str) -> Result<Self> {
        ExtensionSet::new(s.split(','))
    }
}

/// Maps a lowercase extension without the dot to the codec used to write it.
pub fn format_for_extension(ext: &str) -> Result<ImageFormat> {
    match ext.to_lowercase().as_str() {
        "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
        "png" => Ok(ImageFormat::Png),
        "bmp" => Ok(ImageFormat::Bmp),
        "gif" => Ok(ImageFormat::Gif),
        "tiff" | "tif" => Ok(ImageFormat::Tiff),
        _ => Err(ResizeError::UnsupportedFormat(ext.to_string())),
    }
}

/// Output codec for an image, taken from its own extension.
pub fn format_for_path(path: &Path) -> Result<ImageFormat> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| ResizeError::UnsupportedFormat(path.display().to_string()))?;
    format_for_extension(ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set_is_superset() {
        let set = ExtensionSet::default();
        assert_eq!(set.len(), 6);
        for ext in ["jpg", "jpeg", "png", "bmp", "gif", "tiff"] {
            assert!(set.matches(Path::new(&format!("a.{}", ext))));
        }
        assert!(!set.matches(Path::new("a.webp")));
        assert!(!set.matches(Path::new("a.txt")));
        assert!(!set.matches(Path::new("jpg")));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let set = ExtensionSet::default();
        assert!(set.matches(Path::new("photo.JPG")));
        assert!(set.matches(Path::new("photo.PnG")));
        assert!(set.matches(Path::new("photo.Tiff")));
    }

    #[test]
    fn test_from_str_normalizes() {
        let set: ExtensionSet = " .PNG, jpg ,,".parse().unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["jpg", "png"]);
        assert!(set.matches(Path::new("x.png")));
        assert!(!set.matches(Path::new("x.gif")));
        assert_eq!(set.to_string(), "jpg, png");
    }

    #[test]
    fn test_rejects_unknown_or_empty() {
        assert!(matches!(
            "jpg,webp".parse::<ExtensionSet>(),
            Err(ResizeError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            ",".parse::<ExtensionSet>(),
            Err(ResizeError::Argument(_))
        ));
    }

    #[test]
    fn test_format_for_path() {
        assert_eq!(format_for_path(Path::new("a.jpg")).unwrap(), ImageFormat::Jpeg);
        assert_eq!(format_for_path(Path::new("a.JPEG")).unwrap(), ImageFormat::Jpeg);
        assert_eq!(format_for_path(Path::new("a.png")).unwrap(), ImageFormat::Png);
        assert_eq!(format_for_path(Path::new("a.bmp")).unwrap(), ImageFormat::Bmp);
        assert_eq!(format_for_path(Path::new("a.gif")).unwrap(), ImageFormat::Gif);
        assert_eq!(format_for_path(Path::new("a.tiff")).unwrap(), ImageFormat::Tiff);
        assert!(matches!(
            format_for_path(Path::new("a")),
            Err(ResizeError::UnsupportedFormat(_))
        ));
    }
}

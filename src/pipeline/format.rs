//! Extension-based source format dispatch.
//!
//! Format detection is a pure mapping from a file extension to a
//! [`SourceFormat`]; no bytes are read here.

use crate::error::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// Extension given to every produced icon file
pub const ICO_EXTENSION: &str = "ico";

/// Raster formats accepted as conversion input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// `.png`
    Png,
    /// `.jpg` / `.jpeg`
    Jpeg,
}

impl SourceFormat {
    /// Map an extension to a format.
    ///
    /// Accepts the extension with or without its leading dot, in any case.
    /// Returns `None` for everything except `png`, `jpg` and `jpeg`.
    pub fn from_extension(extension: &str) -> Option<Self> {
        let normalized = extension.trim_start_matches('.').to_ascii_lowercase();
        match normalized.as_str() {
            "png" => Some(SourceFormat::Png),
            "jpg" | "jpeg" => Some(SourceFormat::Jpeg),
            _ => None,
        }
    }

    /// Detect the format of `path` from its extension.
    pub fn detect(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self::from_extension(&extension).ok_or_else(|| Error::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: if extension.is_empty() {
                String::new()
            } else {
                format!(".{extension}")
            },
        })
    }

    /// Decoder format handed to the `image` crate
    pub fn image_format(self) -> image::ImageFormat {
        match self {
            SourceFormat::Png => image::ImageFormat::Png,
            SourceFormat::Jpeg => image::ImageFormat::Jpeg,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Png => f.write_str("PNG"),
            SourceFormat::Jpeg => f.write_str("JPEG"),
        }
    }
}

/// Default icon path for an input: the file-name extension swapped for `.ico`.
///
/// Directory components are left untouched, so `/art.png/logo.png` becomes
/// `/art.png/logo.ico`.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension(ICO_EXTENSION)
}

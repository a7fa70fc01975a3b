//! Source image decoding.

use super::format::SourceFormat;
use crate::error::{Error, ErrorExt, Result};
use image::{ImageReader, RgbaImage};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Decoded input bitmap, always RGBA8.
///
/// JPEG sources arrive as RGB and are widened to fully opaque RGBA.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixels: RgbaImage,
    format: SourceFormat,
}

impl SourceImage {
    /// Wrap an already decoded bitmap
    pub fn from_rgba(pixels: RgbaImage, format: SourceFormat) -> Self {
        Self { pixels, format }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Format the bitmap was decoded from
    pub fn format(&self) -> SourceFormat {
        self.format
    }

    /// Borrow the pixel buffer
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Decode `path` as `format`.
///
/// The file handle lives only for the duration of this call and is closed on
/// every return path. Read failures surface as [`Error::Fs`], malformed bytes
/// as [`Error::Decode`].
pub fn decode(path: &Path, format: SourceFormat) -> Result<SourceImage> {
    let file = File::open(path).fs_context("opening source image", path)?;
    let reader = ImageReader::with_format(BufReader::new(file), format.image_format());

    let decoded = reader.decode().map_err(|source| match source {
        image::ImageError::IoError(error) => Error::Fs {
            context: "reading source image",
            path: path.to_path_buf(),
            error,
        },
        source => Error::Decode {
            path: path.to_path_buf(),
            format,
            source,
        },
    })?;

    log::debug!(
        "Decoded {} {}x{} from {}",
        format,
        decoded.width(),
        decoded.height(),
        path.display()
    );

    Ok(SourceImage::from_rgba(decoded.to_rgba8(), format))
}

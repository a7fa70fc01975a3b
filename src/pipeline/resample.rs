//! Fixed-size resampling of the square canvas.

use super::canvas::{Canvas, composite_over};
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// Edge length of the embedded icon image
pub const ICON_SIZE: u32 = 256;

/// Final icon bitmap handed to the ICO encoder.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizedBitmap {
    pixels: RgbaImage,
}

impl ResizedBitmap {
    /// Wrap an RGBA buffer as an encoder payload
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Borrow the pixel buffer
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Scale `canvas` to `size x size` with a Catmull-Rom kernel.
///
/// The scaled pixels are composited source-over onto a transparent
/// destination, so partially transparent canvas pixels keep their alpha.
pub fn resize(canvas: &Canvas, size: u32) -> ResizedBitmap {
    let scaled = imageops::resize(canvas.pixels(), size, size, FilterType::CatmullRom);

    let mut pixels = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    composite_over(&mut pixels, &scaled, 0, 0);

    log::debug!("Resampled {0}x{0} canvas to {1}x{1}", canvas.side(), size);

    ResizedBitmap { pixels }
}

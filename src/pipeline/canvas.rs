//! Square canvas compositing.
//!
//! Pads a source bitmap onto a transparent square whose side is the longer
//! source edge, so the later resize keeps the aspect ratio.

use super::decode::SourceImage;
use image::{Rgba, RgbaImage};

/// Offset of the source inside the square canvas.
///
/// When the edge difference is odd the spare pixel lands on the bottom or
/// right, since both offsets truncate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    /// Transparent rows above the source
    pub top: u32,
    /// Transparent columns left of the source
    pub left: u32,
}

impl Padding {
    /// Canvas side and source offset for a `width` x `height` source
    pub fn for_dimensions(width: u32, height: u32) -> (u32, Self) {
        let side = width.max(height);
        let padding = Self {
            top: (side - height) / 2,
            left: (side - width) / 2,
        };
        (side, padding)
    }

    /// True when the source already fills the canvas
    pub fn is_zero(&self) -> bool {
        self.top == 0 && self.left == 0
    }
}

/// Square RGBA working bitmap holding the centered source.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbaImage,
    padding: Padding,
}

impl Canvas {
    /// Edge length in pixels
    pub fn side(&self) -> u32 {
        self.pixels.width()
    }

    /// Where the source was placed
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Borrow the pixel buffer
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Center `source` on a transparent `side x side` canvas.
pub fn compose_square(source: &SourceImage) -> Canvas {
    let (side, padding) = Padding::for_dimensions(source.width(), source.height());
    let mut pixels = RgbaImage::from_pixel(side, side, Rgba([0, 0, 0, 0]));

    composite_over(&mut pixels, source.pixels(), padding.left, padding.top);

    log::debug!(
        "Composited {}x{} onto {}x{} canvas (top {}, left {})",
        source.width(),
        source.height(),
        side,
        side,
        padding.top,
        padding.left
    );

    Canvas { pixels, padding }
}

/// Draw `src` onto `dst` at `(x, y)` with source-over blending.
///
/// Pixels of `src` falling outside `dst` are clipped.
pub(super) fn composite_over(dst: &mut RgbaImage, src: &RgbaImage, x: u32, y: u32) {
    let width = src.width().min(dst.width().saturating_sub(x));
    let height = src.height().min(dst.height().saturating_sub(y));

    for sy in 0..height {
        for sx in 0..width {
            let over = *src.get_pixel(sx, sy);
            let under = dst.get_pixel_mut(x + sx, y + sy);
            *under = blend_over(*under, over);
        }
    }
}

/// Straight-alpha source-over for one pixel, rounded to nearest.
fn blend_over(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    // Over a fully transparent pixel the result is the source, color included
    if dst[3] == 0 {
        return src;
    }

    let sa = u32::from(src[3]);
    match sa {
        0 => return dst,
        255 => return src,
        _ => {}
    }

    let da = u32::from(dst[3]);
    // dst alpha scaled by (1 - src alpha), kept at 255*255 precision
    let dst_weight = da * (255 - sa);
    let out_a = sa * 255 + dst_weight;

    let mut out = [0u8; 4];
    for (channel, slot) in out.iter_mut().take(3).enumerate() {
        let sc = u32::from(src[channel]);
        let dc = u32::from(dst[channel]);
        let numerator = sc * sa * 255 + dc * dst_weight;
        *slot = ((numerator + out_a / 2) / out_a) as u8;
    }
    out[3] = ((out_a + 127) / 255) as u8;

    Rgba(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::SourceFormat;

    fn source(width: u32, height: u32, pixel: Rgba<u8>) -> SourceImage {
        SourceImage::from_rgba(RgbaImage::from_pixel(width, height, pixel), SourceFormat::Png)
    }

    #[test]
    fn test_square_source_has_no_padding() {
        let mut pixels = RgbaImage::new(5, 5);
        for (x, y, p) in pixels.enumerate_pixels_mut() {
            *p = Rgba([x as u8 * 40, y as u8 * 40, 7, 255]);
        }
        let src = SourceImage::from_rgba(pixels.clone(), SourceFormat::Png);

        let canvas = compose_square(&src);
        assert!(canvas.padding().is_zero());
        assert_eq!(canvas.pixels(), &pixels);
    }

    #[test]
    fn test_square_source_keeps_transparent_colors() {
        let mut pixels = RgbaImage::new(16, 16);
        for (x, y, p) in pixels.enumerate_pixels_mut() {
            *p = Rgba([x as u8 * 16, y as u8 * 16, 200, (x * 16 + y) as u8]);
        }
        let src = SourceImage::from_rgba(pixels.clone(), SourceFormat::Png);

        let canvas = compose_square(&src);
        assert_eq!(*canvas.pixels().get_pixel(0, 0), Rgba([0, 0, 200, 0]));
        assert_eq!(canvas.pixels(), &pixels);
    }

    #[test]
    fn test_wide_source_pads_top_and_bottom() {
        let (side, padding) = Padding::for_dimensions(1000, 100);
        assert_eq!(side, 1000);
        assert_eq!(padding, Padding { top: 450, left: 0 });
    }

    #[test]
    fn test_odd_difference_favours_bottom_right() {
        let red = Rgba([255, 0, 0, 255]);
        let canvas = compose_square(&source(2, 5, red));

        assert_eq!(canvas.side(), 5);
        assert_eq!(canvas.padding(), Padding { top: 0, left: 1 });
        for y in 0..5 {
            assert_eq!(canvas.pixels().get_pixel(0, y)[3], 0);
            assert_eq!(*canvas.pixels().get_pixel(1, y), red);
            assert_eq!(*canvas.pixels().get_pixel(2, y), red);
            assert_eq!(canvas.pixels().get_pixel(3, y)[3], 0);
            assert_eq!(canvas.pixels().get_pixel(4, y)[3], 0);
        }
    }

    #[test]
    fn test_outside_footprint_stays_transparent() {
        let canvas = compose_square(&source(4, 2, Rgba([1, 2, 3, 255])));
        assert_eq!(canvas.padding(), Padding { top: 1, left: 0 });
        assert_eq!(*canvas.pixels().get_pixel(0, 0), Rgba([0, 0, 0, 0]));
        assert_eq!(*canvas.pixels().get_pixel(3, 3), Rgba([0, 0, 0, 0]));
        assert_eq!(*canvas.pixels().get_pixel(3, 2), Rgba([1, 2, 3, 255]));
    }

    #[test]
    fn test_blend_over_transparent_keeps_source() {
        let src = Rgba([90, 180, 30, 77]);
        assert_eq!(blend_over(Rgba([0, 0, 0, 0]), src), src);

        let hidden = Rgba([12, 34, 56, 0]);
        assert_eq!(blend_over(Rgba([0, 0, 0, 0]), hidden), hidden);
        assert_eq!(blend_over(Rgba([9, 9, 9, 255]), hidden), Rgba([9, 9, 9, 255]));
    }

    #[test]
    fn test_blend_over_half_alpha() {
        let out = blend_over(Rgba([0, 0, 255, 255]), Rgba([255, 0, 0, 128]));
        assert_eq!(out[3], 255);
        assert_eq!(out[0], 128);
        assert_eq!(out[2], 127);
    }

    #[test]
    fn test_composite_clips_to_destination() {
        let mut dst = RgbaImage::new(3, 3);
        let src = RgbaImage::from_pixel(4, 4, Rgba([9, 9, 9, 255]));
        composite_over(&mut dst, &src, 2, 2);
        assert_eq!(*dst.get_pixel(2, 2), Rgba([9, 9, 9, 255]));
        assert_eq!(dst.get_pixel(1, 1)[3], 0);
    }
}

//! Image to icon pipeline.
//!
//! Data flows strictly forward through four stages:
//!
//! 1. [`decode`]: read a PNG or JPEG file into an RGBA [`SourceImage`]
//! 2. [`compose_square`]: center it on a transparent square [`Canvas`]
//! 3. [`resize`]: scale the canvas to a [`ResizedBitmap`] of [`ICON_SIZE`]
//! 4. [`crate::ico::write_ico_file`]: serialize the bitmap as an ICO file
//!
//! [`Converter`] sequences the stages and derives the output path.

mod canvas;
mod converter;
mod decode;
mod format;
mod resample;

pub use canvas::{Canvas, Padding, compose_square};
pub use converter::{ConversionReport, Converter, RenderedIcon, ValidatedInput};
pub use decode::{SourceImage, decode};
pub use format::{ICO_EXTENSION, SourceFormat, default_output_path};
pub use resample::{ICON_SIZE, ResizedBitmap, resize};

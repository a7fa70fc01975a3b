//! # img_to_ico
//!
//! Convert PNG and JPEG images into single-image Windows ICO files.
//!
//! The source is decoded to RGBA, centered on a transparent square canvas,
//! scaled to 256x256 with a Catmull-Rom filter and embedded as a PNG stream
//! behind a 22-byte ICONDIR/ICONDIRENTRY header.
//!
//! ## Usage
//!
//! ```bash
//! img_to_ico photo.jpg                  # writes photo.ico
//! img_to_ico logo.png -o assets/app.ico # explicit output path
//! ```
//!
//! ```no_run
//! use img_to_ico::Converter;
//!
//! # fn main() -> img_to_ico::Result<()> {
//! let report = Converter::new().convert("photo.jpg")?;
//! println!("wrote {} bytes to {}", report.ico_len(), report.output.display());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod cli;
pub mod error;
pub mod ico;
pub mod pipeline;

pub use cli::Args;
pub use error::{Error, ErrorKind, Result};
pub use ico::{IconDirEntry, IconDirHeader, IconDirectory, read_icon_dir};
pub use pipeline::{ConversionReport, Converter, ICON_SIZE, SourceFormat, ValidatedInput};

//! Conversion orchestration.
//!
//! Each stage takes the previous stage's value and returns the next one:
//! `validate` → `render` (decode, pad, resize) → write. [`Converter`] itself
//! holds only the target icon size, so one instance can serve any number of
//! conversions, including from several threads at once.

use super::canvas::{Padding, compose_square};
use super::decode::decode;
use super::format::{SourceFormat, default_output_path};
use super::resample::{ICON_SIZE, ResizedBitmap, resize};
use crate::error::{Error, ErrorExt, Result};
use crate::ico::{IconDirEntry, SINGLE_IMAGE_OFFSET, write_ico_file};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// An input path that exists and carries a supported extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    path: PathBuf,
    format: SourceFormat,
}

impl ValidatedInput {
    /// Check `input`: non-empty, resolvable to an absolute path, existing,
    /// and ending in `.png`, `.jpg` or `.jpeg`.
    pub fn new(input: impl AsRef<Path>) -> Result<Self> {
        let raw = input.as_ref();
        if raw.as_os_str().is_empty() {
            return Err(Error::InputMissing {
                path: PathBuf::new(),
            });
        }

        let path = raw
            .absolutize()
            .fs_context("resolving input path", raw)?
            .into_owned();

        if !path.try_exists().fs_context("checking input path", &path)? {
            return Err(Error::InputMissing { path });
        }

        let format = SourceFormat::detect(&path)?;
        Ok(Self { path, format })
    }

    /// Absolute input path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Format chosen from the extension
    pub fn format(&self) -> SourceFormat {
        self.format
    }

    /// Input path with its extension replaced by `.ico`
    pub fn default_output_path(&self) -> PathBuf {
        default_output_path(&self.path)
    }
}

/// Decoded, padded and resized icon, ready to be written.
#[derive(Debug, Clone)]
pub struct RenderedIcon {
    /// Final bitmap
    pub bitmap: ResizedBitmap,
    /// Source format
    pub format: SourceFormat,
    /// Source width in pixels
    pub source_width: u32,
    /// Source height in pixels
    pub source_height: u32,
    /// Offset applied when squaring the source
    pub padding: Padding,
}

/// Summary of a finished conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Absolute input path
    pub input: PathBuf,
    /// Written ICO path
    pub output: PathBuf,
    /// Source format
    pub format: SourceFormat,
    /// Source width in pixels
    pub source_width: u32,
    /// Source height in pixels
    pub source_height: u32,
    /// Offset applied when squaring the source
    pub padding: Padding,
    /// Directory entry written to the file
    pub entry: IconDirEntry,
}

impl ConversionReport {
    /// Length of the embedded PNG stream
    pub fn png_len(&self) -> usize {
        self.entry.data_size as usize
    }

    /// Length of the whole ICO file
    pub fn ico_len(&self) -> usize {
        SINGLE_IMAGE_OFFSET as usize + self.png_len()
    }
}

/// Image to ICO converter.
#[derive(Debug, Clone, Copy)]
pub struct Converter {
    icon_size: u32,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    /// Converter producing 256x256 icons
    pub fn new() -> Self {
        Self {
            icon_size: ICON_SIZE,
        }
    }

    /// Edge length of produced icons
    pub fn icon_size(&self) -> u32 {
        self.icon_size
    }

    /// Validate an input path. See [`ValidatedInput::new`].
    pub fn validate(&self, input: impl AsRef<Path>) -> Result<ValidatedInput> {
        ValidatedInput::new(input)
    }

    /// Decode, square and resize a validated input.
    pub fn render(&self, input: &ValidatedInput) -> Result<RenderedIcon> {
        let source = decode(input.path(), input.format())?;
        let canvas = compose_square(&source);
        let bitmap = resize(&canvas, self.icon_size);

        Ok(RenderedIcon {
            bitmap,
            format: source.format(),
            source_width: source.width(),
            source_height: source.height(),
            padding: canvas.padding(),
        })
    }

    /// Write a rendered icon to `output`.
    pub fn write(
        &self,
        input: &ValidatedInput,
        rendered: &RenderedIcon,
        output: impl AsRef<Path>,
    ) -> Result<ConversionReport> {
        let output = output.as_ref();
        let entry = write_ico_file(&rendered.bitmap, output)?;

        Ok(ConversionReport {
            input: input.path().to_path_buf(),
            output: output.to_path_buf(),
            format: rendered.format,
            source_width: rendered.source_width,
            source_height: rendered.source_height,
            padding: rendered.padding,
            entry,
        })
    }

    /// Convert `input` to an `.ico` next to it.
    pub fn convert(&self, input: impl AsRef<Path>) -> Result<ConversionReport> {
        let validated = self.validate(input)?;
        let output = validated.default_output_path();
        self.run(&validated, &output)
    }

    /// Convert `input` and write the icon to `output` instead of the default path.
    pub fn convert_to(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<ConversionReport> {
        let validated = self.validate(input)?;
        self.run(&validated, output.as_ref())
    }

    fn run(&self, validated: &ValidatedInput, output: &Path) -> Result<ConversionReport> {
        log::debug!(
            "Converting {} ({}) to {}",
            validated.path().display(),
            validated.format(),
            output.display()
        );
        let rendered = self.render(validated)?;
        self.write(validated, &rendered, output)
    }
}

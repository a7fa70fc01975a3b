//! Error types for image-to-ICO conversion.
//!
//! Every stage of the pipeline reports failure through [`Error`]. Nothing is
//! retried or recovered internally: the first error aborts the conversion and
//! is handed back to the caller, who decides how to exit.
//!
//! # Example
//!
//! ```no_run
//! use img_to_ico::error::{ErrorExt, Result};
//! use std::path::Path;
//!
//! fn read_source(path: &Path) -> Result<Vec<u8>> {
//!     std::fs::read(path).fs_context("reading source image", path)
//! }
//! ```

use crate::pipeline::SourceFormat;
use std::{io, path::PathBuf};
use thiserror::Error as DeriveError;

/// Convenient type alias for Result.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the conversion pipeline.
#[derive(Debug, DeriveError)]
#[non_exhaustive]
pub enum Error {
    /// The input path is empty or does not exist.
    #[error("input image not found: {}", path.display())]
    InputMissing {
        /// Path as given (absolutized when possible)
        path: PathBuf,
    },

    /// The input extension is not `.png`, `.jpg` or `.jpeg`.
    #[error("unsupported file format '{extension}' for {}", path.display())]
    UnsupportedFormat {
        /// Offending input path
        path: PathBuf,
        /// Extension as found on the path (empty when missing)
        extension: String,
    },

    /// File system error with path context.
    ///
    /// Created by the [`ErrorExt`] trait's `fs_context` method.
    #[error("{context} {}: {error}", path.display())]
    Fs {
        /// Operation in progress, e.g. "opening source image"
        context: &'static str,
        /// Path that was being accessed
        path: PathBuf,
        /// The underlying I/O error
        error: io::Error,
    },

    /// The input bytes are not a valid image of the detected format.
    #[error("failed to decode {format} image {}: {source}", path.display())]
    Decode {
        /// Input path
        path: PathBuf,
        /// Format selected from the extension
        format: SourceFormat,
        /// Decoder error
        #[source]
        source: image::ImageError,
    },

    /// The resized bitmap could not be serialized as PNG.
    #[error("failed to encode icon image as PNG: {source}")]
    Encode {
        /// Encoder error
        #[source]
        source: image::ImageError,
    },

    /// A byte buffer is not a well-formed ICO container.
    #[error("malformed ICO data: {reason}")]
    MalformedIco {
        /// What was wrong with the buffer
        reason: String,
    },
}

/// Error category without payload, for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`Error::InputMissing`]
    InputMissing,
    /// See [`Error::UnsupportedFormat`]
    UnsupportedFormat,
    /// See [`Error::Fs`]
    Io,
    /// See [`Error::Decode`]
    Decode,
    /// See [`Error::Encode`]
    Encode,
    /// See [`Error::MalformedIco`]
    MalformedIco,
}

impl Error {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InputMissing { .. } => ErrorKind::InputMissing,
            Error::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            Error::Fs { .. } => ErrorKind::Io,
            Error::Decode { .. } => ErrorKind::Decode,
            Error::Encode { .. } => ErrorKind::Encode,
            Error::MalformedIco { .. } => ErrorKind::MalformedIco,
        }
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            Error::InputMissing { path } if path.as_os_str().is_empty() => {
                vec!["Pass the image to convert as the first argument".to_string()]
            }
            Error::InputMissing { path } => vec![
                format!("Check that {} exists", path.display()),
                "Relative paths are resolved against the current directory".to_string(),
            ],
            Error::UnsupportedFormat { .. } => vec![
                "Only .png, .jpg and .jpeg inputs are supported".to_string(),
                "Re-export the image as PNG to keep transparency".to_string(),
            ],
            Error::Fs { path, .. } => vec![format!(
                "Check permissions and free space for {}",
                path.display()
            )],
            Error::Decode { format, .. } => vec![format!(
                "The file extension says {format}, but the contents do not decode as {format}"
            )],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}

/// Extension trait for filesystem operations with automatic path context.
pub trait ErrorExt<T> {
    /// Add filesystem context to an I/O error.
    ///
    /// The `context` should be a present-tense verb phrase describing the operation,
    /// e.g., "opening source image", "persisting icon file".
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

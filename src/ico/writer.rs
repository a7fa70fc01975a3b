//! ICO serialization and atomic file output.

use super::{IconDirEntry, IconDirHeader, SINGLE_IMAGE_OFFSET};
use crate::error::{Error, ErrorExt, Result};
use crate::pipeline::ResizedBitmap;
use image::codecs::png::PngEncoder;
use image::error::{LimitError, LimitErrorKind};
use image::{ExtendedColorType, ImageEncoder, ImageError};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Encode `bitmap` as a lossless RGBA PNG stream.
pub fn encode_png(bitmap: &ResizedBitmap) -> Result<Vec<u8>> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(
            bitmap.pixels().as_raw(),
            bitmap.width(),
            bitmap.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|source| Error::Encode { source })?;
    Ok(png)
}

/// Build the complete single-entry ICO file in memory.
///
/// Returns the bytes together with the directory entry written into them.
pub fn encode_ico(bitmap: &ResizedBitmap) -> Result<(Vec<u8>, IconDirEntry)> {
    let png = encode_png(bitmap)?;
    let data_size = u32::try_from(png.len()).map_err(|_| Error::Encode {
        source: ImageError::Limits(LimitError::from_kind(LimitErrorKind::DimensionError)),
    })?;

    let entry = IconDirEntry::png(
        bitmap.width(),
        bitmap.height(),
        data_size,
        SINGLE_IMAGE_OFFSET,
    );

    let mut ico = Vec::with_capacity(SINGLE_IMAGE_OFFSET as usize + png.len());
    IconDirHeader::icon(1)
        .write_to(&mut ico)
        .and_then(|()| entry.write_to(&mut ico))
        .map_err(|e| Error::Encode {
            source: ImageError::IoError(e),
        })?;
    ico.extend_from_slice(&png);

    Ok((ico, entry))
}

/// Encode `bitmap` and write it to `output`, replacing any existing file.
///
/// The bytes go to a temporary file next to `output` which is renamed over
/// it once fully written. On failure `output` is left as it was.
pub fn write_ico_file(bitmap: &ResizedBitmap, output: &Path) -> Result<IconDirEntry> {
    let (ico, entry) = encode_ico(bitmap)?;

    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged =
        NamedTempFile::new_in(dir).fs_context("creating temporary icon file in", dir)?;
    staged
        .write_all(&ico)
        .and_then(|()| staged.flush())
        .fs_context("writing icon file", output)?;

    if let Some(permissions) = target_permissions(output) {
        staged
            .as_file()
            .set_permissions(permissions)
            .fs_context("setting permissions on", output)?;
    }

    staged.persist(output).map_err(|e| Error::Fs {
        context: "persisting icon file",
        path: output.to_path_buf(),
        error: e.error,
    })?;

    log::info!(
        "Created ICO file: {} ({} bytes)",
        output.display(),
        ico.len()
    );
    Ok(entry)
}

/// Permissions the finished file should carry.
///
/// An existing target keeps its mode; new files get the platform default
/// instead of the private mode temporary files are created with.
fn target_permissions(output: &Path) -> Option<fs::Permissions> {
    fs::metadata(output)
        .map(|metadata| metadata.permissions())
        .ok()
        .or_else(new_file_permissions)
}

#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}

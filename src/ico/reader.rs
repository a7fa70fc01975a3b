//! ICONDIR parsing, used to inspect produced files.

use super::{ICONDIR_SIZE, ICONDIRENTRY_SIZE, IconDirEntry, IconDirHeader, RESOURCE_TYPE_ICON};
use crate::error::{Error, Result};
use std::io::Cursor;

/// Parsed directory of an ICO buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDirectory<'a> {
    /// File header
    pub header: IconDirHeader,
    /// One entry per embedded image
    pub entries: Vec<IconDirEntry>,
    bytes: &'a [u8],
}

impl<'a> IconDirectory<'a> {
    /// Raw image data of the entry at `index`, `None` when there is no such entry
    pub fn image_data(&self, index: usize) -> Option<&'a [u8]> {
        let entry = self.entries.get(index)?;
        let start = entry.data_offset as usize;
        let end = start.checked_add(entry.data_size as usize)?;
        self.bytes.get(start..end)
    }

    /// True when the payload of the entry at `index` starts with the PNG signature
    pub fn is_png(&self, index: usize) -> bool {
        self.image_data(index)
            .is_some_and(|data| data.starts_with(&PNG_SIGNATURE))
    }
}

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Parse the header and directory entries of an icon file.
///
/// Rejects cursor files, non-zero reserved words, and entries whose data
/// lies outside `bytes`.
pub fn read_icon_dir(bytes: &[u8]) -> Result<IconDirectory<'_>> {
    let malformed = |reason: String| Error::MalformedIco { reason };

    if bytes.len() < ICONDIR_SIZE {
        return Err(malformed(format!(
            "{} bytes is too short for an ICONDIR header",
            bytes.len()
        )));
    }

    let mut cursor = Cursor::new(bytes);
    let header = IconDirHeader::read_from(&mut cursor)
        .map_err(|e| malformed(format!("reading header: {e}")))?;

    if header.reserved != 0 {
        return Err(malformed(format!(
            "reserved field is {}, expected 0",
            header.reserved
        )));
    }
    if header.resource_type != RESOURCE_TYPE_ICON {
        return Err(malformed(format!(
            "resource type is {}, expected {RESOURCE_TYPE_ICON}",
            header.resource_type
        )));
    }

    let table_end = ICONDIR_SIZE + usize::from(header.count) * ICONDIRENTRY_SIZE;
    if bytes.len() < table_end {
        return Err(malformed(format!(
            "{} entries need {table_end} bytes, buffer has {}",
            header.count,
            bytes.len()
        )));
    }

    let mut entries = Vec::with_capacity(usize::from(header.count));
    for index in 0..header.count {
        let entry = IconDirEntry::read_from(&mut cursor)
            .map_err(|e| malformed(format!("reading entry {index}: {e}")))?;

        let start = entry.data_offset as usize;
        let end = start.checked_add(entry.data_size as usize);
        match end {
            Some(end) if start >= table_end && end <= bytes.len() => {}
            _ => {
                return Err(malformed(format!(
                    "entry {index} data ({} bytes at offset {}) is out of bounds",
                    entry.data_size, entry.data_offset
                )));
            }
        }
        entries.push(entry);
    }

    Ok(IconDirectory {
        header,
        entries,
        bytes,
    })
}

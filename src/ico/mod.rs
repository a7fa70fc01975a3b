//! Windows ICO container support.
//!
//! Only the PNG-embedded flavour is produced: one ICONDIR header, one
//! ICONDIRENTRY, then the raw PNG stream.
//!
//! | Offset | Size | Field                          |
//! |--------|------|--------------------------------|
//! | 0      | 2    | reserved, always 0             |
//! | 2      | 2    | resource type, 1 = icon        |
//! | 4      | 2    | image count                    |
//! | 6      | 1    | width (0 means 256)            |
//! | 7      | 1    | height (0 means 256)           |
//! | 8      | 1    | palette size, 0 = true color   |
//! | 9      | 1    | reserved                       |
//! | 10     | 2    | color planes                   |
//! | 12     | 2    | bits per pixel                 |
//! | 14     | 4    | image data length              |
//! | 18     | 4    | image data offset from start   |
//!
//! All integers are little-endian.

mod reader;
mod writer;

pub use reader::{IconDirectory, read_icon_dir};
pub use writer::{encode_ico, encode_png, write_ico_file};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};

/// Size of the ICONDIR header
pub const ICONDIR_SIZE: usize = 6;

/// Size of one ICONDIRENTRY
pub const ICONDIRENTRY_SIZE: usize = 16;

/// Offset of the image data in a single-entry file
pub const SINGLE_IMAGE_OFFSET: u32 = (ICONDIR_SIZE + ICONDIRENTRY_SIZE) as u32;

/// ICONDIR resource type for icons (cursors use 2)
pub const RESOURCE_TYPE_ICON: u16 = 1;

/// The 6-byte file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDirHeader {
    /// Always 0
    pub reserved: u16,
    /// 1 for icons
    pub resource_type: u16,
    /// Number of directory entries that follow
    pub count: u16,
}

impl IconDirHeader {
    /// Header announcing `count` icon images
    pub fn icon(count: u16) -> Self {
        Self {
            reserved: 0,
            resource_type: RESOURCE_TYPE_ICON,
            count,
        }
    }

    /// Serialize the header
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u16::<LittleEndian>(self.reserved)?;
        writer.write_u16::<LittleEndian>(self.resource_type)?;
        writer.write_u16::<LittleEndian>(self.count)?;
        Ok(())
    }

    /// Parse a header
    pub fn read_from<R: Read>(reader: &mut R) -> io::Result<Self> {
        Ok(Self {
            reserved: reader.read_u16::<LittleEndian>()?,
            resource_type: reader.read_u16::<LittleEndian>()?,
            count: reader.read_u16::<LittleEndian>()?,
        })
    }
}

/// One 16-byte directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDirEntry {
    /// Width byte; 0 stands for 256
    pub width: u8,
    /// Height byte; 0 stands for 256
    pub height: u8,
    /// Palette size, 0 when not palette-indexed
    pub color_count: u8,
    /// Always 0
    pub reserved: u8,
    /// Color planes
    pub planes: u16,
    /// Bits per pixel
    pub bits_per_pixel: u16,
    /// Length of the image data in bytes
    pub data_size: u32,
    /// Offset of the image data from the start of the file
    pub data_offset: u32,
}

impl IconDirEntry {
    /// Entry for a 32-bit PNG payload of `data_size` bytes at `data_offset`.
    ///
    /// Dimensions are truncated to one byte, so 256 is stored as 0.
    pub fn png(width: u32, height: u32, data_size: u32, data_offset: u32) -> Self {
        Self {
            width: width as u8,
            height: height as u8,
            color_count: 0,
            reserved: 0,
            planes: 1,
            bits_per_pixel: 32,
            data_size,
            data_offset,
        }
    }

    /// Pixel width, reading a stored 0 as 256
    pub fn width_px(&self) -> u32 {
        byte_to_dimension(self.width)
    }

    /// Pixel height, reading a stored 0 as 256
    pub fn height_px(&self) -> u32 {
        byte_to_dimension(self.height)
    }

    /// Serialize the entry
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u8(self.width)?;
        writer.write_u8(self.height)?;
        writer.write_u8(self.color_count)?;
        writer.write_u8(self.reserved)?;
        writer.write_u16::<LittleEndian>(self.planes)?;
        writer.write_u16::<LittleEndian>(self.bits_per_pixel)?;
        writer.write_u32::<LittleEndian>(self.data_size)?;
        writer.write_u32::<LittleEndian>(self.data_offset)?;
        Ok(())
    }

    /// Parse an entry
    pub fn read_from<R: Read>(reader: &mut R) -> io::Result<Self> {
        Ok(Self {
            width: reader.read_u8()?,
            height: reader.read_u8()?,
            color_count: reader.read_u8()?,
            reserved: reader.read_u8()?,
            planes: reader.read_u16::<LittleEndian>()?,
            bits_per_pixel: reader.read_u16::<LittleEndian>()?,
            data_size: reader.read_u32::<LittleEndian>()?,
            data_offset: reader.read_u32::<LittleEndian>()?,
        })
    }
}

fn byte_to_dimension(byte: u8) -> u32 {
    if byte == 0 { 256 } else { u32::from(byte) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_bytes() {
        let mut bytes = Vec::new();
        IconDirHeader::icon(1).write_to(&mut bytes).unwrap();
        assert_eq!(bytes, [0, 0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_entry_bytes_for_256() {
        let mut bytes = Vec::new();
        IconDirEntry::png(256, 256, 0x0102_0304, SINGLE_IMAGE_OFFSET)
            .write_to(&mut bytes)
            .unwrap();
        assert_eq!(
            bytes,
            [0, 0, 0, 0, 1, 0, 32, 0, 0x04, 0x03, 0x02, 0x01, 22, 0, 0, 0]
        );
    }

    #[test]
    fn test_small_dimensions_are_exact() {
        let entry = IconDirEntry::png(48, 255, 10, 22);
        assert_eq!((entry.width, entry.height), (48, 255));
        assert_eq!((entry.width_px(), entry.height_px()), (48, 255));
    }

    #[test]
    fn test_zero_byte_reads_as_256() {
        let entry = IconDirEntry::png(256, 256, 10, 22);
        assert_eq!((entry.width, entry.height), (0, 0));
        assert_eq!((entry.width_px(), entry.height_px()), (256, 256));
    }
}

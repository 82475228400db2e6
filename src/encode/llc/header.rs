// src/encode/llc/header.rs

use crate::utils::error::{CodecError, Result};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::Write;

/// First byte of every stream.
pub const MAGIC: u8 = 0x77;
/// Size of the fixed header preceding the coded payload.
pub const HEADER_LEN: usize = 6;

/// The fixed stream header: magic, channel count, width, height.
///
/// ```text
/// offset  size  field
///      0     1  magic (0x77)
///      1     1  channels (3 or 4)
///      2     2  width, little-endian
///      4     2  height, little-endian
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHeader {
    pub channels: u8,
    pub width: u16,
    pub height: u16,
}

impl ImageHeader {
    pub fn new(channels: u8, width: u16, height: u16) -> Self {
        ImageHeader {
            channels,
            width,
            height,
        }
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_u8(MAGIC)?;
        writer.write_u8(self.channels)?;
        writer.write_u16::<LittleEndian>(self.width)?;
        writer.write_u16::<LittleEndian>(self.height)?;
        Ok(())
    }

    /// Parses and validates the header at the start of `data`.
    ///
    /// The magic byte is checked before the length, so a short buffer with a
    /// foreign first byte still reports [`CodecError::InvalidMagic`].
    pub fn read_from(data: &[u8]) -> Result<Self> {
        match data.first() {
            None => return Err(CodecError::TruncatedHeader { len: 0 }),
            Some(&m) if m != MAGIC => return Err(CodecError::InvalidMagic(m)),
            Some(_) => {}
        }
        if data.len() < HEADER_LEN {
            return Err(CodecError::TruncatedHeader { len: data.len() });
        }

        let mut cursor = &data[1..HEADER_LEN];
        let channels = cursor.read_u8()?;
        let width = cursor.read_u16::<LittleEndian>()?;
        let height = cursor.read_u16::<LittleEndian>()?;

        if channels != 3 && channels != 4 {
            return Err(CodecError::UnsupportedChannelCount(channels));
        }
        if width == 0 || height == 0 {
            return Err(CodecError::InvalidDimensions {
                width: width as u32,
                height: height as u32,
            });
        }
        Ok(ImageHeader {
            channels,
            width,
            height,
        })
    }

    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

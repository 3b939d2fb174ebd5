use crate::error::*;
use byteorder::{ByteOrder, LE};

pub const RIFF_MAGIC: &[u8; 4] = b"RIFF";
pub const WAVE_MAGIC: &[u8; 4] = b"WAVE";
pub const FMT_MAGIC: &[u8; 4] = b"fmt ";
pub const DATA_MARKER: &[u8; 4] = b"data";

/// The `fmt ` block starts right after the 12-byte RIFF/WAVE preamble;
/// the `data` marker is searched from here onward.
pub const HEADER_LEN: usize = 12;

pub(crate) fn magic_at(data: &[u8], offset: usize, magic: &[u8; 4]) -> bool {
    match data.get(offset..offset + 4) {
        Some(bytes) => bytes == magic,
        None => false,
    }
}

pub(crate) fn read_u16(data: &[u8], offset: usize) -> Result<u16> {
    if data.len() < offset + 2 {
        return Err(WavError::UnsupportedFileSize);
    }
    Ok(LE::read_u16(&data[offset..offset + 2]))
}

pub(crate) fn read_u32(data: &[u8], offset: usize) -> Result<u32> {
    if data.len() < offset + 4 {
        return Err(WavError::UnsupportedFileSize);
    }
    Ok(LE::read_u32(&data[offset..offset + 4]))
}

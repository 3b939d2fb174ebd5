use crate::error::*;
use crate::types::*;
use byteorder::{ByteOrder, LE};

/// Location of the `data` block's payload within the file.
#[derive(Debug, Clone, Copy)]
pub struct DataChunk {
    /// First payload byte, right after the 4-byte size field.
    pub offset: usize,
    /// Size the block claims to have. May overrun the actual file.
    pub declared_size: u32,
}

impl DataChunk {
    /// Scans forward from the end of the preamble for the first `data`
    /// marker with a complete size field behind it.
    ///
    /// The first 4-byte match wins, even if those bytes sit inside an
    /// earlier chunk's payload; generic chunk walking is out of scope.
    pub(crate) fn scan(data: &[u8]) -> Result<Self> {
        for i in HEADER_LEN..data.len().saturating_sub(8) {
            if data[i..i + 4] == *DATA_MARKER {
                return Ok(Self {
                    offset: i + 8,
                    declared_size: LE::read_u32(&data[i + 4..i + 8]),
                });
            }
        }
        Err(WavError::MissingDataChunk)
    }

    /// The payload bytes, clamped to the end of the file. A declared
    /// size past EOF yields a short payload, not an error, so truncated
    /// captures still decode.
    pub fn payload<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        let end = data
            .len()
            .min(self.offset.saturating_add(self.declared_size as usize));
        &data[self.offset..end]
    }
}

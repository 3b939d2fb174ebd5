//! Raw PCM extraction from WAVE (RIFF) container files.

pub mod chunks;
mod error;
mod source;
mod types;

pub use crate::error::{Result, WavError};
pub use crate::source::{ByteSource, FsSource};
pub use crate::types::{DATA_MARKER, FMT_MAGIC, HEADER_LEN, RIFF_MAGIC, WAVE_MAGIC};

use crate::chunks::{DataChunk, FormatChunk};
use crate::types::magic_at;
use std::path::Path;
use std::time::Duration;

/// Decoded pcm payload plus the format fields it was validated against.
///
/// `samples` is an owned copy of the `data` block's bytes, interleaved
/// per channel, independent of the buffer it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcmData {
    pub samples: Vec<u8>,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub channels: u16,
}

impl PcmData {
    /// Reads a whole WAVE file from a byte buffer.
    ///
    /// The stages run in a fixed order and the first failed check
    /// decides the error: container magics, format tag, field
    /// allow-lists, then the `data` block scan.
    pub fn read(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Err(WavError::FileEmpty);
        }
        if data.len() <= HEADER_LEN {
            return Err(WavError::UnsupportedFileSize);
        }

        if !magic_at(data, 0, RIFF_MAGIC) {
            return Err(WavError::InvalidRiffMagic);
        }
        if !magic_at(data, 8, WAVE_MAGIC) {
            return Err(WavError::InvalidWaveMagic);
        }

        let fmt = FormatChunk::read(data)?;
        let chunk = DataChunk::scan(data)?;

        Ok(Self {
            samples: chunk.payload(data).to_vec(),
            sample_rate: fmt.sample_rate,
            bits_per_sample: fmt.bits_per_sample,
            channels: fmt.channels,
        })
    }

    /// Runs the pre-read checks of `source`, then parses its contents.
    pub fn read_from<S: ByteSource>(source: &S) -> Result<Self> {
        if !source.exists() {
            return Err(WavError::NotFound);
        }
        if !source.is_regular_file() || !source.has_expected_extension() {
            return Err(WavError::InvalidExtension);
        }
        if !source.can_read() {
            return Err(WavError::UnauthorizedRead);
        }

        let data = source.read_all()?;
        Self::read(&data)
    }

    /// Convenience entry point for a `.wav` path on the local filesystem.
    pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::read_from(&FsSource::new(path))
    }

    pub fn bytes_per_frame(&self) -> usize {
        self.channels as usize * (self.bits_per_sample as usize / 8)
    }

    pub fn audio_length(&self) -> Duration {
        let frames = self.samples.len() / self.bytes_per_frame();
        Duration::from_secs_f64(frames as f64 / self.sample_rate as f64)
    }
}

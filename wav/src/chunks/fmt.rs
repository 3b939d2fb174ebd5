use crate::error::*;
use crate::types::*;

// Fixed layout of the `fmt ` block, relative to the start of the file:
//
// 12  4  "fmt "
// 16  4  block size (not validated)
// 20  2  audio format tag, 1 = integer pcm
// 22  2  channel count
// 24  4  sample rate
// 28  4  byte rate (not validated)
// 32  2  block align (not validated)
// 34  2  bits per sample

pub const ALLOWED_SAMPLE_RATES: [u32; 4] = [44_100, 48_000, 96_000, 192_000];
pub const ALLOWED_CHANNELS: [u16; 2] = [1, 2];
pub const ALLOWED_BITS_PER_SAMPLE: [u16; 3] = [16, 24, 32];

#[derive(Debug)]
pub struct FormatChunk {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
}

impl FormatChunk {
    pub(crate) fn read(data: &[u8]) -> Result<Self> {
        if !magic_at(data, HEADER_LEN, FMT_MAGIC) {
            return Err(WavError::InvalidFmtChunk);
        }

        // only integer pcm for now, maybe IEEE float (3) later
        let audio_format = read_u16(data, 20)?;
        if audio_format != 1 {
            return Err(WavError::InvalidFormatType(audio_format));
        }

        let channels = read_u16(data, 22)?;
        let sample_rate = read_u32(data, 24)?;
        let bits_per_sample = read_u16(data, 34)?;

        if !ALLOWED_SAMPLE_RATES.contains(&sample_rate) {
            return Err(WavError::UnsupportedSampleRate(sample_rate));
        }
        if !ALLOWED_CHANNELS.contains(&channels) {
            return Err(WavError::UnsupportedChannels(channels));
        }
        if !ALLOWED_BITS_PER_SAMPLE.contains(&bits_per_sample) {
            return Err(WavError::UnsupportedBitsPerSample(bits_per_sample));
        }

        Ok(Self {
            channels,
            sample_rate,
            bits_per_sample,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(tag: u16, channels: u16, sample_rate: u32, bits: u16) -> Vec<u8> {
        let mut data = vec![0; HEADER_LEN];
        data.extend_from_slice(FMT_MAGIC);
        data.extend_from_slice(&16u32.to_le_bytes());
        data.extend_from_slice(&tag.to_le_bytes());
        data.extend_from_slice(&channels.to_le_bytes());
        data.extend_from_slice(&sample_rate.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&0u16.to_le_bytes());
        data.extend_from_slice(&bits.to_le_bytes());
        data
    }

    #[test]
    fn reads_valid_fields() {
        let fmt = FormatChunk::read(&header(1, 2, 48_000, 24)).unwrap();
        assert_eq!(fmt.channels, 2);
        assert_eq!(fmt.sample_rate, 48_000);
        assert_eq!(fmt.bits_per_sample, 24);
    }

    #[test]
    fn rejects_missing_magic() {
        let mut data = header(1, 2, 44_100, 16);
        data[HEADER_LEN] = b'F';
        assert!(matches!(
            FormatChunk::read(&data),
            Err(WavError::InvalidFmtChunk)
        ));
    }

    #[test]
    fn rejects_float_format_tag() {
        assert!(matches!(
            FormatChunk::read(&header(3, 2, 44_100, 16)),
            Err(WavError::InvalidFormatType(3))
        ));
    }

    #[test]
    fn sample_rate_checked_before_channels() {
        // both fields are out of range; the sample rate wins
        assert!(matches!(
            FormatChunk::read(&header(1, 7, 22_050, 16)),
            Err(WavError::UnsupportedSampleRate(22_050))
        ));
    }

    #[test]
    fn rejects_unlisted_values() {
        assert!(matches!(
            FormatChunk::read(&header(1, 7, 44_100, 16)),
            Err(WavError::UnsupportedChannels(7))
        ));
        assert!(matches!(
            FormatChunk::read(&header(1, 1, 44_100, 8)),
            Err(WavError::UnsupportedBitsPerSample(8))
        ));
    }

    #[test]
    fn truncated_header_is_an_error() {
        let data = header(1, 2, 44_100, 16);
        for len in HEADER_LEN..data.len() {
            assert!(FormatChunk::read(&data[..len]).is_err());
        }
    }
}

use thiserror::Error;
#[derive(Error, Debug)]
pub enum WavError {
    // reported before the file contents are ever touched
    #[error("file does not exist")]
    NotFound,
    #[error("not a regular .wav file")]
    InvalidExtension,
    #[error("not authorized to read file")]
    UnauthorizedRead,
    #[error("file is in use by another process")]
    FileLocked,
    #[error("unknown error while reading file")]
    UnknownReadError,
    #[error("file is empty")]
    FileEmpty,

    #[error("file too small to hold a wave header")]
    UnsupportedFileSize,
    #[error("container magic is not RIFF")]
    InvalidRiffMagic,
    #[error("format magic is not WAVE")]
    InvalidWaveMagic,
    #[error("missing fmt chunk")]
    InvalidFmtChunk,
    #[error("audio format tag {0} is not integer pcm")]
    InvalidFormatType(u16),

    #[error("unsupported sample rate {0}")]
    UnsupportedSampleRate(u32),
    #[error("unsupported channel count {0}")]
    UnsupportedChannels(u16),
    #[error("unsupported bits per sample {0}")]
    UnsupportedBitsPerSample(u16),

    #[error("missing data chunk")]
    MissingDataChunk,
}

pub type Result<T> = std::result::Result<T, WavError>;

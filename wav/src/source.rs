use crate::error::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Pre-read capabilities of a wave input.
///
/// The parsing core only ever sees the byte buffer `read_all` produces;
/// keeping the filesystem behind this seam lets the pipeline run against
/// in-memory buffers in tests.
pub trait ByteSource {
    fn exists(&self) -> bool;
    fn is_regular_file(&self) -> bool;
    fn has_expected_extension(&self) -> bool;
    fn can_read(&self) -> bool;
    fn read_all(&self) -> Result<Vec<u8>>;
}

/// Filesystem-backed source for `.wav` paths.
#[derive(Debug)]
pub struct FsSource {
    path: PathBuf,
}

impl FsSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ByteSource for FsSource {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn is_regular_file(&self) -> bool {
        self.path.is_file()
    }

    fn has_expected_extension(&self) -> bool {
        match self.path.extension() {
            Some(ext) => ext == "wav",
            None => false,
        }
    }

    #[cfg(unix)]
    fn can_read(&self) -> bool {
        use std::os::unix::fs::MetadataExt;
        match fs::metadata(&self.path) {
            Ok(meta) => meta.mode() & 0o444 != 0,
            Err(_) => false,
        }
    }

    // no portable read-permission bits; let read_all classify the failure
    #[cfg(not(unix))]
    fn can_read(&self) -> bool {
        true
    }

    fn read_all(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).map_err(classify_read_error)
    }
}

fn classify_read_error(err: io::Error) -> WavError {
    match err.kind() {
        io::ErrorKind::NotFound => WavError::NotFound,
        io::ErrorKind::PermissionDenied => WavError::UnauthorizedRead,
        _ if is_locked(&err) => WavError::FileLocked,
        _ => WavError::UnknownReadError,
    }
}

#[cfg(unix)]
fn is_locked(err: &io::Error) -> bool {
    matches!(err.raw_os_error(), Some(libc::EBUSY) | Some(libc::ETXTBSY))
}

#[cfg(not(unix))]
fn is_locked(_err: &io::Error) -> bool {
    false
}

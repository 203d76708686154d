//! Commit writer: writes the converted bytes back over the source file.

use super::buffer::ByteBuffer;
use crate::config::CommitMode;
use crate::error::{ConvertError, Result};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Replace the content of the existing file at `path` with `output`.
///
/// The file is opened without create, append, or truncate. In
/// `CommitMode::Overwrite` a shorter `output` leaves the old trailing bytes in
/// place; `CommitMode::Truncate` cuts the file to `output.len()` afterwards.
pub fn commit_file(path: &Path, output: &ByteBuffer, mode: CommitMode) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(ConvertError::OpenFailed)?;

    let written = write_full(&mut file, output.as_bytes())?;

    if mode == CommitMode::Truncate {
        file.set_len(written as u64).map_err(ConvertError::WriteFailed)?;
    }

    tracing::debug!(path = %path.display(), bytes = written, ?mode, "committed output");
    Ok(())
}

/// Write all of `data`, failing if the writer stops accepting bytes early.
fn write_full<W: Write>(writer: &mut W, data: &[u8]) -> Result<usize> {
    let mut written = 0;
    while written < data.len() {
        match writer.write(&data[written..]) {
            Ok(0) => break,
            Ok(n) => written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ConvertError::WriteFailed(e)),
        }
    }
    if written != data.len() {
        return Err(ConvertError::ShortWrite {
            expected: data.len(),
            actual: written,
        });
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{format_message, SystemErrorLookup};
    use tempfile::NamedTempFile;

    /// Accepts up to `limit` bytes, then reports zero-length writes.
    struct StallingWriter {
        accepted: Vec<u8>,
        limit: usize,
    }

    impl Write for StallingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let n = buf.len().min(self.limit - self.accepted.len());
            self.accepted.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device detached"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn buffer(data: &[u8]) -> ByteBuffer {
        ByteBuffer::from_vec(data.to_vec())
    }

    #[test]
    fn test_overwrite_longer_content() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"abc").unwrap();

        commit_file(file.path(), &buffer(b"abcdef"), CommitMode::Overwrite).unwrap();
        assert_eq!(std::fs::read(file.path()).unwrap(), b"abcdef");
    }

    #[test]
    fn test_overwrite_leaves_residual_bytes() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"0123456789").unwrap();

        commit_file(file.path(), &buffer(b"XYZ"), CommitMode::Overwrite).unwrap();
        assert_eq!(std::fs::read(file.path()).unwrap(), b"XYZ3456789");
    }

    #[test]
    fn test_truncate_removes_residual_bytes() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"0123456789").unwrap();

        commit_file(file.path(), &buffer(b"XYZ"), CommitMode::Truncate).unwrap();
        assert_eq!(std::fs::read(file.path()).unwrap(), b"XYZ");
    }

    #[test]
    fn test_does_not_create_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = commit_file(&path, &buffer(b"data"), CommitMode::Overwrite).unwrap_err();
        assert!(matches!(err, ConvertError::OpenFailed(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_stalled_writer_is_short_write() {
        let mut writer = StallingWriter { accepted: Vec::new(), limit: 3 };

        let err = write_full(&mut writer, b"abcdef").unwrap_err();
        assert!(matches!(err, ConvertError::ShortWrite { expected: 6, actual: 3 }));
        assert_eq!(writer.accepted, b"abc");
        assert_eq!(format_message(&err, &SystemErrorLookup), "Cannot write file");
    }

    #[test]
    fn test_write_error_is_write_failure() {
        let err = write_full(&mut FailingWriter, b"abcdef").unwrap_err();
        assert!(matches!(err, ConvertError::WriteFailed(_)));
        assert_eq!(
            format_message(&err, &SystemErrorLookup),
            "Cannot write file: \"Unknown error\""
        );
    }

    #[test]
    fn test_write_full_counts_bytes() {
        let mut writer = StallingWriter { accepted: Vec::new(), limit: 16 };

        assert_eq!(write_full(&mut writer, b"abcdef").unwrap(), 6);
        assert_eq!(writer.accepted, b"abcdef");
    }
}

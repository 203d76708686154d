//! Byte loader: reads a whole file into memory.

use super::buffer::ByteBuffer;
use crate::error::{ConvertError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read the entire file at `path`.
///
/// The file must fit a 32-bit byte count. The buffer is allocated at exactly
/// the size reported up front, and the read must fill it; a file that shrinks
/// while being read is a `ShortRead`, never a partial result.
pub fn load_file(path: &Path) -> Result<ByteBuffer> {
    let file = File::open(path).map_err(ConvertError::OpenFailed)?;

    let size = file
        .metadata()
        .map_err(ConvertError::SizeQueryFailed)?
        .len();
    let expected =
        u32::try_from(size).map_err(|_| ConvertError::SizeUnsupported { size })? as usize;

    let data = read_exact_len(file, expected)?;

    tracing::debug!(path = %path.display(), bytes = data.len(), "loaded source file");
    Ok(ByteBuffer::from_vec(data))
}

/// Read exactly `expected` bytes from `reader` into a buffer of that size.
fn read_exact_len<R: Read>(reader: R, expected: usize) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    data.try_reserve_exact(expected)?;

    let actual = reader
        .take(expected as u64)
        .read_to_end(&mut data)
        .map_err(ConvertError::ReadFailed)?;
    if actual != expected {
        return Err(ConvertError::ShortRead { expected, actual });
    }

    Ok(data)
}

//! Load, transcode, commit. No retries and no partial success.

use super::{loader, transcoder, writer};
use crate::config::ConvertOptions;
use crate::error::Result;
use std::path::Path;

/// Byte counts of a completed conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    pub source_bytes: usize,
    pub output_bytes: usize,
}

/// Convert the Shift-JIS file at `path` to UTF-8 in place.
///
/// Any failure before the commit leaves the file untouched.
pub fn convert_file(path: &Path, options: &ConvertOptions) -> Result<Conversion> {
    let source = loader::load_file(path)?;
    let output = transcoder::transcode(&source)?;
    writer::commit_file(path, &output, options.commit_mode)?;

    Ok(Conversion {
        source_bytes: source.len(),
        output_bytes: output.len(),
    })
}

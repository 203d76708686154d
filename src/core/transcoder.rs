//! Shift-JIS to UTF-8 transcoding.
//!
//! Conversion goes through a wide (UTF-16) intermediate in two phases, and
//! both phases size their output for the worst case up front. Each phase
//! returns a buffer whose `len()` is the number of units it actually wrote;
//! the allocated capacity is never used as a length.

use super::buffer::{try_filled, ByteBuffer};
use crate::error::{ConvertError, Result};
use encoding_rs::{DecoderResult, EncoderResult, SHIFT_JIS, UTF_8};

/// Longest UTF-8 sequence for one code point.
const MAX_UTF8_BYTES_PER_CODE_POINT: usize = 4;

/// Decoded text between the two phases.
///
/// Shift-JIS maps entirely into the Basic Multilingual Plane, so every unit
/// is exactly one code point.
#[derive(Debug)]
struct WideText {
    units: Vec<u16>,
}

impl WideText {
    fn code_points(&self) -> usize {
        self.units.len()
    }
}

/// Convert Shift-JIS bytes to UTF-8 bytes.
///
/// Empty input yields empty output. Any malformed Shift-JIS sequence fails
/// the whole conversion; nothing is replaced or skipped.
pub fn transcode(source: &ByteBuffer) -> Result<ByteBuffer> {
    let wide = decode_shift_jis(source.as_bytes())?;
    let output = encode_utf8(&wide)?;
    tracing::debug!(
        source_bytes = source.len(),
        code_points = wide.code_points(),
        output_bytes = output.len(),
        "transcoded"
    );
    Ok(output)
}

fn decode_shift_jis(src: &[u8]) -> Result<WideText> {
    let mut decoder = SHIFT_JIS.new_decoder_without_bom_handling();

    // One slot per input byte always suffices; the decoder may ask for slack.
    let capacity = decoder
        .max_utf16_buffer_length(src.len())
        .ok_or(ConvertError::OutOfMemory)?
        .max(src.len());
    let mut units = try_filled::<u16>(capacity)?;

    let (result, read, written) =
        decoder.decode_to_utf16_without_replacement(src, &mut units, true);
    match result {
        DecoderResult::InputEmpty => {}
        DecoderResult::Malformed(bad, extra) => {
            let offset = read.saturating_sub(bad as usize + extra as usize);
            return Err(ConvertError::InvalidSourceEncoding { offset });
        }
        DecoderResult::OutputFull => {
            tracing::error!(capacity, read, "decode buffer exhausted");
            return Err(ConvertError::EncodingFailure);
        }
    }

    units.truncate(written);
    Ok(WideText { units })
}

fn encode_utf8(wide: &WideText) -> Result<ByteBuffer> {
    let mut encoder = UTF_8.new_encoder();

    let worst_case = wide
        .code_points()
        .checked_mul(MAX_UTF8_BYTES_PER_CODE_POINT)
        .ok_or(ConvertError::OutOfMemory)?;
    let capacity = encoder
        .max_buffer_length_from_utf16_without_replacement(wide.units.len())
        .ok_or(ConvertError::OutOfMemory)?
        .max(worst_case);
    let mut bytes = try_filled::<u8>(capacity)?;

    let (result, _read, written) =
        encoder.encode_from_utf16_without_replacement(&wide.units, &mut bytes, true);
    match result {
        EncoderResult::InputEmpty => {}
        EncoderResult::OutputFull | EncoderResult::Unmappable(_) => {
            return Err(ConvertError::EncodingFailure);
        }
    }
    if written == 0 && !wide.units.is_empty() {
        return Err(ConvertError::EncodingFailure);
    }

    bytes.truncate(written);
    Ok(ByteBuffer::from_vec(bytes))
}

//! Conversion pipeline: byte loader, transcoder, and commit writer.

pub mod buffer;
pub mod loader;
pub mod pipeline;
pub mod transcoder;
pub mod writer;

pub use buffer::ByteBuffer;
pub use pipeline::{convert_file, Conversion};

//! In-place Shift-JIS to UTF-8 file conversion.
//!
//! The whole file is loaded, transcoded through a wide intermediate, and
//! written back over the same path. Any failure aborts the run.

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod report;
pub mod utils;

pub use config::{CommitMode, ConvertOptions};
pub use error::{ConvertError, Result};

//! Conversion options.
//!
//! There is no configuration file; the binary always runs with
//! `ConvertOptions::default()`. Library callers may opt into truncation.

/// How the converted bytes replace the original file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitMode {
    /// Write over the existing content without shrinking the file.
    ///
    /// If the new content is shorter than the old file, the old trailing
    /// bytes stay on disk.
    #[default]
    Overwrite,
    /// Write over the existing content, then cut the file to the new length.
    Truncate,
}

/// Options for a single conversion run.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub commit_mode: CommitMode,
}

impl ConvertOptions {
    pub fn with_commit_mode(mut self, commit_mode: CommitMode) -> Self {
        self.commit_mode = commit_mode;
        self
    }
}

//! Turning a conversion outcome into what the user sees.
//!
//! The core decides what a message says; a [`Notifier`] decides how it is
//! shown.

use crate::error::ConvertError;
use std::io;

/// Shown when the OS has no description for an error.
pub const UNKNOWN_OS_ERROR: &str = "Unknown error";

/// Surface for the final outcome of a run.
pub trait Notifier {
    /// Show a fatal error message.
    fn fatal(&self, message: &str);

    /// Signal that the conversion finished.
    fn finished(&self);
}

/// Looks up the OS-provided description of an I/O error.
pub trait OsErrorLookup {
    fn describe(&self, error: &io::Error) -> Option<String>;
}

/// Describes errors using the operating system's message table.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemErrorLookup;

impl OsErrorLookup for SystemErrorLookup {
    fn describe(&self, error: &io::Error) -> Option<String> {
        let code = error.raw_os_error()?;
        let text = io::Error::from_raw_os_error(code).to_string();
        let suffix = format!(" (os error {})", code);
        let description = text.strip_suffix(&suffix).unwrap_or(&text).trim();
        if description.is_empty() {
            None
        } else {
            Some(description.to_string())
        }
    }
}

/// Build the user-facing message for `error`.
///
/// Errors with an OS-level cause get its description appended as
/// `message: "description"`.
pub fn format_message(error: &ConvertError, lookup: &dyn OsErrorLookup) -> String {
    match error.os_error() {
        Some(os_error) => {
            let description = lookup
                .describe(os_error)
                .unwrap_or_else(|| UNKNOWN_OS_ERROR.to_string());
            format!("{}: \"{}\"", error, description)
        }
        None => error.to_string(),
    }
}

//! Top-level driver: takes the process arguments, runs the conversion, and
//! reports the outcome exactly once.

use crate::config::ConvertOptions;
use crate::core::{convert_file, Conversion};
use crate::error::{ConvertError, Result};
use crate::report::{self, Notifier, OsErrorLookup};
use std::ffi::OsString;
use std::path::PathBuf;

/// Pick the target path out of the process arguments.
///
/// The first element is the program name; the second is the file. Anything
/// after that is ignored.
pub fn target_path<I>(args: I) -> Result<PathBuf>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .nth(1)
        .map(PathBuf::from)
        .ok_or(ConvertError::MissingArgument)
}

/// Run one conversion and notify the outcome.
///
/// The returned result is for the caller's exit status; the user has already
/// been told either way.
pub fn run<I>(
    args: I,
    options: &ConvertOptions,
    notifier: &dyn Notifier,
    lookup: &dyn OsErrorLookup,
) -> Result<Conversion>
where
    I: IntoIterator<Item = OsString>,
{
    let outcome = target_path(args).and_then(|path| {
        tracing::info!(path = %path.display(), "converting");
        convert_file(&path, options)
    });

    match &outcome {
        Ok(conversion) => {
            tracing::info!(
                source_bytes = conversion.source_bytes,
                output_bytes = conversion.output_bytes,
                "finished"
            );
            notifier.finished();
        }
        Err(err) => {
            let message = report::format_message(err, lookup);
            tracing::error!(error = ?err, "{}", message);
            notifier.fatal(&message);
        }
    }

    outcome
}

//! Modal dialogs for the final outcome.
//!
//! Uses rfd's native message boxes on Windows. Elsewhere there is no dialog
//! backend linked in, so messages go to stderr.

use crate::report::Notifier;

pub const FATAL_TITLE: &str = "Fatal error";
pub const FINISHED_TITLE: &str = "Finished";
pub const FINISHED_MESSAGE: &str = "Finished.";

/// Shows each outcome in a blocking message box.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogNotifier;

#[cfg(windows)]
impl Notifier for DialogNotifier {
    fn fatal(&self, message: &str) {
        use rfd::{MessageButtons, MessageDialog, MessageLevel};

        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(FATAL_TITLE)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn finished(&self) {
        use rfd::{MessageButtons, MessageDialog, MessageLevel};

        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(FINISHED_TITLE)
            .set_description(FINISHED_MESSAGE)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

#[cfg(not(windows))]
impl Notifier for DialogNotifier {
    fn fatal(&self, message: &str) {
        eprintln!("{}: {}", FATAL_TITLE, message);
    }

    fn finished(&self) {
        eprintln!("{}", FINISHED_MESSAGE);
    }
}

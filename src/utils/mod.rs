//! Utility modules for dialogs and logging.

pub mod dialog;
pub mod logging;

//! sjis2utf8 - rewrites the file given as the only argument from Shift-JIS
//! to UTF-8 and reports the result in a dialog.

// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use sjis2utf8::app;
use sjis2utf8::report::SystemErrorLookup;
use sjis2utf8::utils::{dialog::DialogNotifier, logging};
use sjis2utf8::ConvertOptions;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = logging::init() {
        eprintln!("{:#}", e);
    }

    let result = app::run(
        std::env::args_os(),
        &ConvertOptions::default(),
        &DialogNotifier,
        &SystemErrorLookup,
    );

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `FolioError` and appends a hint for each
//! error class. This keeps structured error data in the library and
//! user-facing presentation in the CLI.

use std::fmt::Write;

use anyhow::Error;
use gitfolio_core::FolioError;

/// Formats an error for CLI display with helpful hints.
///
/// If the error is not a `FolioError`, returns the original error message.
pub fn format_error(error: &Error) -> String {
    if let Some(folio_err) = error.downcast_ref::<FolioError>() {
        match folio_err {
            FolioError::Api { status, .. } => {
                let mut msg = folio_err.to_string();
                match status {
                    403 | 429 => {
                        let _ = write!(
                            msg,
                            "\n\nTip: Anonymous GitHub API requests are limited to 60 per \
                             hour per address. Wait a while and try again."
                        );
                    }
                    404 => {
                        let _ = write!(
                            msg,
                            "\n\nTip: Check that the configured username exists on GitHub."
                        );
                    }
                    _ => {
                        let _ = write!(msg, "\n\nTip: Try again in a moment.");
                    }
                }
                msg
            }
            FolioError::Network(_) => {
                format!("{folio_err}\n\nTip: Check your internet connection and try again.")
            }
            FolioError::InvalidListing(_) => {
                format!(
                    "{folio_err}\n\nTip: GitHub may have returned an error payload instead \
                     of a listing. Try again in a moment."
                )
            }
            FolioError::Config { message: _ } => {
                format!(
                    "{folio_err}\n\nTip: Check your config file at {}",
                    gitfolio_core::config_file_path().display()
                )
            }
            FolioError::Misconfigured => folio_err.to_string(),
        }
    } else {
        error.to_string()
    }
}

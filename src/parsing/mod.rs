//! Parsers for peak-calling configuration files.
//!
//! This module provides parsers for:
//!
//! - **Peakcall sample sheets**: ChIP-to-input pairings and group membership
//! - **Contrast files**: ordered pairs of groups to compare
//!
//! ## Example
//!
//! ```rust,no_run
//! use peakcall_config::parsing::{contrasts, peakcall, DEFAULT_DELIMITER};
//! use std::path::Path;
//!
//! let sheet = peakcall::parse_peakcall_file(Path::new("peakcall.tsv"), DEFAULT_DELIMITER)
//!     .unwrap()
//!     .into_inner();
//! let comparisons =
//!     contrasts::parse_contrasts_file(Path::new("contrasts.tsv"), &sheet, DEFAULT_DELIMITER)
//!         .unwrap()
//!         .into_inner();
//! ```
//!
//! ## Severity
//!
//! Conditions that leave a usable result are returned as [`ParseWarning`]s
//! alongside the value and logged through `tracing`. Conditions that leave no
//! usable result are returned as a [`ParseError`].

use std::path::Path;

use thiserror::Error;

pub mod contrasts;
pub mod diagnostics;
pub mod peakcall;

pub use diagnostics::{ParseWarning, Parsed, SkipReason};

/// Field delimiter used when none is given
pub const DEFAULT_DELIMITER: char = '\t';

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error reading {file}: {source}")]
    Io {
        file: String,
        source: std::io::Error,
    },

    #[error("peakcall file, {file}, is empty! Please add ChIP-Input pairs and group information to the file and try again.")]
    EmptySampleSheet { file: String },

    #[error(
        "the following group(s) in \"{file}\" are not defined in the peakcall file: {}",
        .groups.join(",")
    )]
    UndefinedGroups { file: String, groups: Vec<String> },
}

/// Name used for a parsed source in diagnostics
pub(crate) fn source_name(source: Option<&Path>) -> String {
    source.map_or_else(|| "<input>".to_string(), |p| p.display().to_string())
}

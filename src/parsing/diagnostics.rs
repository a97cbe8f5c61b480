//! Non-fatal parse diagnostics.

use tracing::{debug, warn};

/// Why a sample-sheet row was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The ChIP column is absent or empty
    MissingChip,
    /// The group column is absent or empty
    MissingGroup,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingChip => write!(f, "no ChIP sample"),
            Self::MissingGroup => write!(f, "no group"),
        }
    }
}

/// A problem that was worked around while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// The sample-sheet header lacks one or more named columns, so the
    /// positional layout 1=ChIP, 2=Input, 3=Group was assumed
    MissingHeaderColumns {
        file: String,
        missing: Vec<&'static str>,
    },

    /// A sample-sheet row was dropped
    SkippedSampleRow {
        file: String,
        line: usize,
        reason: SkipReason,
    },

    /// A contrast row without two non-empty groups was dropped
    MalformedContrastRow {
        file: String,
        line: usize,
        content: String,
    },
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingHeaderColumns { file, missing } => write!(
                f,
                "{file} is missing at least one of the following column names: ChIP, Input, Group \
                 (missing: {}); assuming columns 1=ChIP, 2=Input, 3=Group",
                missing.join(", ")
            ),
            Self::SkippedSampleRow { file, line, reason } => {
                write!(f, "skipping {file} line {line}: {reason}")
            }
            Self::MalformedContrastRow {
                file,
                line,
                content,
            } => write!(
                f,
                "{file} is missing at least one group on line {line}: {content}; \
                 skipping line, check if line is tab separated"
            ),
        }
    }
}

/// A parsed value together with the warnings raised while producing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T> {
    pub value: T,
    pub warnings: Vec<ParseWarning>,
}

impl<T> Parsed<T> {
    pub fn into_inner(self) -> T {
        self.value
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Log `warning` and keep it for the caller.
///
/// Skipped sample rows are logged at debug level only.
pub(crate) fn report(warnings: &mut Vec<ParseWarning>, warning: ParseWarning) {
    match &warning {
        ParseWarning::SkippedSampleRow { .. } => debug!("{warning}"),
        _ => warn!("{warning}"),
    }
    warnings.push(warning);
}

//! Parser for peakcall sample sheets.
//!
//! A sample sheet pairs each ChIP sample with its input sample and assigns it
//! to one or more comma-separated groups:
//!
//! ```text
//! ChIP        Input       Group
//! cfChIP_001  Input_001   G1,G4
//! cfChIP_002              G1
//! ```
//!
//! The header names columns case-insensitively in any order. When any of the
//! three names is missing the columns are taken positionally instead.

use std::path::Path;

use tracing::debug;

use crate::core::sheet::PeakCallSheet;
use crate::core::types::{GroupName, SampleId};
use crate::parsing::diagnostics::{report, ParseWarning, Parsed, SkipReason};
use crate::parsing::{source_name, ParseError};

/// Separator between group names within the group column
const GROUP_SEPARATOR: char = ',';

/// Positions of the ChIP, input and group columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub chip: usize,
    pub input: usize,
    pub group: usize,
}

impl ColumnLayout {
    /// Layout assumed when the header does not name every column
    pub const POSITIONAL: Self = Self {
        chip: 0,
        input: 1,
        group: 2,
    };

    /// Locate the columns by name in lower-cased header fields.
    ///
    /// # Errors
    ///
    /// Returns the display names of the columns that could not be found.
    pub fn from_header(fields: &[String]) -> Result<Self, Vec<&'static str>> {
        let find = |name: &str| fields.iter().position(|f| f == name);

        match (find("chip"), find("input"), find("group")) {
            (Some(chip), Some(input), Some(group)) => Ok(Self { chip, input, group }),
            (chip, input, group) => Err([("ChIP", chip), ("Input", input), ("Group", group)]
                .into_iter()
                .filter(|(_, idx)| idx.is_none())
                .map(|(name, _)| name)
                .collect()),
        }
    }
}

/// Parse a peakcall sample sheet from a file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::EmptySampleSheet` if it has no lines.
pub fn parse_peakcall_file(
    path: &Path,
    delimiter: char,
) -> Result<Parsed<PeakCallSheet>, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        file: path.display().to_string(),
        source,
    })?;
    parse_peakcall_text(&content, delimiter, Some(path))
}

/// Parse peakcall sample sheet text.
///
/// `source` names the input in diagnostics. Rows without a ChIP sample or
/// without a group are dropped and recorded as
/// [`ParseWarning::SkippedSampleRow`].
///
/// # Errors
///
/// Returns `ParseError::EmptySampleSheet` if the text has no lines.
pub fn parse_peakcall_text(
    text: &str,
    delimiter: char,
    source: Option<&Path>,
) -> Result<Parsed<PeakCallSheet>, ParseError> {
    let file = source_name(source);
    let mut lines = text.lines().enumerate();

    let Some((_, header_line)) = lines.next() else {
        return Err(ParseError::EmptySampleSheet { file });
    };

    // Sheets saved from spreadsheet tools often start with a byte order mark
    let header_line = header_line.strip_prefix('\u{feff}').unwrap_or(header_line);

    let header: Vec<String> = header_line
        .split(delimiter)
        .map(|col| col.trim().to_lowercase())
        .collect();

    let mut warnings = Vec::new();
    let layout = match ColumnLayout::from_header(&header) {
        Ok(layout) => layout,
        Err(missing) => {
            report(
                &mut warnings,
                ParseWarning::MissingHeaderColumns {
                    file: file.clone(),
                    missing,
                },
            );
            ColumnLayout::POSITIONAL
        }
    };

    let mut sheet = PeakCallSheet::new();

    for (i, line) in lines {
        // Line numbers in diagnostics are 1-based
        let line_num = i + 1;
        let fields: Vec<&str> = line.split(delimiter).map(str::trim).collect();

        let input = fields.get(layout.input).copied().unwrap_or_default();

        let Some(chip) = fields.get(layout.chip).copied().filter(|c| !c.is_empty()) else {
            report(
                &mut warnings,
                ParseWarning::SkippedSampleRow {
                    file: file.clone(),
                    line: line_num,
                    reason: SkipReason::MissingChip,
                },
            );
            continue;
        };

        let Some(group_field) = fields.get(layout.group).copied().filter(|g| !g.is_empty())
        else {
            report(
                &mut warnings,
                ParseWarning::SkippedSampleRow {
                    file: file.clone(),
                    line: line_num,
                    reason: SkipReason::MissingGroup,
                },
            );
            continue;
        };

        // Empty names between commas are dropped, the pairing is still kept
        let groups = group_field
            .split(GROUP_SEPARATOR)
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(GroupName::new);

        // An empty input column means ChIP-only peak calling
        let input = (!input.is_empty()).then(|| SampleId::new(input));
        sheet.add_row(SampleId::new(chip), input, groups);
    }

    debug!(
        "Parsed {} ChIP samples in {} groups from {file}",
        sheet.len(),
        sheet.groups.len()
    );

    Ok(Parsed {
        value: sheet,
        warnings,
    })
}

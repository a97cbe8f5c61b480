//! Parser for contrast files.
//!
//! Each line names two groups to compare, separated by the delimiter. There is
//! no header. Every group must be defined by the peakcall sample sheet:
//!
//! ```text
//! G2  G1
//! G4  G3
//! G5  G1
//! ```

use std::path::Path;

use indexmap::IndexSet;
use tracing::debug;

use crate::core::contrast::{ContrastPair, Contrasts, KnownGroups};
use crate::parsing::diagnostics::{report, ParseWarning, Parsed};
use crate::parsing::{source_name, ParseError};

/// Parse a contrast file, validating its groups against `known_groups`
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::UndefinedGroups` if any contrast names an unknown group.
pub fn parse_contrasts_file<K>(
    path: &Path,
    known_groups: &K,
    delimiter: char,
) -> Result<Parsed<Contrasts>, ParseError>
where
    K: KnownGroups + ?Sized,
{
    let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        file: path.display().to_string(),
        source,
    })?;
    parse_contrasts_text(&content, known_groups, delimiter, Some(path))
}

/// Parse contrast text, validating its groups against `known_groups`.
///
/// Lines without two non-empty groups are dropped with a
/// [`ParseWarning::MalformedContrastRow`]. Unknown groups are collected over
/// the whole text and reported together.
///
/// # Errors
///
/// Returns `ParseError::UndefinedGroups` naming every unknown group, in the
/// order first seen.
pub fn parse_contrasts_text<K>(
    text: &str,
    known_groups: &K,
    delimiter: char,
    source: Option<&Path>,
) -> Result<Parsed<Contrasts>, ParseError>
where
    K: KnownGroups + ?Sized,
{
    let file = source_name(source);
    let mut contrasts = Contrasts::new();
    let mut undefined: IndexSet<String> = IndexSet::new();
    let mut warnings = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line_num = i + 1;
        let mut fields = line.split(delimiter).map(str::trim);

        let (g1, g2) = match (fields.next(), fields.next()) {
            (Some(g1), Some(g2)) if !g1.is_empty() && !g2.is_empty() => (g1, g2),
            _ => {
                // Usually a whitespace-separated line that did not split
                report(
                    &mut warnings,
                    ParseWarning::MalformedContrastRow {
                        file: file.clone(),
                        line: line_num,
                        content: line.trim().to_string(),
                    },
                );
                continue;
            }
        };

        for group in [g1, g2] {
            if !known_groups.contains_group(group) {
                undefined.insert(group.to_string());
            }
        }

        contrasts.push_unique(ContrastPair::new(g1, g2));
    }

    if !undefined.is_empty() {
        return Err(ParseError::UndefinedGroups {
            file,
            groups: undefined.into_iter().collect(),
        });
    }

    debug!("Parsed {} contrasts from {file}", contrasts.len());

    Ok(Parsed {
        value: contrasts,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::peakcall::parse_peakcall_text;

    const KNOWN: &[&str] = &["G1", "G2", "G3", "G4", "G5"];

    fn pairs(contrasts: &Contrasts) -> Vec<(&str, &str)> {
        contrasts
            .iter()
            .map(|p| (p.first().as_str(), p.second().as_str()))
            .collect()
    }

    #[test]
    fn test_duplicates_collapse_in_file_order() {
        let text = "G2\tG1\nG4\tG3\nG2\tG1\nG1\tG2\n";
        let parsed = parse_contrasts_text(text, KNOWN, '\t', None).unwrap();

        assert!(!parsed.has_warnings());
        assert_eq!(
            pairs(&parsed.value),
            vec![("G2", "G1"), ("G4", "G3"), ("G1", "G2")]
        );
    }

    #[test]
    fn test_undefined_group_is_fatal_after_full_scan() {
        let known = ["G1", "G2", "G3"];
        let text = "G2\tG1\nG9\tG1\nG3\tG8\nG9\tG2\n";
        let source = Path::new("contrasts.tsv");
        let result = parse_contrasts_text(text, &known[..], '\t', Some(source));

        match result {
            Err(ParseError::UndefinedGroups { file, groups }) => {
                assert_eq!(file, "contrasts.tsv");
                assert_eq!(groups, vec!["G9".to_string(), "G8".to_string()]);
            }
            other => panic!("expected UndefinedGroups, got {other:?}"),
        }
    }

    #[test]
    fn test_group_names_are_case_sensitive() {
        let result = parse_contrasts_text("g1\tG2\n", KNOWN, '\t', None);
        assert!(matches!(
            result,
            Err(ParseError::UndefinedGroups { groups, .. }) if groups == ["g1"]
        ));
    }

    #[test]
    fn test_single_field_line_is_skipped_with_warning() {
        let text = "G2 G1\nG4\tG3\n";
        let parsed = parse_contrasts_text(text, KNOWN, '\t', None).unwrap();

        assert_eq!(pairs(&parsed.value), vec![("G4", "G3")]);
        assert_eq!(
            parsed.warnings,
            vec![ParseWarning::MalformedContrastRow {
                file: "<input>".to_string(),
                line: 1,
                content: "G2 G1".to_string(),
            }]
        );
    }

    #[test]
    fn test_single_unknown_field_does_not_trigger_undefined_groups() {
        // "G9 G1" never splits, so G9 is not validated
        let parsed = parse_contrasts_text("G9 G1\n", KNOWN, '\t', None).unwrap();
        assert!(parsed.value.is_empty());
        assert_eq!(parsed.warnings.len(), 1);
    }

    #[test]
    fn test_empty_fields_and_blank_lines_are_skipped() {
        let text = "G2\t\n\t G1\n\nG5\tG1\n";
        let parsed = parse_contrasts_text(text, KNOWN, '\t', None).unwrap();

        assert_eq!(pairs(&parsed.value), vec![("G5", "G1")]);
        let lines: Vec<usize> = parsed
            .warnings
            .iter()
            .filter_map(|w| match w {
                ParseWarning::MalformedContrastRow { line, .. } => Some(*line),
                _ => None,
            })
            .collect();
        assert_eq!(lines, vec![1, 2, 3]);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let parsed = parse_contrasts_text(" G2 \t G1 \tnote\n", KNOWN, '\t', None).unwrap();
        assert_eq!(pairs(&parsed.value), vec![("G2", "G1")]);
    }

    #[test]
    fn test_empty_file_yields_no_contrasts() {
        let parsed = parse_contrasts_text("", KNOWN, '\t', None).unwrap();
        assert!(parsed.value.is_empty());
        assert!(!parsed.has_warnings());
    }

    #[test]
    fn test_end_to_end_with_sample_sheet() {
        let sheet_text = "ChIP\tInput\tGroup
cfChIP_001\tInput_001\tG1,G4
cfChIP_002\tInput_002\tG1,G4
cfChIP_003\tInput_003\tG1,G4
cfChIP_004\tInput_004\tG2,G5
cfChIP_005\tInput_005\tG2,G5
cfChIP_006\tInput_006\tG2,G5
cfChIP_007\tInput_007\tG3,G5
cfChIP_008\tInput_008\tG3,G5
cfChIP_009\tInput_009\tG3
cfChIP_000\tInput_000\tG3
";
        let sheet = parse_peakcall_text(sheet_text, '\t', None)
            .unwrap()
            .into_inner();
        let contrasts = parse_contrasts_text("G2\tG1\nG4\tG3\nG5\tG1\n", &sheet, '\t', None)
            .unwrap()
            .into_inner();

        assert_eq!(
            pairs(&contrasts),
            vec![("G2", "G1"), ("G4", "G3"), ("G5", "G1")]
        );
        let referenced: Vec<&str> = contrasts
            .referenced_groups()
            .into_iter()
            .map(|g| g.as_str())
            .collect();
        assert_eq!(referenced, vec!["G2", "G1", "G4", "G3", "G5"]);
    }
}

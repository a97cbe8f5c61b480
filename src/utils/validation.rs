//! Validation of user-supplied parsing options.

/// Validation error types
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty delimiter provided")]
    EmptyDelimiter,
    #[error("Invalid delimiter '{0}': expected a single character, or one of tab, comma, space")]
    InvalidDelimiter(String),
    #[error("Line terminators cannot be used as a delimiter")]
    LineTerminatorDelimiter,
}

/// Parse a field delimiter given on the command line.
///
/// Accepts a single character, the escape `\t`, or the names `tab`, `comma`
/// and `space` (case-insensitive).
///
/// # Examples
///
/// ```
/// use peakcall_config::utils::validation::parse_delimiter;
///
/// assert_eq!(parse_delimiter("tab"), Ok('\t'));
/// assert_eq!(parse_delimiter("\\t"), Ok('\t'));
/// assert_eq!(parse_delimiter(";"), Ok(';'));
/// assert!(parse_delimiter("::").is_err());
/// ```
///
/// # Errors
///
/// Returns `ValidationError::EmptyDelimiter` for an empty string,
/// `ValidationError::LineTerminatorDelimiter` for `\n` or `\r`, or
/// `ValidationError::InvalidDelimiter` for anything longer than one character
/// that is not a known name.
pub fn parse_delimiter(s: &str) -> Result<char, ValidationError> {
    match s.to_lowercase().as_str() {
        "" => return Err(ValidationError::EmptyDelimiter),
        "tab" | "\\t" => return Ok('\t'),
        "comma" => return Ok(','),
        "space" => return Ok(' '),
        _ => {}
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some('\n' | '\r'), None) => Err(ValidationError::LineTerminatorDelimiter),
        (Some(c), None) => Ok(c),
        _ => Err(ValidationError::InvalidDelimiter(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_delimiters() {
        assert_eq!(parse_delimiter("TAB"), Ok('\t'));
        assert_eq!(parse_delimiter("Comma"), Ok(','));
        assert_eq!(parse_delimiter("space"), Ok(' '));
    }

    #[test]
    fn test_single_characters() {
        assert_eq!(parse_delimiter("\t"), Ok('\t'));
        assert_eq!(parse_delimiter(","), Ok(','));
        assert_eq!(parse_delimiter("|"), Ok('|'));
    }

    #[test]
    fn test_rejected_delimiters() {
        assert_eq!(parse_delimiter(""), Err(ValidationError::EmptyDelimiter));
        assert_eq!(
            parse_delimiter("\n"),
            Err(ValidationError::LineTerminatorDelimiter)
        );
        assert_eq!(
            parse_delimiter("tabs"),
            Err(ValidationError::InvalidDelimiter("tabs".to_string()))
        );
    }
}

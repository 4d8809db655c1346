use super::FormatError;

/// Reads a plain number of seconds, e.g. `90` or `12.5`.
///
/// Surrounding whitespace is ignored. No unit suffixes or `H:MM:SS` input.
pub fn parse_seconds(input: &str) -> Result<f64, FormatError> {
    let trimmed = input.trim();
    trimmed
        .parse::<f64>()
        .map_err(|source| FormatError::InvalidNumber {
            input: trimmed.to_string(),
            source,
        })
}

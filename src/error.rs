use thiserror::Error;

/// Reasons a line can be rejected. Every variant carries the 1-based line number (counted after
/// `\r\n` has been normalized to `\n`).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed syntax in line {line}: invalid section declaration")]
    InvalidSectionDeclaration { line: usize },
    #[error("malformed syntax in line {line}: invalid section name")]
    InvalidSectionName { line: usize },
    #[error("malformed syntax in line {line}: invalid key")]
    InvalidKey { line: usize },
    #[error("malformed syntax in line {line}: invalid delimiter sequence")]
    InvalidDelimiterSequence { line: usize },
}

impl ParseError {
    #[must_use]
    pub fn line(&self) -> usize {
        match *self {
            Self::InvalidSectionDeclaration { line }
            | Self::InvalidSectionName { line }
            | Self::InvalidKey { line }
            | Self::InvalidDelimiterSequence { line } => line,
        }
    }

    #[must_use]
    pub fn reason(&self) -> &'static str {
        match *self {
            Self::InvalidSectionDeclaration { .. } => "invalid section declaration",
            Self::InvalidSectionName { .. } => "invalid section name",
            Self::InvalidKey { .. } => "invalid key",
            Self::InvalidDelimiterSequence { .. } => "invalid delimiter sequence",
        }
    }
}

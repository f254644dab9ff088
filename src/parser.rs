use log::{debug, trace};

use crate::data::Data;
use crate::error::ParseError;

/// Characters treated as whitespace by the format. Other Unicode whitespace is ordinary text.
const WHITESPACE: &[char] = &[' ', '\t'];

/// How leading whitespace on a non-blank line is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LeadingWhitespace {
    /// Strip leading spaces and tabs before classifying the line.
    #[default]
    Strip,
    /// Keep the line as-is. Indented comments, sections and keys are reported as malformed.
    Reject,
}

/// Represents an on-going parse.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    text: &'a str,
    leading_whitespace: LeadingWhitespace,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            leading_whitespace: LeadingWhitespace::default(),
        }
    }
}

impl Parser<'_> {
    #[must_use]
    pub fn leading_whitespace(mut self, policy: LeadingWhitespace) -> Self {
        self.leading_whitespace = policy;
        self
    }

    /// Parse every line in order, stopping at the first malformed one.
    pub fn into_data(self) -> Result<Data, ParseError> {
        let text = self.text.replace("\r\n", "\n");
        let mut data = Data::default();
        let mut section = "";

        for (i, raw) in text.split('\n').enumerate() {
            let number = i + 1;

            let Some(line) = self.classify(raw) else {
                continue;
            };

            if line.starts_with('[') {
                section = parse_section_name(line, number)?;
                trace!("line {number}: entering section {section:?}");
                continue;
            }

            let (key, value) = self.parse_entry(line, number)?;
            data.insert(section, key.to_owned(), value.to_owned());
        }

        debug!(
            "parsed {} entries across {} sections",
            data.count_all_entries(),
            data.sections().count()
        );

        Ok(data)
    }

    /// Returns `None` for blank and comment lines, otherwise the line to interpret.
    fn classify<'l>(&self, raw: &'l str) -> Option<&'l str> {
        let line = match self.leading_whitespace {
            LeadingWhitespace::Strip => raw.trim_start_matches(WHITESPACE),
            LeadingWhitespace::Reject if raw.trim_start_matches(WHITESPACE).is_empty() => "",
            LeadingWhitespace::Reject => raw,
        };

        if line.is_empty() || line.starts_with('#') {
            None
        } else {
            Some(line)
        }
    }

    /// Split `key = value` on the first equal sign. Exactly one space is required on both sides
    /// of the delimiter, and only the first space of the value is dropped.
    fn parse_entry<'l>(
        &self,
        line: &'l str,
        number: usize,
    ) -> Result<(&'l str, &'l str), ParseError> {
        let (key, value) = line
            .split_once('=')
            .ok_or(ParseError::InvalidKey { line: number })?;

        if !key.ends_with(' ') {
            return Err(ParseError::InvalidDelimiterSequence { line: number });
        }

        let key = match self.leading_whitespace {
            LeadingWhitespace::Strip => key.trim_matches(WHITESPACE),
            LeadingWhitespace::Reject => key.trim_end_matches(' '),
        };

        if key.contains(WHITESPACE) {
            return Err(ParseError::InvalidKey { line: number });
        }

        let value = if value.is_empty() {
            value
        } else {
            value
                .strip_prefix(' ')
                .ok_or(ParseError::InvalidDelimiterSequence { line: number })?
        };

        Ok((key, value))
    }
}

/// Validate a `[name]` header. Trailing whitespace is allowed, trailing comments are not.
fn parse_section_name(line: &str, number: usize) -> Result<&str, ParseError> {
    assert!(line.starts_with('['));

    let name = line
        .trim_end_matches(WHITESPACE)
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or(ParseError::InvalidSectionDeclaration { line: number })?;

    if name.trim_matches(WHITESPACE).is_empty() || name.contains(['[', ']']) {
        return Err(ParseError::InvalidSectionName { line: number });
    }

    Ok(name)
}

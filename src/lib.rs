#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::pedantic
)]

//! A strict parser for a line-oriented `key = value` format grouped under `[section]` headers.
//!
//! ```
//! let data = genie::parse("name = genie\n[server]\nport = 8080\n").unwrap();
//!
//! assert_eq!(data.get("name"), "genie");
//! assert_eq!(data.get_from_section("server", "port"), "8080");
//! assert_eq!(data.count_all_entries(), 2);
//! ```

mod data;
mod error;
mod parser;

use std::str::FromStr;

pub use data::Data;
pub use error::ParseError;
pub use parser::{LeadingWhitespace, Parser};

/// Parse `text`, stripping leading whitespace from every line.
pub fn parse(text: &str) -> Result<Data, ParseError> {
    Parser::new(text).into_data()
}

impl FromStr for Data {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

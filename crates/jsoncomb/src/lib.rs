//! A JSON parser built from a hand-rolled parser-combinator library running
//! over a zero-copy input view.
//!
//! Small recognizers ([`char_parser`], [`literal`], [`span_parser`]) compose
//! through generic operators ([`Parser::map`], [`Parser::ap`], [`Parser::or`],
//! [`many`], [`sep_by`]) into the full JSON grammar. All intermediate parser
//! states are [`Input`] views — offset pairs into one shared buffer — so
//! parsing allocates only for the output values themselves.
//!
//! Known limits, by design: no escape decoding inside string literals,
//! integer-only numbers (`i32`), and a single payload-free failure kind.
//!
//! # Examples
//!
//! ```rust
//! use jsoncomb::{JsonValue, parse_document};
//!
//! let value = parse_document(r#"{"id": 7, "tags": ["a", "b"]}"#).unwrap();
//! assert!(value.is_object());
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod combinators;
mod grammar;
mod input;
mod value;

mod error;
mod parser;

#[cfg(test)]
mod tests;

pub use combinators::{char_parser, literal, many, maybe, not_empty, sep_by, span_parser};
pub use error::NoMatch;
pub use grammar::{
    json_array, json_bool, json_null, json_number, json_object, json_string, json_value,
    string_literal, whitespace,
};
pub use input::Input;
pub use parser::{ParseResult, Parser, fail, just};
pub use value::{Array, JsonValue, Map};

/// Parses one JSON value from the start of `input`.
///
/// On success returns the unconsumed remainder alongside the value; whether
/// trailing input is acceptable is the caller's decision (see
/// [`parse_document`] for the strict policy).
///
/// # Errors
///
/// Returns [`NoMatch`] if no JSON value starts at the first character.
pub fn parse_value(input: &str) -> Result<(Input<'_>, JsonValue), NoMatch> {
    json_value().parse(Input::new(input)).ok_or(NoMatch)
}

/// Parses `input` as exactly one JSON document.
///
/// Whitespace around the value is tolerated; any other leading or trailing
/// input is rejected.
///
/// # Errors
///
/// Returns [`NoMatch`] if the input does not hold exactly one JSON value.
pub fn parse_document(input: &str) -> Result<JsonValue, NoMatch> {
    let (_, trimmed) = Input::new(input).span(char::is_whitespace);
    let (rest, value) = json_value().parse(trimmed).ok_or(NoMatch)?;
    let (_, rest) = rest.span(char::is_whitespace);
    if rest.is_empty() { Ok(value) } else { Err(NoMatch) }
}

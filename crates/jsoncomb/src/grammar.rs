//! The JSON grammar: seven mutually recursive productions assembled from
//! the combinator library.
//!
//! Each production is tried by [`json_value`] in a fixed order — null, bool,
//! number, string, array, object — and the leading character of each form
//! disambiguates, so first-match-wins alternation is enough.
//!
//! Two limitations are inherited deliberately from the design: string
//! literals are taken verbatim between quotes (no escape decoding, so a
//! `\"` still terminates the literal), and numbers are bounded signed
//! 32-bit integers with no fraction or exponent forms.

use alloc::string::String;

use crate::{
    combinators::{char_parser, literal, maybe, not_empty, sep_by, span_parser},
    input::Input,
    parser::Parser,
    value::JsonValue,
};

/// Matches a possibly-empty run of Unicode whitespace.
///
/// Always succeeds; the matched span is usually discarded by the caller.
pub fn whitespace<'a>() -> impl Parser<'a, Output = Input<'a>> {
    span_parser(char::is_whitespace)
}

/// A quoted string literal, yielding the interior span verbatim.
///
/// No escape processing: the literal ends at the first `"` after the opening
/// quote, whatever precedes it.
pub fn string_literal<'a>() -> impl Parser<'a, Output = Input<'a>> {
    char_parser('"')
        .skip_then(span_parser(|c| c != '"'))
        .then_skip(char_parser('"'))
}

/// The `null` production.
pub fn json_null<'a>() -> impl Parser<'a, Output = JsonValue> {
    literal("null").map(|_| JsonValue::Null)
}

/// The `true` / `false` production.
pub fn json_bool<'a>() -> impl Parser<'a, Output = JsonValue> {
    let json_true = literal("true").map(|_| JsonValue::Bool(true));
    let json_false = literal("false").map(|_| JsonValue::Bool(false));
    json_true.or(json_false)
}

/// The number production: an optional `-` followed by one or more ASCII
/// digits, decoded as an `i32`.
///
/// A bare sign, a digit-less input, and a value outside the 32-bit range all
/// fail the parse.
pub fn json_number<'a>() -> impl Parser<'a, Output = JsonValue> {
    let digits = not_empty(span_parser(|c: char| c.is_ascii_digit()));
    maybe('-')
        .ap(digits.map(|digits: Input<'a>| move |sign: Option<char>| (sign, digits)))
        .filter_map(|(sign, digits)| {
            decode_bounded(sign.is_some(), digits.as_str()).map(JsonValue::Number)
        })
}

// Accumulates on the negative side so that i32::MIN decodes without
// overflowing before the sign is applied.
fn decode_bounded(negative: bool, digits: &str) -> Option<i32> {
    let mut acc: i32 = 0;
    for c in digits.chars() {
        let digit = i32::try_from(c.to_digit(10)?).ok()?;
        acc = acc.checked_mul(10)?.checked_sub(digit)?;
    }
    if negative { Some(acc) } else { acc.checked_neg() }
}

/// The string production: a [`string_literal`] wrapped into a value.
pub fn json_string<'a>() -> impl Parser<'a, Output = JsonValue> {
    string_literal().map(|contents: Input<'a>| JsonValue::String(String::from(contents.as_str())))
}

/// The array production: `[`, optional whitespace, comma-separated values,
/// optional whitespace, `]`.
pub fn json_array<'a>() -> impl Parser<'a, Output = JsonValue> {
    let separator = whitespace()
        .skip_then(char_parser(','))
        .then_skip(whitespace());
    char_parser('[')
        .skip_then(whitespace())
        .skip_then(sep_by(separator, deferred_value()))
        .then_skip(whitespace())
        .then_skip(char_parser(']'))
        .map(JsonValue::Array)
}

/// The object production: `{`, comma-separated `"key": value` pairs, `}`.
///
/// Pairs are inserted in encounter order, so a duplicated key keeps the
/// value of its last occurrence.
pub fn json_object<'a>() -> impl Parser<'a, Output = JsonValue> {
    let separator = whitespace()
        .skip_then(char_parser(','))
        .then_skip(whitespace());
    let key_value_separator = whitespace()
        .skip_then(char_parser(':'))
        .then_skip(whitespace());
    let pair = string_literal().then_skip(key_value_separator).ap(
        deferred_value()
            .map(|value: JsonValue| move |key: Input<'a>| (String::from(key.as_str()), value)),
    );
    char_parser('{')
        .skip_then(whitespace())
        .skip_then(sep_by(separator, pair))
        .then_skip(whitespace())
        .then_skip(char_parser('}'))
        .map(|pairs| JsonValue::Object(pairs.into_iter().collect()))
}

/// The entry production: any JSON value.
///
/// Rebuilt afresh on every call; see [`deferred_value`] for why.
pub fn json_value<'a>() -> impl Parser<'a, Output = JsonValue> {
    json_null()
        .or(json_bool())
        .or(json_number())
        .or(json_string())
        .or(json_array())
        .or(json_object())
}

// `json_value` is defined in terms of `json_array` and `json_object`, which
// are defined in terms of `json_value`; building the grammar as one eager
// structure would recurse forever at construction time. This thunk defers
// the rebuild to each invocation, breaking the cycle. Grammar nesting depth
// is still bounded by the call stack at *parse* time.
fn deferred_value<'a>() -> impl Parser<'a, Output = JsonValue> {
    |input: Input<'a>| json_value().parse(input)
}

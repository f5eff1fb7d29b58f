//! The combinator library: small recognizers built directly on the parser
//! core, from which the JSON grammar is assembled.

use alloc::vec::Vec;

use crate::{
    input::Input,
    parser::{ParseResult, Parser, just},
};

/// Matches exactly one character equal to `expected`.
///
/// Fails on empty input or mismatch.
pub fn char_parser<'a>(expected: char) -> impl Parser<'a, Output = char> {
    move |input: Input<'a>| match input.first() {
        Some(c) if c == expected => Some((input.advance(1), c)),
        _ => None,
    }
}

/// Matches the literal string `expected` at the start of the input.
///
/// Sequences one [`char_parser`] per character in encounter order; a
/// mismatch anywhere fails the whole literal with nothing consumed from the
/// caller's point of view.
pub fn literal<'a>(expected: &'a str) -> impl Parser<'a, Output = &'a str> {
    move |input: Input<'a>| {
        let mut rest = input;
        for c in expected.chars() {
            let (next, _) = char_parser(c).parse(rest)?;
            rest = next;
        }
        Some((rest, expected))
    }
}

/// Consumes the maximal (possibly empty) prefix satisfying `predicate`.
///
/// Never fails: a zero-length match is a valid success.
pub fn span_parser<'a, F>(predicate: F) -> impl Parser<'a, Output = Input<'a>>
where
    F: Fn(char) -> bool,
{
    move |input: Input<'a>| {
        let (matched, rest) = input.span(&predicate);
        Some((rest, matched))
    }
}

/// Restricts a view-producing parser to nonzero-length matches.
///
/// Turns "zero or more" parsers such as [`span_parser`] into "one or more".
pub fn not_empty<'a, P>(p: P) -> impl Parser<'a, Output = Input<'a>>
where
    P: Parser<'a, Output = Input<'a>>,
{
    move |input: Input<'a>| p.parse(input).filter(|(_, matched)| !matched.is_empty())
}

/// Optionally matches `expected`: yields `Some` and consumes one character
/// on a match, yields `None` and consumes nothing otherwise. Never fails.
pub fn maybe<'a>(expected: char) -> impl Parser<'a, Output = Option<char>> {
    char_parser(expected).map(Some).or(just(None))
}

/// Applies `p` repeatedly until it fails, accumulating the values in
/// encounter order. Never fails; yields an empty sequence if `p` never
/// matched once.
///
/// Repetition is an explicit loop, so arbitrarily long element runs cannot
/// exhaust the call stack. A successful match that consumes no input ends
/// the repetition, which keeps the loop total for parsers like
/// [`span_parser`] that can succeed on nothing.
pub fn many<'a, P>(p: P) -> impl Parser<'a, Output = Vec<P::Output>>
where
    P: Parser<'a>,
{
    move |input: Input<'a>| {
        let mut rest = input;
        let mut items = Vec::new();
        while let Some((next, item)) = p.parse(rest) {
            if next.len() == rest.len() {
                break;
            }
            rest = next;
            items.push(item);
        }
        Some((rest, items))
    }
}

/// Parses zero or more `element`s separated by `sep`.
///
/// Tries one `element` first; if it fails, succeeds with an empty list and
/// consumes nothing. Afterwards, each further element must be preceded by a
/// `sep`; a trailing `sep` without an element is left unconsumed. Never
/// fails. Like [`many`], the repetition is loop-based, and a round that
/// consumes no input ends it.
pub fn sep_by<'a, S, P>(sep: S, element: P) -> impl Parser<'a, Output = Vec<P::Output>>
where
    S: Parser<'a>,
    P: Parser<'a>,
{
    move |input: Input<'a>| -> ParseResult<'a, Vec<P::Output>> {
        let Some((mut rest, first)) = element.parse(input) else {
            return Some((input, Vec::new()));
        };
        let mut items = Vec::new();
        items.push(first);
        loop {
            let separated = sep
                .parse(rest)
                .and_then(|(after_sep, _)| element.parse(after_sep));
            match separated {
                Some((next, item)) if next.len() < rest.len() => {
                    rest = next;
                    items.push(item);
                }
                _ => break,
            }
        }
        Some((rest, items))
    }
}

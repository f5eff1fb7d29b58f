//! The generic parser abstraction and its composition primitives.
//!
//! A parser is any function from an [`Input`] view to a [`ParseResult`]:
//! either `None` ("no match") or `Some((remaining_view, value))`. Parsers
//! carry no mutable state, so the same parser value may be run repeatedly
//! and, because views are `Copy`, a failed attempt never disturbs the input
//! the caller holds.
//!
//! The trait provides the three composition capabilities everything else is
//! built from: [`map`](Parser::map) (transform the value),
//! [`ap`](Parser::ap) (sequence two parsers and apply a produced function)
//! and [`or`](Parser::or) (ordered, first-match-wins alternation).

use crate::input::Input;

/// Outcome of running a parser: the remaining input paired with the parsed
/// value, or `None` when the input was not recognized.
///
/// Failure deliberately carries no payload — no position, no expected-token
/// set. [`or`](Parser::or) is the only recovery mechanism.
pub type ParseResult<'a, T> = Option<(Input<'a>, T)>;

/// A composable recognizer producing values of type [`Output`](Parser::Output).
///
/// Implemented for every `Fn(Input<'a>) -> ParseResult<'a, T>` closure, so
/// parsers are ordinary function values. Composition is purely static:
/// every combinator returns an opaque concrete type, no boxing and no
/// dynamic dispatch.
///
/// # Examples
///
/// ```
/// use jsoncomb::{Input, Parser, char_parser};
///
/// let digit = char_parser('1').map(|c| c.to_digit(10));
/// let (rest, value) = digit.parse(Input::new("123")).unwrap();
/// assert_eq!(value, Some(1));
/// assert_eq!(rest, "23");
/// ```
pub trait Parser<'a>: Sized {
    /// The value produced on a successful parse.
    type Output;

    /// Runs the parser against `input`.
    fn parse(&self, input: Input<'a>) -> ParseResult<'a, Self::Output>;

    /// Transforms the parsed value with `f`, leaving failure untouched.
    fn map<B, F>(self, f: F) -> impl Parser<'a, Output = B>
    where
        F: Fn(Self::Output) -> B,
    {
        move |input: Input<'a>| self.parse(input).map(|(rest, value)| (rest, f(value)))
    }

    /// Like [`map`](Parser::map), but `f` may reject the value, turning the
    /// parse into a failure.
    fn filter_map<B, F>(self, f: F) -> impl Parser<'a, Output = B>
    where
        F: Fn(Self::Output) -> Option<B>,
    {
        move |input: Input<'a>| {
            let (rest, value) = self.parse(input)?;
            let mapped = f(value)?;
            Some((rest, mapped))
        }
    }

    /// Sequence-and-apply: runs `self`, then runs the function-producing
    /// parser `ff` on the remaining view, and applies the produced function
    /// to `self`'s value. Fails if either side fails.
    ///
    /// This is the mechanism that carries the consumed-input position from
    /// one sub-parse to the next; there is no implicit cursor anywhere.
    fn ap<B, F, P>(self, ff: P) -> impl Parser<'a, Output = B>
    where
        F: FnOnce(Self::Output) -> B,
        P: Parser<'a, Output = F>,
    {
        move |input: Input<'a>| {
            let (rest, value) = self.parse(input)?;
            let (rest, apply) = ff.parse(rest)?;
            Some((rest, apply(value)))
        }
    }

    /// Ordered alternation: runs `self`; on failure runs `other` against the
    /// original, unmodified input.
    ///
    /// First match wins. There is no backtracking beyond this single retry
    /// point.
    fn or<P>(self, other: P) -> impl Parser<'a, Output = Self::Output>
    where
        P: Parser<'a, Output = Self::Output>,
    {
        move |input: Input<'a>| self.parse(input).or_else(|| other.parse(input))
    }

    /// Runs `self` and `next` in order, keeping only `next`'s value.
    fn skip_then<P>(self, next: P) -> impl Parser<'a, Output = P::Output>
    where
        P: Parser<'a>,
    {
        move |input: Input<'a>| {
            let (rest, _) = self.parse(input)?;
            next.parse(rest)
        }
    }

    /// Runs `self` and `next` in order, keeping only `self`'s value.
    fn then_skip<P>(self, next: P) -> impl Parser<'a, Output = Self::Output>
    where
        P: Parser<'a>,
    {
        move |input: Input<'a>| {
            let (rest, value) = self.parse(input)?;
            let (rest, _) = next.parse(rest)?;
            Some((rest, value))
        }
    }
}

impl<'a, T, F> Parser<'a> for F
where
    F: Fn(Input<'a>) -> ParseResult<'a, T>,
{
    type Output = T;

    fn parse(&self, input: Input<'a>) -> ParseResult<'a, T> {
        self(input)
    }
}

/// The parser that always succeeds with `value`, consuming no input.
///
/// Identity element for sequencing.
pub fn just<'a, T: Clone>(value: T) -> impl Parser<'a, Output = T> {
    move |input: Input<'a>| Some((input, value.clone()))
}

/// The parser that always fails, regardless of input.
///
/// Identity element for [`or`](Parser::or).
pub fn fail<'a, T>() -> impl Parser<'a, Output = T> {
    move |_input: Input<'a>| -> ParseResult<'a, T> { None }
}

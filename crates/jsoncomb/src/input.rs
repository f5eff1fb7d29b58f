//! The zero-copy input view every combinator reads and rewrites.

use core::fmt;

/// An immutable view over a region of a shared string buffer.
///
/// An `Input` never copies text: it holds a reference to the backing buffer
/// together with a pair of byte offsets. Deriving a new view (via
/// [`advance`](Input::advance) or [`span`](Input::span)) produces another
/// pair of offsets into the same buffer, so every intermediate parser state
/// costs O(1) space. `Input` is `Copy`; a failed parse attempt leaves the
/// caller's view untouched and free to be retried against an alternative.
///
/// # Examples
///
/// ```
/// use jsoncomb::Input;
///
/// let input = Input::new("123abc");
/// let (digits, rest) = input.span(|c| c.is_ascii_digit());
/// assert_eq!(digits, "123");
/// assert_eq!(rest, "abc");
/// ```
#[derive(Clone, Copy)]
pub struct Input<'a> {
    buffer: &'a str,
    // Byte offsets into `buffer`; `start == end` is the empty view.
    // Both always lie on character boundaries.
    start: usize,
    end: usize,
}

impl<'a> Input<'a> {
    /// Creates a view covering the whole of `buffer`.
    #[must_use]
    pub fn new(buffer: &'a str) -> Self {
        Input {
            buffer,
            start: 0,
            end: buffer.len(),
        }
    }

    /// The text covered by this view.
    ///
    /// O(1): this borrows from the backing buffer, it does not copy.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        &self.buffer[self.start..self.end]
    }

    /// Length of the viewed region in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the view covers no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The first character of the view, if any.
    #[must_use]
    pub fn first(&self) -> Option<char> {
        self.as_str().chars().next()
    }

    /// Returns a view advanced by `count` characters.
    ///
    /// Advancing past the end yields the empty view; this never panics.
    #[must_use]
    pub fn advance(self, count: usize) -> Input<'a> {
        match self.as_str().char_indices().nth(count) {
            Some((offset, _)) => Input {
                buffer: self.buffer,
                start: self.start + offset,
                end: self.end,
            },
            None => Input {
                buffer: self.buffer,
                start: self.end,
                end: self.end,
            },
        }
    }

    /// Splits the view into the maximal prefix whose characters satisfy
    /// `predicate` and the remainder.
    ///
    /// The prefix may be empty; an empty view splits into two empty views.
    /// The scan is O(k) in the matched length and allocates nothing.
    #[must_use]
    pub fn span<F>(self, predicate: F) -> (Input<'a>, Input<'a>)
    where
        F: Fn(char) -> bool,
    {
        let text = self.as_str();
        let split = text
            .char_indices()
            .find(|&(_, c)| !predicate(c))
            .map_or(text.len(), |(offset, _)| offset);
        let mid = self.start + split;
        (
            Input {
                buffer: self.buffer,
                start: self.start,
                end: mid,
            },
            Input {
                buffer: self.buffer,
                start: mid,
                end: self.end,
            },
        )
    }
}

// Views are pure values: two views are equal when they cover the same text,
// regardless of which buffer they were derived from.
impl PartialEq for Input<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Input<'_> {}

impl PartialEq<&str> for Input<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Debug for Input<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Input").field(&self.as_str()).finish()
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("      b   ", "      ", "b   ")]
    #[case("123abc", "", "123abc")]
    #[case("", "", "")]
    #[case("   ", "   ", "")]
    fn span_whitespace(#[case] input: &str, #[case] matched: &str, #[case] rest: &str) {
        let (left, right) = Input::new(input).span(char::is_whitespace);
        assert_eq!(left, matched);
        assert_eq!(right, rest);
    }

    #[test]
    fn span_never_fails_on_zero_match() {
        let (matched, rest) = Input::new("abc").span(|c| c.is_ascii_digit());
        assert_eq!(matched, "");
        assert_eq!(rest, "abc");
    }

    #[test]
    fn nested_spans_share_one_buffer() {
        let input = Input::new("12ab!!");
        let (digits, rest) = input.span(|c| c.is_ascii_digit());
        let (letters, rest) = rest.span(char::is_alphabetic);
        assert_eq!(digits, "12");
        assert_eq!(letters, "ab");
        assert_eq!(rest, "!!");
    }

    #[rstest]
    #[case("hello", 0, "hello")]
    #[case("hello", 2, "llo")]
    #[case("hello", 5, "")]
    #[case("hello", 99, "")]
    #[case("", 1, "")]
    fn advance_clamps_to_empty(#[case] input: &str, #[case] count: usize, #[case] expected: &str) {
        assert_eq!(Input::new(input).advance(count), expected);
    }

    #[test]
    fn advance_counts_characters_not_bytes() {
        let input = Input::new("äöü!");
        assert_eq!(input.advance(2), "ü!");
        assert_eq!(input.advance(3), "!");
    }

    #[test]
    fn emptiness_is_derived_from_offsets() {
        let input = Input::new("ab");
        assert!(!input.is_empty());
        assert_eq!(input.len(), 2);
        assert!(input.advance(2).is_empty());
        assert!(Input::new("").is_empty());
    }

    #[test]
    fn equality_is_structural() {
        let a = Input::new("xyz").advance(1);
        let b = Input::new("ayz").advance(1);
        assert_eq!(a, b);
        assert_eq!(Input::new("a").advance(1), Input::new(""));
    }

    #[test]
    fn first_peeks_without_consuming() {
        let input = Input::new("ab");
        assert_eq!(input.first(), Some('a'));
        assert_eq!(input.first(), Some('a'));
        assert_eq!(Input::new("").first(), None);
    }
}

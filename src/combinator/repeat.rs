//! Optional and greedy repetition.

use crate::cursor::Cursor;
use crate::matcher::{Matcher, Peg, peg};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Optional<M> {
    matcher: M,
}

impl<M: Matcher> Matcher for Optional<M> {
    fn attempt(&self, cursor: &mut Cursor<'_>) -> bool {
        self.matcher.attempt(cursor);
        true
    }
}

/// Match `matcher` if possible; succeed either way.
pub fn optional<M: Matcher>(matcher: M) -> Peg<Optional<M>> {
    peg(Optional { matcher })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroOrMore<M> {
    matcher: M,
}

impl<M: Matcher> Matcher for ZeroOrMore<M> {
    fn attempt(&self, cursor: &mut Cursor<'_>) -> bool {
        while self.matcher.attempt(cursor) {}
        true
    }
}

/// Match `matcher` as many times as possible, including zero.
///
/// `matcher` must consume input whenever it succeeds, otherwise this never
/// returns.
pub fn zero_or_more<M: Matcher>(matcher: M) -> Peg<ZeroOrMore<M>> {
    peg(ZeroOrMore { matcher })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneOrMore<M> {
    matcher: M,
}

impl<M: Matcher> Matcher for OneOrMore<M> {
    fn attempt(&self, cursor: &mut Cursor<'_>) -> bool {
        if !self.matcher.attempt(cursor) {
            return false;
        }
        while self.matcher.attempt(cursor) {}
        true
    }
}

/// Like [`zero_or_more`], but at least one match is required.
pub fn one_or_more<M: Matcher>(matcher: M) -> Peg<OneOrMore<M>> {
    peg(OneOrMore { matcher })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{byte, literal, range};

    fn run<M: Matcher>(m: &M, input: &[u8]) -> (bool, usize) {
        let mut cursor = Cursor::new(input);
        let ok = m.attempt(&mut cursor);
        (ok, cursor.offset())
    }

    #[test]
    fn optional_present() {
        assert_eq!(run(&optional(literal("ab")), b"abc"), (true, 2));
    }

    #[test]
    fn optional_absent() {
        assert_eq!(run(&optional(literal("ab")), b"ac"), (true, 0));
    }

    #[test]
    fn zero_or_more_counts() {
        let digits = zero_or_more(range(b'0', b'9'));
        assert_eq!(run(&digits, b"123x"), (true, 3));
        assert_eq!(run(&digits, b"x"), (true, 0));
        assert_eq!(run(&digits, b""), (true, 0));
    }

    #[test]
    fn one_or_more_needs_one() {
        let digits = one_or_more(range(b'0', b'9'));
        assert_eq!(run(&digits, b"123x"), (true, 3));
        assert_eq!(run(&digits, b"7"), (true, 1));
        assert_eq!(run(&digits, b"x"), (false, 0));
    }

    #[test]
    fn repeats_multi_byte_units() {
        // The trailing partial "a" is left for whoever comes next.
        assert_eq!(run(&zero_or_more(literal("ab")), b"ababa"), (true, 4));
    }

    #[test]
    fn repetition_is_greedy() {
        // A PEG never hands back a repetition, so the trailing 'a' can't match.
        let p = crate::combinator::sequence((zero_or_more(byte(b'a')), byte(b'a')));
        assert_eq!(run(&p, b"aaa"), (false, 0));
    }
}

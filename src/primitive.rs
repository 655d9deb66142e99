//! Terminal matchers: literals, byte ranges, empty and end-of-input.

use crate::cursor::Cursor;
use crate::matcher::{Matcher, Peg, peg};

/// Matches a fixed byte string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal<T> {
    pattern: T,
}

impl<T: AsRef<[u8]>> Matcher for Literal<T> {
    fn attempt(&self, cursor: &mut Cursor<'_>) -> bool {
        let pattern = self.pattern.as_ref();
        if cursor.remaining().starts_with(pattern) {
            cursor.advance(pattern.len());
            true
        } else {
            false
        }
    }
}

/// Match `pattern` byte for byte.
///
/// Any bytes are allowed, including NUL. An empty pattern always matches and
/// consumes nothing.
pub fn literal<T: AsRef<[u8]>>(pattern: T) -> Peg<Literal<T>> {
    peg(Literal { pattern })
}

/// Matches one specific byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Byte(u8);

impl Matcher for Byte {
    fn attempt(&self, cursor: &mut Cursor<'_>) -> bool {
        if cursor.peek() == Some(self.0) {
            cursor.advance(1);
            true
        } else {
            false
        }
    }
}

/// Match the single byte `b`.
pub fn byte(b: u8) -> Peg<Byte> {
    peg(Byte(b))
}

/// Matches one byte in an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    lo: u8,
    hi: u8,
}

impl Matcher for Range {
    fn attempt(&self, cursor: &mut Cursor<'_>) -> bool {
        match cursor.peek() {
            Some(b) if (self.lo..=self.hi).contains(&b) => {
                cursor.advance(1);
                true
            }
            _ => false,
        }
    }
}

/// Match one byte in `lo..=hi`. An inverted range never matches.
pub fn range(lo: u8, hi: u8) -> Peg<Range> {
    peg(Range { lo, hi })
}

/// Matches any single byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnyByte;

impl Matcher for AnyByte {
    fn attempt(&self, cursor: &mut Cursor<'_>) -> bool {
        if cursor.is_at_end() {
            return false;
        }
        cursor.advance(1);
        true
    }
}

/// Match any one byte; fails only at end of input.
pub fn any_byte() -> Peg<AnyByte> {
    peg(AnyByte)
}

/// Always succeeds without consuming.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

impl Matcher for Empty {
    fn attempt(&self, _cursor: &mut Cursor<'_>) -> bool {
        true
    }
}

/// Match nothing, successfully.
pub fn empty() -> Peg<Empty> {
    peg(Empty)
}

/// Succeeds only at the end of input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct End;

impl Matcher for End {
    fn attempt(&self, cursor: &mut Cursor<'_>) -> bool {
        cursor.is_at_end()
    }
}

/// Match end of input. Chain after a grammar to require a full match.
pub fn end() -> Peg<End> {
    peg(End)
}

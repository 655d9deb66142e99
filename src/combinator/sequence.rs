//! Ordered conjunction with whole-group backtracking.

use crate::combinator::list::MatcherList;
use crate::cursor::Cursor;
use crate::matcher::{Matcher, Peg, peg};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sequence<L> {
    items: L,
}

impl<L: MatcherList> Matcher for Sequence<L> {
    fn attempt(&self, cursor: &mut Cursor<'_>) -> bool {
        let start = *cursor;
        if self.items.attempt_all(cursor) {
            true
        } else {
            // Undo whatever the leading items consumed.
            *cursor = start;
            false
        }
    }
}

/// Match every item in order.
///
/// If any item fails, the cursor goes back to where the sequence started. An
/// empty sequence always succeeds.
pub fn sequence<L: MatcherList>(items: L) -> Peg<Sequence<L>> {
    peg(Sequence { items })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{byte, end, literal};

    #[test]
    fn all_items_must_match() {
        let p = sequence((byte(b'a'), byte(b'b')));
        let mut cursor = Cursor::new(b"abc");
        assert!(p.attempt(&mut cursor));
        assert_eq!(cursor.offset(), 2);
    }

    #[test]
    fn failure_rewinds_whole_group() {
        let p = sequence((byte(b'a'), byte(b'b')));
        let mut cursor = Cursor::new(b"ac");
        assert!(!p.attempt(&mut cursor));
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn failure_late_in_long_sequence() {
        let p = sequence((literal("ab"), literal("cd"), literal("ef"), end()));
        let mut cursor = Cursor::new(b"abcdefg");
        assert!(!p.attempt(&mut cursor));
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn empty_sequence_succeeds() {
        let p = sequence(());
        let mut cursor = Cursor::at(b"abc", 1);
        assert!(p.attempt(&mut cursor));
        assert_eq!(cursor.offset(), 1);
    }

    #[test]
    fn rewinds_to_entry_not_zero() {
        let p = sequence((byte(b'b'), byte(b'x')));
        let mut cursor = Cursor::at(b"abc", 1);
        assert!(!p.attempt(&mut cursor));
        assert_eq!(cursor.offset(), 1);
    }

    #[test]
    fn vec_of_items() {
        let p = sequence(vec![literal("a"), literal("b"), literal("c")]);
        assert!(p.matches(b"abc"));
        assert!(!p.matches(b"abd"));
    }
}

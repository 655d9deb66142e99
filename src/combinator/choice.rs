//! Ordered disjunction.

use crate::combinator::list::MatcherList;
use crate::cursor::Cursor;
use crate::matcher::{Matcher, Peg, peg};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Choice<L> {
    alternatives: L,
}

impl<L: MatcherList> Matcher for Choice<L> {
    fn attempt(&self, cursor: &mut Cursor<'_>) -> bool {
        // Failed alternatives leave the cursor alone, so there is nothing to restore.
        self.alternatives.attempt_any(cursor)
    }
}

/// Match the first alternative that succeeds. An empty choice always fails.
pub fn choice<L: MatcherList>(alternatives: L) -> Peg<Choice<L>> {
    peg(Choice { alternatives })
}

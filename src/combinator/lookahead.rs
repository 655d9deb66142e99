//! Syntactic predicates: look ahead without consuming.

use crate::cursor::Cursor;
use crate::matcher::{Matcher, Peg, peg};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FollowedBy<M> {
    matcher: Peg<M>,
}

impl<M: Matcher> Matcher for FollowedBy<M> {
    fn attempt(&self, cursor: &mut Cursor<'_>) -> bool {
        self.matcher.test(cursor)
    }
}

/// Succeed if `matcher` would match here. Never consumes.
pub fn followed_by<M: Matcher>(matcher: M) -> Peg<FollowedBy<M>> {
    peg(FollowedBy {
        matcher: peg(matcher),
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotFollowedBy<M> {
    matcher: Peg<M>,
}

impl<M: Matcher> Matcher for NotFollowedBy<M> {
    fn attempt(&self, cursor: &mut Cursor<'_>) -> bool {
        !self.matcher.test(cursor)
    }
}

/// Succeed if `matcher` would fail here. Never consumes.
pub fn not_followed_by<M: Matcher>(matcher: M) -> Peg<NotFollowedBy<M>> {
    peg(NotFollowedBy {
        matcher: peg(matcher),
    })
}

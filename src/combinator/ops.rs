//! Infix operators and builder methods on [`Peg`].
//!
//! `a + b` is `sequence((a, b))` and `a | b` is `choice((a, b))`. Chains nest
//! to the left, which matches the flat combinators exactly since both are
//! associative.

use std::ops::{Add, BitOr};

use crate::combinator::{
    Choice, FollowedBy, NotFollowedBy, OneOrMore, Optional, Sequence, ZeroOrMore, choice,
    followed_by, not_followed_by, one_or_more, optional, sequence, zero_or_more,
};
use crate::matcher::{Matcher, Peg};
use crate::trace::{Named, named};

impl<A: Matcher, B: Matcher> Add<Peg<B>> for Peg<A> {
    type Output = Peg<Sequence<(A, B)>>;

    fn add(self, rhs: Peg<B>) -> Self::Output {
        sequence((self.into_inner(), rhs.into_inner()))
    }
}

impl<A: Matcher, B: Matcher> BitOr<Peg<B>> for Peg<A> {
    type Output = Peg<Choice<(A, B)>>;

    fn bitor(self, rhs: Peg<B>) -> Self::Output {
        choice((self.into_inner(), rhs.into_inner()))
    }
}

impl<M: Matcher> Peg<M> {
    /// Match `self`, then `next`. Same as `self + next`.
    pub fn then<N: Matcher>(self, next: N) -> Peg<Sequence<(M, N)>> {
        sequence((self.into_inner(), next))
    }

    /// Try `self`, falling back to `alternative`. Same as `self | alternative`.
    pub fn or<N: Matcher>(self, alternative: N) -> Peg<Choice<(M, N)>> {
        choice((self.into_inner(), alternative))
    }

    /// See [`optional`].
    pub fn optional(self) -> Peg<Optional<M>> {
        optional(self.into_inner())
    }

    /// See [`zero_or_more`].
    pub fn zero_or_more(self) -> Peg<ZeroOrMore<M>> {
        zero_or_more(self.into_inner())
    }

    /// See [`one_or_more`].
    pub fn one_or_more(self) -> Peg<OneOrMore<M>> {
        one_or_more(self.into_inner())
    }

    /// See [`followed_by`].
    pub fn followed_by(self) -> Peg<FollowedBy<M>> {
        followed_by(self.into_inner())
    }

    /// See [`not_followed_by`].
    pub fn not_followed_by(self) -> Peg<NotFollowedBy<M>> {
        not_followed_by(self.into_inner())
    }

    /// Attach a rule name that shows up in trace logs.
    pub fn named(self, name: &'static str) -> Peg<Named<M>> {
        named(name, self.into_inner())
    }
}

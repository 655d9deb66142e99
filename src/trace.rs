//! Named rules that report their attempts through `tracing`.

use tracing::trace;

use crate::cursor::Cursor;
use crate::matcher::{Matcher, Peg, peg};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Named<M> {
    name: &'static str,
    matcher: M,
}

impl<M> Named<M> {
    /// The rule name given to [`named`].
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<M: Matcher> Matcher for Named<M> {
    fn attempt(&self, cursor: &mut Cursor<'_>) -> bool {
        let start = cursor.offset();
        trace!(rule = self.name, offset = start, "attempt");
        let matched = self.matcher.attempt(cursor);
        if matched {
            trace!(rule = self.name, start, end = cursor.offset(), "matched");
        } else {
            trace!(rule = self.name, offset = start, "failed");
        }
        matched
    }
}

/// Label `matcher` as rule `name`. Matching behaviour is unchanged.
pub fn named<M: Matcher>(name: &'static str, matcher: M) -> Peg<Named<M>> {
    peg(Named { name, matcher })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::literal;

    #[test]
    fn named_is_transparent() {
        let p = named("ab", literal("ab"));
        let mut cursor = Cursor::new(b"abc");
        assert!(p.attempt(&mut cursor));
        assert_eq!(cursor.offset(), 2);

        let mut cursor = Cursor::new(b"acb");
        assert!(!p.attempt(&mut cursor));
        assert_eq!(cursor.offset(), 0);
        assert_eq!(p.into_inner().name(), "ab");
    }
}

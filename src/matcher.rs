//! The matcher contract and the [`Peg`] composition wrapper.

use std::fmt;

use crate::cursor::Cursor;

/// Something that can recognize a pattern at a cursor.
///
/// On success `attempt` returns `true` and leaves the cursor just past what was
/// consumed. On failure it returns `false` and the cursor is exactly as it was
/// on entry. Every combinator in this crate relies on that guarantee from its
/// children, so custom implementations must uphold it too.
pub trait Matcher {
    fn attempt(&self, cursor: &mut Cursor<'_>) -> bool;
}

impl<M: Matcher + ?Sized> Matcher for &M {
    fn attempt(&self, cursor: &mut Cursor<'_>) -> bool {
        (**self).attempt(cursor)
    }
}

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    fn attempt(&self, cursor: &mut Cursor<'_>) -> bool {
        (**self).attempt(cursor)
    }
}

/// A type-erased matcher, for grammars assembled at runtime.
pub type BoxedMatcher = Box<dyn Matcher + Send + Sync>;

/// Uniform handle around any matcher.
///
/// Every constructor in this crate returns a `Peg`, which is itself a
/// [`Matcher`] and can be nested freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Peg<M> {
    matcher: M,
}

/// Wrap a matcher in a [`Peg`].
pub fn peg<M: Matcher>(matcher: M) -> Peg<M> {
    Peg { matcher }
}

impl<M> Peg<M> {
    /// Unwrap the underlying matcher.
    pub fn into_inner(self) -> M {
        self.matcher
    }
}

impl<M: Matcher> Peg<M> {
    /// Run the matcher on a copy of `cursor`, reporting only whether it would
    /// succeed. The caller's cursor is never touched.
    pub fn test(&self, cursor: &Cursor<'_>) -> bool {
        let mut scratch = *cursor;
        self.matcher.attempt(&mut scratch)
    }

    /// Number of bytes consumed when matching from the start of `input`.
    pub fn match_prefix(&self, input: &[u8]) -> Option<usize> {
        let mut cursor = Cursor::new(input);
        self.matcher.attempt(&mut cursor).then(|| cursor.offset())
    }

    /// `true` if the matcher consumes all of `input`.
    pub fn matches(&self, input: &[u8]) -> bool {
        self.match_prefix(input) == Some(input.len())
    }

    /// Erase the matcher's type.
    pub fn boxed(self) -> Peg<BoxedMatcher>
    where
        M: Send + Sync + 'static,
    {
        Peg {
            matcher: Box::new(self.matcher),
        }
    }
}

impl<M: Matcher> Matcher for Peg<M> {
    fn attempt(&self, cursor: &mut Cursor<'_>) -> bool {
        self.matcher.attempt(cursor)
    }
}

/// A matcher backed by a function or closure.
///
/// Plain `fn` items make recursive rules possible, since a function can refer
/// to itself where a value cannot contain itself.
#[derive(Clone, Copy)]
pub struct FromFn<F> {
    f: F,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FromFn")
    }
}

impl<F> Matcher for FromFn<F>
where
    F: Fn(&mut Cursor<'_>) -> bool,
{
    fn attempt(&self, cursor: &mut Cursor<'_>) -> bool {
        (self.f)(cursor)
    }
}

/// Build a matcher from a function.
///
/// The function must honour the [`Matcher`] contract: on failure it has to
/// leave the cursor where it found it.
pub fn from_fn<F>(f: F) -> Peg<FromFn<F>>
where
    F: Fn(&mut Cursor<'_>) -> bool,
{
    peg(FromFn { f })
}

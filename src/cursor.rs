//! Read position within an immutable input buffer.

/// A position in an input buffer.
///
/// Matchers receive a `&mut Cursor` and advance it on success. The offset never
/// passes `input.len()`; combinators rewind by assigning a previously copied
/// cursor back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor<'a> {
    input: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`.
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, offset: 0 }
    }

    /// Create a cursor at `offset`, clamped to the end of `input`.
    pub fn at(input: &'a [u8], offset: usize) -> Self {
        Self {
            input,
            offset: offset.min(input.len()),
        }
    }

    /// The whole buffer, consumed or not.
    pub fn input(&self) -> &'a [u8] {
        self.input
    }

    /// Bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.offset..]
    }

    /// The byte under the cursor, or `None` at end of input.
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.offset).copied()
    }

    /// `true` once every byte has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.offset == self.input.len()
    }

    /// Advance by `n` bytes. Callers must have checked that `n` bytes remain.
    pub(crate) fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.input.len() - self.offset);
        self.offset += n;
    }
}

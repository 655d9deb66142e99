//! Parsing-expression-grammar matchers built by composing values.
//!
//! There is no grammar object separate from the matchers: the composed value
//! is the grammar and runs directly against a [`Cursor`]. Every matcher leaves
//! the cursor untouched when it fails, which is what lets sequence, choice
//! and repetition backtrack without any bookkeeping of their own.
//!
//! # Example
//!
//! ```rust
//! use pegmatch::{Cursor, Matcher, end, one_or_more, range, sequence};
//!
//! let number = sequence((one_or_more(range(b'0', b'9')), end()));
//!
//! let mut cursor = Cursor::new(b"123");
//! assert!(number.attempt(&mut cursor));
//! assert_eq!(cursor.offset(), 3);
//!
//! // The digits match, but `end()` does not, so the whole sequence rewinds.
//! let mut cursor = Cursor::new(b"123x");
//! assert!(!number.attempt(&mut cursor));
//! assert_eq!(cursor.offset(), 0);
//! ```
//!
//! The same grammar with operators:
//!
//! ```rust
//! use pegmatch::{byte, end, range};
//!
//! let digits = range(b'0', b'9').one_or_more();
//! let signed = (byte(b'+') | byte(b'-')).optional() + digits + end();
//! assert!(signed.matches(b"-42"));
//! assert!(!signed.matches(b"4-2"));
//! ```

pub mod combinator;
mod cursor;
pub mod grammars;
mod matcher;
mod primitive;
mod trace;

pub use combinator::{
    MatcherList, choice, followed_by, not_followed_by, one_or_more, optional, sequence,
    zero_or_more,
};
pub use cursor::Cursor;
pub use matcher::{BoxedMatcher, FromFn, Matcher, Peg, from_fn, peg};
pub use primitive::{
    AnyByte, Byte, Empty, End, Literal, Range, any_byte, byte, empty, end, literal, range,
};
pub use trace::{Named, named};

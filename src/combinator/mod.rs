//! Composition operators.
//!
//! | Constructor              | Infix / method      | Behaviour                                  |
//! |--------------------------|---------------------|--------------------------------------------|
//! | `sequence((a, b, ..))`   | `a + b`, `a.then(b)`| all in order, rewind everything on failure |
//! | `choice((a, b, ..))`     | `a \| b`, `a.or(b)` | first alternative that succeeds            |
//! | `optional(p)`            | `p.optional()`      | `p` or nothing                             |
//! | `zero_or_more(p)`        | `p.zero_or_more()`  | greedy, any number of `p`                  |
//! | `one_or_more(p)`         | `p.one_or_more()`   | greedy, at least one `p`                   |
//! | `followed_by(p)`         | `p.followed_by()`   | lookahead, consumes nothing                |
//! | `not_followed_by(p)`     | `p.not_followed_by()` | negative lookahead, consumes nothing     |
//!
//! Repetition never gives back what it matched. A repeated matcher that can
//! succeed without consuming input loops forever.

pub mod choice;
pub mod list;
pub mod lookahead;
pub mod ops;
pub mod repeat;
pub mod sequence;

pub use choice::{Choice, choice};
pub use list::MatcherList;
pub use lookahead::{FollowedBy, NotFollowedBy, followed_by, not_followed_by};
pub use repeat::{OneOrMore, Optional, ZeroOrMore, one_or_more, optional, zero_or_more};
pub use sequence::{Sequence, sequence};

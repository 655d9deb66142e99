//! Ordered lists of child matchers, shared by sequence and choice.

use crate::cursor::Cursor;
use crate::matcher::Matcher;

/// An ordered collection of matchers.
///
/// Implemented for tuples (up to twelve elements, each of its own type), for
/// arrays and for vectors.
pub trait MatcherList {
    /// Attempt each element in order against the advancing cursor, stopping at
    /// the first failure. Does not rewind.
    fn attempt_all(&self, cursor: &mut Cursor<'_>) -> bool;

    /// Attempt each element in order from the same cursor, stopping at the
    /// first success.
    fn attempt_any(&self, cursor: &mut Cursor<'_>) -> bool;
}

macro_rules! tuple_list {
    ($($name:ident)*) => {
        impl<$($name: Matcher),*> MatcherList for ($($name,)*) {
            #[allow(non_snake_case, unused_variables)]
            fn attempt_all(&self, cursor: &mut Cursor<'_>) -> bool {
                let ($($name,)*) = self;
                true $(&& $name.attempt(cursor))*
            }

            #[allow(non_snake_case, unused_variables)]
            fn attempt_any(&self, cursor: &mut Cursor<'_>) -> bool {
                let ($($name,)*) = self;
                false $(|| $name.attempt(cursor))*
            }
        }
    };
}

tuple_list!();
tuple_list!(A);
tuple_list!(A B);
tuple_list!(A B C);
tuple_list!(A B C D);
tuple_list!(A B C D E);
tuple_list!(A B C D E F);
tuple_list!(A B C D E F G);
tuple_list!(A B C D E F G H);
tuple_list!(A B C D E F G H I);
tuple_list!(A B C D E F G H I J);
tuple_list!(A B C D E F G H I J K);
tuple_list!(A B C D E F G H I J K L);

impl<M: Matcher> MatcherList for [M] {
    fn attempt_all(&self, cursor: &mut Cursor<'_>) -> bool {
        self.iter().all(|m| m.attempt(cursor))
    }

    fn attempt_any(&self, cursor: &mut Cursor<'_>) -> bool {
        self.iter().any(|m| m.attempt(cursor))
    }
}

impl<M: Matcher, const N: usize> MatcherList for [M; N] {
    fn attempt_all(&self, cursor: &mut Cursor<'_>) -> bool {
        self.as_slice().attempt_all(cursor)
    }

    fn attempt_any(&self, cursor: &mut Cursor<'_>) -> bool {
        self.as_slice().attempt_any(cursor)
    }
}

impl<M: Matcher> MatcherList for Vec<M> {
    fn attempt_all(&self, cursor: &mut Cursor<'_>) -> bool {
        self.as_slice().attempt_all(cursor)
    }

    fn attempt_any(&self, cursor: &mut Cursor<'_>) -> bool {
        self.as_slice().attempt_any(cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{byte, literal};

    #[test]
    fn empty_tuple() {
        let mut cursor = Cursor::new(b"abc");
        assert!(().attempt_all(&mut cursor));
        assert!(!().attempt_any(&mut cursor));
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn all_stops_at_first_failure() {
        // No rewind at this level: the caller owns that.
        let mut cursor = Cursor::new(b"abx");
        assert!(!(byte(b'a'), byte(b'b'), byte(b'c')).attempt_all(&mut cursor));
        assert_eq!(cursor.offset(), 2);
    }

    #[test]
    fn any_takes_first_success() {
        let mut cursor = Cursor::new(b"abc");
        assert!((literal("x"), literal("ab"), literal("a")).attempt_any(&mut cursor));
        assert_eq!(cursor.offset(), 2);
    }

    #[test]
    fn arrays_and_vecs() {
        let mut cursor = Cursor::new(b"aab");
        assert!([byte(b'a'), byte(b'a')].attempt_all(&mut cursor));
        assert_eq!(cursor.offset(), 2);
        assert!(vec![byte(b'x'), byte(b'b')].attempt_any(&mut cursor));
        assert!(cursor.is_at_end());
        assert!(Vec::<crate::primitive::Byte>::new().attempt_all(&mut cursor));
    }
}

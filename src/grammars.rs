//! Ready-made grammars, built only from the public combinators.
//!
//! The registry is what the `pegmatch` binary runs; the builders double as
//! examples of how to write grammars, recursive ones included.

use anyhow::{Result, anyhow};
use itertools::Itertools;
use phf::{Map, phf_map};

use crate::combinator::{choice, not_followed_by, one_or_more, optional, sequence, zero_or_more};
use crate::cursor::Cursor;
use crate::matcher::{BoxedMatcher, Matcher, Peg, from_fn};
use crate::primitive::{Range, any_byte, byte, range};

/// A registered grammar.
pub struct GrammarInfo {
    /// One-line summary shown by `--list`.
    pub description: &'static str,
    /// Builds a fresh instance of the grammar.
    pub build: fn() -> Peg<BoxedMatcher>,
}

/// Registered grammars. Please keep names sorted alphabetically.
static GRAMMARS: Map<&'static str, GrammarInfo> = phf_map! {
    "csv-row" => GrammarInfo {
        description: "comma-separated fields, quoted fields may contain \"\" escapes",
        build: csv_row,
    },
    "decimal" => GrammarInfo {
        description: "signed number with optional fraction and exponent",
        build: decimal,
    },
    "expr" => GrammarInfo {
        description: "integer arithmetic with + - * / and parentheses",
        build: expr,
    },
    "identifier" => GrammarInfo {
        description: "ASCII letter or '_' followed by letters, digits or '_'",
        build: identifier,
    },
    "integer" => GrammarInfo {
        description: "optional sign followed by one or more digits",
        build: integer,
    },
    "ipv4" => GrammarInfo {
        description: "dotted quad with each part in 0..=255",
        build: ipv4,
    },
};

/// Look up a registered grammar by name.
pub fn lookup(name: &str) -> Result<&'static GrammarInfo> {
    GRAMMARS.get(name).ok_or_else(|| {
        anyhow!(
            "Unknown grammar '{}'. Known grammars: {}.",
            name,
            names().join(", ")
        )
    })
}

/// Names of all registered grammars, sorted.
pub fn names() -> Vec<&'static str> {
    GRAMMARS.keys().copied().sorted().collect()
}

fn digit() -> Peg<Range> {
    range(b'0', b'9')
}

fn spaces() -> Peg<impl Matcher> {
    zero_or_more(byte(b' '))
}

fn signed_digits() -> Peg<impl Matcher> {
    sequence((optional(choice((byte(b'+'), byte(b'-')))), one_or_more(digit())))
}

/// Optional sign followed by digits.
pub fn integer() -> Peg<BoxedMatcher> {
    signed_digits().named("integer").boxed()
}

/// Integer with optional fraction and exponent.
pub fn decimal() -> Peg<BoxedMatcher> {
    let fraction = sequence((byte(b'.'), one_or_more(digit())));
    let exponent = sequence((choice((byte(b'e'), byte(b'E'))), signed_digits()));
    sequence((signed_digits(), optional(fraction), optional(exponent)))
        .named("decimal")
        .boxed()
}

/// C-style identifier.
pub fn identifier() -> Peg<BoxedMatcher> {
    let head = choice((range(b'a', b'z'), range(b'A', b'Z'), byte(b'_')));
    let tail = choice((range(b'a', b'z'), range(b'A', b'Z'), digit(), byte(b'_')));
    sequence((head, zero_or_more(tail)))
        .named("identifier")
        .boxed()
}

// sum     <- product (sp [+-] product)* sp
// product <- factor (sp [*/] factor)*
// factor  <- sp (integer / '(' sum ')')

/// Integer arithmetic expression.
pub fn expr() -> Peg<BoxedMatcher> {
    from_fn(sum).boxed()
}

fn sum(cursor: &mut Cursor<'_>) -> bool {
    let op = choice((byte(b'+'), byte(b'-')));
    sequence((
        from_fn(product),
        zero_or_more(sequence((spaces(), op, from_fn(product)))),
        spaces(),
    ))
    .named("sum")
    .attempt(cursor)
}

fn product(cursor: &mut Cursor<'_>) -> bool {
    let op = choice((byte(b'*'), byte(b'/')));
    sequence((
        from_fn(factor),
        zero_or_more(sequence((spaces(), op, from_fn(factor)))),
    ))
    .named("product")
    .attempt(cursor)
}

fn factor(cursor: &mut Cursor<'_>) -> bool {
    let parenthesized = sequence((byte(b'('), from_fn(sum), byte(b')')));
    sequence((spaces(), choice((signed_digits(), parenthesized))))
        .named("factor")
        .attempt(cursor)
}

/// One CSV record; fields may be quoted.
pub fn csv_row() -> Peg<BoxedMatcher> {
    let quoted_char = choice((
        sequence((byte(b'"'), byte(b'"'))),
        sequence((not_followed_by(byte(b'"')), any_byte())),
    ));
    let quoted = sequence((byte(b'"'), zero_or_more(quoted_char), byte(b'"')));
    let bare_char = sequence((
        not_followed_by(choice((byte(b','), byte(b'"'), byte(b'\n')))),
        any_byte(),
    ));
    let field = choice((quoted, zero_or_more(bare_char))).named("field");
    sequence((field, zero_or_more(sequence((byte(b','), field)))))
        .named("csv-row")
        .boxed()
}

fn octet() -> Peg<impl Matcher + Copy> {
    // Longest forms first: ordered choice commits to the first that fits.
    choice((
        sequence((byte(b'2'), byte(b'5'), range(b'0', b'5'))),
        sequence((byte(b'2'), range(b'0', b'4'), digit())),
        sequence((byte(b'1'), digit(), digit())),
        sequence((range(b'1', b'9'), digit())),
        digit(),
    ))
    .named("octet")
}

/// Dotted-quad IPv4 address.
pub fn ipv4() -> Peg<BoxedMatcher> {
    let part = octet();
    let dot = byte(b'.');
    sequence((part, dot, part, dot, part, dot, part, not_followed_by(digit())))
        .named("ipv4")
        .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(name: &str, input: &str) -> bool {
        (lookup(name).unwrap().build)().matches(input.as_bytes())
    }

    #[test]
    fn names_are_sorted() {
        let names = names();
        assert_eq!(
            names,
            vec!["csv-row", "decimal", "expr", "identifier", "integer", "ipv4"]
        );
    }

    #[test]
    fn unknown_grammar_is_an_error() {
        let err = lookup("nope").err().unwrap().to_string();
        assert!(err.contains("nope"), "{err}");
        assert!(err.contains("integer"), "{err}");
    }

    #[test]
    fn every_grammar_has_a_description() {
        for name in names() {
            assert!(!lookup(name).unwrap().description.is_empty(), "{name}");
        }
    }

    #[test]
    fn integers() {
        assert!(full("integer", "42"));
        assert!(full("integer", "-7"));
        assert!(full("integer", "+0"));
        assert!(!full("integer", "-"));
        assert!(!full("integer", "4 2"));
        assert!(!full("integer", ""));
    }

    #[test]
    fn decimals() {
        assert!(full("decimal", "3.14"));
        assert!(full("decimal", "-2e10"));
        assert!(full("decimal", "6.02E+23"));
        assert!(!full("decimal", "1."));
        assert!(!full("decimal", ".5"));
        // A dangling exponent marker is left unconsumed.
        assert_eq!(decimal().match_prefix(b"1e"), Some(1));
    }

    #[test]
    fn identifiers() {
        assert!(full("identifier", "x"));
        assert!(full("identifier", "_private9"));
        assert!(full("identifier", "CamelCase"));
        assert!(!full("identifier", "9lives"));
        assert!(!full("identifier", "a-b"));
    }

    #[test]
    fn expressions() {
        assert!(full("expr", "1"));
        assert!(full("expr", "1+2*3"));
        assert!(full("expr", " ( 1 + 2 ) * -3 / 4 "));
        assert!(full("expr", "((7))"));
        assert!(!full("expr", "1+"));
        assert!(!full("expr", "(1+2"));
        assert!(!full("expr", "1 2"));
        assert!(!full("expr", ""));
    }

    #[test]
    fn expression_prefix_stops_before_garbage() {
        assert_eq!(expr().match_prefix(b"1+2)"), Some(3));
        // A trailing operator with no operand is given back; only the space
        // before it stays consumed.
        assert_eq!(expr().match_prefix(b"1 + "), Some(2));
    }

    #[test]
    fn csv_rows() {
        assert!(full("csv-row", "a,b,c"));
        assert!(full("csv-row", "a,,c"));
        assert!(full("csv-row", ""));
        assert!(full("csv-row", r#""x, y","say ""hi""",z"#));
        assert!(!full("csv-row", r#""unterminated"#));
        assert!(!full("csv-row", r#"a"b"#));
    }

    #[test]
    fn ipv4_addresses() {
        assert!(full("ipv4", "192.168.0.1"));
        assert!(full("ipv4", "0.0.0.0"));
        assert!(full("ipv4", "255.255.255.255"));
        assert!(full("ipv4", "10.20.199.249"));
        assert!(!full("ipv4", "256.1.1.1"));
        assert!(!full("ipv4", "1.2.3"));
        assert!(!full("ipv4", "1.2.3.4.5"));
        assert!(!full("ipv4", "01.2.3.4"));
    }
}

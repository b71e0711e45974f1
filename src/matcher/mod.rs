mod basic_matchers;
mod char_matcher;
mod macros;
mod objects;
mod operators;
mod repeat;
mod traits;

pub use basic_matchers::Literal;
pub use char_matcher::{Char, CharInterval, MatchChar, OneOf};
pub use objects::BoxedMatcher;
pub use operators::{Choice, Sequence};
pub use patterns::*;
pub use repeat::{Repeat, RepeatBounds, RepeatCount};
pub use traits::{DebugPrecedence, MatchCursor};

use core::fmt;

use crate::{Cursor, FullMatch};

/// Free-standing constructors, brought into scope by [`pattern!`](crate::pattern).
pub mod patterns {
    pub use super::{
        basic_matchers::literal,
        char_matcher::{
            char, char_range,
            classes::{
                alpha, alphanumeric, ampersand, digit, double_quote, lower, single_quote,
                underscore, upper,
            },
            interval, one_of, try_interval,
        },
        objects::{choice_of, select, sequence_of},
        repeat::{optional, repeat},
    };
}

/// A matcher wrapped for composition.
///
/// `Pattern` adds the builder surface (`+`, `|`, `*`, `-` and their method
/// forms) on top of any [`MatchCursor`]; it matches exactly like the matcher it
/// wraps.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern<M> {
    inner: M,
}

impl<M> Pattern<M> {
    pub const fn new(inner: M) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> M {
        self.inner
    }

    pub const fn as_inner(&self) -> &M {
        &self.inner
    }
}

impl<M: MatchCursor> Pattern<M> {
    /// Same as [`match_str(self, text)`](crate::match_str).
    pub fn match_str<'s>(&self, text: &'s str) -> Cursor<'s> {
        crate::match_str(self, text)
    }

    /// Same as [`fullmatch(self, text)`](crate::fullmatch).
    pub fn fullmatch<'s>(&self, text: &'s str) -> FullMatch<'s> {
        crate::fullmatch(self, text)
    }

    /// Borrows this pattern for composition without giving it up.
    pub fn by_ref(&self) -> Pattern<&M> {
        Pattern::new(&self.inner)
    }
}

impl<M: MatchCursor> MatchCursor for Pattern<M> {
    #[inline]
    fn match_cursor<'s>(&self, cursor: Cursor<'s>) -> Cursor<'s> {
        self.inner.match_cursor(cursor)
    }

    fn fmt_matcher(&self, f: &mut fmt::Formatter, prec: DebugPrecedence) -> fmt::Result {
        self.inner.fmt_matcher(f, prec)
    }
}

impl<M: MatchCursor> fmt::Debug for Pattern<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt_matcher(f, DebugPrecedence::Initial)
    }
}

impl<M: MatchCursor> fmt::Display for Pattern<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt_matcher(f, DebugPrecedence::Initial)
    }
}

impl<M: MatchCursor> From<M> for Pattern<M> {
    fn from(inner: M) -> Self {
        Self::new(inner)
    }
}

#[test]
fn simple_match() {
    let identifier = (lower() | underscore()) + (alphanumeric() | underscore()).repeat(..);
    let assignment = identifier.by_ref() + literal(" = ") + digit().repeat(1..);

    let out = assignment.match_str("max_len = 42;");
    assert!(out.is_success());
    assert_eq!(out.matched(), "max_len = 42");
    assert!(!assignment.fullmatch("max_len = 42;").is_match());
    assert!(identifier.fullmatch("max_len").is_match());
}

#[test]
fn debug_uses_minimal_parentheses() {
    use alloc::format;

    let p = char('a') + (char('b') | char('c')) * (1..=4);
    assert_eq!(format!("{p:?}"), "'a' + ('b' | 'c') * 1..=4");

    let p = (char('a') + char('b')).repeat(..) | lower() + one_of("_-");
    assert_eq!(format!("{p:?}"), "('a' + 'b') * .. | 'a'..='z' + one_of(\"_-\")");

    let p = char('a') + (char('b') + char('c'));
    assert_eq!(format!("{p}"), "'a' + ('b' + 'c')");

    let p = literal("if").optional() + char('x') * 3 + digit().repeat(2..);
    assert_eq!(format!("{p}"), "\"if\" * ..=1 + 'x' * 3 + '0'..='9' * 2..");
}

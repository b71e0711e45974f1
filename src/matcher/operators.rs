use core::{
    fmt,
    ops::{Add, BitOr},
};

use crate::Cursor;

use super::{DebugPrecedence, MatchCursor, Pattern};

/// Matches `first`, then `second` from where `first` stopped.
///
/// Never commits partially: if either side fails, the sequence fails at the
/// position it was entered with. `first` is not retried with a different
/// length when `second` fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sequence<A, B> {
    first: A,
    second: B,
}

impl<A, B> Sequence<A, B> {
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: MatchCursor, B: MatchCursor> MatchCursor for Sequence<A, B> {
    fn match_cursor<'s>(&self, cursor: Cursor<'s>) -> Cursor<'s> {
        let first = self.first.match_cursor(cursor);
        if !first.is_success() {
            return cursor.stay_as_failure();
        }

        let second = self.second.match_cursor(first);
        if second.is_success() {
            second
        } else {
            cursor.stay_as_failure()
        }
    }

    fn fmt_matcher(&self, f: &mut fmt::Formatter, prec: DebugPrecedence) -> fmt::Result {
        prec.wrap_below(DebugPrecedence::Add, f, |f| {
            self.first.fmt_matcher(f, DebugPrecedence::Add)?;
            f.write_str(" + ")?;
            self.second.fmt_matcher(f, DebugPrecedence::Mul)
        })
    }
}

impl<A, B> Add<Pattern<B>> for Pattern<A> {
    type Output = Pattern<Sequence<A, B>>;

    fn add(self, rhs: Pattern<B>) -> Self::Output {
        self.then(rhs)
    }
}

/// Tries `first`, and `second` from the same position only if `first` fails.
///
/// The first successful branch wins; there is no longest-match preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Choice<A, B> {
    first: A,
    second: B,
}

impl<A, B> Choice<A, B> {
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: MatchCursor, B: MatchCursor> MatchCursor for Choice<A, B> {
    fn match_cursor<'s>(&self, cursor: Cursor<'s>) -> Cursor<'s> {
        let first = self.first.match_cursor(cursor);
        if first.is_success() {
            return first;
        }
        self.second.match_cursor(cursor)
    }

    fn fmt_matcher(&self, f: &mut fmt::Formatter, prec: DebugPrecedence) -> fmt::Result {
        prec.wrap_below(DebugPrecedence::Or, f, |f| {
            self.first.fmt_matcher(f, DebugPrecedence::Or)?;
            f.write_str(" | ")?;
            self.second.fmt_matcher(f, DebugPrecedence::Add)
        })
    }
}

impl<A, B> BitOr<Pattern<B>> for Pattern<A> {
    type Output = Pattern<Choice<A, B>>;

    fn bitor(self, rhs: Pattern<B>) -> Self::Output {
        self.or(rhs)
    }
}

impl<A> Pattern<A> {
    /// Equivalent to `self + next`.
    pub fn then<B>(self, next: Pattern<B>) -> Pattern<Sequence<A, B>> {
        Pattern::new(Sequence::new(self.into_inner(), next.into_inner()))
    }

    /// Equivalent to `self | alternative`.
    pub fn or<B>(self, alternative: Pattern<B>) -> Pattern<Choice<A, B>> {
        Pattern::new(Choice::new(self.into_inner(), alternative.into_inner()))
    }
}

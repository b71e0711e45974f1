use alloc::boxed::Box;
use core::fmt;

use either::{for_both, Either};

use crate::Cursor;

use super::{literal, one_of, Choice, DebugPrecedence, MatchCursor, Pattern, Sequence};

/// A type-erased matcher tree, for patterns whose shape is only known at
/// runtime.
pub type BoxedMatcher = Box<dyn MatchCursor + Send + Sync>;

impl<M: MatchCursor + ?Sized> MatchCursor for Box<M> {
    fn match_cursor<'s>(&self, cursor: Cursor<'s>) -> Cursor<'s> {
        (**self).match_cursor(cursor)
    }

    fn fmt_matcher(&self, f: &mut fmt::Formatter, prec: DebugPrecedence) -> fmt::Result {
        (**self).fmt_matcher(f, prec)
    }
}

impl<L: MatchCursor, R: MatchCursor> MatchCursor for Either<L, R> {
    fn match_cursor<'s>(&self, cursor: Cursor<'s>) -> Cursor<'s> {
        for_both!(self, m => m.match_cursor(cursor))
    }

    fn fmt_matcher(&self, f: &mut fmt::Formatter, prec: DebugPrecedence) -> fmt::Result {
        for_both!(self, m => m.fmt_matcher(f, prec))
    }
}

impl<M: MatchCursor + Send + Sync + 'static> Pattern<M> {
    /// Erases the static type of this pattern.
    pub fn boxed(self) -> Pattern<BoxedMatcher> {
        let inner: BoxedMatcher = Box::new(self.into_inner());
        Pattern::new(inner)
    }
}

/// Picks one of two patterns of different types at runtime.
pub fn select<L, R>(
    condition: bool,
    if_true: Pattern<L>,
    if_false: Pattern<R>,
) -> Pattern<Either<L, R>> {
    Pattern::new(if condition {
        Either::Left(if_true.into_inner())
    } else {
        Either::Right(if_false.into_inner())
    })
}

/// Chains `patterns` left to right with [`Sequence`].
///
/// An empty iterator yields a pattern that always succeeds without consuming
/// input.
pub fn sequence_of<M>(patterns: impl IntoIterator<Item = Pattern<M>>) -> Pattern<BoxedMatcher>
where
    M: MatchCursor + Send + Sync + 'static,
{
    patterns
        .into_iter()
        .map(Pattern::boxed)
        .reduce(|acc, next| {
            let joined: BoxedMatcher = Box::new(Sequence::new(acc.into_inner(), next.into_inner()));
            Pattern::new(joined)
        })
        .unwrap_or_else(|| literal("").boxed())
}

/// Tries `patterns` in order with [`Choice`].
///
/// An empty iterator yields a pattern that never matches.
pub fn choice_of<M>(patterns: impl IntoIterator<Item = Pattern<M>>) -> Pattern<BoxedMatcher>
where
    M: MatchCursor + Send + Sync + 'static,
{
    patterns
        .into_iter()
        .map(Pattern::boxed)
        .reduce(|acc, next| {
            let joined: BoxedMatcher = Box::new(Choice::new(acc.into_inner(), next.into_inner()));
            Pattern::new(joined)
        })
        .unwrap_or_else(|| one_of("").boxed())
}

use core::fmt;

use crate::{DebugPrecedence, MatchCursor};

/// Prints a matcher tree as an expression, for log fields.
pub(crate) struct ShowMatcher<'m, M: ?Sized>(pub &'m M);

impl<M: MatchCursor + ?Sized> fmt::Display for ShowMatcher<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_matcher(f, DebugPrecedence::Initial)
    }
}

use core::fmt;

use crate::Cursor;

/// A composable matcher: maps an incoming [`Cursor`] to an outcome cursor.
///
/// Implementations are pure. Given the same cursor they must return the same
/// result, and a failing result must sit at the incoming position.
pub trait MatchCursor {
    fn match_cursor<'s>(&self, cursor: Cursor<'s>) -> Cursor<'s>;

    fn fmt_matcher(&self, f: &mut fmt::Formatter, prec: DebugPrecedence) -> fmt::Result {
        let _ = prec;
        f.write_str(core::any::type_name::<Self>())
    }
}

impl<M: MatchCursor + ?Sized> MatchCursor for &M {
    fn match_cursor<'s>(&self, cursor: Cursor<'s>) -> Cursor<'s> {
        (**self).match_cursor(cursor)
    }

    fn fmt_matcher(&self, f: &mut fmt::Formatter, prec: DebugPrecedence) -> fmt::Result {
        (**self).fmt_matcher(f, prec)
    }
}

/// Binding strength used when printing a matcher tree, loosest last.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DebugPrecedence {
    Base,
    Char,
    Mul,
    Add,
    Or,
    #[default]
    Initial,
}

impl DebugPrecedence {
    /// Runs `block`, parenthesized if the surrounding context binds tighter
    /// than `prec`.
    pub(crate) fn wrap_below(
        self,
        prec: DebugPrecedence,
        f: &mut fmt::Formatter,
        block: impl FnOnce(&mut fmt::Formatter) -> fmt::Result,
    ) -> fmt::Result {
        if self < prec {
            f.write_str("(")?;
            block(f)?;
            f.write_str(")")
        } else {
            block(f)
        }
    }
}

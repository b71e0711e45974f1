use core::fmt;

use smallvec::SmallVec;

use crate::Cursor;

use super::{char_matcher::MatchChar, Char, DebugPrecedence, MatchCursor, Pattern};

/// Matches a fixed run of characters.
///
/// Equivalent to a chain of [`Sequence`](super::Sequence)s over one [`Char`]
/// per character: any mismatch fails at the incoming position. The empty
/// literal always succeeds without consuming input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    chars: SmallVec<[char; 16]>,
}

impl Literal {
    pub fn new(value: &str) -> Self {
        Self {
            chars: value.chars().collect(),
        }
    }
}

impl MatchCursor for Literal {
    fn match_cursor<'s>(&self, cursor: Cursor<'s>) -> Cursor<'s> {
        let mut current = cursor;
        for &expected in &self.chars {
            match current.current_char() {
                Some(ch) if Char::new(expected).match_char(ch) => current = current.advance(),
                _ => return cursor.stay_as_failure(),
            }
        }
        current.stay_as_success()
    }

    fn fmt_matcher(&self, f: &mut fmt::Formatter, _: DebugPrecedence) -> fmt::Result {
        fmt::Debug::fmt(&self.chars.iter().collect::<alloc::string::String>(), f)
    }
}

/// Matches `value` exactly.
pub fn literal(value: &str) -> Pattern<Literal> {
    Pattern::new(Literal::new(value))
}

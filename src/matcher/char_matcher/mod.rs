use core::{fmt, ops::Sub};

use smallvec::SmallVec;
use tracing::debug;

use crate::{Cursor, Error};

use super::{DebugPrecedence, MatchCursor, Pattern};

pub(crate) mod classes;

/// A test over a single character.
pub trait MatchChar {
    fn match_char(&self, ch: char) -> bool;

    fn fmt_char_matcher(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(core::any::type_name::<Self>())
    }
}

/// The primitive contract shared by every single-character matcher.
#[inline(always)]
fn match_single<'s>(matcher: &impl MatchChar, cursor: Cursor<'s>) -> Cursor<'s> {
    match cursor.current_char() {
        Some(ch) if matcher.match_char(ch) => cursor.advance(),
        _ => cursor.stay_as_failure(),
    }
}

macro_rules! char_matchers {
    ($($Type:ty),* $(,)?) => {$(
        impl MatchCursor for $Type {
            #[inline]
            fn match_cursor<'s>(&self, cursor: Cursor<'s>) -> Cursor<'s> {
                match_single(self, cursor)
            }

            fn fmt_matcher(&self, f: &mut fmt::Formatter, _: DebugPrecedence) -> fmt::Result {
                self.fmt_char_matcher(f)
            }
        }
    )*};
}

char_matchers!(Char, CharInterval, OneOf);

/// Matches exactly one occurrence of `expected`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Char {
    expected: char,
}

impl Char {
    pub const fn new(expected: char) -> Self {
        Self { expected }
    }

    pub const fn expected(&self) -> char {
        self.expected
    }
}

impl MatchChar for Char {
    #[inline(always)]
    fn match_char(&self, ch: char) -> bool {
        self.expected == ch
    }

    fn fmt_char_matcher(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.expected, f)
    }
}

/// Matches one character in `low..=high`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CharInterval {
    low: char,
    high: char,
}

impl CharInterval {
    /// Fails with [`Error::InvalidInterval`] if `low > high`.
    pub fn new(low: char, high: char) -> Result<Self, Error> {
        if low > high {
            let err = Error::InvalidInterval { low, high };
            debug!(%err, "rejected character interval");
            return Err(err);
        }
        Ok(Self { low, high })
    }

    /// Used for the predefined classes, whose bounds are known to be ordered.
    pub(crate) const fn new_ordered(low: char, high: char) -> Self {
        Self { low, high }
    }

    pub const fn low(&self) -> char {
        self.low
    }

    pub const fn high(&self) -> char {
        self.high
    }
}

impl MatchChar for CharInterval {
    #[inline(always)]
    fn match_char(&self, ch: char) -> bool {
        (self.low..=self.high).contains(&ch)
    }

    fn fmt_char_matcher(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}..={:?}", self.low, self.high)
    }
}

/// Matches one character from a set.
///
/// Equivalent to a [`Choice`](super::Choice) of one [`Char`] per member.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OneOf {
    chars: SmallVec<[char; 8]>,
}

impl OneOf {
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl MatchChar for OneOf {
    #[inline(always)]
    fn match_char(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    fn fmt_char_matcher(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("one_of(")?;
        fmt::Debug::fmt(&self.chars.iter().collect::<alloc::string::String>(), f)?;
        f.write_str(")")
    }
}

impl Pattern<Char> {
    /// Builds the interval from this character to `high`.
    pub fn try_to(self, high: char) -> Result<Pattern<CharInterval>, Error> {
        CharInterval::new(self.into_inner().expected, high).map(Pattern::new)
    }

    /// Builds the interval from this character to `high`.
    ///
    /// # Panics
    ///
    /// Panics if `high` is less than this character. Use [`try_to`](Self::try_to)
    /// for a fallible version.
    pub fn to(self, high: char) -> Pattern<CharInterval> {
        match self.try_to(high) {
            Ok(pattern) => pattern,
            Err(err) => panic!("{err}"),
        }
    }
}

/// `char('a') - char('z')` is the interval `'a'..='z'`.
impl Sub for Pattern<Char> {
    type Output = Pattern<CharInterval>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.to(rhs.into_inner().expected)
    }
}

/// Matches `expected`.
pub const fn char(expected: char) -> Pattern<Char> {
    Pattern::new(Char::new(expected))
}

/// Matches one character in `low..=high`.
pub fn try_interval(low: char, high: char) -> Result<Pattern<CharInterval>, Error> {
    CharInterval::new(low, high).map(Pattern::new)
}

/// Matches one character in `low..=high`.
///
/// # Panics
///
/// Panics if `low > high`. Use [`try_interval`] for a fallible version.
pub fn interval(low: char, high: char) -> Pattern<CharInterval> {
    char(low).to(high)
}

/// Same as [`interval`], taking a `char` range.
pub fn char_range(range: core::ops::RangeInclusive<char>) -> Pattern<CharInterval> {
    interval(*range.start(), *range.end())
}

/// Matches one character from `chars`.
pub fn one_of(chars: &str) -> Pattern<OneOf> {
    Pattern::new(OneOf::new(chars.chars()))
}

use core::{
    fmt,
    ops::{Bound, RangeBounds},
    str::FromStr,
};

use alloc::string::ToString;
use tracing::debug;

use crate::{Cursor, Error};

use super::{DebugPrecedence, MatchCursor, Pattern};

/// Inclusive repetition bounds. `max == None` means no upper limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RepeatBounds {
    min: u32,
    max: Option<u32>,
}

impl RepeatBounds {
    pub const ANY: Self = Self { min: 0, max: None };

    /// Fails with [`Error::InvalidRepeatBounds`] if `min > max`.
    pub fn new(min: u32, max: Option<u32>) -> Result<Self, Error> {
        match max {
            Some(max) if min > max => {
                let err = Error::InvalidRepeatBounds { min, max };
                debug!(%err, "rejected repeat bounds");
                Err(err)
            }
            _ => Ok(Self { min, max }),
        }
    }

    pub const fn exactly(count: u32) -> Self {
        Self {
            min: count,
            max: Some(count),
        }
    }

    pub const fn at_least(min: u32) -> Self {
        Self { min, max: None }
    }

    pub const fn min(&self) -> u32 {
        self.min
    }

    pub const fn max(&self) -> Option<u32> {
        self.max
    }

    fn allows_another(&self, count: u32) -> bool {
        self.max.map_or(true, |max| count < max)
    }
}

/// Parses the slice form `min:max`, where either side may be left empty:
/// `"1:4"`, `":4"`, `"2:"`, `":"`.
impl FromStr for RepeatBounds {
    type Err = Error;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let malformed = || {
            let err = Error::MalformedRepeatBounds(src.to_string());
            debug!(%err, "rejected repeat bounds");
            err
        };

        let (start, end) = src.split_once(':').ok_or_else(malformed)?;

        let parse_side = |side: &str| -> Result<Option<u32>, Error> {
            let side = side.trim();
            if side.is_empty() {
                return Ok(None);
            }
            if !side.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            side.parse().map(Some).map_err(|_| malformed())
        };

        let min = parse_side(start)?.unwrap_or(0);
        let max = parse_side(end)?;
        Self::new(min, max)
    }
}

/// Anything that can describe how many times a pattern repeats.
pub trait RepeatCount {
    fn repeat_bounds(&self) -> Result<RepeatBounds, Error>;
}

fn bounds_from_range(start: Bound<&u32>, end: Bound<&u32>) -> Result<RepeatBounds, Error> {
    let min = match start {
        Bound::Included(&x) => x,
        Bound::Excluded(&x) => x.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let max = match end {
        Bound::Included(&x) => Some(x),
        // `..0` holds no count at all, which no `min` can satisfy.
        Bound::Excluded(&0) => return RepeatBounds::new(min.max(1), Some(0)),
        Bound::Excluded(&x) => Some(x - 1),
        Bound::Unbounded => None,
    };
    RepeatBounds::new(min, max)
}

macro_rules! repeat_count_ranges {
    ($($Name:ty),* $(,)?) => {
        $(
            impl RepeatCount for $Name {
                fn repeat_bounds(&self) -> Result<RepeatBounds, Error> {
                    bounds_from_range(self.start_bound(), self.end_bound())
                }
            }
        )*
        impl_mul!($($Name,)*);
    };
}

macro_rules! impl_mul {
    ($($Name:ty),* $(,)?) => { $(
        impl<M> core::ops::Mul<$Name> for Pattern<M> {
            type Output = Pattern<Repeat<M>>;

            fn mul(self, rhs: $Name) -> Self::Output {
                self.repeat(rhs)
            }
        }
        impl<M> core::ops::Mul<Pattern<M>> for $Name {
            type Output = Pattern<Repeat<M>>;

            fn mul(self, rhs: Pattern<M>) -> Self::Output {
                rhs * self
            }
        }
    )* };
}

repeat_count_ranges!(
    core::ops::Range<u32>,
    core::ops::RangeTo<u32>,
    core::ops::RangeInclusive<u32>,
    core::ops::RangeToInclusive<u32>,
    core::ops::RangeFrom<u32>,
    core::ops::RangeFull,
);

impl_mul!(u32, RepeatBounds);

impl RepeatCount for u32 {
    fn repeat_bounds(&self) -> Result<RepeatBounds, Error> {
        Ok(RepeatBounds::exactly(*self))
    }
}

impl RepeatCount for RepeatBounds {
    fn repeat_bounds(&self) -> Result<RepeatBounds, Error> {
        Self::new(self.min, self.max)
    }
}

impl RepeatCount for &str {
    fn repeat_bounds(&self) -> Result<RepeatBounds, Error> {
        self.parse()
    }
}

/// Greedy repetition of `inner` between `min` and `max` times.
///
/// Takes as many repetitions as `inner` allows (up to `max`) and never gives
/// any back. Falling short of `min` fails at the position the repetition
/// started from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Repeat<M> {
    inner: M,
    bounds: RepeatBounds,
}

impl<M> Repeat<M> {
    pub const fn new(inner: M, bounds: RepeatBounds) -> Self {
        Self { inner, bounds }
    }

    pub const fn bounds(&self) -> RepeatBounds {
        self.bounds
    }
}

impl<M: MatchCursor> MatchCursor for Repeat<M> {
    fn match_cursor<'s>(&self, cursor: Cursor<'s>) -> Cursor<'s> {
        let origin = cursor;
        let mut current = cursor;
        let mut count = 0u32;

        while self.bounds.allows_another(count) {
            let next = self.inner.match_cursor(current);
            if !next.is_success() {
                break;
            }
            count = count.saturating_add(1);

            if next.position() == current.position() {
                // Every further attempt would succeed here without consuming
                // input, so the rest of the lower bound is met.
                count = count.max(self.bounds.min);
                break;
            }
            current = next;
        }

        if count >= self.bounds.min {
            current.stay_as_success()
        } else {
            origin.stay_as_failure()
        }
    }

    fn fmt_matcher(&self, f: &mut fmt::Formatter, prec: DebugPrecedence) -> fmt::Result {
        prec.wrap_below(DebugPrecedence::Mul, f, |f| {
            self.inner.fmt_matcher(f, DebugPrecedence::Base)?;
            f.write_str(" * ")?;
            match (self.bounds.min, self.bounds.max) {
                (min, Some(max)) if min == max => write!(f, "{min}"),
                (0, None) => f.write_str(".."),
                (0, Some(max)) => write!(f, "..={max}"),
                (min, None) => write!(f, "{min}.."),
                (min, Some(max)) => write!(f, "{min}..={max}"),
            }
        })
    }
}

/// Equivalent to [`inner.repeat(count)`](Pattern::repeat).
pub fn repeat<M>(count: impl RepeatCount, inner: Pattern<M>) -> Pattern<Repeat<M>> {
    inner.repeat(count)
}

/// Equivalent to [`inner.optional()`](Pattern::optional).
pub fn optional<M>(inner: Pattern<M>) -> Pattern<Repeat<M>> {
    inner.optional()
}

impl<M> Pattern<M> {
    /// Repeats this pattern greedily within `count`.
    pub fn try_repeat(self, count: impl RepeatCount) -> Result<Pattern<Repeat<M>>, Error> {
        let bounds = count.repeat_bounds()?;
        Ok(Pattern::new(Repeat::new(self.into_inner(), bounds)))
    }

    /// Repeats this pattern greedily within `count`.
    ///
    /// # Panics
    ///
    /// Panics if `count` is contradictory (`min > max`) or malformed. Use
    /// [`try_repeat`](Self::try_repeat) for a fallible version.
    pub fn repeat(self, count: impl RepeatCount) -> Pattern<Repeat<M>> {
        match self.try_repeat(count) {
            Ok(pattern) => pattern,
            Err(err) => panic!("{err}"),
        }
    }

    /// Equivalent to `self.repeat(..=1)`.
    pub fn optional(self) -> Pattern<Repeat<M>> {
        Pattern::new(Repeat::new(
            self.into_inner(),
            RepeatBounds {
                min: 0,
                max: Some(1),
            },
        ))
    }
}

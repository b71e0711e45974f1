//! String matchers built by composing values instead of parsing a regex.
//!
//! Primitives ([`Char`], [`CharInterval`]) inspect one character. Combinators
//! ([`Sequence`], [`Choice`], [`Repeat`]) compose them. [`Pattern`] wraps any
//! matcher and adds the builder operators:
//!
//! ```
//! use fre::patterns::*;
//!
//! // [a-z_][a-z0-9_]{0,15}
//! let ident = (lower() | underscore()) + (lower() | digit() | underscore()) * (..=15);
//!
//! assert!(ident.fullmatch("snake_case").is_match());
//! assert!(!ident.fullmatch("9lives").is_match());
//! assert_eq!(ident.match_str("x1 = 3").position(), 2);
//! ```
//!
//! Matching is greedy and never backtracks across combinators: a [`Repeat`]
//! takes as many repetitions as it can, and a [`Sequence`] whose second half
//! fails does not retry its first half with a shorter match.
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod cursor;
mod error;
pub mod matcher;
mod utils;

pub use cursor::{Cursor, FullMatch};
pub use error::Error;
pub use matcher::{
    patterns, BoxedMatcher, Char, CharInterval, Choice, DebugPrecedence, Literal, MatchChar,
    MatchCursor, OneOf, Pattern, Repeat, RepeatBounds, RepeatCount, Sequence,
};

use tracing::trace;
use utils::ShowMatcher;

/// Runs `matcher` from the start of `text`.
///
/// The result is successful if the matcher accepted a prefix of `text`; its
/// position is where that prefix ends, as a byte offset:
///
/// ```
/// use fre::patterns::*;
///
/// let out = fre::match_str(&char('é'), "éa");
/// assert_eq!(out.position(), 2);
/// assert_eq!(out.matched(), "é");
/// ```
pub fn match_str<'s, M: MatchCursor + ?Sized>(matcher: &M, text: &'s str) -> Cursor<'s> {
    let out = matcher.match_cursor(Cursor::seed(text));
    trace!(
        matcher = %ShowMatcher(matcher),
        len = text.len(),
        position = out.position(),
        success = out.is_success(),
        "match finished"
    );
    out
}

/// Like [`match_str`], but only reports a match if all of `text` was consumed.
pub fn fullmatch<'s, M: MatchCursor + ?Sized>(matcher: &M, text: &'s str) -> FullMatch<'s> {
    let out = FullMatch::new(match_str(matcher, text));
    trace!(matched = out.is_match(), "fullmatch finished");
    out
}

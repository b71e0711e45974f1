//! Predefined ASCII character classes.

use super::{char, Char, CharInterval, Pattern};
use crate::matcher::Choice;

/// `'a'..='z'`
pub const fn lower() -> Pattern<CharInterval> {
    Pattern::new(CharInterval::new_ordered('a', 'z'))
}

/// `'A'..='Z'`
pub const fn upper() -> Pattern<CharInterval> {
    Pattern::new(CharInterval::new_ordered('A', 'Z'))
}

/// `'0'..='9'`
pub const fn digit() -> Pattern<CharInterval> {
    Pattern::new(CharInterval::new_ordered('0', '9'))
}

/// An ASCII letter, lowercase tried first.
pub const fn alpha() -> Pattern<Choice<CharInterval, CharInterval>> {
    Pattern::new(Choice::new(
        CharInterval::new_ordered('a', 'z'),
        CharInterval::new_ordered('A', 'Z'),
    ))
}

pub const fn alphanumeric() -> Pattern<Choice<Choice<CharInterval, CharInterval>, CharInterval>> {
    Pattern::new(Choice::new(
        Choice::new(
            CharInterval::new_ordered('a', 'z'),
            CharInterval::new_ordered('A', 'Z'),
        ),
        CharInterval::new_ordered('0', '9'),
    ))
}

pub const fn underscore() -> Pattern<Char> {
    char('_')
}

pub const fn double_quote() -> Pattern<Char> {
    char('"')
}

pub const fn single_quote() -> Pattern<Char> {
    char('\'')
}

pub const fn ampersand() -> Pattern<Char> {
    char('&')
}

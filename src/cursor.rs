//! Immutable read position threaded through every matcher.
//!
//! Positions are byte offsets into the source and always sit on a `char`
//! boundary. For ASCII input this is the same as a character index.

/// A snapshot of the input, a read position, and the outcome of the last test.
///
/// Cursors are never mutated; every operation returns a new value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor<'s> {
    source: &'s str,
    position: usize,
    success: bool,
}

impl<'s> Cursor<'s> {
    /// The initial cursor for `text`: position 0, successful.
    pub const fn seed(text: &'s str) -> Self {
        Self {
            source: text,
            position: 0,
            success: true,
        }
    }

    pub const fn source(&self) -> &'s str {
        self.source
    }

    /// Byte offset into [`source`](Self::source), always on a `char` boundary.
    /// It equals the character count only for ASCII input.
    pub const fn position(&self) -> usize {
        self.position
    }

    pub const fn is_success(&self) -> bool {
        self.success
    }

    pub const fn at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// The character under the cursor, or `None` at end of input.
    pub fn current_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Moves past the current character and marks the result successful.
    ///
    /// At end of input the position is left unchanged.
    pub fn advance(self) -> Self {
        let step = self.current_char().map_or(0, char::len_utf8);
        Self {
            position: self.position + step,
            success: true,
            ..self
        }
    }

    pub const fn stay_as_success(self) -> Self {
        Self {
            success: true,
            ..self
        }
    }

    pub const fn stay_as_failure(self) -> Self {
        Self {
            success: false,
            ..self
        }
    }

    /// Text before the cursor.
    pub fn matched(&self) -> &'s str {
        &self.source[..self.position]
    }

    /// Text from the cursor to the end of input.
    pub fn remaining(&self) -> &'s str {
        &self.source[self.position..]
    }
}

/// Outcome of [`fullmatch`](crate::fullmatch): a partial match that also
/// reached end of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FullMatch<'s> {
    cursor: Cursor<'s>,
}

impl<'s> FullMatch<'s> {
    pub const fn new(cursor: Cursor<'s>) -> Self {
        Self { cursor }
    }

    pub const fn is_match(&self) -> bool {
        self.cursor.is_success() && self.cursor.at_end()
    }

    pub const fn cursor(&self) -> Cursor<'s> {
        self.cursor
    }
}

impl<'s> From<Cursor<'s>> for FullMatch<'s> {
    fn from(cursor: Cursor<'s>) -> Self {
        Self::new(cursor)
    }
}

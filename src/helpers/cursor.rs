//! Bounds-safe character access over a single line of text.
//! Reads past either end never fail; they report `None` or leave the position unchanged.

/// Forward/backward character reader over one line.
pub(crate) struct Cursor {
    characters: Vec<char>,
    position: usize,
}

impl Cursor {
    /// Creates a cursor positioned before the first character of `text`.
    pub(crate) fn new(text: &str) -> Self {
        Cursor {
            characters: text.chars().collect(),
            position: 0,
        }
    }

    /// Returns true while characters remain to be consumed.
    #[inline]
    pub(crate) fn has_more(&self) -> bool {
        self.position < self.characters.len()
    }

    /// 0-based offset of the next character to be consumed.
    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    /// Consumes and returns the current character, or `None` at the end.
    pub(crate) fn scan(&mut self) -> Option<char> {
        let character = self.peek()?;
        self.position += 1;
        Some(character)
    }

    /// Returns the current character without consuming it, or `None` at the end.
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.characters.get(self.position).copied()
    }

    /// Moves past the current character, if there is one.
    pub(crate) fn skip(&mut self) {
        if self.has_more() {
            self.position += 1;
        }
    }

    /// Steps back one character, if not already at the start.
    pub(crate) fn back(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// Skips characters while `predicate` holds, stopping on the first miss.
    pub(crate) fn skip_while<P>(&mut self, predicate: P)
    where
        P: Fn(char) -> bool,
    {
        while let Some(character) = self.peek() {
            if !predicate(character) {
                return;
            }
            self.position += 1;
        }
    }
}

//! Character cursor for traversing source code.
//!
//! The cursor owns the scanner's position state: byte offset, line and
//! column. The line starts at 1 and grows by one for every consumed newline.
//! The column starts at 1, grows by one for every other consumed character
//! and resets to 1 right after a newline, so it always equals the number of
//! characters consumed since the last newline plus one.

/// A cursor for traversing source code character by character.
///
/// # Example
///
/// ```
/// use cmmc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("int x;");
///
/// assert_eq!(cursor.current_char(), 'i');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'n');
/// assert_eq!(cursor.column(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character at the cursor position.
    ///
    /// Returns '\0' (null character) if at the end of the source. Callers
    /// that need to tell a literal NUL apart from the end check
    /// [`is_at_end`](Self::is_at_end).
    #[inline]
    pub fn current_char(&self) -> char {
        self.char_at(0)
    }

    /// Returns the character starting `offset` bytes past the current
    /// position, or '\0' past the end.
    ///
    /// Only meaningful for offsets that land on a character boundary, which
    /// holds whenever the skipped characters are ASCII.
    ///
    /// # Example
    ///
    /// ```
    /// use cmmc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("<<");
    /// assert_eq!(cursor.peek_char(1), '<');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.char_at(offset)
    }

    #[inline]
    fn char_at(&self, offset: usize) -> char {
        let pos = self.position + offset;
        let Some(&b) = self.source.as_bytes().get(pos) else {
            return '\0';
        };

        if b < 128 {
            return b as char;
        }

        self.source
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('\0')
    }

    /// Advances the cursor past the current character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(&b) = self.source.as_bytes().get(self.position) else {
            return;
        };

        // Non-ASCII characters still count as a single column.
        let width = if b < 128 {
            1
        } else {
            self.current_char().len_utf8()
        };
        self.position += width;

        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advances while `predicate` holds for the current character.
    ///
    /// # Example
    ///
    /// ```
    /// use cmmc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("1234;");
    /// cursor.eat_while(|c| c.is_ascii_digit());
    /// assert_eq!(cursor.current_char(), ';');
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Advances to the next newline (which is left unconsumed) or the end.
    pub fn skip_to_line_end(&mut self) {
        self.eat_while(|c| c != '\n');
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Matches and consumes the expected character if present.
    ///
    /// # Example
    ///
    /// ```
    /// use cmmc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("!=");
    /// assert!(!cursor.match_char('='));
    /// cursor.advance();
    /// assert!(cursor.match_char('='));
    /// assert!(cursor.is_at_end());
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source between byte `start` and the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use cmmc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("while (x)");
    /// let start = cursor.position();
    /// cursor.eat_while(|c| c.is_ascii_alphabetic());
    /// assert_eq!(cursor.slice_from(start), "while");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.position).unwrap_or_default()
    }
}

//! Whitespace and comment skipping.
//!
//! Comments start with `//` or `#` and run to the end of the line. The
//! newline itself is left for the whitespace loop so that line tracking
//! happens in one place.

use crate::chars::is_whitespace;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments.
    ///
    /// This is called before lexing each token.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        loop {
            if self.cursor.is_at_end() {
                return;
            }

            match self.cursor.current_char() {
                c if is_whitespace(c) => self.cursor.advance(),
                '/' if self.cursor.peek_char(1) == '/' => self.skip_line_comment(),
                '#' => self.skip_line_comment(),
                _ => return,
            }
        }
    }

    /// Skips a line comment up to, but not including, the newline.
    fn skip_line_comment(&mut self) {
        self.cursor.skip_to_line_end();
    }
}

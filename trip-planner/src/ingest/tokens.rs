//! Whitespace-separated token stream with line tracking.

use std::str::FromStr;

use super::IngestError;

/// One whitespace-delimited word and the 1-based line it starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub line: usize,
}

/// A cursor over whitespace-separated tokens.
///
/// Line breaks carry no meaning to the token stream itself; they are only
/// counted so errors can point at the right place.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str) -> Self {
        Self::at_line(text, 1)
    }

    /// A cursor over `text`, whose first line is line `line` of the input.
    pub fn at_line(text: &'a str, line: usize) -> Self {
        Self { text, pos: 0, line }
    }

    /// The line the next token starts on.
    pub fn line(&mut self) -> usize {
        self.skip_whitespace();
        self.line
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.text[self.pos..];
        let trimmed = rest.trim_start();
        let skipped = &rest[..rest.len() - trimmed.len()];
        self.line += skipped.matches('\n').count();
        self.pos += skipped.len();
    }

    /// Whether only whitespace remains.
    pub fn is_exhausted(&mut self) -> bool {
        self.skip_whitespace();
        self.pos == self.text.len()
    }

    /// Take the next token, if any.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        self.skip_whitespace();
        let rest = &self.text[self.pos..];
        if rest.is_empty() {
            return None;
        }
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        self.pos += len;
        Some(Token {
            text: &rest[..len],
            line: self.line,
        })
    }

    /// Take the next token, failing at end of input.
    pub fn expect(&mut self, field: &'static str) -> Result<Token<'a>, IngestError> {
        let line = self.line();
        self.next_token()
            .ok_or(IngestError::UnexpectedEof { field, line })
    }

    /// Take the next token and parse it as a number.
    pub fn number<T: FromStr>(&mut self, field: &'static str) -> Result<T, IngestError> {
        let token = self.expect(field)?;
        token.text.parse().map_err(|_| IngestError::InvalidNumber {
            field,
            token: token.text.to_string(),
            line: token.line,
        })
    }

    /// Take the rest of the current line and move to the start of the next.
    ///
    /// Returns `None` at end of input.
    pub fn take_line(&mut self) -> Option<(&'a str, usize)> {
        if self.pos == self.text.len() {
            return None;
        }
        let rest = &self.text[self.pos..];
        let line = self.line;
        match rest.find('\n') {
            Some(end) => {
                self.pos += end + 1;
                self.line += 1;
                Some((rest[..end].trim_end_matches('\r'), line))
            }
            None => {
                self.pos = self.text.len();
                Some((rest, line))
            }
        }
    }
}

use crate::model::Token;

/// A cursor for token-by-token run consumption.
///
/// Run builders report how far they advanced through `consumed`, so the
/// caller's loop index stays untouched.
#[derive(Clone)]
pub struct TokenCursor<'a> {
    pub tokens: &'a [Token],
    /// Current index into `tokens`.
    pub i: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, i: 0 }
    }

    /// Number of tokens consumed so far.
    pub fn consumed(&self) -> usize {
        self.i
    }

    /// Peeks at the current token without advancing.
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.i)
    }

    /// Advances by one token, returning the consumed token.
    pub fn bump(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.i)?;
        self.i += 1;
        Some(token)
    }

    /// Advances while `pred` accepts the current token.
    pub fn bump_while(&mut self, mut pred: impl FnMut(&'a Token) -> bool) {
        while let Some(token) = self.peek() {
            if !pred(token) {
                break;
            }
            self.i += 1;
        }
    }

    /// Advances through the first token matching `pred`, inclusive, or to the end.
    pub fn bump_through(&mut self, mut pred: impl FnMut(&'a Token) -> bool) {
        while let Some(token) = self.bump() {
            if pred(token) {
                break;
            }
        }
    }

    /// Tokens consumed since index `start`.
    pub fn consumed_since(&self, start: usize) -> &'a [Token] {
        &self.tokens[start.min(self.i)..self.i]
    }

    /// Rewinds to a previously observed index.
    pub fn reset(&mut self, i: usize) {
        self.i = i.min(self.tokens.len());
    }
}

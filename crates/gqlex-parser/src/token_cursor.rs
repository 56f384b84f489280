use crate::parse_error::ParseError;
use crate::token::Token;

/// Indexed cursor over a lexed token sequence.
///
/// This is the sole mutable state the parser touches: [`get`](TokenCursor::get)
/// consumes and advances, [`peek`](TokenCursor::peek) inspects without
/// advancing, and [`unget`](TokenCursor::unget) rewinds one position to undo
/// a `get()` that did not match an expected pattern.
///
/// Exhaustion is detected by comparing the position against the sequence
/// length; no end-of-stream marker token exists.
pub struct TokenCursor<'src> {
    tokens: Vec<Token<'src>>,
    position: usize,
}

impl<'src> TokenCursor<'src> {
    pub fn new(tokens: Vec<Token<'src>>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Returns the token at the current position and advances past it.
    pub fn get(&mut self) -> Result<Token<'src>, ParseError> {
        let token = self.peek()?;
        self.position += 1;
        Ok(token)
    }

    /// Returns the token at the current position without advancing.
    pub fn peek(&self) -> Result<Token<'src>, ParseError> {
        self.tokens
            .get(self.position)
            .copied()
            .ok_or_else(|| ParseError::new("Out of tokens."))
    }

    /// Moves the position back by one, undoing the most recent
    /// [`get`](TokenCursor::get).
    ///
    /// This is a strict one-slot backtrack, not an undo stack: callers never
    /// invoke it without a prior matching `get()`, and never twice without an
    /// intervening `get()`.
    pub fn unget(&mut self) {
        debug_assert!(self.position > 0, "unget() without a prior get()");
        self.position -= 1;
    }

    /// `true` once every token has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// The current position: the number of tokens consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The total number of tokens in the sequence.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// `true` when the sequence contains no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

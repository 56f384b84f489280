use memchr::memchr;

/// Character-level reader over the source text.
///
/// Supplies characters one at a time with `None` as the end-of-input
/// sentinel, and supports a strict one-slot [`unread`](CharCursor::unread)
/// that pushes the most recently consumed character back.
///
/// The cursor also exposes its byte offset so scanners can take zero-copy
/// slices of the source once a run of characters has been consumed.
pub(crate) struct CharCursor<'src> {
    source: &'src str,

    /// Byte offset of the next unconsumed character.
    offset: usize,

    /// UTF-8 byte length of the most recently consumed character. Zero when
    /// there is nothing to unread.
    last_len: usize,
}

impl<'src> CharCursor<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Self {
            source,
            offset: 0,
            last_len: 0,
        }
    }

    /// Byte offset of the next unconsumed character.
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    /// Consumes and returns the next character, or `None` at end of input.
    pub(crate) fn consume(&mut self) -> Option<char> {
        let ch = self.source[self.offset..].chars().next()?;
        self.last_len = ch.len_utf8();
        self.offset += self.last_len;
        Some(ch)
    }

    /// Pushes the most recently consumed character back.
    ///
    /// One slot only: calling this twice without an intervening
    /// [`consume`](CharCursor::consume) is a caller bug.
    pub(crate) fn unread(&mut self) {
        debug_assert!(self.last_len > 0, "unread() without a prior consume()");
        self.offset -= self.last_len;
        self.last_len = 0;
    }

    /// Returns the source text between two byte offsets.
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'src str {
        &self.source[start..end]
    }

    /// Consumes up to and including the next occurrence of `delimiter`,
    /// returning the text before it. Returns `None` when the delimiter does
    /// not occur before end of input.
    ///
    /// Byte-scan fast path for string literals. `delimiter` must be ASCII so
    /// the match cannot land inside a multi-byte character.
    pub(crate) fn take_until(&mut self, delimiter: u8) -> Option<&'src str> {
        debug_assert!(delimiter.is_ascii());
        let rest = &self.source[self.offset..];
        let index = memchr(delimiter, rest.as_bytes())?;
        let taken = &rest[..index];
        self.offset += index + 1;
        // A bulk advance invalidates the one-slot unread.
        self.last_len = 0;
        Some(taken)
    }
}

//! Character-level lexer producing the token sequence consumed by the
//! parser.
//!
//! Rules are applied greedily at the current character, longest-match per
//! rule. Whitespace and commas are insignificant and never emit a token.

use crate::char_cursor::CharCursor;
use crate::parse_error::ParseError;
use crate::token::Token;

/// Returns `true` for characters that are skipped between tokens.
///
/// Commas are insignificant separators in GraphQL, on par with whitespace.
fn is_skipped(ch: char) -> bool {
    matches!(ch, ',' | '\t' | '\r' | '\n' | ' ')
}

/// Returns `true` for the single-character punctuator set.
fn is_punctuator(ch: char) -> bool {
    matches!(
        ch,
        '!' | '$' | '&' | '(' | ')' | ':' | '=' | '@' | '[' | ']' | '{' | '|' | '}'
    )
}

/// Returns `true` for characters that may continue a name run.
fn is_name_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Tokenizes one source text into an ordered [`Token`] sequence.
///
/// ```rust
/// use gqlex_parser::Lexer;
/// use gqlex_parser::Token;
///
/// let tokens = Lexer::new("{ name }").tokenize()?;
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Punctuator('{'),
///         Token::Name("name"),
///         Token::Punctuator('}'),
///     ],
/// );
/// # Ok::<(), gqlex_parser::ParseError>(())
/// ```
pub struct Lexer<'src> {
    chars: CharCursor<'src>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            chars: CharCursor::new(source),
        }
    }

    /// Consumes the whole input, classifying characters into tokens.
    ///
    /// Fails on the first character that cannot be classified, on an
    /// unterminated string, and on a spread marker with fewer than three
    /// dots. Reaching end of input between tokens is a successful stop.
    pub fn tokenize(mut self) -> Result<Vec<Token<'src>>, ParseError> {
        let mut tokens = Vec::new();
        while let Some(ch) = self.chars.consume() {
            match ch {
                ch if is_skipped(ch) => continue,
                ch if is_punctuator(ch) => tokens.push(Token::Punctuator(ch)),
                '.' => {
                    self.lex_spread()?;
                    tokens.push(Token::Spread);
                }
                '"' => tokens.push(self.lex_string()?),
                '-' => {
                    // The sign is consumed here and the run-scanner only
                    // tests for digits, so it is never accumulated into the
                    // token.
                    tokens.push(Token::IntValue(self.lex_digit_run()));
                }
                '0'..='9' => {
                    self.chars.unread();
                    tokens.push(Token::IntValue(self.lex_digit_run()));
                }
                'A'..='Z' | 'a'..='z' | '_' => {
                    self.chars.unread();
                    tokens.push(Token::Name(self.lex_name_run()));
                }
                other => {
                    return Err(ParseError::new(format!("Invalid character '{other}'")));
                }
            }
        }
        Ok(tokens)
    }

    /// Consumes the two remaining dots of a spread marker; the first dot has
    /// already been consumed by the dispatch.
    ///
    /// There is no valid document with one or two dots in this grammar.
    fn lex_spread(&mut self) -> Result<(), ParseError> {
        for _ in 0..2 {
            if self.chars.consume() != Some('.') {
                return Err(ParseError::new("No '.'."));
            }
        }
        Ok(())
    }

    /// Scans a string literal body after its opening quote.
    ///
    /// Characters are taken verbatim up to the closing quote; there is no
    /// escape processing. End of input before the closing quote is fatal.
    fn lex_string(&mut self) -> Result<Token<'src>, ParseError> {
        match self.chars.take_until(b'"') {
            Some(value) => Ok(Token::StringValue(value)),
            None => Err(ParseError::new("No end of string.")),
        }
    }

    /// Consumes a maximal run of ASCII digits, which may be empty.
    fn lex_digit_run(&mut self) -> &'src str {
        let start = self.chars.offset();
        loop {
            match self.chars.consume() {
                Some(ch) if ch.is_ascii_digit() => continue,
                Some(_) => {
                    self.chars.unread();
                    break;
                }
                None => break,
            }
        }
        self.chars.slice(start, self.chars.offset())
    }

    /// Consumes a maximal run of letters, digits, and underscores.
    fn lex_name_run(&mut self) -> &'src str {
        let start = self.chars.offset();
        loop {
            match self.chars.consume() {
                Some(ch) if is_name_continue(ch) => continue,
                Some(_) => {
                    self.chars.unread();
                    break;
                }
                None => break,
            }
        }
        self.chars.slice(start, self.chars.offset())
    }
}

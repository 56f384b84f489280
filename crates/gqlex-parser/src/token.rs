/// A classified lexical unit produced by the [`Lexer`] and consumed by the
/// parser.
///
/// Literal-carrying variants borrow their text directly from the source
/// string, so tokens are `Copy` and never allocate.
///
/// [`Lexer`]: crate::Lexer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'src> {
    /// A single-character punctuator, one of `! $ & ( ) : = @ [ ] { | }`.
    Punctuator(char),

    /// The three-dot spread marker (`...`). Recognized lexically but not
    /// acted upon by the executable grammar subset.
    Spread,

    /// An identifier: `[A-Za-z_][A-Za-z0-9_]*`.
    Name(&'src str),

    /// A run of decimal digits.
    ///
    /// A leading minus sign is consumed by the lexer's dispatch but never
    /// accumulated by the digit-run scanner, so negative integers surface
    /// without their sign (and an empty run when no digits follow).
    IntValue(&'src str),

    /// A float literal. Part of the token model for completeness; the lexer
    /// never produces it, since a `.` always begins spread scanning.
    FloatValue(&'src str),

    /// The characters between a pair of `"` delimiters, verbatim. No escape
    /// processing is performed.
    StringValue(&'src str),
}

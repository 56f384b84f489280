//! Recursive descent parser for executable GraphQL documents.
//!
//! One method per grammar production, mutually recursive, with a
//! single-token backtrack through [`TokenCursor::unget`]. Productions come
//! in two shapes:
//!
//! - **Optional**: on a leading-token mismatch the cursor is restored via
//!   `unget()` and the method returns `Ok(None)`; the caller treats the
//!   construct as legitimately absent or tries an alternative.
//! - **Required**: a mismatch raises a [`ParseError`] immediately; nothing
//!   is restored and the whole parse fails.
//!
//! Recursion depth is bounded by the nesting depth of selection sets in the
//! input. Callers accepting untrusted documents should impose an external
//! nesting-depth limit before invoking the parser.

use crate::ast::Argument;
use crate::ast::ArgumentValue;
use crate::ast::ArgumentVec;
use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::ExecutableDefinition;
use crate::ast::Field;
use crate::ast::OperationDefinition;
use crate::ast::OperationKind;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::TypeAnnotation;
use crate::ast::VariableDefinition;
use crate::lexer::Lexer;
use crate::parse_error::ParseError;
use crate::token::Token;
use crate::token_cursor::TokenCursor;
use smallvec::SmallVec;

/// Parses one executable document into its AST.
///
/// This is the primary entry point: the full text is lexed, then the
/// document loop runs over the resulting token sequence. Any failure,
/// lexical or syntactic, aborts the parse and yields only the error.
///
/// ```rust
/// use gqlex_parser::parse;
///
/// let doc = parse("{ user { id name } }")?;
/// assert_eq!(doc.definitions.len(), 1);
/// # Ok::<(), gqlex_parser::ParseError>(())
/// ```
pub fn parse(document: &str) -> Result<Document<'_>, ParseError> {
    Parser::new(document)?.parse_document()
}

/// A recursive descent parser over a [`TokenCursor`].
pub struct Parser<'src> {
    pub(crate) cursor: TokenCursor<'src>,
}

impl<'src> Parser<'src> {
    /// Lexes `source` and readies a parser over its token sequence.
    pub fn new(source: &'src str) -> Result<Self, ParseError> {
        let tokens = Lexer::new(source).tokenize()?;
        Ok(Self::from_tokens(tokens))
    }

    /// Builds a parser over an already-lexed token sequence.
    pub fn from_tokens(tokens: Vec<Token<'src>>) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
        }
    }

    // =========================================================================
    // Document
    // =========================================================================

    /// Parses the whole token sequence as a document.
    ///
    /// Loops until the cursor is exhausted; every iteration must produce one
    /// definition or the parse fails. Backtracking never crosses a
    /// definition boundary.
    pub fn parse_document(&mut self) -> Result<Document<'src>, ParseError> {
        let mut definitions = Vec::new();
        while !self.cursor.is_at_end() {
            match self.parse_definition()? {
                Some(definition) => definitions.push(definition),
                None => return Err(ParseError::new("Bad definition.")),
            }
        }
        Ok(Document { definitions })
    }

    /// Parses one top-level definition.
    fn parse_definition(&mut self) -> Result<Option<Definition<'src>>, ParseError> {
        Ok(self
            .parse_executable_definition()?
            .map(Definition::Executable))
    }

    /// Parses one executable definition.
    ///
    /// Operations are the only executable definition in this grammar subset.
    fn parse_executable_definition(
        &mut self,
    ) -> Result<Option<ExecutableDefinition<'src>>, ParseError> {
        Ok(self
            .parse_operation_definition()?
            .map(ExecutableDefinition::Operation))
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Parses an operation definition.
    ///
    /// A name and variable definitions are only attempted after an explicit
    /// operation keyword; a bare selection set is an anonymous query. The
    /// selection set is required at the end: when it is absent the whole
    /// operation is absent, and the document loop turns that into a fatal
    /// error.
    fn parse_operation_definition(
        &mut self,
    ) -> Result<Option<OperationDefinition<'src>>, ParseError> {
        let operation_kind = self.parse_operation_kind()?;
        let (name, variable_definitions) = match operation_kind {
            Some(_) => (
                self.parse_optional_name()?,
                self.parse_variable_definitions()?,
            ),
            None => (None, None),
        };
        let Some(selection_set) = self.parse_selection_set()? else {
            return Ok(None);
        };
        Ok(Some(OperationDefinition {
            operation_kind,
            name,
            variable_definitions,
            selection_set,
        }))
    }

    /// Reads the operation keyword in keyword position, if present.
    ///
    /// A name in keyword position must be one of the three operation types;
    /// any other token is pushed back and the operation is shorthand.
    fn parse_operation_kind(&mut self) -> Result<Option<OperationKind>, ParseError> {
        match self.cursor.get()? {
            Token::Name(keyword) => match OperationKind::from_keyword(keyword) {
                Some(kind) => Ok(Some(kind)),
                None => Err(ParseError::new(format!("Bad operation '{keyword}'."))),
            },
            _ => {
                self.cursor.unget();
                Ok(None)
            }
        }
    }

    /// Reads a bare name, pushing the token back when the next token is not
    /// a name.
    fn parse_optional_name(&mut self) -> Result<Option<&'src str>, ParseError> {
        match self.cursor.get()? {
            Token::Name(name) => Ok(Some(name)),
            _ => {
                self.cursor.unget();
                Ok(None)
            }
        }
    }

    // =========================================================================
    // Variable definitions
    // =========================================================================

    /// Parses a parenthesized variable-definition list, e.g.
    /// `($id: ID!, $name: String)`.
    ///
    /// Loops consuming `$name: Type` triples until the closing `)`.
    fn parse_variable_definitions(
        &mut self,
    ) -> Result<Option<Vec<VariableDefinition<'src>>>, ParseError> {
        match self.cursor.get()? {
            Token::Punctuator('(') => {}
            _ => {
                self.cursor.unget();
                return Ok(None);
            }
        }

        let mut variable_definitions = Vec::new();
        loop {
            match self.cursor.get()? {
                Token::Punctuator(')') => break,
                Token::Punctuator('$') => {
                    let name = match self.cursor.get()? {
                        Token::Name(name) => name,
                        _ => return Err(ParseError::new("No variable name.")),
                    };
                    self.expect_colon()?;
                    let var_type = self.parse_type_annotation()?;
                    variable_definitions.push(VariableDefinition { name, var_type });
                }
                _ => return Err(ParseError::new("No ).")),
            }
        }
        Ok(Some(variable_definitions))
    }

    /// Parses a required type reference: a type name with an optional
    /// trailing `!` non-null marker.
    ///
    /// List types are not parsed by this grammar subset.
    fn parse_type_annotation(&mut self) -> Result<TypeAnnotation<'src>, ParseError> {
        let name = match self.cursor.get()? {
            Token::Name(name) => name,
            _ => return Err(ParseError::new("No type name.")),
        };
        let non_null = match self.cursor.get()? {
            Token::Punctuator('!') => true,
            _ => {
                self.cursor.unget();
                false
            }
        };
        Ok(TypeAnnotation { name, non_null })
    }

    // =========================================================================
    // Selection sets
    // =========================================================================

    /// Parses a brace-delimited selection set.
    ///
    /// The close-brace check runs before each field attempt, so `{}` is
    /// accepted as zero selections. A token inside that starts neither a
    /// field nor the closing brace makes the whole set absent.
    fn parse_selection_set(&mut self) -> Result<Option<SelectionSet<'src>>, ParseError> {
        match self.cursor.get()? {
            Token::Punctuator('{') => {}
            _ => {
                self.cursor.unget();
                return Ok(None);
            }
        }

        let mut selections = Vec::new();
        loop {
            if let Token::Punctuator('}') = self.cursor.peek()? {
                self.cursor.get()?;
                break;
            }
            match self.parse_field()? {
                Some(field) => selections.push(Selection::Field(field)),
                None => return Ok(None),
            }
        }
        Ok(Some(selections))
    }

    // =========================================================================
    // Fields and arguments
    // =========================================================================

    /// Parses a field: a name with optional arguments and an optional
    /// nested selection set.
    ///
    /// Absence of a name means "no field here", not an error.
    fn parse_field(&mut self) -> Result<Option<Field<'src>>, ParseError> {
        let name = match self.cursor.get()? {
            Token::Name(name) => name,
            _ => {
                self.cursor.unget();
                return Ok(None);
            }
        };
        let arguments = self.parse_arguments()?;
        let selection_set = self.parse_selection_set()?;
        Ok(Some(Field {
            name,
            arguments,
            selection_set,
        }))
    }

    /// Parses a parenthesized argument list, e.g. `(id: 10, name: "kalle")`.
    ///
    /// Loops consuming `name: value` pairs until the closing `)`.
    fn parse_arguments(&mut self) -> Result<Option<ArgumentVec<'src>>, ParseError> {
        match self.cursor.get()? {
            Token::Punctuator('(') => {}
            _ => {
                self.cursor.unget();
                return Ok(None);
            }
        }

        let mut arguments = SmallVec::new();
        loop {
            match self.cursor.get()? {
                Token::Punctuator(')') => break,
                Token::Name(name) => {
                    self.expect_colon()?;
                    let value = self.parse_argument_value()?;
                    arguments.push(Argument { name, value });
                }
                _ => return Err(ParseError::new("No ).")),
            }
        }
        Ok(Some(arguments))
    }

    /// Parses one argument value.
    ///
    /// Only string literals, integer literals, and `$variable` references
    /// are accepted. Integer literals are recognized syntactically and then
    /// discarded, yielding `None`.
    fn parse_argument_value(&mut self) -> Result<Option<ArgumentValue<'src>>, ParseError> {
        match self.cursor.get()? {
            Token::StringValue(value) => Ok(Some(ArgumentValue::String(value))),
            Token::IntValue(_) => Ok(None),
            Token::Punctuator('$') => match self.cursor.get()? {
                Token::Name(name) => Ok(Some(ArgumentValue::Variable(name))),
                _ => Err(ParseError::new("No variable name.")),
            },
            _ => Err(ParseError::new("Bad value.")),
        }
    }

    /// Consumes a required `:`.
    fn expect_colon(&mut self) -> Result<(), ParseError> {
        match self.cursor.get()? {
            Token::Punctuator(':') => Ok(()),
            _ => Err(ParseError::new("No :.")),
        }
    }
}

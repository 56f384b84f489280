//! Shared test helpers.

use crate::ParseError;
use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::ExecutableDefinition;
use crate::ast::Field;
use crate::ast::OperationDefinition;
use crate::ast::Selection;
use crate::parse;

/// Parses `source`, panicking with the error message on failure.
pub(super) fn parse_ok(source: &str) -> Document<'_> {
    parse(source).unwrap_or_else(|err| panic!("expected `{source}` to parse, got: {err}"))
}

/// Parses `source`, panicking if it unexpectedly succeeds.
pub(super) fn parse_err(source: &str) -> ParseError {
    match parse(source) {
        Ok(doc) => panic!("expected `{source}` to fail, parsed: {doc:?}"),
        Err(err) => err,
    }
}

/// Extracts the operation from a single-definition document.
pub(super) fn single_operation<'a, 'src>(
    document: &'a Document<'src>,
) -> &'a OperationDefinition<'src> {
    assert_eq!(
        document.definitions.len(),
        1,
        "expected exactly one definition",
    );
    let Definition::Executable(ExecutableDefinition::Operation(operation)) =
        &document.definitions[0];
    operation
}

/// Extracts the field at `index` from a selection set.
pub(super) fn field_at<'a, 'src>(
    selection_set: &'a [Selection<'src>],
    index: usize,
) -> &'a Field<'src> {
    let Selection::Field(field) = selection_set
        .get(index)
        .unwrap_or_else(|| panic!("no selection at index {index}"));
    field
}

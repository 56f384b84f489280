use crate::ast::OperationKind;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;

/// An operation definition: a named or anonymous query, mutation, or
/// subscription block.
///
/// See
/// [Operations](https://spec.graphql.org/September2025/#sec-Language.Operations)
/// in the GraphQL spec.
///
/// A shorthand operation (bare selection set) has no operation kind and is
/// an implicit query. The grammar only permits a name and variable
/// definitions after an explicit operation keyword, so
/// `operation_kind == None` implies `name` and `variable_definitions` are
/// also `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition<'src> {
    pub operation_kind: Option<OperationKind>,
    pub name: Option<&'src str>,
    pub variable_definitions: Option<Vec<VariableDefinition<'src>>>,
    pub selection_set: SelectionSet<'src>,
}

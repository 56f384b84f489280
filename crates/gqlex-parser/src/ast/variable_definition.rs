use crate::ast::TypeAnnotation;

/// A variable definition within an operation's variable list
/// (e.g. `$id: ID!`).
///
/// See
/// [Variables](https://spec.graphql.org/September2025/#sec-Language.Variables)
/// in the GraphQL spec. The name is stored without the leading `$`.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition<'src> {
    pub name: &'src str,
    pub var_type: TypeAnnotation<'src>,
}

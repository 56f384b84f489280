use crate::ast::Definition;
use crate::ast::ExecutableDefinition;
use crate::ast::OperationDefinition;

/// Root AST node: the parsed result of one executable document.
///
/// See [Document](https://spec.graphql.org/September2025/#sec-Document)
/// in the GraphQL spec. The definition sequence preserves source order and
/// is empty only when the input contained no tokens.
#[derive(Clone, Debug, PartialEq)]
pub struct Document<'src> {
    pub definitions: Vec<Definition<'src>>,
}

impl<'src> Document<'src> {
    /// Iterates the operation definitions in this document, in source
    /// order.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition<'src>> {
        self.definitions.iter().map(|definition| {
            let Definition::Executable(ExecutableDefinition::Operation(operation)) = definition;
            operation
        })
    }
}

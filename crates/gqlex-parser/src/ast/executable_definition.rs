use crate::ast::OperationDefinition;

/// An executable definition.
///
/// Operations are the only variant; fragment definitions are not part of
/// this grammar subset.
#[derive(Clone, Debug, PartialEq)]
pub enum ExecutableDefinition<'src> {
    Operation(OperationDefinition<'src>),
}

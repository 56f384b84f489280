use crate::ast::ExecutableDefinition;

/// A top-level definition within a [`Document`](crate::ast::Document).
///
/// Executable documents admit only executable definitions; type-system
/// definitions are not modeled by this grammar subset.
#[derive(Clone, Debug, PartialEq)]
pub enum Definition<'src> {
    Executable(ExecutableDefinition<'src>),
}

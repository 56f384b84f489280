use crate::ast::ArgumentVec;
use crate::ast::SelectionSet;

/// A named selection, optionally parameterized by arguments, optionally
/// expanding into a nested selection set.
///
/// See
/// [Fields](https://spec.graphql.org/September2025/#sec-Language.Fields)
/// in the GraphQL spec. Leaf fields carry `None` for both optional parts.
#[derive(Clone, Debug, PartialEq)]
pub struct Field<'src> {
    pub name: &'src str,
    pub arguments: Option<ArgumentVec<'src>>,
    pub selection_set: Option<SelectionSet<'src>>,
}

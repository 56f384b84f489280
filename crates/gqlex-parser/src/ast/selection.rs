use crate::ast::Field;

/// A brace-delimited, ordered list of selections at one nesting level.
pub type SelectionSet<'src> = Vec<Selection<'src>>;

/// A single selection within a selection set.
///
/// Fields are the only variant; fragment spreads and inline fragments are
/// not part of this grammar subset.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection<'src> {
    Field(Field<'src>),
}

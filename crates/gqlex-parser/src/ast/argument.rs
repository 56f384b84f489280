use smallvec::SmallVec;

/// Inline storage for an argument list. Most fields carry 0-2 arguments,
/// so small lists avoid a heap allocation.
pub type ArgumentVec<'src> = SmallVec<[Argument<'src>; 2]>;

/// A name/value pair attached to a field.
///
/// `value` is `None` when the argument's value was an integer literal: the
/// digits are recognized syntactically and then discarded rather than
/// attached to the node.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument<'src> {
    pub name: &'src str,
    pub value: Option<ArgumentValue<'src>>,
}

/// An argument value: a literal string or a variable reference.
///
/// The variable name is stored without the leading `$`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgumentValue<'src> {
    String(&'src str),
    Variable(&'src str),
}

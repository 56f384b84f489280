/// A type reference on a variable definition (e.g. `String`, `String!`).
///
/// Only named types occur in this grammar subset; list types are not
/// parsed. `non_null` is set when a trailing `!` follows the type name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeAnnotation<'src> {
    pub name: &'src str,
    pub non_null: bool,
}

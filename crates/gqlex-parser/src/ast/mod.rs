//! AST types for parsed executable GraphQL documents.
//!
//! Pure data: every node is constructed once, bottom-up, during a single
//! parse and never mutated afterward. Each parent exclusively owns its
//! children and the tree is acyclic. Nodes borrow `&'src str` slices from
//! the source text, so a [`Document`] may not outlive the string it was
//! parsed from; the caller owns the returned tree thereafter.

mod argument;
mod definition;
mod document;
mod executable_definition;
mod field;
mod operation_definition;
mod operation_kind;
mod selection;
mod type_annotation;
mod variable_definition;

pub use argument::Argument;
pub use argument::ArgumentValue;
pub use argument::ArgumentVec;
pub use definition::Definition;
pub use document::Document;
pub use executable_definition::ExecutableDefinition;
pub use field::Field;
pub use operation_definition::OperationDefinition;
pub use operation_kind::OperationKind;
pub use selection::Selection;
pub use selection::SelectionSet;
pub use type_annotation::TypeAnnotation;
pub use variable_definition::VariableDefinition;

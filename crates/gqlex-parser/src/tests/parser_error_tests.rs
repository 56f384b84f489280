//! Tests pinning the exact failure message for every error path, lexical
//! and syntactic. These messages are a compatibility surface for existing
//! callers.

use crate::tests::utils::parse_err;

/// An extra opening brace cannot start a field name, so the selection set
/// (and with it the whole definition) is absent.
#[test]
fn bad_definition_on_extra_opening_brace() {
    assert_eq!(parse_err("{{name}}").message(), "Bad definition.");
}

/// An unterminated selection set exhausts the cursor at the point where
/// the next field or `}` was required.
#[test]
fn out_of_tokens_on_unterminated_selection_set() {
    assert_eq!(parse_err("{").message(), "Out of tokens.");
}

#[test]
fn out_of_tokens_on_truncated_document() {
    assert_eq!(parse_err("{a{b}").message(), "Out of tokens.");
    assert_eq!(parse_err("query").message(), "Out of tokens.");
    assert_eq!(parse_err("query Q($a: X").message(), "Out of tokens.");
}

/// A name in keyword position must be one of the three operation types.
#[test]
fn bad_operation_names_the_keyword() {
    assert_eq!(parse_err("foo {x}").message(), "Bad operation 'foo'.");
    // Operation keywords are case-sensitive.
    assert_eq!(parse_err("Query {x}").message(), "Bad operation 'Query'.");
}

#[test]
fn unclosed_argument_list() {
    assert_eq!(parse_err("{x(a: 1 }").message(), "No ).");
}

#[test]
fn unclosed_variable_definition_list() {
    assert_eq!(parse_err("query Q($a: X! {x}").message(), "No ).");
}

#[test]
fn missing_colon_in_argument() {
    assert_eq!(parse_err("{x(a 1)}").message(), "No :.");
}

#[test]
fn missing_colon_in_variable_definition() {
    assert_eq!(parse_err("query Q($a X){f}").message(), "No :.");
}

#[test]
fn missing_type_name() {
    assert_eq!(parse_err("query Q($a: !){f}").message(), "No type name.");
    assert_eq!(parse_err("query Q($a: 5){f}").message(), "No type name.");
}

#[test]
fn missing_variable_name_in_definition() {
    assert_eq!(parse_err("query Q($: X){f}").message(), "No variable name.");
}

#[test]
fn missing_variable_name_in_argument_value() {
    assert_eq!(parse_err("{x(a: $5)}").message(), "No variable name.");
}

/// Only string, integer, and variable values are accepted in argument
/// position.
#[test]
fn bad_argument_value() {
    assert_eq!(parse_err("{x(a: b)}").message(), "Bad value.");
    assert_eq!(parse_err("{x(a: [1])}").message(), "Bad value.");
    assert_eq!(parse_err("{x(a: {b: 1})}").message(), "Bad value.");
}

/// Lexical failures surface through `parse()` unchanged.
#[test]
fn lexical_errors_propagate_through_parse() {
    assert_eq!(parse_err("{na%me}").message(), "Invalid character '%'");
    assert_eq!(parse_err(r#"{x(s: "un"#).message(), "No end of string.");
    assert_eq!(parse_err("{x .. y}").message(), "No '.'.");
}

/// The error's `Display` output is exactly its message.
#[test]
fn display_matches_message() {
    let err = parse_err("{{name}}");
    assert_eq!(format!("{err}"), err.message());
}

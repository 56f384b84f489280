use std::fmt::Write;

/// Generates a query whose selection sets nest `depth` levels deep.
///
/// Each level selects an `id` leaf and a `node` field holding the next
/// level; the innermost level selects `id` and `name`.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 24);
    out.push_str("query DeeplyNested {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 1);
        writeln!(out, "{indent}node {{").unwrap();
        writeln!(out, "{indent}  id").unwrap();
    }
    let inner_indent = "  ".repeat(depth + 1);
    writeln!(out, "{inner_indent}name").unwrap();
    for level in (0..depth).rev() {
        let indent = "  ".repeat(level + 1);
        writeln!(out, "{indent}}}").unwrap();
    }
    out.push_str("}\n");
    out
}

/// Generates a document containing `count` named query operations, each
/// declaring one variable and referencing it in an argument.
pub fn many_operations(count: usize) -> String {
    let mut out = String::with_capacity(count * 64);
    for index in 0..count {
        writeln!(out, "query Operation{index}($id: ID!) {{").unwrap();
        writeln!(out, "  item(id: $id) {{").unwrap();
        writeln!(out, "    id").unwrap();
        writeln!(out, "    name").unwrap();
        writeln!(out, "  }}").unwrap();
        writeln!(out, "}}").unwrap();
    }
    out
}

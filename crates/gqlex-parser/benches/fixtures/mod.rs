mod operations;

pub use operations::deeply_nested_query;
pub use operations::many_operations;

pub const SIMPLE_QUERY: &str = "{ user { id name } }";

pub const COMPLEX_QUERY: &str = r#"
query Search($text: String!, $first: Int) {
  search(text: $text, first: $first) {
    id
    name
    owner {
      id
      login
      avatar(size: 64)
    }
    labels(first: 10) {
      name
      color
    }
  }
}

mutation AddComment($id: ID!, $body: String!) {
  addComment(id: $id, body: $body) {
    id
    createdAt
  }
}
"#;

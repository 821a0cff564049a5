//! `$ref` resolution against a loaded [`Document`].
//!
//! A ref of the form `#/a/b/c` is split on `/` after stripping the leading
//! `#/`, and each segment indexes progressively into the document starting at
//! its root. There is no caching and no cycle detection: a ref chain that
//! points back to itself will recurse without bound in any mapper that
//! resolves refs recursively.

use indexmap::IndexMap;

use super::{Components, Document, Schema};
use crate::error::{GeneratorError, GeneratorResult};

/// Cursor for one step of the segment walk.
#[derive(Clone, Copy)]
enum DocNode<'a> {
  Document(&'a Document),
  Components(&'a Components),
  SchemaMap(&'a IndexMap<String, Schema>),
  Schema(&'a Schema),
}

impl<'a> DocNode<'a> {
  fn index(self, segment: &str) -> Option<DocNode<'a>> {
    match self {
      Self::Document(document) => match segment {
        "components" => document.components.as_ref().map(Self::Components),
        _ => None,
      },
      Self::Components(components) => match segment {
        "schemas" => components.schemas.as_ref().map(Self::SchemaMap),
        _ => None,
      },
      Self::SchemaMap(schemas) => schemas.get(segment).map(Self::Schema),
      Self::Schema(schema) => match segment {
        "items" => schema.items.as_deref().map(Self::Schema),
        "properties" => schema.properties.as_ref().map(Self::SchemaMap),
        _ => None,
      },
    }
  }
}

/// Walks `ref_path` from the document root and returns the referenced schema.
///
/// Fails with [`GeneratorError::ReferenceNotFound`] carrying the original ref
/// string the first time a segment is absent, or when the walk ends on a node
/// that is not a schema.
pub fn resolve<'a>(document: &'a Document, ref_path: &str) -> GeneratorResult<&'a Schema> {
  let not_found = || GeneratorError::ReferenceNotFound {
    ref_path: ref_path.to_string(),
  };

  let mut node = DocNode::Document(document);
  for segment in ref_path.trim_start_matches("#/").split('/') {
    node = node.index(segment).ok_or_else(not_found)?;
  }

  match node {
    DocNode::Schema(schema) => Ok(schema),
    _ => Err(not_found()),
  }
}

//! Emits TypeScript declarations for every named schema in the document.

use std::collections::HashSet;

use itertools::Itertools;

use super::schema_mapper::{literal, ts_type};
use crate::{
  error::GeneratorResult,
  spec::{Document, Schema, SchemaType, resolver},
};

pub struct TypeEmitter<'a> {
  document: &'a Document,
}

impl<'a> TypeEmitter<'a> {
  #[must_use]
  pub fn new(document: &'a Document) -> Self {
    Self { document }
  }

  /// Walks `components.schemas` in document order and emits one declaration
  /// per name. Deterministic: repeated runs produce byte-identical output.
  pub fn emit(&self) -> GeneratorResult<String> {
    let mut output = String::from("// Generated TypeScript types from OpenAPI schema\n\n");
    // Guards against emitting the same declaration twice; lives only for this
    // invocation.
    let mut generated = HashSet::new();

    if let Some(schemas) = self.document.schemas() {
      for (name, schema) in schemas {
        output.push_str(&self.declaration(name, schema, &mut generated)?);
        output.push('\n');
      }
    }

    Ok(output)
  }

  fn declaration(&self, name: &str, schema: &Schema, generated: &mut HashSet<String>) -> GeneratorResult<String> {
    if !generated.insert(name.to_string()) {
      return Ok(String::new());
    }

    // A named schema that is itself a ref re-emits the resolved shape under
    // its own name. Missing targets propagate ReferenceNotFound.
    if let Some(ref_path) = schema.ref_path.as_deref() {
      let resolved = resolver::resolve(self.document, ref_path)?;
      generated.remove(name);
      return self.declaration(name, resolved, generated);
    }

    if schema.schema_type == Some(SchemaType::Object) || schema.properties.is_some() {
      return Ok(Self::object_interface(name, schema));
    }

    if let Some(values) = schema.enum_values.as_deref() {
      let union = values.iter().map(literal).join(" | ");
      return Ok(format!("export type {name} = {union};\n"));
    }

    if let Some(alternatives) = schema.one_of.as_deref().or(schema.any_of.as_deref()) {
      let union = alternatives.iter().map(ts_type).join(" | ");
      return Ok(format!("export type {name} = {union};\n"));
    }

    Ok(format!("export type {name} = {};\n", ts_type(schema)))
  }

  fn object_interface(name: &str, schema: &Schema) -> String {
    let mut output = format!("export interface {name} {{\n");

    if let Some(properties) = schema.properties.as_ref() {
      for (property_name, property) in properties {
        let optional = if schema.is_property_required(property_name) { "" } else { "?" };
        output.push_str(&format!("  {property_name}{optional}: {};\n", ts_type(property)));
      }
    }

    output.push_str("}\n");
    output
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::error::GeneratorError;

  fn document(schemas: serde_json::Value) -> Document {
    serde_json::from_value(json!({
      "openapi": "3.0.0",
      "info": { "title": "Test", "version": "1.0.0" },
      "paths": {},
      "components": { "schemas": schemas }
    }))
    .unwrap()
  }

  #[test]
  fn emits_interface_for_object_schema() {
    let doc = document(json!({
      "Pet": {
        "type": "object",
        "properties": {
          "id": { "type": "string" },
          "name": { "type": "string" },
          "tag": { "type": "string" }
        },
        "required": ["id", "name"]
      }
    }));

    let output = TypeEmitter::new(&doc).emit().unwrap();
    assert!(output.contains("export interface Pet {"));
    assert!(output.contains("  id: string;"));
    assert!(output.contains("  name: string;"));
    assert!(output.contains("  tag?: string;"));
  }

  #[test]
  fn enum_declaration_has_one_literal_per_value() {
    let doc = document(json!({
      "Status": { "type": "string", "enum": ["available", "pending", "sold"] }
    }));

    let output = TypeEmitter::new(&doc).emit().unwrap();
    assert!(output.contains("export type Status = 'available' | 'pending' | 'sold';"));
    let rendered = output.lines().find(|line| line.starts_with("export type Status")).unwrap();
    assert_eq!(rendered.matches('|').count(), 2);
  }

  #[test]
  fn one_of_becomes_union() {
    let doc = document(json!({
      "PetOrOwner": {
        "oneOf": [
          { "$ref": "#/components/schemas/Pet" },
          { "$ref": "#/components/schemas/Owner" }
        ]
      },
      "Pet": { "type": "object", "properties": {} },
      "Owner": { "type": "object", "properties": {} }
    }));

    let output = TypeEmitter::new(&doc).emit().unwrap();
    assert!(output.contains("export type PetOrOwner = Pet | Owner;"));
  }

  #[test]
  fn named_ref_reemits_resolved_shape() {
    let doc = document(json!({
      "PetAlias": { "$ref": "#/components/schemas/Pet" },
      "Pet": {
        "type": "object",
        "properties": { "name": { "type": "string" } },
        "required": ["name"]
      }
    }));

    let output = TypeEmitter::new(&doc).emit().unwrap();
    assert!(output.contains("export interface PetAlias {"));
    assert!(output.contains("export interface Pet {"));
  }

  #[test]
  fn dangling_named_ref_fails() {
    let doc = document(json!({ "Broken": { "$ref": "#/components/schemas/Nope" } }));
    let error = TypeEmitter::new(&doc).emit().unwrap_err();
    assert!(matches!(error, GeneratorError::ReferenceNotFound { .. }));
  }

  #[test]
  fn plain_type_falls_back_to_alias() {
    let doc = document(json!({ "Id": { "type": "string" } }));
    let output = TypeEmitter::new(&doc).emit().unwrap();
    assert!(output.contains("export type Id = string;"));
  }

  #[test]
  fn output_is_idempotent() {
    let doc = document(json!({
      "Pet": { "type": "object", "properties": { "name": { "type": "string" } } },
      "Status": { "type": "string", "enum": ["a", "b"] }
    }));

    let emitter = TypeEmitter::new(&doc);
    assert_eq!(emitter.emit().unwrap(), emitter.emit().unwrap());
  }
}

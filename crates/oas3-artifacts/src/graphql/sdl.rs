//! Renders the structured GraphQL schema as SDL text.
//!
//! This is a pure function of [`GraphQLSchema`], so a schema deserialized
//! from the emitter's JSON output renders to exactly the same text as one
//! built directly from the document.

use itertools::Itertools;

use super::ast::{EnumDef, FieldDef, GraphQLSchema, InputDef, TypeDef};

pub fn render(schema: &GraphQLSchema) -> String {
  let mut output = String::from("# Generated GraphQL Schema from OpenAPI specification\n\n");

  output.push_str("# Scalar types\n");
  output.push_str("scalar JSON\n");
  output.push_str("scalar JSONInput\n");
  output.push_str("scalar DateTime\n\n");

  if !schema.enums.is_empty() {
    output.push_str("# Enums\n");
    for enum_def in &schema.enums {
      output.push_str(&render_enum(enum_def));
      output.push('\n');
    }
  }

  if !schema.inputs.is_empty() {
    output.push_str("# Input Types\n");
    for input in &schema.inputs {
      output.push_str(&render_input(input));
      output.push('\n');
    }
  }

  if !schema.types.is_empty() {
    output.push_str("# Object Types\n");
    for type_def in &schema.types {
      output.push_str(&render_type(type_def));
      output.push('\n');
    }
  }

  if !schema.queries.is_empty() {
    output.push_str("# Query Type\n");
    output.push_str("type Query {\n");
    for query in &schema.queries {
      output.push_str(&render_field(query));
    }
    output.push_str("}\n\n");
  }

  if !schema.mutations.is_empty() {
    output.push_str("# Mutation Type\n");
    output.push_str("type Mutation {\n");
    for mutation in &schema.mutations {
      output.push_str(&render_field(mutation));
    }
    output.push_str("}\n\n");
  }

  output
}

fn render_enum(enum_def: &EnumDef) -> String {
  let mut output = String::new();
  if let Some(description) = &enum_def.description {
    output.push_str(&format!("\"{description}\"\n"));
  }
  output.push_str(&format!("enum {} {{\n", enum_def.name));
  for value in &enum_def.values {
    if let Some(description) = &value.description {
      output.push_str(&format!("  \"{description}\"\n"));
    }
    output.push_str(&format!("  {}\n", value.name));
  }
  output.push_str("}\n");
  output
}

fn render_input(input: &InputDef) -> String {
  let mut output = String::new();
  if let Some(description) = &input.description {
    output.push_str(&format!("\"{description}\"\n"));
  }
  output.push_str(&format!("input {} {{\n", input.name));
  for field in &input.fields {
    if let Some(description) = &field.description {
      output.push_str(&format!("  \"{description}\"\n"));
    }
    let bang = if field.nullable { "" } else { "!" };
    output.push_str(&format!("  {}: {}{bang}\n", field.name, field.field_type));
  }
  output.push_str("}\n");
  output
}

fn render_type(type_def: &TypeDef) -> String {
  let mut output = String::new();
  if let Some(description) = &type_def.description {
    output.push_str(&format!("\"{description}\"\n"));
  }
  output.push_str(&format!("type {} {{\n", type_def.name));
  for field in &type_def.fields {
    if let Some(description) = &field.description {
      output.push_str(&format!("  \"{description}\"\n"));
    }
    let bang = if field.nullable { "" } else { "!" };
    output.push_str(&format!("  {}: {}{bang}\n", field.name, field.field_type));
  }
  output.push_str("}\n");
  output
}

fn render_field(field: &FieldDef) -> String {
  let mut output = String::new();
  if let Some(description) = &field.description {
    output.push_str(&format!("  \"{description}\"\n"));
  }

  let args = if field.args.is_empty() {
    String::new()
  } else {
    let rendered = field
      .args
      .iter()
      .map(|arg| {
        let bang = if arg.nullable { "" } else { "!" };
        format!("{}: {}{bang}", arg.name, arg.arg_type)
      })
      .join(", ");
    format!("({rendered})")
  };

  output.push_str(&format!("  {}{args}: {}\n", field.name, field.return_type));
  output
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::{graphql::GraphQLEmitter, spec::Document};

  fn petstore() -> Document {
    serde_json::from_value(json!({
      "openapi": "3.0.0",
      "info": { "title": "Pet Store", "version": "1.0.0" },
      "paths": {
        "/pets/{id}": {
          "get": {
            "parameters": [{ "name": "id", "in": "path", "required": true, "schema": { "type": "string" } }],
            "responses": {
              "200": {
                "description": "A pet",
                "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } } }
              }
            }
          }
        },
        "/pets": {
          "post": {
            "requestBody": {
              "required": true,
              "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } } }
            },
            "responses": {
              "201": {
                "description": "Created",
                "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } } }
              }
            }
          }
        }
      },
      "components": {
        "schemas": {
          "Pet": {
            "type": "object",
            "properties": {
              "id": { "type": "string" },
              "name": { "type": "string" },
              "tag": { "type": "string" }
            },
            "required": ["id", "name"]
          },
          "Status": { "type": "string", "enum": ["available", "sold"] }
        }
      }
    }))
    .unwrap()
  }

  #[test]
  fn renders_scalars_and_sections() {
    let document = petstore();
    let sdl = render(&GraphQLEmitter::new(&document).emit());

    assert!(sdl.contains("scalar JSON\n"));
    assert!(sdl.contains("enum Status {"));
    assert!(sdl.contains("input PetInput {"));
    assert!(sdl.contains("type Pet {"));
    assert!(sdl.contains("type Query {"));
    assert!(sdl.contains("type Mutation {"));
  }

  #[test]
  fn fields_carry_nullability_markers() {
    let document = petstore();
    let sdl = render(&GraphQLEmitter::new(&document).emit());

    assert!(sdl.contains("  id: String!\n"));
    assert!(sdl.contains("  tag: String\n"));
    assert!(sdl.contains("  getPets(id: String!): Pet\n"));
    assert!(sdl.contains("  createPets(input: PetInput!): Pet\n"));
  }

  #[test]
  fn json_round_trip_reproduces_sdl() {
    let document = petstore();
    let schema = GraphQLEmitter::new(&document).emit();

    let direct = render(&schema);
    let json_text = serde_json::to_string_pretty(&schema).unwrap();
    let reparsed: crate::graphql::ast::GraphQLSchema = serde_json::from_str(&json_text).unwrap();
    assert_eq!(render(&reparsed), direct);
  }
}

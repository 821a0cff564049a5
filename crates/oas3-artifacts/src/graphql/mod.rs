//! GraphQL schema derivation from an OpenAPI document.
//!
//! GET operations become Query fields, every other method becomes a Mutation
//! field. Each object schema yields both an output type and a same-shaped
//! input type because GraphQL keeps the two namespaces apart; the input may
//! end up unused when no mutation takes it, which is accepted.

pub mod ast;
pub mod sdl;

use self::ast::{Argument, EnumDef, EnumValue, Field, FieldDef, GraphQLSchema, InputDef, Resolver, TypeDef};
use crate::{
  naming,
  spec::{Document, HttpMethod, Operation, Schema, SchemaKind, SchemaType},
};

pub struct GraphQLEmitter<'a> {
  document: &'a Document,
}

impl<'a> GraphQLEmitter<'a> {
  #[must_use]
  pub fn new(document: &'a Document) -> Self {
    Self { document }
  }

  /// Builds the structured schema. Rendering to SDL is a separate step, see
  /// [`sdl::render`].
  #[must_use]
  pub fn emit(&self) -> GraphQLSchema {
    let mut schema = GraphQLSchema::default();

    if let Some(schemas) = self.document.schemas() {
      for (name, node) in schemas {
        if node.enum_values.is_some() {
          schema.enums.push(Self::enum_def(name, node));
        } else if node.schema_type == Some(SchemaType::Object) || node.properties.is_some() {
          schema.types.push(Self::type_def(name, node));
          schema.inputs.push(Self::input_def(&format!("{name}Input"), node));
        }
      }
    }

    for (path, method, operation) in self.document.operations() {
      match method {
        HttpMethod::Get => schema.queries.push(Self::field_def(method, path, operation)),
        _ => schema.mutations.push(Self::mutation_def(method, path, operation)),
      }
    }

    schema
  }

  fn enum_def(name: &str, schema: &Schema) -> EnumDef {
    let values = schema
      .enum_values
      .as_deref()
      .unwrap_or_default()
      .iter()
      .map(|value| {
        let text = match value {
          serde_json::Value::String(text) => text.clone(),
          other => other.to_string(),
        };
        EnumValue {
          name: naming::graphql_enum_variant(&text),
          value: text.clone(),
          description: Some(format!("Enum value: {text}")),
        }
      })
      .collect();

    EnumDef {
      name: naming::graphql_type_name(name),
      description: schema.description.clone().or_else(|| Some(format!("Enum for {name}"))),
      values,
    }
  }

  fn type_def(name: &str, schema: &Schema) -> TypeDef {
    TypeDef {
      name: naming::graphql_type_name(name),
      description: schema
        .description
        .clone()
        .or_else(|| Some(format!("Type representing {name}"))),
      fields: Self::fields(schema, output_type),
    }
  }

  fn input_def(name: &str, schema: &Schema) -> InputDef {
    InputDef {
      name: naming::graphql_type_name(name),
      description: schema.description.clone().or_else(|| Some(format!("Input type for {name}"))),
      fields: Self::fields(schema, input_type),
    }
  }

  fn fields(schema: &Schema, mapper: fn(&Schema) -> String) -> Vec<Field> {
    schema
      .properties
      .as_ref()
      .map(|properties| {
        properties
          .iter()
          .map(|(property_name, property)| Field {
            name: naming::graphql_field_name(property_name),
            field_type: mapper(property),
            description: property.description.clone(),
            nullable: !schema.is_property_required(property_name),
            list: property.schema_type == Some(SchemaType::Array),
          })
          .collect()
      })
      .unwrap_or_default()
  }

  fn field_def(method: HttpMethod, path: &str, operation: &Operation) -> FieldDef {
    let name = Self::operation_name(method, path, operation);

    FieldDef {
      name: name.clone(),
      description: operation.doc().map(str::to_string),
      return_type: Self::return_type(operation),
      args: Self::arguments(operation),
      resolver: Resolver {
        method: method.verb().to_string(),
        path: path.to_string(),
        operation: operation.operation_id.clone().unwrap_or(name),
      },
    }
  }

  fn mutation_def(method: HttpMethod, path: &str, operation: &Operation) -> FieldDef {
    let mut field = Self::field_def(method, path, operation);

    if let Some(body) = operation.request_body.as_ref() {
      if let Some(schema) = operation.json_request_schema() {
        field.args.push(Argument {
          name: "input".to_string(),
          arg_type: input_type(schema),
          description: Some("Input data for the mutation".to_string()),
          nullable: !body.required.unwrap_or(false),
        });
      }
    }

    field
  }

  fn arguments(operation: &Operation) -> Vec<Argument> {
    operation
      .parameters
      .as_deref()
      .unwrap_or_default()
      .iter()
      .map(|parameter| Argument {
        name: naming::graphql_field_name(&parameter.name),
        arg_type: output_type(&parameter.schema),
        description: parameter.description.clone(),
        nullable: !parameter.is_required(),
      })
      .collect()
  }

  /// camelCased `operationId` when present; otherwise a verb prefix joined to
  /// the last non-parameter path segment.
  fn operation_name(method: HttpMethod, path: &str, operation: &Operation) -> String {
    if let Some(operation_id) = operation.operation_id.as_deref() {
      return naming::graphql_field_name(operation_id);
    }

    let last_segment = path
      .split('/')
      .filter(|segment| !segment.is_empty() && !segment.starts_with('{'))
      .next_back()
      .unwrap_or("resource");

    let prefix = match method {
      HttpMethod::Get => {
        if path.contains('{') {
          "get"
        } else {
          "list"
        }
      }
      HttpMethod::Post => "create",
      HttpMethod::Put | HttpMethod::Patch => "update",
      HttpMethod::Delete => "delete",
    };

    format!("{prefix}{}", naming::pascal_segment(last_segment))
  }

  /// First of 200/201/204: no content at all maps to `Boolean`, content
  /// without a JSON schema to `String`, JSON content through the output-type
  /// mapper.
  fn return_type(operation: &Operation) -> String {
    let response = ["200", "201", "204"]
      .iter()
      .find_map(|status| operation.responses.get(*status));

    let Some(response) = response else {
      return "Boolean".to_string();
    };
    let Some(content) = response.content.as_ref() else {
      return "Boolean".to_string();
    };

    content
      .get(crate::spec::JSON_MEDIA_TYPE)
      .map_or_else(|| "String".to_string(), |media| output_type(&media.schema))
  }
}

/// Output-position mapping of a schema node to a GraphQL type expression.
pub fn output_type(schema: &Schema) -> String {
  match schema.kind() {
    SchemaKind::Reference(_) => naming::graphql_type_name(schema.ref_name().unwrap_or_default()),
    SchemaKind::Enumeration(_) | SchemaKind::Primitive(SchemaType::String) => "String".to_string(),
    SchemaKind::Primitive(SchemaType::Integer) => "Int".to_string(),
    SchemaKind::Primitive(SchemaType::Number) => "Float".to_string(),
    SchemaKind::Primitive(SchemaType::Boolean) => "Boolean".to_string(),
    SchemaKind::Primitive(SchemaType::Array) => {
      let element = schema.items.as_deref().map_or_else(|| "String".to_string(), output_type);
      format!("[{element}]")
    }
    // No inline anonymous object types are synthesized; a generic scalar
    // stands in.
    SchemaKind::Primitive(SchemaType::Object) => "JSON".to_string(),
    SchemaKind::Union(_) | SchemaKind::Unknown => "String".to_string(),
  }
}

/// Input-position mapping: referenced names gain an `Input` suffix, the JSON
/// scalar swaps for `JSONInput`.
pub fn input_type(schema: &Schema) -> String {
  if let SchemaKind::Reference(_) = schema.kind() {
    let name = schema.ref_name().unwrap_or_default();
    return naming::graphql_type_name(&format!("{name}Input"));
  }

  let base = output_type(schema);

  if let Some(inner) = base.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
    let element = if inner == "JSON" { "JSONInput".to_string() } else { format!("{inner}Input") };
    return format!("[{element}]");
  }

  if base == "JSON" {
    return "JSONInput".to_string();
  }

  base
}

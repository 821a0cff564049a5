//! Schema-to-TypeScript type expressions.
//!
//! Two variants of the same mapping exist on purpose: the type emitter inlines
//! anonymous objects and expands string enums into literal unions, while the
//! client emitter keeps signatures flat and falls back to `any`. Both follow
//! the [`SchemaKind`] priority order (`$ref`, then `enum`, then the primitive
//! tag, then union keywords).

use itertools::Itertools;
use serde_json::Value;

use crate::spec::{Schema, SchemaKind, SchemaType};

/// Renders an enum value as a TypeScript literal. Textual values are quoted,
/// everything else keeps its JSON rendering.
pub fn literal(value: &Value) -> String {
  match value {
    Value::String(text) => format!("'{text}'"),
    other => other.to_string(),
  }
}

/// Full mapping used by the type emitter, including inline object literals.
pub fn ts_type(schema: &Schema) -> String {
  match schema.kind() {
    SchemaKind::Reference(_) => schema.ref_name().unwrap_or("unknown").to_string(),
    SchemaKind::Enumeration(values) => values.iter().map(literal).join(" | "),
    SchemaKind::Primitive(SchemaType::String) => "string".to_string(),
    SchemaKind::Primitive(SchemaType::Number | SchemaType::Integer) => "number".to_string(),
    SchemaKind::Primitive(SchemaType::Boolean) => "boolean".to_string(),
    SchemaKind::Primitive(SchemaType::Array) => match schema.items.as_deref() {
      Some(items) => format!("{}[]", ts_type(items)),
      None => "unknown[]".to_string(),
    },
    SchemaKind::Primitive(SchemaType::Object) => match schema.properties.as_ref() {
      Some(properties) => {
        let mut inline = String::from("{\n");
        for (name, property) in properties {
          let optional = if schema.is_property_required(name) { "" } else { "?" };
          inline.push_str(&format!("    {name}{optional}: {};\n", ts_type(property)));
        }
        inline.push_str("  }");
        inline
      }
      None => "Record<string, unknown>".to_string(),
    },
    SchemaKind::Union(alternatives) => alternatives.iter().map(ts_type).join(" | "),
    SchemaKind::Unknown => "unknown".to_string(),
  }
}

/// Narrow mapping used for client signatures: no inline object expansion, no
/// enum literal unions, `any` fallback.
pub fn ts_param_type(schema: &Schema) -> String {
  match schema.kind() {
    SchemaKind::Reference(_) => schema.ref_name().unwrap_or("unknown").to_string(),
    SchemaKind::Primitive(SchemaType::String) => "string".to_string(),
    SchemaKind::Primitive(SchemaType::Number | SchemaType::Integer) => "number".to_string(),
    SchemaKind::Primitive(SchemaType::Boolean) => "boolean".to_string(),
    SchemaKind::Primitive(SchemaType::Array) => match schema.items.as_deref() {
      Some(items) => format!("{}[]", ts_param_type(items)),
      None => "any[]".to_string(),
    },
    _ => "any".to_string(),
  }
}

//! Structured GraphQL schema, serializable both ways so the `json` output
//! format can be fed back into the SDL renderer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphQLSchema {
  pub types: Vec<TypeDef>,
  pub queries: Vec<FieldDef>,
  pub mutations: Vec<FieldDef>,
  pub inputs: Vec<InputDef>,
  pub enums: Vec<EnumDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDef {
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputDef {
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumDef {
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumValue {
  pub name: String,
  pub value: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
  pub name: String,
  #[serde(rename = "type")]
  pub field_type: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub nullable: bool,
  pub list: bool,
}

/// A Query or Mutation field, with the REST binding it resolves to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDef {
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(rename = "returnType")]
  pub return_type: String,
  pub args: Vec<Argument>,
  pub resolver: Resolver,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Argument {
  pub name: String,
  #[serde(rename = "type")]
  pub arg_type: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub nullable: bool,
}

/// Where a generated field would dispatch at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resolver {
  pub method: String,
  pub path: String,
  pub operation: String,
}

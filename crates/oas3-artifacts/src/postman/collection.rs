//! Postman Collection Schema v2.1.0 shapes, serialized as-is.

use serde::{Deserialize, Serialize};

pub const COLLECTION_SCHEMA_URL: &str = "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
  pub info: CollectionInfo,
  pub item: Vec<Item>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub variable: Option<Vec<Variable>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionInfo {
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub version: Option<String>,
  pub schema: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
  pub name: String,
  pub request: Request,
  pub response: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
  pub method: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub header: Option<Vec<Header>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub body: Option<RequestBody>,
  pub url: Url,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Url {
  pub raw: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub host: Option<Vec<String>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub path: Option<Vec<String>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub query: Option<Vec<Query>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub variable: Option<Vec<UrlVariable>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
  pub key: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub value: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlVariable {
  pub key: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub value: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Header {
  pub key: String,
  pub value: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestBody {
  pub mode: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub raw: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub options: Option<BodyOptions>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyOptions {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub raw: Option<RawOptions>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawOptions {
  pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variable {
  pub key: String,
  pub value: String,
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub variable_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

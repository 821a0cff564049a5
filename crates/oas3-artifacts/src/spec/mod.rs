//! Passive data model for a parsed OpenAPI document.
//!
//! Everything here is immutable after load: the loader builds one [`Document`]
//! per invocation and every emitter reads from the same instance. Maps are
//! [`IndexMap`] so declarations are emitted in document order.

pub mod loader;
pub mod resolver;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumIter};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
  pub openapi: String,
  pub info: Info,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub servers: Option<Vec<Server>>,
  pub paths: IndexMap<String, PathItem>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub components: Option<Components>,
}

impl Document {
  /// First server URL declared by the document, if any.
  #[must_use]
  pub fn base_url(&self) -> Option<&str> {
    self.servers.as_deref().and_then(|servers| servers.first()).map(|server| server.url.as_str())
  }

  /// Named schema registry, empty when the document declares no components.
  #[must_use]
  pub fn schemas(&self) -> Option<&IndexMap<String, Schema>> {
    self.components.as_ref().and_then(|components| components.schemas.as_ref())
  }

  /// Iterates every `(path, method, operation)` triple in document order.
  pub fn operations(&self) -> impl Iterator<Item = (&str, HttpMethod, &Operation)> {
    self.paths.iter().flat_map(|(path, item)| {
      item
        .operations()
        .map(move |(method, operation)| (path.as_str(), method, operation))
    })
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Info {
  pub title: String,
  pub version: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
  pub url: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Components {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub schemas: Option<IndexMap<String, Schema>>,
}

/// HTTP methods an operation can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum HttpMethod {
  Get,
  Put,
  Post,
  Delete,
  Patch,
}

impl HttpMethod {
  #[must_use]
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Get => "get",
      Self::Put => "put",
      Self::Post => "post",
      Self::Delete => "delete",
      Self::Patch => "patch",
    }
  }

  /// Uppercase wire form (`GET`, `POST`, ...).
  #[must_use]
  pub fn verb(self) -> &'static str {
    match self {
      Self::Get => "GET",
      Self::Put => "PUT",
      Self::Post => "POST",
      Self::Delete => "DELETE",
      Self::Patch => "PATCH",
    }
  }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathItem {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub get: Option<Operation>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub put: Option<Operation>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub post: Option<Operation>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub delete: Option<Operation>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub patch: Option<Operation>,
}

impl PathItem {
  #[must_use]
  pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
    match method {
      HttpMethod::Get => self.get.as_ref(),
      HttpMethod::Put => self.put.as_ref(),
      HttpMethod::Post => self.post.as_ref(),
      HttpMethod::Delete => self.delete.as_ref(),
      HttpMethod::Patch => self.patch.as_ref(),
    }
  }

  /// Present operations in a fixed method order.
  pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
    use strum::IntoEnumIterator;
    HttpMethod::iter().filter_map(|method| self.operation(method).map(|operation| (method, operation)))
  }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Operation {
  #[serde(rename = "operationId", skip_serializing_if = "Option::is_none")]
  pub operation_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub summary: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parameters: Option<Vec<Parameter>>,
  #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
  pub request_body: Option<RequestBody>,
  #[serde(default)]
  pub responses: IndexMap<String, Response>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub tags: Option<Vec<String>>,
}

impl Operation {
  /// Summary when present, description otherwise.
  #[must_use]
  pub fn doc(&self) -> Option<&str> {
    self.summary.as_deref().or(self.description.as_deref())
  }

  /// Declared parameters filtered by location.
  pub fn parameters_in(&self, location: ParameterLocation) -> impl Iterator<Item = &Parameter> {
    self
      .parameters
      .as_deref()
      .unwrap_or_default()
      .iter()
      .filter(move |parameter| parameter.location == location)
  }

  /// Schema of the `application/json` request body, when declared.
  #[must_use]
  pub fn json_request_schema(&self) -> Option<&Schema> {
    self
      .request_body
      .as_ref()
      .and_then(|body| body.content.get(JSON_MEDIA_TYPE))
      .map(|media| &media.schema)
  }

  /// Schema of the first successful JSON response among the given status codes.
  #[must_use]
  pub fn success_response_schema(&self, statuses: &[&str]) -> Option<&Schema> {
    let response = statuses.iter().find_map(|status| self.responses.get(*status))?;
    response
      .content
      .as_ref()
      .and_then(|content| content.get(JSON_MEDIA_TYPE))
      .map(|media| &media.schema)
  }
}

pub const JSON_MEDIA_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
  Query,
  Path,
  Header,
  Cookie,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
  pub name: String,
  #[serde(rename = "in")]
  pub location: ParameterLocation,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub required: Option<bool>,
  pub schema: Schema,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

impl Parameter {
  #[must_use]
  pub fn is_required(&self) -> bool {
    self.required.unwrap_or(false)
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestBody {
  pub content: IndexMap<String, MediaType>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub required: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
  pub description: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub content: Option<IndexMap<String, MediaType>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaType {
  pub schema: Schema,
}

/// Primitive type tag carried by a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
  String,
  Number,
  Integer,
  Boolean,
  Array,
  Object,
}

/// Recursive schema node. Which fields are meaningful depends on the
/// interpretation picked by [`Schema::kind`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub schema_type: Option<SchemaType>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub format: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub properties: Option<IndexMap<String, Schema>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub items: Option<Box<Schema>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub required: Option<Vec<String>>,
  #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
  pub enum_values: Option<Vec<Value>>,
  #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
  pub ref_path: Option<String>,
  #[serde(rename = "allOf", skip_serializing_if = "Option::is_none")]
  pub all_of: Option<Vec<Schema>>,
  #[serde(rename = "oneOf", skip_serializing_if = "Option::is_none")]
  pub one_of: Option<Vec<Schema>>,
  #[serde(rename = "anyOf", skip_serializing_if = "Option::is_none")]
  pub any_of: Option<Vec<Schema>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub example: Option<Value>,
}

/// Borrowed interpretation of a schema node.
///
/// The variants are mutually exclusive by construction: `$ref` wins over
/// `enum`, which wins over the primitive type tag, which wins over the
/// `oneOf`/`anyOf` union keywords. Callers dispatch on this instead of
/// re-checking raw fields in ad-hoc orders.
#[derive(Debug, Clone, Copy)]
pub enum SchemaKind<'a> {
  Reference(&'a str),
  Enumeration(&'a [Value]),
  Primitive(SchemaType),
  Union(&'a [Schema]),
  Unknown,
}

impl Schema {
  #[must_use]
  pub fn kind(&self) -> SchemaKind<'_> {
    if let Some(ref_path) = self.ref_path.as_deref() {
      return SchemaKind::Reference(ref_path);
    }
    if let Some(values) = self.enum_values.as_deref() {
      return SchemaKind::Enumeration(values);
    }
    if let Some(schema_type) = self.schema_type {
      return SchemaKind::Primitive(schema_type);
    }
    if let Some(alternatives) = self.one_of.as_deref().or(self.any_of.as_deref()) {
      return SchemaKind::Union(alternatives);
    }
    SchemaKind::Unknown
  }

  /// Last path segment of the `$ref`, used as the bare referenced type name.
  #[must_use]
  pub fn ref_name(&self) -> Option<&str> {
    self.ref_path.as_deref().and_then(|path| path.rsplit('/').next())
  }

  #[must_use]
  pub fn is_property_required(&self, name: &str) -> bool {
    self
      .required
      .as_deref()
      .is_some_and(|required| required.iter().any(|entry| entry == name))
  }
}

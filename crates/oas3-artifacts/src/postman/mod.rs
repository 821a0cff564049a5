//! Postman collection emission.
//!
//! One collection per document, one item per operation. Path placeholders are
//! rewritten to Postman `:name` variables and request bodies are synthesized
//! through the shared example generator.

pub mod collection;
pub mod curl;

use itertools::Itertools;
use rand::Rng;

use self::collection::{
  BodyOptions, Collection, CollectionInfo, Header, Item, Query, RawOptions, Request, RequestBody, Url, UrlVariable,
  Variable, COLLECTION_SCHEMA_URL,
};
use crate::{
  generator::examples::{ExampleGenerator, POSTMAN_OPTIONAL_THRESHOLD},
  spec::{Document, HttpMethod, Operation, Parameter, ParameterLocation},
};

pub const DEFAULT_BASE_URL: &str = "https://api.example.com";

pub struct PostmanEmitter<'a, R: Rng = rand::rngs::StdRng> {
  document: &'a Document,
  examples: ExampleGenerator<'a, R>,
}

impl<'a> PostmanEmitter<'a> {
  #[must_use]
  pub fn new(document: &'a Document) -> Self {
    Self {
      document,
      examples: ExampleGenerator::new(document, POSTMAN_OPTIONAL_THRESHOLD),
    }
  }
}

impl<'a, R: Rng> PostmanEmitter<'a, R> {
  /// Builds the emitter over a caller-provided randomness source so example
  /// bodies can be pinned in tests.
  pub fn with_rng(document: &'a Document, rng: R) -> Self {
    Self {
      document,
      examples: ExampleGenerator::with_rng(document, POSTMAN_OPTIONAL_THRESHOLD, rng),
    }
  }

  pub fn emit(&mut self) -> Collection {
    let base_url = self.document.base_url().unwrap_or(DEFAULT_BASE_URL).to_string();

    let document = self.document;
    let mut items = Vec::new();
    for (path, method, operation) in document.operations() {
      items.push(self.item(method, path, operation));
    }

    Collection {
      info: CollectionInfo {
        name: self.document.info.title.clone(),
        description: self.document.info.description.clone(),
        version: Some(self.document.info.version.clone()),
        schema: COLLECTION_SCHEMA_URL.to_string(),
      },
      item: items,
      variable: Some(vec![Variable {
        key: "baseUrl".to_string(),
        value: base_url,
        variable_type: Some("string".to_string()),
        description: Some("Base URL for the API".to_string()),
      }]),
    }
  }

  fn item(&mut self, method: HttpMethod, path: &str, operation: &Operation) -> Item {
    let name = operation
      .operation_id
      .clone()
      .unwrap_or_else(|| format!("{} {path}", method.verb()));

    Item {
      name,
      request: self.request(method, path, operation),
      response: Vec::new(),
    }
  }

  fn request(&mut self, method: HttpMethod, path: &str, operation: &Operation) -> Request {
    let path_params: Vec<&Parameter> = operation.parameters_in(ParameterLocation::Path).collect();
    let query_params: Vec<&Parameter> = operation.parameters_in(ParameterLocation::Query).collect();
    let header_params: Vec<&Parameter> = operation.parameters_in(ParameterLocation::Header).collect();

    Request {
      method: method.verb().to_string(),
      header: Some(self.headers(&header_params, operation)),
      body: self.body(operation),
      url: self.url(path, &path_params, &query_params),
      description: operation.doc().map(str::to_string),
    }
  }

  fn url(&mut self, path: &str, path_params: &[&Parameter], query_params: &[&Parameter]) -> Url {
    let mut processed_path = path.to_string();
    let mut variables = Vec::new();

    for parameter in path_params {
      processed_path = processed_path.replace(&format!("{{{}}}", parameter.name), &format!(":{}", parameter.name));
      variables.push(UrlVariable {
        key: parameter.name.clone(),
        value: Some(self.examples.example_string(&parameter.schema)),
        description: parameter.description.clone(),
      });
    }

    let queries: Vec<Query> = query_params
      .iter()
      .map(|parameter| Query {
        key: parameter.name.clone(),
        value: Some(self.examples.example_string(&parameter.schema)),
        description: parameter.description.clone(),
        disabled: Some(!parameter.is_required()),
      })
      .collect();

    let query_suffix = if queries.is_empty() {
      String::new()
    } else {
      format!(
        "?{}",
        queries
          .iter()
          .map(|query| format!("{}={}", query.key, query.value.as_deref().unwrap_or_default()))
          .join("&")
      )
    };

    Url {
      raw: format!("{{{{baseUrl}}}}{processed_path}{query_suffix}"),
      host: Some(vec!["{{baseUrl}}".to_string()]),
      path: Some(processed_path.split('/').filter(|s| !s.is_empty()).map(str::to_string).collect()),
      query: (!queries.is_empty()).then_some(queries),
      variable: (!variables.is_empty()).then_some(variables),
    }
  }

  fn headers(&mut self, header_params: &[&Parameter], operation: &Operation) -> Vec<Header> {
    let mut headers: Vec<Header> = header_params
      .iter()
      .map(|parameter| Header {
        key: parameter.name.clone(),
        value: self.examples.example_string(&parameter.schema),
        description: parameter.description.clone(),
      })
      .collect();

    if operation.json_request_schema().is_some() {
      headers.push(Header {
        key: "Content-Type".to_string(),
        value: "application/json".to_string(),
        description: None,
      });
    }

    headers
  }

  fn body(&mut self, operation: &Operation) -> Option<RequestBody> {
    let schema = operation.json_request_schema()?;
    let example = self.examples.example(schema);

    Some(RequestBody {
      mode: "raw".to_string(),
      raw: Some(serde_json::to_string_pretty(&example).unwrap_or_default()),
      options: Some(BodyOptions {
        raw: Some(RawOptions {
          language: "json".to_string(),
        }),
      }),
    })
  }
}

#[cfg(test)]
mod tests {
  use rand::{SeedableRng, rngs::StdRng};
  use serde_json::json;

  use super::*;

  fn pets_document() -> Document {
    serde_json::from_value(json!({
      "openapi": "3.0.0",
      "info": { "title": "Pet Store", "version": "1.0.0" },
      "servers": [{ "url": "https://pets.example.com/v2" }],
      "paths": {
        "/pets/{id}": {
          "get": {
            "summary": "Find a pet",
            "parameters": [
              { "name": "id", "in": "path", "required": true, "schema": { "type": "string" } },
              { "name": "verbose", "in": "query", "schema": { "type": "boolean" } }
            ],
            "responses": { "200": { "description": "ok" } }
          }
        },
        "/pets": {
          "post": {
            "requestBody": {
              "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } } }
            },
            "responses": { "201": { "description": "created" } }
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
          }
        }
      }
    }))
    .unwrap()
  }

  fn seeded_collection(seed: u64) -> Collection {
    let document = pets_document();
    PostmanEmitter::with_rng(&document, StdRng::seed_from_u64(seed)).emit()
  }

  #[test]
  fn collection_info_and_variable() {
    let collection = seeded_collection(1);
    assert_eq!(collection.info.name, "Pet Store");
    assert_eq!(collection.info.schema, COLLECTION_SCHEMA_URL);
    let variables = collection.variable.unwrap();
    assert_eq!(variables[0].key, "baseUrl");
    assert_eq!(variables[0].value, "https://pets.example.com/v2");
  }

  #[test]
  fn path_parameters_become_postman_variables() {
    let collection = seeded_collection(1);
    let item = collection.item.iter().find(|item| item.name == "GET /pets/{id}").unwrap();
    assert!(item.request.url.raw.starts_with("{{baseUrl}}/pets/:id"));
    let variables = item.request.url.variable.as_ref().unwrap();
    assert_eq!(variables[0].key, "id");
    let path = item.request.url.path.as_ref().unwrap();
    assert_eq!(path, &vec!["pets".to_string(), ":id".to_string()]);
  }

  #[test]
  fn json_body_declares_content_type_header() {
    let collection = seeded_collection(1);
    let item = collection.item.iter().find(|item| item.name == "POST /pets").unwrap();
    let headers = item.request.header.as_ref().unwrap();
    assert!(headers.iter().any(|h| h.key == "Content-Type" && h.value == "application/json"));

    let body = item.request.body.as_ref().unwrap();
    assert_eq!(body.mode, "raw");
    let example: serde_json::Value = serde_json::from_str(body.raw.as_deref().unwrap()).unwrap();
    let object = example.as_object().unwrap();
    assert!(object.contains_key("id"));
    assert!(object.contains_key("name"));
  }

  #[test]
  fn optional_query_parameters_are_disabled() {
    let collection = seeded_collection(1);
    let item = collection.item.iter().find(|item| item.name == "GET /pets/{id}").unwrap();
    let queries = item.request.url.query.as_ref().unwrap();
    assert_eq!(queries[0].key, "verbose");
    assert_eq!(queries[0].disabled, Some(true));
  }

  #[test]
  fn collection_serializes_with_schema_url() {
    let collection = seeded_collection(1);
    let value = serde_json::to_value(&collection).unwrap();
    assert_eq!(value["info"]["schema"], json!(COLLECTION_SCHEMA_URL));
    assert!(value["item"].is_array());
  }
}

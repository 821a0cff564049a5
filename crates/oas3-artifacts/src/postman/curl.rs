//! Shell-ready cURL commands, one per operation.

use itertools::Itertools;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use rand::Rng;

use super::DEFAULT_BASE_URL;
use crate::{
  generator::examples::{CURL_OPTIONAL_THRESHOLD, ExampleGenerator},
  spec::{Document, HttpMethod, Operation, Parameter, ParameterLocation},
};

/// One generated command plus the metadata used for its comment line.
#[derive(Debug, Clone)]
pub struct CurlCommand {
  pub endpoint: String,
  pub method: String,
  pub curl: String,
  pub description: Option<String>,
}

pub struct CurlEmitter<'a, R: Rng = rand::rngs::StdRng> {
  document: &'a Document,
  examples: ExampleGenerator<'a, R>,
}

impl<'a> CurlEmitter<'a> {
  #[must_use]
  pub fn new(document: &'a Document) -> Self {
    Self {
      document,
      examples: ExampleGenerator::new(document, CURL_OPTIONAL_THRESHOLD),
    }
  }
}

impl<'a, R: Rng> CurlEmitter<'a, R> {
  pub fn with_rng(document: &'a Document, rng: R) -> Self {
    Self {
      document,
      examples: ExampleGenerator::with_rng(document, CURL_OPTIONAL_THRESHOLD, rng),
    }
  }

  pub fn emit(&mut self) -> Vec<CurlCommand> {
    let document = self.document;
    let base_url = document.base_url().unwrap_or(DEFAULT_BASE_URL);

    document
      .operations()
      .map(|(path, method, operation)| self.command(method, path, operation, base_url))
      .collect()
  }

  /// Renders all commands as one shell-pasteable text file.
  pub fn emit_text(&mut self) -> String {
    let commands = self.emit();
    let mut output = format!("# Generated cURL commands for {}\n", self.document.info.title);
    output.push_str(&format!(
      "# Generated from OpenAPI {} specification\n\n",
      self.document.openapi
    ));

    for command in commands {
      output.push_str(&format!("# {}", command.endpoint));
      if let Some(description) = &command.description {
        output.push_str(&format!(" - {description}"));
      }
      output.push('\n');
      output.push_str(&command.curl);
      output.push_str("\n\n");
    }

    output
  }

  fn command(&mut self, method: HttpMethod, path: &str, operation: &Operation, base_url: &str) -> CurlCommand {
    let path_params: Vec<&Parameter> = operation.parameters_in(ParameterLocation::Path).collect();
    let query_params: Vec<&Parameter> = operation.parameters_in(ParameterLocation::Query).collect();
    let header_params: Vec<&Parameter> = operation.parameters_in(ParameterLocation::Header).collect();

    // Placeholders get literal example values; a cURL command has no notion
    // of a deferred variable.
    let mut processed_path = path.to_string();
    for parameter in &path_params {
      let value = self.examples.example_string(&parameter.schema);
      processed_path = processed_path.replace(&format!("{{{}}}", parameter.name), &value);
    }

    let mut url = format!("{base_url}{processed_path}");

    let query_string = query_params
      .iter()
      .filter_map(|parameter| {
        // Required params always; optional ones on a coin flip.
        if !parameter.is_required() && !self.examples.include_optional_query() {
          return None;
        }
        let value = self.examples.example_string(&parameter.schema);
        let encoded = utf8_percent_encode(&value, NON_ALPHANUMERIC).to_string();
        Some(format!("{}={encoded}", parameter.name))
      })
      .join("&");

    if !query_string.is_empty() {
      url.push('?');
      url.push_str(&query_string);
    }

    let mut parts = vec![format!("curl -X {}", method.verb())];

    let mut headers: Vec<String> = header_params
      .iter()
      .map(|parameter| format!("{}: {}", parameter.name, self.examples.example_string(&parameter.schema)))
      .collect();

    if let Some(schema) = operation.json_request_schema() {
      headers.push("Content-Type: application/json".to_string());
      let body = self.examples.example(schema);
      parts.push(format!("--data '{}'", serde_json::to_string(&body).unwrap_or_default()));
    }

    for header in headers {
      parts.push(format!("-H \"{header}\""));
    }

    parts.push(format!("\"{url}\""));

    CurlCommand {
      endpoint: format!("{} {path}", method.verb()),
      method: method.verb().to_string(),
      curl: parts.join(" \\\n  "),
      description: operation.doc().map(str::to_string),
    }
  }
}

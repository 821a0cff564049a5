//! Emits a TypeScript HTTP client class with one method per operation.
//!
//! Every generated method funnels through a single private `request` helper
//! that appends query parameters, serializes a JSON body for non-GET verbs,
//! throws on non-success statuses and parses the response as JSON only when
//! the content-type header says so.

use itertools::Itertools;

use super::schema_mapper::ts_param_type;
use crate::{
  naming,
  spec::{Document, Operation, Parameter, ParameterLocation},
};

const REQUEST_HELPER: &str = r"  private async request<T>(
    method: string,
    path: string,
    data?: any,
    params?: Record<string, any>
  ): Promise<T> {
    const url = new URL(path, this.baseUrl);

    if (params) {
      Object.entries(params).forEach(([key, value]) => {
        if (value !== undefined) {
          url.searchParams.append(key, String(value));
        }
      });
    }

    const config: RequestInit = {
      method: method.toUpperCase(),
      headers: {
        'Content-Type': 'application/json',
      },
    };

    if (data && method !== 'GET') {
      config.body = JSON.stringify(data);
    }

    const response = await fetch(url.toString(), config);

    if (!response.ok) {
      throw new Error(`HTTP error! status: ${response.status}`);
    }

    const contentType = response.headers.get('content-type');
    if (contentType && contentType.includes('application/json')) {
      return response.json();
    }

    return response.text() as any;
  }

";

pub struct ClientEmitter<'a> {
  document: &'a Document,
}

impl<'a> ClientEmitter<'a> {
  #[must_use]
  pub fn new(document: &'a Document) -> Self {
    Self { document }
  }

  #[must_use]
  pub fn emit(&self) -> String {
    let class_name = naming::client_class_name(&self.document.info.title);
    let mut output = String::from("// Generated API Client from OpenAPI schema\n\n");

    let base_url = self.document.base_url().unwrap_or_default();
    output.push_str(&format!("export class {class_name} {{\n"));
    output.push_str("  private baseUrl: string;\n\n");
    output.push_str("  constructor(baseUrl?: string) {\n");
    output.push_str(&format!("    this.baseUrl = baseUrl || '{base_url}';\n"));
    output.push_str("  }\n\n");

    output.push_str(REQUEST_HELPER);

    for (path, method, operation) in self.document.operations() {
      output.push_str(&Self::operation_method(method.as_str(), path, operation));
    }

    output.push_str("}\n");
    output
  }

  /// Derived method name: `operationId` verbatim when present, else a pure
  /// function of verb and path.
  fn method_name(method: &str, path: &str, operation: &Operation) -> String {
    operation
      .operation_id
      .clone()
      .unwrap_or_else(|| naming::client_method_name(method, path))
  }

  fn operation_method(method: &str, path: &str, operation: &Operation) -> String {
    let method_name = Self::method_name(method, path, operation);
    let path_params: Vec<&Parameter> = operation.parameters_in(ParameterLocation::Path).collect();
    let query_params: Vec<&Parameter> = operation.parameters_in(ParameterLocation::Query).collect();
    // Any declared request body yields a data parameter; a body without a
    // JSON schema is still passed through, typed `any`.
    let body_type = operation
      .request_body
      .as_ref()
      .map(|_| operation.json_request_schema().map_or_else(|| "any".to_string(), ts_param_type));

    let mut params = Vec::new();
    for parameter in &path_params {
      params.push(format!("{}: {}", parameter.name, ts_param_type(&parameter.schema)));
    }
    if let Some(body_type) = &body_type {
      params.push(format!("data: {body_type}"));
    }
    if !query_params.is_empty() {
      let fields = query_params
        .iter()
        .map(|parameter| {
          let optional = if parameter.is_required() { "" } else { "?" };
          format!("{}{optional}: {}", parameter.name, ts_param_type(&parameter.schema))
        })
        .join("; ");
      params.push(format!("params?: {{{fields}}}"));
    }

    let return_type = Self::return_type(operation);

    let mut output = format!(" // {}\n\n", operation.doc().unwrap_or_default());
    output.push_str(&format!(
      "  async {method_name}({}): Promise<{return_type}> {{\n",
      params.join(", ")
    ));

    // `{name}` placeholders become `${name}` template substitutions.
    let mut processed_path = path.to_string();
    for parameter in &path_params {
      processed_path = processed_path.replace(&format!("{{{}}}", parameter.name), &format!("${{{}}}", parameter.name));
    }

    output.push_str(&format!("    return this.request<{return_type}>(\n"));
    output.push_str(&format!("      '{}',\n", method.to_uppercase()));
    output.push_str(&format!("      `{processed_path}`,\n"));
    output.push_str(if body_type.is_some() { "      data,\n" } else { "      undefined,\n" });
    output.push_str(if query_params.is_empty() { "      undefined\n" } else { "      params\n" });
    output.push_str("    );\n");
    output.push_str("  }\n\n");

    output
  }

  /// First present 200/201 JSON response schema, `any` otherwise.
  fn return_type(operation: &Operation) -> String {
    operation
      .success_response_schema(&["200", "201"])
      .map_or_else(|| "any".to_string(), ts_param_type)
  }
}

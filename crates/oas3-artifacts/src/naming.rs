//! Identifier shaping shared by the client and GraphQL emitters.

use inflections::Inflect;

/// Keeps alphanumerics and word separators, dropping everything else, so the
/// case converters below never see punctuation.
fn sanitize(input: &str) -> String {
  input
    .chars()
    .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ' '))
    .collect()
}

/// Uppercases only the first character, leaving the rest untouched.
pub(crate) fn capitalize(input: &str) -> String {
  let mut chars = input.chars();
  match chars.next() {
    None => String::new(),
    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
  }
}

/// GraphQL type names are `PascalCase` with punctuation stripped.
pub(crate) fn graphql_type_name(name: &str) -> String {
  sanitize(name).to_pascal_case()
}

/// GraphQL field and argument names are `camelCase` with punctuation stripped.
pub(crate) fn graphql_field_name(name: &str) -> String {
  sanitize(name).to_camel_case()
}

/// `PascalCase` form used when synthesizing operation names from path segments.
pub(crate) fn pascal_segment(segment: &str) -> String {
  sanitize(segment).to_pascal_case()
}

/// Client class name: API title with non-alphanumerics removed, first letter
/// upper-cased, suffixed `Client`.
pub(crate) fn client_class_name(title: &str) -> String {
  let cleaned: String = title.chars().filter(char::is_ascii_alphanumeric).collect();
  format!("{}Client", capitalize(&cleaned))
}

/// Client method name derived from verb and path when `operationId` is absent:
/// braces are stripped, remaining punctuation becomes `_`, and each segment is
/// capitalized onto the lowercase verb (`get` + `/pets/{id}` -> `getPetsId`).
pub(crate) fn client_method_name(method: &str, path: &str) -> String {
  let cleaned: String = path
    .chars()
    .filter(|c| !matches!(c, '{' | '}'))
    .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
    .collect();

  let suffix: String = cleaned.split('_').map(capitalize).collect();
  format!("{method}{suffix}")
}

/// GraphQL enum variant name: upper-cased with anything outside `[A-Z0-9_]`
/// replaced by `_`.
pub(crate) fn graphql_enum_variant(value: &str) -> String {
  value
    .to_uppercase()
    .chars()
    .map(|c| if c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_' { c } else { '_' })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn client_method_name_from_verb_and_path() {
    assert_eq!(client_method_name("get", "/pets/{id}"), "getPetsId");
    assert_eq!(client_method_name("post", "/pets"), "postPets");
    assert_eq!(client_method_name("get", "/users/{userId}/orders"), "getUsersUserIdOrders");
  }

  #[test]
  fn client_class_name_strips_punctuation() {
    assert_eq!(client_class_name("pet store API"), "PetstoreAPIClient");
    assert_eq!(client_class_name("my-api"), "MyapiClient");
  }

  #[test]
  fn graphql_names_are_cased() {
    assert_eq!(graphql_type_name("pet_tag"), "PetTag");
    assert_eq!(graphql_field_name("pet_id"), "petId");
    assert_eq!(graphql_field_name("listPets"), "listPets");
  }

  #[test]
  fn graphql_enum_variants_are_screaming() {
    assert_eq!(graphql_enum_variant("available"), "AVAILABLE");
    assert_eq!(graphql_enum_variant("not-available"), "NOT_AVAILABLE");
  }
}

//! End-to-end checks over a small petstore document: every emitter consumes
//! the same parsed document and produces its artifact.

use oas3_artifacts::{
  generator::{client::ClientEmitter, types::TypeEmitter},
  graphql::{GraphQLEmitter, sdl},
  postman::{PostmanEmitter, curl::CurlEmitter},
  spec::Document,
};
use rand::{SeedableRng, rngs::StdRng};
use serde_json::json;

fn petstore() -> Document {
  serde_json::from_value(json!({
    "openapi": "3.0.0",
    "info": { "title": "Pet Store", "version": "1.0.0", "description": "A sample API" },
    "servers": [{ "url": "https://pets.example.com/v1" }],
    "paths": {
      "/pets/{id}": {
        "get": {
          "summary": "Find a pet by id",
          "parameters": [
            { "name": "id", "in": "path", "required": true, "schema": { "type": "string", "example": "p-1" } }
          ],
          "responses": {
            "200": {
              "description": "A pet",
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
        }
      }
    }
  }))
  .unwrap()
}

#[test]
fn client_method_matches_expected_signature() {
  let document = petstore();
  let client = ClientEmitter::new(&document).emit();
  assert!(client.contains("async getPetsId(id: string): Promise<Pet> {"));
}

#[test]
fn types_output_declares_pet_interface() {
  let document = petstore();
  let types = TypeEmitter::new(&document).emit().unwrap();
  assert!(types.contains("export interface Pet {"));
  assert!(types.contains("  id: string;"));
  assert!(types.contains("  tag?: string;"));
}

#[test]
fn postman_item_uses_colon_variable() {
  let document = petstore();
  let collection = PostmanEmitter::with_rng(&document, StdRng::seed_from_u64(11)).emit();

  let item = &collection.item[0];
  assert_eq!(item.name, "GET /pets/{id}");
  assert!(item.request.url.raw.contains("/pets/:id"));
}

#[test]
fn curl_command_substitutes_example_id() {
  let document = petstore();
  let commands = CurlEmitter::with_rng(&document, StdRng::seed_from_u64(11)).emit();

  assert_eq!(commands.len(), 1);
  assert!(commands[0].curl.contains("curl -X GET"));
  assert!(commands[0].curl.contains("https://pets.example.com/v1/pets/p-1"));
}

#[test]
fn graphql_query_field_matches_rules() {
  let document = petstore();
  let schema = GraphQLEmitter::new(&document).emit();

  assert_eq!(schema.queries.len(), 1);
  let query = &schema.queries[0];
  assert_eq!(query.name, "getPets");
  assert_eq!(query.return_type, "Pet");

  let text = sdl::render(&schema);
  assert!(text.contains("  getPets(id: String!): Pet\n"));
}

#[test]
fn emitters_do_not_disturb_each_other() {
  let document = petstore();

  let first_types = TypeEmitter::new(&document).emit().unwrap();
  let _ = PostmanEmitter::with_rng(&document, StdRng::seed_from_u64(1)).emit();
  let _ = CurlEmitter::with_rng(&document, StdRng::seed_from_u64(2)).emit();
  let second_types = TypeEmitter::new(&document).emit().unwrap();

  assert_eq!(first_types, second_types);
}

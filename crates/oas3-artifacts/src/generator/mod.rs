//! TypeScript SDK generation: schema-to-type mapping, the type and client
//! emitters, and the orchestrator that writes the generated files.

pub mod client;
pub mod examples;
pub mod schema_mapper;
pub mod sdk;
pub mod types;

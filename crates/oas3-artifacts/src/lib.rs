//! Generates derived artifacts from an OpenAPI v3 document: a TypeScript
//! SDK, a Postman collection, cURL scripts and a GraphQL schema. Each emitter
//! walks the same immutable [`spec::Document`] independently and shares the
//! schema-mapping core in [`generator`] and [`spec::resolver`].

#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod generator;
pub mod graphql;
pub mod naming;
pub mod postman;
pub mod spec;
pub mod ui;

//! Writes the generated SDK (`types.ts`, `client.ts`, `index.ts`) to disk.

use std::path::{Path, PathBuf};

use itertools::Itertools;

use super::{client::ClientEmitter, types::TypeEmitter};
use crate::spec::Document;

const INDEX_CONTENT: &str = "export * from './types';\nexport * from './client';\n";

pub struct SdkGenerator<'a> {
  document: &'a Document,
  output_dir: PathBuf,
}

/// Paths of the files written by one generation pass.
pub struct SdkOutput {
  pub types_file: PathBuf,
  pub client_file: PathBuf,
  pub index_file: PathBuf,
}

impl<'a> SdkGenerator<'a> {
  pub fn new(document: &'a Document, output_dir: &Path) -> Self {
    Self {
      document,
      output_dir: output_dir.to_path_buf(),
    }
  }

  /// Emits all three files. Files written before a failing write are left on
  /// disk; there is no cleanup pass.
  pub async fn generate(&self) -> anyhow::Result<SdkOutput> {
    let types = TypeEmitter::new(self.document).emit()?;
    let client = ClientEmitter::new(self.document).emit();

    tokio::fs::create_dir_all(&self.output_dir).await?;

    let output = SdkOutput {
      types_file: self.output_dir.join("types.ts"),
      client_file: self.output_dir.join("client.ts"),
      index_file: self.output_dir.join("index.ts"),
    };

    tokio::fs::write(&output.types_file, types).await?;
    tokio::fs::write(&output.client_file, format!("{}{client}", self.import_statement())).await?;
    tokio::fs::write(&output.index_file, INDEX_CONTENT).await?;

    Ok(output)
  }

  /// Import of every named schema, so the client compiles against `types.ts`.
  fn import_statement(&self) -> String {
    match self.document.schemas() {
      Some(schemas) if !schemas.is_empty() => {
        let names = schemas.keys().join(", ");
        format!("import {{ {names} }} from './types';\n\n")
      }
      _ => String::new(),
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[tokio::test]
  async fn writes_all_three_files() {
    let document: Document = serde_json::from_value(json!({
      "openapi": "3.0.0",
      "info": { "title": "Pets", "version": "1.0.0" },
      "paths": {},
      "components": { "schemas": { "Pet": { "type": "object", "properties": {} } } }
    }))
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("generated");
    let output = SdkGenerator::new(&document, &target).generate().await.unwrap();

    let client = tokio::fs::read_to_string(&output.client_file).await.unwrap();
    assert!(client.starts_with("import { Pet } from './types';"));
    let index = tokio::fs::read_to_string(&output.index_file).await.unwrap();
    assert_eq!(index, INDEX_CONTENT);
    assert!(output.types_file.exists());
  }

  #[tokio::test]
  async fn skips_import_without_schemas() {
    let document: Document = serde_json::from_value(json!({
      "openapi": "3.0.0",
      "info": { "title": "Pets", "version": "1.0.0" },
      "paths": {}
    }))
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let output = SdkGenerator::new(&document, dir.path()).generate().await.unwrap();
    let client = tokio::fs::read_to_string(&output.client_file).await.unwrap();
    assert!(client.starts_with("// Generated API Client"));
  }
}

use std::{ffi::OsStr, path::Path};

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use super::Document;
use crate::error::{GeneratorError, GeneratorResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
  Json,
  Yaml,
}

impl SpecFormat {
  /// Maps a file extension to a spec format. Anything other than `json`,
  /// `yaml` or `yml` is rejected before the file is even opened.
  pub fn from_extension(ext: &str) -> GeneratorResult<Self> {
    match ext {
      "json" => Ok(Self::Json),
      "yaml" | "yml" => Ok(Self::Yaml),
      other => Err(GeneratorError::UnsupportedFormat {
        extension: other.to_string(),
      }),
    }
  }
}

/// Reads an OpenAPI document into memory and deserializes it.
pub struct SpecLoader {
  file: AsyncMmapFile,
  format: SpecFormat,
}

impl std::fmt::Debug for SpecLoader {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SpecLoader")
      .field("format", &self.format)
      .finish_non_exhaustive()
  }
}

impl SpecLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    if !path.exists() {
      return Err(
        GeneratorError::FileNotFound {
          path: path.to_path_buf(),
        }
        .into(),
      );
    }

    let extension = path.extension().and_then(OsStr::to_str).unwrap_or_default();
    let format = SpecFormat::from_extension(extension)?;
    let file = AsyncMmapFile::open(path).await?;

    Ok(Self { file, format })
  }

  /// Malformed content surfaces the underlying serde error untouched.
  pub fn parse(&self) -> GeneratorResult<Document> {
    match self.format {
      SpecFormat::Json => Ok(serde_json::from_slice::<Document>(self.file.as_slice())?),
      SpecFormat::Yaml => Ok(serde_yaml::from_slice::<Document>(self.file.as_slice())?),
    }
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use super::*;

  const MINIMAL_SPEC: &str = r#"{
    "openapi": "3.0.0",
    "info": { "title": "Minimal", "version": "1.0.0" },
    "paths": {}
  }"#;

  #[tokio::test]
  async fn loads_json_document() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(MINIMAL_SPEC.as_bytes()).unwrap();

    let loader = SpecLoader::open(file.path()).await.unwrap();
    let document = loader.parse().unwrap();
    assert_eq!(document.info.title, "Minimal");
    assert!(document.paths.is_empty());
  }

  #[tokio::test]
  async fn loads_yaml_document() {
    let yaml = "openapi: 3.0.0\ninfo:\n  title: Minimal\n  version: 1.0.0\npaths: {}\n";
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let loader = SpecLoader::open(file.path()).await.unwrap();
    let document = loader.parse().unwrap();
    assert_eq!(document.info.version, "1.0.0");
  }

  #[tokio::test]
  async fn rejects_unsupported_extension() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(b"openapi = '3.0.0'").unwrap();

    let error = SpecLoader::open(file.path()).await.unwrap_err();
    let generator_error = error.downcast::<GeneratorError>().unwrap();
    assert!(matches!(generator_error, GeneratorError::UnsupportedFormat { .. }));
  }

  #[tokio::test]
  async fn rejects_missing_file() {
    let error = SpecLoader::open(Path::new("/no/such/spec.json")).await.unwrap_err();
    let generator_error = error.downcast::<GeneratorError>().unwrap();
    assert!(matches!(generator_error, GeneratorError::FileNotFound { .. }));
  }
}

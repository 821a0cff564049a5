use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the loader, resolver and emitters.
///
/// Extension and existence problems are detected at the CLI boundary before
/// any parsing happens; parse and reference errors climb out of the call
/// stack via `?` and are reported once from `main`.
#[derive(Debug, Error)]
pub enum GeneratorError {
  #[error("unsupported file format '{extension}'. Please use .json, .yaml, or .yml files")]
  UnsupportedFormat { extension: String },

  #[error("input file '{path}' does not exist")]
  FileNotFound { path: PathBuf },

  #[error(transparent)]
  JsonParseFailure(#[from] serde_json::Error),

  #[error(transparent)]
  YamlParseFailure(#[from] serde_yaml::Error),

  #[error("reference {ref_path} not found")]
  ReferenceNotFound { ref_path: String },

  #[error("invalid format '{value}'. Use {expected}")]
  InvalidFormatOption { value: String, expected: &'static str },
}

pub type GeneratorResult<T> = Result<T, GeneratorError>;

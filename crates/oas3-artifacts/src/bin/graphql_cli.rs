use std::{path::PathBuf, str::FromStr};

use clap::{CommandFactory, Parser};
use oas3_artifacts::{
  error::GeneratorError,
  graphql::{GraphQLEmitter, sdl},
  spec::loader::SpecLoader,
  ui,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
  Schema,
  Json,
}

impl FromStr for OutputFormat {
  type Err = GeneratorError;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    match value {
      "schema" => Ok(Self::Schema),
      "json" => Ok(Self::Json),
      other => Err(GeneratorError::InvalidFormatOption {
        value: other.to_string(),
        expected: "'schema' or 'json'",
      }),
    }
  }
}

impl OutputFormat {
  fn default_output(self) -> &'static str {
    match self {
      Self::Schema => "schema.graphql",
      Self::Json => "schema.json",
    }
  }
}

/// Generates a GraphQL schema from an OpenAPI document, either as SDL text or
/// as the structured schema serialized to JSON.
#[derive(Parser, Debug)]
#[command(name = "graphql-cli", version, about = "OpenAPI to GraphQL schema generator")]
struct Cli {
  /// Path to the OpenAPI schema file (.json, .yaml, or .yml)
  input: Option<PathBuf>,

  /// Output file path (default: schema.graphql, schema.json for json format)
  #[arg(short, long)]
  output: Option<PathBuf>,

  /// Output format: schema|json
  #[arg(short, long, default_value = "schema")]
  format: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();

  let Some(input) = cli.input else {
    Cli::command().print_help()?;
    return Ok(());
  };

  let format = OutputFormat::from_str(&cli.format)?;
  let output_file = cli.output.unwrap_or_else(|| PathBuf::from(format.default_output()));

  ui::info(&format!("Reading OpenAPI specification from {}...", input.display()));
  let document = SpecLoader::open(&input).await?.parse()?;

  ui::info("Generating GraphQL schema...");
  let schema = GraphQLEmitter::new(&document).emit();

  let content = match format {
    OutputFormat::Schema => sdl::render(&schema),
    OutputFormat::Json => serde_json::to_string_pretty(&schema)?,
  };
  tokio::fs::write(&output_file, content).await?;

  ui::info("GraphQL schema generated successfully!");
  println!("File created: {}", output_file.display());
  ui::print_api_summary(&document);

  Ok(())
}

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use oas3_artifacts::{generator::sdk::SdkGenerator, spec::loader::SpecLoader, ui};

/// Generates a TypeScript SDK (types, client and index) from an OpenAPI
/// document.
#[derive(Parser, Debug)]
#[command(name = "sdk-gen", version, about = "OpenAPI SDK generator")]
struct Cli {
  /// Path to the OpenAPI schema file (.json, .yaml, or .yml)
  input: Option<PathBuf>,

  /// Output directory for generated files
  #[arg(default_value = "./generated")]
  output_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();

  let Some(input) = cli.input else {
    Cli::command().print_help()?;
    return Ok(());
  };

  ui::info(&format!("Generating SDK from {}...", input.display()));

  let document = SpecLoader::open(&input).await?.parse()?;
  let output = SdkGenerator::new(&document, &cli.output_dir).generate().await?;

  ui::info("SDK generated successfully!");
  println!("Files created:");
  println!("  - {}", output.types_file.display());
  println!("  - {}", output.client_file.display());
  println!("  - {}", output.index_file.display());
  ui::print_api_summary(&document);

  Ok(())
}

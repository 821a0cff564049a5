//! Shared glue for the command-line binaries.

use chrono::{Local, Timelike};

use crate::spec::Document;

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

/// Timestamped progress line on stdout.
pub fn info(message: &str) {
  println!("{} {message}", format_timestamp());
}

/// Post-generation summary printed by every binary.
pub fn print_api_summary(document: &Document) {
  println!();
  println!("API Info:");
  println!("  Title: {}", document.info.title);
  println!("  Version: {}", document.info.version);
  println!("  Endpoints: {}", document.paths.len());
}

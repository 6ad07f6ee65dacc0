//! CLI arguments

use crate::convert::{DefinitionKeyStrategy, TagStrategy};
use crate::swagger::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Convert a Postman collection into a Swagger 2.0 document
#[derive(Parser, Debug)]
#[command(name = "postman2swagger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source collection file (JSON)
    pub source: PathBuf,

    /// Target Swagger file (created or truncated)
    pub target: PathBuf,

    /// Options file (YAML or JSON)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Indent JSON output
    #[arg(long)]
    pub pretty: bool,

    /// How response definitions are keyed
    #[arg(long, value_enum)]
    pub definition_keys: Option<DefinitionKeyStrategy>,

    /// Which folders become operation tags
    #[arg(long, value_enum)]
    pub tag_strategy: Option<TagStrategy>,

    /// Host written into the document
    #[arg(long)]
    pub host: Option<String>,

    /// Fail instead of skipping malformed items
    #[arg(long)]
    pub strict: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

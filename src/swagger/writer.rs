//! Document rendering and writing

use crate::error::{Result, ResultExt};
use crate::swagger::types::SwaggerDocument;
use std::io::Write;

/// Output encoding of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON, compact unless `pretty` is set
    #[default]
    Json,
    /// YAML
    Yaml,
}

/// Render the document to a string in the given format.
///
/// `pretty` indents JSON output; YAML is always block-formatted.
pub fn render_document(
    document: &SwaggerDocument,
    format: OutputFormat,
    pretty: bool,
) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(document)?,
        OutputFormat::Json => serde_json::to_string(document)?,
        OutputFormat::Yaml => serde_yaml::to_string(document)?,
    };
    Ok(rendered)
}

/// Render the document and write it to `writer`
pub fn write_document<W: Write>(
    writer: &mut W,
    document: &SwaggerDocument,
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    let rendered = render_document(document, format, pretty)?;
    writer
        .write_all(rendered.as_bytes())
        .context("Failed to write document")?;
    writer.flush().context("Failed to flush document")?;
    Ok(())
}

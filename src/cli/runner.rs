//! CLI runner - executes a conversion

use crate::cli::commands::Cli;
use crate::collection::load_collection;
use crate::convert::{load_options, ConvertOptions, Converter};
use crate::error::{Result, ResultExt};
use crate::swagger::write_document;
use crate::{NAME, VERSION};
use std::fs::File;
use std::io::BufWriter;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the conversion
    pub fn run(&self) -> Result<()> {
        debug!("{} {}", NAME, VERSION);
        let options = self.load_options()?;
        debug!("Options: {:?}", options);

        let parsed = load_collection(&self.cli.source)?;

        // The target is created before translation begins
        let target = File::create(&self.cli.target).with_context(|| {
            format!(
                "Failed to create target file '{}'",
                self.cli.target.display()
            )
        })?;

        let document = Converter::new(options).convert_parsed(&parsed)?;

        let mut writer = BufWriter::new(target);
        write_document(&mut writer, &document, self.cli.format, self.cli.pretty)?;

        info!(
            "Wrote {} paths to {}",
            document.paths.len(),
            self.cli.target.display()
        );
        Ok(())
    }

    /// Load options from the config file, then apply command-line overrides
    fn load_options(&self) -> Result<ConvertOptions> {
        let mut options = match &self.cli.config {
            Some(path) => load_options(path)?,
            None => ConvertOptions::default(),
        };

        if let Some(strategy) = self.cli.definition_keys {
            options = options.with_definition_keys(strategy);
        }
        if let Some(strategy) = self.cli.tag_strategy {
            options = options.with_tag_strategy(strategy);
        }
        if let Some(host) = &self.cli.host {
            options = options.with_host(host);
        }
        if self.cli.strict {
            options = options.with_strict(true);
        }

        Ok(options)
    }
}

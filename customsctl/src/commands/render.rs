use crate::CliError;
use clap::Args;
use customs_core::models::DeclarationExport;
use customs_export::{ExportSettings, to_xml_string};
use std::path::PathBuf;

/// Options shared by every command that writes a document.
#[derive(Args)]
pub struct RenderArgs {
    /// TOML file overriding the fixed export values
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    /// Write the document on a single line
    #[arg(long)]
    pub compact: bool,
}

impl RenderArgs {
    /// The export settings: defaults, then the settings file, then `--compact`.
    pub fn settings(&self) -> anyhow::Result<ExportSettings> {
        let mut settings = match &self.settings {
            Some(path) if path.exists() => config::Config::builder()
                .add_source(config::Config::try_from(&ExportSettings::default())?)
                .add_source(config::File::from(path.as_path()))
                .build()?
                .try_deserialize()?,
            Some(path) => anyhow::bail!(CliError::MissingSettings(path.clone())),
            None => ExportSettings::default(),
        };
        if self.compact {
            settings.indent = 0;
        }
        Ok(settings)
    }

    /// The finished document, rendered in memory.
    pub fn render(&self, bundle: &DeclarationExport) -> anyhow::Result<String> {
        let mut xml = to_xml_string(bundle, &self.settings()?)?;
        // The document ends at the closing tag; terminate the line for terminals.
        xml.push('\n');
        Ok(xml)
    }
}

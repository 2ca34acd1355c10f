use clap::Parser;
use customs_core::models::{DeclarationExport, DeclarationId};
use std::path::PathBuf;

mod io;
pub use io::*;

mod commands;
pub use commands::*;

// The top-level arguments -- presently just which subcommand to execute
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub async fn evaluate(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Render {
                input,
                output,
                render,
            } => {
                let bundle = serde_json::from_reader::<_, DeclarationExport>(input.read()?)?;
                output.emit(&render.render(&bundle)?)?;
            }
            Commands::Export {
                database,
                id,
                output,
                render,
            } => {
                let bundle = load_bundle(&database, id).await?;
                output.emit(&render.render(&bundle)?)?;
            }
        }

        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("declaration {0} does not exist")]
    UnknownDeclaration(DeclarationId),

    #[error("settings file {} does not exist", .0.display())]
    MissingSettings(PathBuf),
}

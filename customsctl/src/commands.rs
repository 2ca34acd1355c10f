use super::{OutputArgs, PathOrStd};
use clap::Subcommand;
use customs_core::models::DeclarationId;
use std::path::PathBuf;

mod export;
mod render;

pub use export::load_bundle;
pub use render::RenderArgs;

#[derive(Subcommand)]
pub enum Commands {
    /// Render a bundle saved as JSON
    Render {
        /// The bundle JSON file ("-" implies stdin)
        #[arg(value_parser = clap::value_parser!(PathOrStd))]
        input: PathOrStd,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Render a declaration read from the application's database
    Export {
        /// The SQLite database file
        #[arg(short, long)]
        database: PathBuf,

        /// The declaration to render
        id: DeclarationId,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        render: RenderArgs,
    },
}

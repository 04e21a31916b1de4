//! colldir
//!
//! Converts Postman collections to and from directory trees that keep
//! item order in sidecar files.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;

use cli::{Cli, Commands};
use commands::ExportArgs;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    tracing::debug!(command = ?cli.command, "starting");

    match cli.command {
        Commands::Export {
            collection_file,
            output_dir,
            substitute_slashes,
            force_overwrite,
        } => commands::run_export(ExportArgs {
            collection_file: &collection_file,
            output_dir: &output_dir,
            substitute_slashes,
            force_overwrite,
        }),
        Commands::Import {
            collection_dir,
            output_file,
        } => commands::run_import(&collection_dir, output_file.as_deref()),
    }
}

//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Convert Postman collections to and from directory trees
#[derive(Parser, Debug)]
#[command(name = "colldir")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (overridden by `RUST_LOG`)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write a Postman collection file out as a directory tree
    ///
    /// Examples:
    ///   colldir export api.postman_collection.json
    ///   colldir export api.json -o exports --substitute-slashes
    Export {
        /// Postman Collection v2.1 file to read
        collection_file: PathBuf,

        /// Directory the collection directory is created in
        #[arg(short, long, env = "COLLDIR_OUTPUT_DIR", default_value = ".")]
        output_dir: PathBuf,

        /// Replace '/' in names with `_slash_` instead of failing
        #[arg(long, env = "COLLDIR_SUBSTITUTE_SLASHES")]
        substitute_slashes: bool,

        /// Remove an existing collection directory first
        #[arg(long, env = "COLLDIR_FORCE_OVERWRITE")]
        force_overwrite: bool,
    },

    /// Rebuild a Postman collection file from a directory tree
    Import {
        /// Collection directory written by `export`
        collection_dir: PathBuf,

        /// File to write; standard output if omitted
        #[arg(short = 'f', long)]
        output_file: Option<PathBuf>,
    },
}

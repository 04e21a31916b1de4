//! Command implementations.

use std::io::Write;
use std::path::Path;

use colldir_application::{
    ExportCollection, ExportCollectionInput, ImportCollection, ImportCollectionInput,
};
use colldir_domain::ExportOptions;
use colldir_infrastructure::{
    FileSystemCollectionDirectory, JsonMetadataStore, StdFileSystem, read_collection_file,
    render_collection, write_collection_file,
};

use crate::error::Result;

/// Options of the `export` command.
#[derive(Debug, Clone, Copy)]
pub struct ExportArgs<'a> {
    /// Postman collection file to read.
    pub collection_file: &'a Path,
    /// Directory the collection directory is created in.
    pub output_dir: &'a Path,
    /// Substitute separators instead of rejecting them.
    pub substitute_slashes: bool,
    /// Replace an existing export.
    pub force_overwrite: bool,
}

/// Reads a Postman collection file and writes it out as a directory tree.
///
/// # Errors
///
/// Returns an error if the file cannot be parsed or the tree cannot be written.
pub fn run_export(args: ExportArgs<'_>) -> Result<()> {
    let fs = StdFileSystem::new();
    let collection = read_collection_file(&fs, args.collection_file)?;

    let use_case = ExportCollection::new(FileSystemCollectionDirectory::new(fs), fs);
    let output = use_case.execute(ExportCollectionInput {
        collection,
        destination: args.output_dir.to_path_buf(),
        options: ExportOptions {
            substitute_separators: args.substitute_slashes,
        },
        force_overwrite: args.force_overwrite,
    })?;

    println!(
        "Exported {} folders and {} requests to {}",
        output.folders,
        output.requests,
        output.path.display()
    );
    Ok(())
}

/// Reads a collection directory and writes it as a Postman collection.
///
/// Without an output file the JSON goes to standard output.
///
/// # Errors
///
/// Returns an error if the directory is not a collection or the output
/// cannot be written.
pub fn run_import(collection_dir: &Path, output_file: Option<&Path>) -> Result<()> {
    let fs = StdFileSystem::new();
    let use_case = ImportCollection::new(
        FileSystemCollectionDirectory::new(fs),
        fs,
        JsonMetadataStore::new(fs),
    );
    let collection = use_case.execute(ImportCollectionInput {
        source: collection_dir.to_path_buf(),
    })?;

    match output_file {
        Some(path) => {
            write_collection_file(&fs, path, &collection)?;
            let (folders, requests) = collection.count_nodes();
            println!(
                "Imported {folders} folders and {requests} requests into {}",
                path.display()
            );
        }
        None => {
            let json = render_collection(&collection)?;
            std::io::stdout().lock().write_all(json.as_bytes())?;
        }
    }
    Ok(())
}

//! Defines custom error types for the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned when a Markdown file cannot be converted.
pub enum ConvertError {
    #[error("file '{}' doesn't exist!", .0.display())]
    InputNotFound(PathBuf),

    #[error("cannot access input file '{}'", .path.display())]
    InputInaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read file '{}'", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot derive an output file name from '{}'", .0.display())]
    NoFileName(PathBuf),

    #[error("failed to open output file '{}'", .path.display())]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output file '{}'", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

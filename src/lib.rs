//! Core library for md2html: reads a Markdown file, renders it and writes the HTML.

pub mod cli;
pub mod error;
pub mod render;

use crate::cli::Cli;
use crate::error::ConvertError;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// The main entry point for the application logic.
pub fn run() -> anyhow::Result<ExitCode> {
    // Initialize the logger. This will be configured by the RUST_LOG environment variable.
    env_logger::init();

    let Cli { input, output } = Cli::parse();

    let Some(input) = input else {
        Cli::command().print_help()?;
        return Ok(ExitCode::FAILURE);
    };

    let written = convert_file(&input, output.as_deref())?;
    log::info!("Wrote {}", written.display());

    Ok(ExitCode::SUCCESS)
}

/// Converts `input` to HTML and writes it to `output`, or to the default
/// output path when `output` is `None`. Returns the path that was written.
pub fn convert_file(input: &Path, output: Option<&Path>) -> Result<PathBuf, ConvertError> {
    check_input(input)?;

    let markdown = read_input(input)?;
    log::debug!("Read {} bytes from {}", markdown.len(), input.display());

    let html = render::markdown_to_html(&markdown);

    let output_path = resolve_output_path(input, output)?;
    write_html(&output_path, &html)?;

    Ok(output_path)
}

/// Checks that the input path can be stat'ed.
///
/// A missing file and a file that exists but cannot be inspected (e.g. a
/// parent directory without search permission) are reported separately.
pub fn check_input(path: &Path) -> Result<(), ConvertError> {
    match fs::metadata(path) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(ConvertError::InputNotFound(path.to_path_buf()))
        }
        Err(source) => Err(ConvertError::InputInaccessible {
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub fn read_input(path: &Path) -> Result<Vec<u8>, ConvertError> {
    fs::read(path).map_err(|source| ConvertError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Derives `<file name>.html` in the current directory from the input path.
pub fn default_output_path(input: &Path) -> Result<PathBuf, ConvertError> {
    let file_name = input
        .file_name()
        .ok_or_else(|| ConvertError::NoFileName(input.to_path_buf()))?;

    let mut output_name = OsString::from(file_name);
    output_name.push(".html");
    Ok(PathBuf::from(output_name))
}

pub fn resolve_output_path(input: &Path, output: Option<&Path>) -> Result<PathBuf, ConvertError> {
    match output {
        Some(path) => Ok(path.to_path_buf()),
        None => default_output_path(input),
    }
}

/// Writes `html` to `path`, replacing any previous content.
///
/// Newly created files get owner-only read/write permission on Unix.
pub fn write_html(path: &Path, html: &str) -> Result<(), ConvertError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let file = options.open(path).map_err(|source| ConvertError::OpenOutput {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(html.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|source| ConvertError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })
}

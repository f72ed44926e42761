//! Defines the command-line interface for the application.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "md2html",
    version,
    about = "Convert a Markdown file into an HTML file.",
    override_usage = "md2html <MARKDOWN_FILE> [OUTPUT_FILE]",
    after_help = "The name of the output file will be the same with '.html' appended."
)]
pub struct Cli {
    /// The Markdown file to convert.
    #[arg(value_name = "MARKDOWN_FILE", allow_hyphen_values = true)]
    pub input: Option<PathBuf>,

    /// Write the HTML to this path instead of '<MARKDOWN_FILE name>.html'.
    #[arg(value_name = "OUTPUT_FILE", allow_hyphen_values = true)]
    pub output: Option<PathBuf>,
}

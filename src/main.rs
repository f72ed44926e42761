//! The md2html command-line executable.

use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    md2html::run()
}

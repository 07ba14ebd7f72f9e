use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod inspect;
pub mod pack;
pub mod unpack;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a payload into a frame.
    Pack(PackArgs),
    /// Decode frames from a stream and print them.
    Unpack(UnpackArgs),
    /// Summarize a framed stream per tag.
    Inspect(InspectArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Pack(args) => pack::run(args),
        Command::Unpack(args) => unpack::run(args, format),
        Command::Inspect(args) => inspect::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct PackArgs {
    /// Type tag for the frame (0-255).
    #[arg(long, short = 't', default_value = "1")]
    pub tag: u8,
    /// Raw string payload.
    #[arg(long, conflicts_with = "file")]
    pub data: Option<String>,
    /// Read payload from file ("-" for stdin).
    #[arg(long, conflicts_with = "data")]
    pub file: Option<PathBuf>,
    /// Append the frame to this file instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
    /// Maximum frame payload size in bytes.
    #[arg(long, value_name = "BYTES")]
    pub max_frame_size: Option<usize>,
}

#[derive(Args, Debug)]
pub struct UnpackArgs {
    /// Framed stream to read ("-" for stdin).
    pub input: PathBuf,
    /// Filter to specific tags (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub tags: Option<Vec<u8>>,
    /// Exit after decoding N frames.
    #[arg(long)]
    pub count: Option<usize>,
    /// Maximum frame payload size in bytes.
    #[arg(long, value_name = "BYTES")]
    pub max_frame_size: Option<usize>,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Framed stream to read ("-" for stdin).
    pub input: PathBuf,
    /// Maximum frame payload size in bytes.
    #[arg(long, value_name = "BYTES")]
    pub max_frame_size: Option<usize>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// Open `path` for reading, with "-" meaning stdin.
pub(crate) fn open_input(path: &std::path::Path) -> CliResult<Box<dyn std::io::Read>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(std::io::stdin()));
    }
    let file = std::fs::File::open(path).map_err(|err| {
        crate::exit::io_error(&format!("failed opening {}", path.display()), err)
    })?;
    Ok(Box::new(file))
}

/// Source label for output rows.
pub(crate) fn source_label(path: &std::path::Path) -> String {
    if path.as_os_str() == "-" {
        "stdin".to_string()
    } else {
        path.display().to_string()
    }
}

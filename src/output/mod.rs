//! Tree formatting and display
//!
//! This module provides formatters for outputting tree structures:
//! - Markdown lines with links and forced line breaks
//! - JSON output
//!
//! Formatters write into any `Write` sink; `open_sink` picks stdout or a
//! file.

mod config;
mod json;
mod markdown;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::TreeError;
use crate::tree::{TreeWalker, WalkCounters};

// Re-export public types and functions
pub use config::{OutputConfig, OutputFormat};
pub use json::{JsonFormatter, JsonTree, TreeNode};
pub use markdown::{CONTINUATION, DIR_EMOTE, FILE_EMOTE, MarkdownFormatter};

/// Open the output sink: the given file (created or truncated), or stdout.
/// The file is closed when the returned writer is dropped.
pub fn open_sink(file: Option<&Path>) -> Result<Box<dyn Write>, TreeError> {
    match file {
        Some(path) => {
            let file = File::create(path).map_err(|source| TreeError::Output {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// Walk `root` and render it into `writer` in the configured format.
pub fn render<W: Write>(
    walker: &TreeWalker,
    root: &Path,
    config: &OutputConfig,
    writer: W,
) -> Result<WalkCounters, TreeError> {
    match config.format {
        OutputFormat::Markdown => {
            let mut formatter = MarkdownFormatter::new(config.clone(), writer);
            walker.walk(root, &mut formatter)
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(writer);
            walker.walk(root, &mut formatter)
        }
    }
}

/// Render into a string.
pub fn render_to_string(
    walker: &TreeWalker,
    root: &Path,
    config: &OutputConfig,
) -> Result<String, TreeError> {
    let mut buf = Vec::new();
    render(walker, root, config, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

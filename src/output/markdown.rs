//! Markdown output formatting
//!
//! This module provides `MarkdownFormatter` which writes the tree as
//! linked lines joined by forced line breaks (a trailing backslash), the
//! form that renders as a tree inside a README.

use std::io::{self, Write};

use crate::tree::{Placeholder, StreamingOutput, VisitEvent, WalkCounters};

use super::config::OutputConfig;

/// Forced Markdown line break ending every line but the last.
pub const CONTINUATION: &str = " \\";
pub const DIR_EMOTE: &str = "📁 ";
pub const FILE_EMOTE: &str = "📄 ";

const BRANCH: &str = "├──";
const LAST_BRANCH: &str = "└──";

/// Markdown output formatter - streams lines into any writer.
///
/// The most recent line is held back until the next one arrives, so the
/// final line can be written without its continuation marker.
pub struct MarkdownFormatter<W: Write> {
    config: OutputConfig,
    writer: W,
    pending: Option<String>,
}

impl<W: Write> MarkdownFormatter<W> {
    pub fn new(config: OutputConfig, writer: W) -> Self {
        Self {
            config,
            writer,
            pending: None,
        }
    }

    /// Take back the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn push_line(&mut self, line: String) -> io::Result<()> {
        if let Some(previous) = self.pending.replace(line) {
            writeln!(self.writer, "{}{}", previous, CONTINUATION)?;
        }
        Ok(())
    }
}

impl<W: Write> StreamingOutput for MarkdownFormatter<W> {
    fn root(&mut self, display: &str) -> io::Result<()> {
        self.push_line(display.to_string())
    }

    fn entry(&mut self, event: &VisitEvent<'_>) -> io::Result<()> {
        let connector = if event.is_last { LAST_BRANCH } else { BRANCH };
        let emote = match (self.config.emotes, event.is_dir()) {
            (false, _) => "",
            (true, true) => DIR_EMOTE,
            (true, false) => FILE_EMOTE,
        };
        self.push_line(format!(
            "{}{} {}[{}]({})",
            event.prefix, connector, emote, event.name, event.display
        ))
    }

    fn placeholder(&mut self, prefix: &str, _reason: Placeholder) -> io::Result<()> {
        self.push_line(format!("{}{} ...", prefix, LAST_BRANCH))
    }

    fn finish(&mut self, counters: WalkCounters) -> io::Result<()> {
        if let Some(last) = self.pending.take() {
            writeln!(self.writer, "{}", last)?;
        }
        if self.config.summary {
            writeln!(self.writer, "{}", counters.summary())?;
        }
        self.writer.flush()
    }
}

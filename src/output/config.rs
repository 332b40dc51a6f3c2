//! Output configuration types

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Prefix names with folder/file icons.
    pub emotes: bool,
    /// Append a "<n> directories, <m> files" line.
    pub summary: bool,
}

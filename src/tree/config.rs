//! Configuration types for the tree walker

use super::order::SortOrder;

/// Depth cutoff used when none is given on the command line.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Deepest level whose entries are rendered; children of the root are
    /// depth 0. `None` walks the whole hierarchy.
    pub max_depth: Option<usize>,
    /// Regex of paths to drop entirely.
    pub exclude: Option<String>,
    /// Regex of directories rendered as a `...` placeholder instead of expanded.
    pub no_develop: Option<String>,
    pub show_hidden: bool,
    /// List files before directories at every level.
    pub separate: bool,
    pub order: SortOrder,
    pub reverse: bool,
    /// Show the root as `.` and build links relative to it.
    pub relative_display: bool,
}

impl WalkerConfig {
    /// Unlimited depth with files separated and relative links.
    pub fn quick(mut self) -> Self {
        self.max_depth = None;
        self.separate = true;
        self.relative_display = true;
        self
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            exclude: None,
            no_develop: None,
            show_hidden: false,
            separate: false,
            order: SortOrder::Default,
            reverse: false,
            relative_display: false,
        }
    }
}

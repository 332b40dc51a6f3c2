//! mdtree - render a directory hierarchy as a linked Markdown tree

pub mod error;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::TreeError;
pub use output::{
    JsonFormatter, MarkdownFormatter, OutputConfig, OutputFormat, open_sink, render,
    render_to_string,
};
pub use tree::{
    SortOrder, StreamingOutput, TreeWalker, VisitEvent, WalkCounters, WalkerConfig,
};

//! TreeWalker - depth-first walk that streams visit events to an output

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::error::TreeError;

use super::config::WalkerConfig;
use super::filter::PathFilter;
use super::traversal::{BaseTraversal, Child, EntryKind};

/// One rendered entry of the tree.
#[derive(Debug, Clone, Copy)]
pub struct VisitEvent<'a> {
    pub name: &'a str,
    /// Filesystem path of the entry.
    pub path: &'a Path,
    /// Link target as rendered.
    pub display: &'a str,
    pub kind: EntryKind,
    /// Children of the root are at depth 0.
    pub depth: usize,
    pub is_last: bool,
    /// Accumulated indentation for this entry's line.
    pub prefix: &'a str,
}

impl VisitEvent<'_> {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Why a directory's contents were replaced by a `...` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    /// Matched the no-develop pattern.
    Collapsed,
    /// Sits past the depth cutoff and still has visible content.
    Truncated,
}

/// Directory and file totals for one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkCounters {
    pub directories: usize,
    pub files: usize,
}

impl WalkCounters {
    fn register(&mut self, kind: EntryKind) {
        match kind {
            EntryKind::Directory => self.directories += 1,
            EntryKind::File => self.files += 1,
        }
    }

    pub fn summary(&self) -> String {
        format!("{} directories, {} files", self.directories, self.files)
    }
}

/// Callback for streaming output - receives tree events in display order.
pub trait StreamingOutput {
    fn root(&mut self, display: &str) -> std::io::Result<()>;

    fn entry(&mut self, event: &VisitEvent<'_>) -> std::io::Result<()>;

    /// A `...` line standing in for the contents of the directory just
    /// emitted. `prefix` is the indentation of that directory's children.
    fn placeholder(&mut self, prefix: &str, reason: Placeholder) -> std::io::Result<()>;

    fn finish(&mut self, counters: WalkCounters) -> std::io::Result<()>;
}

/// Streaming tree walker. Holds O(depth) state: one sibling list per level.
pub struct TreeWalker {
    config: WalkerConfig,
    filter: PathFilter,
}

impl TreeWalker {
    /// Build a walker, compiling its exclude and no-develop patterns.
    pub fn new(config: WalkerConfig) -> Result<Self, TreeError> {
        let filter = PathFilter::new(&config)?;
        Ok(Self { config, filter })
    }

    /// Walk `root` and stream every event to `output`.
    pub fn walk<O: StreamingOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> Result<WalkCounters, TreeError> {
        Self::check_root(root)?;

        let display = self.root_display(root);
        output.root(&display)?;

        let mut counters = WalkCounters::default();
        self.walk_dir(root, &display, 0, "", output, &mut counters)?;
        output.finish(counters)?;

        info!(
            directories = counters.directories,
            files = counters.files,
            "walk complete"
        );
        Ok(counters)
    }

    /// Fail unless `root` is an existing directory.
    pub fn check_root(root: &Path) -> Result<(), TreeError> {
        if !root.exists() {
            return Err(TreeError::RootNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(TreeError::NotADirectory(root.to_path_buf()));
        }
        Ok(())
    }

    fn root_display(&self, root: &Path) -> String {
        if self.config.relative_display {
            ".".to_string()
        } else {
            root.to_string_lossy().to_string()
        }
    }

    fn walk_dir<O: StreamingOutput>(
        &self,
        path: &Path,
        dir_display: &str,
        depth: usize,
        prefix: &str,
        output: &mut O,
        counters: &mut WalkCounters,
    ) -> Result<(), TreeError> {
        let base = BaseTraversal::new(&self.config, &self.filter);

        let children = base.read_visible_children(path, dir_display)?;

        if base.beyond_max_depth(depth) {
            if !children.is_empty() {
                debug!(path = %dir_display, depth, "truncated at max depth");
                output.placeholder(prefix, Placeholder::Truncated)?;
            }
            return Ok(());
        }

        debug!(path = %dir_display, depth, count = children.len(), "listing directory");
        let children = base.order_children(children)?;
        let total = children.len();

        for (i, child) in children.iter().enumerate() {
            let is_last = i + 1 == total;
            self.visit(&base, child, depth, is_last, prefix, output, counters)?;
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn visit<O: StreamingOutput>(
        &self,
        base: &BaseTraversal<'_>,
        child: &Child,
        depth: usize,
        is_last: bool,
        prefix: &str,
        output: &mut O,
        counters: &mut WalkCounters,
    ) -> Result<(), TreeError> {
        trace!(path = %child.display, depth, "visit");
        output.entry(&VisitEvent {
            name: &child.name,
            path: &child.path,
            display: &child.display,
            kind: child.kind,
            depth,
            is_last,
            prefix,
        })?;
        counters.register(child.kind);

        if !child.is_dir() {
            return Ok(());
        }

        let child_prefix = base.child_prefix(prefix, is_last);
        if self.filter.is_collapsed(&child.display) {
            debug!(path = %child.display, "collapsed by no-develop pattern");
            output.placeholder(&child_prefix, Placeholder::Collapsed)?;
            return Ok(());
        }

        self.walk_dir(
            &child.path,
            &child.display,
            depth + 1,
            &child_prefix,
            output,
            counters,
        )
    }
}

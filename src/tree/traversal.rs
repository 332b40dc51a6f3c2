//! Directory listing, filtering and ordering for one level of the walk.

use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::TreeError;

use super::config::WalkerConfig;
use super::filter::PathFilter;

/// Indentation added below a sibling that is followed by more siblings.
pub const BAR_UNIT: &str = "│&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;";
/// Indentation added below the last sibling.
pub const BLANK_UNIT: &str =
    "&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One listed child of a directory.
#[derive(Debug, Clone)]
pub struct Child {
    pub name: String,
    /// Filesystem path used for I/O.
    pub path: PathBuf,
    /// Path as rendered in links and matched by patterns.
    pub display: String,
    pub kind: EntryKind,
}

impl Child {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Metadata of the link target, or of the link itself when it dangles.
    pub fn metadata(&self) -> Result<Metadata, TreeError> {
        stat(&self.path)
    }
}

/// Metadata of `path` following links; a dangling link reports itself.
pub(crate) fn stat(path: &Path) -> Result<Metadata, TreeError> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::symlink_metadata(path).map_err(|_| TreeError::metadata(path, e))
        }
        Err(e) => Err(TreeError::metadata(path, e)),
    }
}

/// Join a rendered parent path and a child name the way links are written.
pub fn join_display(parent: &str, name: &str) -> String {
    if parent.ends_with('/') {
        format!("{}{}", parent, name)
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Per-level traversal steps shared by every walk.
pub struct BaseTraversal<'a> {
    pub config: &'a WalkerConfig,
    pub filter: &'a PathFilter,
}

impl<'a> BaseTraversal<'a> {
    pub fn new(config: &'a WalkerConfig, filter: &'a PathFilter) -> Self {
        Self { config, filter }
    }

    /// Check if a level at `depth` is past the cutoff
    pub fn beyond_max_depth(&self, depth: usize) -> bool {
        self.config.max_depth.is_some_and(|max| depth > max)
    }

    /// List the children of `path` that survive the hidden and exclude filters.
    pub fn read_visible_children(&self, path: &Path, display: &str) -> Result<Vec<Child>, TreeError> {
        let entries = fs::read_dir(path).map_err(|e| TreeError::read_dir(path, e))?;

        let mut children = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| TreeError::read_dir(path, e))?;
            let name = entry.file_name().to_string_lossy().to_string();
            let child_display = join_display(display, &name);

            if !self.filter.is_included(&name, &child_display) {
                trace!(path = %child_display, "filtered out");
                continue;
            }

            let child_path = entry.path();
            let kind = if stat(&child_path)?.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            children.push(Child {
                name,
                path: child_path,
                display: child_display,
                kind,
            });
        }
        Ok(children)
    }

    /// Order children by the configured key, files first when separating.
    pub fn order_children(&self, mut children: Vec<Child>) -> Result<Vec<Child>, TreeError> {
        let order = self.config.order;
        let reverse = self.config.reverse;

        if !self.config.separate {
            order.sort(&mut children, reverse)?;
            return Ok(children);
        }

        let (mut files, mut dirs): (Vec<_>, Vec<_>) =
            children.into_iter().partition(|c| !c.is_dir());
        order.sort(&mut files, reverse)?;
        order.sort(&mut dirs, reverse)?;
        files.append(&mut dirs);
        Ok(files)
    }

    /// Calculate the prefix for child entries
    pub fn child_prefix(&self, current_prefix: &str, is_last: bool) -> String {
        if is_last {
            format!("{}{}", current_prefix, BLANK_UNIT)
        } else {
            format!("{}{}", current_prefix, BAR_UNIT)
        }
    }
}

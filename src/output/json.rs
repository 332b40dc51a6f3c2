//! JSON output formatting

use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::tree::{Placeholder, StreamingOutput, VisitEvent, WalkCounters, stat};

/// One node of the JSON tree.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        path: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        modified: Option<DateTime<Utc>>,
    },
    Dir {
        name: String,
        path: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        modified: Option<DateTime<Utc>>,
        /// Set when the contents were replaced by a placeholder.
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<Placeholder>,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    fn children_mut(&mut self) -> Option<&mut Vec<TreeNode>> {
        match self {
            TreeNode::Dir { children, .. } => Some(children),
            TreeNode::File { .. } => None,
        }
    }
}

/// Top-level JSON document.
#[derive(Debug, Clone, Serialize)]
pub struct JsonTree {
    pub root: String,
    pub tree: Vec<TreeNode>,
    pub directories: usize,
    pub files: usize,
}

/// Builds the nested tree from streamed events and writes it on finish.
pub struct JsonFormatter<W: Write> {
    writer: W,
    root: String,
    /// Open directories, outermost first; index 0 is the root.
    stack: Vec<TreeNode>,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            root: String::new(),
            stack: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Close open directories until the top of the stack is the parent
    /// of an entry at `depth`.
    fn close_to(&mut self, depth: usize) {
        while self.stack.len() > depth + 1 {
            if let Some(done) = self.stack.pop() {
                self.attach(done);
            }
        }
    }

    fn attach(&mut self, node: TreeNode) {
        if let Some(children) = self.stack.last_mut().and_then(TreeNode::children_mut) {
            children.push(node);
        }
    }
}

/// Modification time of an entry. Failures surface as the walk's error.
fn modified(path: &Path) -> io::Result<Option<DateTime<Utc>>> {
    let meta = stat(path).map_err(io::Error::other)?;
    Ok(Some(DateTime::<Utc>::from(meta.modified()?)))
}

impl<W: Write> StreamingOutput for JsonFormatter<W> {
    fn root(&mut self, display: &str) -> io::Result<()> {
        self.root = display.to_string();
        self.stack = vec![TreeNode::Dir {
            name: display.to_string(),
            path: display.to_string(),
            modified: None,
            placeholder: None,
            children: Vec::new(),
        }];
        Ok(())
    }

    fn entry(&mut self, event: &VisitEvent<'_>) -> io::Result<()> {
        self.close_to(event.depth);

        let name = event.name.to_string();
        let path = event.display.to_string();
        let modified = modified(event.path)?;
        if event.is_dir() {
            self.stack.push(TreeNode::Dir {
                name,
                path,
                modified,
                placeholder: None,
                children: Vec::new(),
            });
        } else {
            self.attach(TreeNode::File {
                name,
                path,
                modified,
            });
        }
        Ok(())
    }

    fn placeholder(&mut self, _prefix: &str, reason: Placeholder) -> io::Result<()> {
        if let Some(TreeNode::Dir { placeholder, .. }) = self.stack.last_mut() {
            *placeholder = Some(reason);
        }
        Ok(())
    }

    fn finish(&mut self, counters: WalkCounters) -> io::Result<()> {
        self.close_to(0);
        let tree = match self.stack.pop() {
            Some(TreeNode::Dir { children, .. }) => children,
            _ => Vec::new(),
        };

        let document = JsonTree {
            root: std::mem::take(&mut self.root),
            tree,
            directories: counters.directories,
            files: counters.files,
        };
        serde_json::to_writer_pretty(&mut self.writer, &document).map_err(io::Error::other)?;
        writeln!(self.writer)?;
        self.writer.flush()
    }
}

//! Directory tree walking logic
//!
//! `TreeWalker` lists one directory at a time, filters and orders its
//! children, and streams a visit event per entry to a `StreamingOutput`.
//! Memory use is O(depth): only the sibling lists on the current path
//! are alive.

mod config;
mod filter;
mod order;
mod traversal;
mod walker;

// Re-export public types
pub use config::{DEFAULT_MAX_DEPTH, WalkerConfig};
pub use filter::{PathFilter, is_hidden};
pub use order::{SortOrder, compare_names, directory_size};
pub use traversal::{BAR_UNIT, BLANK_UNIT, EntryKind, join_display};
pub(crate) use traversal::stat;
pub use walker::{Placeholder, StreamingOutput, TreeWalker, VisitEvent, WalkCounters};

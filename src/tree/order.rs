//! Sibling ordering strategies

use std::cmp::Ordering;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::SystemTime;

use clap::ValueEnum;
use walkdir::WalkDir;

use crate::error::TreeError;

use super::traversal::Child;

/// Key used to order the children of a directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Case-insensitive name
    #[default]
    Default,
    /// Last modification time, oldest first
    Time,
    /// Size in bytes; directories use the total of the files they contain
    Size,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortOrder::Default => "default",
            SortOrder::Time => "time",
            SortOrder::Size => "size",
        };
        f.write_str(name)
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <SortOrder as ValueEnum>::from_str(s, true)
    }
}

/// Precomputed sort key for one child.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Name,
    Time(SystemTime),
    Size(u64),
}

impl SortOrder {
    /// Sort `children` in place. Keys are computed once per child before
    /// sorting, so directory sizes are walked once per sibling group.
    pub fn sort(self, children: &mut Vec<Child>, reverse: bool) -> Result<(), TreeError> {
        let mut keyed = Vec::with_capacity(children.len());
        for child in children.drain(..) {
            let key = self.key_for(&child)?;
            keyed.push((key, child));
        }

        keyed.sort_by(|(ka, a), (kb, b)| ka.cmp(kb).then_with(|| compare_names(&a.name, &b.name)));
        if reverse {
            keyed.reverse();
        }

        children.extend(keyed.into_iter().map(|(_, child)| child));
        Ok(())
    }

    fn key_for(self, child: &Child) -> Result<SortKey, TreeError> {
        match self {
            SortOrder::Default => Ok(SortKey::Name),
            SortOrder::Time => {
                let meta = child.metadata()?;
                let modified = meta
                    .modified()
                    .map_err(|e| TreeError::metadata(&child.path, e))?;
                Ok(SortKey::Time(modified))
            }
            SortOrder::Size => {
                if child.is_dir() {
                    directory_size(&child.path).map(SortKey::Size)
                } else {
                    Ok(SortKey::Size(child.metadata()?.len()))
                }
            }
        }
    }
}

/// Case-insensitive comparison, exact name breaking ties.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Total size of every regular file below `path`. Symlinked files are not
/// counted and symlinked directories are not followed.
pub fn directory_size(path: &Path) -> Result<u64, TreeError> {
    let mut total = 0u64;
    for entry in WalkDir::new(path).follow_links(false) {
        let entry = entry.map_err(|source| TreeError::DirectorySize {
            path: path.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let meta = entry.metadata().map_err(|source| TreeError::DirectorySize {
            path: path.to_path_buf(),
            source,
        })?;
        total += meta.len();
    }
    Ok(total)
}

//! Path filtering for tree walking

use regex::Regex;

use crate::error::TreeError;

use super::config::WalkerConfig;

/// Compiled hidden/exclude/no-develop rules.
#[derive(Debug, Clone)]
pub struct PathFilter {
    show_hidden: bool,
    exclude: Option<Regex>,
    no_develop: Option<Regex>,
}

impl PathFilter {
    /// Compile the patterns from a walker configuration.
    pub fn new(config: &WalkerConfig) -> Result<Self, TreeError> {
        Ok(Self {
            show_hidden: config.show_hidden,
            exclude: compile_path_pattern("exclude", config.exclude.as_deref())?,
            no_develop: compile_path_pattern("no-develop", config.no_develop.as_deref())?,
        })
    }

    /// Check if an entry should be rendered at all.
    pub fn is_included(&self, name: &str, display: &str) -> bool {
        if !self.show_hidden && is_hidden(name) {
            return false;
        }
        !self.exclude.as_ref().is_some_and(|re| re.is_match(display))
    }

    /// Check if a directory should be collapsed to a placeholder.
    pub fn is_collapsed(&self, display: &str) -> bool {
        self.no_develop
            .as_ref()
            .is_some_and(|re| re.is_match(display))
    }
}

/// Dot-prefixed names are hidden.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Anchor a user pattern at the start of the path, allowing an optional
/// leading `./` so `src` matches both `src/...` and `./src/...`.
fn compile_path_pattern(
    option: &'static str,
    pattern: Option<&str>,
) -> Result<Option<Regex>, TreeError> {
    let Some(pattern) = pattern else {
        return Ok(None);
    };
    Regex::new(&format!(r"^(?:\./)?(?:{})", pattern))
        .map(Some)
        .map_err(|source| TreeError::InvalidPattern {
            option,
            pattern: pattern.to_string(),
            source,
        })
}

//! File and directory exclusion rules for the template walk.
//! Each excluded prefix matches the path itself and everything below it,
//! compared component by component (`cli` excludes `cli/main.go`, not `client/`).

use std::path::{Component, Path};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use log::debug;

use crate::constants::EXCLUDED_PREFIXES;
use crate::error::{Error, Result};

/// Compiled set of excluded relative path prefixes.
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    globs: GlobSet,
}

impl ExclusionFilter {
    /// Builds a filter from relative path prefixes.
    ///
    /// # Errors
    /// * `Error::ConfigError` if a prefix cannot be compiled into a pattern
    pub fn new<I, S>(prefixes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GlobSetBuilder::new();
        for prefix in prefixes {
            let prefix = prefix.as_ref().trim_matches('/');
            if prefix.is_empty() {
                continue;
            }
            for pattern in [prefix.to_string(), format!("{}/**", prefix)] {
                let glob = GlobBuilder::new(&pattern)
                    .literal_separator(true)
                    .build()
                    .map_err(|e| {
                        Error::ConfigError(format!("invalid exclusion '{}': {}", prefix, e))
                    })?;
                builder.add(glob);
            }
        }
        let globs = builder
            .build()
            .map_err(|e| Error::ConfigError(format!("exclusion list loading failed: {}", e)))?;
        Ok(Self { globs })
    }

    /// The fixed exclusion list for generated projects.
    pub fn default_excludes() -> Result<Self> {
        Self::new(EXCLUDED_PREFIXES)
    }

    /// Returns true when `relative_path` falls under an excluded prefix.
    pub fn is_excluded<P: AsRef<Path>>(&self, relative_path: P) -> bool {
        let normalized = to_slash(relative_path.as_ref());
        if normalized.is_empty() {
            return false;
        }
        let excluded = self.globs.is_match(&normalized);
        if excluded {
            debug!("Excluded by rule: {}", normalized);
        }
        excluded
    }
}

/// Joins the normal components of `path` with `/`, whatever the platform separator.
pub fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

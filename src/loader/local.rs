//! Templates already present on the local filesystem.

use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::ROOT_MARKERS;
use crate::error::{Error, Result};
use crate::loader::{LoadedTemplate, TemplateLoader};

/// Loader for a template directory given explicitly.
pub struct DirectoryLoader<P: AsRef<Path>> {
    path: P,
}

impl<P: AsRef<Path>> DirectoryLoader<P> {
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

impl<P: AsRef<Path>> TemplateLoader for DirectoryLoader<P> {
    fn load(&self) -> Result<LoadedTemplate> {
        let path = self.path.as_ref();
        if !path.is_dir() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: path.display().to_string(),
            });
        }

        Ok(LoadedTemplate::borrowed(path.to_path_buf()))
    }
}

/// Finds the scaffold repository enclosing a start directory.
///
/// A directory qualifies when every marker path exists in it. Only the start
/// directory and its immediate parent are checked.
#[derive(Debug, Clone)]
pub struct ScaffoldRootResolver {
    start: PathBuf,
    markers: Vec<String>,
}

impl ScaffoldRootResolver {
    pub fn new<P: Into<PathBuf>>(start: P) -> Self {
        Self {
            start: start.into(),
            markers: ROOT_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Replaces the default marker list.
    pub fn with_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true when every marker exists below `dir`.
    pub fn is_root(&self, dir: &Path) -> bool {
        self.markers.iter().all(|marker| dir.join(marker).exists())
    }

    /// # Errors
    /// * `Error::RootNotFoundError` if neither the start directory nor its parent qualifies
    pub fn resolve(&self) -> Result<PathBuf> {
        let start = self
            .start
            .canonicalize()
            .unwrap_or_else(|_| self.start.clone());
        let candidates = std::iter::once(start.as_path()).chain(start.parent());
        for candidate in candidates {
            debug!("Checking scaffold root candidate '{}'", candidate.display());
            if self.is_root(candidate) {
                return Ok(candidate.to_path_buf());
            }
        }

        Err(Error::RootNotFoundError {
            start: self.start.display().to_string(),
        })
    }
}

/// Loader using the scaffold repository the tool is run from.
pub struct DiscoverLoader {
    start: Option<PathBuf>,
}

impl DiscoverLoader {
    pub fn new<P: Into<PathBuf>>(start: P) -> Self {
        Self {
            start: Some(start.into()),
        }
    }

    /// Starts from the working directory at load time.
    pub fn from_current_dir() -> Self {
        Self { start: None }
    }
}

impl TemplateLoader for DiscoverLoader {
    fn load(&self) -> Result<LoadedTemplate> {
        let start = match &self.start {
            Some(start) => start.clone(),
            None => std::env::current_dir()?,
        };
        let root = ScaffoldRootResolver::new(start).resolve()?;
        Ok(LoadedTemplate::borrowed(root))
    }
}

//! Template acquisition. Every source yields a local template root directory
//! through the [`TemplateLoader`] trait.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use url::Url;

use crate::constants::DEFAULT_TEMPLATE_URL;
use crate::error::Result;

pub mod archive;
pub mod local;
pub mod remote;

pub use archive::ArchiveLoader;
pub use local::{DirectoryLoader, DiscoverLoader, ScaffoldRootResolver};
pub use remote::RemoteLoader;

/// Represents the source location of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Zip archive served over HTTP(S)
    Remote(String),
    /// Zip archive on the local filesystem
    Archive(PathBuf),
    /// Template directory on the local filesystem
    Directory(PathBuf),
    /// Scaffold root found by walking up from the working directory
    Discover,
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::Remote(url) => write!(f, "remote archive: '{url}'"),
            TemplateSource::Archive(path) => write!(f, "local archive: '{}'", path.display()),
            TemplateSource::Directory(path) => write!(f, "local path: '{}'", path.display()),
            TemplateSource::Discover => write!(f, "enclosing scaffold repository"),
        }
    }
}

impl Default for TemplateSource {
    fn default() -> Self {
        TemplateSource::Remote(DEFAULT_TEMPLATE_URL.to_string())
    }
}

impl TemplateSource {
    /// Classifies a template argument.
    ///
    /// `http`/`https` URLs are remote archives, local paths ending in `.zip` are
    /// archives, anything else is a template directory.
    pub fn from_string(s: &str) -> Self {
        if let Ok(url) = Url::parse(s) {
            if url.scheme() == "https" || url.scheme() == "http" {
                return Self::Remote(s.to_string());
            }
        }

        let path = PathBuf::from(s);
        let is_zip = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("zip"))
            .unwrap_or(false);
        if is_zip {
            Self::Archive(path)
        } else {
            Self::Directory(path)
        }
    }
}

/// A template root ready to be walked.
///
/// Holds the staging directory the root was extracted into, if any; the
/// staging directory is removed when this value is dropped.
#[derive(Debug)]
pub struct LoadedTemplate {
    root: PathBuf,
    _staging: Option<TempDir>,
}

impl LoadedTemplate {
    /// A template that lives in a directory not owned by the loader.
    pub fn borrowed(root: PathBuf) -> Self {
        Self {
            root,
            _staging: None,
        }
    }

    /// A template extracted into `staging`, which is removed on drop.
    pub fn staged(root: PathBuf, staging: TempDir) -> Self {
        Self {
            root,
            _staging: Some(staging),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Trait for loading templates from different sources.
pub trait TemplateLoader {
    /// Makes the template available locally and returns its root.
    fn load(&self) -> Result<LoadedTemplate>;
}

/// Returns the loader for `source`.
pub fn get_loader(source: &TemplateSource) -> Box<dyn TemplateLoader> {
    match source {
        TemplateSource::Remote(url) => Box::new(RemoteLoader::new(url.clone())),
        TemplateSource::Archive(path) => Box::new(ArchiveLoader::new(path.clone())),
        TemplateSource::Directory(path) => Box::new(DirectoryLoader::new(path.clone())),
        TemplateSource::Discover => Box::new(DiscoverLoader::from_current_dir()),
    }
}

//! Zip archive templates: staging, extraction and template root lookup.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use tempfile::TempDir;

use crate::error::{Error, Result};
use crate::extractor::extract;
use crate::loader::{LoadedTemplate, TemplateLoader};

/// Subdirectory of the staging directory receiving the extracted archive.
pub const EXTRACT_DIR: &str = "extracted";

/// Creates the ephemeral staging directory for one acquisition run.
pub fn staging_dir() -> Result<TempDir> {
    tempfile::Builder::new()
        .prefix("skeleton_template_")
        .tempdir()
        .map_err(Error::IoError)
}

/// Returns the template root inside an extracted archive: the first directory,
/// by name, at the extraction root.
///
/// # Errors
/// * `Error::TemplateRootMissingError` if the extraction root has no directory
pub fn locate_template_root<P: AsRef<Path>>(extract_dir: P) -> Result<PathBuf> {
    let extract_dir = extract_dir.as_ref();
    let mut directories = Vec::new();
    for entry in fs::read_dir(extract_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            directories.push(entry.path());
        }
    }
    directories.sort();

    if directories.len() > 1 {
        warn!(
            "Archive contains {} top-level directories, using '{}'",
            directories.len(),
            directories[0].display()
        );
    }

    directories
        .into_iter()
        .next()
        .ok_or_else(|| Error::TemplateRootMissingError {
            archive: extract_dir.display().to_string(),
        })
}

/// Extracts `archive_path` below `staging` and returns the template root.
pub fn unpack<P: AsRef<Path>>(archive_path: P, staging: &Path) -> Result<PathBuf> {
    let extract_dir = staging.join(EXTRACT_DIR);
    extract(archive_path, &extract_dir)?;
    let root = locate_template_root(&extract_dir)?;
    debug!("Template root: {}", root.display());
    Ok(root)
}

/// Loader for zip archives on the local filesystem.
pub struct ArchiveLoader<P: AsRef<Path>> {
    path: P,
}

impl<P: AsRef<Path>> ArchiveLoader<P> {
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

impl<P: AsRef<Path>> TemplateLoader for ArchiveLoader<P> {
    fn load(&self) -> Result<LoadedTemplate> {
        let path = self.path.as_ref();
        if !path.is_file() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: path.display().to_string(),
            });
        }

        let staging = staging_dir()?;
        let root = unpack(path, staging.path())?;
        Ok(LoadedTemplate::staged(root, staging))
    }
}

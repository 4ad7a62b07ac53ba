//! Template tree walk: copies every retained path of the template into the
//! output directory, rewriting file content on the way.

use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};
use crate::ignore::ExclusionFilter;
use crate::rewriter::ContentRewriter;

/// Counters reported after a completed walk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSummary {
    pub directories: usize,
    pub files: usize,
    pub skipped: usize,
}

fn walk_error<P: AsRef<Path>>(path: P, reason: impl ToString) -> Error {
    Error::WalkError {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

fn canonicalize(path: &Path) -> Result<PathBuf> {
    path.canonicalize().map_err(|e| walk_error(path, e))
}

fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| walk_error(path, e))
}

fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    fs::write(path, content).map_err(|e| walk_error(path, e))
}

/// Reads `source`, rewrites it when it is UTF-8 text and writes the result to
/// `target`. Other content is copied byte for byte.
fn rewrite_file(source: &Path, target: &Path, rewriter: &dyn ContentRewriter) -> Result<()> {
    let bytes = fs::read(source).map_err(|e| walk_error(source, e))?;
    match String::from_utf8(bytes) {
        Ok(text) => write_file(target, rewriter.rewrite(&text).as_bytes()),
        Err(e) => {
            warn!("Copying non UTF-8 file verbatim: {}", source.display());
            write_file(target, &e.into_bytes())
        }
    }
}

/// Walks `template_root` in pre-order and materializes it under `output_root`.
///
/// Paths matched by `filter` are skipped; a matching directory is not descended
/// into. When `output_root` lies inside `template_root` it is skipped as well,
/// so the walk never copies its own output. Directory and file modes follow the
/// template. Directory modes are applied once the walk is complete so read-only
/// directories still receive their content.
///
/// # Errors
/// * `Error::WalkError` on the first I/O failure; output written so far is kept
pub fn process_template<P: AsRef<Path>, Q: AsRef<Path>>(
    template_root: P,
    output_root: Q,
    rewriter: &dyn ContentRewriter,
    filter: &ExclusionFilter,
) -> Result<ProcessSummary> {
    let template_root = canonicalize(template_root.as_ref())?;
    let template_root = template_root.as_path();
    let output_root = output_root.as_ref();
    create_dir_all(output_root)?;
    let nested_output = Some(canonicalize(output_root)?)
        .filter(|output| output.starts_with(template_root) && output != template_root);
    let mut summary = ProcessSummary::default();
    let skipped = Cell::new(0usize);
    let mut dir_permissions: Vec<(PathBuf, fs::Permissions)> = Vec::new();

    debug!(
        "Processing template '{}' into '{}'",
        template_root.display(),
        output_root.display()
    );

    let is_retained = |entry: &DirEntry| -> bool {
        if nested_output.as_deref() == Some(entry.path()) {
            debug!("Skipping output directory: {}", entry.path().display());
            return false;
        }
        let excluded = match entry.path().strip_prefix(template_root) {
            Ok(relative) => filter.is_excluded(relative),
            Err(_) => false,
        };
        if excluded {
            skipped.set(skipped.get() + 1);
            debug!("Skipping excluded path: {}", entry.path().display());
        }
        !excluded
    };

    let walker = WalkDir::new(template_root).sort_by_file_name().into_iter();
    for entry in walker.filter_entry(is_retained) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| template_root.into());
            walk_error(path, e)
        })?;
        let relative = entry
            .path()
            .strip_prefix(template_root)
            .map_err(|e| walk_error(entry.path(), e))?;
        let target = output_root.join(relative);
        let metadata = fs::metadata(entry.path()).map_err(|e| walk_error(entry.path(), e))?;

        if metadata.is_dir() {
            debug!("Creating directory: {}", target.display());
            create_dir_all(&target)?;
            dir_permissions.push((target, metadata.permissions()));
            summary.directories += 1;
        } else {
            debug!("Writing file: {}", target.display());
            rewrite_file(entry.path(), &target, rewriter)?;
            fs::set_permissions(&target, metadata.permissions())
                .map_err(|e| walk_error(&target, e))?;
            summary.files += 1;
        }
    }

    for (dir, permissions) in dir_permissions.into_iter().rev() {
        fs::set_permissions(&dir, permissions).map_err(|e| walk_error(&dir, e))?;
    }

    summary.skipped = skipped.get();
    Ok(summary)
}

//! Safe expansion of zip archives.
//!
//! Every entry is resolved lexically against the destination directory before
//! anything is written; an entry that would land outside of it aborts the whole
//! extraction. Entries written before a failure are not rolled back.

use std::fs::{self, File};
use std::io;
use std::path::{Component, Path, PathBuf};

use log::debug;
use zip::ZipArchive;

use crate::error::{Error, Result};

/// Lexically normalizes `path`: drops `.` components and resolves `..` against
/// the preceding component. Leading `..` components that cannot be resolved are kept.
pub fn clean_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.as_ref().components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}

/// Resolves an archive entry name against `dest_dir`.
///
/// # Errors
/// * `Error::PathTraversalError` unless the result lies strictly inside `dest_dir`
pub fn resolve_entry_path(dest_dir: &Path, entry_name: &str) -> Result<PathBuf> {
    let root = clean_path(dest_dir);
    let target = clean_path(root.join(entry_name));
    let contained = if root.as_os_str().is_empty() {
        matches!(target.components().next(), Some(Component::Normal(_)))
    } else {
        target != root && target.starts_with(&root)
    };
    if !contained {
        return Err(Error::PathTraversalError {
            entry: entry_name.to_string(),
        });
    }
    Ok(target)
}

/// Extracts the zip archive at `archive_path` into `dest_dir`.
///
/// # Errors
/// * `Error::PathTraversalError` if an entry escapes `dest_dir`
/// * `Error::ExtractionError` if the archive is corrupt or an entry cannot be written
pub fn extract<P: AsRef<Path>, Q: AsRef<Path>>(archive_path: P, dest_dir: Q) -> Result<()> {
    let archive_path = archive_path.as_ref();
    let dest_dir = dest_dir.as_ref();
    let extraction_error = |reason: String| Error::ExtractionError {
        archive: archive_path.display().to_string(),
        reason,
    };

    debug!(
        "Extracting '{}' into '{}'",
        archive_path.display(),
        dest_dir.display()
    );

    let file = File::open(archive_path).map_err(|e| extraction_error(e.to_string()))?;
    let mut archive = ZipArchive::new(file).map_err(|e| extraction_error(e.to_string()))?;

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| extraction_error(e.to_string()))?;
        let entry_name = entry.name().to_string();
        let target = resolve_entry_path(dest_dir, &entry_name)?;

        if entry.is_dir() {
            fs::create_dir_all(&target).map_err(|e| extraction_error(e.to_string()))?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| extraction_error(e.to_string()))?;
        }
        let mut out = File::create(&target).map_err(|e| extraction_error(e.to_string()))?;
        io::copy(&mut entry, &mut out)
            .map_err(|e| extraction_error(format!("{}: {}", entry_name, e)))?;

        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode().filter(|mode| mode & 0o777 != 0) {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&target, fs::Permissions::from_mode(mode & 0o7777))
                .map_err(|e| extraction_error(e.to_string()))?;
        }
    }

    debug!("Extracted {} entries", archive.len());
    Ok(())
}

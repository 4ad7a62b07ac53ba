//! Error handling for the Skeleton application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for Skeleton operations.
///
/// Every variant is terminal for the current invocation: nothing is retried
/// internally and partially written output is left in place.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The destination directory exists before materialization started.
    #[error("Directory '{destination}' already exists, choose another project name.")]
    DestinationExistsError { destination: String },

    /// The template archive could not be fetched.
    #[error("Failed to fetch template from '{url}': {reason}.")]
    AcquisitionError { url: String, reason: String },

    /// The server answered the template request with a non-success status.
    #[error("Failed to fetch template from '{url}': server responded with status {status}.")]
    DownloadStatusError { url: String, status: u16 },

    /// The archive is corrupt or could not be written out.
    #[error("Failed to extract archive '{archive}': {reason}.")]
    ExtractionError { archive: String, reason: String },

    /// An archive entry resolves outside of the extraction directory.
    #[error("Illegal file path in archive: '{entry}'.")]
    PathTraversalError { entry: String },

    /// Neither the start directory nor its parent carries the scaffold markers.
    #[error("Scaffold root not found from '{start}' (checked the directory and its parent).")]
    RootNotFoundError { start: String },

    /// A local template path does not exist or is not a directory.
    #[error("Template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },

    /// The extracted archive has no top-level directory to use as template root.
    #[error("Unable to find the template directory in '{archive}'.")]
    TemplateRootMissingError { archive: String },

    /// I/O failure while walking the template or writing the destination tree.
    #[error("Failed to process '{path}': {reason}.")]
    WalkError { path: String, reason: String },

    /// Represents errors that occur during user interaction
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Represents errors in template source or answers configuration
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}

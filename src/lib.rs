//! Skeleton materializes a new project tree from a scaffold template.
//! It obtains the template (remote zip archive, local archive, local directory
//! or the enclosing scaffold repository), walks it while applying exclusion
//! rules, and substitutes the project's identifiers into every retained file.

/// Casing transforms applied to the project name
pub mod case;

/// Command-line interface module for the Skeleton application
pub mod cli;

/// Run configuration: template source and output root
pub mod config;

/// Static tables: default template URL, placeholder tokens, exclusions, markers
pub mod constants;

/// Error types and handling for the Skeleton application
pub mod error;

/// Zip extraction with path traversal protection
pub mod extractor;

/// Fixed exclusion rules applied while walking the template
pub mod ignore;

/// Template acquisition from remote archives, local archives and directories
pub mod loader;

/// Logger initialization
pub mod logger;

/// Project metadata record
pub mod meta;

/// Template tree walk
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Materialization orchestration
pub mod render;

/// Ordered placeholder substitution
pub mod rewriter;

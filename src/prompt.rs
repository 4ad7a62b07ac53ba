//! Interactive collection of project metadata.
//! Fields already provided on the command line or through preloaded answers
//! are never asked again.

use dialoguer::Input;
use log::debug;

use crate::constants::DEFAULT_PROJECT_NAME;
use crate::error::{Error, Result};
use crate::meta::ProjectMeta;

/// Source of answers for missing metadata fields.
pub trait Prompter {
    /// Asks for a free text value, returning `default` when the user accepts it.
    fn input(&self, prompt: &str, default: &str) -> Result<String>;
}

/// Terminal prompter backed by `dialoguer`.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: &str) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }
        input
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// Base name of the working directory, used as the default project name.
pub fn current_dir_name() -> String {
    std::env::current_dir()
        .ok()
        .and_then(|dir| dir.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string())
}

/// Completes `meta` and validates it.
///
/// When `interactive` is false nothing is asked: missing fields take their
/// defaults and a missing name fails validation.
///
/// # Errors
/// * `Error::PromptError` if the terminal interaction fails
/// * `Error::ValidationError` if the completed metadata is invalid
pub fn collect_project_meta(
    mut meta: ProjectMeta,
    prompter: &dyn Prompter,
    interactive: bool,
) -> Result<ProjectMeta> {
    if interactive {
        if meta.name.trim().is_empty() {
            meta.name = prompter
                .input("Project name", &current_dir_name())?
                .trim()
                .to_string();
        }
        if meta.description.trim().is_empty() {
            meta.description = prompter.input("Project description", "")?.trim().to_string();
        }
        if meta.module.trim().is_empty() {
            let default_module = ProjectMeta::default_module(meta.name.trim());
            meta.module = prompter
                .input("Module path", &default_module)?
                .trim()
                .to_string();
        }
    } else {
        debug!("Skipping prompts, using provided answers and defaults");
    }

    meta.apply_defaults();
    meta.validate()?;
    Ok(meta)
}

//! Project metadata handed to the materialization engine.

use std::io::Read;
use std::path::{Component, Path};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MODULE_PREFIX, DEFAULT_VERSION};
use crate::error::{Error, Result};

/// Identifiers substituted into the generated project.
///
/// Empty strings stand for "not provided". After [`ProjectMeta::apply_defaults`]
/// the version and module are always set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectMeta {
    /// Project name, also the destination directory name
    pub name: String,
    /// Free text description, empty means "leave the template's description"
    #[serde(alias = "desc")]
    pub description: String,
    pub version: String,
    /// Module path replacing the template's own module path
    pub module: String,
    /// Override of the default remote archive location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_url: Option<String>,
}

impl ProjectMeta {
    /// Creates metadata for `name` with every other field defaulted.
    /// Surrounding whitespace is dropped from the name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        let mut meta = Self {
            name: name.into().trim().to_string(),
            ..Default::default()
        };
        meta.apply_defaults();
        meta
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_version<S: Into<String>>(mut self, version: S) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_module<S: Into<String>>(mut self, module: S) -> Self {
        self.module = module.into();
        self
    }

    /// Module path derived from the project name.
    pub fn default_module(name: &str) -> String {
        format!("{}/{}", DEFAULT_MODULE_PREFIX, name)
    }

    /// Fills in the version and, when a name is known, the module path.
    pub fn apply_defaults(&mut self) {
        if self.version.trim().is_empty() {
            self.version = DEFAULT_VERSION.to_string();
        }
        if self.module.trim().is_empty() && !self.name.trim().is_empty() {
            self.module = Self::default_module(self.name.trim());
        }
    }

    /// Overlays every non-empty field of `other` on top of `self`.
    pub fn merge(mut self, other: ProjectMeta) -> Self {
        fn pick(current: &mut String, candidate: String) {
            if !candidate.trim().is_empty() {
                *current = candidate.trim().to_string();
            }
        }
        pick(&mut self.name, other.name);
        pick(&mut self.description, other.description);
        pick(&mut self.version, other.version);
        pick(&mut self.module, other.module);
        if other.template_url.is_some() {
            self.template_url = other.template_url;
        }
        self
    }

    /// Parses preloaded answers, trying JSON first and YAML second.
    /// Blank input yields empty metadata.
    pub fn from_answers(content: &str) -> Result<Self> {
        let content = content.trim();
        if content.is_empty() {
            debug!("No preloaded answers provided");
            return Ok(Self::default());
        }
        match serde_json::from_str(content) {
            Ok(meta) => Ok(meta),
            Err(json_err) => {
                debug!("Answers are not JSON ({}), trying YAML", json_err);
                serde_yaml::from_str(content).map_err(|e| {
                    Error::ConfigError(format!("Invalid answers format: {}", e))
                })
            }
        }
    }

    /// Reads preloaded answers from standard input.
    pub fn from_stdin() -> Result<Self> {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Self::from_answers(&buffer)
    }

    /// Checks the invariants required before materialization starts.
    ///
    /// # Errors
    /// * `Error::ValidationError` if the name is empty or is not a single
    ///   path component, or if the version is empty
    pub fn validate(&self) -> Result<()> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::ValidationError(
                "project name must not be empty".into(),
            ));
        }
        let mut components = Path::new(name).components();
        let single_normal = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !single_normal || name.contains(['/', '\\']) {
            return Err(Error::ValidationError(format!(
                "project name '{}' must be a plain directory name",
                name
            )));
        }
        if self.version.trim().is_empty() {
            return Err(Error::ValidationError(
                "project version must not be empty".into(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Display for ProjectMeta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  Name:        {}", self.name)?;
        writeln!(f, "  Description: {}", self.description)?;
        writeln!(f, "  Version:     {}", self.version)?;
        write!(f, "  Module:      {}", self.module)
    }
}

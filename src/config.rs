//! Run configuration: where the template comes from and where the project goes.

use std::path::PathBuf;

use log::debug;

use crate::cli::Args;
use crate::error::Result;
use crate::loader::TemplateSource;
use crate::meta::ProjectMeta;

/// Settings of one materialization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: TemplateSource,
    /// Directory the project directory is created in
    pub output_root: PathBuf,
}

impl Config {
    pub fn new<P: Into<PathBuf>>(source: TemplateSource, output_root: P) -> Self {
        Self {
            source,
            output_root: output_root.into(),
        }
    }

    /// Picks the template source: local discovery, then an explicit template,
    /// then the metadata's template URL, then the default archive.
    pub fn resolve_source(
        template: Option<&str>,
        discover: bool,
        meta: &ProjectMeta,
    ) -> TemplateSource {
        if discover {
            return TemplateSource::Discover;
        }
        match template.or(meta.template_url.as_deref()) {
            Some(template) if !template.trim().is_empty() => {
                TemplateSource::from_string(template.trim())
            }
            _ => TemplateSource::default(),
        }
    }

    /// Builds the configuration for `args`, generating into the working directory.
    pub fn from_args(args: &Args, meta: &ProjectMeta) -> Result<Self> {
        let source = Self::resolve_source(args.template.as_deref(), args.local, meta);
        let output_root = std::env::current_dir()?;
        debug!("Template source: {}", source);
        Ok(Self::new(source, output_root))
    }
}

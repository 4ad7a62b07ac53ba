//! Materialization orchestration: destination check, template acquisition,
//! then the rewriting walk into the new project directory.

use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};
use crate::ignore::ExclusionFilter;
use crate::loader::TemplateLoader;
use crate::meta::ProjectMeta;
use crate::processor::{process_template, ProcessSummary};
use crate::rewriter::RuleRewriter;

/// Steps of a materialization run. A failing step ends the run in `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    CheckDestination,
    Acquiring,
    Walking,
    Done,
    Failed,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Idle => "idle",
            Stage::CheckDestination => "check destination",
            Stage::Acquiring => "acquiring template",
            Stage::Walking => "walking template",
            Stage::Done => "done",
            Stage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub destination: PathBuf,
    pub summary: ProcessSummary,
}

/// Materializes projects below an output root.
#[derive(Debug, Clone)]
pub struct Renderer {
    output_root: PathBuf,
    filter: ExclusionFilter,
}

impl Renderer {
    /// Creates a renderer using the default exclusion list.
    pub fn new<P: Into<PathBuf>>(output_root: P) -> Result<Self> {
        Ok(Self {
            output_root: output_root.into(),
            filter: ExclusionFilter::default_excludes()?,
        })
    }

    pub fn with_filter(mut self, filter: ExclusionFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Directory the project named `name` is generated into.
    pub fn destination(&self, name: &str) -> PathBuf {
        self.output_root.join(name.trim())
    }

    /// Generates the project described by `meta` from the template provided by `loader`.
    ///
    /// The destination must not exist; this is checked before the loader runs,
    /// so a refused run has no side effect. A failure after that point leaves the
    /// partially written destination in place.
    ///
    /// # Errors
    /// * `Error::ValidationError` if `meta` is incomplete
    /// * `Error::DestinationExistsError` if the destination already exists
    /// * any error of the loader or of the walk
    pub fn render(
        &self,
        meta: &ProjectMeta,
        loader: &dyn TemplateLoader,
    ) -> Result<RenderReport> {
        let mut stage = Stage::Idle;
        let result = self.run(meta, loader, &mut stage);
        match &result {
            Ok(report) => debug!("Rendered '{}'", report.destination.display()),
            Err(e) => debug!("Stage '{}' -> '{}': {}", stage, Stage::Failed, e),
        }
        result
    }

    fn run(
        &self,
        meta: &ProjectMeta,
        loader: &dyn TemplateLoader,
        stage: &mut Stage,
    ) -> Result<RenderReport> {
        advance(stage, Stage::CheckDestination);
        meta.validate()?;
        let destination = self.destination(&meta.name);
        ensure_destination_free(&destination)?;

        advance(stage, Stage::Acquiring);
        let template = loader.load()?;

        advance(stage, Stage::Walking);
        let rewriter = RuleRewriter::new(meta);
        let summary = process_template(template.root(), &destination, &rewriter, &self.filter)?;

        advance(stage, Stage::Done);
        Ok(RenderReport {
            destination,
            summary,
        })
    }
}

fn advance(stage: &mut Stage, next: Stage) {
    debug!("Stage '{}' -> '{}'", stage, next);
    *stage = next;
}

/// Fails when anything, including a dangling symlink, occupies `destination`.
/// Only a missing path counts as free; other lookup failures are returned.
pub fn ensure_destination_free<P: AsRef<Path>>(destination: P) -> Result<()> {
    let destination = destination.as_ref();
    match destination.symlink_metadata() {
        Ok(_) => Err(Error::DestinationExistsError {
            destination: destination.display().to_string(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Generates `meta` below `output_root` with the default exclusion list.
pub fn render<P: Into<PathBuf>>(
    meta: &ProjectMeta,
    loader: &dyn TemplateLoader,
    output_root: P,
) -> Result<RenderReport> {
    Renderer::new(output_root)?.render(meta, loader)
}

//! Command-line interface implementation for Skeleton.
//! Provides argument parsing using clap.

use clap::Parser;

use crate::meta::ProjectMeta;

/// Command-line arguments structure for Skeleton.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Skeleton: create a new project from the scaffold template",
    long_about = None
)]
pub struct Args {
    /// Project name, also the name of the generated directory
    #[arg(value_name = "NAME")]
    pub project: Option<String>,

    /// Project name (takes precedence over NAME)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Project description
    #[arg(short = 'd', long = "desc")]
    pub description: Option<String>,

    /// Project version [default: 1.0.0]
    #[arg(long = "project-version", value_name = "VERSION")]
    pub project_version: Option<String>,

    /// Module path replacing the template's module path
    #[arg(short, long)]
    pub module: Option<String>,

    /// Template zip URL, local zip archive or template directory
    #[arg(short, long, value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Use the scaffold repository enclosing the current directory as template
    #[arg(long, conflicts_with = "template")]
    pub local: bool,

    /// Read project metadata as JSON or YAML from stdin, without prompting
    #[arg(short, long)]
    pub stdin: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Metadata given on the command line. Unset fields are empty.
    pub fn project_meta(&self) -> ProjectMeta {
        ProjectMeta {
            name: self
                .name
                .clone()
                .or_else(|| self.project.clone())
                .unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            version: self.project_version.clone().unwrap_or_default(),
            module: self.module.clone().unwrap_or_default(),
            template_url: None,
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling on invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}

//! Skeleton's main application entry point.
//! Handles command-line argument parsing, metadata collection and hands the
//! completed metadata to the materialization engine.

use skeleton::{
    cli::{get_args, Args},
    config::Config,
    error::{default_error_handler, Result},
    loader::get_loader,
    logger::init_logger,
    meta::ProjectMeta,
    prompt::{collect_project_meta, DialoguerPrompter},
    render::Renderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Collects project metadata from flags, stdin answers and prompts
/// 2. Resolves the template source
/// 3. Materializes the project into `./<name>`
fn run(args: Args) -> Result<()> {
    let prompt = DialoguerPrompter::new();

    let preloaded = if args.stdin {
        ProjectMeta::from_stdin()?
    } else {
        ProjectMeta::default()
    };
    let meta = collect_project_meta(preloaded.merge(args.project_meta()), &prompt, !args.stdin)?;

    println!("Project information:\n{}\n", meta);

    let config = Config::from_args(&args, &meta)?;
    println!("Using template from the {}", config.source);

    let loader = get_loader(&config.source);
    let report = Renderer::new(&config.output_root)?.render(&meta, &*loader)?;

    println!(
        "Generated {} files in {} directories ({} paths excluded).",
        report.summary.files, report.summary.directories, report.summary.skipped
    );
    println!("Project created successfully in {}.", report.destination.display());
    println!();
    println!("Next steps:");
    println!("  1. cd {}", meta.name);
    println!("  2. make backend-dev");
    println!("  3. make frontend-dev");
    Ok(())
}

//! Common constants used throughout the Skeleton application.

/// Archive fetched when neither a template nor a template URL is given.
pub const DEFAULT_TEMPLATE_URL: &str = "https://github.com/richer421/ai_skeleton/archive/main.zip";

/// Version assigned to a project when none is given.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Prefix of the module path derived from the project name.
pub const DEFAULT_MODULE_PREFIX: &str = "github.com/user";

/// Fallback project name when the working directory has no usable name.
pub const DEFAULT_PROJECT_NAME: &str = "my_project";

/// Placeholder tokens carried by the scaffold template.
pub mod tokens {
    /// Fully-qualified module path of the template backend
    pub const MODULE_PATH: &str = "github.com/richer/ai_skeleton";
    /// snake_case project identifier
    pub const SNAKE_NAME: &str = "ai_skeleton";
    /// Human-readable title
    pub const TITLE_NAME: &str = "AI Skeleton";
    /// kebab-case project identifier
    pub const KEBAB_NAME: &str = "ai-skeleton";
    /// Version written in the template's metadata files
    pub const VERSION: &str = "1.0.0";
}

/// Relative path prefixes never copied into generated projects.
pub const EXCLUDED_PREFIXES: [&str; 10] = [
    "cli",
    ".git",
    "backend/tmp",
    "backend/bin",
    "frontend/node_modules",
    "frontend/dist",
    "requirements",
    ".github",
    ".vscode",
    ".idea",
];

/// Paths that must all exist for a directory to qualify as scaffold root.
pub const ROOT_MARKERS: [&str; 4] = [
    "backend/go.mod",
    "frontend/package.json",
    "Makefile",
    "README.md",
];

//! Placeholder substitution for template file content.
//!
//! The substitution passes form a fixed, ordered pipeline of [`Rule`]s built by
//! [`RuleRewriter::new`]. The module path goes first because the identifiers
//! replaced afterwards are substrings of its last segment. Each identifier pass
//! writes a placeholder slot rather than the final value, and a [`Rule::Fill`]
//! pass swaps the values in once all identifiers are gone, so a value that
//! itself contains a template identifier is never rewritten again. The two
//! line-oriented metadata rules go last so they see the substituted values.

use log::{debug, trace};

use crate::case::{to_kebab_case, to_title};
use crate::constants::tokens;
use crate::meta::ProjectMeta;

/// Rewrites the text content of a template file.
pub trait ContentRewriter {
    /// Returns `content` with every placeholder substituted.
    fn rewrite(&self, content: &str) -> String;
}

/// A single substitution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Replaces every literal occurrence of `from` with `to`.
    Replace { from: String, to: String },
    /// Replaces each slot with its value.
    Fill { slots: Vec<(String, String)> },
    /// YAML-like `project:` block: quoted name and version fields, and the first
    /// `description:` line when a description is given.
    ProjectBlock {
        name: String,
        version: String,
        description: Option<String>,
    },
    /// Package-descriptor-like block keyed by `"name":` and `"version":`.
    PackageDescriptor {
        name: String,
        version: String,
        description: Option<String>,
    },
}

impl Rule {
    /// Applies this pass to `content`. Content without the expected markers is
    /// returned unchanged.
    pub fn apply(&self, content: String) -> String {
        match self {
            Rule::Replace { from, to } => {
                if content.contains(from.as_str()) {
                    content.replace(from.as_str(), to)
                } else {
                    content
                }
            }
            Rule::Fill { slots } => slots.iter().fold(content, |acc, (slot, value)| {
                if acc.contains(slot.as_str()) {
                    acc.replace(slot.as_str(), value)
                } else {
                    acc
                }
            }),
            Rule::ProjectBlock {
                name,
                version,
                description,
            } => {
                if !(content.contains("project:") && content.contains("name:")) {
                    trace!("No project block, skipping project metadata rule");
                    return content;
                }
                let content = content
                    .replace(
                        &format!("name: {}", quote(tokens::SNAKE_NAME)),
                        &format!("name: {}", quote(name)),
                    )
                    .replace(
                        &format!("version: {}", quote(tokens::VERSION)),
                        &format!("version: {}", quote(version)),
                    );
                match description {
                    Some(description) => {
                        let mut replaced = false;
                        map_lines(&content, |line| {
                            if replaced || !line.contains("description:") {
                                return None;
                            }
                            replaced = true;
                            Some(format!("  description: {}", quote(description)))
                        })
                    }
                    None => content,
                }
            }
            Rule::PackageDescriptor {
                name,
                version,
                description,
            } => {
                if !(content.contains("\"name\":") && content.contains("\"version\":")) {
                    trace!("No package descriptor, skipping package metadata rule");
                    return content;
                }
                map_lines(&content, |line| {
                    if line.contains("\"name\":") {
                        Some(format!("  \"name\": {},", quote(name)))
                    } else if line.contains("\"version\":") {
                        Some(format!("  \"version\": {},", quote(version)))
                    } else {
                        match description {
                            Some(description) if line.contains("\"description\":") => {
                                Some(format!("  \"description\": {},", quote(description)))
                            }
                            _ => None,
                        }
                    }
                })
            }
        }
    }
}

/// Double-quoted string literal, valid for both JSON and YAML.
fn quote(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Splits on `\n`, lets `rewrite` replace a line, and joins again.
/// A trailing `\r` is kept on rewritten lines.
fn map_lines<F>(content: &str, mut rewrite: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    content
        .split('\n')
        .map(|raw| {
            let (line, line_end) = match raw.strip_suffix('\r') {
                Some(line) => (line, "\r"),
                None => (raw, ""),
            };
            match rewrite(line) {
                Some(new_line) => format!("{}{}", new_line, line_end),
                None => raw.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Placeholder written by identifier pass `index`. Private use code points keep
/// it clear of any template identifier and of ordinary file content.
fn slot(index: usize) -> String {
    format!("\u{E000}{}\u{E001}", index)
}

/// Ordered rule pipeline for one project.
#[derive(Debug, Clone)]
pub struct RuleRewriter {
    rules: Vec<Rule>,
}

impl RuleRewriter {
    /// Builds the pipeline for `meta`.
    pub fn new(meta: &ProjectMeta) -> Self {
        let name = meta.name.trim();
        let description = Some(meta.description.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        let identifiers = [
            (tokens::MODULE_PATH, meta.module.trim().to_string()),
            (tokens::SNAKE_NAME, name.to_string()),
            (tokens::TITLE_NAME, to_title(name)),
            (tokens::KEBAB_NAME, to_kebab_case(name)),
        ];

        let mut rules = Vec::with_capacity(identifiers.len() + 3);
        let mut slots = Vec::with_capacity(identifiers.len());
        for (index, (token, value)) in identifiers.into_iter().enumerate() {
            rules.push(Rule::Replace {
                from: token.to_string(),
                to: slot(index),
            });
            slots.push((slot(index), value));
        }
        rules.push(Rule::Fill { slots });
        rules.push(Rule::ProjectBlock {
            name: name.to_string(),
            version: meta.version.trim().to_string(),
            description: description.clone(),
        });
        rules.push(Rule::PackageDescriptor {
            name: format!("{}-frontend", to_kebab_case(name)),
            version: meta.version.trim().to_string(),
            description,
        });
        debug!("Built {} substitution rules for '{}'", rules.len(), name);
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

impl ContentRewriter for RuleRewriter {
    fn rewrite(&self, content: &str) -> String {
        self.rules
            .iter()
            .fold(content.to_string(), |acc, rule| rule.apply(acc))
    }
}

/// Substitutes every placeholder of the template in `content` for `meta`.
pub fn rewrite(content: &str, meta: &ProjectMeta) -> String {
    RuleRewriter::new(meta).rewrite(content)
}

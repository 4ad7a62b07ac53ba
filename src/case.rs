//! Casing transforms applied to the project name.

/// Turns an underscore-delimited identifier into space-separated words,
/// each capitalized at its first character. The rest of each word is kept as is.
///
/// ```
/// use skeleton::case::to_title;
/// assert_eq!(to_title("my_app"), "My App");
/// ```
pub fn to_title(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Lowercases the identifier and replaces underscores with hyphens.
pub fn to_kebab_case(s: &str) -> String {
    s.to_lowercase().replace('_', "-")
}

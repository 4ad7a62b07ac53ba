use skeleton::case::{to_kebab_case, to_title};
use skeleton::meta::ProjectMeta;
use skeleton::rewriter::{rewrite, ContentRewriter, Rule, RuleRewriter};

fn demo_meta() -> ProjectMeta {
    ProjectMeta::new("demo").with_module("example.com/demo")
}

#[test]
fn test_to_title() {
    assert_eq!(to_title("my_app"), "My App");
    assert_eq!(to_title("app"), "App");
}

#[test]
fn test_to_kebab_case() {
    assert_eq!(to_kebab_case("My_App"), "my-app");
    assert_eq!(to_kebab_case("demo"), "demo");
}

#[test]
fn test_rewrite_replaces_every_identifier() {
    let content = "module github.com/richer/ai_skeleton\n\
                   import \"github.com/richer/ai_skeleton/internal/config\"\n\
                   // ai_skeleton | AI Skeleton | ai-skeleton\n";

    let result = rewrite(content, &demo_meta());

    assert!(!result.contains("github.com/richer"));
    assert!(!result.contains("ai_skeleton"));
    assert!(!result.contains("AI Skeleton"));
    assert!(!result.contains("ai-skeleton"));
    assert!(result.contains("module example.com/demo\n"));
    assert!(result.contains("\"example.com/demo/internal/config\""));
    assert!(result.contains("// demo | Demo | demo\n"));
}

#[test]
fn test_module_path_rule_runs_first() {
    let rewriter = RuleRewriter::new(&demo_meta());
    let rules = rewriter.rules();

    match &rules[0] {
        Rule::Replace { from, .. } => assert_eq!(from, "github.com/richer/ai_skeleton"),
        other => panic!("Expected Replace rule, got {:?}", other),
    }
    match &rules[4] {
        Rule::Fill { slots } => {
            assert_eq!(slots.len(), 4);
            assert_eq!(slots[0].1, "example.com/demo");
        }
        other => panic!("Expected Fill rule, got {:?}", other),
    }
    assert!(matches!(rules[5], Rule::ProjectBlock { .. }));
    assert!(matches!(rules[6], Rule::PackageDescriptor { .. }));
}

#[test]
fn test_module_containing_identifier_is_kept() {
    let meta = ProjectMeta::new("bar").with_module("github.com/acme/ai-skeleton-pro");
    let content = "module github.com/richer/ai_skeleton\n// ai-skeleton\n";

    let result = rewrite(content, &meta);

    assert_eq!(result, "module github.com/acme/ai-skeleton-pro\n// bar\n");
}

#[test]
fn test_name_containing_identifier_is_kept() {
    let meta = ProjectMeta::new("ai-skeleton-pro");
    let content = "app: ai_skeleton\nimage: ai-skeleton\n";

    let result = rewrite(content, &meta);

    assert_eq!(result, "app: ai-skeleton-pro\nimage: ai-skeleton-pro\n");
}

#[test]
fn test_name_is_trimmed() {
    let meta = ProjectMeta {
        name: " foo ".to_string(),
        ..ProjectMeta::new("foo")
    };

    let result = rewrite("name: ai_skeleton\n# AI Skeleton\n", &meta);

    assert_eq!(result, "name: foo\n# Foo\n");
}

#[test]
fn test_rewrite_title_and_kebab_of_compound_name() {
    let meta = ProjectMeta::new("order_service");
    let result = rewrite("# AI Skeleton\nimage: ai-skeleton:latest\n", &meta);
    assert_eq!(result, "# Order Service\nimage: order-service:latest\n");
}

#[test]
fn test_project_block_name_and_version() {
    let meta = ProjectMeta::new("foo").with_version("2.0.0");
    let content = "project:\n  name: \"ai_skeleton\"\n  version: \"1.0.0\"\n";

    let result = rewrite(content, &meta);

    assert_eq!(result, "project:\n  name: \"foo\"\n  version: \"2.0.0\"\n");
}

#[test]
fn test_project_block_description_first_line_only() {
    let meta = ProjectMeta::new("foo").with_description("Order handling");
    let content = concat!(
        "project:\n",
        "  name: \"ai_skeleton\"\n",
        "  description: \"old\"\n",
        "other:\n",
        "  description: \"keep\"\n",
    );

    let result = rewrite(content, &meta);

    assert_eq!(
        result,
        concat!(
            "project:\n",
            "  name: \"foo\"\n",
            "  description: \"Order handling\"\n",
            "other:\n",
            "  description: \"keep\"\n",
        )
    );
}

#[test]
fn test_project_block_without_description_keeps_line() {
    let meta = ProjectMeta::new("foo");
    let content = "project:\n  name: \"ai_skeleton\"\n  description: \"old\"\n";

    let result = rewrite(content, &meta);

    assert!(result.contains("  description: \"old\"\n"));
}

#[test]
fn test_version_untouched_without_project_marker() {
    let meta = ProjectMeta::new("foo").with_version("2.0.0");
    let content = "name: \"tool\"\nversion: \"1.0.0\"\n";

    assert_eq!(rewrite(content, &meta), content);
}

#[test]
fn test_package_descriptor() {
    let meta = ProjectMeta::new("My_App")
        .with_version("0.3.0")
        .with_description("Shop frontend");
    let content = concat!(
        "{\n",
        "  \"name\": \"ai-skeleton\",\n",
        "  \"version\": \"1.0.0\",\n",
        "  \"description\": \"x\",\n",
        "  \"private\": true\n",
        "}",
    );

    let result = rewrite(content, &meta);

    assert_eq!(
        result,
        concat!(
            "{\n",
            "  \"name\": \"my-app-frontend\",\n",
            "  \"version\": \"0.3.0\",\n",
            "  \"description\": \"Shop frontend\",\n",
            "  \"private\": true\n",
            "}",
        )
    );
}

#[test]
fn test_package_descriptor_requires_both_keys() {
    let meta = ProjectMeta::new("foo").with_version("2.0.0");
    let content = "{\n  \"name\": \"something\"\n}\n";

    assert_eq!(rewrite(content, &meta), content);
}

#[test]
fn test_package_descriptor_description_needs_value() {
    let meta = ProjectMeta::new("foo");
    let content = concat!(
        "{\n",
        "  \"name\": \"a\",\n",
        "  \"version\": \"1.0.0\",\n",
        "  \"description\": \"kept\",\n",
        "}",
    );

    let result = rewrite(content, &meta);

    assert!(result.contains("  \"description\": \"kept\",\n"));
    assert!(result.contains("  \"name\": \"foo-frontend\",\n"));
}

#[test]
fn test_rule_apply_without_markers_is_identity() {
    let rule = Rule::ProjectBlock {
        name: "foo".to_string(),
        version: "2.0.0".to_string(),
        description: Some("unused".to_string()),
    };
    let content = "description: \"no project block here\"\n".to_string();
    assert_eq!(rule.apply(content.clone()), content);
}

#[test]
fn test_rewrite_plain_text_unchanged() {
    let rewriter = RuleRewriter::new(&demo_meta());
    let content = "fn main() {\n    println!(\"hello\");\n}\n";
    assert_eq!(rewriter.rewrite(content), content);
}

use clap::Parser;
use skeleton::cli::Args;
use std::ffi::OsString;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("skeleton")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["demo"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.project.as_deref(), Some("demo"));
    assert!(parsed.template.is_none());
    assert!(!parsed.local);
    assert!(!parsed.stdin);
    assert!(!parsed.verbose);
}

#[test]
fn test_no_args() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();
    let meta = parsed.project_meta();
    assert!(meta.name.is_empty());
    assert!(meta.version.is_empty());
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--name",
        "shop",
        "--desc",
        "Online shop",
        "--project-version",
        "0.2.0",
        "--module",
        "example.com/shop",
        "--template",
        "https://example.com/template.zip",
        "--verbose",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();
    let meta = parsed.project_meta();

    assert_eq!(meta.name, "shop");
    assert_eq!(meta.description, "Online shop");
    assert_eq!(meta.version, "0.2.0");
    assert_eq!(meta.module, "example.com/shop");
    assert_eq!(
        parsed.template.as_deref(),
        Some("https://example.com/template.zip")
    );
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&[
        "-n",
        "shop",
        "-d",
        "desc",
        "-m",
        "example.com/shop",
        "-s",
        "-v",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.name.as_deref(), Some("shop"));
    assert!(parsed.stdin);
    assert!(parsed.verbose);
}

#[test]
fn test_name_flag_wins_over_positional() {
    let args = make_args(&["--name", "flag_name", "positional_name"]);
    let parsed = Args::try_parse_from(args).unwrap();
    assert_eq!(parsed.project_meta().name, "flag_name");
}

#[test]
fn test_local_conflicts_with_template() {
    let args = make_args(&["demo", "--local", "--template", "./template"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["demo", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}

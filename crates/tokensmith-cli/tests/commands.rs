use std::path::Path;

use clap::Parser;
use tokensmith_cli::{run, Cli};

fn run_args(args: &[&str]) -> (anyhow::Result<()>, String) {
    let mut argv = vec!["tokensmith"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).expect("arguments parse");

    let mut out = Vec::new();
    let result = run(&cli, &mut out);
    (result, String::from_utf8(out).expect("utf-8 output"))
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("utf-8 temp path")
}

const VALID_THEME: &str = r##"
name: cli-theme
base:
  palette:
    paper: "#fafafa"
    ink: "#111111"
  spacing:
    sm: 0.5rem
  zIndex:
    modal: 10
light:
  bg:
    background: paper palette
dark:
  bg:
    background: ink palette
"##;

const DANGLING_THEME: &str = r##"
name: broken
base:
  palette:
    paper: "#fafafa"
light:
  bg:
    background: snow palette
"##;

#[test]
fn test_generate_writes_both_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let theme = dir.path().join("theme.yaml");
    std::fs::write(&theme, VALID_THEME).unwrap();
    let css = dir.path().join("out/styles/theme.css");
    let config = dir.path().join("out/lib/tailwind-theme.ts");

    let (result, stdout) = run_args(&[
        "generate",
        "--theme",
        path_arg(&theme),
        "--css",
        path_arg(&css),
        "--config",
        path_arg(&config),
    ]);
    result.unwrap();

    let css_text = std::fs::read_to_string(&css).unwrap();
    assert!(css_text.contains("  --mode-background: var(--color-paper);"));
    assert!(css_text.contains("  --z-modal: 10;"));

    let ts_text = std::fs::read_to_string(&config).unwrap();
    assert!(ts_text.contains("\"modal\": \"var(--zIndex-modal)\""));

    assert!(stdout.contains("Generated CSS variables at"));
    assert!(stdout.contains("Generated Tailwind config at"));
}

#[test]
fn test_generate_with_dangling_reference_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let theme = dir.path().join("theme.yaml");
    std::fs::write(&theme, DANGLING_THEME).unwrap();
    let css = dir.path().join("out/theme.css");
    let config = dir.path().join("out/theme.ts");

    let (result, stdout) = run_args(&[
        "generate",
        "--theme",
        path_arg(&theme),
        "--css",
        path_arg(&css),
        "--config",
        path_arg(&config),
    ]);

    let err = result.unwrap_err();
    assert!(format!("{:#}", err).contains("snow"));
    assert!(!dir.path().join("out").exists());
    assert!(stdout.is_empty());
}

#[test]
fn test_check_reports_valid_theme() {
    let dir = tempfile::tempdir().unwrap();
    let theme = dir.path().join("theme.json");
    std::fs::write(
        &theme,
        r##"{"name": "json-theme", "base": {"palette": {"a": "#aaa"}}, "light": {"bg": {"x": "a palette"}}}"##,
    )
    .unwrap();

    let (result, stdout) = run_args(&["check", "--theme", path_arg(&theme)]);
    result.unwrap();
    assert_eq!(stdout, "Theme 'json-theme' is valid\n");
}

#[test]
fn test_check_reports_field_path() {
    let dir = tempfile::tempdir().unwrap();
    let theme = dir.path().join("theme.yaml");
    std::fs::write(&theme, DANGLING_THEME).unwrap();

    let (result, _) = run_args(&["check", "--theme", path_arg(&theme)]);
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("light.bg.background"));
    assert!(message.contains("Available colors: paper"));
}

#[test]
fn test_check_demo_theme_by_default() {
    let (result, stdout) = run_args(&["check"]);
    result.unwrap();
    assert_eq!(stdout, "Theme 'my-theme' is valid\n");
}

#[test]
fn test_print_css_demo() {
    let (result, stdout) = run_args(&["print", "css"]);
    result.unwrap();
    assert!(stdout.starts_with(":root {\n"));
    assert!(stdout.contains("  --color-gray: #808080;"));
    assert!(stdout.ends_with("}\n"));
}

#[test]
fn test_print_config_demo() {
    let (result, stdout) = run_args(&["print", "config"]);
    result.unwrap();
    assert!(stdout.starts_with("// Auto-generated from theme tokens\n"));
    assert!(stdout.contains("\"container-lg\": \"var(--container-lg)\""));
}

#[test]
fn test_missing_theme_file() {
    let dir = tempfile::tempdir().unwrap();
    let theme = dir.path().join("nope.yaml");

    let (result, _) = run_args(&["check", "--theme", path_arg(&theme)]);
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("could not load theme"));
}

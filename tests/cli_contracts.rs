//! Output contracts for the CLI commands, driven through `CliContext`.

use std::fs;
use std::path::{Path, PathBuf};

use cmddoc::tooling::cli::{CliContext, Commands};
use tempfile::TempDir;

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("commands.json")
}

fn workspace() -> (CliContext, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    fs::copy(fixture(), temp_dir.path().join("commands.json")).unwrap();
    let cli = CliContext::new(temp_dir.path().to_path_buf(), None, None).unwrap();
    (cli, temp_dir)
}

fn render_json(cli: &CliContext, path: &str) -> serde_json::Value {
    let output = cli
        .execute(&Commands::Render {
            path: Some(path.to_string()),
            format: "json".to_string(),
        })
        .unwrap();
    serde_json::from_str(&output).unwrap()
}

#[test]
fn render_json_contract_has_required_fields() {
    let (cli, _temp) = workspace();
    let parsed = render_json(&cli, "#/orchestrator/users/get");

    assert_eq!(parsed["path"], "#/orchestrator/users/get");
    assert_eq!(parsed["view"], "operation");
    assert_eq!(parsed["canonical_path"], "/orchestrator/users/get");
    assert!(parsed["html"].as_str().unwrap().contains("<h2>Usage</h2>"));
}

#[test]
fn render_without_path_is_root() {
    let (cli, _temp) = workspace();
    let html = cli
        .execute(&Commands::Render {
            path: None,
            format: "text".to_string(),
        })
        .unwrap();

    assert!(html.starts_with("<h1>uipath</h1>"));
    assert!(html.contains("Command line interface to simplify"));
    assert!(html.contains("<code>uipath config --auth credentials</code>"));
    assert!(html.contains("<span>Default Value: false</span>"));
    assert!(html.contains("<span>Default Value: 30</span>"));
    // An empty-string default is treated as absent.
    assert!(!html.contains("Default Value: </span>"));
}

#[test]
fn render_unknown_category_falls_back_to_service() {
    let (cli, _temp) = workspace();
    let parsed = render_json(&cli, "#/orchestrator/bogus/get");
    assert_eq!(parsed["view"], "service");
    assert_eq!(parsed["canonical_path"], "/orchestrator");

    let html = parsed["html"].as_str().unwrap();
    assert!(html.contains("<a href=\"#/orchestrator/users\">users</a>"));
    assert!(html.contains("<a href=\"#/orchestrator/folders\">folders</a>"));
}

#[test]
fn render_operation_documents_parameters() {
    let (cli, _temp) = workspace();
    let parsed = render_json(&cli, "#/orchestrator/users/get");
    let html = parsed["html"].as_str().unwrap();

    assert!(html.contains("&nbsp;&nbsp;--folder-id integer<br/>"));
    assert!(html.contains("&nbsp;&nbsp;[--filter string]<br/>"));
    assert!(html.contains("<span>Allowed Values:</span><ul><li>asc</li><li>desc</li></ul>"));
    assert!(html.contains("Name eq 'admin' and &lt;Type&gt; ne 'Robot'"));
    assert!(!html.contains("<Type>"));
}

#[test]
fn build_json_contract_and_files() {
    let (cli, temp) = workspace();
    let output = cli
        .execute(&Commands::Build {
            out: Some(PathBuf::from("public")),
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["views"].as_u64(), Some(9));
    assert_eq!(parsed["services"].as_u64(), Some(2));
    assert_eq!(parsed["operations"].as_u64(), Some(3));
    assert!(parsed.get("output_dir").and_then(|v| v.as_str()).is_some());

    let page = fs::read_to_string(temp.path().join("public").join("index.html")).unwrap();
    assert!(page.contains("<template data-path=\"/du/discovery/projects\">"));
    assert!(temp.path().join("public").join("commands.json").exists());
}

#[test]
fn build_uses_configured_output_dir() {
    let (_, temp) = workspace();
    fs::write(temp.path().join("cmddoc.toml"), "output_dir = \"docs-site\"\n").unwrap();
    let cli = CliContext::new(temp.path().to_path_buf(), None, None).unwrap();

    let output = cli
        .execute(&Commands::Build {
            out: None,
            format: "text".to_string(),
        })
        .unwrap();
    assert!(output.starts_with("Built 9 views"));
    assert!(temp.path().join("docs-site").join("index.html").exists());
}

#[test]
fn show_json_contract_has_required_fields() {
    let (cli, _temp) = workspace();
    let output = cli
        .execute(&Commands::Show {
            format: "json".to_string(),
            depth: Some(1),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["total"].as_u64(), Some(3));
    let commands = parsed["commands"].as_array().unwrap();
    let paths: Vec<&str> = commands.iter().map(|c| c["path"].as_str().unwrap()).collect();
    assert_eq!(paths, vec!["/", "/du", "/orchestrator"]);
    assert_eq!(commands[0]["level"], "root");
    assert_eq!(commands[0]["parameters"].as_u64(), Some(3));
    assert!(commands[1].get("description").and_then(|v| v.as_str()).is_some());
}

#[test]
fn validate_json_reports_duplicates() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("commands.json"),
        r#"{"name":"uipath","description":"","parameters":null,"subcommands":[
            {"name":"orchestrator","description":"","parameters":null,"subcommands":null},
            {"name":"orchestrator","description":"","parameters":null,"subcommands":null}
        ]}"#,
    )
    .unwrap();
    let cli = CliContext::new(temp_dir.path().to_path_buf(), None, None).unwrap();

    let output = cli
        .execute(&Commands::Validate {
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["valid"], false);
    let issues = parsed["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["kind"], "duplicate_subcommand");
    assert_eq!(issues[0]["path"], "/");
    assert_eq!(issues[0]["name"], "orchestrator");
}

#[test]
fn validate_fixture_is_clean() {
    let (cli, _temp) = workspace();
    let output = cli
        .execute(&Commands::Validate {
            format: "text".to_string(),
        })
        .unwrap();
    assert!(output.contains("No issues found."));
}

#[test]
fn browse_renders_initial_view_and_each_event() {
    let (cli, _temp) = workspace();
    let mut out = Vec::new();
    let handled = cli
        .browse(
            "#/du",
            "#/orchestrator\n#/orchestrator/users/get\n".as_bytes(),
            &mut out,
        )
        .unwrap();
    assert_eq!(handled, 2);

    let output = String::from_utf8(out).unwrap();
    let views: Vec<&str> = output.split("\x0c\n").filter(|v| !v.is_empty()).collect();
    assert_eq!(views.len(), 3);
    assert!(views[0].contains("<h1>uipath du</h1>"));
    assert!(views[1].contains("<h1>uipath orchestrator</h1>"));
    assert!(views[2].contains("<h1>uipath orchestrator users get</h1>"));
}

#[test]
fn missing_source_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let cli = CliContext::new(temp_dir.path().to_path_buf(), None, None).unwrap();
    let err = cli
        .execute(&Commands::Render {
            path: None,
            format: "text".to_string(),
        })
        .unwrap_err();
    assert!(err.is_load_failure());
}

/*!
 * Integration tests for the projdoc binary
 */

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn projdoc(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_projdoc"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_default_output_next_to_project() {
    let temp_dir = tempdir().unwrap();
    let project = temp_dir.path().join("webapp");
    fs::create_dir_all(project.join("bin")).unwrap();
    fs::write(project.join("Program.cs"), "class Program {}\n").unwrap();
    fs::write(project.join("bin").join("app.dll"), "binary").unwrap();

    let output = projdoc(&["--quiet", "webapp"], temp_dir.path());
    assert!(output.status.success(), "{:?}", output);

    let markdown = fs::read_to_string(project.join("webapp_listing.md")).unwrap();
    assert!(markdown.contains("[ROOT] webapp\n└── Program.cs\n"));
    assert!(markdown.contains("## File: Program.cs\n```csharp\nclass Program {}\n```"));
    assert!(!markdown.contains("app.dll"));
}

#[test]
fn test_repo_url_output_and_label() {
    let temp_dir = tempdir().unwrap();
    let checkout = temp_dir.path().join("3f9c2d");
    fs::create_dir_all(&checkout).unwrap();
    fs::write(checkout.join("main.js"), "start();\n").unwrap();

    let output = projdoc(
        &[
            "--quiet",
            "3f9c2d",
            "--repo-url",
            "https://github.com/username/webapp.git",
        ],
        temp_dir.path(),
    );
    assert!(output.status.success(), "{:?}", output);

    let listing = temp_dir.path().join("Outputs").join("webapp_listing.md");
    let markdown = fs::read_to_string(listing).unwrap();
    assert!(markdown.contains("[ROOT] webapp\n"));
    assert!(markdown.contains("## File: main.js\n```javascript\n"));
}

#[test]
fn test_explicit_output_and_rules_file() {
    let temp_dir = tempdir().unwrap();
    let project = temp_dir.path().join("proj");
    fs::create_dir_all(project.join("target")).unwrap();
    fs::write(project.join("lib.rs"), "pub fn f() {}\n").unwrap();
    fs::write(project.join("target").join("out.rs"), "// generated\n").unwrap();
    fs::write(
        temp_dir.path().join("rules.json"),
        r#"{"excluded_dirs": ["target"]}"#,
    )
    .unwrap();

    let output = projdoc(
        &["-q", "proj", "listing.md", "--rules", "rules.json"],
        temp_dir.path(),
    );
    assert!(output.status.success(), "{:?}", output);

    let markdown = fs::read_to_string(temp_dir.path().join("listing.md")).unwrap();
    assert!(markdown.contains("## File: lib.rs\n```\npub fn f() {}\n```"));
    assert!(!markdown.contains("generated"));
}

#[test]
fn test_missing_directory_fails() {
    let temp_dir = tempdir().unwrap();

    let output = projdoc(&["does-not-exist"], temp_dir.path());
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Target directory not found"));
}

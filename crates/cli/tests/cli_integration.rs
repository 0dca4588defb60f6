//! CLI integration tests for the `generate` and `preview` subcommands.
//!
//! Uses `assert_cmd` to spawn the `pagesmith` binary and verify
//! exit codes, stdout content, and stderr content.
//!
//! Every command runs inside a fresh temp directory with the provider
//! variables removed, so a developer's `.env` never leaks into a test.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper: create a Command for the `pagesmith` binary, rooted at `dir`.
fn pagesmith(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("pagesmith");
    cmd.current_dir(dir.path());
    for key in [
        "GEMINI_API_KEY",
        "PORT",
        "PAGESMITH_ALLOWED_ORIGIN",
        "PAGESMITH_MODEL",
        "PAGESMITH_API_BASE",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

/// Helper: write `content` to `name` inside `dir`.
fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

// ──────────────────────────────────────────────
// 1. Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    let dir = TempDir::new().unwrap();
    pagesmith(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generate and preview web pages with a hosted language model",
        ));
}

#[test]
fn version_exits_0() {
    let dir = TempDir::new().unwrap();
    pagesmith(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pagesmith"));
}

#[test]
fn unknown_type_is_rejected_by_parser() {
    let dir = TempDir::new().unwrap();
    pagesmith(&dir)
        .args(["generate", "a blog", "--type", "vue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown content type 'vue'"));
}

// ──────────────────────────────────────────────
// 2. generate
// ──────────────────────────────────────────────

#[test]
fn generate_empty_prompt_exits_1() {
    let dir = TempDir::new().unwrap();
    pagesmith(&dir)
        .args(["generate", "   "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: Prompt is required"));
}

#[test]
fn generate_without_key_exits_1() {
    let dir = TempDir::new().unwrap();
    pagesmith(&dir)
        .args(["generate", "a portfolio"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: API key missing"));
}

#[test]
fn generate_reads_key_from_dotenv() {
    let dir = TempDir::new().unwrap();
    // Nothing listens on port 9; the key is found, so the failure is the transport.
    write_file(
        &dir,
        ".env",
        "GEMINI_API_KEY=from-dotenv\nPAGESMITH_API_BASE=http://127.0.0.1:9/v1beta\n",
    );
    pagesmith(&dir)
        .args(["generate", "a portfolio"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("API key missing").not())
        .stderr(predicate::str::contains("API request failed"));
}

#[test]
fn generate_json_errors_are_json() {
    let dir = TempDir::new().unwrap();
    let output = pagesmith(&dir)
        .args(["--output", "json", "generate", ""])
        .output()
        .expect("run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stderr
        .lines()
        .find(|l| l.starts_with('{'))
        .expect("json error line");
    let json: serde_json::Value = serde_json::from_str(line).expect("valid JSON");
    assert_eq!(json["error"], "Prompt is required");
}

// ──────────────────────────────────────────────
// 3. preview
// ──────────────────────────────────────────────

#[test]
fn preview_html_with_dark_theme() {
    let dir = TempDir::new().unwrap();
    let file = write_file(
        &dir,
        "page.html",
        "<!DOCTYPE html><html><head><title>x</title></head><body><button>Go</button></body></html>",
    );
    pagesmith(&dir)
        .arg("preview")
        .arg(&file)
        .args(["--theme", "dark", "--font", "serif", "--color", "#10b981"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<html><head><title>x</title><style>"))
        .stdout(predicate::str::contains("background-color: #111827;"))
        .stdout(predicate::str::contains("--primary-color: #10b981;"))
        .stdout(predicate::str::contains("Georgia"));
}

#[test]
fn preview_fragment_is_wrapped_in_document() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "hero.html", "<section>Hero</section>");
    pagesmith(&dir)
        .arg("preview")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html><html><head><style>"))
        .stdout(predicate::str::ends_with("<section>Hero</section></html>"));
}

#[test]
fn preview_invalid_color_exits_1() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "page.html", "<p>x</p>");
    pagesmith(&dir)
        .arg("preview")
        .arg(&file)
        .args(["--color", "red;}body{display:none"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid primary color"));
}

#[test]
fn preview_missing_file_exits_1() {
    let dir = TempDir::new().unwrap();
    pagesmith(&dir)
        .args(["preview", "nope.html"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error reading 'nope.html'"));
}

#[test]
fn preview_react_without_transpiler_uses_babel() {
    let dir = TempDir::new().unwrap();
    let file = write_file(
        &dir,
        "card.jsx",
        "```jsx\n<div className=\"card\">Hi</div>\n```",
    );
    pagesmith(&dir)
        .arg("preview")
        .arg(&file)
        .args(["--type", "react"])
        .assert()
        .success()
        .stdout(predicate::str::contains("@babel/standalone"))
        .stdout(predicate::str::contains("Babel.transform"))
        .stdout(predicate::str::contains("```").not());
}

#[cfg(unix)]
#[test]
fn preview_react_with_passthrough_transpiler() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "card.jsx", "<div>Hi</div>");
    pagesmith(&dir)
        .arg("preview")
        .arg(&file)
        .args(["--type", "react", "--transpiler", "cat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("new Function"))
        .stdout(predicate::str::contains("react-preview"))
        .stdout(predicate::str::contains("@babel/standalone").not());
}

#[cfg(unix)]
#[test]
fn preview_react_transpile_failure_prints_panel() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "card.jsx", "<div>Hi</div>");
    pagesmith(&dir)
        .arg("preview")
        .arg(&file)
        .args(["--type", "react", "--transpiler", "false"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error compiling component:"))
        .stdout(predicate::str::contains("Try updating your code in the editor."))
        .stderr(predicate::str::contains("transpiler exited with"));
}

#[test]
fn preview_quiet_suppresses_errors() {
    let dir = TempDir::new().unwrap();
    pagesmith(&dir)
        .args(["--quiet", "preview", "missing.html"])
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
}

//! Integration tests that run the CLI binary.

use std::io::Write;
use std::process::Stdio;

/// Binary command isolated from the user's config file and `.env`.
fn bin(tmp: &tempfile::TempDir) -> std::process::Command {
    // CARGO_BIN_EXE_<name> uses the binary target name; hyphens require concat! for env!()
    let bin = env!(concat!("CARGO_BIN_EXE_tutor", "-", "chat", "-", "format"));
    let mut cmd = std::process::Command::new(bin);
    cmd.current_dir(tmp.path())
        .env("TUTOR_CHAT_FORMAT_CONFIG", tmp.path().join("config.json"))
        .env_remove("TUTOR_CHAT_FORMAT_ESCAPE_CURRENCY")
        .env_remove("TUTOR_CHAT_FORMAT_ALL_BLOCKS")
        .env_remove("TUTOR_CHAT_FORMAT_QA_SHAPE")
        .env_remove("RUST_LOG");
    cmd
}

fn write_message(tmp: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
    let path = tmp.path().join("message.txt");
    std::fs::write(&path, content).expect("write message");
    path
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(&tmp)
        .arg("--help")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("render"), "expected usage text in output");
}

#[test]
fn cli_version_succeeds() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(&tmp).arg("--version").output().expect("run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("tutor-chat-format"));
}

#[test]
fn cli_render_outline_from_file() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let path = write_message(&tmp, "Hi **there**\n\n<math>x</math>\n");
    let output = bin(&tmp)
        .args(["render", "--format", "outline"])
        .arg(&path)
        .output()
        .expect("run binary");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "paragraph 1\n  text(plain) \"Hi \"\n  text(bold) \"there\"\nparagraph 2\n  math(inline) \"x\"\n"
    );
}

#[test]
fn cli_render_json_from_stdin() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let mut child = bin(&tmp)
        .args(["render", "-", "--format", "json", "--user"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("run binary");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(br#"Is $x$ odd? qa_block:{"question":"Pick","answers":{"B":"no","A":"yes"}}"#)
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let nodes = &json["paragraphs"][0];
    assert_eq!(nodes[1]["kind"], "math");
    assert_eq!(nodes[1]["latex"], "x");
    assert_eq!(nodes[3]["kind"], "qa_block");
    assert_eq!(nodes[3]["options"][0]["label"], "B");
    assert_eq!(nodes[3]["options"][1]["label"], "A");
}

#[test]
fn cli_render_preview_plain() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let path = write_message(&tmp, "It costs $5.\n\nArea <math>x^2</math>");
    let output = bin(&tmp)
        .args(["render", "--no-color", "--no-math"])
        .arg(&path)
        .output()
        .expect("run binary");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "It costs USD5.\n\nArea $x^2$\n"
    );
}

#[test]
fn cli_render_missing_file_fails() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(&tmp)
        .args(["render", "does-not-exist.txt"])
        .output()
        .expect("run binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to read"),
        "expected read error, got: {}",
        stderr
    );
}

#[test]
fn cli_render_invalid_env_fails() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let path = write_message(&tmp, "hello");
    let output = bin(&tmp)
        .env("TUTOR_CHAT_FORMAT_QA_SHAPE", "tree")
        .arg("render")
        .arg(&path)
        .output()
        .expect("run binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("TUTOR_CHAT_FORMAT_QA_SHAPE"), "got: {}", stderr);
}

#[test]
fn cli_config_shows_file_options() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    std::fs::write(tmp.path().join("config.json"), r#"{"qa_shape":"flat"}"#).expect("write config");
    let output = bin(&tmp).arg("config").output().expect("run binary");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("found"));
    assert!(stdout.contains("\"qa_shape\": \"flat\""));
}

//! Integration tests that run the CLI binary.

use std::io::Write;
use std::process::Stdio;

fn bin() -> std::process::Command {
    // CARGO_BIN_EXE_<name> uses the binary target name; hyphens require concat! for env!()
    let bin = env!(concat!("CARGO_BIN_EXE_sage", "-", "visu"));
    let mut cmd = std::process::Command::new(bin);
    cmd.env_remove("SAGE_VISU_CONVENTION")
        .env_remove("SAGE_VISU_TRAILING_COMMA")
        .env_remove("SAGE_VISU_PLOT");
    cmd
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let output = bin()
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
    let output = bin()
        .arg("--version")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sage-visu"));
}

#[test]
fn render_inline_rows_prints_widget_command() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .args(["render", "-r", "1 0 0 <= 2", "-r", "0 1 0 >= -1"])
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Polyhedron(ieqs = [[-2,-1,0,0],[-1,0,1,0],]).plot()\n"
    );
}

#[test]
fn render_reads_json_from_stdin() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let mut child = bin()
        .args(["render", "-", "--no-trailing-comma", "--convention", "offset"])
        .current_dir(tmp.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary not found - run cargo build first");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(br#"[{"coeffs": [1, 0, 0], "sign": "<=", "rhs": 2}]"#)
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Polyhedron(ieqs = [[2,-1,0,0]]).plot()\n"
    );
}

#[test]
fn render_file_to_output_file() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let input = tmp.path().join("rows.txt");
    let out = tmp.path().join("cmd.sage");
    std::fs::write(&input, "# box\n1 2 3 = 4\n").expect("write input");
    let output = bin()
        .arg("render")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    assert_eq!(
        std::fs::read_to_string(&out).expect("read output"),
        "Polyhedron(ieqs = [[-4,-1,-2,-3],[4,1,2,3],]).plot()\n"
    );
}

#[test]
fn invalid_sign_exits_with_row_error() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .args(["render", "-r", "1 0 0 <= 2", "-r", "1 0 0 != 5"])
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "no partial command on error");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("row 2") && stderr.contains("!="),
        "expected row error, got: {}",
        stderr
    );
}

#[test]
fn invalid_number_exits_with_error() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .args(["render", "-r", "1 abc 0 <= 2"])
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("abc"), "got: {}", stderr);
}

#[test]
fn normalize_prints_tuples() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .args(["normalize", "-r", "1 0 0 <= 5", "-r", "1 0 0 >= 5"])
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "[-5,-1,0,0]\n[5,1,0,0]\n"
    );
}

#[test]
fn presets_lists_cube() {
    let output = bin()
        .arg("presets")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("cube"));
}

#[test]
fn invalid_config_value_exits_with_error() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .args(["render", "-r", "1 0 0 <= 2"])
        .env("SAGE_VISU_CONVENTION", "sideways")
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SAGE_VISU_CONVENTION"), "got: {}", stderr);
}

#[test]
fn normalize_json_matches_plain_numbers() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .args(["normalize", "--json", "-r", "1 0 0 <= 5", "-r", "0 1 0 = 2"])
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("-0.0"), "negative zero in: {}", stdout);
    let expected = r#"[
  {
    "rhs": -5.0,
    "coeffs": [
      -1.0,
      0.0,
      0.0
    ]
  },
  {
    "rhs": -2.0,
    "coeffs": [
      0.0,
      -1.0,
      0.0
    ]
  },
  {
    "rhs": 2.0,
    "coeffs": [
      0.0,
      1.0,
      0.0
    ]
  }
]
"#;
    assert_eq!(stdout, expected);
}

#[test]
fn presets_ignore_invalid_render_config() {
    let output = bin()
        .arg("presets")
        .env("SAGE_VISU_PLOT", "maybe")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--convention offset"), "got: {}", stdout);
}

#[test]
fn config_subcommand_shows_env_values() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .arg("config")
        .env("SAGE_VISU_CONVENTION", "offset")
        .env("SAGE_VISU_PLOT", "no")
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("offset (from SAGE_VISU_CONVENTION)"),
        "got: {}",
        stdout
    );
    assert!(stdout.contains("false (from SAGE_VISU_PLOT)"), "got: {}", stdout);
    assert!(stdout.contains("true (default)"), "got: {}", stdout);
}

#[test]
fn config_subcommand_rejects_invalid_value() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .arg("config")
        .env("SAGE_VISU_PLOT", "maybe")
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("SAGE_VISU_PLOT"));
}

#[test]
fn completions_generate_bash_script() {
    let output = bin()
        .args(["completions", "bash"])
        .env("SAGE_VISU_CONVENTION", "sideways")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sage-visu"), "got: {}", stdout);
    assert!(stdout.contains("render"), "got: {}", stdout);
}

#[test]
fn help_explains_conventions() {
    let output = bin()
        .arg("--help")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("CONVENTIONS"));
}

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn sample_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("samples")
        .join(name)
}

fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write source");
    file
}

#[test]
fn tokens_simple_output() {
    let file = source_file("x := 'a;");
    let mut cmd = cargo_bin_cmd!("jai-lex");
    cmd.arg("tokens").arg(file.path());

    cmd.assert().success().stdout(
        predicate::str::contains("1:0..1 identifier \"x\"")
            .and(predicate::str::contains("1:5..7 constant \"'a\""))
            .and(predicate::str::contains("whitespace").not()),
    );
}

#[test]
fn tokens_all_includes_trivia() {
    let file = source_file("x // note\n");
    let mut cmd = cargo_bin_cmd!("jai-lex");
    cmd.arg("tokens").arg(file.path()).arg("--all");

    cmd.assert().success().stdout(
        predicate::str::contains("whitespace").and(predicate::str::contains("line-comment")),
    );
}

#[test]
fn tokens_json_output() {
    let file = source_file("if");
    let mut cmd = cargo_bin_cmd!("jai-lex");
    cmd.arg("tokens").arg(file.path()).args(["--format", "json"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"keyword\""));
}

#[test]
fn depth_command() {
    let source = "f :: () { s := \"}\"; }";
    let file = source_file(source);
    let offset = source.rfind(';').unwrap() + 1;
    let mut cmd = cargo_bin_cmd!("jai-lex");
    cmd.arg("depth").arg(file.path()).arg(offset.to_string());

    cmd.assert().success().stdout("1\n");
}

#[test]
fn depth_offset_past_end_fails() {
    let file = source_file("x");
    let mut cmd = cargo_bin_cmd!("jai-lex");
    cmd.arg("depth").arg(file.path()).arg("99");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("past the end"));
}

#[test]
fn defun_by_line() {
    let mut cmd = cargo_bin_cmd!("jai-lex");
    cmd.arg("defun")
        .arg(sample_path("geometry.jai"))
        .args(["--line", "18"]);

    cmd.assert().success().stdout("16..20\n");
}

#[test]
fn defun_at_top_level() {
    let mut cmd = cargo_bin_cmd!("jai-lex");
    cmd.arg("defun")
        .arg(sample_path("geometry.jai"))
        .args(["--line", "1"]);

    cmd.assert().success().stdout("none\n");
}

#[test]
fn defun_yaml_output() {
    let file = source_file("main :: () {\n  foo();\n}\n");
    let mut cmd = cargo_bin_cmd!("jai-lex");
    cmd.arg("defun")
        .arg(file.path())
        .args(["--offset", "15", "--format", "yaml"]);

    cmd.assert().success().stdout(
        predicate::str::contains("start_line: 1").and(predicate::str::contains("end_line: 3")),
    );
}

#[test]
fn outline_command() {
    let mut cmd = cargo_bin_cmd!("jai-lex");
    cmd.arg("outline").arg(sample_path("geometry.jai"));

    cmd.assert().success().stdout(
        predicate::str::contains("4 struct Vector2")
            .and(predicate::str::contains("16 procedure length (16..20)"))
            .and(predicate::str::contains("14 variable scale")),
    );
}

#[test]
fn config_file_is_layered() {
    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp config");
    writeln!(config, "[outline]\ninclude_variables = false").expect("write config");

    let mut cmd = cargo_bin_cmd!("jai-lex");
    cmd.arg("outline")
        .arg(sample_path("geometry.jai"))
        .arg("--config")
        .arg(config.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("variable").not());
}

#[test]
fn project_config_in_working_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join("jai-lex.toml"),
        "[vocabulary]\nbuiltins = [\"sqrt\"]\n",
    )
    .expect("write project config");
    std::fs::write(dir.path().join("main.jai"), "x := sqrt(2);\n").expect("write source");

    let mut cmd = cargo_bin_cmd!("jai-lex");
    cmd.current_dir(dir.path()).arg("tokens").arg("main.jai");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("builtin \"sqrt\""));
}

#[test]
fn explicit_config_overrides_project_config() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join("jai-lex.toml"),
        "[outline]\ninclude_variables = false\n",
    )
    .expect("write project config");
    std::fs::write(dir.path().join("override.toml"), "[outline]\ninclude_variables = true\n")
        .expect("write override");
    std::fs::write(dir.path().join("main.jai"), "count := 0;\n").expect("write source");

    let mut cmd = cargo_bin_cmd!("jai-lex");
    cmd.current_dir(dir.path())
        .arg("outline")
        .arg("main.jai")
        .args(["--config", "override.toml"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1 variable count"));
}

#[test]
fn missing_file_fails() {
    let mut cmd = cargo_bin_cmd!("jai-lex");
    cmd.arg("outline").arg("/definitely/not/here.jai");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error: cannot read"));
}

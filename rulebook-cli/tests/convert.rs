use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn sample_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("docs")
        .join("samples")
        .join(name)
}

#[test]
fn convert_file_to_html_with_summary() {
    let mut cmd = cargo_bin_cmd!("rulebook");
    cmd.arg(sample_path("kitchensink.rulebook"));

    let output_pred = predicate::str::starts_with("<div id='summary'>")
        .and(predicate::str::contains("<h2><a id='combat'></a>I - Combat</h2>"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn convert_stdin_without_summary() {
    let mut cmd = cargo_bin_cmd!("rulebook");
    cmd.arg("--no-toc").write_stdin("#Intro\nHello *world*.\n");

    cmd.assert().success().stdout(
        "<h2><a id='intro'></a>I - Intro</h2>\n<p class='indent'>\nHello <strong>world</strong>.\n</p>\n",
    );
}

#[test]
fn latin1_input_is_decoded_lossily() {
    let mut cmd = cargo_bin_cmd!("rulebook");
    cmd.arg("--no-toc").write_stdin(&b"Caf\xe9\n"[..]);

    cmd.assert()
        .success()
        .stdout("<p>\nCaf\u{FFFD}\n</p>\n");
}

#[test]
fn latin1_file_is_decoded_lossily() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("regles.rulebook");
    fs::write(&source, b"*R\xe8gles*").unwrap();

    let mut cmd = cargo_bin_cmd!("rulebook");
    cmd.arg("--no-toc").arg(&source);

    cmd.assert()
        .success()
        .stdout("<p>\n<strong>R\u{FFFD}gles</strong>\n</p>\n");
}

#[test]
fn lexing_error_exits_with_failure_and_no_output() {
    let mut cmd = cargo_bin_cmd!("rulebook");
    cmd.write_stdin("Intro\n\\img(pic.png, A cat");

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: lexer error at line 2"));
}

#[test]
fn unknown_format_is_reported() {
    let mut cmd = cargo_bin_cmd!("rulebook");
    cmd.args(["--to", "pdf"]).write_stdin("Hello");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Format 'pdf' not found"));
}

#[test]
fn token_dump() {
    let mut cmd = cargo_bin_cmd!("rulebook");
    cmd.args(["--to", "token-simple"]).write_stdin("*hi*");

    cmd.assert()
        .success()
        .stdout("Bold: hi (line 1)\nEndOfInput:  (line 1)\n");
}

#[test]
fn output_file_extension_selects_the_format() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("tree.xml");

    let mut cmd = cargo_bin_cmd!("rulebook");
    cmd.arg("-o").arg(&output).write_stdin("ANNEX Spells\n");
    cmd.assert().success().stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("<document>\n  <annex>Spells\n"));
}

#[test]
fn config_file_is_layered_over_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[html]\nannex_label = \"Appendix\"\ntable_of_contents = false\n").unwrap();

    let mut cmd = cargo_bin_cmd!("rulebook");
    cmd.arg("--config").arg(&config).write_stdin("ANNEX Spells\n");

    cmd.assert().success().stdout(
        "<div class='annex'>\n<h2><a name='annex-spells'></a>Appendix A: Spells</h2>\n</div>\n",
    );
}

#[test]
fn toc_flag_overrides_the_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[html]\ntable_of_contents = false\n").unwrap();

    let mut cmd = cargo_bin_cmd!("rulebook");
    cmd.arg("--config")
        .arg(&config)
        .arg("--toc")
        .write_stdin("Hello");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("<div id='summary'>"));
}

#[test]
fn missing_config_file_is_an_error() {
    let mut cmd = cargo_bin_cmd!("rulebook");
    cmd.args(["--config", "/definitely/not/here.toml"])
        .write_stdin("Hello");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error: invalid configuration"));
}

#[test]
fn list_formats() {
    let mut cmd = cargo_bin_cmd!("rulebook");
    cmd.arg("--list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("html")
            .and(predicate::str::contains("tag"))
            .and(predicate::str::contains("json"))
            .and(predicate::str::contains("token-simple"))
            .and(predicate::str::contains("token-json")),
    );
}

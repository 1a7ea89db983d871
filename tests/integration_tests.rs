//! Integration tests for the dispatchgen CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SAMPLE_IMPL: &str = r#"void cls_config::edit_pause(std::string &parm, enum PARM_ACT pact)
{
    if (pact == PARM_ACT_DFLT) {
        pause = false;
    } else if (pact == PARM_ACT_SET) {
        edit_set_bool(pause, parm);
    } else if (pact == PARM_ACT_GET) {
        edit_get_bool(parm, pause);
    }
}

void cls_config::edit_threshold(std::string &parm, enum PARM_ACT pact)
{
    int parm_in;
    if (pact == PARM_ACT_DFLT) {
        threshold = 1500;
    } else if (pact == PARM_ACT_SET) {
        parm_in = atoi(parm.c_str());
        if ((parm_in < 1) || (parm_in > 100)) {
            return;
        }
        threshold = parm_in;
    }
}

void cls_config::edit_picture_type(std::string &parm, enum PARM_ACT pact)
{
    if (pact == PARM_ACT_DFLT) {
        picture_type = "jpeg";
    } else if (pact == PARM_ACT_SET) {
        if ((parm == "jpeg") || (parm == "ppm") || (parm == "jpeg")) {
            picture_type = parm;
        }
    } else if (pact == PARM_ACT_LIST) {
        parm = "[\"jpeg\",\"ppm\"]";
    }
}
"#;

const SAMPLE_HEADER: &str = r#"class cls_config {
    public:
        void edit_pause(std::string &parm, enum PARM_ACT pact);
        void edit_threshold(std::string &parm, enum PARM_ACT pact);
        void edit_cat02(std::string &parm, enum PARM_ACT pact);
};
"#;

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("dispatchgen").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Consolidate handwritten config"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("dispatchgen").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dispatchgen"));
}

/// Test invalid subcommand shows error
#[test]
fn test_invalid_subcommand() {
    let mut cmd = Command::cargo_bin("dispatchgen").unwrap();
    cmd.arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// Test extraction report in JSON format
#[test]
fn test_extract_json() {
    let temp_dir = TempDir::new().unwrap();
    let impl_file = temp_dir.path().join("conf.cpp");
    fs::write(&impl_file, SAMPLE_IMPL).unwrap();

    let mut cmd = Command::cargo_bin("dispatchgen").unwrap();
    cmd.arg("extract")
        .arg(&impl_file)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"pause\""))
        .stdout(predicate::str::contains("\"kind\": \"bool\""))
        .stdout(predicate::str::contains("\"kind\": \"list\""));
}

/// Test dispatch generation writes the consolidated function
#[test]
fn test_generate_dispatch() {
    let temp_dir = TempDir::new().unwrap();
    let impl_file = temp_dir.path().join("conf.cpp");
    let out_file = temp_dir.path().join("dispatch.txt");
    fs::write(&impl_file, SAMPLE_IMPL).unwrap();

    let mut cmd = Command::cargo_bin("dispatchgen").unwrap();
    cmd.arg("generate")
        .arg(&impl_file)
        .arg("--output")
        .arg(&out_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dispatch function written to"));

    let generated = fs::read_to_string(&out_file).unwrap();
    assert!(generated.contains("void cls_config::dispatch_edit"));
    assert!(generated.contains(
        "if (name == \"pause\") return edit_generic_bool(pause, parm, pact, false);"
    ));
    assert!(generated.contains(
        "if (name == \"threshold\") return edit_generic_int(threshold, parm, pact, 1500, 1, 100);"
    ));
    assert!(generated.contains(
        "static const std::vector<std::string> picture_type_values = {\"jpeg\", \"ppm\"};"
    ));
}

/// Test stripping handler bodies preserves the allow-list
#[test]
fn test_strip_impl() {
    let temp_dir = TempDir::new().unwrap();
    let impl_file = temp_dir.path().join("conf.cpp");
    let out_file = temp_dir.path().join("conf.cpp.new");
    fs::write(&impl_file, SAMPLE_IMPL).unwrap();

    let mut cmd = Command::cargo_bin("dispatchgen").unwrap();
    cmd.arg("strip-impl")
        .arg(&impl_file)
        .arg("--output")
        .arg(&out_file)
        .assert()
        .success();

    let stripped = fs::read_to_string(&out_file).unwrap();
    // edit_pause is on the built-in allow-list; the rest must be gone.
    assert!(stripped.contains("edit_pause"));
    assert!(!stripped.contains("edit_threshold"));
    assert!(!stripped.contains("edit_picture_type"));
}

/// Test --preserve widens the allow-list
#[test]
fn test_strip_impl_preserve_flag() {
    let temp_dir = TempDir::new().unwrap();
    let impl_file = temp_dir.path().join("conf.cpp");
    let out_file = temp_dir.path().join("conf.cpp.new");
    fs::write(&impl_file, SAMPLE_IMPL).unwrap();

    let mut cmd = Command::cargo_bin("dispatchgen").unwrap();
    cmd.arg("strip-impl")
        .arg(&impl_file)
        .arg("--output")
        .arg(&out_file)
        .arg("--preserve")
        .arg("edit_threshold")
        .assert()
        .success();

    let stripped = fs::read_to_string(&out_file).unwrap();
    assert!(stripped.contains("edit_threshold"));
    assert!(!stripped.contains("edit_picture_type"));
}

/// Test stripping declarations from the header
#[test]
fn test_strip_decls() {
    let temp_dir = TempDir::new().unwrap();
    let header_file = temp_dir.path().join("conf.hpp");
    let out_file = temp_dir.path().join("conf.hpp.new");
    fs::write(&header_file, SAMPLE_HEADER).unwrap();

    let mut cmd = Command::cargo_bin("dispatchgen").unwrap();
    cmd.arg("strip-decls")
        .arg(&header_file)
        .arg("--output")
        .arg(&out_file)
        .assert()
        .success();

    let stripped = fs::read_to_string(&out_file).unwrap();
    assert!(stripped.contains("edit_pause"));
    assert!(stripped.contains("edit_cat02"));
    assert!(!stripped.contains("edit_threshold"));
}

/// Test the in-place-overwrite guard
#[test]
fn test_strip_refuses_same_output_path() {
    let temp_dir = TempDir::new().unwrap();
    let impl_file = temp_dir.path().join("conf.cpp");
    fs::write(&impl_file, SAMPLE_IMPL).unwrap();

    let mut cmd = Command::cargo_bin("dispatchgen").unwrap();
    cmd.arg("strip-impl")
        .arg(&impl_file)
        .arg("--output")
        .arg(&impl_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("must differ"));

    // The original must be untouched.
    assert_eq!(fs::read_to_string(&impl_file).unwrap(), SAMPLE_IMPL);
}

/// Test missing input file aborts without writing output
#[test]
fn test_missing_input_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let out_file = temp_dir.path().join("out.txt");

    let mut cmd = Command::cargo_bin("dispatchgen").unwrap();
    cmd.arg("generate")
        .arg(temp_dir.path().join("nonexistent.cpp"))
        .arg("--output")
        .arg(&out_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));

    assert!(!out_file.exists());
}

/// Test YAML config widens the allow-list
#[test]
fn test_config_preserve() {
    let temp_dir = TempDir::new().unwrap();
    let impl_file = temp_dir.path().join("conf.cpp");
    let out_file = temp_dir.path().join("conf.cpp.new");
    let config_file = temp_dir.path().join("dispatchgen.yml");
    fs::write(&impl_file, SAMPLE_IMPL).unwrap();
    fs::write(&config_file, "preserve:\n  - edit_picture_type\n").unwrap();

    let mut cmd = Command::cargo_bin("dispatchgen").unwrap();
    cmd.arg("--config")
        .arg(&config_file)
        .arg("strip-impl")
        .arg(&impl_file)
        .arg("--output")
        .arg(&out_file)
        .assert()
        .success();

    let stripped = fs::read_to_string(&out_file).unwrap();
    assert!(stripped.contains("edit_picture_type"));
    assert!(!stripped.contains("edit_threshold"));
}

/// Test verbose mode logs per-function keep/remove decisions
#[test]
fn test_strip_verbose_log() {
    let temp_dir = TempDir::new().unwrap();
    let impl_file = temp_dir.path().join("conf.cpp");
    let out_file = temp_dir.path().join("conf.cpp.new");
    fs::write(&impl_file, SAMPLE_IMPL).unwrap();

    let mut cmd = Command::cargo_bin("dispatchgen").unwrap();
    cmd.arg("--verbose")
        .arg("strip-impl")
        .arg(&impl_file)
        .arg("--output")
        .arg(&out_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Keeping: edit_pause"))
        .stdout(predicate::str::contains("Removed: edit_threshold"));
}

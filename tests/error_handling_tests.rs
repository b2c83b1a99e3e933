//! Error handling integration tests

mod common;

use predicates::prelude::*;

#[test]
fn test_missing_template_file() {
    let workspace = common::TestWorkspace::new();

    common::unitgen_cmd_for_workspace(&workspace.path)
        .args(["expand", "missing.yaml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_invalid_yaml_after_substitution() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("template.yaml", "- id: HOSTNAME\n  label: [NAME\n");

    common::unitgen_cmd_for_workspace(&workspace.path)
        .args(["expand", "template.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse template"))
        .stderr(predicate::str::contains("hp_basement"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_shape_mismatch_writes_no_output() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file(
        "rooms.yaml",
        "units:\n  - id: first\n    name: \"- item\"\n  - id: second\n    name: \"key: [item]\"\n",
    );
    workspace.write_file("template.yaml", "NAME\n");

    common::unitgen_cmd_for_workspace(&workspace.path)
        .args(["-u", "rooms.yaml", "expand", "template.yaml", "-o", "out.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Shape mismatch"))
        .stderr(predicate::str::contains("second"));

    assert!(!workspace.file_exists("out.yaml"));
}

#[test]
fn test_missing_key_in_later_unit() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("template.yaml", "HOSTNAME:\n  - NAME\n");

    common::unitgen_cmd_for_workspace(&workspace.path)
        .args(["expand", "template.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hp_office"))
        .stderr(predicate::str::contains("missing from the merged document"));
}

#[test]
fn test_failed_generate_keeps_existing_config() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("config_template.yaml", "HOSTNAME:\n  sensors: [NAME]\n");
    workspace.write_file("config.yaml", "previous: run\n");

    common::unitgen_cmd_for_workspace(&workspace.path)
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing from the merged document"));

    assert_eq!(workspace.read_file("config.yaml"), "previous: run\n");
}

#[test]
fn test_scalar_template_is_rejected() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("template.yaml", "NAME");

    common::unitgen_cmd_for_workspace(&workspace.path)
        .args(["expand", "template.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported document"));
}

#[test]
fn test_invalid_units_file() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("rooms.yaml", "units:\n  - id: a\n    name: A\n  - id: a\n    name: B\n");
    workspace.write_file("template.yaml", "- NAME\n");

    common::unitgen_cmd_for_workspace(&workspace.path)
        .args(["--units", "rooms.yaml", "expand", "template.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate unit id 'a'"));
}

#[test]
fn test_missing_units_file() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("template.yaml", "- NAME\n");

    common::unitgen_cmd_for_workspace(&workspace.path)
        .args(["--units", "rooms.yaml", "expand", "template.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

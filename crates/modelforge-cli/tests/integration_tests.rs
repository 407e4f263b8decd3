//! Integration tests for modelforge-cli.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/shop.json")
}

/// A command isolated from the user's config files and environment.
fn modelforge(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("modelforge").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("MODELFORGE_CONFIG")
        .env_remove("MODELFORGE_DEFAULTS__DATABASE")
        .env_remove("NO_COLOR");
    cmd
}

#[test]
fn help_lists_commands() {
    let home = TempDir::new().unwrap();
    modelforge(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("compile"))
        .stdout(predicate::str::contains("routes"));
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    modelforge(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn compile_writes_full_tree() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("shop");

    modelforge(&home)
        .arg("compile")
        .arg(fixture())
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    for file in [
        "README.md",
        ".gitignore",
        "documentation/vision.md",
        "documentation/bill-of-materials.md",
        "database/schema.prisma",
        "database/migrations/0001_init.sql",
        "database/seeds/orders.json",
        "server/index.ts",
        "client/app/layout.tsx",
        "client/app/orders/[id]/page.tsx",
        "client/components/Button.tsx",
        "client/hooks/useLoadOrders.ts",
    ] {
        assert!(out.join(file).is_file(), "missing {file}");
    }

    let bom = fs::read_to_string(out.join("documentation/bill-of-materials.md")).unwrap();
    assert!(bom.contains("| Database | postgresql |"));
}

#[test]
fn compile_refuses_existing_output_without_force() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("shop");
    fs::create_dir(&out).unwrap();

    modelforge(&home)
        .arg("compile")
        .arg(fixture())
        .arg("-o")
        .arg(&out)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));

    modelforge(&home)
        .arg("compile")
        .arg(fixture())
        .arg("-o")
        .arg(&out)
        .arg("--force")
        .assert()
        .success();
    assert!(out.join("README.md").is_file());
}

#[test]
fn compile_defaults_to_configured_output_dir() {
    let home = TempDir::new().unwrap();

    modelforge(&home)
        .arg("compile")
        .arg(fixture())
        .assert()
        .success();
    assert!(home.path().join("generated/README.md").is_file());
}

#[test]
fn dry_run_writes_nothing() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("shop");

    modelforge(&home)
        .arg("compile")
        .arg(fixture())
        .arg("-o")
        .arg(&out)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("schema.prisma"));

    assert!(!out.exists());
}

#[test]
fn tree_prints_sections() {
    let home = TempDir::new().unwrap();
    modelforge(&home)
        .arg("tree")
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::contains("documentation/"))
        .stdout(predicate::str::contains("page.tsx"))
        .stdout(predicate::str::contains("README.md"));
}

#[test]
fn tree_as_json() {
    let home = TempDir::new().unwrap();
    let assert = modelforge(&home)
        .arg("tree")
        .arg(fixture())
        .args(["--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let text = value.to_string();
    assert!(text.contains("\"type\":\"folder\""));
    assert!(text.contains("\"name\":\"documentation\""));
}

#[test]
fn show_prints_one_artifact() {
    let home = TempDir::new().unwrap();
    modelforge(&home)
        .arg("show")
        .arg(fixture())
        .arg("database/schema.prisma")
        .assert()
        .success()
        .stdout(predicate::str::contains("model Order {"))
        .stdout(predicate::str::contains("provider = \"postgresql\""));
}

#[test]
fn show_missing_artifact_is_not_found() {
    let home = TempDir::new().unwrap();
    modelforge(&home)
        .arg("show")
        .arg(fixture())
        .arg("documentation/nope.md")
        .assert()
        .code(3);
}

#[test]
fn missing_model_is_not_found() {
    let home = TempDir::new().unwrap();
    modelforge(&home)
        .args(["tree", "does-not-exist.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Model file not found"));
}

#[test]
fn unsupported_model_format_is_user_error() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("model.yaml"), "entities: []").unwrap();
    modelforge(&home)
        .args(["tree", "model.yaml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported model format"));
}

#[test]
fn export_writes_single_file() {
    let home = TempDir::new().unwrap();
    let dest = home.path().join("downloads/diagram.mmd");

    modelforge(&home)
        .arg("export")
        .arg(fixture())
        .arg("documentation/sequence-diagram.mmd")
        .arg("--to")
        .arg(&dest)
        .assert()
        .success();

    let content = fs::read_to_string(&dest).unwrap();
    assert!(content.starts_with("sequenceDiagram"));
}

#[test]
fn routes_mark_dynamic_segments() {
    let home = TempDir::new().unwrap();
    modelforge(&home)
        .arg("routes")
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::contains("/dashboard/settings"))
        .stdout(predicate::str::contains("/orders/[id]"))
        .stdout(predicate::str::contains("(dynamic)"));
}

#[test]
fn env_defaults_fill_model_gaps() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("tiny.json"),
        r#"{"entities": [{"id": "t", "name": "Tag", "fields": [{"name": "label", "type": "String"}]}]}"#,
    )
    .unwrap();

    modelforge(&home)
        .env("MODELFORGE_DEFAULTS__DATABASE", "mysql")
        .args(["show", "tiny.json", "database/schema.prisma"])
        .assert()
        .success()
        .stdout(predicate::str::contains("provider = \"mysql\""));
}

#[test]
fn toml_models_are_accepted() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("tiny.toml"),
        "[project]\nname = \"Tiny\"\n\n[[entities]]\nname = \"Tag\"\n",
    )
    .unwrap();

    modelforge(&home)
        .args(["show", "tiny.toml", "README.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Tiny"));
}

#[test]
fn init_local_then_config_get() {
    let home = TempDir::new().unwrap();

    modelforge(&home).args(["init", "--local"]).assert().success();
    let written = fs::read_to_string(home.path().join(".modelforge.toml")).unwrap();
    assert!(written.contains("[defaults]"));

    fs::write(
        home.path().join(".modelforge.toml"),
        written.replace("postgresql", "sqlite"),
    )
    .unwrap();

    modelforge(&home)
        .args(["config", "get", "defaults.database"])
        .assert()
        .success()
        .stdout("sqlite\n");

    modelforge(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".modelforge.toml"));
}

#[test]
fn unknown_config_key_is_config_error() {
    let home = TempDir::new().unwrap();
    modelforge(&home)
        .args(["config", "get", "nope"])
        .assert()
        .code(4);
}

#[test]
fn shell_completions() {
    let home = TempDir::new().unwrap();
    modelforge(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("modelforge"));
}

#[test]
fn quiet_compile_prints_nothing() {
    let home = TempDir::new().unwrap();
    modelforge(&home)
        .arg("-q")
        .arg("compile")
        .arg(fixture())
        .args(["-o", "out"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn gantry() -> assert_cmd::Command {
    cargo_bin_cmd!("gantry")
}

// ── Catalog (default invocation) ──

#[test]
fn bare_invocation_renders_catalog() {
    gantry()
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("update-poetry-dependencies"))
        .stdout(predicate::str::contains("watch-actions"));
}

#[test]
fn catalog_is_sorted_by_name() {
    let assert = gantry().assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let names = [
        "build",
        "changelog-action",
        "clean",
        "deploy",
        "help",
        "push",
        "release-action",
        "update-poetry-dependencies",
        "version",
        "watch-actions",
    ];

    let mut last = 0;
    for name in names {
        let needle = format!("\n  {name} ");
        let pos = stdout
            .find(&needle)
            .unwrap_or_else(|| panic!("{name} missing from catalog:\n{stdout}"));
        assert!(pos > last, "{name} out of order:\n{stdout}");
        last = pos;
    }
}

#[test]
fn catalog_rendering_is_stable() {
    let first = gantry().assert().success();
    let second = gantry().assert().success();

    assert_eq!(first.get_output().stdout, second.get_output().stdout);
}

#[test]
fn shows_clap_help() {
    gantry()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("release workflow dispatch"));
}

// ── Version Command ──

#[test]
fn version_prints_manifest_contents() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("VERSION"), "3.1.4\n").unwrap();

    gantry()
        .current_dir(tmp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::diff("3.1.4\n"));
}

#[test]
fn version_respects_configured_manifest_path() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("gantry.toml"),
        "[manifests]\nversion = \"version.txt\"\n",
    )
    .unwrap();
    std::fs::write(tmp.path().join("version.txt"), "0.9.0").unwrap();

    gantry()
        .current_dir(tmp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::diff("0.9.0\n"));
}

#[test]
fn version_missing_manifest_fails() {
    let tmp = TempDir::new().unwrap();

    gantry()
        .current_dir(tmp.path())
        .arg("version")
        .assert()
        .failure()
        .stderr(predicate::str::contains("VERSION"));
}

// ── Clean Command ──

#[test]
fn clean_always_exits_zero() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("gantry.toml"),
        "[image]\nname = \"gantry-image-that-does-not-exist\"\n",
    )
    .unwrap();

    // Whether docker is installed or not, removal of a non-existent image
    // must not fail the command.
    gantry()
        .current_dir(tmp.path())
        .arg("clean")
        .assert()
        .success()
        .stdout(predicate::str::contains("gantry-image-that-does-not-exist"));
}

#[test]
fn clean_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("gantry.toml"),
        "[image]\nname = \"gantry-image-that-does-not-exist\"\n",
    )
    .unwrap();

    gantry().current_dir(tmp.path()).arg("clean").assert().success();
    gantry().current_dir(tmp.path()).arg("clean").assert().success();
}

// ── Required Configuration ──

#[test]
fn build_without_image_name_fails() {
    let tmp = TempDir::new().unwrap();

    gantry()
        .current_dir(tmp.path())
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("gantry.toml"));
}

#[test]
fn deploy_without_image_name_fails() {
    let tmp = TempDir::new().unwrap();

    gantry()
        .current_dir(tmp.path())
        .arg("deploy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("[image].name"));
}

#[test]
fn push_without_registry_fails() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("gantry.toml"), "[image]\nname = \"myapp\"\n").unwrap();

    gantry()
        .current_dir(tmp.path())
        .arg("push")
        .assert()
        .failure()
        .stderr(predicate::str::contains("registry"));
}

// ── Update Poetry Dependencies ──

#[test]
fn update_poetry_dependencies_missing_manifest_fails() {
    let tmp = TempDir::new().unwrap();

    gantry()
        .current_dir(tmp.path())
        .arg("update-poetry-dependencies")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requirements.txt"));
}

#[test]
fn update_poetry_dependencies_empty_manifest_is_a_no_op() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("requirements.txt"),
        "# no runtime dependencies\n\n",
    )
    .unwrap();

    // Nothing to add, so poetry is never invoked.
    gantry()
        .current_dir(tmp.path())
        .arg("update-poetry-dependencies")
        .assert()
        .success()
        .stdout(predicate::str::contains("No dependencies"));
}

// ── Workflow Dispatch Arg Surface ──

#[test]
fn changelog_action_help_lists_parameters() {
    gantry()
        .args(["changelog-action", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--ref"))
        .stdout(predicate::str::contains("--version"));
}

#[test]
fn release_action_help_lists_parameters() {
    gantry()
        .args(["release-action", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--skip-release-file"))
        .stdout(predicate::str::contains("--release-file-name"))
        .stdout(predicate::str::contains("--release-directory"))
        .stdout(predicate::str::contains("--skip-changelog"))
        .stdout(predicate::str::contains("--create-pr-for-branch"));
}

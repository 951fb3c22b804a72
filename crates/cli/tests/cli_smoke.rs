//! CLI smoke tests for skbuild.
//!
//! These tests verify that all CLI commands run without panicking, return
//! appropriate exit codes, and that the orchestration-order and patch
//! properties hold end to end.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command for the skbuild binary.
fn skbuild_cmd() -> Command {
  cargo_bin_cmd!("skbuild")
}

/// Unpatched GN header content, as shipped in the vendored checkout.
const UNPATCHED_HEADER: &str = "\
// Copyright 2014 The Chromium Authors. All rights reserved.\n\
#include <stddef.h>\n\
#include <string>\n";

/// Create a checkout root containing the GN header the patch step targets.
fn checkout_with_gn_header() -> TempDir {
  let temp = TempDir::new().unwrap();
  let header = temp.path().join("gn/src/base/files/file_path.h");
  fs::create_dir_all(header.parent().unwrap()).unwrap();
  fs::write(&header, UNPATCHED_HEADER).unwrap();
  temp
}

fn gn_header_content(root: &Path) -> String {
  fs::read_to_string(root.join("gn/src/base/files/file_path.h")).unwrap()
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_works() {
  skbuild_cmd()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_works() {
  skbuild_cmd()
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains("skbuild"));
}

#[test]
fn subcommand_help_works() {
  for cmd in &["build", "args", "patch"] {
    skbuild_cmd()
      .arg(cmd)
      .arg("--help")
      .assert()
      .success()
      .stdout(predicate::str::contains("Usage"));
  }
}

// =============================================================================
// Argument assembly
// =============================================================================

#[test]
fn args_linux_arm64_release() {
  skbuild_cmd()
    .args(["args", "--target", "linux", "--machine", "arm64", "--build-type", "release"])
    .assert()
    .success()
    .stdout(predicate::str::contains("is_official_build=true"))
    .stdout(predicate::str::contains("target_cpu=\"arm64\""))
    .stdout(predicate::str::contains("skia_gl_standard=\"gles\""))
    .stdout(predicate::str::contains("cc=\"clang\""))
    .stdout(predicate::str::contains("ndk=").not())
    .stdout(predicate::str::contains("skia_use_metal").not());
}

#[test]
fn args_wasm_debug() {
  skbuild_cmd()
    .args(["args", "--target", "wasm", "--machine", "x64", "--build-type", "debug"])
    .assert()
    .success()
    .stdout(predicate::str::contains("is_debug=true"))
    .stdout(predicate::str::contains("skia_use_wuffs=true"))
    .stdout(predicate::str::contains("skia_gl_standard=\"webgl\""))
    .stdout(predicate::str::contains("skia_use_direct3d").not());
}

#[test]
fn args_rejects_unknown_target() {
  skbuild_cmd()
    .args(["args", "--target", "freebsd"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("unknown target"));
}

#[test]
fn args_android_without_ndk_fails() {
  skbuild_cmd()
    .args(["args", "--target", "android", "--machine", "arm64"])
    .env_remove("ANDROID_NDK_HOME")
    .env_remove("ANDROID_NDK")
    .assert()
    .failure()
    .stderr(predicate::str::contains("NDK"));
}

#[test]
fn args_android_takes_ndk_from_env() {
  skbuild_cmd()
    .args(["args", "--target", "android", "--machine", "arm64"])
    .env("ANDROID_NDK_HOME", "/opt/android-ndk-r21")
    .assert()
    .success()
    .stdout(predicate::str::contains("ndk=\"/opt/android-ndk-r21\""));
}

#[test]
fn args_json_is_parseable() {
  let output = skbuild_cmd()
    .args(["args", "--target", "wasm", "--machine", "x64", "--format", "json"])
    .assert()
    .success()
    .get_output()
    .stdout
    .clone();

  let doc: serde_json::Value = serde_json::from_slice(&output).unwrap();
  assert_eq!(doc["target"]["os"], "wasm");
  assert_eq!(doc["target"]["build_type"], "release");

  let args = doc["args"].as_array().unwrap();
  let webgl = args
    .iter()
    .find(|arg| arg["key"] == "skia_gl_standard")
    .expect("skia_gl_standard missing from json args");
  assert_eq!(webgl["value"], "webgl");
}

// =============================================================================
// Header patch
// =============================================================================

#[test]
fn patch_inserts_include_and_is_idempotent() {
  let temp = checkout_with_gn_header();

  skbuild_cmd()
    .args(["patch", "--root"])
    .arg(temp.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("inserted"));

  let patched = gn_header_content(temp.path());
  assert!(patched.contains("#include <stddef.h>\n#include <cstdint>\n"));

  // Second run must not rewrite anything
  skbuild_cmd()
    .args(["patch", "--root"])
    .arg(temp.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("already"));
  assert_eq!(gn_header_content(temp.path()), patched);
}

#[test]
fn patch_tolerates_a_missing_header() {
  let temp = TempDir::new().unwrap();

  skbuild_cmd()
    .args(["patch", "--root"])
    .arg(temp.path())
    .assert()
    .success()
    .stderr(predicate::str::contains("nothing patched"));
}

// =============================================================================
// Build orchestration
// =============================================================================

#[test]
fn build_fails_before_patching_when_ninja_is_missing() {
  // Runner discovery precedes the patch: with no ninja on PATH the header
  // must be left untouched.
  let temp = checkout_with_gn_header();

  skbuild_cmd()
    .args(["build", "--target", "linux", "--machine", "x64", "--root"])
    .arg(temp.path())
    .env("PATH", "")
    .assert()
    .failure()
    .stderr(predicate::str::contains("ninja not found"));

  assert_eq!(gn_header_content(temp.path()), UNPATCHED_HEADER);
}

#[cfg(unix)]
#[test]
fn build_dry_run_prints_the_plan() {
  use std::os::unix::fs::PermissionsExt;

  let bin = TempDir::new().unwrap();
  let stub = bin.path().join("ninja");
  fs::write(&stub, "#!/bin/sh\nexit 0\n").unwrap();
  fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();

  let temp = checkout_with_gn_header();

  skbuild_cmd()
    .args(["build", "--target", "linux", "--machine", "arm64", "--dry-run", "--root"])
    .arg(temp.path())
    .env("PATH", bin.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("gen out/Release-linux-arm64"))
    .stdout(predicate::str::contains("--args=is_official_build=true"))
    .stdout(predicate::str::contains("-C out/Release-linux-arm64 skia modules"));

  // Dry runs only print the plan; the header patch does not run
  assert_eq!(gn_header_content(temp.path()), UNPATCHED_HEADER);
}

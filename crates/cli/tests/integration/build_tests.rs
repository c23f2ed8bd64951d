//! Build run integration tests against a fake compiler.

use predicates::prelude::*;
use serial_test::serial;

use super::common::TestEnv;

#[test]
#[serial]
fn first_run_builds_both_archives() {
  let env = TestEnv::new();

  env
    .build_cmd()
    .assert()
    .success()
    .stdout(predicate::str::contains("Building"))
    .stdout(predicate::str::contains("sqlite3.c"))
    .stdout(predicate::str::contains("libap2p.c"));

  let calls = env.invocations();
  assert_eq!(calls.len(), 2);
  assert!(calls[0].ends_with("libsqlite3.a"));
  assert!(calls[1].ends_with("libap2p.a"));
  assert!(env.build_dir().join("libsqlite3.a").is_file());
  assert!(env.build_dir().join("libap2p.a").is_file());
}

#[test]
#[serial]
fn later_runs_skip_the_dependency() {
  let env = TestEnv::new();

  env.build_cmd().assert().success();

  for _ in 0..2 {
    env
      .build_cmd()
      .assert()
      .success()
      .stdout(predicate::str::contains("libap2p.c"))
      .stdout(predicate::str::contains("sqlite3.c").not());
  }

  let calls = env.invocations();
  assert_eq!(calls.len(), 4);
  assert_eq!(calls.iter().filter(|c| c.ends_with("libsqlite3.a")).count(), 1);
  assert_eq!(calls.iter().filter(|c| c.ends_with("libap2p.a")).count(), 3);
}

#[test]
#[serial]
fn release_windows_build_reports_mode_and_target() {
  let env = TestEnv::new();

  env
    .build_cmd()
    .args(["--release", "--target=x86_64-pc-windows-gnu"])
    .assert()
    .success()
    .stdout(predicate::str::contains("sqlite3.c for windows"))
    .stdout(predicate::str::contains("libap2p.c in release mode for windows"));

  assert!(env.build_dir().join("libsqlite3.lib").is_file());
  assert!(env.build_dir().join("libap2p.lib").is_file());
}

#[test]
#[serial]
fn unrecognized_flags_are_ignored() {
  let env = TestEnv::new();

  env
    .build_cmd()
    .args(["--bogus", "--release", "extra"])
    .assert()
    .success()
    .stdout(predicate::str::contains("libap2p.c in release mode"));

  assert_eq!(env.invocations().len(), 2);
}

#[test]
#[serial]
fn compiler_failure_still_exits_zero() {
  let env = TestEnv::new();

  env
    .build_cmd()
    .env("FAKE_CC_EXIT", "1")
    .assert()
    .success()
    .stderr(predicate::str::contains("compiler exited with failure"))
    .stderr(predicate::str::contains("\x1b[").not());

  assert_eq!(env.invocations().len(), 2);
}

#[test]
#[serial]
fn compiler_diagnostics_pass_through_byte_for_byte() {
  let env = TestEnv::new();

  let output = env
    .build_cmd()
    .env("FAKE_CC_DIAG", r"caf\351 \377\n")
    .output()
    .unwrap();

  assert!(output.status.success());
  let raw: &[u8] = b"caf\xe9 \xff\n";
  let occurrences = output.stderr.windows(raw.len()).filter(|w| *w == raw).count();
  assert_eq!(occurrences, 2, "stderr was {:?}", output.stderr);
  assert!(!output.stderr.windows(3).any(|w| w == "\u{fffd}".as_bytes()));
}

#[test]
#[serial]
fn strict_mode_fails_on_compiler_failure() {
  let env = TestEnv::new();

  env
    .build_cmd()
    .arg("--strict")
    .env("FAKE_CC_EXIT", "1")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Build failed"))
    .stderr(predicate::str::contains("exited with code Some(1)"));

  // The project step is never issued after the dependency failed.
  assert_eq!(env.invocations().len(), 1);
}

//! info / deps command integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn info_text_lists_fields() {
  let env = TestEnv::with_barrels(&["hello.barrel"]);

  env
    .fermenter_cmd()
    .args(["info", "hello"])
    .assert()
    .success()
    .stdout(predicate::str::contains("hello 1.2.3"))
    .stdout(predicate::str::contains("Prints a friendly greeting"))
    .stdout(predicate::str::contains("amd64, arm64"))
    .stdout(predicate::str::contains("MIT"));
}

#[test]
fn info_json_is_the_descriptor() {
  let env = TestEnv::with_barrels(&["hello.barrel"]);

  let output = env
    .fermenter_cmd()
    .args(["info", "hello", "--format", "json"])
    .assert()
    .success()
    .get_output()
    .stdout
    .clone();

  let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
  assert_eq!(json["name"], "hello");
  assert_eq!(json["version"], "1.2.3");
  assert_eq!(json["architectures"], serde_json::json!(["amd64", "arm64"]));
  assert_eq!(json["build_dependencies"], serde_json::json!(["fermenter-missing-tool"]));
}

#[test]
fn info_accepts_unnormalized_names() {
  let env = TestEnv::with_barrels(&["hello.barrel"]);

  env.fermenter_cmd().args(["info", "HeL-lo"]).assert().success();
}

#[test]
fn deps_reports_missing_without_failing() {
  let env = TestEnv::with_barrels(&["hello.barrel"]);

  env
    .fermenter_cmd()
    .args(["deps", "hello"])
    .assert()
    .success()
    .stdout(predicate::str::contains("sh (runtime)"))
    .stdout(predicate::str::contains("1 of 2 dependencies found"))
    .stderr(predicate::str::contains("fermenter-missing-tool (build) not found"));
}

#[test]
fn deps_json() {
  let env = TestEnv::with_barrels(&["hello.barrel"]);

  let output = env
    .fermenter_cmd()
    .args(["deps", "hello", "-f", "json"])
    .assert()
    .success()
    .get_output()
    .stdout
    .clone();

  let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
  let report = json.as_array().unwrap();
  assert_eq!(report.len(), 2);
  assert_eq!(report[0]["kind"], "runtime");
  assert!(report[0]["path"].is_string());
  assert_eq!(report[1]["name"], "fermenter-missing-tool");
  assert!(report[1]["path"].is_null());
  assert_eq!(report[1]["installed"], false);
  assert!(report[1]["barrel"].is_null());
}

#[test]
fn deps_counts_installed_packages_as_found() {
  let env = TestEnv::with_barrels(&["hello.barrel"]);
  std::fs::create_dir_all(env.workdir("fermentermissingtool")).unwrap();

  env
    .fermenter_cmd()
    .args(["deps", "hello"])
    .assert()
    .success()
    .stdout(predicate::str::contains("fermenter-missing-tool (build) installed by fermenter"))
    .stdout(predicate::str::contains("2 of 2 dependencies found"));
}

#[test]
fn deps_points_at_barrel_for_missing_dependency() {
  let env = TestEnv::with_barrels(&["hello.barrel"]);
  let barrel = env.barrels_path().join("fermentermissingtool.barrel");
  std::fs::write(&barrel, "pkgname=fermenter-missing-tool\nversion=0.1\n").unwrap();

  env
    .fermenter_cmd()
    .args(["deps", "hello"])
    .assert()
    .success()
    .stdout(predicate::str::contains("1 of 2 dependencies found"))
    .stdout(predicate::str::contains("1 missing dependencies have a barrel"))
    .stderr(predicate::str::contains("can be built from"))
    .stderr(predicate::str::contains("fermentermissingtool.barrel"));

  let output = env
    .fermenter_cmd()
    .args(["deps", "hello", "-f", "json"])
    .assert()
    .success()
    .get_output()
    .stdout
    .clone();

  let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
  assert_eq!(json[1]["barrel"], barrel.display().to_string());
  assert_eq!(json[1]["installed"], false);
}

#[test]
fn deps_for_package_without_dependencies() {
  let env = TestEnv::with_barrels(&["multiarch.barrel"]);

  env
    .fermenter_cmd()
    .args(["deps", "multiarch"])
    .assert()
    .success()
    .stdout(predicate::str::contains("declares no dependencies"));
}

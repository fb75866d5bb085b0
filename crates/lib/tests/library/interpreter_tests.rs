//! Scripts run end to end through the runner and real processes.

use fermenter_lib::descriptor::Action;
use fermenter_lib::platform::Arch;
use fermenter_lib::script::Outcome;

use super::common::TestEnv;

#[test]
fn echo_version_runs_in_package_workdir() {
  let env = TestEnv::new();
  let desc = env.hello("\techo $version", "\ttrue", "\tmatch 1 == 1");

  let outcome = env.runner(None).run(&desc, Action::Build).unwrap();

  assert_eq!(outcome, Outcome::Completed);
  assert!(env.workdir().is_dir());
}

#[test]
fn single_line_block_runs() {
  let env = TestEnv::new();
  let text = super::common::barrel_text("\ttrue", "\ttrue", "\tmatch 1 == 1")
    .replace("build() {\n\ttrue\n}", "build() { touch $version }");
  let path = env.write_barrel("hello", &text);
  let desc = fermenter_lib::descriptor::load(&path).unwrap();

  env.runner(None).run(&desc, Action::Build).unwrap();

  assert!(env.workdir().join("1.2.3").exists());
}

#[test]
fn commands_see_the_working_directory() {
  let env = TestEnv::new();
  let desc = env.hello("\t@here=\"pwd\"\n\tfileMan write where.txt $here", "\ttrue", "\tmatch 1 == 1");

  let outcome = env.runner(None).run(&desc, Action::Build).unwrap();

  assert!(matches!(outcome, Outcome::FileWritten { .. }));
  assert_eq!(env.read("where.txt"), env.workdir().to_string_lossy());
}

#[test]
fn arch_guards_gate_commands() {
  let body = "\ttouch before.marker\n\
              \tarm64:\n\
              \t\ttouch arm.marker\n\
              \tamd64:\n\
              \t\ttouch amd.marker\n\
              \t\ttouch amd2.marker\n\
              \ttouch after.marker";

  let env = TestEnv::new();
  let desc = env.hello(body, "\ttrue", "\tmatch 1 == 1");
  env.runner(Some(Arch::Amd64)).run(&desc, Action::Build).unwrap();

  let dir = env.workdir();
  assert!(dir.join("before.marker").exists());
  assert!(dir.join("amd.marker").exists());
  assert!(dir.join("amd2.marker").exists());
  assert!(dir.join("after.marker").exists());
  assert!(!dir.join("arm.marker").exists());

  let env = TestEnv::new();
  let desc = env.hello(body, "\ttrue", "\tmatch 1 == 1");
  env.runner(Some(Arch::Arm64)).run(&desc, Action::Build).unwrap();

  let dir = env.workdir();
  assert!(dir.join("arm.marker").exists());
  assert!(!dir.join("amd.marker").exists());
  assert!(dir.join("after.marker").exists());
}

#[test]
fn file_man_write_then_append() {
  let env = TestEnv::new();
  let desc = env.hello(
    "\tfileMan write notes.txt \"hello\\nworld\"",
    "\tfileMan append notes.txt \\nbye",
    "\tmatch 1 == 1",
  );
  let mut runner = env.runner(None);

  runner.run(&desc, Action::Build).unwrap();
  assert_eq!(env.read("notes.txt"), "hello\nworld");

  runner.run(&desc, Action::Install).unwrap();
  assert_eq!(env.read("notes.txt"), "hello\nworld\nbye");
}

#[test]
fn captured_output_feeds_the_assertion() {
  let env = TestEnv::new();
  let desc = env.hello("\ttrue", "\ttrue", "\t@greeting=\"echo hello\"\n\tmatch $greeting == $pkgname");

  let outcome = env.runner(None).run(&desc, Action::Test).unwrap();
  assert_eq!(outcome, Outcome::Asserted);
}

#[test]
fn unbound_reference_is_passed_as_bare_name() {
  let env = TestEnv::new();
  let desc = env.hello("\t@value=\"echo $nothing\"\n\tfileMan write value.txt $value", "\ttrue", "\tmatch 1 == 1");

  env.runner(None).run(&desc, Action::Build).unwrap();
  assert_eq!(env.read("value.txt"), "nothing");
}

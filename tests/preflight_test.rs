//! End-to-end preflight runs against mock hosts.

use hostcheck::config::{Alias, CheckConfig, Requirement};
use hostcheck::environment::MockHost;
use hostcheck::runner::{Preflight, Stage};
use hostcheck::shell::MockRunner;
use hostcheck::ui::MockUI;
use std::fs;
use tempfile::TempDir;

fn compile_command(scratch: &TempDir) -> String {
    let pid = std::process::id();
    format!(
        "g++ -o {} {}",
        scratch.path().join(format!("hostcheck-{}", pid)).display(),
        scratch.path().join(format!("hostcheck-{}.cpp", pid)).display()
    )
}

fn host(scratch: &TempDir, release: &str) -> MockHost {
    MockHost::new()
        .with_kernel_release(release)
        .with_file(
            "/proc/mounts",
            "proc /proc proc rw 0 0\ndevpts /dev/pts devpts rw,gid=5,mode=620 0 0\n",
        )
        .with_path("/dev/ptmx")
        .with_env("TEST_TMPDIR", scratch.path().to_str().unwrap())
}

fn config() -> CheckConfig {
    CheckConfig {
        requirements: vec![
            Requirement::new("Bash", "bash --version", "3.2"),
            Requirement::new("Make", "make --version", "4.0"),
            Requirement::new("Grep", "grep --version", "2.5.1a"),
        ],
        aliases: vec![Alias::new("awk", "GNU"), Alias::new("yacc", "Bison")],
        ..CheckConfig::default()
    }
}

fn runner(scratch: &TempDir, make_banner: &str) -> MockRunner {
    MockRunner::new()
        .with_output(
            "bash --version",
            "GNU bash, version 5.2.15(1)-release (x86_64-pc-linux-gnu)\n",
        )
        .with_output("make --version", make_banner)
        .with_output("grep --version", "grep (GNU grep) 3.8\n")
        .with_output("awk --version", "GNU Awk 5.2.1, API 3.2\n")
        .with_output("yacc --version", "bison (GNU Bison) 3.8.2\n")
        .with_output(&compile_command(scratch), "")
        .with_output("nproc", "12\n")
}

#[test]
fn healthy_host_passes_with_every_line_reported() {
    let scratch = TempDir::new().unwrap();
    let config = config();
    let runner = runner(&scratch, "GNU Make 4.3\n");
    let host = host(&scratch, "6.1.0-13-amd64");
    let mut ui = MockUI::new();

    let result = Preflight::new(&config, &runner, &host).run(&mut ui);

    assert!(result.success());
    assert_eq!(result.exit_code(), 0);
    assert_eq!(
        ui.lines(),
        [
            "OK:    Bash 5.2.15 >= 3.2",
            "OK:    Make 4.3 >= 4.0",
            "OK:    Grep 3.8 >= 2.5.1a",
            "OK:    awk is GNU",
            "OK:    yacc is Bison",
            "OK:    Linux Kernel 6.1.0 >= 5.4",
            "OK:    Linux Kernel supports UNIX 98 PTY",
            "OK:    g++ works",
            "OK:    nproc reports 12 logical cores are available",
            "All host toolchain checks passed.",
        ]
    );
}

#[test]
fn old_make_is_one_failure() {
    let scratch = TempDir::new().unwrap();
    let config = config();
    let runner = runner(&scratch, "GNU Make 3.81\n");
    let host = host(&scratch, "6.1.0");
    let mut ui = MockUI::new();

    let result = Preflight::new(&config, &runner, &host).run(&mut ui);

    assert_eq!(result.failures, 1);
    assert_eq!(result.exit_code(), 1);
    assert_eq!(ui.errors(), ["Make version 3.81 < required 4.0"]);
    assert_eq!(
        ui.lines().last().unwrap(),
        "Host toolchain checks failed: 1 item(s)"
    );
}

#[test]
fn old_kernel_without_pty_counts_once() {
    let scratch = TempDir::new().unwrap();
    let config = config();
    let runner = runner(&scratch, "GNU Make 4.3\n");
    let host = MockHost::new()
        .with_kernel_release("4.19.0-21-amd64")
        .with_env("TEST_TMPDIR", scratch.path().to_str().unwrap());
    let mut ui = MockUI::new();

    let result = Preflight::new(&config, &runner, &host).run(&mut ui);

    assert_eq!(result.failures, 1);
    assert_eq!(
        ui.errors(),
        [
            "Linux kernel (4.19.0-21-amd64) is TOO OLD (5.4 or later required)",
            "Linux Kernel does NOT support UNIX 98 PTY",
        ]
    );
}

#[test]
fn wrong_alias_implementation_fails() {
    let scratch = TempDir::new().unwrap();
    let config = config();
    let runner = runner(&scratch, "GNU Make 4.3\n")
        .with_output("awk --version", "mawk 1.3.4 20200120\n");
    let host = host(&scratch, "6.1.0");
    let mut ui = MockUI::new();

    let result = Preflight::new(&config, &runner, &host).run(&mut ui);

    assert_eq!(result.failures, 1);
    assert_eq!(ui.errors(), ["awk is not GNU"]);
}

#[test]
fn repeated_runs_are_identical() {
    let scratch = TempDir::new().unwrap();
    let config = config();
    let runner = runner(&scratch, "GNU Make 3.81\n");
    let host = host(&scratch, "6.1.0");

    let mut first = MockUI::new();
    let mut second = MockUI::new();
    let a = Preflight::new(&config, &runner, &host).run(&mut first);
    let b = Preflight::new(&config, &runner, &host).run(&mut second);

    assert_eq!(first.lines(), second.lines());
    assert_eq!(a.failures, b.failures);
}

#[test]
fn compiler_leaves_no_scratch_files() {
    let scratch = TempDir::new().unwrap();
    let config = config();
    let host = host(&scratch, "6.1.0");

    for compiler_exit in [None, Some(1)] {
        let mut runner = runner(&scratch, "GNU Make 4.3\n");
        if let Some(code) = compiler_exit {
            runner = runner.with_exit(&compile_command(&scratch), code);
        }
        Preflight::new(&config, &runner, &host).run(&mut MockUI::new());
        assert!(fs::read_dir(scratch.path()).unwrap().next().is_none());
    }
}

#[test]
fn stages_follow_the_fixed_order() {
    assert_eq!(
        Stage::ALL,
        [
            Stage::Requirements,
            Stage::Aliases,
            Stage::Kernel,
            Stage::Compiler,
            Stage::Cores,
        ]
    );
}

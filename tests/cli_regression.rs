// Regression tests for the gtest-compatible CLI surface, driven against
// the two demonstration suite binaries.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use std::env;
use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

fn selfcheck() -> Command {
    Command::cargo_bin("selfcheck").unwrap()
}

fn failcheck() -> Command {
    Command::cargo_bin("failcheck").unwrap()
}

fn temp_report(name: &str) -> PathBuf {
    env::temp_dir().join(format!("mtest_{}_{}.xml", name, std::process::id()))
}

#[test]
fn passing_suite_exits_zero_with_progress_lines() {
    selfcheck()
        .arg("--mt_no_color")
        .assert()
        .success()
        .stdout(
            contains("[ RUN      ] Math works")
                .and(contains("[       OK ] Math works"))
                .and(contains("[       OK ] Mocking check"))
                .and(contains("[ SKIPPED  ] Pending feature"))
                .and(contains("[  PASSED  ] 5 tests."))
                .and(contains("[ SKIPPED  ] 1 test."))
                .and(contains("ms total")),
        );
}

#[test]
fn filter_selects_by_glob_and_excludes_the_rest() {
    selfcheck()
        .arg("--mt_no_color")
        .arg("--mt_filter=Math*")
        .assert()
        .success()
        .stdout(
            contains("[       OK ] Math works")
                .and(contains("Vector matcher").not())
                .and(contains("[  PASSED  ] 1 test.")),
        );
}

#[test]
fn gtest_namespace_is_accepted() {
    selfcheck()
        .arg("--gtest_color=no")
        .arg("--gtest_filter=Vector*")
        .assert()
        .success()
        .stdout(contains("[       OK ] Vector matcher").and(contains("Math works").not()));
}

#[test]
fn suite_qualified_filter_matches() {
    selfcheck()
        .arg("--mt_no_color")
        .arg("--mt_filter=mtest.Floating*")
        .assert()
        .success()
        .stdout(contains("[       OK ] Floating math"));
}

#[test]
fn list_mode_prints_names_and_runs_nothing() {
    selfcheck()
        .arg("--gtest_list_tests")
        .assert()
        .success()
        .stdout(
            contains("mtest.")
                .and(contains("  Math works"))
                .and(contains("  Pending feature"))
                .and(contains("[ RUN").not()),
        );
}

#[test]
fn help_exits_zero() {
    selfcheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--mt_filter"));
}

#[test]
fn failing_suite_exits_one_and_lists_failures() {
    failcheck()
        .arg("--mt_no_color")
        .assert()
        .code(1)
        .stdout(
            contains("[       OK ] Arithmetic holds")
                .and(contains("[   FAILED ] Arithmetic breaks"))
                .and(contains("error: expected [4] == [5]"))
                .and(contains("error: boom"))
                .and(contains("[  FAILED  ] 2 tests, listed below:"))
                .and(contains("[  FAILED  ] Body panics")),
        );
}

#[test]
fn xml_report_counts_failures_and_skips() {
    let report = temp_report("failcheck");
    failcheck()
        .arg("--mt_no_color")
        .arg(format!("--mt_output=xml:{}", report.display()))
        .assert()
        .code(1);

    let xml = fs::read_to_string(&report).unwrap();
    let _ = fs::remove_file(&report);

    assert!(xml.contains("<testsuites tests=\"3\" failures=\"2\" skipped=\"0\""));
    assert!(xml.contains("<testsuite name=\"mtest\""));
    assert!(xml.contains("<testcase name=\"Arithmetic holds\""));
    assert_eq!(xml.matches("<failure ").count(), 2);
}

#[test]
fn unwritable_xml_path_is_ignored() {
    selfcheck()
        .arg("--mt_no_color")
        .arg("--mt_output=xml:/nonexistent-dir-for-mtest/report.xml")
        .assert()
        .success();
}

//! Harness entry point.
//!
//! Parses the gtest-compatible flag surface, dispatches list mode, runs
//! the registered tests, and renders the console and optional XML
//! reports. Suite binaries call [`run`] from `main` after registering
//! their tests and exit with its return value.

use clap::Parser;

use crate::cli::args::{MtArgs, RunOptions};
use crate::cli::output::ConsoleReporter;
use crate::filter;
use crate::registry;
use crate::report;
use crate::runner;

pub mod args;
pub mod output;

/// Runs the registered tests with options taken from the process
/// arguments. Returns the process exit code: 1 when any selected test
/// failed, 0 otherwise (including list and help modes).
pub fn run() -> i32 {
    run_with(RunOptions::from(MtArgs::parse()))
}

/// Runs the registered tests with explicit options.
pub fn run_with(options: RunOptions) -> i32 {
    let tests = registry::snapshot();
    let mut reporter = ConsoleReporter::new(options.color_enabled);

    if options.list_only {
        reporter.list_tests(&tests);
        return 0;
    }

    let selected = tests
        .iter()
        .filter(|case| filter::selects(&options.filter_pattern, &case.name))
        .count();
    reporter.run_started(selected);

    let (results, elapsed) = runner::run_tests(&tests, &options.filter_pattern, &mut reporter);
    let summary = runner::summarize(&results);
    reporter.summary(&summary, elapsed);

    if let Some(path) = &options.xml_path {
        // A report file that cannot be opened is skipped, not fatal.
        let _ = report::write_xml(path, &results, elapsed);
    }

    if summary.failed > 0 {
        1
    } else {
        0
    }
}

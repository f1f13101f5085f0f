//! Test execution.
//!
//! Drives the registered tests strictly in declaration order:
//!
//! 1. A test the filter rejects is excluded outright; it produces no
//!    result and affects no count.
//! 2. A `Skip` test, or a `Normal` test while any `Only` test exists,
//!    yields a skipped result with zero duration; its body never runs.
//! 3. Everything else runs inside a panic boundary with the failure
//!    ledger reset beforehand and drained afterward.
//!
//! One [`TestResult`] is appended per selected test, in the same order
//! the tests were declared. Nothing escapes a test body: a panic is
//! converted into a recorded failure and the loop moves on.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use crate::context;
use crate::filter;
use crate::registry::{TestCase, TestStatus};

/// Outcome of one selected test. Immutable once built.
#[derive(Debug, Clone)]
pub struct TestResult {
    pub name: String,
    pub file: &'static str,
    pub line: u32,
    pub passed: bool,
    pub skipped: bool,
    pub duration: Duration,
    pub failures: Vec<String>,
}

/// Aggregate counters derived from a completed result sequence.
#[derive(Debug, Default, Clone)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub failed_names: Vec<String>,
}

/// Receives progress notifications as tests run. The console reporter
/// implements this; programmatic runs can pass [`SilentListener`].
pub trait RunListener {
    fn test_started(&mut self, case: &TestCase);
    fn test_finished(&mut self, result: &TestResult);
}

/// Listener that reports nothing.
pub struct SilentListener;

impl RunListener for SilentListener {
    fn test_started(&mut self, _case: &TestCase) {}
    fn test_finished(&mut self, _result: &TestResult) {}
}

/// Runs every test selected by `pattern` and returns the ordered results
/// plus the wall-clock time of the whole loop.
pub fn run_tests(
    tests: &[TestCase],
    pattern: &str,
    listener: &mut dyn RunListener,
) -> (Vec<TestResult>, Duration) {
    let has_only = tests.iter().any(|t| t.status == TestStatus::Only);
    let run_started = Instant::now();
    let mut results = Vec::new();

    // The default hook would dump every caught panic to stderr in the
    // middle of the progress lines; the boundary below reports them.
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));

    for case in tests {
        if !filter::selects(pattern, &case.name) {
            continue;
        }

        let forced_skip = has_only && case.status != TestStatus::Only;
        if case.status == TestStatus::Skip || forced_skip {
            let result = TestResult {
                name: case.name.clone(),
                file: case.file,
                line: case.line,
                passed: false,
                skipped: true,
                duration: Duration::ZERO,
                failures: Vec::new(),
            };
            listener.test_finished(&result);
            results.push(result);
            continue;
        }

        listener.test_started(case);
        let result = run_body(case);
        listener.test_finished(&result);
        results.push(result);
    }

    panic::set_hook(default_hook);
    (results, run_started.elapsed())
}

/// Executes a single selected test body. The ledger is reset exactly
/// once before the body starts and read exactly once after it ends.
fn run_body(case: &TestCase) -> TestResult {
    context::reset();
    let started = Instant::now();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| (case.body)()));
    let duration = started.elapsed();

    if let Err(payload) = outcome {
        context::record_failure(format!(
            "{}:{}: error: {}",
            case.file,
            case.line,
            panic_message(payload.as_ref())
        ));
    }

    let passed = !context::has_failed();
    TestResult {
        name: case.name.clone(),
        file: case.file,
        line: case.line,
        passed,
        skipped: false,
        duration,
        failures: context::take_failures(),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown test body error".to_string()
    }
}

/// Derives the aggregate counters from a completed result sequence.
pub fn summarize(results: &[TestResult]) -> RunSummary {
    let mut summary = RunSummary::default();
    for result in results {
        if result.skipped {
            summary.skipped += 1;
        } else if result.passed {
            summary.passed += 1;
        } else {
            summary.failed += 1;
            summary.failed_names.push(result.name.clone());
        }
    }
    summary
}

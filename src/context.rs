//! Per-test failure ledger.
//!
//! Exactly one test body runs at a time, so a single process-wide flag
//! and message list are unambiguous: the running test owns them between
//! the runner's `reset` and `take_failures` calls, and the runner is the
//! sole caller of both. Assertions and the panic boundary append through
//! [`record_failure`] without threading a context object through every
//! call site.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use once_cell::sync::Lazy;

static FAILED: AtomicBool = AtomicBool::new(false);
static FAILURES: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Clears the ledger. Called exactly once before each test body starts.
pub fn reset() {
    FAILED.store(false, Ordering::SeqCst);
    lock(&FAILURES).clear();
}

/// Records one formatted failure line and marks the current test failed.
/// The line is echoed to stdout immediately so failures appear between
/// the RUN and verdict lines of the console report.
pub fn record_failure(message: String) {
    println!("{message}");
    FAILED.store(true, Ordering::SeqCst);
    lock(&FAILURES).push(message);
}

/// Whether the current test has recorded at least one failure.
pub fn has_failed() -> bool {
    FAILED.load(Ordering::SeqCst)
}

/// Drains the recorded failures. Called exactly once after the test body
/// finishes; the messages become the owning `TestResult`'s failure list.
pub fn take_failures() -> Vec<String> {
    std::mem::take(&mut *lock(&FAILURES))
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Serializes tests that touch the ledger. The harness's own test binary
/// runs cases in parallel; the ledger is single-owner by contract.
#[cfg(test)]
pub(crate) fn ledger_guard() -> MutexGuard<'static, ()> {
    static GUARD: Mutex<()> = Mutex::new(());
    GUARD.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_take_cycle_is_exact() {
        let _guard = ledger_guard();
        reset();
        assert!(!has_failed());
        record_failure("a.rs:1: error: first".to_string());
        record_failure("a.rs:2: error: second".to_string());
        assert!(has_failed());

        let failures = take_failures();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0], "a.rs:1: error: first");
        assert_eq!(failures[1], "a.rs:2: error: second");

        // Drained; a fresh reset starts the next test clean.
        reset();
        assert!(!has_failed());
        assert!(take_failures().is_empty());
    }
}

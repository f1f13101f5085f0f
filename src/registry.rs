//! Test registration.
//!
//! Tests self-register through the `test!` family of macros into a
//! global, append-only registry. Registration happens on a single thread
//! before the runner starts; the registry is read-only afterward, and
//! insertion order equals declaration order within one registration
//! function. That order is also the display and run order.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use lazy_static::lazy_static;

/// Suite name under which every test in a run is reported. Also forms
/// the composite `<suite>.<test>` name the filter recognizes.
pub const SUITE_NAME: &str = "mtest";

/// Inclusion tag attached to a test at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus {
    Normal,
    /// Never runs.
    Skip,
    /// When any test carries this tag, all `Normal` tests are skipped.
    Only,
}

/// A registered test body. Shared so the registry can be snapshotted
/// without consuming it.
pub type TestFn = Arc<dyn Fn() + Send + Sync + 'static>;

/// A declared test: name, body, status tag, and declaration site.
#[derive(Clone)]
pub struct TestCase {
    pub name: String,
    pub body: TestFn,
    pub status: TestStatus,
    pub file: &'static str,
    pub line: u32,
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("status", &self.status)
            .field("file", &self.file)
            .field("line", &self.line)
            .finish()
    }
}

lazy_static! {
    static ref REGISTRY: Mutex<Vec<TestCase>> = Mutex::new(Vec::new());
}

/// Appends a test case to the registry. There is no removal operation.
pub fn register(
    name: impl Into<String>,
    body: TestFn,
    status: TestStatus,
    file: &'static str,
    line: u32,
) {
    let case = TestCase {
        name: name.into(),
        body,
        status,
        file,
        line,
    };
    lock_registry().push(case);
}

/// Returns the registered tests in declaration order.
pub fn snapshot() -> Vec<TestCase> {
    lock_registry().clone()
}

fn lock_registry() -> MutexGuard<'static, Vec<TestCase>> {
    REGISTRY.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Registers a normal test. Call from a registration function that runs
/// before `cli::run`; the call site's file and line are captured for
/// reporting.
#[macro_export]
macro_rules! test {
    ($name:expr, $body:expr $(,)?) => {
        $crate::registry::register(
            $name,
            ::std::sync::Arc::new($body),
            $crate::registry::TestStatus::Normal,
            file!(),
            line!(),
        )
    };
}

/// Registers a test that is always reported as skipped.
#[macro_export]
macro_rules! test_skip {
    ($name:expr, $body:expr $(,)?) => {
        $crate::registry::register(
            $name,
            ::std::sync::Arc::new($body),
            $crate::registry::TestStatus::Skip,
            file!(),
            line!(),
        )
    };
}

/// Registers an exclusive test: when any exist, only they run.
#[macro_export]
macro_rules! test_only {
    ($name:expr, $body:expr $(,)?) => {
        $crate::registry::register(
            $name,
            ::std::sync::Arc::new($body),
            $crate::registry::TestStatus::Only,
            file!(),
            line!(),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_preserves_declaration_order() {
        crate::test!("registry order first", || {});
        crate::test_skip!("registry order second", || {});
        crate::test_only!("registry order third", || {});

        let ours: Vec<TestCase> = snapshot()
            .into_iter()
            .filter(|c| c.name.starts_with("registry order"))
            .collect();
        assert_eq!(ours.len(), 3);
        assert_eq!(ours[0].name, "registry order first");
        assert_eq!(ours[0].status, TestStatus::Normal);
        assert_eq!(ours[1].status, TestStatus::Skip);
        assert_eq!(ours[2].status, TestStatus::Only);
        assert!(ours[0].file.ends_with("registry.rs"));
        assert!(ours[0].line > 0);
    }
}

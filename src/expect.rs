//! Fluent assertions.
//!
//! [`expect`] captures a value and the caller's source location, then
//! one or more terminal matchers evaluate predicates against it. Every
//! matcher XORs its raw result with the inversion flag set by [`not`];
//! a failing matcher records a `file:line: error: ...` line in the
//! per-test ledger and echoes it to the console, a passing matcher has
//! no side effect at all.
//!
//! Matchers borrow the expectation, so holding one in a binding and
//! applying several matchers yields independent evaluations.
//!
//! [`not`]: Expectation::not

use std::fmt::Debug;
use std::panic::Location;

use crate::context;
use crate::mock::CallCount;

/// One captured value plus the source location of the `expect` call.
pub struct Expectation<T> {
    value: T,
    file: &'static str,
    line: u32,
    inverted: bool,
}

/// Starts an expectation on `value`, capturing the call site.
#[track_caller]
pub fn expect<T>(value: T) -> Expectation<T> {
    let location = Location::caller();
    Expectation {
        value,
        file: location.file(),
        line: location.line(),
        inverted: false,
    }
}

impl<T> Expectation<T> {
    /// Inverts the polarity of subsequent matchers. Applying it twice
    /// restores the original polarity.
    pub fn not(mut self) -> Self {
        self.inverted = !self.inverted;
        self
    }

    fn verdict(&self, raw: bool) -> bool {
        raw != self.inverted
    }

    fn polarity(&self) -> &'static str {
        if self.inverted {
            "expected not "
        } else {
            "expected "
        }
    }

    fn fail(&self, message: &str) {
        context::record_failure(format!("{}:{}: error: {}", self.file, self.line, message));
    }
}

impl<T: Debug> Expectation<T> {
    fn check_binary<U: Debug>(&self, op: &str, rhs: &U, raw: bool) {
        if !self.verdict(raw) {
            self.fail(&format!(
                "{}[{:?}] {} [{:?}]",
                self.polarity(),
                self.value,
                op,
                rhs
            ));
        }
    }

    pub fn to_equal<U: Debug>(&self, rhs: U)
    where
        T: PartialEq<U>,
    {
        self.check_binary("==", &rhs, self.value == rhs);
    }

    pub fn to_not_equal<U: Debug>(&self, rhs: U)
    where
        T: PartialEq<U>,
    {
        self.check_binary("!=", &rhs, self.value != rhs);
    }

    pub fn to_be_greater_than<U: Debug>(&self, rhs: U)
    where
        T: PartialOrd<U>,
    {
        self.check_binary(">", &rhs, self.value > rhs);
    }

    pub fn to_be_less_than<U: Debug>(&self, rhs: U)
    where
        T: PartialOrd<U>,
    {
        self.check_binary("<", &rhs, self.value < rhs);
    }
}

impl<T> Expectation<T> {
    /// Passes when the captured container holds an element equal to
    /// `element` (inverted: holds none).
    pub fn to_contain<E>(&self, element: &E)
    where
        for<'a> &'a T: IntoIterator<Item = &'a E>,
        E: PartialEq + Debug,
    {
        let found = (&self.value).into_iter().any(|item| item == element);
        if !self.verdict(found) {
            if self.inverted {
                self.fail(&format!("expected container not to contain [{element:?}]"));
            } else {
                self.fail(&format!("expected container to contain [{element:?}]"));
            }
        }
    }

    /// Passes when the captured container has no elements (inverted: at
    /// least one).
    pub fn is_empty(&self)
    where
        for<'a> &'a T: IntoIterator,
    {
        let empty = (&self.value).into_iter().next().is_none();
        if !self.verdict(empty) {
            if self.inverted {
                self.fail("expected container not to be empty");
            } else {
                self.fail("expected container to be empty");
            }
        }
    }
}

impl<T: CallCount> Expectation<T> {
    /// Passes when the mock's recorded call count equals `n`.
    pub fn to_have_been_called_times(&self, n: usize) {
        let actual = self.value.call_count();
        if !self.verdict(actual == n) {
            self.fail(&format!(
                "{}{} mock calls, actual {}",
                self.polarity(),
                n,
                actual
            ));
        }
    }
}

//! Call-recording mocks.
//!
//! A [`Mock`] stands in for a function: every invocation snapshots its
//! arguments into an ordered ledger, then either delegates to the
//! configured behavior or returns the return type's default value. Mocks
//! are created inside a single test body and never shared across tests;
//! there is no synchronization.

/// A recording stand-in for a function `Args -> Ret`. Multi-argument
/// signatures use a tuple for `Args`.
pub struct Mock<Args, Ret> {
    calls: Vec<Args>,
    behavior: Option<Box<dyn Fn(&Args) -> Ret>>,
}

impl<Args, Ret> Mock<Args, Ret> {
    /// A mock with no behavior; calls return `Ret::default()`.
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            behavior: None,
        }
    }

    /// A mock that delegates each call to `behavior` after recording it.
    pub fn with(behavior: impl Fn(&Args) -> Ret + 'static) -> Self {
        Self {
            calls: Vec::new(),
            behavior: Some(Box::new(behavior)),
        }
    }

    /// Records the arguments, then produces the return value. The
    /// snapshot is taken whether or not a delegate exists.
    pub fn call(&mut self, args: Args) -> Ret
    where
        Ret: Default,
    {
        self.calls.push(args);
        let recorded = &self.calls[self.calls.len() - 1];
        match &self.behavior {
            Some(behavior) => behavior(recorded),
            None => Ret::default(),
        }
    }

    /// Number of recorded invocations.
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// The recorded argument snapshots, in invocation order.
    pub fn calls(&self) -> &[Args] {
        &self.calls
    }
}

impl<Args, Ret> Default for Mock<Args, Ret> {
    fn default() -> Self {
        Self::new()
    }
}

/// Capability consumed by `to_have_been_called_times`. Keeping this a
/// trait bound makes a mis-typed expectation a compile error instead of
/// a silent mismatch.
pub trait CallCount {
    fn call_count(&self) -> usize;
}

impl<Args, Ret> CallCount for Mock<Args, Ret> {
    fn call_count(&self) -> usize {
        self.calls.len()
    }
}

impl<M: CallCount + ?Sized> CallCount for &M {
    fn call_count(&self) -> usize {
        (**self).call_count()
    }
}

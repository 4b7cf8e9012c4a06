//! Shared doubles for the integration tests: a sleeper that only records and
//! an operation object with a fixed verification result.

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use pollops_core::{Operation, Sleeper};

#[derive(Debug, Clone, Default)]
pub struct RecordingSleeper {
    waits: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().unwrap().clone()
    }

    pub fn shared(&self) -> Arc<dyn Sleeper> {
        Arc::new(self.clone())
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.waits.lock().unwrap().push(duration);
    }
}

/// Operation object whose verification always returns `verifies`.
/// Every invocation bumps the shared counter.
pub struct FakeOperation {
    calls: Rc<Cell<u32>>,
    verifies: bool,
    max_attempts: u32,
}

impl FakeOperation {
    pub fn new(calls: Rc<Cell<u32>>, verifies: bool) -> Self {
        Self {
            calls,
            verifies,
            max_attempts: 1,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

impl Operation for FakeOperation {
    type Output = ();
    type Error = Infallible;

    fn invoke(&mut self) -> Result<(), Infallible> {
        self.calls.set(self.calls.get() + 1);
        Ok(())
    }

    fn verify(&self, _output: &()) -> bool {
        self.verifies
    }

    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    fn attempts_interval(&self) -> Duration {
        Duration::from_millis(10)
    }
}

//! Attempt loop: invoke an operation until it verifies, exhausts its attempt
//! budget or fails.

use std::sync::Arc;

use crate::error::RejectionError;
use crate::operation::Operation;
use crate::outcome::Outcome;
use crate::sleeper::{default_sleeper, Sleeper};

/// Bookkeeping for one run of the loop. Never outlives `settle`.
struct AttemptState<V> {
    results: Vec<V>,
    attempts_made: u32,
    max_attempts: u32,
}

impl<V> AttemptState<V> {
    fn new(max_attempts: u32) -> Self {
        Self {
            results: Vec::new(),
            attempts_made: 0,
            max_attempts,
        }
    }

    fn record(&mut self, value: V) {
        self.attempts_made += 1;
        self.results.push(value);
    }

    fn exhausted(&self) -> bool {
        self.attempts_made >= self.max_attempts
    }
}

/// Drives an [`Operation`] to a `Fulfilled` or `Rejected` outcome.
///
/// Attempts run strictly one after another on the calling thread; between two
/// failed verifications the loop blocks on its [`Sleeper`] for the operation's
/// interval.
pub struct AttemptLoop {
    sleeper: Arc<dyn Sleeper>,
}

impl Default for AttemptLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl AttemptLoop {
    pub fn new() -> Self {
        Self::with_sleeper(default_sleeper())
    }

    pub fn with_sleeper(sleeper: Arc<dyn Sleeper>) -> Self {
        Self { sleeper }
    }

    /// Run the operation to a terminal outcome.
    ///
    /// A callable error rejects immediately with [`RejectionError::Operation`];
    /// it never consumes a retry. A `max_attempts` of 0 is treated as 1.
    pub fn settle<O>(&self, operation: &mut O) -> Outcome<O::Output, O::Error>
    where
        O: Operation + ?Sized,
    {
        let mut state = AttemptState::new(operation.max_attempts().max(1));
        let interval = operation.attempts_interval();

        loop {
            let attempt = state.attempts_made + 1;
            let value = match operation.invoke() {
                Ok(value) => value,
                Err(error) => {
                    tracing::debug!(attempt, "operation raised; rejecting");
                    return Outcome::Rejected(RejectionError::Operation { attempt, error });
                }
            };

            let verified = operation.verify(&value);
            state.record(value);
            if verified {
                tracing::debug!(attempt, "verification succeeded");
                return Outcome::Fulfilled(state.results);
            }

            if state.exhausted() {
                tracing::info!(
                    attempts = state.attempts_made,
                    "verification exhausted; rejecting"
                );
                return Outcome::Rejected(RejectionError::Exhausted {
                    attempts: state.attempts_made,
                });
            }

            tracing::debug!(
                attempt,
                max_attempts = state.max_attempts,
                ?interval,
                "verification failed; waiting before next attempt"
            );
            self.sleeper.sleep(interval);
        }
    }
}

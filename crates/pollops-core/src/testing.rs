//! Test doubles shared by the unit tests.

use std::cell::Cell;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::operation::Operation;
use crate::sleeper::Sleeper;

/// Sleeper that records requested waits instead of blocking.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingSleeper {
    waits: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    pub(crate) fn waits(&self) -> Vec<Duration> {
        self.waits.lock().unwrap().clone()
    }

    pub(crate) fn shared(&self) -> Arc<dyn Sleeper> {
        Arc::new(self.clone())
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.waits.lock().unwrap().push(duration);
    }
}

/// Operation yielding 1, 2, 3, ... and verifying once the value reaches
/// `verify_from`. Optionally fails on a given attempt.
#[derive(Debug)]
pub(crate) struct ScriptedOperation {
    invocations: u32,
    verifications: Cell<u32>,
    verify_from: u32,
    fail_at: Option<u32>,
    max_attempts: u32,
    interval: Duration,
}

impl ScriptedOperation {
    pub(crate) fn verifying_from(verify_from: u32, max_attempts: u32, interval: Duration) -> Self {
        Self {
            invocations: 0,
            verifications: Cell::new(0),
            verify_from,
            fail_at: None,
            max_attempts,
            interval,
        }
    }

    pub(crate) fn never_verifying(max_attempts: u32, interval: Duration) -> Self {
        Self::verifying_from(u32::MAX, max_attempts, interval)
    }

    pub(crate) fn failing_at(mut self, attempt: u32) -> Self {
        self.fail_at = Some(attempt);
        self
    }

    pub(crate) fn invocations(&self) -> u32 {
        self.invocations
    }

    pub(crate) fn verifications(&self) -> u32 {
        self.verifications.get()
    }
}

impl Operation for ScriptedOperation {
    type Output = u32;
    type Error = String;

    fn invoke(&mut self) -> Result<u32, String> {
        self.invocations += 1;
        if self.fail_at == Some(self.invocations) {
            return Err(format!("failed at {}", self.invocations));
        }
        Ok(self.invocations)
    }

    fn verify(&self, output: &u32) -> bool {
        self.verifications.set(self.verifications.get() + 1);
        *output >= self.verify_from
    }

    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    fn attempts_interval(&self) -> Duration {
        self.interval
    }
}

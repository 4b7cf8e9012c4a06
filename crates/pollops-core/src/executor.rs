//! Fluent executor: configure an operation, register then/catch/finally
//! callbacks, run it through the attempt loop and dispatch the outcome.

use std::sync::Arc;
use std::time::Duration;

use crate::attempt::AttemptLoop;
use crate::config::PollConfig;
use crate::error::{ConfigError, PollError, RejectionError};
use crate::operation::{DefaultOperation, Operation, Verify};
use crate::outcome::Outcome;
use crate::sleeper::{default_sleeper, Sleeper};

pub(crate) type OnFulfilled<'a, V> = Box<dyn FnOnce(Vec<V>) + 'a>;
pub(crate) type OnRejected<'a, E> = Box<dyn FnOnce(RejectionError<E>) + 'a>;
pub(crate) type OnDone<'a> = Box<dyn FnOnce() + 'a>;

/// Start configuring an operation around a plain callable.
///
/// The callable's output is accepted as-is unless [`OperationExecutor::verify`]
/// installs a predicate.
pub fn operation<'a, F, V, E>(callable: F) -> OperationExecutor<'a, DefaultOperation<F>>
where
    F: FnMut() -> Result<V, E>,
{
    OperationExecutor::new(DefaultOperation::new(callable))
}

/// Start configuring an operation object that provides its own verification
/// and retry settings.
pub fn operation_from<'a, O>(operation: O) -> OperationExecutor<'a, O>
where
    O: Operation,
{
    OperationExecutor::new(operation)
}

/// Builder and dispatcher for a single operation.
///
/// Setters consume and return the executor. Invalid values are remembered and
/// reported by [`create`](Self::create) or [`proceed`](Self::proceed) before
/// the callable is ever invoked.
pub struct OperationExecutor<'a, O: Operation> {
    operation: O,
    on_fulfilled: Option<OnFulfilled<'a, O::Output>>,
    on_rejected: Option<OnRejected<'a, O::Error>>,
    on_done: Option<OnDone<'a>>,
    sleeper: Arc<dyn Sleeper>,
    catch_errors: bool,
    invalid: Option<ConfigError>,
}

impl<'a, O> OperationExecutor<'a, O>
where
    O: Operation,
{
    pub fn new(operation: O) -> Self {
        Self {
            operation,
            on_fulfilled: None,
            on_rejected: None,
            on_done: None,
            sleeper: default_sleeper(),
            catch_errors: false,
            invalid: None,
        }
    }

    /// Called with every attempt's output when verification succeeds.
    pub fn then<T>(mut self, on_fulfilled: T) -> Self
    where
        T: FnOnce(Vec<O::Output>) + 'a,
    {
        self.on_fulfilled = Some(Box::new(on_fulfilled));
        self
    }

    /// Called with the rejection reason when verification is exhausted (or,
    /// with [`catch_errors`](Self::catch_errors), when the callable fails).
    pub fn catch<C>(mut self, on_rejected: C) -> Self
    where
        C: FnOnce(RejectionError<O::Error>) + 'a,
    {
        self.on_rejected = Some(Box::new(on_rejected));
        self
    }

    /// Called once after `then` or `catch`, whichever ran.
    pub fn finally<D>(mut self, on_done: D) -> Self
    where
        D: FnOnce() + 'a,
    {
        self.on_done = Some(Box::new(on_done));
        self
    }

    /// Replace the wait primitive used between attempts.
    pub fn sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Route callable errors to `catch` instead of returning them from `proceed`.
    pub fn catch_errors(mut self) -> Self {
        self.catch_errors = true;
        self
    }

    fn record_invalid(&mut self, err: ConfigError) {
        self.invalid.get_or_insert(err);
    }

    /// Finalize the configuration without running anything.
    pub fn create(self) -> Result<O, ConfigError> {
        if let Some(err) = self.invalid {
            return Err(err);
        }
        check_max_attempts(&self.operation)?;
        Ok(self.operation)
    }

    /// Run the operation to completion and dispatch the outcome.
    ///
    /// Exactly one of `then` / `catch` runs, followed by `finally`. A callable
    /// error is returned as [`PollError::Operation`] with no callback invoked,
    /// unless [`catch_errors`](Self::catch_errors) was set.
    pub fn proceed(self) -> Result<(), PollError<O::Error>> {
        let Self {
            mut operation,
            on_fulfilled,
            on_rejected,
            on_done,
            sleeper,
            catch_errors,
            invalid,
        } = self;

        if let Some(err) = invalid {
            return Err(err.into());
        }
        check_max_attempts(&operation)?;

        let outcome = AttemptLoop::with_sleeper(sleeper).settle(&mut operation);
        let outcome = match outcome {
            Outcome::Rejected(RejectionError::Operation { attempt, error }) if !catch_errors => {
                tracing::warn!(attempt, "operation failed; propagating to caller");
                return Err(PollError::Operation(error));
            }
            other => other,
        };

        let settled = outcome.settle(
            |results| {
                if let Some(then) = on_fulfilled {
                    then(results);
                }
            },
            |reason| {
                if let Some(catch) = on_rejected {
                    catch(reason);
                }
            },
        );
        debug_assert!(settled.is_settled());

        if let Some(finally) = on_done {
            finally();
        }
        Ok(())
    }
}

impl<'a, F, P, V, E> OperationExecutor<'a, DefaultOperation<F, P>>
where
    F: FnMut() -> Result<V, E>,
    P: Verify<V>,
{
    /// Total attempts allowed, including the first. Must be at least 1.
    ///
    /// A zero stays recorded even if a later call sets a valid count;
    /// `create()` and `proceed()` report the first invalid value.
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        if max_attempts == 0 {
            self.record_invalid(ConfigError::ZeroAttempts);
        }
        self.operation.max_attempts = max_attempts;
        self
    }

    /// Wait between a failed verification and the next attempt.
    pub fn attempts_interval(mut self, interval: Duration) -> Self {
        self.operation.attempts_interval = interval;
        self
    }

    /// Take `max_attempts` and the interval from a loaded config.
    pub fn with_config(self, cfg: &PollConfig) -> Self {
        self.max_attempts(cfg.max_attempts)
            .attempts_interval(cfg.attempts_interval())
    }

    /// Install the success predicate.
    pub fn verify<P2>(self, predicate: P2) -> OperationExecutor<'a, DefaultOperation<F, P2>>
    where
        P2: Fn(&V) -> bool,
    {
        OperationExecutor {
            operation: self.operation.with_verify(predicate),
            on_fulfilled: self.on_fulfilled,
            on_rejected: self.on_rejected,
            on_done: self.on_done,
            sleeper: self.sleeper,
            catch_errors: self.catch_errors,
            invalid: self.invalid,
        }
    }
}

fn check_max_attempts<O: Operation>(operation: &O) -> Result<(), ConfigError> {
    if operation.max_attempts() == 0 {
        return Err(ConfigError::ZeroAttempts);
    }
    Ok(())
}

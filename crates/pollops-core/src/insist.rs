//! Insistent runner: call a closure up to a fixed number of times until it
//! reports success.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::config::InsistConfig;
use crate::error::{ConfigError, PollError};
use crate::sleeper::{default_sleeper, Sleeper};

/// Start configuring an insistent run of `callable`.
pub fn insist<F, E>(callable: F) -> InsistentOperation<F>
where
    F: FnMut() -> Result<bool, E>,
{
    InsistentOperation::new(callable)
}

/// Retries a closure returning `Ok(true)` on success and `Ok(false)` on a
/// failed try.
///
/// By default the first `Err` aborts the run and is returned from
/// [`proceed`](Self::proceed); it does not count as a consumed try. With
/// [`catch_exceptions`](Self::catch_exceptions) an `Err` is logged and counted
/// as a failed try instead, and running out of tries is silent.
pub struct InsistentOperation<F> {
    callable: F,
    tries: u32,
    catch_exceptions: bool,
    interval: Duration,
    sleeper: Arc<dyn Sleeper>,
    invalid: Option<ConfigError>,
}

impl<F, E> InsistentOperation<F>
where
    F: FnMut() -> Result<bool, E>,
{
    pub fn new(callable: F) -> Self {
        Self {
            callable,
            tries: 1,
            catch_exceptions: false,
            interval: Duration::ZERO,
            sleeper: default_sleeper(),
            invalid: None,
        }
    }

    /// Maximum number of calls. Must be at least 1.
    pub fn tries(mut self, tries: u32) -> Self {
        if tries == 0 {
            self.invalid.get_or_insert(ConfigError::ZeroTries);
        }
        self.tries = tries;
        self
    }

    pub fn catch_exceptions(mut self) -> Self {
        self.catch_exceptions = true;
        self
    }

    /// Wait between two tries (default: none).
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Take tries, interval and error mode from a loaded config. An earlier
    /// [`catch_exceptions`](Self::catch_exceptions) stays in effect.
    pub fn with_config(mut self, cfg: &InsistConfig) -> Self {
        self.catch_exceptions |= cfg.catch_exceptions;
        self.tries(cfg.tries).interval(cfg.interval())
    }

    /// Run synchronously until success or until tries run out.
    pub fn proceed(mut self) -> Result<(), PollError<E>>
    where
        E: fmt::Display,
    {
        if let Some(err) = self.invalid.take() {
            return Err(err.into());
        }

        for attempt in 1..=self.tries {
            match (self.callable)() {
                Ok(true) => {
                    tracing::debug!(attempt, "insistent operation succeeded");
                    return Ok(());
                }
                Ok(false) => {
                    tracing::debug!(attempt, tries = self.tries, "try did not succeed");
                }
                Err(err) if self.catch_exceptions => {
                    tracing::warn!(attempt, tries = self.tries, "ignoring error: {}", err);
                }
                Err(err) => return Err(PollError::Operation(err)),
            }

            if attempt < self.tries {
                self.sleeper.sleep(self.interval);
            }
        }

        tracing::info!(tries = self.tries, "insistent operation gave up");
        Ok(())
    }
}

//! The capability set an operation must provide to be driven by the attempt loop.

use std::time::Duration;

/// Default attempt budget (a single attempt, no retry).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1;

/// Default wait between attempts.
pub const DEFAULT_ATTEMPTS_INTERVAL: Duration = Duration::ZERO;

/// A unit of work: a callable, a success predicate and retry configuration.
///
/// Configuration methods must return the same values for the whole run.
/// `max_attempts` must be at least 1.
pub trait Operation {
    type Output;
    type Error;

    /// Perform one attempt. An `Err` ends the run immediately.
    fn invoke(&mut self) -> Result<Self::Output, Self::Error>;

    /// Decide whether an attempt's output counts as success.
    fn verify(&self, _output: &Self::Output) -> bool {
        true
    }

    fn max_attempts(&self) -> u32 {
        DEFAULT_MAX_ATTEMPTS
    }

    fn attempts_interval(&self) -> Duration {
        DEFAULT_ATTEMPTS_INTERVAL
    }
}

impl<O> Operation for Box<O>
where
    O: Operation + ?Sized,
{
    type Output = O::Output;
    type Error = O::Error;

    fn invoke(&mut self) -> Result<Self::Output, Self::Error> {
        (**self).invoke()
    }

    fn verify(&self, output: &Self::Output) -> bool {
        (**self).verify(output)
    }

    fn max_attempts(&self) -> u32 {
        (**self).max_attempts()
    }

    fn attempts_interval(&self) -> Duration {
        (**self).attempts_interval()
    }
}

impl<O> Operation for &mut O
where
    O: Operation + ?Sized,
{
    type Output = O::Output;
    type Error = O::Error;

    fn invoke(&mut self) -> Result<Self::Output, Self::Error> {
        (**self).invoke()
    }

    fn verify(&self, output: &Self::Output) -> bool {
        (**self).verify(output)
    }

    fn max_attempts(&self) -> u32 {
        (**self).max_attempts()
    }

    fn attempts_interval(&self) -> Duration {
        (**self).attempts_interval()
    }
}

/// Success predicate for [`DefaultOperation`].
pub trait Verify<V> {
    fn verify(&self, value: &V) -> bool;
}

/// Predicate that accepts every output.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysVerified;

impl<V> Verify<V> for AlwaysVerified {
    fn verify(&self, _value: &V) -> bool {
        true
    }
}

impl<V, F> Verify<V> for F
where
    F: Fn(&V) -> bool,
{
    fn verify(&self, value: &V) -> bool {
        self(value)
    }
}

/// Operation wrapping a plain callable. Verifies every output unless a
/// predicate is supplied.
#[derive(Debug, Clone)]
pub struct DefaultOperation<F, P = AlwaysVerified> {
    pub(crate) callable: F,
    pub(crate) verify: P,
    pub(crate) max_attempts: u32,
    pub(crate) attempts_interval: Duration,
}

impl<F> DefaultOperation<F> {
    pub fn new(callable: F) -> Self {
        Self {
            callable,
            verify: AlwaysVerified,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            attempts_interval: DEFAULT_ATTEMPTS_INTERVAL,
        }
    }
}

impl<F, P> DefaultOperation<F, P> {
    pub(crate) fn with_verify<P2>(self, verify: P2) -> DefaultOperation<F, P2> {
        DefaultOperation {
            callable: self.callable,
            verify,
            max_attempts: self.max_attempts,
            attempts_interval: self.attempts_interval,
        }
    }
}

impl<F, P, V, E> Operation for DefaultOperation<F, P>
where
    F: FnMut() -> Result<V, E>,
    P: Verify<V>,
{
    type Output = V;
    type Error = E;

    fn invoke(&mut self) -> Result<V, E> {
        (self.callable)()
    }

    fn verify(&self, output: &V) -> bool {
        self.verify.verify(output)
    }

    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    fn attempts_interval(&self) -> Duration {
        self.attempts_interval
    }
}

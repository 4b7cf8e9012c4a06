//! Wait primitive used between attempts.

use std::sync::Arc;
use std::time::Duration;

/// Blocks the calling thread between two attempts.
///
/// Passed to the attempt loop and the insistent runner at construction time;
/// tests inject a recording implementation so nothing waits in real time.
/// Any `Fn(Duration) + Send + Sync` closure is a sleeper.
pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration);
}

/// Default sleeper backed by `std::thread::sleep`. A zero duration returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

impl<F> Sleeper for F
where
    F: Fn(Duration) + Send + Sync,
{
    fn sleep(&self, duration: Duration) {
        self(duration)
    }
}

pub(crate) fn default_sleeper() -> Arc<dyn Sleeper> {
    Arc::new(ThreadSleeper)
}

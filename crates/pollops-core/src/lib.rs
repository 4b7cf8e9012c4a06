//! Core engine for pollops: run an operation until its output verifies, then
//! settle into `then` / `catch` / `finally` callbacks.
//!
//! ```
//! use pollops_core::operation;
//! use std::time::Duration;
//!
//! let mut polls = 0;
//! operation(|| {
//!     polls += 1;
//!     Ok::<_, std::io::Error>(polls)
//! })
//! .max_attempts(5)
//! .attempts_interval(Duration::ZERO)
//! .verify(|n: &u32| *n == 3)
//! .then(|results| assert_eq!(results, vec![1, 2, 3]))
//! .catch(|reason| panic!("unexpected rejection: {reason}"))
//! .proceed()
//! .unwrap();
//! ```

pub mod attempt;
pub mod chain;
pub mod config;
pub mod error;
pub mod executor;
pub mod insist;
pub mod logging;
pub mod operation;
pub mod outcome;
pub mod sleeper;

#[cfg(test)]
mod testing;

pub use attempt::AttemptLoop;
pub use chain::{chain, Chain, ChainReport};
pub use error::{ConfigError, PollError, RejectionError};
pub use executor::{operation, operation_from, OperationExecutor};
pub use insist::{insist, InsistentOperation};
pub use operation::{AlwaysVerified, DefaultOperation, Operation, Verify};
pub use outcome::Outcome;
pub use sleeper::{Sleeper, ThreadSleeper};

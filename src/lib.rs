//! pollops: run an operation until its output verifies, then settle into
//! `then` / `catch` / `finally` callbacks.
//!
//! This crate re-exports the engine from `pollops-core`; the `pollops`
//! binary lives in `pollops-cli`.
//!
//! ```
//! use pollops::{chain, insist, operation, AttemptLoop, DefaultOperation, Outcome, RejectionError, Sleeper};
//! use std::cell::Cell;
//! use std::sync::{Arc, Mutex};
//! use std::time::Duration;
//!
//! let waits = Arc::new(Mutex::new(Vec::new()));
//! let recorded = Arc::clone(&waits);
//! let sleeper: Arc<dyn Sleeper> = Arc::new(move |d: Duration| recorded.lock().unwrap().push(d));
//!
//! let rejected = Cell::new(false);
//! operation(|| Ok::<_, ()>(0u8))
//!     .max_attempts(2)
//!     .attempts_interval(Duration::from_millis(5))
//!     .verify(|v: &u8| *v > 0)
//!     .sleeper(sleeper)
//!     .catch(|reason| {
//!         assert_eq!(reason, RejectionError::Exhausted { attempts: 2 });
//!         rejected.set(true);
//!     })
//!     .proceed()
//!     .unwrap();
//! assert!(rejected.get());
//! assert_eq!(*waits.lock().unwrap(), vec![Duration::from_millis(5)]);
//!
//! insist(|| Ok::<_, String>(true)).tries(1).proceed().unwrap();
//!
//! let ops: Vec<DefaultOperation<fn() -> Result<(), ()>>> = Vec::new();
//! assert_eq!(chain(ops).proceed().unwrap().total, 0);
//!
//! let mut op = DefaultOperation::new(|| Ok::<_, ()>("done"));
//! assert_eq!(AttemptLoop::new().settle(&mut op), Outcome::Fulfilled(vec!["done"]));
//! ```

pub use pollops_core::{
    chain, insist, operation, operation_from, AlwaysVerified, AttemptLoop, Chain, ChainReport,
    ConfigError, DefaultOperation, InsistentOperation, Operation, OperationExecutor, Outcome,
    PollError, RejectionError, Sleeper, ThreadSleeper, Verify,
};
pub use pollops_core::{config, logging};

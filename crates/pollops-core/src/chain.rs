//! Run several operations in order, stopping at the first rejection.

use std::sync::Arc;

use crate::error::{PollError, RejectionError};
use crate::executor::{OnRejected, OperationExecutor};
use crate::operation::Operation;
use crate::sleeper::{default_sleeper, Sleeper};

/// Build a chain over `operations`. Mixed operation types can be chained as
/// `Box<dyn Operation<Output = V, Error = E>>`.
pub fn chain<'a, I, O>(operations: I) -> Chain<'a, O>
where
    I: IntoIterator<Item = O>,
    O: Operation,
{
    Chain {
        operations: operations.into_iter().collect(),
        on_rejected: None,
        sleeper: default_sleeper(),
    }
}

/// What a chain run got through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainReport {
    /// Operations that fulfilled, in order, before the chain stopped.
    pub fulfilled: usize,
    /// Operations in the chain.
    pub total: usize,
    /// True when an operation rejected and the rest were skipped.
    pub rejected: bool,
}

/// Ordered list of operations executed until the first rejection.
///
/// Side effects of operations that already fulfilled are not undone.
pub struct Chain<'a, O: Operation> {
    operations: Vec<O>,
    on_rejected: Option<OnRejected<'a, O::Error>>,
    sleeper: Arc<dyn Sleeper>,
}

impl<'a, O> Chain<'a, O>
where
    O: Operation,
{
    /// Called once with the reason of the first rejected operation.
    pub fn catch<C>(mut self, on_rejected: C) -> Self
    where
        C: FnOnce(RejectionError<O::Error>) + 'a,
    {
        self.on_rejected = Some(Box::new(on_rejected));
        self
    }

    /// Wait primitive handed to every operation's attempt loop.
    pub fn sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Execute each operation in turn. Callable errors propagate exactly as
    /// they do from [`OperationExecutor::proceed`].
    pub fn proceed(self) -> Result<ChainReport, PollError<O::Error>> {
        let total = self.operations.len();
        let mut on_rejected = self.on_rejected;

        for (index, operation) in self.operations.into_iter().enumerate() {
            let mut rejection = None;
            OperationExecutor::new(operation)
                .sleeper(Arc::clone(&self.sleeper))
                .catch(|reason| rejection = Some(reason))
                .proceed()?;

            if let Some(reason) = rejection {
                tracing::info!(index, total, "chain stopped at rejected operation");
                if let Some(catch) = on_rejected.take() {
                    catch(reason);
                }
                return Ok(ChainReport {
                    fulfilled: index,
                    total,
                    rejected: true,
                });
            }
        }

        Ok(ChainReport {
            fulfilled: total,
            total,
            rejected: false,
        })
    }
}

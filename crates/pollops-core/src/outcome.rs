//! Terminal result of an attempt sequence.

use crate::error::RejectionError;

/// Result of driving an operation through the attempt loop.
///
/// `Fulfilled` and `Rejected` come out of the loop; `Settled` is what is left
/// once a callback has consumed either of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<V, E> {
    /// Verification succeeded. Holds every attempt's output, in order.
    Fulfilled(Vec<V>),
    /// Verification was exhausted or the callable failed.
    Rejected(RejectionError<E>),
    /// Callbacks have run; carries no data.
    Settled,
}

impl<V, E> Outcome<V, E> {
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, Outcome::Fulfilled(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, Outcome::Settled)
    }

    /// Hand the outcome to exactly one of `on_fulfilled` / `on_rejected` and
    /// return `Settled`. An already settled outcome calls neither.
    pub fn settle<T, C>(self, on_fulfilled: T, on_rejected: C) -> Outcome<V, E>
    where
        T: FnOnce(Vec<V>),
        C: FnOnce(RejectionError<E>),
    {
        match self {
            Outcome::Fulfilled(results) => on_fulfilled(results),
            Outcome::Rejected(reason) => on_rejected(reason),
            Outcome::Settled => {}
        }
        Outcome::Settled
    }
}

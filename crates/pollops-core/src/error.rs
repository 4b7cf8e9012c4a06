//! Error types: configuration failures, rejection reasons and the error
//! returned from `proceed()`.

use thiserror::Error;

/// Invalid builder arguments or an unreadable config file.
///
/// Builder setters record the first invalid value; `create()` and `proceed()`
/// return it before the operation is ever invoked.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_attempts must be at least 1")]
    ZeroAttempts,
    #[error("tries must be at least 1")]
    ZeroTries,
    #[error("cannot locate config directory: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
    #[error("config io: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Why an attempt sequence ended in rejection. Only ever surfaced through a
/// `catch` callback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectionError<E> {
    /// Verification never succeeded within the allowed attempts.
    #[error("verification exhausted after {attempts} attempt(s)")]
    Exhausted { attempts: u32 },
    /// The callable failed on `attempt` (1-based).
    #[error("operation failed on attempt {attempt}: {error}")]
    Operation { attempt: u32, error: E },
}

impl<E> RejectionError<E> {
    /// Number of attempts made before the sequence was rejected.
    pub fn attempts(&self) -> u32 {
        match self {
            RejectionError::Exhausted { attempts } => *attempts,
            RejectionError::Operation { attempt, .. } => *attempt,
        }
    }
}

/// Error returned from `proceed()` on every runner.
#[derive(Debug, Error)]
pub enum PollError<E> {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The operation failed and the failure was not routed to a callback.
    #[error("operation failed: {0}")]
    Operation(E),
}

impl<E> PollError<E> {
    /// The operation's own error, if that is what ended the run.
    pub fn into_operation(self) -> Option<E> {
        match self {
            PollError::Operation(e) => Some(e),
            PollError::Config(_) => None,
        }
    }
}

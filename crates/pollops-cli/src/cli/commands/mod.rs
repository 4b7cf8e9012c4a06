//! CLI command handlers. Each command is in its own file.

mod config;
mod insist;
mod poll;
mod shell;

pub use config::run_config;
pub use insist::{run_insist, InsistArgs};
pub use poll::{run_poll, PollArgs};

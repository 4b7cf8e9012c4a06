//! `pollops poll` – rerun a command until it exits successfully.

use anyhow::{Context, Result};
use pollops_core::config::PollConfig;
use pollops_core::operation;
use std::cell::Cell;
use std::process::Output;

use super::shell;

#[derive(Debug, Clone, Default)]
pub struct PollArgs {
    pub max_attempts: Option<u32>,
    pub interval_ms: Option<u64>,
    pub expect_stdout: Option<String>,
    pub command: Vec<String>,
}

impl PollArgs {
    /// Config-file values with command-line flags applied on top.
    fn effective(&self, cfg: &PollConfig) -> PollConfig {
        let mut cfg = cfg.clone();
        if let Some(n) = self.max_attempts {
            cfg.max_attempts = n;
        }
        if let Some(ms) = self.interval_ms {
            cfg.attempts_interval_ms = ms;
        }
        cfg
    }
}

fn succeeded(output: &Output, expect_stdout: Option<&str>) -> bool {
    output.status.success()
        && expect_stdout
            .map_or(true, |needle| String::from_utf8_lossy(&output.stdout).contains(needle))
}

/// Poll until the command verifies. Returns false when attempts ran out.
pub fn run_poll(cfg: &PollConfig, args: &PollArgs) -> Result<bool> {
    let cfg = args.effective(cfg);
    let label = shell::display(&args.command);
    let expect = args.expect_stdout.as_deref();
    let fulfilled = Cell::new(false);

    operation(|| shell::output(&args.command))
        .with_config(&cfg)
        .verify(|output: &Output| succeeded(output, expect))
        .then(|results| {
            if let Some(last) = results.last() {
                print!("{}", String::from_utf8_lossy(&last.stdout));
            }
            fulfilled.set(true);
        })
        .catch(|reason| eprintln!("pollops: `{}`: {}", label, reason))
        .finally(|| tracing::debug!(command = %label, "poll finished"))
        .proceed()
        .with_context(|| format!("cannot run `{}`", label))?;

    Ok(fulfilled.get())
}

//! `pollops insist` – rerun a command a fixed number of times until it succeeds.

use anyhow::{Context, Result};
use pollops_core::config::InsistConfig;
use pollops_core::insist;
use std::cell::Cell;

use super::shell;

#[derive(Debug, Clone, Default)]
pub struct InsistArgs {
    pub tries: Option<u32>,
    pub catch_errors: bool,
    pub interval_ms: Option<u64>,
    pub command: Vec<String>,
}

impl InsistArgs {
    fn effective(&self, cfg: &InsistConfig) -> InsistConfig {
        let mut cfg = cfg.clone();
        if let Some(n) = self.tries {
            cfg.tries = n;
        }
        if let Some(ms) = self.interval_ms {
            cfg.interval_ms = ms;
        }
        cfg.catch_exceptions |= self.catch_errors;
        cfg
    }
}

/// Returns false when every try failed; the run itself reports nothing.
pub fn run_insist(cfg: &InsistConfig, args: &InsistArgs) -> Result<bool> {
    let cfg = args.effective(cfg);
    let label = shell::display(&args.command);
    let succeeded = Cell::new(false);

    insist(|| {
        let ok = shell::status(&args.command)?.success();
        succeeded.set(ok);
        Ok::<_, std::io::Error>(ok)
    })
    .with_config(&cfg)
    .proceed()
    .with_context(|| format!("cannot run `{}`", label))?;

    if !succeeded.get() {
        eprintln!("pollops: `{}` did not succeed after {} tries", label, cfg.tries);
    }
    Ok(succeeded.get())
}

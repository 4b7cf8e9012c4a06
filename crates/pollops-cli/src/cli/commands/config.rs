//! `pollops config` – show where settings come from and their effective values.

use anyhow::Result;
use pollops_core::config::{self, PollConfig};
use std::path::Path;

pub fn run_config(cfg: &PollConfig, explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => config::config_path()?,
    };
    println!("# {}", path.display());
    print!("{}", cfg.to_toml()?);
    Ok(())
}

//! CLI for pollops.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pollops_core::config;
use std::path::PathBuf;
use std::process::ExitCode;

use commands::{run_config, run_insist, run_poll, InsistArgs, PollArgs};

/// Top-level CLI for pollops.
#[derive(Debug, Parser)]
#[command(name = "pollops")]
#[command(about = "pollops: rerun a command until it succeeds", long_about = None)]
pub struct Cli {
    /// Read settings from this file instead of ~/.config/pollops/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Poll a command until it exits successfully (and prints the expected text).
    Poll {
        /// Attempts including the first (overrides config).
        #[arg(long, value_name = "N")]
        max_attempts: Option<u32>,
        /// Wait between attempts in milliseconds (overrides config).
        #[arg(long, value_name = "MS")]
        interval_ms: Option<u64>,
        /// Only count an attempt as successful if stdout contains this text.
        #[arg(long, value_name = "TEXT")]
        expect_stdout: Option<String>,
        /// Command and arguments, after `--`.
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },

    /// Rerun a command up to N times until it exits successfully.
    Insist {
        /// Maximum runs (overrides config).
        #[arg(long, value_name = "N")]
        tries: Option<u32>,
        /// Count spawn failures as failed tries instead of aborting.
        #[arg(long)]
        catch_errors: bool,
        /// Wait between runs in milliseconds (overrides config).
        #[arg(long, value_name = "MS")]
        interval_ms: Option<u64>,
        /// Command and arguments, after `--`.
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },

    /// Show the config file location and effective settings.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<ExitCode> {
        let cli = Cli::parse();
        let cfg = match cli.config.as_deref() {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        let succeeded = match cli.command {
            CliCommand::Poll {
                max_attempts,
                interval_ms,
                expect_stdout,
                command,
            } => run_poll(
                &cfg,
                &PollArgs {
                    max_attempts,
                    interval_ms,
                    expect_stdout,
                    command,
                },
            )?,
            CliCommand::Insist {
                tries,
                catch_errors,
                interval_ms,
                command,
            } => run_insist(
                &cfg.insist,
                &InsistArgs {
                    tries,
                    catch_errors,
                    interval_ms,
                    command,
                },
            )?,
            CliCommand::Config => {
                run_config(&cfg, cli.config.as_deref())?;
                true
            }
        };

        Ok(if succeeded {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}

#[cfg(test)]
mod tests;

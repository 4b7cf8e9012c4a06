//! Spawning the user's command.

use std::io;
use std::process::{Command, ExitStatus, Output, Stdio};

fn command(argv: &[String]) -> io::Result<Command> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command"))?;
    let mut cmd = Command::new(program);
    cmd.args(args).stdin(Stdio::null());
    Ok(cmd)
}

/// Run to completion, capturing stdout and stderr.
pub fn output(argv: &[String]) -> io::Result<Output> {
    command(argv)?.output()
}

/// Run to completion with inherited stdout/stderr.
pub fn status(argv: &[String]) -> io::Result<ExitStatus> {
    command(argv)?.status()
}

pub fn display(argv: &[String]) -> String {
    argv.join(" ")
}

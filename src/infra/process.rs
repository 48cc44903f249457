//! External process invocation
//!
//! The compiler and archiver are spawned with inherited standard streams
//! and awaited synchronously; their exit status is the only contract
//! consumed. No timeout or cancellation: a hung tool hangs the run.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Spawn a program and block until it exits
pub fn run<I, S>(program: &Path, args: I) -> std::io::Result<ExitStatus>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    tracing::debug!("Running {}", program.display());
    Command::new(program).args(args).status()
}

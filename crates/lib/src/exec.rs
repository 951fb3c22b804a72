//! Planned child process invocations.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, info};

use crate::error::BuildError;

/// One planned external process call.
///
/// The working directory travels with the record instead of living in
/// process-global state, so no step can leave the orchestrator somewhere
/// else on a failure path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
  pub program: PathBuf,
  pub args: Vec<OsString>,
  pub cwd: PathBuf,
}

impl Invocation {
  pub fn new(program: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
    Self { program: program.into(), args: Vec::new(), cwd: cwd.into() }
  }

  pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
    self.args.push(arg.into());
    self
  }

  /// Short program name for diagnostics.
  pub fn program_name(&self) -> String {
    self
      .program
      .file_name()
      .map(|name| name.to_string_lossy().into_owned())
      .unwrap_or_else(|| self.program.display().to_string())
  }

  /// Run the process to completion, replaying `env` verbatim into the child.
  ///
  /// Blocks until the child exits; a non-zero status is an error.
  pub fn run(&self, env: &[(OsString, OsString)]) -> Result<(), BuildError> {
    info!(program = %self.program.display(), cwd = %self.cwd.display(), "spawning");

    let status = Command::new(&self.program)
      .args(&self.args)
      .current_dir(&self.cwd)
      .env_clear()
      .envs(env.iter().map(|(key, value)| (key.as_os_str(), value.as_os_str())))
      .status()?;

    if !status.success() {
      return Err(BuildError::CommandFailed { program: self.program_name(), code: status.code() });
    }

    debug!(program = %self.program.display(), "finished");
    Ok(())
  }
}

impl fmt::Display for Invocation {
  /// Command line rendered for status output and dry runs.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.program.display())?;
    for arg in &self.args {
      write!(f, " {}", arg.to_string_lossy())?;
    }
    write!(f, " (in {})", self.cwd.display())
  }
}

//! Sequential execution of shell command lists
//!
//! The runner is the only place slang-dist spawns subprocesses. Commands are
//! plain shell strings resolved through the platform shell, each optionally
//! pinned to its own working directory instead of mutating the process-wide
//! current directory.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::core::error::{DistError, DistResult};

/// Placeholder shown in place of the command line when echo is off
const HIDDEN_COMMAND: &str = "(command hidden)";

/// A shell command line, optionally pinned to a working directory
#[derive(Debug, Clone)]
pub struct ShellCommand {
  pub line: String,
  pub working_dir: Option<PathBuf>,
}

impl ShellCommand {
  pub fn new(line: impl Into<String>) -> Self {
    ShellCommand {
      line: line.into(),
      working_dir: None,
    }
  }

  /// Run the command from `dir` instead of the caller's current directory
  pub fn in_dir(mut self, dir: impl AsRef<Path>) -> Self {
    self.working_dir = Some(dir.as_ref().to_path_buf());
    self
  }
}

/// Runs an ordered command list strictly in sequence
///
/// With `fail_fast` (the default) the first failing command aborts the rest of
/// the list and the error carries that command's exit status, so the process
/// can exit with the same code. Without it, every command runs; failures are
/// noted on stderr and the call still returns `Ok`.
#[derive(Debug, Clone)]
pub struct CommandRunner {
  fail_fast: bool,
  echo: bool,
}

impl Default for CommandRunner {
  fn default() -> Self {
    CommandRunner::new()
  }
}

impl CommandRunner {
  pub fn new() -> Self {
    CommandRunner {
      fail_fast: true,
      echo: true,
    }
  }

  pub fn fail_fast(mut self, fail_fast: bool) -> Self {
    self.fail_fast = fail_fast;
    self
  }

  /// Disable to redact command lines from the transcript (credentials etc.)
  pub fn echo(mut self, echo: bool) -> Self {
    self.echo = echo;
    self
  }

  /// Execute every command in order, one subprocess at a time
  ///
  /// Child stdout/stderr stream straight to the parent's; nothing is captured
  /// or parsed. Earlier side effects are never rolled back on failure.
  pub fn run(&self, commands: &[ShellCommand]) -> DistResult<()> {
    for command in commands {
      if self.echo {
        println!(">>> {}", command.line);
      } else {
        println!(">>> {}", HIDDEN_COMMAND);
      }

      match self.execute(command) {
        Ok(()) => {}
        Err(err) if self.fail_fast => return Err(err),
        Err(err) => eprintln!("⚠️  {}", err),
      }
    }

    Ok(())
  }

  fn execute(&self, command: &ShellCommand) -> DistResult<()> {
    let mut shell = shell_command(&command.line);
    if let Some(dir) = &command.working_dir {
      shell.current_dir(dir);
    }

    // A command that cannot be spawned at all is the same failure class as a
    // signal-killed one: no exit status to propagate.
    let status = shell.status().map_err(|_| DistError::CommandFailed {
      command: self.reportable_line(command),
      code: None,
    })?;

    if status.success() {
      Ok(())
    } else {
      Err(DistError::CommandFailed {
        command: self.reportable_line(command),
        code: status.code(),
      })
    }
  }

  // Failure reports never reveal more of the command than the transcript did.
  fn reportable_line(&self, command: &ShellCommand) -> String {
    if self.echo {
      command.line.clone()
    } else {
      HIDDEN_COMMAND.to_string()
    }
  }
}

#[cfg(unix)]
fn shell_command(line: &str) -> Command {
  let mut cmd = Command::new("sh");
  cmd.arg("-c").arg(line);
  cmd
}

#[cfg(windows)]
fn shell_command(line: &str) -> Command {
  let mut cmd = Command::new("cmd");
  cmd.arg("/C").arg(line);
  cmd
}

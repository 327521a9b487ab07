//! Error types for slang-dist with contextual messages and exit codes
//!
//! All failures collapse to a process exit code at the top level. A failed
//! release command exits with the status of the failing subprocess so that CI
//! wrappers observe the same code they would have seen running the command
//! directly.

use std::fmt;
use std::io;

/// Exit codes for slang-dist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (bad invocation, invalid flag values)
  User = 1,
  /// System error (I/O, subprocess could not be spawned)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for slang-dist
#[derive(Debug)]
pub enum DistError {
  /// Invocation errors not already caught by clap
  Usage { message: String },

  /// An external command exited with a failure status
  CommandFailed { command: String, code: Option<i32> },

  /// I/O errors, optionally annotated with what was being attempted
  Io {
    source: io::Error,
    context: Option<String>,
  },

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl DistError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    DistError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    DistError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error without changing its exit class
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      DistError::Message { message, context, help } => DistError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      DistError::Io { source, context } => DistError::Io {
        source,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
      },
      _ => self,
    }
  }

  /// Get the process exit code for this error
  ///
  /// A failed subprocess propagates its own exit status; a subprocess killed
  /// by a signal (no status) maps to the system class.
  pub fn exit_code(&self) -> i32 {
    match self {
      DistError::Usage { .. } => ExitCode::User.as_i32(),
      DistError::CommandFailed { code, .. } => code.unwrap_or(ExitCode::System.as_i32()),
      DistError::Io { .. } => ExitCode::System.as_i32(),
      DistError::Message { .. } => ExitCode::User.as_i32(),
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      DistError::Usage { .. } => Some("Run `slang-dist --help` for usage.".to_string()),
      DistError::CommandFailed { .. } => Some(
        "The command's own output is above. Archives from targets that finished before the failure are left in place."
          .to_string(),
      ),
      DistError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for DistError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DistError::Usage { message } => write!(f, "{}", message),
      DistError::CommandFailed { command, code } => match code {
        Some(code) => write!(f, "Command failed with exit code {}: {}", code, command),
        None => write!(f, "Command terminated without an exit code: {}", command),
      },
      DistError::Io { source, context } => {
        write!(f, "I/O error: {}", source)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
      DistError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for DistError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      DistError::Io { source, .. } => Some(source),
      _ => None,
    }
  }
}

impl From<io::Error> for DistError {
  fn from(err: io::Error) -> Self {
    DistError::Io {
      source: err,
      context: None,
    }
  }
}

impl From<String> for DistError {
  fn from(msg: String) -> Self {
    DistError::message(msg)
  }
}

impl From<&str> for DistError {
  fn from(msg: &str) -> Self {
    DistError::message(msg)
  }
}

impl From<serde_json::Error> for DistError {
  fn from(err: serde_json::Error) -> Self {
    DistError::message(format!("JSON error: {}", err))
  }
}

/// Convert anyhow::Error to DistError (bridge modules report through anyhow)
impl From<anyhow::Error> for DistError {
  fn from(err: anyhow::Error) -> Self {
    DistError::message(format!("{:#}", err))
  }
}

/// Result type alias for slang-dist
pub type DistResult<T> = Result<T, DistError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> DistResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> DistResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<DistError>,
{
  fn context(self, ctx: impl Into<String>) -> DistResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> DistResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &DistError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}

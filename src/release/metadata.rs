//! Build metadata stamped into released binaries
//!
//! Maintains the invariant: metadata is computed once per invocation, before
//! the first target builds, and never changes afterwards. All six binaries of
//! a run carry the same version and build time.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Rendering of the build time injected into the binary
///
/// `cmd/slangd` parses `main.BuildTime` as an integer epoch, so `Epoch` is the
/// default. `Utc` reproduces the human-readable form some historical release
/// scripts injected instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampFormat {
  /// Seconds since the Unix epoch
  Epoch,
  /// `YYYY-MM-DD HH:MM:SS` in UTC
  Utc,
}

/// Version and build time, as injected at link time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildMetadata {
  pub version: String,
  pub build_time: String,
}

impl BuildMetadata {
  /// Capture metadata for this invocation using the current time
  pub fn capture(version: &str, format: TimestampFormat) -> Self {
    Self::stamped_at(version, format, Utc::now())
  }

  /// Capture metadata with an explicit timestamp
  pub fn stamped_at(version: &str, format: TimestampFormat, when: DateTime<Utc>) -> Self {
    let build_time = match format {
      TimestampFormat::Epoch => when.timestamp().to_string(),
      TimestampFormat::Utc => when.format("%Y-%m-%d %H:%M:%S").to_string(),
    };

    Self {
      version: version.to_string(),
      build_time,
    }
  }

  /// Render the linker flag string for `go build -ldflags`
  ///
  /// Values are single-quoted so the formatted timestamp's space survives the
  /// shell; the whole string is double-quoted by the build command.
  pub fn ldflags(&self) -> String {
    format!(
      "-X 'main.Version={}' -X 'main.BuildTime={}'",
      self.version, self.build_time
    )
  }
}

/// Version tag with every `.` replaced by `_`, e.g. `v1.2.3` -> `v1_2_3`
///
/// Purely a formatting rule; the version is not validated beyond being
/// present.
pub fn version_tag(version: &str) -> String {
  version.replace('.', "_")
}

/// Versioned distribution name used as the filename prefix of all artifacts
pub fn dist_name(product: &str, version: &str) -> String {
  format!("{}-{}", product, version_tag(version))
}

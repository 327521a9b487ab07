//! Release configuration assembled from the command line
//!
//! The tool reads nothing from disk besides what the toolchain itself reads:
//! every knob is a flag with a default matching the observed slang repository
//! layout, so a plain `slang-dist vX.Y.Z` reproduces the historical release
//! runs exactly.

use crate::release::metadata::TimestampFormat;
use std::path::PathBuf;

/// Product name used as the filename prefix of every artifact
pub const DEFAULT_PRODUCT: &str = "slangd";

/// Go main package compiled for each target
pub const DEFAULT_MAIN_PACKAGE: &str = "./cmd/slangd";

/// Directory the binaries and archives are written into
pub const DEFAULT_OUTPUT_DIR: &str = "ci/release";

/// Configuration for a release run
#[derive(Debug, Clone)]
pub struct DistConfig {
  /// Filename prefix for binaries and archives
  pub product: String,

  /// Package path handed to the cross compiler
  pub main_package: String,

  /// Output root for binaries and archives, relative to the invocation dir
  pub output_dir: PathBuf,

  /// How the build time is rendered into the binary
  pub timestamp: TimestampFormat,
}

impl Default for DistConfig {
  fn default() -> Self {
    Self {
      product: DEFAULT_PRODUCT.to_string(),
      main_package: DEFAULT_MAIN_PACKAGE.to_string(),
      output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
      timestamp: TimestampFormat::Epoch,
    }
  }
}

//! Release planning: the exact commands a run will execute, assembled up front
//!
//! Assembly is pure (no subprocess, no filesystem), so the whole plan can be
//! inspected with `--dry-run`, serialized with `--json` and unit-tested
//! without a toolchain installed.

use crate::core::config::DistConfig;
use crate::release::metadata::{BuildMetadata, dist_name};
use crate::release::target::{PlatformTarget, RELEASE_MATRIX};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Commands and filenames for a single platform target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetPlan {
  pub target: PlatformTarget,
  /// Binary filename produced under the output directory
  pub artifact: String,
  /// Archive filename the binary is compressed into
  pub archive: String,
  /// Cross-compilation command, run from the invocation directory
  pub build_command: String,
  /// Compress + delete, run inside the output directory, in this order
  pub package_commands: Vec<String>,
}

/// Full plan for one release invocation
///
/// The `--json` dry-run emits exactly this shape; it parses back with serde
/// for tooling that consumes the plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleasePlan {
  pub dist_name: String,
  pub metadata: BuildMetadata,
  pub output_dir: PathBuf,
  pub targets: Vec<TargetPlan>,
}

impl ReleasePlan {
  /// Assemble the plan for a version, capturing build metadata now
  pub fn assemble(config: &DistConfig, version: &str) -> Self {
    let metadata = BuildMetadata::capture(version, config.timestamp);
    Self::assemble_with_metadata(config, metadata)
  }

  /// Assemble the plan from already-captured metadata (deterministic)
  pub fn assemble_with_metadata(config: &DistConfig, metadata: BuildMetadata) -> Self {
    let dist = dist_name(&config.product, &metadata.version);
    let ldflags = metadata.ldflags();

    let targets = RELEASE_MATRIX
      .iter()
      .map(|target| plan_target(*target, &dist, &ldflags, config))
      .collect();

    Self {
      dist_name: dist,
      metadata,
      output_dir: config.output_dir.clone(),
      targets,
    }
  }
}

fn plan_target(target: PlatformTarget, dist: &str, ldflags: &str, config: &DistConfig) -> TargetPlan {
  let artifact = target.artifact_name(dist);
  let archive = target.archive_name(dist);

  let build_command = format!(
    "env GOOS={} GOARCH={} go build -ldflags \"{}\" -o {}/{} {}",
    target.os,
    target.arch,
    ldflags,
    config.output_dir.display(),
    artifact,
    config.main_package,
  );

  let package_commands = vec![target.compress_command(dist), format!("rm {}", artifact)];

  TargetPlan {
    target,
    artifact,
    archive,
    build_command,
    package_commands,
  }
}

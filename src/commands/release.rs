//! Release command implementation
//!
//! Drives a full release invocation:
//! 1. Derive the dist name and capture build metadata (once, up front)
//! 2. Assemble the per-target command plan for the whole matrix
//! 3. Execute it serially, one target at a time: build, compress, delete

use crate::core::config::DistConfig;
use crate::core::error::{DistError, DistResult, ResultExt};
use crate::release::plan::{ReleasePlan, TargetPlan};
use crate::runner::{CommandRunner, ShellCommand};

/// Run the release command
pub fn run_release(config: &DistConfig, version: &str, dry_run: bool, json: bool) -> DistResult<()> {
  if version.trim().is_empty() {
    return Err(DistError::Usage {
      message: "version must not be empty (expected something like v1.0.0)".to_string(),
    });
  }

  let plan = ReleasePlan::assemble(config, version);

  if dry_run {
    if json {
      println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
      print_plan(&plan);
    }
    return Ok(());
  }

  if plan.output_dir.exists() && !plan.output_dir.is_dir() {
    return Err(DistError::with_help(
      format!("output path {} is not a directory", plan.output_dir.display()),
      "Point --output-dir at a directory; it is created when missing.",
    ));
  }

  // go build -o writes into an existing directory only
  std::fs::create_dir_all(&plan.output_dir).with_context(|| {
    format!(
      "Failed to create output directory {}",
      plan.output_dir.display()
    )
  })?;

  println!("📦 Releasing {} ({} targets)", plan.dist_name, plan.targets.len());
  println!();

  let runner = CommandRunner::new();
  for target in &plan.targets {
    build_and_package(&runner, &plan, target)?;
  }

  println!();
  println!(
    "✅ Release {} complete: {} archives in {}",
    plan.metadata.version,
    plan.targets.len(),
    plan.output_dir.display()
  );

  Ok(())
}

/// Build one target, then compress and delete its binary
///
/// Two runner calls per target: the build runs from the invocation directory,
/// the packaging pair runs inside the output directory. The first failure
/// propagates and aborts the remaining targets; finished archives stay on disk.
fn build_and_package(
  runner: &CommandRunner,
  plan: &ReleasePlan,
  target: &TargetPlan,
) -> DistResult<()> {
  println!("🔨 {} → {}", target.target, target.archive);

  runner.run(&[ShellCommand::new(&target.build_command)])?;

  let package: Vec<ShellCommand> = target
    .package_commands
    .iter()
    .map(|line| ShellCommand::new(line.as_str()).in_dir(&plan.output_dir))
    .collect();
  runner.run(&package)?;

  Ok(())
}

fn print_plan(plan: &ReleasePlan) {
  println!("📋 Release plan for {}", plan.dist_name);
  println!();
  println!("  Version:    {}", plan.metadata.version);
  println!("  Build time: {}", plan.metadata.build_time);
  println!("  Output dir: {}", plan.output_dir.display());
  println!();

  for target in &plan.targets {
    println!("  {} → {}", target.target, target.archive);
    println!("    {}", target.build_command);
    for line in &target.package_commands {
      println!("    {}", line);
    }
  }

  println!();
  println!("🔍 Dry-run mode (no commands executed)");
}

//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// A sandbox directory with stub build tools on PATH
///
/// The release run shells out to `go`, `zip` and `tar`. The stubs log every
/// invocation (with the GOOS/GOARCH they were given) into the sandbox and
/// fabricate the file a real toolchain would produce, so tests can assert the
/// full command sequence and the resulting artifact layout.
pub struct TestSandbox {
  _root: TempDir,
  pub path: PathBuf,
  pub bin_dir: PathBuf,
}

// Shared prologue: every stub invocation lands in a per-tool log.
const GO_LOG: &str = r#"#!/bin/sh
echo "GOOS=$GOOS GOARCH=$GOARCH $*" >> "$STUB_LOG_DIR/go.log"
"#;

// Creates the file named by `-o`, like `go build` would.
const GO_CREATE: &str = r#"out=""
prev=""
for arg in "$@"; do
  if [ "$prev" = "-o" ]; then
    out="$arg"
  fi
  prev="$arg"
done
if [ -n "$out" ]; then
  printf 'binary for %s/%s\n' "$GOOS" "$GOARCH" > "$out"
fi
"#;

// Invoked as `zip <archive> <artifact>` from the output directory.
const ZIP_STUB: &str = r#"#!/bin/sh
echo "$*" >> "$STUB_LOG_DIR/zip.log"
: > "$1"
"#;

// Invoked as `tar -czvf <archive> <artifact>` from the output directory.
const TAR_STUB: &str = r#"#!/bin/sh
echo "$*" >> "$STUB_LOG_DIR/tar.log"
shift
: > "$1"
"#;

impl TestSandbox {
  /// Create a sandbox with working `go`, `zip` and `tar` stubs installed
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    let bin_dir = path.join("stub-bin");
    std::fs::create_dir_all(&bin_dir)?;

    let sandbox = Self {
      _root: root,
      path,
      bin_dir,
    };
    sandbox.install_stub("go", &format!("{}{}", GO_LOG, GO_CREATE))?;
    sandbox.install_stub("zip", ZIP_STUB)?;
    sandbox.install_stub("tar", TAR_STUB)?;
    Ok(sandbox)
  }

  /// Replace the `go` stub with one that fails whenever GOOS matches `goos`
  pub fn fail_go_for(&self, goos: &str, code: i32) -> Result<()> {
    let script = format!(
      "{}if [ \"$GOOS\" = \"{}\" ]; then\n  exit {}\nfi\n{}",
      GO_LOG, goos, code, GO_CREATE
    );
    self.install_stub("go", &script)
  }

  /// Lines a stub appended to its log, empty if it never ran
  pub fn stub_log(&self, tool: &str) -> Vec<String> {
    let log = self.path.join(format!("{}.log", tool));
    std::fs::read_to_string(log)
      .map(|text| text.lines().map(String::from).collect())
      .unwrap_or_default()
  }

  pub fn file_exists(&self, path: &str) -> bool {
    self.path.join(path).exists()
  }

  fn install_stub(&self, name: &str, script: &str) -> Result<()> {
    let path = self.bin_dir.join(name);
    std::fs::write(&path, script).with_context(|| format!("Failed to write {} stub", name))?;

    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))?;
    Ok(())
  }
}

/// Run the slang-dist binary inside the sandbox, stubs first on PATH
pub fn run_slang_dist(sandbox: &TestSandbox, args: &[&str]) -> Result<Output> {
  let bin = env!("CARGO_BIN_EXE_slang-dist");
  let path_var = format!(
    "{}:{}",
    sandbox.bin_dir.display(),
    std::env::var("PATH").unwrap_or_default()
  );

  let output = Command::new(bin)
    .current_dir(&sandbox.path)
    .env("PATH", path_var)
    .env("STUB_LOG_DIR", &sandbox.path)
    .args(args)
    .output()
    .context("Failed to run slang-dist")?;

  Ok(output)
}

//! Platform targets of the fixed release matrix
//!
//! The matrix is compiled into the tool: three operating systems crossed with
//! two architectures, iterated OS-outer / arch-inner. Names follow the Go
//! toolchain (`GOOS`/`GOARCH`) spellings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target operating system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
  Darwin,
  Linux,
  Windows,
}

impl fmt::Display for Os {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Os::Darwin => "darwin",
      Os::Linux => "linux",
      Os::Windows => "windows",
    };
    write!(f, "{}", name)
  }
}

/// Target CPU architecture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
  #[serde(rename = "386")]
  I386,
  Amd64,
}

impl fmt::Display for Arch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Arch::I386 => "386",
      Arch::Amd64 => "amd64",
    };
    write!(f, "{}", name)
  }
}

/// An (operating system, architecture) pair from the release matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformTarget {
  pub os: Os,
  pub arch: Arch,
}

/// The six targets every release builds, in build order
pub const RELEASE_MATRIX: [PlatformTarget; 6] = [
  PlatformTarget { os: Os::Darwin, arch: Arch::I386 },
  PlatformTarget { os: Os::Darwin, arch: Arch::Amd64 },
  PlatformTarget { os: Os::Linux, arch: Arch::I386 },
  PlatformTarget { os: Os::Linux, arch: Arch::Amd64 },
  PlatformTarget { os: Os::Windows, arch: Arch::I386 },
  PlatformTarget { os: Os::Windows, arch: Arch::Amd64 },
];

impl PlatformTarget {
  /// Binary filename for this target: `{dist}-{os}-{arch}`, `.exe` on windows
  pub fn artifact_name(&self, dist: &str) -> String {
    let base = format!("{}-{}-{}", dist, self.os, self.arch);
    if self.os == Os::Windows {
      format!("{}.exe", base)
    } else {
      base
    }
  }

  /// Archive filename: the extension-free base plus `.zip` or `.tar.gz`
  pub fn archive_name(&self, dist: &str) -> String {
    let base = format!("{}-{}-{}", dist, self.os, self.arch);
    if self.os == Os::Windows {
      format!("{}.zip", base)
    } else {
      format!("{}.tar.gz", base)
    }
  }

  /// Shell command compressing the artifact into the archive
  pub fn compress_command(&self, dist: &str) -> String {
    let artifact = self.artifact_name(dist);
    let archive = self.archive_name(dist);
    if self.os == Os::Windows {
      format!("zip {} {}", archive, artifact)
    } else {
      format!("tar -czvf {} {}", archive, artifact)
    }
  }
}

impl fmt::Display for PlatformTarget {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.os, self.arch)
  }
}

//! Release machinery: metadata stamping, the target matrix, plan assembly
//!
//! # Core Invariants
//!
//! 1. **One metadata capture per invocation**
//!    - Version and build time are computed before the first target builds
//!    - Immutable afterwards; all six binaries carry identical stamps
//!
//! 2. **The matrix is fixed and ordered**
//!    - 3 operating systems × 2 architectures, OS-outer / arch-inner
//!    - Build and packaging side effects happen strictly in that order
//!
//! 3. **Plans are assembled before anything runs**
//!    - Every shell command of a run exists as a string up front
//!    - The same plan drives execution, `--dry-run` and `--json`

pub mod metadata;
pub mod plan;
pub mod target;

pub use metadata::{BuildMetadata, TimestampFormat};
pub use plan::{ReleasePlan, TargetPlan};
pub use target::{Arch, Os, PlatformTarget, RELEASE_MATRIX};

//! Integration tests for slang-dist
//!
//! Release tests drive the real binary inside sandbox directories with stub
//! build tools on PATH, so full runs are observable without a Go toolchain
//! installed. Bridge tests run against the library surface directly.

#[cfg(unix)]
mod helpers;

mod test_bridge;

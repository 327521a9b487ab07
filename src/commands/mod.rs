//! User-facing commands for slang-dist
//!
//! - **release**: cross-compile the daemon for the fixed OS/arch matrix and
//!   package each binary into a platform-appropriate archive

pub mod release;

pub use release::run_release;

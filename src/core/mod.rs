//! Core building blocks for slang-dist
//!
//! - **config**: release configuration and its observed-layout defaults
//! - **error**: unified error type with exit-code mapping

pub mod config;
pub mod error;

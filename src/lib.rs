//! Release packaging for the slang daemon, plus the transport shims that
//! connect operator implementations to the runtime
//!
//! The `slang-dist` binary drives [`commands::run_release`]; the rest is
//! library surface. [`bridge`] hosts the HTTP and line-pipe request shims an
//! embedding runtime wires a [`bridge::RequestHandler`] into.

pub mod bridge;
pub mod commands;
pub mod core;
pub mod release;
pub mod runner;

//! # ibmi-agent-telemetry
//!
//! Console logging setup for IBM i agent binaries, built on `tracing`
//! and `tracing-subscriber` with `RUST_LOG`-style filtering.

mod init;

pub use init::init_telemetry;

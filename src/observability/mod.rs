//! Structured logging setup for embedders.

pub mod init;

pub use init::init_tracing;

//! Logging utilities.
//!
//! Centralizes logger initialization. Everything else in the engine logs
//! through the standard `log` facade, so embedders that want a different
//! backend can skip [`init_logging`] and install their own.

mod init;

pub use init::{LoggingConfig, init_logging};

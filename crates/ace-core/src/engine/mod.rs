//! # Engine Module
//!
//! This module implements the stateful orchestration around the external
//! descriptor engine: the buffer directory that stages files between the two
//! processes, the subprocess invocation protocol, configuration, progress
//! reporting, and the engine-level error taxonomy.
//!
//! ## Architecture
//!
//! - **Buffer Management** ([`buffer`]) - Staging directory lifecycle, input
//!   staging, and cached-artifact reload
//! - **Process Invocation** ([`invoker`]) - Command-line construction, synchronous
//!   execution, and failure diagnostics
//! - **Configuration** ([`config`]) - Engine, basis, and buffer settings with a
//!   validating builder
//! - **Progress Monitoring** ([`progress`]) - Phase reporting callbacks
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod buffer;
pub mod config;
pub mod error;
pub mod invoker;
pub mod progress;

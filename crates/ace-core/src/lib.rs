//! # ACE Bridge Core Library
//!
//! An orchestration layer for computing atomic cluster expansion (ACE) descriptors
//! with an external Julia engine. The heavy numerical work happens out of process;
//! this crate owns the protocol around it: staging atomic structures into a buffer
//! directory, invoking the engine script, detecting and surfacing its failures, and
//! loading the numeric-array archive it produces.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`Structure`,
//!   `Descriptors`) and structure file I/O (extended XYZ).
//!
//! - **[`engine`]: The Logic Core.** This stateful layer orchestrates the exchange
//!   with the external process: the buffer directory lifecycle (`BufferDir`), the
//!   subprocess protocol (`ExternalEngine`), configuration, and progress reporting.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer.
//!   It ties the `engine` and `core` together into the complete stage-run-load
//!   pipeline and provides a simple entry point for end-users of the library.

pub mod core;
pub mod engine;
pub mod workflows;
